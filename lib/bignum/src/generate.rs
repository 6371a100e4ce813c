//! Random value and prime candidate generation.
//!
//! Every routine takes the randomness source as an explicit [`RngCore`]
//! capability; callers choose between a seeded generator and an
//! operating-system one. Candidate rejection is ordinary control flow here,
//! never an error: the searches retry silently until a candidate passes.

use rand::RngCore;

use crate::{
    bigint::BigInt,
    error::{Error, Result},
    limb::{Limb, SIGN_BIT},
};

/// Which way a structured prime search walks from its random start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Step downward.
    Previous,
    /// Step upward.
    Next,
}

/// The output of Gordon's strong prime algorithm.
///
/// `p` is the strong prime; `s`, `r`, `t` are the auxiliary primes with
/// `s | p + 1`, `r | p - 1`, and `t | r - 1`.
#[derive(Clone, Copy, Debug)]
pub struct StrongPrime<const N: usize> {
    /// The strong prime itself.
    pub p: BigInt<N>,
    /// Prime divisor of `p + 1`.
    pub s: BigInt<N>,
    /// Prime divisor of `p - 1`.
    pub r: BigInt<N>,
    /// Prime divisor of `r - 1`.
    pub t: BigInt<N>,
}

/// Fresh-seed retries granted to the strong prime search before it reports
/// exhaustion.
const STRONG_PRIME_ATTEMPTS: usize = 16;

impl<const N: usize> BigInt<N> {
    /// Generate a value of exactly `bits` random bits.
    ///
    /// Bit `bits - 1` is forced on so the requested bit length is achieved
    /// exactly (except for `bits == 1`, where the single bit stays random).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `bits` is zero or exceeds
    /// the capacity.
    pub fn random_bits<R: RngCore + ?Sized>(bits: usize, rng: &mut R) -> Result<Self> {
        let mut dwords = bits >> 5;
        let rem_bits = bits & 0x1F;
        if rem_bits != 0 {
            dwords += 1;
        }

        if dwords > N || bits == 0 {
            return Err(Error::InvalidArgument("number of required bits is not valid"));
        }

        let mut rand_bytes = alloc::vec![0u8; dwords * 4];
        rng.fill_bytes(&mut rand_bytes);

        let mut data = [0 as Limb; N];
        for (i, chunk) in rand_bytes.chunks_exact(4).enumerate() {
            data[i] = Limb::from(chunk[0])
                | Limb::from(chunk[1]) << 8
                | Limb::from(chunk[2]) << 16
                | Limb::from(chunk[3]) << 24;
        }

        if rem_bits != 0 {
            if bits != 1 {
                data[dwords - 1] |= 1 << (rem_bits - 1);
            }
            data[dwords - 1] &= Limb::MAX >> (Limb::BITS as usize - rem_bits);
        } else {
            data[dwords - 1] |= SIGN_BIT;
        }

        let mut out = Self::from_raw(data, dwords);
        out.normalize();
        Ok(out)
    }

    /// Generate a random probable prime of exactly `bits` bits.
    ///
    /// Unbounded retry: candidates are drawn, forced odd, and tested until
    /// one passes [`Self::is_probable_prime`] with the given confidence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `bits` is zero or exceeds
    /// the capacity.
    pub fn gen_pseudo_prime<R: RngCore + ?Sized>(
        bits: usize,
        confidence: usize,
        rng: &mut R,
    ) -> Result<Self> {
        loop {
            let mut result = Self::random_bits(bits, rng)?;
            result.set_bit(0); // make it odd

            if result.is_probable_prime(confidence, rng) {
                return Ok(result);
            }
        }
    }

    /// The largest probable prime below `self`, stepping by two from an
    /// adjusted odd start. Unbounded.
    pub fn prev_prime<R: RngCore + ?Sized>(&self, confidence: usize, rng: &mut R) -> Self {
        let two = Self::from(2u32);
        let step = if self.is_even() { Self::ONE } else { two };

        let mut big = *self - step;
        while !big.is_probable_prime(confidence, rng) {
            big = big - two;
        }
        big
    }

    /// The smallest probable prime above `self`, stepping by two from an
    /// adjusted odd start. Unbounded.
    pub fn next_prime<R: RngCore + ?Sized>(&self, confidence: usize, rng: &mut R) -> Self {
        let two = Self::from(2u32);
        let step = if self.is_even() { Self::ONE } else { two };

        let mut big = *self + step;
        while !big.is_probable_prime(confidence, rng) {
            big = big + two;
        }
        big
    }

    /// True when both `self` and `(self - 1) / 2` are probable primes.
    pub fn is_safe_prime<R: RngCore + ?Sized>(&self, confidence: usize, rng: &mut R) -> bool {
        self.is_probable_prime(confidence, rng)
            && ((*self - Self::ONE) / Self::from(2u32)).is_probable_prime(confidence, rng)
    }

    /// Generate a safe prime of roughly `bits` bits.
    ///
    /// Every safe prime above 7 is congruent to 11 modulo 12, so the search
    /// aligns its random start to the `12k - 1` residue class and steps by
    /// twelve, testing `p` and `(p - 1) / 2` at each stop. The search is
    /// unbounded; a descending walk that runs out of candidates below zero
    /// re-seeds itself with fresh randomness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `bits` is zero or exceeds
    /// the capacity.
    pub fn gen_safe_prime<R: RngCore + ?Sized>(
        bits: usize,
        confidence: usize,
        direction: Direction,
        rng: &mut R,
    ) -> Result<Self> {
        let one = Self::ONE;
        let two = Self::from(2u32);
        let twelve = Self::from(12u32);

        'restart: loop {
            let mut prime = Self::random_bits(bits, rng)?;
            if !prime.is_probable_prime(confidence, rng) {
                prime = prime.prev_prime(confidence, rng);
            }

            // Align to the 12k - 1 residue class.
            prime = match direction {
                Direction::Next => (prime - (prime % twelve) + twelve) - one,
                Direction::Previous => prime - (prime % twelve) - one,
            };

            loop {
                prime = match direction {
                    Direction::Previous => prime - twelve,
                    Direction::Next => prime + twelve,
                };
                if prime <= Self::ZERO {
                    continue 'restart;
                }

                let sophie_germain = (prime - one) / two;
                if prime.is_probable_prime(confidence, rng)
                    && sophie_germain.is_probable_prime(confidence, rng)
                {
                    return Ok(prime);
                }
            }
        }
    }

    /// Generate a random value of exactly `bits` bits with
    /// `gcd(value, self) == 1`. Unbounded retry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `bits` is zero or exceeds
    /// the capacity.
    pub fn gen_coprime<R: RngCore + ?Sized>(&self, bits: usize, rng: &mut R) -> Result<Self> {
        loop {
            let result = Self::random_bits(bits, rng)?;
            if result.gcd(self).is_one() {
                return Ok(result);
            }
        }
    }
}

/// True when `p` is a strong prime over the tuple `(s, r, t)`: all four are
/// probable primes and `s | p + 1`, `r | p - 1`, `t | r - 1`.
pub fn is_strong_prime<const N: usize, R: RngCore + ?Sized>(
    p: &BigInt<N>,
    s: &BigInt<N>,
    r: &BigInt<N>,
    t: &BigInt<N>,
    confidence: usize,
    rng: &mut R,
) -> bool {
    let one = BigInt::ONE;
    p.is_probable_prime(confidence, rng)
        && s.is_probable_prime(confidence, rng)
        && r.is_probable_prime(confidence, rng)
        && t.is_probable_prime(confidence, rng)
        && ((*p + one) % s).is_zero()
        && ((*p - one) % r).is_zero()
        && ((*r - one) % t).is_zero()
}

/// Generate a strong prime with Gordon's algorithm.
///
/// Auxiliary primes `s` and `t` are drawn at `bits` bits; `r = 1 + l * t`
/// is scanned for a prime; `p0 = 2 (s^(r-2) mod r) s - 1` seeds the final
/// search `p = p0 + 2jrs`, bounded at `max_iter` candidates. Exhausting the
/// bound retries with fresh randomness a fixed number of times before
/// failing.
///
/// # Errors
///
/// Returns [`Error::Exhausted`] when no strong prime is found within the
/// attempt budget, and [`Error::InvalidArgument`] when `bits` is zero or
/// exceeds the capacity.
pub fn gen_strong_prime<const N: usize, R: RngCore + ?Sized>(
    bits: usize,
    confidence: usize,
    max_iter: usize,
    rng: &mut R,
) -> Result<StrongPrime<N>> {
    let one = BigInt::<N>::ONE;
    let two = BigInt::<N>::from(2u32);

    for _ in 0..STRONG_PRIME_ATTEMPTS {
        let s = BigInt::<N>::random_bits(bits, rng)?.prev_prime(confidence, rng);
        let t = BigInt::<N>::random_bits(bits, rng)?.prev_prime(confidence, rng);

        // r = 1 + l * t, for the first l that makes it prime.
        let mut r = BigInt::<N>::from(4u32);
        let mut l = 1usize;
        while l <= t.bit_count() && !r.is_probable_prime(confidence, rng) {
            r = one + BigInt::<N>::from(l as u32) * t;
            l += 1;
        }

        let p0 = ((two * s.mod_pow(&(r - two), &r)?) * s) - one;
        let two_rs = (two * r) * s;

        for j in 1..=max_iter {
            let p = p0 + BigInt::<N>::from(j as u32) * two_rs;
            if is_strong_prime(&p, &s, &r, &t, 20, rng) {
                return Ok(StrongPrime { p, s, r, t });
            }
        }
    }

    Err(Error::Exhausted)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::bigint::I256;

    type I = I256;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5EED_CAFE)
    }

    #[test]
    fn random_bits_hits_the_requested_length() {
        let mut rng = rng();
        for bits in [2usize, 5, 31, 32, 33, 64, 100] {
            let value = I::random_bits(bits, &mut rng).unwrap();
            assert_eq!(value.bit_count(), bits, "requested {bits} bits");
        }
    }

    #[test]
    fn random_bits_rejects_bad_requests() {
        let mut rng = rng();
        assert!(I::random_bits(0, &mut rng).is_err());
        assert!(I::random_bits(I::BITS + 1, &mut rng).is_err());
    }

    #[test]
    fn pseudo_prime_generation() {
        let mut rng = rng();
        let prime = I::gen_pseudo_prime(48, 10, &mut rng).unwrap();
        assert!(prime.is_odd());
        assert_eq!(prime.bit_count(), 48);
        assert!(prime.is_bpsw_probable_prime());
    }

    #[test]
    fn prev_and_next_prime() {
        let mut rng = rng();
        assert_eq!(I::from(100u32).next_prime(10, &mut rng), I::from(101u32));
        assert_eq!(I::from(100u32).prev_prime(10, &mut rng), I::from(97u32));
        assert_eq!(I::from(7u32).next_prime(10, &mut rng), I::from(11u32));
        assert_eq!(I::from(7u32).prev_prime(10, &mut rng), I::from(5u32));
    }

    #[test]
    fn safe_prime_generation() {
        let mut rng = rng();
        let p = I::gen_safe_prime(24, 10, Direction::Previous, &mut rng).unwrap();

        assert!(p.is_safe_prime(10, &mut rng));
        assert_eq!((p % I::from(12u32)), I::from(11u32));

        let q = I::gen_safe_prime(24, 10, Direction::Next, &mut rng).unwrap();
        assert!(q.is_safe_prime(10, &mut rng));
    }

    #[test]
    fn known_safe_prime() {
        let mut rng = rng();
        // 23 = 2 * 11 + 1, both prime.
        assert!(I::from(23u32).is_safe_prime(10, &mut rng));
        assert!(!I::from(29u32).is_safe_prime(10, &mut rng));
    }

    #[test]
    fn strong_prime_generation() {
        let mut rng = rng();
        let strong = gen_strong_prime::<8, _>(10, 5, 4000, &mut rng).unwrap();

        assert!(strong.p.is_bpsw_probable_prime());
        assert!(((strong.p + I::ONE) % strong.s).is_zero());
        assert!(((strong.p - I::ONE) % strong.r).is_zero());
        assert!(((strong.r - I::ONE) % strong.t).is_zero());
    }

    #[test]
    fn coprime_generation() {
        let mut rng = rng();
        let base = I::from(3 * 5 * 7u32);
        let coprime = base.gen_coprime(16, &mut rng).unwrap();
        assert!(coprime.gcd(&base).is_one());
    }
}

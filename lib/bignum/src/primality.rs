//! Number-theoretic functions and primality tests.
//!
//! The probabilistic tests (Fermat, Rabin-Miller, Solovay-Strassen) draw
//! their random bases from an injected [`RngCore`] source; the combined
//! [`BigInt::is_bpsw_probable_prime`] test is deterministic, pairing a
//! base-2 strong pseudoprime test with a strong Lucas test after trial
//! division.

use rand::RngCore;

use crate::{
    bigint::BigInt,
    bits::BitIteratorBE,
    error::{Error, Result},
    modular::Barrett,
};

/// Primes below 2000, used for trial division before the expensive tests.
#[rustfmt::skip]
pub const PRIMES_BELOW_2000: [u32; 303] = [
       2,    3,    5,    7,   11,   13,   17,   19,   23,   29,   31,   37,   41,   43,   47,   53,   59,   61,   67,   71,
      73,   79,   83,   89,   97,  101,  103,  107,  109,  113,  127,  131,  137,  139,  149,  151,  157,  163,  167,  173,
     179,  181,  191,  193,  197,  199,  211,  223,  227,  229,  233,  239,  241,  251,  257,  263,  269,  271,  277,  281,
     283,  293,  307,  311,  313,  317,  331,  337,  347,  349,  353,  359,  367,  373,  379,  383,  389,  397,  401,  409,
     419,  421,  431,  433,  439,  443,  449,  457,  461,  463,  467,  479,  487,  491,  499,  503,  509,  521,  523,  541,
     547,  557,  563,  569,  571,  577,  587,  593,  599,  601,  607,  613,  617,  619,  631,  641,  643,  647,  653,  659,
     661,  673,  677,  683,  691,  701,  709,  719,  727,  733,  739,  743,  751,  757,  761,  769,  773,  787,  797,  809,
     811,  821,  823,  827,  829,  839,  853,  857,  859,  863,  877,  881,  883,  887,  907,  911,  919,  929,  937,  941,
     947,  953,  967,  971,  977,  983,  991,  997, 1009, 1013, 1019, 1021, 1031, 1033, 1039, 1049, 1051, 1061, 1063, 1069,
    1087, 1091, 1093, 1097, 1103, 1109, 1117, 1123, 1129, 1151, 1153, 1163, 1171, 1181, 1187, 1193, 1201, 1213, 1217, 1223,
    1229, 1231, 1237, 1249, 1259, 1277, 1279, 1283, 1289, 1291, 1297, 1301, 1303, 1307, 1319, 1321, 1327, 1361, 1367, 1373,
    1381, 1399, 1409, 1423, 1427, 1429, 1433, 1439, 1447, 1451, 1453, 1459, 1471, 1481, 1483, 1487, 1489, 1493, 1499, 1511,
    1523, 1531, 1543, 1549, 1553, 1559, 1567, 1571, 1579, 1583, 1597, 1601, 1607, 1609, 1613, 1619, 1621, 1627, 1637, 1657,
    1663, 1667, 1669, 1693, 1697, 1699, 1709, 1721, 1723, 1733, 1741, 1747, 1753, 1759, 1777, 1783, 1787, 1789, 1801, 1811,
    1823, 1831, 1847, 1861, 1867, 1871, 1873, 1877, 1879, 1889, 1901, 1907, 1913, 1931, 1933, 1949, 1951, 1973, 1979, 1987,
    1993, 1997, 1999,
];

/// How many Selfridge discriminant candidates to try between perfect-square
/// checks in the strong Lucas test. Empirical, not correctness-critical.
const SQUARE_CHECK_INTERVAL: usize = 20;

/// The three values produced by one Lucas sequence evaluation:
/// `U(k) mod n`, `V(k) mod n`, and `Q^k mod n`.
#[derive(Clone, Copy, Debug)]
pub struct LucasTriple<const N: usize> {
    /// `U(k) mod n`.
    pub u: BigInt<N>,
    /// `V(k) mod n`.
    pub v: BigInt<N>,
    /// `Q^k mod n`.
    pub q_k: BigInt<N>,
}

impl<const N: usize> BigInt<N> {
    /// Greatest common divisor of the absolute values, by iterated
    /// remainders.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut x = self.abs();
        let mut y = other.abs();

        let mut g = y;
        while !x.is_zero() {
            g = x;
            x = y % x;
            y = g;
        }
        g
    }

    /// Least common multiple: `|self * other| / gcd(self, other)`.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        let x = self.abs();
        let y = other.abs();
        (x * y) / x.gcd(&y)
    }

    /// True when some prime below 2000 divides `self` without being `self`
    /// itself.
    fn has_small_prime_factor(&self) -> bool {
        for &p in &PRIMES_BELOW_2000 {
            let divisor = Self::from(p);
            if divisor >= *self {
                break;
            }
            if (*self % divisor).is_zero() {
                return true;
            }
        }
        false
    }

    /// Draw a random base `a` with `2 <= bit-length(a) < bits` and `a > 1`.
    fn random_test_base<R: RngCore + ?Sized>(bits: usize, rng: &mut R) -> Self {
        loop {
            let test_bits = rng.next_u32() as usize % bits;
            if test_bits < 2 {
                continue;
            }
            let Ok(a) = Self::random_bits(test_bits, rng) else {
                continue;
            };
            if a > Self::ONE {
                return a;
            }
        }
    }

    /// Probabilistic primality test based on Fermat's little theorem:
    /// `a^(p-1) = 1 (mod p)` must hold for every base coprime to a prime
    /// `p`.
    ///
    /// Fast, but strong pseudoprimes to the chosen bases (notably Carmichael
    /// numbers) can fool it; `confidence` rounds are drawn from `rng`.
    pub fn fermat_little_test<R: RngCore + ?Sized>(&self, confidence: usize, rng: &mut R) -> bool {
        let (_, this_val) = self.sign_magnitude();

        if this_val.len == 1 {
            if this_val.data[0] == 0 || this_val.data[0] == 1 {
                return false;
            }
            if this_val.data[0] == 2 || this_val.data[0] == 3 {
                return true;
            }
        }
        if this_val.is_even() {
            return false;
        }

        let bits = this_val.bit_count();
        let p_sub1 = this_val - Self::ONE;

        for _ in 0..confidence {
            let a = Self::random_test_base(bits, rng);

            // A shared factor settles compositeness without exponentiating.
            let gcd_test = a.gcd(&this_val);
            if gcd_test.len == 1 && gcd_test.data[0] != 1 {
                return false;
            }

            let exp_result = a
                .mod_pow(&p_sub1, &this_val)
                .expect("capacity too small for modulus");
            if !exp_result.is_one() {
                return false;
            }
        }
        true
    }

    /// Probabilistic Rabin-Miller strong pseudoprime test.
    ///
    /// With `p - 1 = 2^s * t` and `t` odd, a prime must satisfy
    /// `a^t = 1 (mod p)` or `a^(2^j * t) = p - 1` for some `j < s`, for
    /// every base `a`.
    pub fn rabin_miller_test<R: RngCore + ?Sized>(&self, confidence: usize, rng: &mut R) -> bool {
        let (_, this_val) = self.sign_magnitude();

        if this_val.len == 1 {
            if this_val.data[0] == 0 || this_val.data[0] == 1 {
                return false;
            }
            if this_val.data[0] == 2 || this_val.data[0] == 3 {
                return true;
            }
        }
        if this_val.is_even() {
            return false;
        }

        let p_sub1 = this_val - Self::ONE;
        let s = p_sub1.trailing_zeros();
        let t = p_sub1 >> s;

        let bits = this_val.bit_count();

        for _ in 0..confidence {
            let a = Self::random_test_base(bits, rng);

            let gcd_test = a.gcd(&this_val);
            if gcd_test.len == 1 && gcd_test.data[0] != 1 {
                return false;
            }

            if !strong_pseudoprime_round(&a, &this_val, &p_sub1, &t, s) {
                return false;
            }
        }
        true
    }

    /// Probabilistic Solovay-Strassen test via the Euler criterion:
    /// `a^((p-1)/2) = J(a, p) (mod p)` for every base `a` not a multiple of
    /// a prime `p`.
    pub fn solovay_strassen_test<R: RngCore + ?Sized>(
        &self,
        confidence: usize,
        rng: &mut R,
    ) -> bool {
        let (_, this_val) = self.sign_magnitude();

        if this_val.len == 1 {
            if this_val.data[0] == 0 || this_val.data[0] == 1 {
                return false;
            }
            if this_val.data[0] == 2 || this_val.data[0] == 3 {
                return true;
            }
        }
        if this_val.is_even() {
            return false;
        }

        let bits = this_val.bit_count();
        let p_sub1 = this_val - Self::ONE;
        let p_sub1_shift = p_sub1 >> 1;

        for _ in 0..confidence {
            let a = Self::random_test_base(bits, rng);

            let gcd_test = a.gcd(&this_val);
            if gcd_test.len == 1 && gcd_test.data[0] != 1 {
                return false;
            }

            let mut exp_result = a
                .mod_pow(&p_sub1_shift, &this_val)
                .expect("capacity too small for modulus");
            if exp_result == p_sub1 {
                exp_result = Self::from(-1);
            }

            let jacob = jacobi(&a, &this_val).expect("modulus is odd here");
            if exp_result != Self::from(jacob) {
                return false;
            }
        }
        true
    }

    /// Strong Lucas pseudoprime test with Selfridge's parameter selection.
    ///
    /// Deterministic: the discriminant is the first of 5, -7, 9, -11, ...
    /// with Jacobi symbol -1.
    #[must_use]
    pub fn lucas_strong_test(&self) -> bool {
        let (_, this_val) = self.sign_magnitude();

        if this_val.len == 1 {
            if this_val.data[0] == 0 || this_val.data[0] == 1 {
                return false;
            }
            if this_val.data[0] == 2 || this_val.data[0] == 3 {
                return true;
            }
        }
        if this_val.is_even() {
            return false;
        }

        lucas_strong_test_helper(&this_val)
    }

    /// Probabilistic combined test: trial division by the primes below 2000,
    /// then `confidence` Rabin-Miller rounds.
    pub fn is_probable_prime<R: RngCore + ?Sized>(&self, confidence: usize, rng: &mut R) -> bool {
        let (_, this_val) = self.sign_magnitude();

        if this_val.has_small_prime_factor() {
            return false;
        }
        this_val.rabin_miller_test(confidence, rng)
    }

    /// Deterministic combined test: trial division by the primes below
    /// 2000, a base-2 strong pseudoprime test, then a strong Lucas test.
    /// Composite if any stage fails.
    #[must_use]
    pub fn is_bpsw_probable_prime(&self) -> bool {
        let (_, this_val) = self.sign_magnitude();

        if this_val.len == 1 {
            if this_val.data[0] == 0 || this_val.data[0] == 1 {
                return false;
            }
            if this_val.data[0] == 2 || this_val.data[0] == 3 {
                return true;
            }
        }
        if this_val.is_even() {
            return false;
        }

        if this_val.has_small_prime_factor() {
            return false;
        }

        // Base-2 Rabin-Miller round.
        let p_sub1 = this_val - Self::ONE;
        let s = p_sub1.trailing_zeros();
        let t = p_sub1 >> s;

        let base2 = Self::from(2u32);
        if !strong_pseudoprime_round(&base2, &this_val, &p_sub1, &t, s) {
            return false;
        }

        lucas_strong_test_helper(&this_val)
    }
}

/// One strong pseudoprime round: `a^t = 1` or `a^(2^j * t) = p - 1` for
/// some `j < s`.
fn strong_pseudoprime_round<const N: usize>(
    a: &BigInt<N>,
    p: &BigInt<N>,
    p_sub1: &BigInt<N>,
    t: &BigInt<N>,
    s: usize,
) -> bool {
    let mut b = a.mod_pow(t, p).expect("capacity too small for modulus");

    if b.is_one() {
        return true;
    }
    for _ in 0..s {
        if b == *p_sub1 {
            return true;
        }
        b = (b * b) % p;
    }
    false
}

/// Computes the Jacobi symbol `J(a, b)` for an odd `b`.
///
/// Recursive, factoring powers of two out of `a` and applying the
/// quadratic-reciprocity sign rules on `a mod 8` and `b mod 4`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `b` is even.
pub fn jacobi<const N: usize>(a: &BigInt<N>, b: &BigInt<N>) -> Result<i32> {
    // Jacobi defined only for odd integers.
    if b.is_even() {
        return Err(Error::InvalidArgument("Jacobi defined only for odd integers"));
    }

    let mut a = *a;
    if a >= *b {
        a = a % b;
    }
    if a.is_zero() {
        return Ok(0);
    }
    if a.is_one() {
        return Ok(1);
    }

    if a < BigInt::ZERO {
        let flip = (*b - BigInt::ONE).data[0] & 0x2 != 0;
        let inner = jacobi(&-a, b)?;
        return Ok(if flip { -inner } else { inner });
    }

    let e = a.trailing_zeros();
    let a1 = a >> e;

    let mut s = 1;
    if e & 1 != 0 && (b.data[0] & 0x7 == 3 || b.data[0] & 0x7 == 5) {
        s = -1;
    }
    if b.data[0] & 0x3 == 3 && a1.data[0] & 0x3 == 3 {
        s = -s;
    }

    if a1.is_one() {
        Ok(s)
    } else {
        Ok(s * jacobi(&(*b % a1), &a1)?)
    }
}

/// Returns the `k`-th element of the Lucas sequence with parameters
/// `(p, q)`, reduced modulo `n`.
///
/// Index doubling over the bits of the odd part of `k` produces
/// `(U(k), V(k), Q^k) mod n` in `O(log k)` modular multiplications, with
/// Barrett reduction backing the squarings.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] for a zero modulus and
/// [`Error::Overflow`] when the capacity cannot hold the reduction's
/// doubled working width.
pub fn lucas_sequence<const N: usize>(
    p: &BigInt<N>,
    q: &BigInt<N>,
    k: &BigInt<N>,
    n: &BigInt<N>,
) -> Result<LucasTriple<N>> {
    if k.is_zero() {
        return Ok(LucasTriple {
            u: BigInt::ZERO,
            v: BigInt::from(2u32) % n,
            q_k: BigInt::ONE % n,
        });
    }

    let barrett = Barrett::new(n)?;

    let s = k.trailing_zeros();
    let t = *k >> s;

    lucas_sequence_helper(p, q, &t, n, &barrett, s)
}

/// Index-doubling core of the Lucas sequence. `k` must be odd; `s` extra
/// doublings are applied at the end.
fn lucas_sequence_helper<const N: usize>(
    p: &BigInt<N>,
    q: &BigInt<N>,
    k: &BigInt<N>,
    n: &BigInt<N>,
    barrett: &Barrett<N>,
    s: usize,
) -> Result<LucasTriple<N>> {
    if k.is_even() {
        return Err(Error::InvalidArgument("the Lucas index must be odd"));
    }

    let p = *p;
    let q = *q;

    // v = V(i), v1 = V(i+1), u1 = U(i+1), q_k = Q^i.
    let mut v = BigInt::from(2u32) % n;
    let mut q_k = BigInt::ONE % n;
    let mut v1 = p % n;
    let mut u1 = q_k;
    let mut flag = true;

    // Walk the bits of k from the most significant down, excluding the
    // final (always set) bit.
    let num_bits = k.bit_count();
    for bit in k.bit_be_trimmed_iter().take(num_bits - 1) {
        if bit {
            // Index doubling with addition.
            u1 = (u1 * v1) % n;

            v = (v * v1 - p * q_k) % n;
            v1 = barrett.reduce(&(v1 * v1));
            v1 = (v1 - ((q_k * q) << 1)) % n;

            if flag {
                flag = false;
            } else {
                q_k = barrett.reduce(&(q_k * q_k));
            }
            q_k = (q_k * q) % n;
        } else {
            // Index doubling.
            u1 = (u1 * v - q_k) % n;

            v1 = (v * v1 - p * q_k) % n;
            v = barrett.reduce(&(v * v));
            v = (v - (q_k << 1)) % n;

            if flag {
                q_k = q % n;
                flag = false;
            } else {
                q_k = barrett.reduce(&(q_k * q_k));
            }
        }
    }

    // The last bit is always set: transform U(i+1) to U(2i+1) and V(i) to
    // V(2i+1).
    u1 = (u1 * v - q_k) % n;
    v = (v * v1 - p * q_k) % n;
    if flag {
        flag = false;
    } else {
        q_k = barrett.reduce(&(q_k * q_k));
    }
    q_k = (q_k * q) % n;

    for _ in 0..s {
        // Index doubling.
        u1 = (u1 * v) % n;
        v = (v * v - (q_k << 1)) % n;

        if flag {
            q_k = q % n;
            flag = false;
        } else {
            q_k = barrett.reduce(&(q_k * q_k));
        }
    }

    Ok(LucasTriple { u: u1, v, q_k })
}

/// Strong Lucas test body. `this_val` is odd, positive, and at least 5.
fn lucas_strong_test_helper<const N: usize>(this_val: &BigInt<N>) -> bool {
    // Let D be the first element of the sequence 5, -7, 9, -11, 13, ... for
    // which J(D, n) = -1, with P = 1 and Q = (1 - D) / 4 (Selfridge).
    let mut d: i32 = 5;
    let mut sign: i32 = -1;
    let mut d_count = 0;

    loop {
        let j_result = jacobi(&BigInt::<N>::from(d), this_val).expect("modulus is odd here");
        if j_result == -1 {
            break;
        }

        if j_result == 0 && BigInt::<N>::from(d.abs()) < *this_val {
            // A divisor of n turned up.
            return false;
        }

        if d_count == SQUARE_CHECK_INTERVAL {
            // A perfect square has no discriminant with J(D, n) = -1; stop
            // scanning forever.
            let root = this_val.sqrt();
            if root * root == *this_val {
                return false;
            }
        }

        d = (d.abs() + 2) * sign;
        sign = -sign;
        d_count += 1;
    }

    let q = (1 - d) >> 2;

    let p_add1 = *this_val + BigInt::ONE;
    let s = p_add1.trailing_zeros();
    let t = p_add1 >> s;

    let barrett = Barrett::new(this_val).expect("capacity too small for modulus");

    let q_big = BigInt::<N>::from(q);
    let lucas = lucas_sequence_helper(&BigInt::ONE, &q_big, &t, this_val, &barrett, 0)
        .expect("odd part of n + 1 is odd");

    let mut is_prime = lucas.u.is_zero() || lucas.v.is_zero();

    let mut v = lucas.v;
    let mut q_k = lucas.q_k;
    for _ in 1..s {
        if !is_prime {
            // Doubling of index: V(2i) = V(i)^2 - 2 Q^i.
            v = barrett.reduce(&(v * v));
            v = (v - (q_k << 1)) % this_val;
            if v.is_zero() {
                is_prime = true;
            }
        }
        q_k = barrett.reduce(&(q_k * q_k));
    }

    if is_prime {
        // Selfridge congruence check on Q^((n+1)/2): for a prime n with
        // gcd(n, Q) = 1, Q^((n+1)/2) = Q * J(Q, n) (mod n).
        let g = this_val.gcd(&q_big);
        if g.len == 1 && g.data[0] == 1 {
            if q_k.is_negative() {
                q_k = q_k + this_val;
            }

            let jac = jacobi(&q_big, this_val).expect("modulus is odd here");
            let mut temp = (q_big * BigInt::<N>::from(jac)) % this_val;
            if temp.is_negative() {
                temp = temp + this_val;
            }

            if q_k != temp {
                is_prime = false;
            }
        }
    }

    is_prime
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::bigint::I256;

    type I = I256;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xB16_1234)
    }

    fn num(value: i64) -> I {
        I::try_from(value).unwrap()
    }

    #[test]
    fn gcd_lcm_scenarios() {
        assert_eq!(num(48).gcd(&num(18)), num(6));
        assert_eq!(num(4).lcm(&num(6)), num(12));
        assert_eq!(num(0).gcd(&num(5)), num(5));
        assert_eq!(num(-48).gcd(&num(18)), num(6));
    }

    #[test]
    fn gcd_times_lcm_is_product() {
        proptest!(|(a in 1i64.., b in 1i64..)| {
            let (x, y) = (num(a), num(b));
            let g = x.gcd(&y);
            let l = x.lcm(&y);
            prop_assert_eq!(g * l, (x * y).abs());
        });
    }

    #[test]
    fn jacobi_fixtures() {
        let cases: &[(i64, i64, i32)] = &[
            (2, 9, 1),
            (5, 9, 1),
            (2, 15, 1),
            (5, 15, 0),
            (7, 15, -1),
            (26, 15, -1),
            (2, 21, -1),
            (5, 21, 1),
            (10, 21, -1),
            (2, 1001, 1),
            (7, 1001, 0),
            (-5, 9, 1),
            (1236, 20003, 1),
        ];
        for &(a, b, expected) in cases {
            assert_eq!(jacobi(&num(a), &num(b)).unwrap(), expected, "J({a}, {b})");
        }
        assert!(jacobi(&num(3), &num(10)).is_err());
    }

    #[test]
    fn lucas_sequence_fixtures() {
        // P = 1, Q = -1 generates the Fibonacci and Lucas numbers.
        let n = num(100_000);
        let triple = lucas_sequence(&num(1), &num(-1), &num(9), &n).unwrap();
        assert_eq!(triple.u, num(34));
        assert_eq!(triple.v, num(76));

        let triple = lucas_sequence(&num(1), &num(-1), &num(12), &n).unwrap();
        assert_eq!(triple.u, num(144));
        assert_eq!(triple.v, num(322));

        // P = 3, Q = 2 gives U(k) = 2^k - 1 and V(k) = 2^k + 1.
        let triple = lucas_sequence(&num(3), &num(2), &num(10), &n).unwrap();
        assert_eq!(triple.u, num(1023));
        assert_eq!(triple.v, num(1025));
        assert_eq!(triple.q_k, num(1024));

        // k = 0 is the base case.
        let triple = lucas_sequence(&num(1), &num(-1), &num(0), &n).unwrap();
        assert_eq!(triple.u, I::ZERO);
        assert_eq!(triple.v, num(2));
    }

    #[test]
    fn combined_test_matches_sieve_below_10000() {
        let mut is_composite = [false; 10_000];
        for i in 2..100 {
            if !is_composite[i] {
                let mut j = i * i;
                while j < 10_000 {
                    is_composite[j] = true;
                    j += i;
                }
            }
        }

        for n in 2..10_000usize {
            let expected = !is_composite[n];
            assert_eq!(
                I::from(n as u32).is_bpsw_probable_prime(),
                expected,
                "combined test disagrees with the sieve at {n}"
            );
        }
    }

    #[test]
    fn combined_test_rejects_known_pseudoprimes() {
        // 561 is a Carmichael number, 2047 = 23 * 89 is a base-2 strong
        // pseudoprime; both must come back composite.
        assert!(!num(561).is_bpsw_probable_prime());
        assert!(!num(2047).is_bpsw_probable_prime());
        assert!(!num(1_373_653).is_bpsw_probable_prime()); // strong to bases 2 and 3
    }

    #[test]
    fn combined_test_is_stable_across_calls() {
        for _ in 0..50 {
            assert!(num(7919).is_bpsw_probable_prime());
        }
    }

    #[test]
    fn combined_test_large_prime() {
        // 2^61 - 1 is a Mersenne prime.
        let m61 = I::try_from((1i64 << 61) - 1).unwrap();
        assert!(m61.is_bpsw_probable_prime());
        assert!(!(m61 - I::ONE).checked_mul(&m61).unwrap().is_bpsw_probable_prime());
    }

    #[test]
    fn probabilistic_tests_agree_on_small_numbers() {
        let mut rng = rng();
        for n in [2i64, 3, 5, 17, 101, 7919, 104_729] {
            let value = num(n);
            assert!(value.is_probable_prime(10, &mut rng), "{n} is prime");
            assert!(value.rabin_miller_test(10, &mut rng), "{n} is prime");
            assert!(value.fermat_little_test(10, &mut rng), "{n} is prime");
            assert!(value.solovay_strassen_test(10, &mut rng), "{n} is prime");
            assert!(value.lucas_strong_test(), "{n} is prime");
        }
        for n in [0i64, 1, 4, 15, 91, 561, 2047, 123_456_789] {
            let value = num(n);
            assert!(!value.is_probable_prime(10, &mut rng), "{n} is composite");
            assert!(!value.rabin_miller_test(10, &mut rng), "{n} is composite");
            assert!(!value.solovay_strassen_test(10, &mut rng), "{n} is composite");
        }
    }

    #[test]
    fn negative_values_test_their_magnitude() {
        let mut rng = rng();
        assert!(num(-17).is_probable_prime(10, &mut rng));
        assert!(num(-17).is_bpsw_probable_prime());
        assert!(!num(-15).is_bpsw_probable_prime());
    }
}

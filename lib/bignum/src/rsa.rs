//! RSA key material assembly and CRT-accelerated private exponentiation.
//!
//! The arithmetic core stops at this record: serialization containers and
//! the block cipher pipeline live outside the crate and consume it through
//! [`BigInt::mod_pow`], [`RsaKeyMaterial::crt_mod_pow`], and the byte
//! codec.

use rand::RngCore;
use zeroize::Zeroize;

use crate::{
    bigint::BigInt,
    error::Result,
    generate::Direction,
};

/// A complete RSA key record: modulus, both exponents, the prime factors,
/// and the precomputed CRT values.
///
/// Plain data owned by the caller; nothing in the crate holds key state.
#[derive(Clone, Zeroize)]
pub struct RsaKeyMaterial<const N: usize> {
    /// Modulus `n = p * q`.
    pub n: BigInt<N>,
    /// Public exponent.
    pub e: BigInt<N>,
    /// Private exponent `d = e^-1 mod lcm(p - 1, q - 1)`.
    pub d: BigInt<N>,
    /// First prime factor.
    pub p: BigInt<N>,
    /// Second prime factor.
    pub q: BigInt<N>,
    /// `d mod (p - 1)`.
    pub dp: BigInt<N>,
    /// `d mod (q - 1)`.
    pub dq: BigInt<N>,
    /// `q^-1 mod p`.
    pub qinv: BigInt<N>,
}

impl<const N: usize> RsaKeyMaterial<N> {
    /// Generate a fresh key pair with a modulus of roughly `bits` bits.
    ///
    /// Both prime factors are safe primes of `bits / 2` bits, drawn from
    /// `rng` and guaranteed distinct; the public exponent is drawn coprime
    /// to `lcm(p - 1, q - 1)`.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::InvalidArgument`] for an unusable bit
    /// count and [`crate::Error::Overflow`] when the capacity cannot hold
    /// the working width of the searches.
    pub fn generate<R: RngCore + ?Sized>(
        bits: usize,
        confidence: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let one = BigInt::ONE;
        let half = bits / 2;

        let p = BigInt::gen_safe_prime(half, confidence, Direction::Previous, rng)?;
        let mut q = p;
        while q == p {
            q = BigInt::gen_safe_prime(half, confidence, Direction::Previous, rng)?;
        }

        let n = p.checked_mul(&q)?;

        let lambda = (p - one).lcm(&(q - one));
        let e = lambda.gen_coprime(half, rng)?;
        let d = e.mod_inverse(&lambda)?;

        let dp = d % (p - one);
        let dq = d % (q - one);
        let qinv = q.mod_inverse(&p)?;

        Ok(Self { n, e, d, p, q, dp, dq, qinv })
    }

    /// Raw public operation: `value^e mod n`.
    ///
    /// # Errors
    ///
    /// Propagates the [`BigInt::mod_pow`] errors.
    pub fn encrypt(&self, value: &BigInt<N>) -> Result<BigInt<N>> {
        value.mod_pow(&self.e, &self.n)
    }

    /// Raw private operation: `value^d mod n`, by direct exponentiation.
    ///
    /// # Errors
    ///
    /// Propagates the [`BigInt::mod_pow`] errors.
    pub fn decrypt(&self, value: &BigInt<N>) -> Result<BigInt<N>> {
        value.mod_pow(&self.d, &self.n)
    }

    /// Raw private operation via the Chinese Remainder Theorem.
    ///
    /// Two half-width exponentiations plus a recombination, two to three
    /// times faster than [`Self::decrypt`] and identical in result for
    /// every valid input:
    ///
    /// ```text
    /// m_p = c^dP mod p
    /// m_q = c^dQ mod q
    /// h   = qInv * (m_p - m_q) mod p
    /// m   = m_q + h * q mod n
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates the [`BigInt::mod_pow`] errors.
    pub fn crt_mod_pow(&self, value: &BigInt<N>) -> Result<BigInt<N>> {
        let m_p = value.mod_pow(&self.dp, &self.p)?;
        let m_q = value.mod_pow(&self.dq, &self.q)?;

        // Lift m_p above m_q before subtracting, so the difference stays
        // non-negative.
        let adjustment = if m_p < m_q {
            ((self.q - (self.q % self.p)) / self.p + BigInt::ONE) * self.p
        } else {
            BigInt::ZERO
        };

        let h = (self.qinv * (m_p + adjustment - m_q)) % self.p;
        Ok((m_q + h * self.q) % self.n)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::bigint::I256;

    type I = I256;

    /// The classic worked example: p = 61, q = 53, e = 17.
    fn textbook_key() -> RsaKeyMaterial<8> {
        let p = I::from(61u32);
        let q = I::from(53u32);
        let n = p * q;
        let lambda = (p - I::ONE).lcm(&(q - I::ONE)); // 780
        let e = I::from(17u32);
        let d = e.mod_inverse(&lambda).unwrap(); // 413
        RsaKeyMaterial {
            n,
            e,
            d,
            p,
            q,
            dp: d % (p - I::ONE),
            dq: d % (q - I::ONE),
            qinv: q.mod_inverse(&p).unwrap(),
        }
    }

    #[test]
    fn textbook_round_trip() {
        let key = textbook_key();
        assert_eq!(key.n, I::from(3233u32));
        assert_eq!(key.d, I::from(413u32));

        let message = I::from(65u32);
        let cipher = key.encrypt(&message).unwrap();
        assert_eq!(cipher, I::from(2790u32));
        assert_eq!(key.decrypt(&cipher).unwrap(), message);
        assert_eq!(key.crt_mod_pow(&cipher).unwrap(), message);
    }

    #[test]
    fn crt_equals_direct_path() {
        let key = textbook_key();
        for m in 0u32..200 {
            let value = I::from(m);
            assert_eq!(
                key.crt_mod_pow(&value).unwrap(),
                key.decrypt(&value).unwrap(),
                "CRT mismatch at {m}"
            );
        }
    }
}

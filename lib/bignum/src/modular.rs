//! Barrett reduction, modular exponentiation, and the modular inverse.

use crate::{
    bigint::BigInt,
    error::{Error, Result},
    limb::{self, Limb},
};

/// Reduction context for a fixed positive modulus.
///
/// Precomputes `constant = b^(2k) / modulus` once (`b = 2^32`, `k` the
/// modulus limb length) and reuses it across repeated reductions of values
/// below `b^(2k)`, replacing a full division with two truncated
/// multiplications and a short correction loop.
pub(crate) struct Barrett<const N: usize> {
    modulus: BigInt<N>,
    constant: BigInt<N>,
}

impl<const N: usize> Barrett<N> {
    /// Build a reduction context for `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for a zero modulus and
    /// [`Error::Overflow`] when the capacity cannot hold the doubled
    /// working width `b^(2k)`.
    pub(crate) fn new(modulus: &BigInt<N>) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let k = modulus.len;
        if 2 * k + 2 >= N {
            return Err(Error::Overflow);
        }

        let mut constant = BigInt::ZERO;
        constant.data[k << 1] = 1;
        constant.len = (k << 1) + 1;
        let constant = constant / *modulus;

        Ok(Self { modulus: *modulus, constant })
    }

    /// Reduce `x` modulo the context's modulus.
    ///
    /// Requires `0 <= x < b^(2k)`, which holds for any product of two values
    /// already reduced by this context.
    pub(crate) fn reduce(&self, x: &BigInt<N>) -> BigInt<N> {
        let n = &self.modulus;
        let k = n.len;
        let k_plus_one = k + 1;
        let k_minus_one = k - 1;

        // q1 = x / b^(k-1)
        let mut q1 = BigInt::ZERO;
        if x.len > k_minus_one {
            let width = x.len - k_minus_one;
            q1.data[..width].copy_from_slice(&x.data[k_minus_one..x.len]);
            q1.len = width;
        }

        let q2 = q1 * self.constant;

        // q3 = q2 / b^(k+1)
        let mut q3: BigInt<N> = BigInt::ZERO;
        if q2.len > k_plus_one {
            let width = q2.len - k_plus_one;
            q3.data[..width].copy_from_slice(&q2.data[k_plus_one..q2.len]);
            q3.len = width;
        }

        // r1 = x mod b^(k+1), i.e. keep the lowest k + 1 limbs.
        let mut r1 = BigInt::ZERO;
        let length_to_copy = x.len.min(k_plus_one);
        r1.data[..length_to_copy].copy_from_slice(&x.data[..length_to_copy]);
        r1.len = length_to_copy;

        // r2 = (q3 * n) mod b^(k+1): partial multiplication truncated at
        // k + 1 limbs.
        let mut r2 = BigInt::ZERO;
        for i in 0..q3.len {
            if q3.data[i] == 0 {
                continue;
            }

            let mut carry: Limb = 0;
            let mut t = i;
            for j in 0..n.len {
                if t >= k_plus_one {
                    break;
                }
                let (lo, hi) = limb::carrying_mac(r2.data[t], q3.data[i], n.data[j], carry);
                r2.data[t] = lo;
                carry = hi;
                t += 1;
            }
            if t < k_plus_one {
                r2.data[t] = carry;
            }
        }
        r2.len = k_plus_one;
        r2.normalize();

        let mut r1 = r1 - r2;
        if r1.is_negative() {
            let mut correction = BigInt::ZERO;
            correction.data[k_plus_one] = 1;
            correction.len = k_plus_one + 1;
            r1 = r1 + correction;
        }

        while r1 >= *n {
            r1 = r1 - n;
        }

        r1
    }
}

impl<const N: usize> BigInt<N> {
    /// Modular exponentiation: `self` raised to `exp`, reduced modulo `n`.
    ///
    /// The base is reduced modulo `|n|` first, then square-and-multiply runs
    /// bit by bit over the exponent with Barrett reduction after every
    /// multiply and square, exiting early once the running square reaches
    /// one. For a non-negative base the result lies in `[0, |n|)`; a
    /// negative base with an odd exponent negates the result before
    /// returning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a negative exponent,
    /// [`Error::DivisionByZero`] for a zero modulus, and
    /// [`Error::Overflow`] when the capacity cannot hold the reduction's
    /// doubled working width for this modulus.
    pub fn mod_pow(&self, exp: &Self, n: &Self) -> Result<Self> {
        if exp.is_negative() {
            return Err(Error::InvalidArgument("positive exponents only"));
        }

        let (_, n) = n.sign_magnitude();
        if n.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let base_negative = self.is_negative();
        let mut temp_num = if base_negative {
            self.checked_neg()? % n
        } else {
            *self % n
        };

        let barrett = Barrett::new(&n)?;
        let negate_result = base_negative && exp.is_odd();

        let mut result_num = Self::ONE;
        let total_bits = exp.bit_count();
        let mut count = 0;

        'outer: for pos in 0..exp.len {
            let mut mask: Limb = 1;
            for _ in 0..Limb::BITS {
                if exp.data[pos] & mask != 0 {
                    result_num = barrett.reduce(&(result_num * temp_num));
                }
                mask = mask.wrapping_shl(1);

                temp_num = barrett.reduce(&(temp_num * temp_num));

                // Further squarings cannot change a running square of one.
                if temp_num.is_one() {
                    break 'outer;
                }
                count += 1;
                if count == total_bits {
                    break 'outer;
                }
            }
        }

        if negate_result {
            return result_num.checked_neg();
        }
        Ok(result_num)
    }

    /// Modular inverse: the least non-negative `x` with
    /// `self * x = 1 (mod modulus)`.
    ///
    /// Iterative extended Euclid, tracking one running coefficient sequence
    /// alongside the quotient/remainder pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoInverse`] when `gcd(self, modulus) != 1`.
    pub fn mod_inverse(&self, modulus: &Self) -> Result<Self> {
        let mut p0 = Self::ZERO;
        let mut p1 = Self::ONE;
        let mut q0 = Self::ZERO;
        let mut q1 = Self::ZERO;
        let mut r0 = Self::ZERO;
        let mut r1 = Self::ZERO;

        let mut a = *modulus;
        let mut b = *self;
        let mut step = 0;

        while !b.is_zero() {
            if step > 1 {
                let pval = (p0 - p1 * q0) % modulus;
                p0 = p1;
                p1 = pval;
            }

            let (quotient, remainder) = a.checked_div_rem(&b)?;

            q0 = q1;
            r0 = r1;
            q1 = quotient;
            r1 = remainder;

            a = b;
            b = remainder;
            step += 1;
        }

        if !r0.is_one() {
            return Err(Error::NoInverse);
        }

        let mut result = (p0 - p1 * q0) % modulus;
        if result.is_negative() {
            // Normalize to the least positive representative.
            result = result + modulus;
        }
        Ok(result)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use super::*;
    use crate::bigint::{I256, I64};

    type I = I256;

    fn oracle<const N: usize>(value: &BigInt<N>) -> BigUint {
        value.to_string().parse().unwrap()
    }

    #[test]
    fn barrett_reduce_matches_rem() {
        // The reduction requires x < b^(2k); drawing a two-limb modulus and
        // at most a 15-byte value keeps that invariant.
        proptest!(|(x_bytes in proptest::collection::vec(any::<u8>(), 1..16),
                    n_bytes in proptest::collection::vec(any::<u8>(), 5..=8))| {
            let x = I::from_bytes_be(&x_bytes).unwrap();
            let n = I::from_bytes_be(&n_bytes).unwrap();
            prop_assume!(n.bit_count() > 32);

            let barrett = Barrett::new(&n).unwrap();
            prop_assert_eq!(barrett.reduce(&x), x % n);
        });
    }

    #[test]
    fn mod_pow_matches_oracle() {
        proptest!(|(base: u32, exp in 0u32..1000, modulus in 2u32..)| {
            let result = I::from(base)
                .mod_pow(&I::from(exp), &I::from(modulus))
                .unwrap();
            let expected = BigUint::from(base).modpow(&BigUint::from(exp), &BigUint::from(modulus));
            prop_assert_eq!(oracle(&result), expected);
            prop_assert!(result < I::from(modulus));
            prop_assert!(!result.is_negative());
        });
    }

    #[test]
    fn mod_pow_wide_operands() {
        use crate::bigint::I512;

        let base: I512 = crate::from_num!("123456789012345678901234567890");
        let exp: I512 = crate::from_num!("987654321");
        let n: I512 = crate::from_num!("340282366920938463463374607431768211507");
        let result = base.mod_pow(&exp, &n).unwrap();

        let ob: BigUint = "123456789012345678901234567890".parse().unwrap();
        let oe: BigUint = "987654321".parse().unwrap();
        let on: BigUint = "340282366920938463463374607431768211507".parse().unwrap();
        assert_eq!(oracle(&result), ob.modpow(&oe, &on));
    }

    #[test]
    fn mod_pow_carmichael_congruence() {
        // 561 = 3 * 11 * 17 is a Carmichael number: the Fermat congruence
        // holds for every coprime base even though 561 is composite.
        let n = I::from(561u32);
        let exp = I::from(560u32);
        assert_eq!(I::from(2u32).mod_pow(&exp, &n).unwrap(), I::ONE);
        assert_eq!(I::from(7u32).mod_pow(&exp, &n).unwrap(), I::ONE);
    }

    #[test]
    fn mod_pow_negative_base() {
        // (-4)^3 mod 9: the magnitude is exponentiated, then negated.
        let result = I::from(-4).mod_pow(&I::from(3u32), &I::from(9u32)).unwrap();
        assert_eq!(result, I::from(-1));
        // Even exponents lose the sign.
        let result = I::from(-4).mod_pow(&I::from(2u32), &I::from(9u32)).unwrap();
        assert_eq!(result, I::from(7u32));
    }

    #[test]
    fn mod_pow_rejects_negative_exponent() {
        assert_eq!(
            I::from(2u32).mod_pow(&I::from(-1), &I::from(5u32)),
            Err(Error::InvalidArgument("positive exponents only"))
        );
    }

    #[test]
    fn mod_pow_rejects_undersized_capacity() {
        // A 64-bit capacity cannot hold the doubled working width of a
        // two-limb modulus.
        let n = I64::try_from(0x1_0000_0001u64).unwrap();
        assert_eq!(I64::from(2u32).mod_pow(&I64::from(3u32), &n), Err(Error::Overflow));
    }

    #[test]
    fn mod_inverse_round_trip() {
        proptest!(|(a in 2u32.., m in 3u32..)| {
            let a_num = I::from(a);
            let m_num = I::from(m);
            match a_num.mod_inverse(&m_num) {
                Ok(inv) => {
                    prop_assert_eq!((a_num * inv) % m_num, I::ONE % m_num);
                    prop_assert!(!inv.is_negative());
                    prop_assert!(inv < m_num);
                }
                Err(e) => {
                    prop_assert_eq!(e, Error::NoInverse);
                    prop_assert!(!a_num.gcd(&m_num).is_one());
                }
            }
        });
    }

    #[test]
    fn mod_inverse_examples() {
        assert_eq!(I::from(17u32).mod_inverse(&I::from(780u32)).unwrap(), I::from(413u32));
        assert_eq!(I::from(4u32).mod_inverse(&I::from(8u32)), Err(Error::NoInverse));
    }
}

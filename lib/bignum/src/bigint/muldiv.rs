//! Multiplication, division, exponentiation, and the integer square root.

use alloc::vec::Vec;
use core::{
    borrow::Borrow,
    ops::{Div, Mul, Rem},
};

use crate::{
    bigint::{
        ops::{shift_left_slice, shift_right_slice},
        BigInt,
    },
    error::{Error, Result},
    limb::{self, Limb, WideLimb, SIGN_BIT},
};

impl<const N: usize> BigInt<N> {
    /// Schoolbook multiplication of the operands' absolute values, with the
    /// sign restored afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when the product does not fit the
    /// capacity. The single two's-complement pattern where operands of
    /// differing sign produce exactly the most negative representable value
    /// is accepted, since that value has no positive counterpart to negate.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        let last = N - 1;
        let (lhs_neg, a) = self.sign_magnitude();
        let (rhs_neg, b) = rhs.sign_magnitude();

        let mut result = Self::ZERO;
        for i in 0..a.len {
            if a.data[i] == 0 {
                continue;
            }

            let mut carry: Limb = 0;
            for j in 0..b.len {
                let k = i + j;
                if k >= N {
                    return Err(Error::Overflow);
                }
                let (lo, hi) = limb::carrying_mac(result.data[k], a.data[i], b.data[j], carry);
                result.data[k] = lo;
                carry = hi;
            }

            if carry != 0 {
                let k = i + b.len;
                if k >= N {
                    return Err(Error::Overflow);
                }
                result.data[k] = carry;
            }
        }

        result.len = (a.len + b.len).min(N);
        result.normalize();

        if result.data[last] & SIGN_BIT != 0 {
            if lhs_neg != rhs_neg && result.data[last] == SIGN_BIT {
                // The most negative value in two's complement: the magnitude
                // bits below the sign must all be zero.
                if result.len == 1 || result.data[..result.len - 1].iter().all(|&limb| limb == 0) {
                    return Ok(result);
                }
            }
            return Err(Error::Overflow);
        }

        if lhs_neg != rhs_neg {
            return result.checked_neg();
        }
        Ok(result)
    }

    /// Raise `self` to a non-negative power by squaring.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when an intermediate product exceeds the
    /// capacity.
    pub fn checked_pow(&self, exp: &Self) -> Result<Self> {
        let mut x = *self;
        let mut n = *exp;
        let mut result = Self::ONE;
        while n > Self::ZERO {
            if n.is_even() {
                x = x.checked_mul(&x)?;
                n = n >> 1;
            } else {
                result = result.checked_mul(&x)?;
                n = n.checked_dec()?;
            }
        }
        Ok(result)
    }

    /// Divide `self` by `rhs`, returning quotient and remainder.
    ///
    /// The quotient's sign is the XOR of the operands' signs; the
    /// remainder's sign follows the dividend.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] when `rhs` is zero.
    pub fn checked_div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (dividend_neg, a) = self.sign_magnitude();
        let (divisor_neg, b) = rhs.sign_magnitude();

        // The most negative value has no representable magnitude to divide.
        if a.is_negative() || b.is_negative() {
            return Err(Error::Overflow);
        }

        // A divisor with greater magnitude needs no long division.
        if a < b {
            return Ok((Self::ZERO, *self));
        }

        let (quotient, remainder) = if b.len == 1 {
            let (q, r) = a.div_rem_limb(b.data[0]);
            (q, Self::from(r))
        } else {
            div_rem_knuth(&a, &b)
        };

        let quotient = if dividend_neg != divisor_neg {
            quotient.checked_neg()?
        } else {
            quotient
        };
        let remainder = if dividend_neg {
            remainder.checked_neg()?
        } else {
            remainder
        };
        Ok((quotient, remainder))
    }

    /// Divide a non-negative value by a single limb, returning the quotient
    /// and the limb-sized remainder.
    pub(crate) fn div_rem_limb(&self, divisor: Limb) -> (Self, Limb) {
        let divisor = divisor as WideLimb;
        let mut digits = [0 as Limb; N];
        let mut digit_count = 0;

        let mut remainder = *self;
        let mut pos = remainder.len - 1;

        let dividend = remainder.data[pos] as WideLimb;
        if dividend >= divisor {
            digits[digit_count] = (dividend / divisor) as Limb;
            digit_count += 1;
            remainder.data[pos] = (dividend % divisor) as Limb;
        }

        while pos > 0 {
            pos -= 1;
            let dividend =
                ((remainder.data[pos + 1] as WideLimb) << Limb::BITS) + remainder.data[pos] as WideLimb;
            digits[digit_count] = (dividend / divisor) as Limb;
            digit_count += 1;
            remainder.data[pos + 1] = 0;
            remainder.data[pos] = (dividend % divisor) as Limb;
        }

        let mut quotient = Self::ZERO;
        quotient.len = digit_count.max(1);
        for (j, digit) in digits[..digit_count].iter().rev().enumerate() {
            quotient.data[j] = *digit;
        }
        quotient.normalize();

        (quotient, remainder.data[0])
    }

    /// Returns the largest integer whose square does not exceed `self`.
    ///
    /// The value must be non-negative.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        debug_assert!(!self.is_negative(), "square root of a negative value");

        let num_bits = self.bit_count();
        let half_bits = if num_bits & 1 != 0 {
            (num_bits >> 1) + 1
        } else {
            num_bits >> 1
        };

        let mut limb_pos = half_bits >> 5;
        let bit_pos = half_bits & 0x1F;

        let mut mask: Limb;
        if bit_pos == 0 {
            mask = SIGN_BIT;
        } else {
            mask = 1 << bit_pos;
            limb_pos += 1;
        }

        let mut result = Self::ZERO;
        result.len = limb_pos.max(1);

        for i in (0..limb_pos).rev() {
            while mask != 0 {
                // Guess the bit, then undo the guess if the square is too
                // large.
                result.data[i] ^= mask;
                if result.checked_mul(&result).map_or(true, |sq| sq > *self) {
                    result.data[i] ^= mask;
                }
                mask >>= 1;
            }
            mask = SIGN_BIT;
        }
        result.normalize();
        result
    }
}

/// Long division for a divisor of two or more limbs, following Knuth's
/// algorithm D: the divisor is normalized so its top bit is set, a trial
/// quotient digit is estimated from the top two divisor limbs and corrected
/// downward, and the trial product is subtracted from the running remainder
/// window.
///
/// Both operands must be non-negative and `a >= b`.
fn div_rem_knuth<const N: usize>(a: &BigInt<N>, b: &BigInt<N>) -> (BigInt<N>, BigInt<N>) {
    let mut digits = [0 as Limb; N];
    let mut digit_count = 0;

    let remainder_len = a.len + 1;
    let mut remainder: Vec<Limb> = alloc::vec![0; remainder_len];
    remainder[..a.len].copy_from_slice(&a.data[..a.len]);

    // Normalize: shift so the divisor's top limb has its high bit set, which
    // maximizes the precision of the trial digits.
    let top = b.data[b.len - 1];
    let shift = top.leading_zeros() as usize;
    shift_left_slice(&mut remainder, shift);
    let b = *b << shift;

    let first_divisor_limb = b.data[b.len - 1] as WideLimb;
    let second_divisor_limb = b.data[b.len - 2] as WideLimb;
    let divisor_len = b.len + 1;
    let mut dividend_part: Vec<Limb> = alloc::vec![0; divisor_len];

    let mut j = remainder_len - b.len;
    let mut pos = remainder_len - 1;

    while j > 0 {
        let dividend =
            ((remainder[pos] as WideLimb) << Limb::BITS) + remainder[pos - 1] as WideLimb;

        let mut q_hat = dividend / first_divisor_limb;
        let mut r_hat = dividend % first_divisor_limb;

        // The estimate can be at most two too large; correct it against the
        // next remainder limb.
        loop {
            let too_big = q_hat == 0x1_0000_0000
                || q_hat * second_divisor_limb
                    > (r_hat << Limb::BITS) + remainder[pos - 2] as WideLimb;
            if !too_big {
                break;
            }
            q_hat -= 1;
            r_hat += first_divisor_limb;
            if r_hat >= 0x1_0000_0000 {
                break;
            }
        }

        for (h, part) in dividend_part.iter_mut().enumerate() {
            *part = remainder[pos - h];
        }

        let kk = BigInt::<N>::from_be_limbs(&dividend_part)
            .expect("window is at most divisor length plus one limb");
        let mut ss = b * BigInt::<N>::try_from(q_hat).expect("trial digit fits two limbs");
        while ss > kk {
            q_hat -= 1;
            ss = ss - b;
        }
        let yy = kk - ss;

        for h in 0..divisor_len {
            remainder[pos - h] = yy.data[b.len - h];
        }

        digits[digit_count] = q_hat as Limb;
        digit_count += 1;

        pos -= 1;
        j -= 1;
    }

    let mut quotient = BigInt::<N>::ZERO;
    quotient.len = digit_count.max(1);
    for (y, digit) in digits[..digit_count].iter().rev().enumerate() {
        quotient.data[y] = *digit;
    }
    quotient.normalize();

    let rem_len = shift_right_slice(&mut remainder, shift);
    let mut rem = BigInt::<N>::ZERO;
    rem.len = rem_len;
    rem.data[..rem_len].copy_from_slice(&remainder[..rem_len]);

    (quotient, rem)
}

// ----------- Operator Impls -----------

impl<B: Borrow<Self>, const N: usize> Mul<B> for BigInt<N> {
    type Output = Self;

    fn mul(self, rhs: B) -> Self::Output {
        match self.checked_mul(rhs.borrow()) {
            Ok(result) => result,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<B: Borrow<Self>, const N: usize> Div<B> for BigInt<N> {
    type Output = Self;

    fn div(self, rhs: B) -> Self::Output {
        match self.checked_div_rem(rhs.borrow()) {
            Ok((quotient, _)) => quotient,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<B: Borrow<Self>, const N: usize> Rem<B> for BigInt<N> {
    type Output = Self;

    fn rem(self, rhs: B) -> Self::Output {
        match self.checked_div_rem(rhs.borrow()) {
            Ok((_, remainder)) => remainder,
            Err(e) => panic!("{e}"),
        }
    }
}

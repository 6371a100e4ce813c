//! 32-bit limb primitives used by the multi-limb arithmetic.

/// A single magnitude word.
pub type Limb = u32;
/// The limb array backing a [`crate::BigInt`].
pub type Limbs<const N: usize> = [Limb; N];
/// Two limbs worth of bits, used for carries and widening products.
pub type WideLimb = u64;

/// The bit that carries the two's-complement sign in the top limb.
pub(crate) const SIGN_BIT: Limb = 0x8000_0000;

/// Multiply two [`Limb`]s and return the widened result.
#[inline(always)]
#[must_use]
pub const fn widening_mul(a: Limb, b: Limb) -> WideLimb {
    a as WideLimb * b as WideLimb
}

/// Calculate `a + (b * c) + carry`, returning the least significant limb and
/// the new carry.
#[inline(always)]
#[must_use]
pub const fn carrying_mac(a: Limb, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
    let tmp = (a as WideLimb) + widening_mul(b, c) + (carry as WideLimb);
    (tmp as Limb, (tmp >> Limb::BITS) as Limb)
}

/// Calculate `a + b + carry` and return the result and the new carry.
#[inline(always)]
#[must_use]
pub const fn adc(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let tmp = a as WideLimb + b as WideLimb + carry as WideLimb;
    (tmp as Limb, (tmp >> Limb::BITS) as Limb)
}

/// Calculate `a - b - borrow` and return the result and the new borrow.
#[inline(always)]
#[must_use]
pub const fn sbb(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let tmp = (1 << Limb::BITS) + a as WideLimb - b as WideLimb - borrow as WideLimb;
    let borrow = if tmp >> Limb::BITS == 0 { 1 } else { 0 };
    (tmp as Limb, borrow)
}

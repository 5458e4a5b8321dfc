//! Field arithmetic modulo p = 2²⁵⁶ − 2²²⁴ − 2⁹⁶ + 2⁶⁴ − 1.
//!
//! Elements are held as four 64-bit little-endian limbs in the Montgomery
//! domain, i.e. `FieldElement(a) = a·2²⁵⁶ mod p`, and are always fully
//! reduced to `[0, p)`. All operations run in constant time unless their
//! documentation says otherwise.

#![allow(clippy::assign_op_pattern, clippy::op_ref)]

use super::util::{adc, mac, sbb};
use crate::{FieldBytes, U256};
use core::{
    fmt::{self, Debug},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use elliptic_curve::{
    bigint::ArrayEncoding,
    ff::{self, Field, PrimeField},
    ops::Invert,
    rand_core::TryRngCore,
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption},
    zeroize::DefaultIsZeroes,
};

/// Constant representing the modulus serialized as hex.
const MODULUS_HEX: &str = "fffffffeffffffffffffffffffffffffffffffff00000000ffffffffffffffff";

/// Modulus limbs, little-endian.
pub(crate) const MODULUS: [u64; 4] = [
    0xffffffffffffffff,
    0xffffffff00000000,
    0xffffffffffffffff,
    0xfffffffeffffffff,
];

/// R² mod p, used to bring values into the Montgomery domain.
const R2: FieldElement = FieldElement([
    0x0000000200000003,
    0x00000002ffffffff,
    0x0000000100000001,
    0x0000000400000002,
]);

/// Element of the SM2 elliptic curve base field used for curve point
/// coordinates.
#[derive(Clone, Copy)]
pub struct FieldElement(pub(crate) [u64; 4]);

impl FieldElement {
    /// Additive identity.
    pub const ZERO: Self = Self([0, 0, 0, 0]);

    /// Multiplicative identity (R mod p).
    pub const ONE: Self = Self([
        0x0000000000000001,
        0x00000000ffffffff,
        0x0000000000000000,
        0x0000000100000000,
    ]);

    /// Attempts to parse the given byte array as an SEC1-encoded field
    /// element.
    ///
    /// Returns `None` if the byte array does not contain a big-endian
    /// integer in the range `[0, p)`.
    pub fn from_bytes(bytes: &FieldBytes) -> CtOption<Self> {
        Self::from_uint(U256::from_be_byte_array(*bytes))
    }

    /// Decode from a big endian byte slice.
    pub fn from_slice(slice: &[u8]) -> elliptic_curve::Result<Self> {
        let bytes = <[u8; 32]>::try_from(slice).map_err(|_| elliptic_curve::Error)?;
        Option::from(Self::from_bytes(&bytes.into())).ok_or(elliptic_curve::Error)
    }

    /// Decode from [`U256`], verifying the value is within range.
    pub fn from_uint(w: U256) -> CtOption<Self> {
        let limbs = w.to_words();
        let (_, borrow) = sub_inner(
            [limbs[0], limbs[1], limbs[2], limbs[3], 0],
            [MODULUS[0], MODULUS[1], MODULUS[2], MODULUS[3], 0],
        );
        // Underflow means the value was already reduced.
        let is_some = Choice::from((borrow & 1) as u8);
        CtOption::new(Self::from_uint_unchecked(w), is_some)
    }

    /// Decode from [`U256`], converting into the Montgomery domain.
    ///
    /// Does *not* check that the value is within range. Used incorrectly
    /// this can lead to invalid results!
    pub(crate) const fn from_uint_unchecked(w: U256) -> Self {
        Self(w.to_words()).multiply(&R2)
    }

    /// Element from a small integer.
    pub(crate) const fn from_u64(w: u64) -> Self {
        Self([w, 0, 0, 0]).multiply(&R2)
    }

    /// Returns the SEC1 encoding of this field element.
    pub fn to_bytes(self) -> FieldBytes {
        U256::from_words(self.to_canonical()).to_be_byte_array()
    }

    /// Translate out of the Montgomery domain, returning the canonical
    /// little-endian limbs.
    pub(crate) const fn to_canonical(self) -> [u64; 4] {
        montgomery_reduce(self.0, [0, 0, 0, 0])
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Is the canonical value of this element odd?
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_canonical()[0] & 1) as u8)
    }

    /// Returns `self + rhs mod p`.
    pub const fn add(&self, rhs: &Self) -> Self {
        let (w0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (w1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (w2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (w3, w4) = adc(self.0[3], rhs.0[3], carry);

        // The sum can spill into a fifth limb; subtracting the modulus with
        // the spill included folds it back into [0, p).
        let (result, _) = sub_inner(
            [w0, w1, w2, w3, w4],
            [MODULUS[0], MODULUS[1], MODULUS[2], MODULUS[3], 0],
        );
        Self(result)
    }

    /// Returns `self - rhs mod p`.
    pub const fn sub(&self, rhs: &Self) -> Self {
        let (result, _) = sub_inner(
            [self.0[0], self.0[1], self.0[2], self.0[3], 0],
            [rhs.0[0], rhs.0[1], rhs.0[2], rhs.0[3], 0],
        );
        Self(result)
    }

    /// Returns `-self mod p`.
    pub const fn neg(&self) -> Self {
        Self::ZERO.sub(self)
    }

    /// Returns `2 * self mod p`.
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns `3 * self mod p`.
    pub const fn triple(&self) -> Self {
        self.double().add(self)
    }

    /// Returns `self / 2 mod p`: conditionally add the (odd) modulus, then
    /// shift right one bit, all without branching on the value.
    pub const fn half(&self) -> Self {
        let mask = 0u64.wrapping_sub(self.0[0] & 1);
        let (w0, carry) = adc(self.0[0], MODULUS[0] & mask, 0);
        let (w1, carry) = adc(self.0[1], MODULUS[1] & mask, carry);
        let (w2, carry) = adc(self.0[2], MODULUS[2] & mask, carry);
        let (w3, w4) = adc(self.0[3], MODULUS[3] & mask, carry);
        Self([
            (w0 >> 1) | (w1 << 63),
            (w1 >> 1) | (w2 << 63),
            (w2 >> 1) | (w3 << 63),
            (w3 >> 1) | (w4 << 63),
        ])
    }

    /// Montgomery multiplication: returns `self * rhs * R⁻¹ mod p`.
    pub const fn multiply(&self, rhs: &Self) -> Self {
        let (lo, hi) = mul_wide(&self.0, &rhs.0);
        Self(montgomery_reduce(lo, hi))
    }

    /// Montgomery squaring.
    pub const fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Returns `self^(2^n) mod p` by repeated Montgomery squaring.
    pub(crate) const fn sqn(&self, n: usize) -> Self {
        let mut x = *self;
        let mut i = 0;
        while i < n {
            x = x.square();
            i += 1;
        }
        x
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.invert_unchecked(), !self.is_zero())
    }

    /// Returns the multiplicative inverse of self via `self⁻² · self`.
    ///
    /// Does not check that self is non-zero.
    const fn invert_unchecked(&self) -> Self {
        self.invert_sqr().multiply(self)
    }

    /// Returns `self⁻² mod p` as `self^(p-3)`.
    ///
    /// Affine conversion wants `z⁻²` (and `z⁻³ = (z⁻²)² · z`) rather than
    /// `z⁻¹`, so the exponentiation targets p−3 directly. The chain builds
    /// the blocks x2..x32 (x_k = 2^k − 1 ones) and then walks the
    /// 1-patterns of p−3: ≈253 squarings and 13 multiplications, all on a
    /// public exponent.
    pub(crate) const fn invert_sqr(&self) -> Self {
        let x1 = *self;
        let x2 = x1.square().multiply(&x1);
        let x4 = x2.sqn(2).multiply(&x2);
        let x6 = x4.sqn(2).multiply(&x2);
        let x12 = x6.sqn(6).multiply(&x6);
        let x24 = x12.sqn(12).multiply(&x12);
        let x30 = x24.sqn(6).multiply(&x6);
        let x31 = x30.square().multiply(&x1);
        let x32 = x31.square().multiply(&x1);

        let mut r = x31.sqn(33).multiply(&x32);
        r = r.sqn(32).multiply(&x32);
        r = r.sqn(32).multiply(&x32);
        r = r.sqn(32).multiply(&x32);
        r = r.sqn(64).multiply(&x32);
        r = r.sqn(30).multiply(&x30);
        r.sqn(2)
    }

    /// Returns the square root of self mod p, or `None` if no square root
    /// exists.
    ///
    /// p ≡ 3 (mod 4), so the root is `self^((p+1)/4)`, computed with the
    /// same x2..x32 blocks as inversion.
    pub fn sqrt(&self) -> CtOption<Self> {
        let x1 = *self;
        let x2 = x1.square().multiply(&x1);
        let x4 = x2.sqn(2).multiply(&x2);
        let x6 = x4.sqn(2).multiply(&x2);
        let x12 = x6.sqn(6).multiply(&x6);
        let x24 = x12.sqn(12).multiply(&x12);
        let x30 = x24.sqn(6).multiply(&x6);
        let x31 = x30.square().multiply(&x1);
        let x32 = x31.square().multiply(&x1);

        let mut sqrt = x31.sqn(1);
        sqrt = sqrt.sqn(32).multiply(&x32);
        sqrt = sqrt.sqn(32).multiply(&x32);
        sqrt = sqrt.sqn(32).multiply(&x32);
        sqrt = sqrt.sqn(32).multiply(&x32);
        sqrt = sqrt.sqn(32).multiply(&x1);
        sqrt = sqrt.sqn(62);

        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }
}

/// Schoolbook 4×4 limb multiplication producing the full 512-bit product.
const fn mul_wide(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], [u64; 4]) {
    let (w0, carry) = mac(0, a[0], b[0], 0);
    let (w1, carry) = mac(0, a[0], b[1], carry);
    let (w2, carry) = mac(0, a[0], b[2], carry);
    let (w3, w4) = mac(0, a[0], b[3], carry);

    let (w1, carry) = mac(w1, a[1], b[0], 0);
    let (w2, carry) = mac(w2, a[1], b[1], carry);
    let (w3, carry) = mac(w3, a[1], b[2], carry);
    let (w4, w5) = mac(w4, a[1], b[3], carry);

    let (w2, carry) = mac(w2, a[2], b[0], 0);
    let (w3, carry) = mac(w3, a[2], b[1], carry);
    let (w4, carry) = mac(w4, a[2], b[2], carry);
    let (w5, w6) = mac(w5, a[2], b[3], carry);

    let (w3, carry) = mac(w3, a[3], b[0], 0);
    let (w4, carry) = mac(w4, a[3], b[1], carry);
    let (w5, carry) = mac(w5, a[3], b[2], carry);
    let (w6, w7) = mac(w6, a[3], b[3], carry);

    ([w0, w1, w2, w3], [w4, w5, w6, w7])
}

/// Montgomery reduction of a 512-bit value.
///
/// Word-by-word per HAC Algorithm 14.32. The first limb of p is 2⁶⁴ − 1, so
/// p′ = −p⁻¹ mod 2⁶⁴ = 1 and each round's multiplicand is simply the lowest
/// remaining limb. The result may exceed p by at most one subtraction's
/// worth, folded back by `sub_inner` with the top carry included.
const fn montgomery_reduce(lo: [u64; 4], hi: [u64; 4]) -> [u64; 4] {
    let [a0, a1, a2, a3] = lo;
    let [a4, a5, a6, a7] = hi;

    let (_, carry) = mac(a0, a0, MODULUS[0], 0);
    let (a1, carry) = mac(a1, a0, MODULUS[1], carry);
    let (a2, carry) = mac(a2, a0, MODULUS[2], carry);
    let (a3, carry) = mac(a3, a0, MODULUS[3], carry);
    let (a4, carry2) = adc(a4, 0, carry);

    let (_, carry) = mac(a1, a1, MODULUS[0], 0);
    let (a2, carry) = mac(a2, a1, MODULUS[1], carry);
    let (a3, carry) = mac(a3, a1, MODULUS[2], carry);
    let (a4, carry) = mac(a4, a1, MODULUS[3], carry);
    let (a5, carry2) = adc(a5, carry2, carry);

    let (_, carry) = mac(a2, a2, MODULUS[0], 0);
    let (a3, carry) = mac(a3, a2, MODULUS[1], carry);
    let (a4, carry) = mac(a4, a2, MODULUS[2], carry);
    let (a5, carry) = mac(a5, a2, MODULUS[3], carry);
    let (a6, carry2) = adc(a6, carry2, carry);

    let (_, carry) = mac(a3, a3, MODULUS[0], 0);
    let (a4, carry) = mac(a4, a3, MODULUS[1], carry);
    let (a5, carry) = mac(a5, a3, MODULUS[2], carry);
    let (a6, carry) = mac(a6, a3, MODULUS[3], carry);
    let (a7, carry2) = adc(a7, carry2, carry);

    let (result, _) = sub_inner(
        [a4, a5, a6, a7, carry2],
        [MODULUS[0], MODULUS[1], MODULUS[2], MODULUS[3], 0],
    );
    result
}

/// Five-limb subtraction with branchless modulus re-addition on underflow.
///
/// Returns the low four limbs and the final borrow word (all-ones on
/// underflow, usable as a mask or range predicate).
#[inline]
const fn sub_inner(l: [u64; 5], r: [u64; 5]) -> ([u64; 4], u64) {
    let (w0, borrow) = sbb(l[0], r[0], 0);
    let (w1, borrow) = sbb(l[1], r[1], borrow);
    let (w2, borrow) = sbb(l[2], r[2], borrow);
    let (w3, borrow) = sbb(l[3], r[3], borrow);
    let (_, borrow) = sbb(l[4], r[4], borrow);

    let (w0, carry) = adc(w0, MODULUS[0] & borrow, 0);
    let (w1, carry) = adc(w1, MODULUS[1] & borrow, carry);
    let (w2, carry) = adc(w2, MODULUS[2] & borrow, carry);
    let (w3, _) = adc(w3, MODULUS[3] & borrow, carry);

    ([w0, w1, w2, w3], borrow)
}

impl Field for FieldElement {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn try_from_rng<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, R::Error> {
        let mut bytes = FieldBytes::default();

        loop {
            rng.try_fill_bytes(&mut bytes)?;
            if let Some(fe) = Self::from_bytes(&bytes).into() {
                return Ok(fe);
            }
        }
    }

    fn is_zero(&self) -> Choice {
        self.is_zero()
    }

    #[must_use]
    fn square(&self) -> Self {
        self.square()
    }

    #[must_use]
    fn double(&self) -> Self {
        self.double()
    }

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }

    fn sqrt(&self) -> CtOption<Self> {
        self.sqrt()
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        ff::helpers::sqrt_ratio_generic(num, div)
    }
}

impl PrimeField for FieldElement {
    type Repr = FieldBytes;

    const MODULUS: &'static str = MODULUS_HEX;
    const NUM_BITS: u32 = 256;
    const CAPACITY: u32 = 255;
    const TWO_INV: Self = Self([0, 0, 0, 0x8000000000000000]);
    const MULTIPLICATIVE_GENERATOR: Self = Self([
        0x000000000000000d,
        0x0000000cfffffff3,
        0x0000000000000000,
        0x0000000d00000000,
    ]);
    const S: u32 = 1;
    const ROOT_OF_UNITY: Self = Self([
        0xfffffffffffffffe,
        0xfffffffe00000001,
        0xffffffffffffffff,
        0xfffffffdffffffff,
    ]);
    const ROOT_OF_UNITY_INV: Self = Self::ROOT_OF_UNITY;
    const DELTA: Self = Self([
        0x00000000000000a9,
        0x000000a8ffffff57,
        0x0000000000000000,
        0x000000a900000000,
    ]);

    #[inline]
    fn from_repr(bytes: FieldBytes) -> CtOption<Self> {
        Self::from_bytes(&bytes)
    }

    #[inline]
    fn to_repr(&self) -> FieldBytes {
        self.to_bytes()
    }

    #[inline]
    fn is_odd(&self) -> Choice {
        self.is_odd()
    }
}

impl Invert for FieldElement {
    type Output = CtOption<Self>;

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }
}

impl AsRef<FieldElement> for FieldElement {
    fn as_ref(&self) -> &FieldElement {
        self
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:X})", &U256::from_words(self.to_canonical()))
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl DefaultIsZeroes for FieldElement {}

impl Eq for FieldElement {}

impl PartialEq for FieldElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

impl From<u32> for FieldElement {
    fn from(n: u32) -> FieldElement {
        Self::from_u64(n.into())
    }
}

impl From<u64> for FieldElement {
    fn from(n: u64) -> FieldElement {
        Self::from_u64(n)
    }
}

impl Add<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        FieldElement::add(&self, &other)
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::add(&self, other)
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::add(self, other)
    }
}

impl AddAssign<FieldElement> for FieldElement {
    fn add_assign(&mut self, other: FieldElement) {
        *self = FieldElement::add(self, &other);
    }
}

impl AddAssign<&FieldElement> for FieldElement {
    fn add_assign(&mut self, other: &FieldElement) {
        *self = FieldElement::add(self, other);
    }
}

impl Sub<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        FieldElement::sub(&self, &other)
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement::sub(&self, other)
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement::sub(self, other)
    }
}

impl SubAssign<FieldElement> for FieldElement {
    fn sub_assign(&mut self, other: FieldElement) {
        *self = FieldElement::sub(self, &other);
    }
}

impl SubAssign<&FieldElement> for FieldElement {
    fn sub_assign(&mut self, other: &FieldElement) {
        *self = FieldElement::sub(self, other);
    }
}

impl Mul<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        FieldElement::multiply(&self, &other)
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::multiply(&self, other)
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::multiply(self, other)
    }
}

impl MulAssign<FieldElement> for FieldElement {
    fn mul_assign(&mut self, other: FieldElement) {
        *self = FieldElement::multiply(self, &other);
    }
}

impl MulAssign<&FieldElement> for FieldElement {
    fn mul_assign(&mut self, other: &FieldElement) {
        *self = FieldElement::multiply(self, other);
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(&self)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(self)
    }
}

impl Sum for FieldElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a FieldElement> for FieldElement {
    fn sum<I: Iterator<Item = &'a FieldElement>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for FieldElement {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a FieldElement> for FieldElement {
    fn product<I: Iterator<Item = &'a FieldElement>>(iter: I) -> Self {
        iter.copied().product()
    }
}

#[cfg(test)]
mod tests {
    use super::FieldElement;
    use crate::FieldBytes;
    use elliptic_curve::ff::PrimeField;
    use hex_literal::hex;
    use proptest::{num::u64::ANY, prelude::*};

    /// Doubling 1 repeatedly walks the powers of two.
    const DBL_TEST_VECTORS: &[[u8; 32]] = &[
        hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        hex!("0000000000000000000000000000000000000000000000000000000000000004"),
        hex!("0000000000000000000000000000000000000000000000000000000000000008"),
        hex!("0000000000000000000000000000000000000000000000000000000000000010"),
        hex!("0000000000000000000000000000000000000000000000000000000000000020"),
        hex!("0000000000000000000000000000000000000000000000000000000000000040"),
        hex!("0000000000000000000000000000000000000000000000000000000000000080"),
    ];

    #[test]
    fn zero_is_additive_identity() {
        let zero = FieldElement::ZERO;
        let one = FieldElement::ONE;
        assert_eq!(zero.add(&zero), zero);
        assert_eq!(one.add(&zero), one);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let one = FieldElement::ONE;
        assert_eq!(one.multiply(&one), one);
    }

    #[test]
    fn from_bytes() {
        assert_eq!(
            FieldElement::from_bytes(&FieldBytes::default()).unwrap(),
            FieldElement::ZERO
        );
        assert_eq!(
            FieldElement::from_bytes(&DBL_TEST_VECTORS[0].into()).unwrap(),
            FieldElement::ONE
        );
        assert!(bool::from(
            FieldElement::from_bytes(&[0xff; 32].into()).is_none()
        ));
    }

    #[test]
    fn to_bytes() {
        assert_eq!(FieldElement::ZERO.to_bytes(), FieldBytes::default());
        assert_eq!(FieldElement::ONE.to_bytes().as_slice(), &DBL_TEST_VECTORS[0]);
    }

    #[test]
    fn repeated_add() {
        let mut r = FieldElement::ONE;
        for item in DBL_TEST_VECTORS {
            assert_eq!(r.to_bytes().as_slice(), item);
            r = r + &r;
        }
    }

    #[test]
    fn repeated_double() {
        let mut r = FieldElement::ONE;
        for item in DBL_TEST_VECTORS {
            assert_eq!(r.to_bytes().as_slice(), item);
            r = r.double();
        }
    }

    #[test]
    fn repeated_mul() {
        let mut r = FieldElement::ONE;
        let two = r + &r;
        for item in DBL_TEST_VECTORS {
            assert_eq!(r.to_bytes().as_slice(), item);
            r = r * &two;
        }
    }

    #[test]
    fn negation() {
        let two = FieldElement::ONE.double();
        let neg_two = -two;
        assert_eq!(two + &neg_two, FieldElement::ZERO);
        assert_eq!(-neg_two, two);
    }

    #[test]
    fn multiply_matches_integers() {
        let three = FieldElement::from(3u64);
        let five = FieldElement::from(5u64);
        assert_eq!(three * five, FieldElement::from(15u64));
    }

    #[test]
    fn triple_and_half() {
        let two = FieldElement::ONE.double();
        let six = two.triple();
        assert_eq!(six, two + two + two);
        assert_eq!(six.half(), two + FieldElement::ONE);
        assert_eq!(FieldElement::ONE.half().double(), FieldElement::ONE);
    }

    #[test]
    fn two_inv_constant() {
        let two = FieldElement::ONE.double();
        assert_eq!(two * FieldElement::TWO_INV, FieldElement::ONE);
    }

    #[test]
    fn root_of_unity_constant() {
        assert_eq!(
            FieldElement::ROOT_OF_UNITY.square(),
            FieldElement::ONE
        );
        assert_eq!(
            FieldElement::ROOT_OF_UNITY * FieldElement::ROOT_OF_UNITY_INV,
            FieldElement::ONE
        );
    }

    #[test]
    fn delta_constant() {
        assert_eq!(
            FieldElement::MULTIPLICATIVE_GENERATOR.square(),
            FieldElement::DELTA
        );
    }

    #[test]
    fn invert() {
        assert!(bool::from(FieldElement::ZERO.invert().is_none()));
        assert_eq!(FieldElement::ONE.invert().unwrap(), FieldElement::ONE);

        let three = FieldElement::from(3u64);
        let inv_three = three.invert().unwrap();
        assert_eq!(three * inv_three, FieldElement::ONE);
    }

    #[test]
    fn invert_sqr() {
        let five = FieldElement::from(5u64);
        assert_eq!(five.square() * five.invert_sqr(), FieldElement::ONE);
    }

    #[test]
    fn sqrt() {
        for n in 1u64..=8 {
            let fe = FieldElement::from(n);
            let sqrt = fe.square().sqrt().unwrap();
            // Either root is acceptable.
            assert!(sqrt == fe || sqrt == -fe);
        }
    }

    proptest! {
        /// Checks behaviour well within the field range (highest limb clear).
        #[test]
        fn add_then_sub(
            a0 in ANY, a1 in ANY, a2 in ANY,
            b0 in ANY, b1 in ANY, b2 in ANY,
        ) {
            let a = FieldElement([a0, a1, a2, 0]);
            let b = FieldElement([b0, b1, b2, 0]);
            prop_assert_eq!(a.add(&b).sub(&a), b);
        }

        #[test]
        fn invert_mul(a0 in ANY, a1 in ANY, a2 in ANY) {
            let a = FieldElement([a0, a1, a2, 0]);
            if !bool::from(a.is_zero()) {
                prop_assert_eq!(a * a.invert().unwrap(), FieldElement::ONE);
            }
        }

        /// Every operation keeps its output fully reduced below the modulus.
        #[test]
        fn results_stay_reduced(
            a0 in ANY, a1 in ANY, a2 in ANY,
            b0 in ANY, b1 in ANY, b2 in ANY,
        ) {
            let a = FieldElement([a0, a1, a2, 0]);
            let b = FieldElement([b0, b1, b2, 0]);
            for r in [a.add(&b), a.sub(&b), a.multiply(&b), a.neg(), a.triple(), a.half()] {
                prop_assert!(bool::from(FieldElement::from_uint(crate::U256::from_words(r.0)).is_some()));
            }
        }
    }
}

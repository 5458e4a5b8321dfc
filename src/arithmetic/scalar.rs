//! Scalar field elements modulo the SM2 group order
//! n = 0xfffffffeffffffffffffffffffffffff7203df6b21c6052b53bbf40939d54123.
//!
//! Same representation as the base field: four little-endian 64-bit limbs in
//! the Montgomery domain, fully reduced. The Montgomery reduction here is the
//! generic word-by-word flavour with n′ = −n⁻¹ mod 2⁶⁴.

#![allow(clippy::assign_op_pattern, clippy::op_ref)]

use super::util::{adc, mac, sbb};
use crate::{FieldBytes, ORDER_HEX, Sm2, U256};
use core::{
    fmt::{self, Debug},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Shr, ShrAssign, Sub, SubAssign},
};
use elliptic_curve::{
    Error, Result, ScalarPrimitive,
    bigint::ArrayEncoding,
    ff::{self, Field, PrimeField},
    ops::{Invert, Reduce},
    rand_core::TryRngCore,
    scalar::{FromUintUnchecked, IsHigh},
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption},
    zeroize::DefaultIsZeroes,
};

#[cfg(feature = "bits")]
use {crate::ScalarBits, elliptic_curve::ff::PrimeFieldBits};

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

#[cfg(doc)]
use core::ops::{Add, Mul, Sub};

/// Group order limbs, little-endian.
pub(crate) const MODULUS: [u64; 4] = [
    0x53bbf40939d54123,
    0x7203df6b21c6052b,
    0xffffffffffffffff,
    0xfffffffeffffffff,
];

/// n′ = −n⁻¹ mod 2⁶⁴.
const MODULUS_NEG_INV: u64 = 0x327f9e8872350975;

/// R² mod n.
const R2: Scalar = Scalar([
    0x901192af7c114f20,
    0x3464504ade6fa2fa,
    0x620fc84c3affe0d4,
    0x1eb5e412a22b3d3b,
]);

/// n >> 1, for the high-half predicate.
const FRAC_MODULUS_2: [u64; 4] = [
    0xa9ddfa049ceaa091,
    0xb901efb590e30295,
    0xffffffffffffffff,
    0x7fffffff7fffffff,
];

/// Scalars are elements in the finite field modulo `n`.
///
/// # Trait impls
///
/// Much of the important functionality of scalars is provided by traits from
/// the [`ff`](https://docs.rs/ff/) crate, which is re-exported as
/// `sm2z256::elliptic_curve::ff`:
///
/// - [`Field`](https://docs.rs/ff/latest/ff/trait.Field.html) -
///   represents elements of finite fields and provides:
///   - [`Field::try_from_rng`](https://docs.rs/ff/latest/ff/trait.Field.html#tymethod.try_from_rng) -
///     generate a random scalar
///   - `double`, `square`, and `invert` operations
///   - Bounds for [`Add`], [`Sub`], [`Mul`], and [`Neg`] (as well as `*Assign` equivalents)
///   - Bounds for [`ConditionallySelectable`] from the `subtle` crate
/// - [`PrimeField`](https://docs.rs/ff/latest/ff/trait.PrimeField.html) -
///   represents elements of prime fields and provides:
///   - `from_repr`/`to_repr` for converting field elements from/to big integers.
///   - `multiplicative_generator` and `root_of_unity` constants.
/// - [`PrimeFieldBits`](https://docs.rs/ff/latest/ff/trait.PrimeFieldBits.html) -
///   operations over field elements represented as bits (requires `bits` feature)
///
/// Please see the documentation for the relevant traits for more information.
#[derive(Clone, Copy, PartialOrd, Ord)]
pub struct Scalar(pub(crate) [u64; 4]);

impl Scalar {
    /// Zero scalar.
    pub const ZERO: Self = Self([0, 0, 0, 0]);

    /// Multiplicative identity (R mod n).
    pub const ONE: Self = Self([
        0xac440bf6c62abedd,
        0x8dfc2094de39fad4,
        0x0000000000000000,
        0x0000000100000000,
    ]);

    /// Attempts to parse the given byte array as an SEC1-encoded scalar.
    ///
    /// Returns `None` if the byte array does not contain a big-endian
    /// integer in the range `[0, n)`.
    pub fn from_bytes(bytes: &FieldBytes) -> CtOption<Self> {
        Self::from_uint(U256::from_be_byte_array(*bytes))
    }

    /// Parses the given byte slice as a scalar.
    ///
    /// Byte slices shorter than the field size are handled by zero padding
    /// the input.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() > 32 {
            return Err(Error);
        }
        let mut bytes = FieldBytes::default();
        bytes[32 - slice.len()..].copy_from_slice(slice);
        Option::from(Self::from_bytes(&bytes)).ok_or(Error)
    }

    /// Decode from [`U256`], verifying the value is within range.
    pub fn from_uint(w: U256) -> CtOption<Self> {
        let limbs = w.to_words();
        let (_, borrow) = sub_inner(
            [limbs[0], limbs[1], limbs[2], limbs[3], 0],
            [MODULUS[0], MODULUS[1], MODULUS[2], MODULUS[3], 0],
        );
        let is_some = Choice::from((borrow & 1) as u8);
        CtOption::new(Self::from_uint_unchecked(w), is_some)
    }

    /// Decode from [`U256`], converting into the Montgomery domain.
    ///
    /// Does *not* check that the value is within range.
    pub(crate) const fn from_uint_unchecked(w: U256) -> Self {
        Self(w.to_words()).multiply(&R2)
    }

    /// Scalar from a small integer.
    pub(crate) const fn from_u64(w: u64) -> Self {
        Self([w, 0, 0, 0]).multiply(&R2)
    }

    /// Returns the SEC1 encoding of this scalar.
    pub fn to_bytes(&self) -> FieldBytes {
        U256::from_words(self.to_canonical()).to_be_byte_array()
    }

    /// Translate out of the Montgomery domain, returning the canonical
    /// little-endian limbs.
    pub(crate) const fn to_canonical(&self) -> [u64; 4] {
        montgomery_reduce(self.0, [0, 0, 0, 0])
    }

    /// Serialize the canonical value as 33 little-endian bytes.
    ///
    /// The trailing byte is always zero: the windowed multiplication engines
    /// read two bytes at a time and may run one byte past the top limb.
    pub(crate) fn to_le_padded(&self) -> [u8; 33] {
        let limbs = self.to_canonical();
        let mut out = [0u8; 33];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Is the canonical value of this scalar odd?
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_canonical()[0] & 1) as u8)
    }

    /// Returns `self + rhs mod n`, folding the 257-bit sum back into range.
    pub const fn add(&self, rhs: &Self) -> Self {
        let (w0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (w1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (w2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (w3, w4) = adc(self.0[3], rhs.0[3], carry);

        let (result, _) = sub_inner(
            [w0, w1, w2, w3, w4],
            [MODULUS[0], MODULUS[1], MODULUS[2], MODULUS[3], 0],
        );
        Self(result)
    }

    /// Returns `self - rhs mod n`.
    pub const fn sub(&self, rhs: &Self) -> Self {
        let (result, _) = sub_inner(
            [self.0[0], self.0[1], self.0[2], self.0[3], 0],
            [rhs.0[0], rhs.0[1], rhs.0[2], rhs.0[3], 0],
        );
        Self(result)
    }

    /// Returns `-self mod n`; zero maps to zero.
    pub const fn negate(&self) -> Self {
        Self::ZERO.sub(self)
    }

    /// Returns `2 * self mod n`.
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Montgomery multiplication modulo n.
    pub const fn multiply(&self, rhs: &Self) -> Self {
        let (lo, hi) = mul_wide(&self.0, &rhs.0);
        Self(montgomery_reduce(lo, hi))
    }

    /// Montgomery squaring.
    pub const fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Returns `self^(2^n)` by `n` successive Montgomery squarings, the
    /// workhorse of the inversion addition chain.
    pub(crate) const fn sqn(&self, n: usize) -> Self {
        let mut x = *self;
        let mut i = 0;
        while i < n {
            x = x.square();
            i += 1;
        }
        x
    }

    /// Compute [`Scalar`] inversion: `1 / self`.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.invert_unchecked(), !self.is_zero())
    }

    /// Returns `self⁻¹ mod n` as `self^(n-2)`.
    ///
    /// The exponent is the public constant n−2, evaluated with a fixed
    /// 11-entry power table and a 25-step square-and-multiply schedule
    /// (43 multiplications, 249 squarings). A sparser variant of this chain
    /// appears in the test module; the two must agree.
    const fn invert_unchecked(&self) -> Self {
        let x1 = *self;
        let t = x1.sqn(1);
        let x11 = t.multiply(&x1);
        let x101 = t.multiply(&x11);
        let x111 = t.multiply(&x101);
        let x1001 = t.sqn(2).multiply(&x1);
        let t = x101.sqn(1);
        let x1011 = t.multiply(&x1);
        let x1111 = t.multiply(&x101);
        let x10101 = t.sqn(1).multiply(&x1);
        let x11111 = x10101.multiply(&t);

        // Blocks of ones: x6 through x32.
        let x6 = x10101.sqn(1).multiply(&x10101);
        let x8 = x6.sqn(2).multiply(&x11);
        let x16 = x8.sqn(8).multiply(&x8);
        let x24 = x16.sqn(8).multiply(&x8);
        let x30 = x24.sqn(6).multiply(&x6);
        let x31 = x30.sqn(1).multiply(&x1);
        let x32 = x31.sqn(1).multiply(&x1);

        let mut out = x31.sqn(33).multiply(&x32);
        out = out.sqn(32).multiply(&x32);
        out = out.sqn(32).multiply(&x32);
        out = out.sqn(4).multiply(&x111);
        out = out.sqn(3).multiply(&x1);
        out = out.sqn(11).multiply(&x1111);
        out = out.sqn(5).multiply(&x1111);
        out = out.sqn(4).multiply(&x1011);
        out = out.sqn(5).multiply(&x1011);
        out = out.sqn(3).multiply(&x1);
        out = out.sqn(7).multiply(&x111);
        out = out.sqn(5).multiply(&x11);
        out = out.sqn(9).multiply(&x101);
        out = out.sqn(7).multiply(&x10101);
        out = out.sqn(5).multiply(&x10101);
        out = out.sqn(5).multiply(&x111);
        out = out.sqn(4).multiply(&x111);
        out = out.sqn(6).multiply(&x11111);
        out = out.sqn(3).multiply(&x101);
        out = out.sqn(10).multiply(&x1001);
        out = out.sqn(5).multiply(&x111);
        out = out.sqn(5).multiply(&x111);
        out = out.sqn(6).multiply(&x10101);
        out = out.sqn(2).multiply(&x1);
        out = out.sqn(9).multiply(&x1001);
        out.sqn(5).multiply(&x1)
    }

    /// Compute modular square root.
    ///
    /// n ≡ 3 (mod 4), so the candidate root is `self^((n+1)/4)`.
    pub fn sqrt(&self) -> CtOption<Self> {
        let sqrt = self.pow_vartime(&[
            0xd4eefd024e755049,
            0xdc80f7dac871814a,
            0xffffffffffffffff,
            0x3fffffffbfffffff,
        ]);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Right shifts the canonical value of the scalar.
    ///
    /// Note: not constant-time with respect to the `shift` parameter.
    pub fn shr_vartime(&self, shift: u32) -> Scalar {
        let limbs = self.to_canonical();
        let words = (shift / 64) as usize;
        let bits = shift % 64;

        let mut out = [0u64; 4];
        for i in 0..4 {
            let lo = limbs.get(i + words).copied().unwrap_or(0);
            out[i] = lo >> bits;
            if bits != 0 {
                let hi = limbs.get(i + words + 1).copied().unwrap_or(0);
                out[i] |= hi << (64 - bits);
            }
        }
        Self::from_uint_unchecked(U256::from_words(out))
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

/// Word-by-word Montgomery reduction of a 512-bit value modulo n,
/// per HAC Algorithm 14.32 with k = aᵢ·n′ each round.
const fn montgomery_reduce(lo: [u64; 4], hi: [u64; 4]) -> [u64; 4] {
    let [a0, a1, a2, a3] = lo;
    let [a4, a5, a6, a7] = hi;

    let k = a0.wrapping_mul(MODULUS_NEG_INV);
    let (_, carry) = mac(a0, k, MODULUS[0], 0);
    let (a1, carry) = mac(a1, k, MODULUS[1], carry);
    let (a2, carry) = mac(a2, k, MODULUS[2], carry);
    let (a3, carry) = mac(a3, k, MODULUS[3], carry);
    let (a4, carry2) = adc(a4, 0, carry);

    let k = a1.wrapping_mul(MODULUS_NEG_INV);
    let (_, carry) = mac(a1, k, MODULUS[0], 0);
    let (a2, carry) = mac(a2, k, MODULUS[1], carry);
    let (a3, carry) = mac(a3, k, MODULUS[2], carry);
    let (a4, carry) = mac(a4, k, MODULUS[3], carry);
    let (a5, carry2) = adc(a5, carry2, carry);

    let k = a2.wrapping_mul(MODULUS_NEG_INV);
    let (_, carry) = mac(a2, k, MODULUS[0], 0);
    let (a3, carry) = mac(a3, k, MODULUS[1], carry);
    let (a4, carry) = mac(a4, k, MODULUS[2], carry);
    let (a5, carry) = mac(a5, k, MODULUS[3], carry);
    let (a6, carry2) = adc(a6, carry2, carry);

    let k = a3.wrapping_mul(MODULUS_NEG_INV);
    let (_, carry) = mac(a3, k, MODULUS[0], 0);
    let (a4, carry) = mac(a4, k, MODULUS[1], carry);
    let (a5, carry) = mac(a5, k, MODULUS[2], carry);
    let (a6, carry) = mac(a6, k, MODULUS[3], carry);
    let (a7, carry2) = adc(a7, carry2, carry);

    let (result, _) = sub_inner(
        [a4, a5, a6, a7, carry2],
        [MODULUS[0], MODULUS[1], MODULUS[2], MODULUS[3], 0],
    );
    result
}

/// Five-limb subtraction with branchless modulus re-addition on underflow.
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

impl Field for Scalar {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn try_from_rng<R: TryRngCore + ?Sized>(rng: &mut R) -> core::result::Result<Self, R::Error> {
        let mut bytes = FieldBytes::default();

        loop {
            rng.try_fill_bytes(&mut bytes)?;
            if let Some(scalar) = Self::from_bytes(&bytes).into() {
                return Ok(scalar);
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

impl PrimeField for Scalar {
    type Repr = FieldBytes;

    const MODULUS: &'static str = ORDER_HEX;
    const NUM_BITS: u32 = 256;
    const CAPACITY: u32 = 255;
    const TWO_INV: Self = Self([0, 0, 0, 0x8000000000000000]);
    const MULTIPLICATIVE_GENERATOR: Self = Self([
        0x588817ed8c557dba,
        0x1bf84129bc73f5a9,
        0x0000000000000001,
        0x0000000200000000,
    ]);
    const S: u32 = 1;
    const ROOT_OF_UNITY: Self = Self([
        0xa777e81273aa8246,
        0xe407bed6438c0a56,
        0xfffffffffffffffe,
        0xfffffffdffffffff,
    ]);
    const ROOT_OF_UNITY_INV: Self = Self::ROOT_OF_UNITY;
    const DELTA: Self = Self([
        0xb1102fdb18aafb74,
        0x37f0825378e7eb52,
        0x0000000000000002,
        0x0000000400000000,
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

#[cfg(feature = "bits")]
impl PrimeFieldBits for Scalar {
    type ReprBits = [u64; 4];

    fn to_le_bits(&self) -> ScalarBits {
        self.to_canonical().into()
    }

    fn char_le_bits() -> ScalarBits {
        MODULUS.into()
    }
}

impl AsRef<Scalar> for Scalar {
    fn as_ref(&self) -> &Scalar {
        self
    }
}

impl FromUintUnchecked for Scalar {
    type Uint = U256;

    fn from_uint_unchecked(uint: Self::Uint) -> Self {
        Self::from_uint_unchecked(uint)
    }
}

impl Invert for Scalar {
    type Output = CtOption<Self>;

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }
}

impl IsHigh for Scalar {
    fn is_high(&self) -> Choice {
        let canonical = self.to_canonical();
        let (_, borrow) = sbb(FRAC_MODULUS_2[0], canonical[0], 0);
        let (_, borrow) = sbb(FRAC_MODULUS_2[1], canonical[1], borrow);
        let (_, borrow) = sbb(FRAC_MODULUS_2[2], canonical[2], borrow);
        let (_, borrow) = sbb(FRAC_MODULUS_2[3], canonical[3], borrow);
        // Borrow set means canonical > n/2.
        Choice::from((borrow & 1) as u8)
    }
}

impl Reduce<U256> for Scalar {
    type Bytes = FieldBytes;

    fn reduce(w: U256) -> Self {
        let limbs = w.to_words();
        let (reduced, _) = sub_inner(
            [limbs[0], limbs[1], limbs[2], limbs[3], 0],
            [MODULUS[0], MODULUS[1], MODULUS[2], MODULUS[3], 0],
        );
        Self::from_uint_unchecked(U256::from_words(reduced))
    }

    #[inline]
    fn reduce_bytes(bytes: &FieldBytes) -> Self {
        Self::reduce(U256::from_be_byte_array(*bytes))
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{:X})", &U256::from_words(self.to_canonical()))
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::ZERO
    }
}

impl DefaultIsZeroes for Scalar {}

impl Eq for Scalar {}

impl PartialEq for Scalar {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Scalar {
        Self::from_u64(n.into())
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Scalar {
        Self::from_u64(n)
    }
}

impl From<ScalarPrimitive<Sm2>> for Scalar {
    fn from(w: ScalarPrimitive<Sm2>) -> Self {
        Scalar::from(&w)
    }
}

impl From<&ScalarPrimitive<Sm2>> for Scalar {
    fn from(w: &ScalarPrimitive<Sm2>) -> Scalar {
        Scalar::from_uint_unchecked(*w.as_uint())
    }
}

impl From<Scalar> for ScalarPrimitive<Sm2> {
    fn from(scalar: Scalar) -> ScalarPrimitive<Sm2> {
        ScalarPrimitive::from(&scalar)
    }
}

impl From<&Scalar> for ScalarPrimitive<Sm2> {
    fn from(scalar: &Scalar) -> ScalarPrimitive<Sm2> {
        ScalarPrimitive::new(scalar.into()).unwrap()
    }
}

impl From<Scalar> for FieldBytes {
    fn from(scalar: Scalar) -> Self {
        scalar.to_repr()
    }
}

impl From<&Scalar> for FieldBytes {
    fn from(scalar: &Scalar) -> Self {
        scalar.to_repr()
    }
}

impl From<Scalar> for U256 {
    fn from(scalar: Scalar) -> U256 {
        U256::from(&scalar)
    }
}

impl From<&Scalar> for U256 {
    fn from(scalar: &Scalar) -> U256 {
        U256::from_words(scalar.to_canonical())
    }
}

impl TryFrom<U256> for Scalar {
    type Error = Error;

    fn try_from(w: U256) -> Result<Self> {
        Option::from(Self::from_uint(w)).ok_or(Error)
    }
}

impl Shr<u32> for Scalar {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self::Output {
        self.shr_vartime(rhs)
    }
}

impl Shr<u32> for &Scalar {
    type Output = Scalar;

    fn shr(self, rhs: u32) -> Self::Output {
        self.shr_vartime(rhs)
    }
}

impl ShrAssign<u32> for Scalar {
    fn shr_assign(&mut self, rhs: u32) {
        *self = *self >> rhs;
    }
}

impl Add<Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, other: Scalar) -> Scalar {
        Scalar::add(&self, &other)
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar::add(&self, other)
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar::add(self, other)
    }
}

impl AddAssign<Scalar> for Scalar {
    fn add_assign(&mut self, other: Scalar) {
        *self = Scalar::add(self, &other);
    }
}

impl AddAssign<&Scalar> for Scalar {
    fn add_assign(&mut self, other: &Scalar) {
        *self = Scalar::add(self, other);
    }
}

impl Sub<Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, other: Scalar) -> Scalar {
        Scalar::sub(&self, &other)
    }
}

impl Sub<&Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, other: &Scalar) -> Scalar {
        Scalar::sub(&self, other)
    }
}

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, other: &Scalar) -> Scalar {
        Scalar::sub(self, other)
    }
}

impl SubAssign<Scalar> for Scalar {
    fn sub_assign(&mut self, other: Scalar) {
        *self = Scalar::sub(self, &other);
    }
}

impl SubAssign<&Scalar> for Scalar {
    fn sub_assign(&mut self, other: &Scalar) {
        *self = Scalar::sub(self, other);
    }
}

impl Mul<Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, other: Scalar) -> Scalar {
        Scalar::multiply(&self, &other)
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar::multiply(&self, other)
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar::multiply(self, other)
    }
}

impl MulAssign<Scalar> for Scalar {
    fn mul_assign(&mut self, other: Scalar) {
        *self = Scalar::multiply(self, &other);
    }
}

impl MulAssign<&Scalar> for Scalar {
    fn mul_assign(&mut self, other: &Scalar) {
        *self = Scalar::multiply(self, other);
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        self.negate()
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        self.negate()
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Scalar {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Scalar> for Scalar {
    fn product<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.copied().product()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        ScalarPrimitive::from(self).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        Ok(ScalarPrimitive::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;
    use elliptic_curve::ff::PrimeField;
    use proptest::{num::u64::ANY, prelude::*};

    /// The sparse-window n−2 exponentiation the dense chain replaced:
    /// a 15-entry power table, an optimized walk of the redundant top 128
    /// bits, then the low 128 bits in fixed 4-bit windows.
    fn invert_sparse(x: &Scalar) -> Scalar {
        let mut table = [Scalar::ZERO; 15];
        table[0] = *x;
        for i in (2..16).step_by(2) {
            table[i - 1] = table[i / 2 - 1].sqn(1);
            table[i] = table[i - 1].multiply(&table[0]);
        }

        let t = table[14].sqn(4);
        let t2 = t.multiply(&table[13]);
        let t = t.multiply(&table[14]);
        let out = t.sqn(8);
        let t2 = out.multiply(&t2);
        let out = out.multiply(&t);
        let t = out.sqn(16);
        let t = t.multiply(&t2);
        let t2 = t.multiply(&table[0]);
        let out = t.sqn(32);
        let out = out.multiply(&t2);
        let t = out.multiply(&table[0]);
        let t = t.multiply(&t2);
        let out = out.sqn(64);
        let mut out = out.multiply(&t);

        const EXP_LO: [u8; 32] = [
            0x7, 0x2, 0x0, 0x3, 0xd, 0xf, 0x6, 0xb, 0x2, 0x1, 0xc, 0x6, 0x0, 0x5, 0x2, 0xb,
            0x5, 0x3, 0xb, 0xb, 0xf, 0x4, 0x0, 0x9, 0x3, 0x9, 0xd, 0x5, 0x4, 0x1, 0x2, 0x1,
        ];
        for nibble in EXP_LO {
            out = out.sqn(4);
            if nibble != 0 {
                out = out.multiply(&table[usize::from(nibble) - 1]);
            }
        }
        out
    }

    #[test]
    fn invert() {
        assert!(bool::from(Scalar::ZERO.invert().is_none()));
        assert_eq!(Scalar::ONE.invert().unwrap(), Scalar::ONE);

        let three = Scalar::from(3u64);
        assert_eq!(three * three.invert().unwrap(), Scalar::ONE);
    }

    #[test]
    fn invert_variants_agree() {
        for n in [1u64, 2, 3, 0xdeadbeef, u64::MAX] {
            let x = Scalar::from(n);
            assert_eq!(x.invert().unwrap(), invert_sparse(&x));
        }
    }

    #[test]
    fn two_inv_constant() {
        assert_eq!(Scalar::from(2u64) * Scalar::TWO_INV, Scalar::ONE);
    }

    #[test]
    fn root_of_unity_constant() {
        assert_eq!(Scalar::ROOT_OF_UNITY.square(), Scalar::ONE);
        assert_eq!(
            Scalar::ROOT_OF_UNITY * Scalar::ROOT_OF_UNITY_INV,
            Scalar::ONE
        );
    }

    #[test]
    fn delta_constant() {
        assert_eq!(Scalar::MULTIPLICATIVE_GENERATOR.square(), Scalar::DELTA);
    }

    #[test]
    fn le_padded_serialization() {
        let one = Scalar::ONE.to_le_padded();
        assert_eq!(one[0], 1);
        assert!(one[1..].iter().all(|&b| b == 0));
    }

    proptest! {
        #[test]
        fn add_then_sub(
            a0 in ANY, a1 in ANY, a2 in ANY,
            b0 in ANY, b1 in ANY, b2 in ANY,
        ) {
            let a = Scalar([a0, a1, a2, 0]);
            let b = Scalar([b0, b1, b2, 0]);
            prop_assert_eq!(a.add(&b).sub(&a), b);
        }

        #[test]
        fn invert_mul(a0 in ANY, a1 in ANY, a2 in ANY) {
            let a = Scalar([a0, a1, a2, 0]);
            if !bool::from(a.is_zero()) {
                prop_assert_eq!(a * a.invert().unwrap(), Scalar::ONE);
                prop_assert_eq!(a.invert().unwrap(), invert_sparse(&a));
            }
        }
    }
}

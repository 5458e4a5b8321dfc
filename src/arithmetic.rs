//! Pure Rust implementation of group operations on the SM2 elliptic curve.
//!
//! Curve parameters can be found in [draft-shen-sm2-ecdsa Appendix D]:
//! Recommended Parameters.
//!
//! [draft-shen-sm2-ecdsa Appendix D]: https://datatracker.ietf.org/doc/html/draft-shen-sm2-ecdsa-02#appendix-D

#[cfg(not(target_pointer_width = "64"))]
compile_error!("the arithmetic backend is written for four 64-bit limbs");

pub(crate) mod field;
pub(crate) mod mul;
pub(crate) mod scalar;
mod affine;
mod projective;
mod util;

pub use self::{affine::AffinePoint, projective::ProjectivePoint};

use self::{field::FieldElement, scalar::Scalar};
use crate::Sm2;

/// Curve coefficient a = -3, in the Montgomery domain.
pub(crate) const CURVE_EQUATION_A: FieldElement = FieldElement([
    0xfffffffffffffffc,
    0xfffffffc00000003,
    0xffffffffffffffff,
    0xfffffffbffffffff,
]);

/// Curve coefficient
/// b = 0x28E9FA9E9D9F5E344D5A9E4BCF6509A7F39789F515AB8F92DDBCBD414D940E93,
/// in the Montgomery domain.
pub(crate) const CURVE_EQUATION_B: FieldElement = FieldElement([
    0x90d230632bc0dd42,
    0x71cf379ae9b537ab,
    0x527981505ea51c3c,
    0x240fe188ba20e2c8,
]);

/// Base point coordinates, in the Montgomery domain.
///
/// ```text
/// Gₓ = 32c4ae2c 1f198119 5f990446 6a39c994 8fe30bbf f2660be1 715a4589 334c74c7
/// Gᵧ = bc3736a2 f4f6779c 59bdcee3 6b692153 d0a9877c c62a4740 02df32e5 2139f0a0
/// ```
pub(crate) const GENERATOR: (FieldElement, FieldElement) = (
    FieldElement([
        0x61328990f418029e,
        0x3e7981eddca6c050,
        0xd6a1ed99ac24c3c3,
        0x91167a5ee1c13b05,
    ]),
    FieldElement([
        0xc1354e593c2d0ddd,
        0xc1f5e5788d3295fa,
        0x8d4cfb066e2a48f8,
        0x63cd65d481d735bd,
    ]),
);

impl elliptic_curve::CurveArithmetic for Sm2 {
    type AffinePoint = AffinePoint;
    type ProjectivePoint = ProjectivePoint;
    type Scalar = Scalar;
}

impl core::ops::Mul<AffinePoint> for Scalar {
    type Output = ProjectivePoint;

    #[inline]
    fn mul(self, rhs: AffinePoint) -> ProjectivePoint {
        rhs * self
    }
}

impl core::ops::Mul<&AffinePoint> for Scalar {
    type Output = ProjectivePoint;

    #[inline]
    fn mul(self, rhs: &AffinePoint) -> ProjectivePoint {
        *rhs * self
    }
}

impl core::ops::Mul<AffinePoint> for &Scalar {
    type Output = ProjectivePoint;

    #[inline]
    fn mul(self, rhs: AffinePoint) -> ProjectivePoint {
        rhs * *self
    }
}

impl core::ops::Mul<&AffinePoint> for &Scalar {
    type Output = ProjectivePoint;

    #[inline]
    fn mul(self, rhs: &AffinePoint) -> ProjectivePoint {
        *rhs * *self
    }
}

impl core::ops::Mul<ProjectivePoint> for Scalar {
    type Output = ProjectivePoint;

    #[inline]
    fn mul(self, rhs: ProjectivePoint) -> ProjectivePoint {
        rhs * self
    }
}

impl core::ops::Mul<&ProjectivePoint> for Scalar {
    type Output = ProjectivePoint;

    #[inline]
    fn mul(self, rhs: &ProjectivePoint) -> ProjectivePoint {
        rhs * &self
    }
}

impl core::ops::Mul<ProjectivePoint> for &Scalar {
    type Output = ProjectivePoint;

    #[inline]
    fn mul(self, rhs: ProjectivePoint) -> ProjectivePoint {
        rhs * *self
    }
}

impl core::ops::Mul<&ProjectivePoint> for &Scalar {
    type Output = ProjectivePoint;

    #[inline]
    fn mul(self, rhs: &ProjectivePoint) -> ProjectivePoint {
        rhs * self
    }
}

//! Projective arithmetic tests.

#![cfg(feature = "arithmetic")]

use elliptic_curve::{
    ff::Field,
    group::Group,
    ops::{LinearCombination, MulByGenerator},
    sec1::ToEncodedPoint,
};
use hex_literal::hex;
use rand_core::OsRng;
use sm2z256::{AffinePoint, ProjectivePoint, Scalar};

/// d · G for d = 128B2FA8BD433C6C068C8D803DFF79792A519A55171B1B650C23661D15897263.
const MUL_TEST_VECTOR: ([u8; 32], [u8; 32], [u8; 32]) = (
    hex!("128B2FA8BD433C6C068C8D803DFF79792A519A55171B1B650C23661D15897263"),
    hex!("D5548C7825CBB56150A3506CD57464AF8A1AE0519DFAF3C58221DC810CAF28DD"),
    hex!("921073768FE3D59CE54E79A49445CF73FED23086537027264D168946D479533E"),
);

#[test]
fn fixed_base_mul_test_vector() {
    let (d, x, y) = MUL_TEST_VECTOR;
    let d = Scalar::from_bytes(&d.into()).unwrap();

    let point = ProjectivePoint::mul_by_generator(&d).to_affine();
    let encoded = point.to_encoded_point(false);
    assert_eq!(encoded.x().unwrap().as_slice(), &x);
    assert_eq!(encoded.y().unwrap().as_slice(), &y);
}

#[test]
fn variable_base_mul_matches_fixed_base() {
    let (d, _, _) = MUL_TEST_VECTOR;
    let d = Scalar::from_bytes(&d.into()).unwrap();

    assert_eq!(
        ProjectivePoint::GENERATOR * d,
        ProjectivePoint::mul_by_generator(&d)
    );
}

#[test]
fn scalar_sum_distributes_over_basepoint_mul() {
    for _ in 0..8 {
        let k1 = Scalar::try_from_rng(&mut OsRng).unwrap();
        let k2 = Scalar::try_from_rng(&mut OsRng).unwrap();

        let lhs = ProjectivePoint::mul_by_generator(&(k1 + k2));
        let rhs = ProjectivePoint::mul_by_generator(&k1) + ProjectivePoint::mul_by_generator(&k2);
        assert_eq!(lhs.to_affine(), rhs.to_affine());
    }
}

#[test]
fn mul_distributes_over_point_addition() {
    let k = Scalar::try_from_rng(&mut OsRng).unwrap();
    let p = ProjectivePoint::mul_by_generator(&Scalar::try_from_rng(&mut OsRng).unwrap());
    let q = ProjectivePoint::mul_by_generator(&Scalar::try_from_rng(&mut OsRng).unwrap());

    assert_eq!(((p * k) + (q * k)).to_affine(), ((p + q) * k).to_affine());
}

#[test]
fn scalar_mul_is_commutative() {
    let k = Scalar::try_from_rng(&mut OsRng).unwrap();
    let m = Scalar::try_from_rng(&mut OsRng).unwrap();
    let p = ProjectivePoint::GENERATOR;

    assert_eq!(((p * m) * k).to_affine(), (p * (k * m)).to_affine());
}

#[test]
fn identity_absorbs_scalar_mul() {
    let k = Scalar::try_from_rng(&mut OsRng).unwrap();
    assert!(bool::from((ProjectivePoint::IDENTITY * k).is_identity()));
    assert!(bool::from((ProjectivePoint::GENERATOR * Scalar::ZERO).is_identity()));
}

#[test]
fn identity_is_additive_neutral() {
    let p = ProjectivePoint::mul_by_generator(&Scalar::try_from_rng(&mut OsRng).unwrap());
    assert_eq!(p + ProjectivePoint::IDENTITY, p);
    assert_eq!(ProjectivePoint::IDENTITY + p, p);
    assert_eq!(p + AffinePoint::IDENTITY, p);
}

#[test]
fn lincomb_matches_naive_sum() {
    let s = Scalar::try_from_rng(&mut OsRng).unwrap();
    let t = Scalar::try_from_rng(&mut OsRng).unwrap();
    let p = ProjectivePoint::mul_by_generator(&Scalar::try_from_rng(&mut OsRng).unwrap());

    let combined = ProjectivePoint::lincomb(&[(ProjectivePoint::generator(), s), (p, t)]);
    let naive = ProjectivePoint::GENERATOR * s + p * t;
    assert_eq!(combined.to_affine(), naive.to_affine());
}

#[test]
fn scalar_inversion_round_trips() {
    for _ in 0..1000 {
        let x = Scalar::try_from_rng(&mut OsRng).unwrap();
        if bool::from(x.is_zero()) {
            continue;
        }
        let x_inv = x.invert().unwrap();
        assert_eq!(x_inv * x, Scalar::ONE);
    }
}

#[test]
fn affine_round_trip_through_projective() {
    let p = ProjectivePoint::mul_by_generator(&Scalar::try_from_rng(&mut OsRng).unwrap());
    let affine = p.to_affine();
    assert_eq!(ProjectivePoint::from(affine).to_affine(), affine);
}

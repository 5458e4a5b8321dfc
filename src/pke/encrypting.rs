//! Support for SM2 public-key encryption.
//!
//! ## Algorithm
//!
//! ```text
//! A1: generate a random number k in [1, n-1] with the random number generator
//! A2: compute point C1 = [k]G = (x1, y1)
//! A3: compute point S = [h]PB; abort if S is the point at infinity
//! A4: compute point [k]PB = (x2, y2)
//! A5: compute t = KDF(x2 || y2, klen); go to A1 if t is all zero
//! A6: compute C2 = M xor t
//! A7: compute C3 = Hash(x2 || M || y2)
//! ```

use elliptic_curve::{Error, Group, Result, rand_core::TryCryptoRng, sec1::ToEncodedPoint};

use super::{Cipher, kdf};
use crate::{AffinePoint, NonZeroScalar, ProjectivePoint, PublicKey, SecretKey};
use elliptic_curve::ops::MulByGenerator;
use sm3::{
    Sm3,
    digest::{Digest, FixedOutputReset, Output},
};

#[cfg(feature = "alloc")]
use alloc::{borrow::Cow, vec};

/// Encrypt messages using elliptic curve cryptography.
pub trait EcEncrypt {
    /// Encrypt into [`Cipher`] using the default digest algorithm [`Sm3`].
    #[cfg(feature = "alloc")]
    fn encrypt<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Cipher<'_, Sm3>> {
        self.encrypt_digest::<_, Sm3>(rng, msg)
    }

    /// Encrypt into [`Cipher`] using the specified digest algorithm.
    #[cfg(feature = "alloc")]
    fn encrypt_digest<R: TryCryptoRng + ?Sized, D: Digest + FixedOutputReset>(
        &self,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Cipher<'_, D>> {
        let mut c1 = AffinePoint::IDENTITY;
        let mut c2 = vec![0; msg.len()];
        let mut c3 = Output::<D>::default();
        self.encrypt_into_digest::<R, D>(rng, msg, &mut c1, &mut c2, &mut c3)?;
        Ok(Cipher {
            c1,
            c2: c2.into(),
            c3,
        })
    }

    /// Encrypt into [`Cipher`] using the default digest algorithm [`Sm3`].
    /// `c2_out_buf` is the output of c2.
    fn encrypt_buf<'a, R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
        c2_out_buf: &'a mut [u8],
    ) -> Result<Cipher<'a, Sm3>> {
        self.encrypt_buf_digest::<R, Sm3>(rng, msg, c2_out_buf)
    }

    /// Encrypt into [`Cipher`] using the specified digest algorithm.
    /// `c2_out_buf` is the output of c2.
    fn encrypt_buf_digest<'a, R: TryCryptoRng + ?Sized, D: Digest + FixedOutputReset>(
        &self,
        rng: &mut R,
        msg: &[u8],
        c2_out_buf: &'a mut [u8],
    ) -> Result<Cipher<'a, D>> {
        let mut c1 = AffinePoint::IDENTITY;
        let mut c3 = Output::<D>::default();
        let len = self.encrypt_into_digest::<R, D>(rng, msg, &mut c1, c2_out_buf, &mut c3)?;
        let c2 = &c2_out_buf[..len];

        #[cfg(feature = "alloc")]
        let c2 = Cow::Borrowed(c2);

        Ok(Cipher { c1, c2, c3 })
    }

    /// Encrypt into the specified buffers using the specified digest
    /// algorithm, returning the length of C2.
    fn encrypt_into_digest<R: TryCryptoRng + ?Sized, D: Digest + FixedOutputReset>(
        &self,
        rng: &mut R,
        msg: &[u8],
        c1_out: &mut AffinePoint,
        c2_out: &mut [u8],
        c3_out: &mut Output<D>,
    ) -> Result<usize>;
}

impl EcEncrypt for PublicKey {
    fn encrypt_into_digest<R: TryCryptoRng + ?Sized, D: Digest + FixedOutputReset>(
        &self,
        rng: &mut R,
        msg: &[u8],
        c1_out: &mut AffinePoint,
        c2_out: &mut [u8],
        c3_out: &mut Output<D>,
    ) -> Result<usize> {
        encrypt_into::<R, D>(self, rng, msg, c1_out, c2_out, c3_out)
    }
}

impl EcEncrypt for SecretKey {
    fn encrypt_into_digest<R: TryCryptoRng + ?Sized, D: Digest + FixedOutputReset>(
        &self,
        rng: &mut R,
        msg: &[u8],
        c1_out: &mut AffinePoint,
        c2_out: &mut [u8],
        c3_out: &mut Output<D>,
    ) -> Result<usize> {
        encrypt_into::<R, D>(&self.public_key(), rng, msg, c1_out, c2_out, c3_out)
    }
}

fn encrypt_into<R, D>(
    public_key: &PublicKey,
    rng: &mut R,
    msg: &[u8],
    c1_out: &mut AffinePoint,
    c2_out: &mut [u8],
    c3_out: &mut Output<D>,
) -> Result<usize>
where
    R: TryCryptoRng + ?Sized,
    D: FixedOutputReset + Digest,
{
    if c2_out.len() < msg.len() {
        return Err(Error);
    }
    let c2_out = &mut c2_out[..msg.len()];

    let mut digest = D::new();
    let mut hpb: AffinePoint;
    loop {
        // A1: generate a random number k in [1, n-1] with the random number
        // generator
        let k = NonZeroScalar::try_from_rng(rng).map_err(|_| Error)?;
        let k = k.as_ref();

        // A2: compute point C1 = [k]G = (x1, y1)
        let kg = ProjectivePoint::mul_by_generator(k).to_affine();

        // A3: compute point S = [h]PB; h = 1 so only the point at infinity
        // needs rejecting, which `PublicKey` already rules out
        let pb_point = ProjectivePoint::from(public_key.as_affine());
        if pb_point.is_identity().into() {
            return Err(Error);
        }

        // A4: compute point [k]PB = (x2, y2)
        hpb = (pb_point * k).to_affine();

        // A5: compute t = KDF(x2 || y2, klen)
        // A6: compute C2 = M xor t
        kdf::<D>(&mut digest, hpb, msg, c2_out)?;

        // If t is an all-zero bit string, go to A1.
        // If all of t are 0, xor(c2) == c2; an empty message has no mask to
        // check.
        if msg.is_empty() || c2_out.iter().zip(msg).any(|(pre, cur)| pre != cur) {
            *c1_out = kg;
            break;
        }
    }
    let encode_point = hpb.to_encoded_point(false);

    // A7: compute C3 = Hash(x2 || M || y2)
    Digest::reset(&mut digest);
    Digest::update(&mut digest, encode_point.x().ok_or(Error)?);
    Digest::update(&mut digest, msg);
    Digest::update(&mut digest, encode_point.y().ok_or(Error)?);
    Digest::finalize_into_reset(&mut digest, c3_out);

    Ok(c2_out.len())
}

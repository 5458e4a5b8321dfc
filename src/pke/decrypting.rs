//! Support for SM2 decryption.
//!
//! ## Algorithm
//!
//! ```text
//! B3: compute [dB]C1 = (x2, y2)
//! B4: compute t = KDF(x2 || y2, klen)
//! B5: get C2 from C and compute M' = C2 xor t
//! B6: compute u = Hash(x2 || M' || y2); abort if u != C3
//! ```

use elliptic_curve::{Error, Result, sec1::ToEncodedPoint};

use super::{Cipher, kdf};
use crate::{ProjectivePoint, Scalar, SecretKey};
use sm3::{
    Sm3,
    digest::{Digest, FixedOutputReset, Output, Update},
};

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

/// Decrypt messages using elliptic curve cryptography.
pub trait EcDecrypt {
    /// Decrypt the [`Cipher`] using the default digest algorithm [`Sm3`].
    #[cfg(feature = "alloc")]
    fn decrypt(&self, cipher: &Cipher<'_, Sm3>) -> Result<Vec<u8>> {
        self.decrypt_digest::<Sm3>(cipher)
    }

    /// Decrypt the [`Cipher`] using the specified digest algorithm.
    #[cfg(feature = "alloc")]
    fn decrypt_digest<D: Digest + FixedOutputReset>(
        &self,
        cipher: &Cipher<'_, D>,
    ) -> Result<Vec<u8>> {
        let mut out = vec![0; cipher.c2().len()];
        self.decrypt_digest_into(cipher, &mut out)?;
        Ok(out)
    }

    /// Decrypt the [`Cipher`] to out using the default digest algorithm
    /// [`Sm3`]. The length of out is equal to the length of C2.
    fn decrypt_into(&self, cipher: &Cipher<'_, Sm3>, out: &mut [u8]) -> Result<()> {
        self.decrypt_digest_into(cipher, out)
    }

    /// Decrypt the [`Cipher`] to out using the specified digest algorithm.
    /// The length of out is equal to the length of C2.
    fn decrypt_digest_into<D: Digest + FixedOutputReset>(
        &self,
        cipher: &Cipher<'_, D>,
        out: &mut [u8],
    ) -> Result<()>;
}

impl EcDecrypt for SecretKey {
    fn decrypt_digest_into<D: Digest + FixedOutputReset>(
        &self,
        cipher: &Cipher<'_, D>,
        out: &mut [u8],
    ) -> Result<()> {
        let scalar = self.to_nonzero_scalar();
        let mut digest = D::new();
        decrypt_into(scalar.as_ref(), cipher, &mut digest, out)
    }
}

fn decrypt_into<D>(
    secret_scalar: &Scalar,
    cipher: &Cipher<'_, D>,
    digest: &mut D,
    out: &mut [u8],
) -> Result<()>
where
    D: Update + FixedOutputReset,
{
    if out.len() < cipher.c2().len() {
        return Err(Error);
    }
    let out = &mut out[..cipher.c2().len()];

    // B3: compute [dB]C1 = (x2, y2)
    let c1_point = (ProjectivePoint::from(*cipher.c1()) * secret_scalar).to_affine();

    // B4: compute t = KDF(x2 || y2, klen)
    // B5: get C2 from C and compute M' = C2 xor t
    kdf::<D>(digest, c1_point, cipher.c2(), out)?;

    // B6: compute u = Hash(x2 || M' || y2)
    let mut u = Output::<D>::default();
    let encode_point = c1_point.to_encoded_point(false);
    digest.update(encode_point.x().ok_or(Error)?);
    digest.update(out);
    digest.update(encode_point.y().ok_or(Error)?);
    digest.finalize_into_reset(&mut u);

    // If u != C3, output "ERROR" and exit
    if cipher.c3() != &u {
        return Err(Error);
    }

    Ok(())
}

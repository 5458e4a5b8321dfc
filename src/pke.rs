//! SM2 Encryption Algorithm (SM2PKE) as defined in GB/T 32918.4.
//!
//! ## Usage
#![cfg_attr(feature = "alloc", doc = "```")]
#![cfg_attr(not(feature = "alloc"), doc = "```ignore")]
//! use rand_core::OsRng;
//! use sm2z256::SecretKey;
//! use sm2z256::pke::{Cipher, EcDecrypt, EcEncrypt, Mode};
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Encrypting
//! let secret_key = SecretKey::try_from_rng(&mut OsRng)?; // serialize with `::to_bytes()`
//! let public_key = secret_key.public_key();
//! let plaintext = b"plaintext";
//! let cipher = public_key.encrypt(&mut OsRng, plaintext)?;
//! let ciphertext = cipher.to_vec(Mode::C1C3C2);
//!
//! // Decrypting
//! let cipher = Cipher::from_slice(&ciphertext, Mode::C1C3C2)?;
//! let plaintext = secret_key.decrypt(&cipher)?;
//! # Ok(())
//! # }
//! ```

use core::cmp::min;

use elliptic_curve::{
    Error, Group, Result,
    array::typenum::Unsigned,
    sec1::{FromEncodedPoint, Tag, ToEncodedPoint},
};

use crate::{AffinePoint, EncodedPoint, ProjectivePoint, Sm2};
use sm3::{
    Sm3,
    digest::{FixedOutputReset, Output, OutputSizeUser, Update},
};

#[cfg(feature = "alloc")]
use alloc::{borrow::Cow, vec::Vec};

#[cfg(feature = "arithmetic")]
mod decrypting;
#[cfg(feature = "arithmetic")]
mod encrypting;

#[cfg(feature = "arithmetic")]
pub use self::{decrypting::EcDecrypt, encrypting::EcEncrypt};

/// Modes for the cipher encoding/decoding.
#[derive(Clone, Copy, Debug)]
pub enum Mode {
    /// old mode
    C1C2C3,
    /// new mode
    C1C3C2,
}

/// Represents a cipher structure containing encryption-related data.
///
/// The `Cipher` structure includes the ephemeral curve point `C1`, the
/// masked message `C2` and the confirmation digest `C3`.
#[derive(Debug)]
pub struct Cipher<'a, D: OutputSizeUser = Sm3> {
    c1: AffinePoint,
    #[cfg(feature = "alloc")]
    c2: Cow<'a, [u8]>,
    #[cfg(not(feature = "alloc"))]
    c2: &'a [u8],
    c3: Output<D>,
}

impl<'a, D: OutputSizeUser> Cipher<'a, D> {
    /// Decode from slice
    pub fn from_slice(cipher: &'a [u8], mode: Mode) -> Result<Self> {
        let tag = Tag::from_u8(cipher.first().cloned().ok_or(Error)?)?;
        let c1_len = tag.message_len(<Sm2 as elliptic_curve::Curve>::FieldBytesSize::USIZE);

        // B1: get C1 from C; verify that C1 satisfies the curve equation
        let (c1, c) = cipher.split_at(c1_len);
        let encoded_c1 = EncodedPoint::from_bytes(c1)?;
        let c1 = Option::from(AffinePoint::from_encoded_point(&encoded_c1)).ok_or(Error)?;

        // B2: the cofactor is 1, so S = [h]C1 = C1 only has to be checked
        // against the point at infinity
        if ProjectivePoint::from(c1).is_identity().into() {
            return Err(Error);
        }

        let digest_size = D::output_size();
        if c.len() < digest_size {
            return Err(Error);
        }
        let (c2, c3_buf) = match mode {
            Mode::C1C3C2 => {
                let (c3, c2) = c.split_at(digest_size);
                (c2, c3)
            }
            Mode::C1C2C3 => c.split_at(c.len() - digest_size),
        };

        let mut c3 = Output::<D>::default();
        c3.copy_from_slice(c3_buf);

        #[cfg(feature = "alloc")]
        let c2 = Cow::Borrowed(c2);

        Ok(Self { c1, c2, c3 })
    }

    /// Encode to Vec
    #[cfg(feature = "alloc")]
    pub fn to_vec(&self, mode: Mode) -> Vec<u8> {
        let point = self.c1.to_encoded_point(false);
        let len = point.len() + self.c2.len() + self.c3.len();
        let mut result = Vec::with_capacity(len);
        match mode {
            Mode::C1C2C3 => {
                result.extend(point.as_ref());
                result.extend(self.c2.as_ref());
                result.extend(&self.c3);
            }
            Mode::C1C3C2 => {
                result.extend(point.as_ref());
                result.extend(&self.c3);
                result.extend(self.c2.as_ref());
            }
        }

        result
    }

    /// Get C1
    pub fn c1(&self) -> &AffinePoint {
        &self.c1
    }

    /// Get C2
    pub fn c2(&self) -> &[u8] {
        #[cfg(feature = "alloc")]
        return &self.c2;
        #[cfg(not(feature = "alloc"))]
        return self.c2;
    }

    /// Get C3
    pub fn c3(&self) -> &Output<D> {
        &self.c3
    }
}

/// Key derivation: successive SM3 invocations over `x2 ‖ y2 ‖ counter`,
/// XORed into the message as the stream is produced.
fn kdf<D>(hasher: &mut D, kpb: AffinePoint, msg: &[u8], c2_out: &mut [u8]) -> Result<()>
where
    D: Update + FixedOutputReset,
{
    let klen = msg.len();
    let mut ct: u32 = 0x0000_0001;
    let mut offset = 0;
    let digest_size = <D as OutputSizeUser>::output_size();
    let mut ha = Output::<D>::default();
    let encode_point = kpb.to_encoded_point(false);

    hasher.reset();
    while offset < klen {
        hasher.update(encode_point.x().ok_or(Error)?);
        hasher.update(encode_point.y().ok_or(Error)?);
        hasher.update(&ct.to_be_bytes());

        hasher.finalize_into_reset(&mut ha);

        let xor_len = min(digest_size, klen - offset);
        xor(msg, c2_out, &ha, offset, xor_len);
        offset += xor_len;
        ct += 1;
    }
    Ok(())
}

/// XORs a portion of the buffer `c2` with a hash value.
fn xor(msg: &[u8], c2_out: &mut [u8], ha: &[u8], offset: usize, xor_len: usize) {
    for i in 0..xor_len {
        c2_out[offset + i] = msg[offset + i] ^ ha[i];
    }
}

//! SM2 public-key encryption tests.

#![cfg(all(feature = "pke", feature = "alloc"))]

use rand_core::OsRng;
use sm2z256::{
    SecretKey,
    pke::{Cipher, EcDecrypt, EcEncrypt, Mode},
};

const PLAINTEXT: &[u8] = b"encryption standard";

#[test]
fn encrypt_decrypt_round_trip_c1c3c2() {
    let secret_key = SecretKey::try_from_rng(&mut OsRng).unwrap();
    let public_key = secret_key.public_key();

    let cipher = public_key.encrypt(&mut OsRng, PLAINTEXT).unwrap();
    let ciphertext = cipher.to_vec(Mode::C1C3C2);

    let cipher = Cipher::from_slice(&ciphertext, Mode::C1C3C2).unwrap();
    let plaintext = secret_key.decrypt(&cipher).unwrap();
    assert_eq!(plaintext, PLAINTEXT);
}

#[test]
fn encrypt_decrypt_round_trip_c1c2c3() {
    let secret_key = SecretKey::try_from_rng(&mut OsRng).unwrap();
    let public_key = secret_key.public_key();

    let cipher = public_key.encrypt(&mut OsRng, PLAINTEXT).unwrap();
    let ciphertext = cipher.to_vec(Mode::C1C2C3);

    let cipher = Cipher::from_slice(&ciphertext, Mode::C1C2C3).unwrap();
    let plaintext = secret_key.decrypt(&cipher).unwrap();
    assert_eq!(plaintext, PLAINTEXT);
}

#[test]
fn encrypt_with_secret_key_decrypts() {
    let secret_key = SecretKey::try_from_rng(&mut OsRng).unwrap();

    let cipher = secret_key.encrypt(&mut OsRng, PLAINTEXT).unwrap();
    let ciphertext = cipher.to_vec(Mode::C1C3C2);

    let cipher = Cipher::from_slice(&ciphertext, Mode::C1C3C2).unwrap();
    assert_eq!(secret_key.decrypt(&cipher).unwrap(), PLAINTEXT);
}

#[test]
fn multi_block_kdf_round_trip() {
    // Longer than one SM3 block so the KDF counter advances.
    let msg = [0xa5u8; 100];
    let secret_key = SecretKey::try_from_rng(&mut OsRng).unwrap();
    let public_key = secret_key.public_key();

    let cipher = public_key.encrypt(&mut OsRng, &msg).unwrap();
    let ciphertext = cipher.to_vec(Mode::C1C3C2);

    let cipher = Cipher::from_slice(&ciphertext, Mode::C1C3C2).unwrap();
    assert_eq!(secret_key.decrypt(&cipher).unwrap(), msg);
}

#[test]
fn encrypt_into_buffer() {
    let secret_key = SecretKey::try_from_rng(&mut OsRng).unwrap();
    let public_key = secret_key.public_key();

    let mut c2_buf = [0u8; PLAINTEXT.len()];
    let cipher = public_key
        .encrypt_buf(&mut OsRng, PLAINTEXT, &mut c2_buf)
        .unwrap();

    let mut out = [0u8; PLAINTEXT.len()];
    secret_key.decrypt_into(&cipher, &mut out).unwrap();
    assert_eq!(out, PLAINTEXT);
}

#[test]
fn tampered_ciphertext_rejected() {
    let secret_key = SecretKey::try_from_rng(&mut OsRng).unwrap();
    let public_key = secret_key.public_key();

    let cipher = public_key.encrypt(&mut OsRng, PLAINTEXT).unwrap();
    let mut ciphertext = cipher.to_vec(Mode::C1C3C2);

    // Flip one bit of C2; the confirmation digest C3 must catch it.
    let last = ciphertext.len() - 1;
    ciphertext[last] ^= 1;

    let cipher = Cipher::from_slice(&ciphertext, Mode::C1C3C2).unwrap();
    assert!(secret_key.decrypt(&cipher).is_err());
}

#[test]
fn wrong_key_rejected() {
    let secret_key = SecretKey::try_from_rng(&mut OsRng).unwrap();
    let other_key = SecretKey::try_from_rng(&mut OsRng).unwrap();

    let cipher = secret_key.public_key().encrypt(&mut OsRng, PLAINTEXT).unwrap();
    let ciphertext = cipher.to_vec(Mode::C1C3C2);

    let cipher = Cipher::from_slice(&ciphertext, Mode::C1C3C2).unwrap();
    assert!(other_key.decrypt(&cipher).is_err());
}

#[test]
fn truncated_ciphertext_rejected() {
    let secret_key = SecretKey::try_from_rng(&mut OsRng).unwrap();
    let public_key = secret_key.public_key();

    let cipher = public_key.encrypt(&mut OsRng, PLAINTEXT).unwrap();
    let ciphertext = cipher.to_vec(Mode::C1C3C2);

    // Too short to even contain C1 and C3.
    let truncated: elliptic_curve::Result<Cipher<'_>> =
        Cipher::from_slice(&ciphertext[..64], Mode::C1C3C2);
    assert!(truncated.is_err());
}

//! SM2DSA tests.

#![cfg(feature = "dsa")]

use elliptic_curve::ops::Reduce;
use hex_literal::hex;
use proptest::prelude::*;
use sm2z256::{
    FieldBytes, NonZeroScalar, Scalar, SecretKey,
    dsa::{
        Signature, SigningKey, VerifyingKey,
        signature::{Signer, Verifier},
    },
};

const IDENTITY: &str = "ALICE123@YAHOO.COM";
const MSG: &[u8] = b"message digest";

const SECRET_KEY: [u8; 32] =
    hex!("128B2FA8BD433C6C068C8D803DFF79792A519A55171B1B650C23661D15897263");

const PUBLIC_KEY: [u8; 65] = hex!(
    "04D5548C7825CBB56150A3506CD57464AF8A1AE0519DFAF3C58221DC810CAF28DD"
    "921073768FE3D59CE54E79A49445CF73FED23086537027264D168946D479533E"
);

// Signature over MSG by SECRET_KEY with the per-message nonce
// k = 6CB28D99385C175C94F94E934817663FC176D925DD72B727260DBAAE1FB2F96F.
const SIG: [u8; 64] = hex!(
    "077BA4656350DAEEA3656EE042DDECE22D5E8DCA4882CB20080AD26E2CB62E9F" // r
    "2BF329F4AFF86EEE0F924888DDE20BF12A21B638A3B0F1FCA70395C4BE00D0AC" // s
);

// GB/T 32918.5-2017 Appendix A.
const GBT_IDENTITY: &str = "1234567812345678";

const GBT_PUBLIC_KEY: [u8; 65] = hex!(
    "0409F9DF311E5421A150DD7D161E4BC5C672179FAD1833FC076BB08FF356F35020"
    "CCEA490CE26775A52DC6EA718CC1AA600AED05FBF35E084A6632F6072DA9AD13"
);

const GBT_SIG: [u8; 64] = hex!(
    "F5A03B0648D2C4630EEAC513E1BB81A15944DA3827D5B74143AC7EACEEE720B3" // r
    "B1B6AA29DF212FD8763182BC0D421CA1BB9038FD1F7F42D4840B69C485BBC1AA" // s
);

#[test]
fn secret_key_yields_public_vector() {
    let secret_key = SecretKey::from_slice(&SECRET_KEY).unwrap();
    let signing_key = SigningKey::new(IDENTITY, &secret_key).unwrap();
    assert_eq!(
        signing_key.verifying_key().to_sec1_bytes().as_ref(),
        PUBLIC_KEY.as_slice()
    );
}

#[test]
fn verify_test_vector() {
    let vk = VerifyingKey::from_sec1_bytes(IDENTITY, &PUBLIC_KEY).unwrap();
    let sig = Signature::from_bytes(&SIG).expect("decoded Signature failed");
    assert!(vk.verify(MSG, &sig).is_ok());
}

#[test]
fn verify_official_vector() {
    let vk = VerifyingKey::from_sec1_bytes(GBT_IDENTITY, &GBT_PUBLIC_KEY).unwrap();
    let sig = Signature::from_bytes(&GBT_SIG).expect("decoded Signature failed");
    assert!(vk.verify(MSG, &sig).is_ok());
}

#[test]
fn wrong_identity_rejects_vector() {
    let vk = VerifyingKey::from_sec1_bytes("BOB456@YAHOO.COM", &PUBLIC_KEY).unwrap();
    let sig = Signature::from_bytes(&SIG).unwrap();
    assert!(vk.verify(MSG, &sig).is_err());
}

#[test]
fn tampered_message_rejected() {
    let vk = VerifyingKey::from_sec1_bytes(IDENTITY, &PUBLIC_KEY).unwrap();
    let sig = Signature::from_bytes(&SIG).unwrap();
    assert!(vk.verify(b"message digest!", &sig).is_err());
}

prop_compose! {
    fn signing_key()(bytes in any::<[u8; 32]>()) -> SigningKey {
        loop {
            let scalar = <Scalar as Reduce<sm2z256::U256>>::reduce_bytes(&FieldBytes::from(bytes));
            if let Some(scalar) = Option::from(NonZeroScalar::new(scalar)) {
                return SigningKey::from_nonzero_scalar(IDENTITY, scalar).unwrap();
            }
        }
    }
}

proptest! {
    #[test]
    fn sign_and_verify(sk in signing_key()) {
        let signature = sk.sign(MSG);
        prop_assert!(sk.verifying_key().verify(MSG, &signature).is_ok());
    }

    #[test]
    #[cfg(feature = "der")]
    fn sign_and_verify_der(sk in signing_key()) {
        let signature = sk.sign(MSG);
        let signature_der_bytes = signature.to_der().to_vec();
        let signature = Signature::from_der(&signature_der_bytes).expect("decoded Signature failed");
        prop_assert!(sk.verifying_key().verify(MSG, &signature).is_ok());
    }

    #[test]
    fn reject_invalid_signature(sk in signing_key(), byte in 0usize..64, bit in 0usize..8) {
        let mut signature_bytes = sk.sign(MSG).to_bytes();

        // tweak signature to make it invalid
        signature_bytes[byte] ^= 1 << bit;

        // a flipped bit can push r or s out of range, in which case parsing
        // already rejects the signature
        if let Ok(signature) = Signature::from_bytes(&signature_bytes) {
            prop_assert!(sk.verifying_key().verify(MSG, &signature).is_err());
        }
    }
}

/*!
    Raw ECDSA primitive.

    The engine receives the exact bytes to treat as the message hash and
    must not hash them again (the "NONEwithECDSA" mode). DER signature
    decoding happens here because the encoding is curve-specific.

    Prehashes shorter than the curve's scalar are left-padded with zeros.
    ECDSA reads the hash as a big-endian integer, so the padded value is the
    same number; padding only avoids the provider's minimum-length check
    (a 20-byte SHA-1 digest on P-384, for instance).
*/

use std::borrow::Cow;
use std::sync::Arc;

use ecdsa::signature::hazmat::PrehashVerifier;
use thiserror::Error;

use crate::key::PublicKey;

/**
    Failure to complete a raw verification attempt.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("signature encoding: {0}")]
    SignatureEncoding(String),
    #[error("unsupported key: {0}")]
    UnsupportedKey(String),
    #[error("{0}")]
    Provider(String),
}

/**
    Capability to verify an ECDSA signature over an already-hashed message.

    Returns `Ok(true)` / `Ok(false)` when the verification equation was
    evaluated, and an error only when it could not be. Implementations are
    shared across threads by verifiers, hence the `Send + Sync` bound.
*/
pub trait RawEcdsaEngine: Send + Sync {
    fn verify_raw(
        &self,
        key: &PublicKey,
        prehash: &[u8],
        signature: &[u8],
    ) -> Result<bool, EngineError>;
}

impl<E: RawEcdsaEngine + ?Sized> RawEcdsaEngine for &E {
    fn verify_raw(
        &self,
        key: &PublicKey,
        prehash: &[u8],
        signature: &[u8],
    ) -> Result<bool, EngineError> {
        (**self).verify_raw(key, prehash, signature)
    }
}

impl<E: RawEcdsaEngine + ?Sized> RawEcdsaEngine for Box<E> {
    fn verify_raw(
        &self,
        key: &PublicKey,
        prehash: &[u8],
        signature: &[u8],
    ) -> Result<bool, EngineError> {
        (**self).verify_raw(key, prehash, signature)
    }
}

impl<E: RawEcdsaEngine + ?Sized> RawEcdsaEngine for Arc<E> {
    fn verify_raw(
        &self,
        key: &PublicKey,
        prehash: &[u8],
        signature: &[u8],
    ) -> Result<bool, EngineError> {
        (**self).verify_raw(key, prehash, signature)
    }
}

/**
    Default engine backed by the RustCrypto `p256` / `p384` crates.
    Stateless; one instance can serve any number of threads.
*/
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoEngine;

impl RawEcdsaEngine for RustCryptoEngine {
    fn verify_raw(
        &self,
        key: &PublicKey,
        prehash: &[u8],
        signature: &[u8],
    ) -> Result<bool, EngineError> {
        let prehash = widen_prehash(prehash, key.field_len());
        match key {
            PublicKey::P256(verifying_key) => {
                let signature = p256::ecdsa::Signature::from_der(signature)
                    .map_err(|e| EngineError::SignatureEncoding(e.to_string()))?;
                Ok(verifying_key.verify_prehash(&prehash, &signature).is_ok())
            }
            #[cfg(feature = "p384")]
            PublicKey::P384(verifying_key) => {
                let signature = p384::ecdsa::Signature::from_der(signature)
                    .map_err(|e| EngineError::SignatureEncoding(e.to_string()))?;
                Ok(verifying_key.verify_prehash(&prehash, &signature).is_ok())
            }
        }
    }
}

fn widen_prehash(prehash: &[u8], field_len: usize) -> Cow<'_, [u8]> {
    if prehash.len() >= field_len {
        return Cow::Borrowed(prehash);
    }
    let mut widened = vec![0u8; field_len];
    widened[field_len - prehash.len()..].copy_from_slice(prehash);
    Cow::Owned(widened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_keys;

    #[test]
    fn widen_short_prehash() {
        let widened = widen_prehash(&[0xaa; 20], 32);
        assert_eq!(widened.len(), 32);
        assert_eq!(&widened[..12], &[0u8; 12]);
        assert_eq!(&widened[12..], &[0xaa; 20]);
    }

    #[test]
    fn full_length_prehash_is_borrowed() {
        let prehash = [0x55u8; 48];
        assert!(matches!(widen_prehash(&prehash, 32), Cow::Borrowed(_)));
        assert!(matches!(widen_prehash(&prehash, 48), Cow::Borrowed(_)));
    }

    #[test]
    fn verifies_prehash_without_hashing() {
        let prehash = [0x11u8; 32];
        let key = test_keys::p256_public(&test_keys::P256_SCALAR_A);
        let sig = test_keys::p256_sign_prehash(&test_keys::P256_SCALAR_A, &prehash);
        assert!(RustCryptoEngine.verify_raw(&key, &prehash, &sig).unwrap());
    }

    #[test]
    fn wrong_prehash_is_false_not_error() {
        let key = test_keys::p256_public(&test_keys::P256_SCALAR_A);
        let sig = test_keys::p256_sign_prehash(&test_keys::P256_SCALAR_A, &[0x11; 32]);
        assert!(!RustCryptoEngine.verify_raw(&key, &[0x12; 32], &sig).unwrap());
    }

    #[test]
    fn short_prehash_matches_widened_prehash() {
        let sha1_like = [0x3cu8; 20];
        let mut widened = [0u8; 32];
        widened[12..].copy_from_slice(&sha1_like);

        let key = test_keys::p256_public(&test_keys::P256_SCALAR_A);
        let sig = test_keys::p256_sign_prehash(&test_keys::P256_SCALAR_A, &widened);
        assert!(RustCryptoEngine.verify_raw(&key, &sha1_like, &sig).unwrap());
    }

    #[test]
    fn garbage_signature_is_encoding_error() {
        let key = test_keys::p256_public(&test_keys::P256_SCALAR_A);
        let err = RustCryptoEngine
            .verify_raw(&key, &[0u8; 32], b"not a der signature")
            .unwrap_err();
        assert!(matches!(err, EngineError::SignatureEncoding(_)));
    }

    #[test]
    fn raw_r_s_is_not_accepted_as_der() {
        let key = test_keys::p256_public(&test_keys::P256_SCALAR_A);
        let err = RustCryptoEngine
            .verify_raw(&key, &[0u8; 32], &[0x01; 64])
            .unwrap_err();
        assert!(matches!(err, EngineError::SignatureEncoding(_)));
    }

    #[cfg(feature = "p384")]
    #[test]
    fn p384_accepts_sha1_length_prehash() {
        let sha1_like = [0x7eu8; 20];
        let mut widened = [0u8; 48];
        widened[28..].copy_from_slice(&sha1_like);

        let key = test_keys::p384_public(&test_keys::P384_SCALAR);
        let sig = test_keys::p384_sign_prehash(&test_keys::P384_SCALAR, &widened);
        assert!(RustCryptoEngine.verify_raw(&key, &sha1_like, &sig).unwrap());
    }

    #[test]
    fn shared_engine_handles() {
        let prehash = [0x22u8; 32];
        let key = test_keys::p256_public(&test_keys::P256_SCALAR_B);
        let sig = test_keys::p256_sign_prehash(&test_keys::P256_SCALAR_B, &prehash);

        let arc: Arc<dyn RawEcdsaEngine> = Arc::new(RustCryptoEngine);
        let boxed: Box<dyn RawEcdsaEngine> = Box::new(RustCryptoEngine);
        assert!(arc.verify_raw(&key, &prehash, &sig).unwrap());
        assert!(boxed.verify_raw(&key, &prehash, &sig).unwrap());
        assert!((&RustCryptoEngine).verify_raw(&key, &prehash, &sig).unwrap());
    }
}

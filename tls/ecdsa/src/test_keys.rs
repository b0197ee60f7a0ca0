/*!
    Deterministic key material and signing helpers for unit tests.

    Signatures are produced with RFC 6979 nonces over a caller-supplied
    prehash, so no RNG is involved and every run signs identical bytes.
*/

use ecdsa::signature::hazmat::PrehashSigner;
use hex_literal::hex;

use crate::key::PublicKey;

// RFC 6979 A.2.5 private key.
pub(crate) const P256_SCALAR_A: [u8; 32] =
    hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");

pub(crate) const P256_SCALAR_B: [u8; 32] =
    hex!("0f5c8e3b1a2d4c6e8f0a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60");

// RFC 6979 A.2.6 private key.
#[cfg(feature = "p384")]
pub(crate) const P384_SCALAR: [u8; 48] = hex!(
    "6b9d3dad2e1b8c1c05b19875b6659f4de23c3b667bf297ba"
    "9aa47740787137d896d5724e4c70a825f872c9ea60d2edf5"
);

pub(crate) fn p256_signing_key(scalar: &[u8; 32]) -> p256::ecdsa::SigningKey {
    p256::ecdsa::SigningKey::from_slice(scalar).unwrap()
}

pub(crate) fn p256_public(scalar: &[u8; 32]) -> PublicKey {
    PublicKey::from(p256::ecdsa::VerifyingKey::from(&p256_signing_key(scalar)))
}

/**
    DER-encoded P-256 signature over `prehash`, with no hashing applied.
*/
pub(crate) fn p256_sign_prehash(scalar: &[u8; 32], prehash: &[u8]) -> Vec<u8> {
    let signature: p256::ecdsa::Signature =
        p256_signing_key(scalar).sign_prehash(prehash).unwrap();
    signature.to_der().as_bytes().to_vec()
}

#[cfg(feature = "p384")]
pub(crate) fn p384_signing_key(scalar: &[u8; 48]) -> p384::ecdsa::SigningKey {
    p384::ecdsa::SigningKey::from_slice(scalar).unwrap()
}

#[cfg(feature = "p384")]
pub(crate) fn p384_public(scalar: &[u8; 48]) -> PublicKey {
    PublicKey::from(p384::ecdsa::VerifyingKey::from(&p384_signing_key(scalar)))
}

/**
    DER-encoded P-384 signature over `prehash`. The prehash must be at least
    24 bytes; callers widen shorter digests themselves.
*/
#[cfg(feature = "p384")]
pub(crate) fn p384_sign_prehash(scalar: &[u8; 48], prehash: &[u8]) -> Vec<u8> {
    let signature: p384::ecdsa::Signature =
        p384_signing_key(scalar).sign_prehash(prehash).unwrap();
    signature.to_der().as_bytes().to_vec()
}

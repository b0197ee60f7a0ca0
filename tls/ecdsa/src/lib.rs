#![allow(clippy::doc_overindented_list_items)]

/*!
    Raw ECDSA verification of TLS handshake signatures.

    The handshake layer computes the transcript digest; this crate decides
    which bytes of that digest an ECDSA signature covers and hands them to a
    [`RawEcdsaEngine`] that verifies without hashing again.
*/

mod digest;
mod engine;
mod error;
mod key;
mod verifier;

#[cfg(test)]
mod test_keys;

// Re-export the wire vocabulary from tls-core
pub use tls_core::{
    DigitallySigned, HashAlgorithm, NamedCurve, ProtocolVersion, SignatureAlgorithm,
    SignatureAndHashAlgorithm,
};

pub use self::digest::select_prehash;
pub use self::engine::{EngineError, RawEcdsaEngine, RustCryptoEngine};
pub use self::error::{ErrorKind, VerifyError, VerifyResult};
pub use self::key::PublicKey;
pub use self::verifier::{EcdsaVerifier, TlsVerifier, Verification};

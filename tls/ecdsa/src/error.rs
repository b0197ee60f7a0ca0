use thiserror::Error;

use tls_core::SignatureAlgorithm;

use crate::engine::EngineError;

/**
    Errors raised while constructing a verifier or attempting a verification.

    A signature that is well-formed but does not verify is not an error; it
    is reported as [`Verification::Invalid`](crate::Verification::Invalid).
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    // ── Construction ──────────────────────────────────────────────────
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    // ── Dispatch ──────────────────────────────────────────────────────
    #[error("{expected} verifier cannot verify {actual} signatures")]
    SchemeMismatch {
        expected: SignatureAlgorithm,
        actual: SignatureAlgorithm,
    },

    // ── Malformed input ───────────────────────────────────────────────
    #[error("legacy MD5/SHA-1 digest must be at least {expected} bytes, got {actual}")]
    LegacyDigestTooShort { expected: usize, actual: usize },
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    // ── Crypto provider ───────────────────────────────────────────────
    #[error("unable to process signature: {0}")]
    CryptoOperation(String),
}

/**
    Coarse classification of a [`VerifyError`].

    Every kind aborts the handshake; the distinction tells the caller whether
    the fault lies with its own wiring (`Construction`, `ProtocolMismatch`),
    with the peer's data (`MalformedInput`) or with the crypto provider.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Construction,
    ProtocolMismatch,
    MalformedInput,
    CryptoOperation,
}

impl VerifyError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPublicKey(_) => ErrorKind::Construction,
            Self::SchemeMismatch { .. } => ErrorKind::ProtocolMismatch,
            Self::LegacyDigestTooShort { .. } | Self::MalformedSignature(_) => {
                ErrorKind::MalformedInput
            }
            Self::CryptoOperation(_) => ErrorKind::CryptoOperation,
        }
    }
}

impl From<EngineError> for VerifyError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::SignatureEncoding(msg) => Self::MalformedSignature(msg),
            EngineError::UnsupportedKey(msg) | EngineError::Provider(msg) => {
                Self::CryptoOperation(msg)
            }
        }
    }
}

/**
    Type alias for results that may return a [`VerifyError`].
*/
pub type VerifyResult<T> = std::result::Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_taxonomy() {
        assert_eq!(
            VerifyError::InvalidPublicKey("empty".into()).kind(),
            ErrorKind::Construction
        );
        assert_eq!(
            VerifyError::SchemeMismatch {
                expected: SignatureAlgorithm::Ecdsa,
                actual: SignatureAlgorithm::Rsa,
            }
            .kind(),
            ErrorKind::ProtocolMismatch
        );
        assert_eq!(
            VerifyError::LegacyDigestTooShort {
                expected: 36,
                actual: 20
            }
            .kind(),
            ErrorKind::MalformedInput
        );
        assert_eq!(
            VerifyError::MalformedSignature("bad der".into()).kind(),
            ErrorKind::MalformedInput
        );
        assert_eq!(
            VerifyError::CryptoOperation("provider".into()).kind(),
            ErrorKind::CryptoOperation
        );
    }

    #[test]
    fn engine_errors_map_to_taxonomy() {
        let err = VerifyError::from(EngineError::SignatureEncoding("bad der".into()));
        assert_eq!(err, VerifyError::MalformedSignature("bad der".into()));

        let err = VerifyError::from(EngineError::Provider("hsm offline".into()));
        assert_eq!(err, VerifyError::CryptoOperation("hsm offline".into()));
        assert_eq!(err.to_string(), "unable to process signature: hsm offline");

        let err = VerifyError::from(EngineError::UnsupportedKey("secp521r1".into()));
        assert_eq!(err.kind(), ErrorKind::CryptoOperation);
    }

    #[test]
    fn scheme_mismatch_message_names_both_schemes() {
        let err = VerifyError::SchemeMismatch {
            expected: SignatureAlgorithm::Ecdsa,
            actual: SignatureAlgorithm::Ed25519,
        };
        assert_eq!(err.to_string(), "ecdsa verifier cannot verify ed25519 signatures");
    }
}

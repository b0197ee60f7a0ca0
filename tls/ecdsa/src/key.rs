use tls_core::NamedCurve;

use crate::error::{VerifyError, VerifyResult};

/**
    Elliptic-curve public key used to check handshake signatures.

    The handle is immutable; a verifier owns one for its whole lifetime.
    P-256 is always available, P-384 behind the `p384` feature.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    P256(p256::ecdsa::VerifyingKey),
    #[cfg(feature = "p384")]
    P384(p384::ecdsa::VerifyingKey),
}

impl PublicKey {
    /**
        Parse a SEC1-encoded point, inferring the curve from its length
        (compressed or uncompressed).
    */
    pub fn from_sec1_bytes(bytes: &[u8]) -> VerifyResult<Self> {
        let curve = match bytes.len() {
            0 => return Err(missing_key()),
            33 | 65 => NamedCurve::Secp256r1,
            49 | 97 => NamedCurve::Secp384r1,
            n => {
                return Err(VerifyError::InvalidPublicKey(format!(
                    "unrecognised SEC1 point length {n}"
                )));
            }
        };
        Self::from_sec1_bytes_for(curve, bytes)
    }

    /**
        Parse a SEC1-encoded point on an explicitly negotiated curve.
    */
    pub fn from_sec1_bytes_for(curve: NamedCurve, bytes: &[u8]) -> VerifyResult<Self> {
        if bytes.is_empty() {
            return Err(missing_key());
        }
        let invalid = |e: ecdsa::Error| VerifyError::InvalidPublicKey(format!("{curve}: {e}"));
        match curve {
            NamedCurve::Secp256r1 => p256::ecdsa::VerifyingKey::from_sec1_bytes(bytes)
                .map(Self::P256)
                .map_err(invalid),
            #[cfg(feature = "p384")]
            NamedCurve::Secp384r1 => p384::ecdsa::VerifyingKey::from_sec1_bytes(bytes)
                .map(Self::P384)
                .map_err(invalid),
            other => Err(VerifyError::InvalidPublicKey(format!(
                "unsupported curve {other}"
            ))),
        }
    }

    pub const fn curve(&self) -> NamedCurve {
        match self {
            Self::P256(_) => NamedCurve::Secp256r1,
            #[cfg(feature = "p384")]
            Self::P384(_) => NamedCurve::Secp384r1,
        }
    }

    /**
        Scalar size in bytes; prehashes shorter than this are widened before
        verification.
    */
    pub const fn field_len(&self) -> usize {
        match self {
            Self::P256(_) => 32,
            #[cfg(feature = "p384")]
            Self::P384(_) => 48,
        }
    }

    pub fn to_sec1_bytes(&self, compress: bool) -> Vec<u8> {
        match self {
            Self::P256(key) => key.to_encoded_point(compress).as_bytes().to_vec(),
            #[cfg(feature = "p384")]
            Self::P384(key) => key.to_encoded_point(compress).as_bytes().to_vec(),
        }
    }
}

impl From<p256::ecdsa::VerifyingKey> for PublicKey {
    fn from(key: p256::ecdsa::VerifyingKey) -> Self {
        Self::P256(key)
    }
}

#[cfg(feature = "p384")]
impl From<p384::ecdsa::VerifyingKey> for PublicKey {
    fn from(key: p384::ecdsa::VerifyingKey) -> Self {
        Self::P384(key)
    }
}

fn missing_key() -> VerifyError {
    VerifyError::InvalidPublicKey("public key is empty".into())
}

use crate::error::CodecError;
use crate::types::{ProtocolVersion, SignatureAndHashAlgorithm};

/**
    A TLS `DigitallySigned` structure as it appears in ServerKeyExchange and
    CertificateVerify messages.

    Wire layout:
      if version >= TLS 1.2:
        [0..2]    algorithm: SignatureAndHashAlgorithm (hash, signature)
      [..+2]    signature_len: u16 big-endian
      [..]      signature: signature_len bytes

    The algorithm is absent for SSLv3 through TLS 1.1, where the signed
    digest follows the legacy `MD5 || SHA-1` convention.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitallySigned {
    /**
        Negotiated descriptor. `None` selects legacy digest handling.
    */
    pub algorithm: Option<SignatureAndHashAlgorithm>,
    /**
        Raw signature bytes; for ECDSA a DER `Ecdsa-Sig-Value`.
    */
    pub signature: Vec<u8>,
}

impl DigitallySigned {
    pub fn new(
        algorithm: Option<SignatureAndHashAlgorithm>,
        signature: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            algorithm,
            signature: signature.into(),
        }
    }

    /**
        Whether this signature uses the pre-TLS 1.2 digest convention.
    */
    pub const fn is_legacy(&self) -> bool {
        self.algorithm.is_none()
    }

    /**
        Decode a `DigitallySigned` for the given protocol version.
        The input must contain exactly one structure.
    */
    pub fn from_bytes(input: &[u8], version: ProtocolVersion) -> Result<Self, CodecError> {
        let mut offset = 0;

        let algorithm = if version.carries_signature_algorithm() {
            let bytes = read_array::<2>(input, offset, "signature algorithm")?;
            offset += 2;
            Some(SignatureAndHashAlgorithm::from_bytes(bytes))
        } else {
            None
        };

        let signature_len = u16::from_be_bytes(read_array::<2>(input, offset, "signature length")?);
        offset += 2;

        let end = offset + signature_len as usize;
        let signature = input
            .get(offset..end)
            .ok_or(CodecError::Truncated { field: "signature" })?
            .to_vec();

        if end != input.len() {
            return Err(CodecError::TrailingBytes {
                consumed: end,
                total: input.len(),
            });
        }

        Ok(Self {
            algorithm,
            signature,
        })
    }

    /**
        Serialize back to wire bytes.
    */
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let signature_len = u16::try_from(self.signature.len())
            .map_err(|_| CodecError::FieldTooLarge(self.signature.len()))?;

        let mut buf = Vec::with_capacity(4 + self.signature.len());
        if let Some(algorithm) = self.algorithm {
            buf.extend_from_slice(&algorithm.to_bytes());
        }
        buf.extend_from_slice(&signature_len.to_be_bytes());
        buf.extend_from_slice(&self.signature);
        Ok(buf)
    }
}

fn read_array<const N: usize>(
    input: &[u8],
    offset: usize,
    field: &'static str,
) -> Result<[u8; N], CodecError> {
    input
        .get(offset..offset + N)
        .and_then(|b| b.try_into().ok())
        .ok_or(CodecError::Truncated { field })
}

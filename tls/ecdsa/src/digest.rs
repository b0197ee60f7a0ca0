use tls_core::{LEGACY_DIGEST_LEN, MD5_DIGEST_LEN, SignatureAndHashAlgorithm};

use crate::error::{VerifyError, VerifyResult};

/**
    Select the bytes of a handshake digest that an ECDSA signature covers.

    - Legacy (`algorithm` is `None`, SSLv3 through TLS 1.1): the digest is
      `MD5 (16) || SHA-1 (20)`. ECDSA signs only the SHA-1 half, so bytes
      `[16..36]` are returned and the MD5 half is ignored. Shorter buffers
      are rejected rather than truncated.
    - Negotiated (`algorithm` is `Some`, TLS 1.2+): the digest is used as
      supplied.
*/
pub fn select_prehash(
    algorithm: Option<SignatureAndHashAlgorithm>,
    digest: &[u8],
) -> VerifyResult<&[u8]> {
    let Some(algorithm) = algorithm else {
        return digest
            .get(MD5_DIGEST_LEN..LEGACY_DIGEST_LEN)
            .ok_or(VerifyError::LegacyDigestTooShort {
                expected: LEGACY_DIGEST_LEN,
                actual: digest.len(),
            });
    };

    if let Some(expected) = algorithm.hash.output_len()
        && expected != digest.len()
    {
        tracing::debug!(
            %algorithm,
            expected,
            actual = digest.len(),
            "digest length differs from negotiated hash, using it verbatim"
        );
    }

    Ok(digest)
}

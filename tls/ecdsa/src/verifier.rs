use tls_core::{DigitallySigned, SignatureAlgorithm, SignatureAndHashAlgorithm};

use crate::digest::select_prehash;
use crate::engine::{RawEcdsaEngine, RustCryptoEngine};
use crate::error::{VerifyError, VerifyResult};
use crate::key::PublicKey;

/**
    Outcome of a verification that ran to completion.

    `Invalid` is a legitimate answer (the signature does not match this key
    and digest); failures to attempt verification are [`VerifyError`]s.
*/
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verification {
    Valid,
    Invalid,
}

impl Verification {
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for Verification {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

/**
    Verifier for one signature scheme, driven by the handshake layer with
    the received `DigitallySigned` and its own transcript digest.
*/
pub trait TlsVerifier {
    fn verify_signature(
        &self,
        signed: &DigitallySigned,
        digest: &[u8],
    ) -> VerifyResult<Verification>;
}

/**
    Raw ECDSA verifier for handshake signatures.

    Holds an immutable public key and a stateless engine, so a single
    instance may be shared between threads and called concurrently.
*/
#[derive(Debug, Clone)]
pub struct EcdsaVerifier<E = RustCryptoEngine> {
    public_key: PublicKey,
    engine: E,
}

impl EcdsaVerifier<RustCryptoEngine> {
    pub fn with_default_engine(public_key: PublicKey) -> Self {
        Self::new(public_key, RustCryptoEngine)
    }
}

impl<E: RawEcdsaEngine> EcdsaVerifier<E> {
    pub fn new(public_key: PublicKey, engine: E) -> Self {
        Self { public_key, engine }
    }

    /**
        Build a verifier from a SEC1-encoded point.
        Fails with [`VerifyError::InvalidPublicKey`] if the key is empty or invalid.
    */
    pub fn from_sec1_bytes(public_key: &[u8], engine: E) -> VerifyResult<Self> {
        let public_key = PublicKey::from_sec1_bytes(public_key)?;
        Ok(Self::new(public_key, engine))
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /**
        Verify `signature` (DER `Ecdsa-Sig-Value`) over `digest`.

        With `algorithm` present the whole digest is verified as-is; it
        must name ECDSA or the call fails with
        [`VerifyError::SchemeMismatch`] before any input is examined.
        Without it the digest is read as the legacy `MD5 || SHA-1` buffer
        and only the SHA-1 half is verified.
    */
    pub fn verify(
        &self,
        algorithm: Option<SignatureAndHashAlgorithm>,
        signature: &[u8],
        digest: &[u8],
    ) -> VerifyResult<Verification> {
        if let Some(algorithm) = algorithm
            && algorithm.signature != SignatureAlgorithm::Ecdsa
        {
            tracing::warn!(%algorithm, "signature scheme dispatched to ECDSA verifier");
            return Err(VerifyError::SchemeMismatch {
                expected: SignatureAlgorithm::Ecdsa,
                actual: algorithm.signature,
            });
        }

        let prehash = select_prehash(algorithm, digest)?;
        tracing::trace!(
            curve = %self.public_key.curve(),
            legacy = algorithm.is_none(),
            prehash_len = prehash.len(),
            prehash_prefix = %hex::encode(&prehash[..prehash.len().min(8)]),
            "verifying raw ECDSA signature"
        );

        let valid = self
            .engine
            .verify_raw(&self.public_key, prehash, signature)
            .map_err(|e| {
                tracing::warn!(error = %e, "raw ECDSA verification could not complete");
                VerifyError::from(e)
            })?;

        if !valid {
            tracing::debug!(curve = %self.public_key.curve(), "ECDSA signature did not verify");
        }
        Ok(Verification::from(valid))
    }
}

impl<E: RawEcdsaEngine> TlsVerifier for EcdsaVerifier<E> {
    fn verify_signature(
        &self,
        signed: &DigitallySigned,
        digest: &[u8],
    ) -> VerifyResult<Verification> {
        self.verify(signed.algorithm, &signed.signature, digest)
    }
}

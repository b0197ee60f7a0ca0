use core::fmt;
use core::str::FromStr;

use crate::constants::{
    MD5_DIGEST_LEN, SHA1_DIGEST_LEN, SHA256_DIGEST_LEN, SHA384_DIGEST_LEN, SHA512_DIGEST_LEN,
};
use crate::error::ParseError;
use crate::utils::{eq_ignore_ascii_case, trim_ascii};

/**
    Signature algorithm tag from the TLS `SignatureAndHashAlgorithm` pair.
    Ref: RFC 5246 §7.4.1.4.1, RFC 8446 §4.2.3 (low byte of `SignatureScheme`).

    Values outside the registry are preserved in `Unknown` so that a peer's
    offer can be round-tripped and reported accurately.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignatureAlgorithm {
    Anonymous,
    Rsa,
    Dsa,
    Ecdsa,
    RsaPssRsaeSha256,
    RsaPssRsaeSha384,
    RsaPssRsaeSha512,
    Ed25519,
    Ed448,
    RsaPssPssSha256,
    RsaPssPssSha384,
    RsaPssPssSha512,
    Unknown(u8),
}

impl SignatureAlgorithm {
    pub const fn from_u8(u: u8) -> Self {
        match u {
            0 => Self::Anonymous,
            1 => Self::Rsa,
            2 => Self::Dsa,
            3 => Self::Ecdsa,
            4 => Self::RsaPssRsaeSha256,
            5 => Self::RsaPssRsaeSha384,
            6 => Self::RsaPssRsaeSha512,
            7 => Self::Ed25519,
            8 => Self::Ed448,
            9 => Self::RsaPssPssSha256,
            10 => Self::RsaPssPssSha384,
            11 => Self::RsaPssPssSha512,
            _ => Self::Unknown(u),
        }
    }

    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Anonymous => 0,
            Self::Rsa => 1,
            Self::Dsa => 2,
            Self::Ecdsa => 3,
            Self::RsaPssRsaeSha256 => 4,
            Self::RsaPssRsaeSha384 => 5,
            Self::RsaPssRsaeSha512 => 6,
            Self::Ed25519 => 7,
            Self::Ed448 => 8,
            Self::RsaPssPssSha256 => 9,
            Self::RsaPssPssSha384 => 10,
            Self::RsaPssPssSha512 => 11,
            Self::Unknown(u) => u,
        }
    }

    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            3 if eq_ignore_ascii_case(name, b"rsa") => Some(Self::Rsa),
            3 if eq_ignore_ascii_case(name, b"dsa") => Some(Self::Dsa),
            5 if eq_ignore_ascii_case(name, b"ecdsa") => Some(Self::Ecdsa),
            5 if eq_ignore_ascii_case(name, b"ed448") => Some(Self::Ed448),
            7 if eq_ignore_ascii_case(name, b"ed25519") => Some(Self::Ed25519),
            9 if eq_ignore_ascii_case(name, b"anonymous") => Some(Self::Anonymous),
            18 if eq_ignore_ascii_case(name, b"rsa_pss_pss_sha256") => Some(Self::RsaPssPssSha256),
            18 if eq_ignore_ascii_case(name, b"rsa_pss_pss_sha384") => Some(Self::RsaPssPssSha384),
            18 if eq_ignore_ascii_case(name, b"rsa_pss_pss_sha512") => Some(Self::RsaPssPssSha512),
            19 if eq_ignore_ascii_case(name, b"rsa_pss_rsae_sha256") => {
                Some(Self::RsaPssRsaeSha256)
            }
            19 if eq_ignore_ascii_case(name, b"rsa_pss_rsae_sha384") => {
                Some(Self::RsaPssRsaeSha384)
            }
            19 if eq_ignore_ascii_case(name, b"rsa_pss_rsae_sha512") => {
                Some(Self::RsaPssRsaeSha512)
            }
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Rsa => "rsa",
            Self::Dsa => "dsa",
            Self::Ecdsa => "ecdsa",
            Self::RsaPssRsaeSha256 => "rsa_pss_rsae_sha256",
            Self::RsaPssRsaeSha384 => "rsa_pss_rsae_sha384",
            Self::RsaPssRsaeSha512 => "rsa_pss_rsae_sha512",
            Self::Ed25519 => "ed25519",
            Self::Ed448 => "ed448",
            Self::RsaPssPssSha256 => "rsa_pss_pss_sha256",
            Self::RsaPssPssSha384 => "rsa_pss_pss_sha384",
            Self::RsaPssPssSha512 => "rsa_pss_pss_sha512",
            Self::Unknown(_) => "unknown",
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(u) => write!(f, "signature_algorithm({u})"),
            _ => f.write_str(self.to_name()),
        }
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "signature algorithm",
            value: s.to_owned(),
        })
    }
}

impl From<u8> for SignatureAlgorithm {
    fn from(u: u8) -> Self {
        Self::from_u8(u)
    }
}

impl From<SignatureAlgorithm> for u8 {
    fn from(sig: SignatureAlgorithm) -> Self {
        sig.to_u8()
    }
}

/**
    Hash algorithm tag from the TLS `SignatureAndHashAlgorithm` pair.
    Ref: RFC 5246 §7.4.1.4.1. `Intrinsic` (8) marks schemes that hash
    internally (EdDSA, TLS 1.3 RSA-PSS code points).
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashAlgorithm {
    None,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Intrinsic,
    Unknown(u8),
}

impl HashAlgorithm {
    pub const fn from_u8(u: u8) -> Self {
        match u {
            0 => Self::None,
            1 => Self::Md5,
            2 => Self::Sha1,
            3 => Self::Sha224,
            4 => Self::Sha256,
            5 => Self::Sha384,
            6 => Self::Sha512,
            8 => Self::Intrinsic,
            _ => Self::Unknown(u),
        }
    }

    pub const fn to_u8(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Md5 => 1,
            Self::Sha1 => 2,
            Self::Sha224 => 3,
            Self::Sha256 => 4,
            Self::Sha384 => 5,
            Self::Sha512 => 6,
            Self::Intrinsic => 8,
            Self::Unknown(u) => u,
        }
    }

    /**
        Digest length in bytes, or `None` when the tag does not name a
        concrete hash function.
    */
    pub const fn output_len(self) -> Option<usize> {
        match self {
            Self::Md5 => Some(MD5_DIGEST_LEN),
            Self::Sha1 => Some(SHA1_DIGEST_LEN),
            Self::Sha224 => Some(28),
            Self::Sha256 => Some(SHA256_DIGEST_LEN),
            Self::Sha384 => Some(SHA384_DIGEST_LEN),
            Self::Sha512 => Some(SHA512_DIGEST_LEN),
            Self::None | Self::Intrinsic | Self::Unknown(_) => None,
        }
    }

    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            3 if eq_ignore_ascii_case(name, b"md5") => Some(Self::Md5),
            4 if eq_ignore_ascii_case(name, b"none") => Some(Self::None),
            4 if eq_ignore_ascii_case(name, b"sha1") => Some(Self::Sha1),
            6 if eq_ignore_ascii_case(name, b"sha224") => Some(Self::Sha224),
            6 if eq_ignore_ascii_case(name, b"sha256") => Some(Self::Sha256),
            6 if eq_ignore_ascii_case(name, b"sha384") => Some(Self::Sha384),
            6 if eq_ignore_ascii_case(name, b"sha512") => Some(Self::Sha512),
            9 if eq_ignore_ascii_case(name, b"intrinsic") => Some(Self::Intrinsic),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Intrinsic => "intrinsic",
            Self::Unknown(_) => "unknown",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(u) => write!(f, "hash_algorithm({u})"),
            _ => f.write_str(self.to_name()),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "hash algorithm",
            value: s.to_owned(),
        })
    }
}

impl From<u8> for HashAlgorithm {
    fn from(u: u8) -> Self {
        Self::from_u8(u)
    }
}

impl From<HashAlgorithm> for u8 {
    fn from(hash: HashAlgorithm) -> Self {
        hash.to_u8()
    }
}

/**
    Negotiated signature descriptor: the (hash, signature) pair carried by a
    TLS 1.2+ `DigitallySigned` structure.

    Wire layout (2 bytes): `[0]` hash, `[1]` signature.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureAndHashAlgorithm {
    pub hash: HashAlgorithm,
    pub signature: SignatureAlgorithm,
}

impl SignatureAndHashAlgorithm {
    pub const ECDSA_SHA1: Self = Self::new(HashAlgorithm::Sha1, SignatureAlgorithm::Ecdsa);
    pub const ECDSA_SHA256: Self = Self::new(HashAlgorithm::Sha256, SignatureAlgorithm::Ecdsa);
    pub const ECDSA_SHA384: Self = Self::new(HashAlgorithm::Sha384, SignatureAlgorithm::Ecdsa);
    pub const ECDSA_SHA512: Self = Self::new(HashAlgorithm::Sha512, SignatureAlgorithm::Ecdsa);

    pub const fn new(hash: HashAlgorithm, signature: SignatureAlgorithm) -> Self {
        Self { hash, signature }
    }

    pub const fn from_u16(u: u16) -> Self {
        let [hash, signature] = u.to_be_bytes();
        Self::from_bytes([hash, signature])
    }

    pub const fn to_u16(self) -> u16 {
        u16::from_be_bytes(self.to_bytes())
    }

    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self {
            hash: HashAlgorithm::from_u8(bytes[0]),
            signature: SignatureAlgorithm::from_u8(bytes[1]),
        }
    }

    pub const fn to_bytes(self) -> [u8; 2] {
        [self.hash.to_u8(), self.signature.to_u8()]
    }
}

impl fmt::Display for SignatureAndHashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hash {
            HashAlgorithm::Intrinsic => write!(f, "{}", self.signature),
            hash => write!(f, "{}_{}", self.signature, hash),
        }
    }
}

impl FromStr for SignatureAndHashAlgorithm {
    type Err = ParseError;

    /**
        Accepts either `<signature>_<hash>` (e.g. `ecdsa_sha256`) or a bare
        signature name, which is paired with the intrinsic hash.
    */
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError {
            kind: "signature and hash algorithm",
            value: s.to_owned(),
        };

        if let Some(signature) = SignatureAlgorithm::from_name(s.as_bytes()) {
            return Ok(Self::new(HashAlgorithm::Intrinsic, signature));
        }

        let (signature, hash) = s.trim().rsplit_once('_').ok_or_else(err)?;
        let signature = SignatureAlgorithm::from_name(signature.as_bytes()).ok_or_else(err)?;
        let hash = HashAlgorithm::from_name(hash.as_bytes()).ok_or_else(err)?;
        Ok(Self::new(hash, signature))
    }
}

impl From<u16> for SignatureAndHashAlgorithm {
    fn from(u: u16) -> Self {
        Self::from_u16(u)
    }
}

impl From<SignatureAndHashAlgorithm> for u16 {
    fn from(alg: SignatureAndHashAlgorithm) -> Self {
        alg.to_u16()
    }
}

/**
    Named elliptic curve (TLS `NamedGroup`).
    Ref: RFC 8422 §5.1.1, RFC 8446 §4.2.7.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NamedCurve {
    Secp256r1,
    Secp384r1,
    Secp521r1,
    X25519,
    X448,
    Unknown(u16),
}

impl NamedCurve {
    pub const fn from_u16(u: u16) -> Self {
        match u {
            23 => Self::Secp256r1,
            24 => Self::Secp384r1,
            25 => Self::Secp521r1,
            29 => Self::X25519,
            30 => Self::X448,
            _ => Self::Unknown(u),
        }
    }

    pub const fn to_u16(self) -> u16 {
        match self {
            Self::Secp256r1 => 23,
            Self::Secp384r1 => 24,
            Self::Secp521r1 => 25,
            Self::X25519 => 29,
            Self::X448 => 30,
            Self::Unknown(u) => u,
        }
    }

    /**
        Size in bytes of a field element (and of an ECDSA scalar) for the
        prime curves usable with ECDSA.
    */
    pub const fn field_len(self) -> Option<usize> {
        match self {
            Self::Secp256r1 => Some(32),
            Self::Secp384r1 => Some(48),
            Self::Secp521r1 => Some(66),
            Self::X25519 | Self::X448 | Self::Unknown(_) => None,
        }
    }

    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            4 if eq_ignore_ascii_case(name, b"x448") => Some(Self::X448),
            5 if eq_ignore_ascii_case(name, b"p-256") => Some(Self::Secp256r1),
            5 if eq_ignore_ascii_case(name, b"p-384") => Some(Self::Secp384r1),
            5 if eq_ignore_ascii_case(name, b"p-521") => Some(Self::Secp521r1),
            6 if eq_ignore_ascii_case(name, b"x25519") => Some(Self::X25519),
            9 if eq_ignore_ascii_case(name, b"secp256r1") => Some(Self::Secp256r1),
            9 if eq_ignore_ascii_case(name, b"secp384r1") => Some(Self::Secp384r1),
            9 if eq_ignore_ascii_case(name, b"secp521r1") => Some(Self::Secp521r1),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Secp256r1 => "secp256r1",
            Self::Secp384r1 => "secp384r1",
            Self::Secp521r1 => "secp521r1",
            Self::X25519 => "x25519",
            Self::X448 => "x448",
            Self::Unknown(_) => "unknown",
        }
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(u) => write!(f, "named_curve({u})"),
            _ => f.write_str(self.to_name()),
        }
    }
}

impl FromStr for NamedCurve {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "named curve",
            value: s.to_owned(),
        })
    }
}

impl From<u16> for NamedCurve {
    fn from(u: u16) -> Self {
        Self::from_u16(u)
    }
}

impl From<NamedCurve> for u16 {
    fn from(curve: NamedCurve) -> Self {
        curve.to_u16()
    }
}

/**
    Negotiated protocol version.

    The version decides whether handshake signatures carry an explicit
    `SignatureAndHashAlgorithm` (TLS 1.2 and later) or use the legacy
    `MD5 || SHA-1` digest convention (SSLv3 through TLS 1.1).
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolVersion {
    Ssl3,
    Tls10,
    Tls11,
    Tls12,
    Tls13,
    Unknown(u16),
}

impl ProtocolVersion {
    pub const fn from_u16(u: u16) -> Self {
        match u {
            0x0300 => Self::Ssl3,
            0x0301 => Self::Tls10,
            0x0302 => Self::Tls11,
            0x0303 => Self::Tls12,
            0x0304 => Self::Tls13,
            _ => Self::Unknown(u),
        }
    }

    pub const fn to_u16(self) -> u16 {
        match self {
            Self::Ssl3 => 0x0300,
            Self::Tls10 => 0x0301,
            Self::Tls11 => 0x0302,
            Self::Tls12 => 0x0303,
            Self::Tls13 => 0x0304,
            Self::Unknown(u) => u,
        }
    }

    /**
        Whether `DigitallySigned` structures in this version are prefixed
        with a `SignatureAndHashAlgorithm`.
    */
    pub const fn carries_signature_algorithm(self) -> bool {
        self.to_u16() >= 0x0303
    }

    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            5 if eq_ignore_ascii_case(name, b"sslv3") => Some(Self::Ssl3),
            5 if eq_ignore_ascii_case(name, b"tlsv1") => Some(Self::Tls10),
            7 if eq_ignore_ascii_case(name, b"tlsv1.0") => Some(Self::Tls10),
            7 if eq_ignore_ascii_case(name, b"tlsv1.1") => Some(Self::Tls11),
            7 if eq_ignore_ascii_case(name, b"tlsv1.2") => Some(Self::Tls12),
            7 if eq_ignore_ascii_case(name, b"tlsv1.3") => Some(Self::Tls13),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Ssl3 => "SSLv3",
            Self::Tls10 => "TLSv1",
            Self::Tls11 => "TLSv1.1",
            Self::Tls12 => "TLSv1.2",
            Self::Tls13 => "TLSv1.3",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(u) => write!(f, "0x{u:04x}"),
            _ => f.write_str(self.to_name()),
        }
    }
}

impl FromStr for ProtocolVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "protocol version",
            value: s.to_owned(),
        })
    }
}

impl From<u16> for ProtocolVersion {
    fn from(u: u16) -> Self {
        Self::from_u16(u)
    }
}

impl From<ProtocolVersion> for u16 {
    fn from(v: ProtocolVersion) -> Self {
        v.to_u16()
    }
}

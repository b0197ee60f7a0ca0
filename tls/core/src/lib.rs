#![allow(clippy::doc_overindented_list_items)]

mod constants;
mod error;
mod signed;
mod types;

pub mod utils;

pub use self::constants::{
    LEGACY_DIGEST_LEN, MD5_DIGEST_LEN, SHA1_DIGEST_LEN, SHA256_DIGEST_LEN, SHA384_DIGEST_LEN,
    SHA512_DIGEST_LEN,
};
pub use self::error::{CodecError, ParseError};
pub use self::signed::DigitallySigned;
pub use self::types::{
    HashAlgorithm, NamedCurve, ProtocolVersion, SignatureAlgorithm, SignatureAndHashAlgorithm,
};
pub use self::utils::{eq_ignore_ascii_case, trim_ascii};

/*!
    Digest lengths used by TLS handshake signatures.

    Before TLS 1.2 the handshake signed a combined `MD5 || SHA-1` digest
    (36 bytes). ECDSA signatures in that mode cover only the SHA-1 half.
*/

pub const MD5_DIGEST_LEN: usize = 16;
pub const SHA1_DIGEST_LEN: usize = 20;
pub const SHA256_DIGEST_LEN: usize = 32;
pub const SHA384_DIGEST_LEN: usize = 48;
pub const SHA512_DIGEST_LEN: usize = 64;

/**
    Length of the legacy `MD5 || SHA-1` handshake digest.
*/
pub const LEGACY_DIGEST_LEN: usize = MD5_DIGEST_LEN + SHA1_DIGEST_LEN;

use thiserror::Error;

/**
    Errors from decoding or encoding TLS wire structures.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("input truncated while reading {field}")]
    Truncated { field: &'static str },

    #[error("trailing bytes: consumed {consumed} of {total}")]
    TrailingBytes { consumed: usize, total: usize },

    #[error("field too large to encode ({0} bytes, max 65535)")]
    FieldTooLarge(usize),
}

/**
    Error returned by `FromStr` implementations on enum types.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

//! Error type shared by both archive directions.

use thiserror::Error;

/// Fatal errors raised while loading or saving a document.
///
/// Every variant aborts the enclosing [`load`](crate::load) or
/// [`save`](crate::save) call. The engine never recovers locally and never
/// substitutes a default for a value it failed to read.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The document declares a schema version outside the supported range.
    #[error("unsupported file version {found}, expected {min} to {max}")]
    UnsupportedVersion { found: u32, min: u32, max: u32 },

    /// The next object member is not the one the caller asked for.
    #[error("unexpected or missing field: expected `{expected}`, found `{found}`")]
    UnexpectedField { expected: String, found: String },

    /// A named field access happened while positioned on an array.
    #[error("cannot use a field name inside an array")]
    NameInsideArray,

    /// An unnamed value was written directly into an object scope.
    #[error("cannot write an unnamed value into an object")]
    UnnamedValue,

    /// A stored integer does not fit in the target type.
    #[error("value {value} does not fit in {target}")]
    IntegerOverflow { value: i128, target: &'static str },

    /// A date field is not in ISO-8601 basic form.
    #[error("malformed date `{text}`, expected YYYYMMDD")]
    MalformedDate { text: String },

    /// A bitset field is not the expected run of binary digits.
    #[error("bitset `{text}` is not {width} binary digits")]
    MalformedBitset { text: String, width: usize },

    /// A mapping member name does not parse as an integer key.
    #[error("object key `{key}` is not an integer")]
    KeyFormat { key: String },

    /// The node kind does not match the target type.
    #[error("expected a {expected} value")]
    TypeMismatch { expected: &'static str },

    /// A stored integer matches no variant of the target enum.
    #[error("value {value} is not a valid {target}")]
    UnknownEnumValue { value: i32, target: &'static str },

    /// A positional read ran past the end of the current scope.
    #[error("no more values in the current scope")]
    ScopeExhausted,

    /// The input is not well-formed JSON.
    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

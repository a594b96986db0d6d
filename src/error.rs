//! Error types shared by every layer of the crate.
//!
//! All failures are deterministic functions of the caller's input, so none
//! of them is worth retrying. Each class of failure gets its own variant so
//! callers can tell a corrupt stored credential apart from a bad request.

use thiserror::Error;

use crate::derivation::scrypt::ScryptParamError;

/// Errors raised while parsing an encoded credential string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The string did not split into exactly five `$`-delimited fields.
    #[error("expected 5 '$'-delimited fields, found {0}")]
    FieldCount(usize),

    /// The string did not start with the `$` delimiter.
    #[error("credential must start with '$'")]
    MissingPrefix,

    /// The version tag is not the one this codec reads.
    #[error("unknown version tag '{found}', expected '{expected}'")]
    VersionTag {
        expected: &'static str,
        found: String,
    },

    /// The parameter field is not a hexadecimal 32-bit integer.
    #[error("parameter field '{0}' is not valid hexadecimal")]
    Params(String),

    /// Bits outside the documented layout are set.
    #[error("parameter field {0:#x} sets reserved bits")]
    ReservedBits(u32),

    /// The salt field is not unpadded URL-safe base64.
    #[error("salt is not valid base64url: {0}")]
    Salt(base64::DecodeError),

    /// The derived-key field is not unpadded URL-safe base64.
    #[error("derived key is not valid base64url: {0}")]
    DerivedKey(base64::DecodeError),

    /// An empty derived key would match every password.
    #[error("derived key is empty")]
    EmptyDerivedKey,
}

/// The crate-wide error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Scrypt cost parameters are out of range or risk overflow.
    #[error("invalid scrypt parameters: {0}")]
    InvalidParams(#[from] ScryptParamError),

    /// Iteration count is zero or too large for the encoding.
    #[error("iteration count {0} is out of range")]
    InvalidIterations(u32),

    /// A credential must carry at least one byte of derived key.
    #[error("derived key length must be at least 1 byte")]
    InvalidKeyLength,

    /// The requested key exceeds what PBKDF2 can produce.
    #[error("derived key length {requested} exceeds the PBKDF2 maximum of {max} bytes")]
    KeyTooLong { requested: usize, max: u64 },

    /// The encoded credential is malformed.
    #[error("malformed credential: {0}")]
    Format(#[from] FormatError),

    /// The encoded HMAC code does not map to a known algorithm.
    #[error("unsupported HMAC algorithm code {0}")]
    UnsupportedAlgorithm(u8),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

//! Shared layout of `$`-delimited credential strings.
//!
//! ```text
//! "$" TAG "$" HEX(params) "$" BASE64URL_NOPAD(salt) "$" BASE64URL_NOPAD(derived)
//! ```
//!
//! Each codec picks its own tag and bit layout for `params`; splitting,
//! hex and base64 handling are common.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::{RngCore, rng};

use crate::error::FormatError;

/// Length of freshly generated salts, in bytes.
pub const SALT_LEN: usize = 16;

const DELIMITER: char = '$';
const FIELD_COUNT: usize = 5;

/// The decoded variable part of a credential string.
#[derive(Debug)]
pub(crate) struct Fields {
    pub params: u32,
    pub salt: Vec<u8>,
    pub derived: Vec<u8>,
}

/// Draws a fresh random salt from the thread-local CSPRNG.
pub(crate) fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rng().fill_bytes(&mut salt);
    salt
}

pub(crate) fn join(tag: &str, params: u32, salt: &[u8], derived: &[u8]) -> String {
    format!(
        "{DELIMITER}{tag}{DELIMITER}{params:x}{DELIMITER}{}{DELIMITER}{}",
        URL_SAFE_NO_PAD.encode(salt),
        URL_SAFE_NO_PAD.encode(derived),
    )
}

pub(crate) fn split(encoded: &str, tag: &'static str) -> Result<Fields, FormatError> {
    let fields: Vec<&str> = encoded.split(DELIMITER).collect();

    if fields.len() != FIELD_COUNT {
        return Err(FormatError::FieldCount(fields.len()));
    }
    if !fields[0].is_empty() {
        return Err(FormatError::MissingPrefix);
    }
    if fields[1] != tag {
        return Err(FormatError::VersionTag {
            expected: tag,
            found: fields[1].to_owned(),
        });
    }

    let params = parse_hex(fields[2])?;
    let salt = URL_SAFE_NO_PAD
        .decode(fields[3])
        .map_err(FormatError::Salt)?;
    let derived = URL_SAFE_NO_PAD
        .decode(fields[4])
        .map_err(FormatError::DerivedKey)?;

    if derived.is_empty() {
        return Err(FormatError::EmptyDerivedKey);
    }

    Ok(Fields {
        params,
        salt,
        derived,
    })
}

/// Parses a 32-bit hex integer of either case. Signs and whitespace,
/// which `from_str_radix` would otherwise tolerate, are rejected.
fn parse_hex(field: &str) -> Result<u32, FormatError> {
    let well_formed =
        !field.is_empty() && field.len() <= 8 && field.bytes().all(|b| b.is_ascii_hexdigit());
    if !well_formed {
        return Err(FormatError::Params(field.to_owned()));
    }

    u32::from_str_radix(field, 16).map_err(|_| FormatError::Params(field.to_owned()))
}

//! HMAC algorithm table.
//!
//! The set of keyed hashes that can sit underneath PBKDF2 is closed and
//! small, so it is modelled as an enum with a fixed, bidirectional mapping
//! to the 4-bit code stored in encoded credentials.

use core::fmt;

use crate::error::{Error, Result};

/// Keyed hash used as the PBKDF2 pseudorandom function.
///
/// The discriminant is the code written into the parameter field of an
/// encoded credential and must never change for an existing variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum HmacAlgorithm {
    /// HMAC-SHA-256 (code 0).
    #[default]
    Sha256 = 0,
    /// HMAC-SHA-224 (code 1).
    Sha224 = 1,
    /// HMAC-SHA-384 (code 2).
    Sha384 = 2,
    /// HMAC-SHA-512 (code 3).
    Sha512 = 3,
}

/// Code-indexed lookup table. `ALGORITHMS[a.code()] == a` for every variant.
const ALGORITHMS: [HmacAlgorithm; 4] = [
    HmacAlgorithm::Sha256,
    HmacAlgorithm::Sha224,
    HmacAlgorithm::Sha384,
    HmacAlgorithm::Sha512,
];

impl HmacAlgorithm {
    /// Every supported algorithm, ordered by code.
    pub const ALL: &'static [HmacAlgorithm] = &ALGORITHMS;

    /// Returns the numeric code used in encoded credentials.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Resolves a numeric code back to its algorithm.
    ///
    /// Unknown codes usually mean the record is corrupt or was written by a
    /// newer version of the format.
    pub fn from_code(code: u8) -> Result<Self> {
        ALGORITHMS
            .get(code as usize)
            .copied()
            .ok_or(Error::UnsupportedAlgorithm(code))
    }

    /// Output length of the MAC in bytes (`hLen`).
    pub const fn output_len(self) -> usize {
        match self {
            HmacAlgorithm::Sha224 => 28,
            HmacAlgorithm::Sha256 => 32,
            HmacAlgorithm::Sha384 => 48,
            HmacAlgorithm::Sha512 => 64,
        }
    }

    /// Conventional algorithm name.
    pub const fn name(self) -> &'static str {
        match self {
            HmacAlgorithm::Sha224 => "HmacSHA224",
            HmacAlgorithm::Sha256 => "HmacSHA256",
            HmacAlgorithm::Sha384 => "HmacSHA384",
            HmacAlgorithm::Sha512 => "HmacSHA512",
        }
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_both_ways() {
        for &alg in HmacAlgorithm::ALL {
            assert_eq!(HmacAlgorithm::from_code(alg.code()), Ok(alg));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            HmacAlgorithm::from_code(4),
            Err(Error::UnsupportedAlgorithm(4))
        );
        assert_eq!(
            HmacAlgorithm::from_code(15),
            Err(Error::UnsupportedAlgorithm(15))
        );
    }

    #[test]
    fn default_is_sha256_with_code_zero() {
        assert_eq!(HmacAlgorithm::default(), HmacAlgorithm::Sha256);
        assert_eq!(HmacAlgorithm::default().code(), 0);
    }
}

//! The `$h0$` iterated-HMAC credential.
//!
//! A cheaper sibling of the scrypt credential for places where memory
//! hardness is not affordable. The key is stretched with plain PBKDF2, and
//! the parameter field packs `alg:4 | iterations:24`, high to low.

use core::fmt;
use core::str::FromStr;

use subtle::ConstantTimeEq;
use tracing::warn;
use zeroize::Zeroizing;

use super::encoding::{self, generate_salt};
use super::password::Password;
use crate::derivation::pbkdf2::pbkdf2;
use crate::error::{Error, FormatError, Result};
use crate::hash::HmacAlgorithm;

/// Version tag of the iterated-HMAC credential format.
pub const HMAC_TAG: &str = "h0";

/// Largest iteration count the 24-bit field can hold.
pub const MAX_ITERATIONS: u32 = 0x00ff_ffff;

fn check_iterations(iterations: u32) -> Result<()> {
    if iterations == 0 || iterations > MAX_ITERATIONS {
        return Err(Error::InvalidIterations(iterations));
    }
    Ok(())
}

/// A parsed `$h0$` credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedHmac {
    pub algorithm: HmacAlgorithm,
    pub iterations: u32,
    pub salt: Vec<u8>,
    pub derived: Vec<u8>,
}

impl EncodedHmac {
    pub fn packed_params(&self) -> u32 {
        (u32::from(self.algorithm.code()) << 24) | self.iterations
    }

    pub fn parse(encoded: &str) -> Result<Self> {
        let fields = encoding::split(encoded, HMAC_TAG)?;
        if fields.params >> 28 != 0 {
            return Err(FormatError::ReservedBits(fields.params).into());
        }

        let algorithm = HmacAlgorithm::from_code((fields.params >> 24) as u8)?;
        let iterations = fields.params & MAX_ITERATIONS;
        check_iterations(iterations)?;

        Ok(Self {
            algorithm,
            iterations,
            salt: fields.salt,
            derived: fields.derived,
        })
    }

    pub fn verify(&self, password: &Password) -> Result<bool> {
        let actual = Zeroizing::new(pbkdf2(
            self.algorithm,
            password.as_bytes(),
            &self.salt,
            self.iterations,
            self.derived.len(),
        )?);

        Ok(actual.as_slice().ct_eq(self.derived.as_slice()).into())
    }
}

impl fmt::Display for EncodedHmac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoding::join(
            HMAC_TAG,
            self.packed_params(),
            &self.salt,
            &self.derived,
        ))
    }
}

impl FromStr for EncodedHmac {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Configuration for producing iterated-HMAC credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HmacHasher {
    pub algorithm: HmacAlgorithm,
    pub iterations: u32,
    pub dk_len: usize,
}

impl Default for HmacHasher {
    /// HMAC-SHA256, 600 000 iterations, 32-byte key.
    fn default() -> Self {
        Self {
            algorithm: HmacAlgorithm::default(),
            iterations: 600_000,
            dk_len: 32,
        }
    }
}

impl HmacHasher {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations,
            ..Default::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: HmacAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_key_len(mut self, dk_len: usize) -> Self {
        self.dk_len = dk_len;
        self
    }

    pub fn hash(&self, password: &Password) -> Result<String> {
        let salt = generate_salt();
        Ok(self.hash_with_salt(password, &salt)?.to_string())
    }

    pub fn hash_with_salt(&self, password: &Password, salt: &[u8]) -> Result<EncodedHmac> {
        check_iterations(self.iterations)?;
        if self.dk_len == 0 {
            return Err(Error::InvalidKeyLength);
        }

        let derived = pbkdf2(
            self.algorithm,
            password.as_bytes(),
            salt,
            self.iterations,
            self.dk_len,
        )?;

        Ok(EncodedHmac {
            algorithm: self.algorithm,
            iterations: self.iterations,
            salt: salt.to_vec(),
            derived,
        })
    }
}

/// Creates an encoded iterated-HMAC credential with HMAC-SHA256.
pub fn create_hmac(password: &Password, iterations: u32, dk_len: usize) -> Result<String> {
    HmacHasher::new(iterations)
        .with_key_len(dk_len)
        .hash(password)
}

/// Checks `password` against an encoded iterated-HMAC credential.
pub fn check_hmac(password: &Password, encoded: &str) -> Result<bool> {
    EncodedHmac::parse(encoded)?.verify(password)
}

/// Like [`check_hmac`], collapsing unreadable credentials into `false`.
pub fn verify_hmac(password: &Password, encoded: &str) -> bool {
    match check_hmac(password, encoded) {
        Ok(valid) => valid,
        Err(error) => {
            warn!(%error, "rejecting unreadable hmac credential");
            false
        }
    }
}

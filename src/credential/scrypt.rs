//! The `$s0$` scrypt credential.
//!
//! The parameter field packs the HMAC code and the cost parameters into a
//! single integer, high to low: `alg:4 | log2(N):4 | r:8 | p:8`.
//! With the default HMAC-SHA256 (code 0) the layout is the classic
//! `log2(N) << 16 | r << 8 | p`.

use core::fmt;
use core::str::FromStr;

use subtle::ConstantTimeEq;
use tracing::warn;
use zeroize::Zeroizing;

use super::encoding::{self, generate_salt};
use super::password::Password;
use crate::derivation::scrypt::{ScryptParams, scrypt};
use crate::error::{Error, FormatError, Result};
use crate::hash::HmacAlgorithm;

/// Version tag of the scrypt credential format.
pub const SCRYPT_TAG: &str = "s0";

/// A parsed `$s0$` credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedScrypt {
    pub algorithm: HmacAlgorithm,
    pub params: ScryptParams,
    pub salt: Vec<u8>,
    pub derived: Vec<u8>,
}

impl EncodedScrypt {
    /// Packs algorithm and cost parameters into the 24 used bits.
    pub fn packed_params(&self) -> u32 {
        (u32::from(self.algorithm.code()) << 20)
            | (u32::from(self.params.log_n()) << 16)
            | (u32::from(self.params.r()) << 8)
            | u32::from(self.params.p())
    }

    /// Parses an encoded credential string.
    pub fn parse(encoded: &str) -> Result<Self> {
        let fields = encoding::split(encoded, SCRYPT_TAG)?;
        let (algorithm, params) = unpack(fields.params)?;

        Ok(Self {
            algorithm,
            params,
            salt: fields.salt,
            derived: fields.derived,
        })
    }

    /// Re-derives the key for `password` and compares it in constant time.
    pub fn verify(&self, password: &Password) -> Result<bool> {
        let actual = Zeroizing::new(scrypt(
            self.algorithm,
            password.as_bytes(),
            &self.salt,
            self.params.n(),
            u32::from(self.params.r()),
            u32::from(self.params.p()),
            self.derived.len(),
        )?);

        Ok(actual.as_slice().ct_eq(self.derived.as_slice()).into())
    }
}

fn unpack(packed: u32) -> Result<(HmacAlgorithm, ScryptParams)> {
    if packed >> 24 != 0 {
        return Err(FormatError::ReservedBits(packed).into());
    }

    let algorithm = HmacAlgorithm::from_code(((packed >> 20) & 0xf) as u8)?;
    let params = ScryptParams::new(
        ((packed >> 16) & 0xf) as u8,
        ((packed >> 8) & 0xff) as u8,
        (packed & 0xff) as u8,
    )?;

    Ok((algorithm, params))
}

impl fmt::Display for EncodedScrypt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoding::join(
            SCRYPT_TAG,
            self.packed_params(),
            &self.salt,
            &self.derived,
        ))
    }
}

impl FromStr for EncodedScrypt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Configuration for producing scrypt credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScryptHasher {
    pub algorithm: HmacAlgorithm,
    pub params: ScryptParams,
    pub dk_len: usize,
}

impl Default for ScryptHasher {
    /// HMAC-SHA256, default cost parameters, 32-byte key.
    fn default() -> Self {
        Self {
            algorithm: HmacAlgorithm::default(),
            params: ScryptParams::default(),
            dk_len: 32,
        }
    }
}

impl ScryptHasher {
    pub fn new(params: ScryptParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: HmacAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_params(mut self, params: ScryptParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_key_len(mut self, dk_len: usize) -> Self {
        self.dk_len = dk_len;
        self
    }

    /// Hashes `password` under a fresh random salt and returns the
    /// encoded credential string.
    pub fn hash(&self, password: &Password) -> Result<String> {
        let salt = generate_salt();
        Ok(self.hash_with_salt(password, &salt)?.to_string())
    }

    /// Hashes `password` under a caller-supplied salt.
    ///
    /// Salts must never be reused across credentials; this exists for
    /// reproducible tests and migrations.
    pub fn hash_with_salt(&self, password: &Password, salt: &[u8]) -> Result<EncodedScrypt> {
        if self.dk_len == 0 {
            return Err(Error::InvalidKeyLength);
        }

        let derived = scrypt(
            self.algorithm,
            password.as_bytes(),
            salt,
            self.params.n(),
            u32::from(self.params.r()),
            u32::from(self.params.p()),
            self.dk_len,
        )?;

        Ok(EncodedScrypt {
            algorithm: self.algorithm,
            params: self.params,
            salt: salt.to_vec(),
            derived,
        })
    }
}

/// Creates an encoded scrypt credential with HMAC-SHA256.
///
/// `log_n` is the base-2 logarithm of the cost N, in `1..=15`.
///
/// # Example
///
/// ```rust, ignore
/// use passhash::credential::{Password, check, create};
///
/// let password = Password::from("correct horse");
/// let encoded = create(&password, 14, 8, 1, 32).unwrap();
/// assert!(check(&password, &encoded).unwrap());
/// ```
pub fn create(password: &Password, log_n: u8, r: u8, p: u8, dk_len: usize) -> Result<String> {
    let params = ScryptParams::new(log_n, r, p)?;
    ScryptHasher::new(params).with_key_len(dk_len).hash(password)
}

/// Checks `password` against an encoded scrypt credential.
///
/// Returns `Ok(false)` for a wrong password and `Err` for a credential
/// that cannot be read.
pub fn check(password: &Password, encoded: &str) -> Result<bool> {
    EncodedScrypt::parse(encoded)?.verify(password)
}

/// Like [`check`], but treats unreadable credentials as a failed match.
/// The reason is logged at `warn` level.
pub fn verify(password: &Password, encoded: &str) -> bool {
    match check(password, encoded) {
        Ok(valid) => valid,
        Err(error) => {
            warn!(%error, "rejecting unreadable scrypt credential");
            false
        }
    }
}

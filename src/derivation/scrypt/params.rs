//! Parameter definitions and validation for scrypt.
//!
//! Two levels of checking live here: the overflow guard applied to raw
//! `(N, r, p)` triples before any memory is allocated, and the narrower
//! ranges imposed by the 4/8/8-bit fields of the encoded credential.

use thiserror::Error;

/// Largest number of 128-byte units any buffer may span (`INT_MAX / 128`).
pub const LIMIT: u32 = i32::MAX as u32 / 128;

/// Errors that can occur during parameter validation.
///
/// Every variant is raised before the first allocation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScryptParamError {
    /// N must be a power of two and at least 2.
    #[error("N must be a power of two greater than 1, got {0}")]
    CostNotPowerOfTwo(u32),
    /// r must be at least 1.
    #[error("block size r must be at least 1")]
    ZeroBlockSize,
    /// p must be at least 1.
    #[error("parallelization p must be at least 1")]
    ZeroParallelism,
    /// `r > LIMIT / p`.
    #[error("block size r = {r} is too large for p = {p}")]
    BlockSizeTooLarge { r: u32, p: u32 },
    /// `N > LIMIT / r`.
    #[error("cost N = {n} is too large for r = {r}")]
    CostTooLarge { n: u32, r: u32 },
    /// The log2 cost does not fit the 4-bit field (1..=15).
    #[error("log2(N) = {0} is outside 1..=15")]
    LogCostOutOfRange(u8),
}

/// Checks a raw `(N, r, p)` triple against the overflow guard.
pub fn validate(n: u32, r: u32, p: u32) -> Result<(), ScryptParamError> {
    if n < 2 || !n.is_power_of_two() {
        return Err(ScryptParamError::CostNotPowerOfTwo(n));
    }
    if r == 0 {
        return Err(ScryptParamError::ZeroBlockSize);
    }
    if p == 0 {
        return Err(ScryptParamError::ZeroParallelism);
    }
    if r > LIMIT / p {
        return Err(ScryptParamError::BlockSizeTooLarge { r, p });
    }
    if n > LIMIT / r {
        return Err(ScryptParamError::CostTooLarge { n, r });
    }

    Ok(())
}

/// Cost parameters as stored in an encoded credential.
///
/// N is kept as its base-2 logarithm so that it fits the 4-bit field;
/// r and p are single bytes.
///
/// # Recommended Values
///
/// `log_n = 14, r = 8, p = 1` costs 16 MiB and roughly 50-100 ms on current
/// desktop hardware. Raise `log_n` first; raise `p` to trade wall-clock time
/// for CPU when the `parallel` feature is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScryptParams {
    log_n: u8,
    r: u8,
    p: u8,
}

impl ScryptParams {
    /// Largest representable log2 cost.
    pub const MAX_LOG_N: u8 = 15;

    /// Builds and validates a parameter set.
    pub fn new(log_n: u8, r: u8, p: u8) -> Result<Self, ScryptParamError> {
        if !(1..=Self::MAX_LOG_N).contains(&log_n) {
            return Err(ScryptParamError::LogCostOutOfRange(log_n));
        }

        let params = Self { log_n, r, p };
        validate(params.n(), u32::from(r), u32::from(p))?;

        Ok(params)
    }

    pub fn log_n(&self) -> u8 {
        self.log_n
    }

    /// Expanded cost `N = 2^log_n`.
    pub fn n(&self) -> u32 {
        1u32 << self.log_n
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn p(&self) -> u8 {
        self.p
    }

    /// Bytes of scratch memory one ROMix lane needs (`128 * r * N`).
    pub fn memory_per_lane(&self) -> usize {
        128 * self.r as usize * self.n() as usize
    }
}

impl Default for ScryptParams {
    /// Default parameters: N = 2^14, r = 8, p = 1.
    fn default() -> Self {
        Self {
            log_n: 14,
            r: 8,
            p: 1,
        }
    }
}

//! Password-based key derivation.
//!
//! - `pbkdf2`
//!   RFC 2898 key stretching over any supported HMAC.
//!
//! - `scrypt`
//!   The memory-hard scrypt construction built on top of PBKDF2 and
//!   Salsa20/8.

pub mod pbkdf2;
pub mod scrypt;

pub use pbkdf2::{max_key_len, pbkdf2, pbkdf2_into};
pub use scrypt::{ScryptParamError, ScryptParams, scrypt};

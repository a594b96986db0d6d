//! Password hashing and key derivation.
//!
//! This crate provides PBKDF2 and scrypt, plus a self-describing encoded
//! credential format that lets a verifier recompute a derived key later
//! without being told the original parameters out of band.
//!
//! The focus is on **interoperability and predictability**: scrypt is
//! reproduced bit for bit (RFC 7914), parameters are validated before any
//! memory is allocated, and every failure is reported as a typed error.
//!
//! # Module overview
//!
//! - `hash`
//!   The closed table of HMAC variants usable as the PBKDF2 pseudorandom
//!   function, with the stable numeric codes stored in credentials. The
//!   digests come from `sha2` and the MAC construction from `hmac`.
//!
//! - `derivation`
//!   The key derivation functions themselves:
//!   - `pbkdf2`: RFC 2898 key stretching.
//!   - `scrypt`: the memory-hard construction (Salsa20/8, BlockMix,
//!     ROMix) wrapped between two PBKDF2 passes. With the `parallel`
//!     feature (on by default) the `p` independent lanes run on the
//!     `rayon` thread pool; output is identical either way.
//!
//! - `credential`
//!   Encoding and verification of stored credentials:
//!
//!   ```text
//!   $s0$<hex params>$<base64url salt>$<base64url key>
//!   ```
//!
//!   `create` generates a random 16-byte salt, derives a key and packs
//!   everything into one string. `check` parses that string, re-derives
//!   with the embedded parameters and compares in constant time. A lighter
//!   `$h0$` format stretches with iterated HMAC instead of scrypt.
//!
//! - `error`
//!   The crate-wide [`Error`] type. Parameter, format, algorithm and
//!   length failures are distinct variants.
//!
//! # Design goals
//!
//! - Pure functions: no shared state crosses calls
//! - Fresh scratch memory per call, wiped after use
//! - Passwords are bytes; text is always UTF-8 encoded
//! - Closed enumerations instead of runtime registries
//!
//! Logging goes through `tracing`; the crate never installs a subscriber
//! and never logs password, salt or key material.

pub mod credential;
pub mod derivation;
pub mod error;
pub mod hash;

pub use credential::{Password, check, create, verify};
pub use error::{Error, FormatError, Result};
pub use hash::HmacAlgorithm;

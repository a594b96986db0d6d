//! scrypt memory-hard key derivation (RFC 7914).
//!
//! scrypt wraps a large pseudo-random memory buffer between two PBKDF2
//! passes, so that computing it cheaply requires as much memory as the
//! honest computation does.
//!
//! # Algorithm Overview
//!
//! 1. **Expansion**: `B = PBKDF2(P, S, 1, p * 128 * r)` produces `p`
//!    independent lanes of `128 * r` bytes.
//! 2. **Mixing**: each lane goes through ROMix, which fills a scratch array
//!    of N blocks with successive BlockMix outputs and then re-reads it at
//!    positions chosen by the block contents.
//! 3. **Compression**: `DK = PBKDF2(P, B, 1, dkLen)`.
//!
//! # Memory Organization
//!
//! - **Lane**: `128 * r` bytes, one per unit of `p`. Lanes never interact.
//! - **Scratch array**: `N` blocks of `128 * r` bytes per lane, allocated
//!   per call and wiped afterwards.
//! - **Sub-block**: 64 bytes, the unit Salsa20/8 operates on.

pub(crate) mod block;
pub mod core;
pub(crate) mod memory;
pub mod params;
pub(crate) mod salsa;

pub use self::core::scrypt;
pub use params::{LIMIT, ScryptParamError, ScryptParams};
pub use salsa::salsa20_8;

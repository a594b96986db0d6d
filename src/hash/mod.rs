//! Keyed hash functions available to the key-derivation layer.
//!
//! The digests themselves come from the `sha2` crate and are only ever used
//! through HMAC; this module owns the closed table of supported variants.

pub mod algorithm;

pub use algorithm::HmacAlgorithm;

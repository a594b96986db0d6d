use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::memory::ro_mix;
use super::params::validate;
use crate::derivation::pbkdf2::{pbkdf2, pbkdf2_into};
use crate::error::Result;
use crate::hash::HmacAlgorithm;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the scrypt derived key of `password`.
///
/// # Arguments
///
/// * `algorithm` - HMAC variant used by both PBKDF2 passes
/// * `password` - The password bytes
/// * `salt` - A random salt (16 bytes for encoded credentials)
/// * `n` - CPU/memory cost, a power of two greater than 1
/// * `r` - Block size multiplier
/// * `p` - Parallelization factor
/// * `dk_len` - Length of the derived key in bytes
///
/// # Returns
///
/// The derived key, or an error if the parameters are out of range. All
/// parameter checks run before any buffer is allocated.
///
/// # Example
///
/// ```rust, ignore
/// use passhash::derivation::scrypt;
/// use passhash::hash::HmacAlgorithm;
///
/// let dk = scrypt(HmacAlgorithm::Sha256, b"password", b"NaCl", 1024, 8, 16, 64).unwrap();
/// assert_eq!(dk.len(), 64);
/// ```
pub fn scrypt(
    algorithm: HmacAlgorithm,
    password: &[u8],
    salt: &[u8],
    n: u32,
    r: u32,
    p: u32,
    dk_len: usize,
) -> Result<Vec<u8>> {
    validate(n, r, p)?;

    debug!(%algorithm, n, r, p, dk_len, "deriving scrypt key");

    let lane_len = 128 * r as usize;
    let mut b = Zeroizing::new(vec![0u8; lane_len * p as usize]);
    pbkdf2_into(algorithm, password, salt, 1, &mut b)?;

    mix_lanes(&mut b, lane_len, n as usize, r as usize);

    pbkdf2(algorithm, password, &b, 1, dk_len)
}

/// Runs ROMix on every lane of `b`. Lanes are disjoint and each one owns
/// its scratch array, so they can run on separate threads.
#[cfg(feature = "parallel")]
fn mix_lanes(b: &mut [u8], lane_len: usize, n: usize, r: usize) {
    b.par_chunks_mut(lane_len).enumerate().for_each(|(i, lane)| {
        trace!(lane = i, "mixing lane");
        ro_mix(lane, n, r);
    });
}

#[cfg(not(feature = "parallel"))]
fn mix_lanes(b: &mut [u8], lane_len: usize, n: usize, r: usize) {
    b.chunks_mut(lane_len).enumerate().for_each(|(i, lane)| {
        trace!(lane = i, "mixing lane");
        ro_mix(lane, n, r);
    });
}

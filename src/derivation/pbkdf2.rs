//! PBKDF2 key stretching (RFC 2898 §5.2) over HMAC.
//!
//! The password is the HMAC key for the whole call, so the keyed MAC state
//! is built once and cloned for every message instead of being re-keyed.

use hmac::digest::{KeyInit, OutputSizeUser};
use hmac::{Hmac, Mac};
use sha2::{Sha224, Sha256, Sha384, Sha512};
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::hash::HmacAlgorithm;

/// Largest key PBKDF2 can produce for a given `hLen`: `(2^32 - 1) * hLen`.
pub fn max_key_len(algorithm: HmacAlgorithm) -> u64 {
    u64::from(u32::MAX) * algorithm.output_len() as u64
}

/// Derives `dk_len` bytes from `password` and `salt`.
///
/// # Arguments
///
/// * `algorithm` - HMAC variant used as the pseudorandom function
/// * `password` - The HMAC key
/// * `salt` - Salt bytes; the big-endian block counter is appended to it
/// * `iterations` - Iteration count `c`, at least 1
/// * `dk_len` - Length of the derived key in bytes
///
/// # Example
///
/// ```rust, ignore
/// use passhash::derivation::pbkdf2;
/// use passhash::hash::HmacAlgorithm;
///
/// let dk = pbkdf2(HmacAlgorithm::Sha256, b"password", b"salt", 4096, 32).unwrap();
/// assert_eq!(dk.len(), 32);
/// ```
pub fn pbkdf2(
    algorithm: HmacAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    dk_len: usize,
) -> Result<Vec<u8>> {
    check_bounds(algorithm, iterations, dk_len)?;

    let mut out = vec![0u8; dk_len];
    pbkdf2_into(algorithm, password, salt, iterations, &mut out)?;
    Ok(out)
}

/// Same as [`pbkdf2`], writing the derived key into `out`.
///
/// Length and iteration checks happen before any MAC is computed, so `out`
/// is left untouched on error.
pub fn pbkdf2_into(
    algorithm: HmacAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<()> {
    check_bounds(algorithm, iterations, out.len())?;

    match algorithm {
        HmacAlgorithm::Sha224 => stretch::<Hmac<Sha224>>(password, salt, iterations, out),
        HmacAlgorithm::Sha256 => stretch::<Hmac<Sha256>>(password, salt, iterations, out),
        HmacAlgorithm::Sha384 => stretch::<Hmac<Sha384>>(password, salt, iterations, out),
        HmacAlgorithm::Sha512 => stretch::<Hmac<Sha512>>(password, salt, iterations, out),
    }
}

fn check_bounds(algorithm: HmacAlgorithm, iterations: u32, dk_len: usize) -> Result<()> {
    if iterations == 0 {
        return Err(Error::InvalidIterations(iterations));
    }

    let max = max_key_len(algorithm);
    if dk_len as u64 > max {
        return Err(Error::KeyTooLong {
            requested: dk_len,
            max,
        });
    }

    Ok(())
}

/// Computes `T_1 || T_2 || ...` into `out`, truncating the last block.
///
/// `T_i = U_1 ^ U_2 ^ ... ^ U_c` with `U_1 = PRF(P, S || BE32(i))` and
/// `U_j = PRF(P, U_{j-1})`.
fn stretch<M>(password: &[u8], salt: &[u8], iterations: u32, out: &mut [u8]) -> Result<()>
where
    M: Mac + KeyInit + Clone,
{
    // HMAC accepts keys of every length, so this never fails in practice.
    let prf = <M as KeyInit>::new_from_slice(password).map_err(|_| Error::InvalidKeyLength)?;
    let h_len = <M as OutputSizeUser>::output_size();

    for (index, chunk) in out.chunks_mut(h_len).enumerate() {
        // The length bound keeps the 1-based block index within u32.
        let block_index = (index + 1) as u32;

        let mut mac = prf.clone();
        mac.update(salt);
        mac.update(&block_index.to_be_bytes());
        let mut u = mac.finalize().into_bytes();
        let mut t = u.clone();

        for _ in 1..iterations {
            let mut mac = prf.clone();
            mac.update(&u);
            u = mac.finalize().into_bytes();
            t.iter_mut().zip(u.iter()).for_each(|(t, u)| *t ^= u);
        }

        chunk.copy_from_slice(&t[..chunk.len()]);

        u.as_mut_slice().zeroize();
        t.as_mut_slice().zeroize();
    }

    Ok(())
}

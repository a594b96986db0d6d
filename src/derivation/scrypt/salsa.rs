//! Salsa20/8 core.
//!
//! This is the Salsa20 hash function reduced to 8 rounds, used by scrypt
//! purely as a mixing permutation over 64-byte blocks. There is no key,
//! nonce, or keystream here.

use zeroize::Zeroize;

/// Performs one Salsa20 quarter round.
///
/// Each step adds two words, rotates the sum left by a fixed amount
/// (7, 9, 13, 18) and XORs it into a third word.
#[inline(always)]
fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[b] ^= x[a].wrapping_add(x[d]).rotate_left(7);
    x[c] ^= x[b].wrapping_add(x[a]).rotate_left(9);
    x[d] ^= x[c].wrapping_add(x[b]).rotate_left(13);
    x[a] ^= x[d].wrapping_add(x[c]).rotate_left(18);
}

/// Applies Salsa20/8 to a state of 16 little-endian words, in place.
///
/// Four double rounds (column round, then row round) are applied to a
/// copy of the state, and the result is added word-wise onto the input.
#[inline]
pub(crate) fn salsa20_8_words(state: &mut [u32; 16]) {
    let mut x = *state;

    for _ in 0..4 {
        // Column round
        quarter_round(&mut x, 0, 4, 8, 12);
        quarter_round(&mut x, 5, 9, 13, 1);
        quarter_round(&mut x, 10, 14, 2, 6);
        quarter_round(&mut x, 15, 3, 7, 11);

        // Row round
        quarter_round(&mut x, 0, 1, 2, 3);
        quarter_round(&mut x, 5, 6, 7, 4);
        quarter_round(&mut x, 10, 11, 8, 9);
        quarter_round(&mut x, 15, 12, 13, 14);
    }

    state
        .iter_mut()
        .zip(x.iter())
        .for_each(|(s, x)| *s = s.wrapping_add(*x));

    x.zeroize();
}

/// Salsa20/8 over a 64-byte block.
///
/// # Example
///
/// ```rust, ignore
/// use passhash::derivation::scrypt::salsa20_8;
///
/// let out = salsa20_8(&[0u8; 64]);
/// assert_eq!(out, [0u8; 64]);
/// ```
pub fn salsa20_8(input: &[u8; 64]) -> [u8; 64] {
    let mut state: [u32; 16] = core::array::from_fn(|i| {
        let start = i * 4;
        u32::from_le_bytes([
            input[start],
            input[start + 1],
            input[start + 2],
            input[start + 3],
        ])
    });

    salsa20_8_words(&mut state);

    let mut out = [0u8; 64];
    out.chunks_exact_mut(4)
        .zip(state.iter())
        .for_each(|(o, w)| o.copy_from_slice(&w.to_le_bytes()));

    state.zeroize();
    out
}

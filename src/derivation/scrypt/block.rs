//! BlockMix for scrypt.
//!
//! A scrypt block is `128 * r` bytes, handled here as `32 * r` little-endian
//! words split into `2r` sub-blocks of 16 words (64 bytes).

use zeroize::Zeroize;

use super::salsa::salsa20_8_words;

/// Words in one 64-byte Salsa sub-block.
pub(crate) const SUB_BLOCK_WORDS: usize = 16;

/// Computes `output = BlockMix_salsa20/8(input)`.
///
/// The chain starts from the last sub-block of the input; every output of
/// Salsa20/8 feeds the next step. Even-indexed results land in the first
/// half of `output` and odd-indexed results in the second half.
///
/// `input` and `output` must both hold `32 * r` words and must not alias.
pub(crate) fn block_mix(input: &[u32], output: &mut [u32], r: usize) {
    debug_assert_eq!(input.len(), 2 * r * SUB_BLOCK_WORDS);
    debug_assert_eq!(output.len(), input.len());

    let mut x = [0u32; SUB_BLOCK_WORDS];
    x.copy_from_slice(&input[(2 * r - 1) * SUB_BLOCK_WORDS..]);

    for (i, sub_block) in input.chunks_exact(SUB_BLOCK_WORDS).enumerate() {
        x.iter_mut().zip(sub_block).for_each(|(x, b)| *x ^= b);
        salsa20_8_words(&mut x);

        let slot = if i % 2 == 0 { i / 2 } else { r + i / 2 };
        let start = slot * SUB_BLOCK_WORDS;
        output[start..start + SUB_BLOCK_WORDS].copy_from_slice(&x);
    }

    x.zeroize();
}

/// Integerify: the first word of the last 64-byte sub-block.
#[inline(always)]
pub(crate) fn integerify(block: &[u32], r: usize) -> u32 {
    block[(2 * r - 1) * SUB_BLOCK_WORDS]
}

//! ROMix: the memory-hard inner loop of scrypt.
//!
//! Each lane fills a scratch array of N blocks sequentially and then reads
//! it back at data-dependent positions. An attacker who wants to skip the
//! memory must recompute the missing blocks on demand.

use zeroize::Zeroizing;

use super::block::{block_mix, integerify};

/// Runs `ROMix(B, N)` on one `128 * r`-byte lane of `B`, in place.
///
/// The scratch array `V` (`128 * r * N` bytes) is allocated for this call
/// only and wiped before it is released. `n` must be a power of two.
pub(crate) fn ro_mix(lane: &mut [u8], n: usize, r: usize) {
    let words = 32 * r;
    debug_assert_eq!(lane.len(), 4 * words);
    debug_assert!(n.is_power_of_two());

    let mut x: Zeroizing<Vec<u32>> = Zeroizing::new(
        lane.chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
    );
    let mut y: Zeroizing<Vec<u32>> = Zeroizing::new(vec![0u32; words]);
    let mut v: Zeroizing<Vec<u32>> = Zeroizing::new(vec![0u32; words * n]);

    // Sequential fill: V[i] = X; X = BlockMix(X)
    for slot in v.chunks_exact_mut(words) {
        slot.copy_from_slice(&x);
        block_mix(&x, &mut y, r);
        core::mem::swap(&mut x, &mut y);
    }

    // Data-dependent reads: X = BlockMix(X ^ V[j])
    for _ in 0..n {
        let j = integerify(&x, r) as usize & (n - 1);
        let start = j * words;
        x.iter_mut()
            .zip(&v[start..start + words])
            .for_each(|(x, v)| *x ^= v);
        block_mix(&x, &mut y, r);
        core::mem::swap(&mut x, &mut y);
    }

    lane.chunks_exact_mut(4)
        .zip(x.iter())
        .for_each(|(out, word)| out.copy_from_slice(&word.to_le_bytes()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_is_transformed_deterministically() {
        let original: Vec<u8> = (0..128u8).collect();

        let mut a = original.clone();
        let mut b = original.clone();
        ro_mix(&mut a, 16, 1);
        ro_mix(&mut b, 16, 1);

        assert_eq!(a, b);
        assert_ne!(a, original);
    }

    #[test]
    fn cost_changes_output() {
        let mut a = vec![7u8; 256];
        let mut b = vec![7u8; 256];
        ro_mix(&mut a, 4, 2);
        ro_mix(&mut b, 8, 2);
        assert_ne!(a, b);
    }
}

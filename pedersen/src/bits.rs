//! Byte-to-bit expansion feeding the hash.

use bitvec::prelude::{BitVec, Lsb0};

/// Bit length after padding `bits` up to a whole number of triples.
#[inline]
pub fn padded_len(bits: usize) -> usize {
    bits.div_ceil(3) * 3
}

/// Expand `bytes` least-significant bit first (bit 0 of byte 0 comes first)
/// and pad with `false` to a multiple of three.
pub fn encode_bits(bytes: &[u8]) -> BitVec<u8, Lsb0> {
    let mut bits = BitVec::<u8, Lsb0>::from_slice(bytes);
    let target = padded_len(bits.len());
    bits.resize(target, false);
    bits
}

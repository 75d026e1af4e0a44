//! The Pedersen hash core.
//!
//! The padded bit string is read in triples `(a, b, c)`. Each triple adds a
//! signed digit in `{±1, ±2, ±3, ±4}` times the chunk's running multiplier to
//! an integer accumulator; the multiplier then grows by 16. Every
//! [`CHUNK_TRIPLES`] triples the accumulator is reduced modulo the subgroup
//! order, multiplied into the current generator through its window table, and
//! added to the result, after which the next generator takes over.

use babyjubjub::{Affine, Projective, ScalarField};
use bitvec::prelude::{BitSlice, Lsb0};
use num_bigint::BigInt;
use tracing::{instrument, trace};

use crate::bits::encode_bits;
use crate::constants::CHUNK_TRIPLES;
use crate::errors::PedersenError;
use crate::table::GeneratorTable;

/// Hashes byte strings against a borrowed [`GeneratorTable`].
#[derive(Clone, Copy, Debug)]
pub struct PedersenHasher<'a> {
    table: &'a GeneratorTable,
}

impl PedersenHasher<'static> {
    /// Hasher over the process-wide standard table.
    pub fn standard() -> Result<Self, PedersenError> {
        Ok(Self::new(GeneratorTable::global()?))
    }
}

impl<'a> PedersenHasher<'a> {
    pub fn new(table: &'a GeneratorTable) -> Self {
        PedersenHasher { table }
    }

    pub fn table(&self) -> &'a GeneratorTable {
        self.table
    }

    /// Number of triples the table's generators can absorb.
    pub fn capacity_triples(&self) -> usize {
        self.table.num_generators() * CHUNK_TRIPLES
    }

    /// Hash a byte string to a curve point.
    pub fn hash(&self, input: &[u8]) -> Result<Affine, PedersenError> {
        self.hash_bits(&encode_bits(input))
    }

    /// Hash a bit string. A trailing partial triple reads its missing bits
    /// as `false`, exactly as if the string had been padded.
    #[instrument(level = "trace", skip_all, fields(bits = bits.len()), err(level = "debug"))]
    pub fn hash_bits(&self, bits: &BitSlice<u8, Lsb0>) -> Result<Affine, PedersenError> {
        let triples = bits.len().div_ceil(3);
        let max = self.capacity_triples();
        if triples > max {
            return Err(PedersenError::InputTooLong { triples, max });
        }

        let mut result = Projective::IDENTITY;
        let mut chunk = ChunkAccumulator::new();

        for triple in bits.chunks(3) {
            let bit = |i: usize| triple.get(i).map(|b| *b).unwrap_or(false);
            chunk.absorb(bit(0), bit(1), bit(2));

            if chunk.is_full() {
                result += self.flush(&mut chunk)?;
            }
        }

        if chunk.is_pending() {
            result += self.flush(&mut chunk)?;
        }

        Ok(result.to_affine())
    }

    fn flush(&self, chunk: &mut ChunkAccumulator) -> Result<Projective, PedersenError> {
        let (generator, acc) = chunk.take();
        let scalar = ScalarField::wrap(&acc);
        trace!(generator, %scalar, "flushing chunk");
        self.table.scalar_mul(generator, &scalar)
    }
}

/// Hash `input` with the process-wide standard table.
pub fn pedersen_hash(input: &[u8]) -> Result<Affine, PedersenError> {
    PedersenHasher::standard()?.hash(input)
}

/// Per-call accumulator state for the chunk currently being absorbed.
///
/// `acc` and `cur` are plain integers; reduction modulo the subgroup order
/// happens once per chunk when it is flushed.
#[derive(Debug)]
struct ChunkAccumulator {
    acc: BigInt,
    cur: BigInt,
    remaining: usize,
    generator: usize,
}

impl ChunkAccumulator {
    fn new() -> Self {
        ChunkAccumulator {
            acc: BigInt::from(0u8),
            cur: BigInt::from(1u8),
            remaining: CHUNK_TRIPLES,
            generator: 0,
        }
    }

    // The operation order is fixed: both data bits are folded in before the
    // sign bit negates, and `cur` is doubled between them.
    fn absorb(&mut self, a: bool, b: bool, c: bool) {
        let mut tmp = self.cur.clone();
        if a {
            tmp += &self.cur;
        }
        self.cur <<= 1;
        if b {
            tmp += &self.cur;
        }
        if c {
            tmp = -tmp;
        }
        self.acc += tmp;
        self.cur <<= 3;
        self.remaining -= 1;
    }

    fn is_full(&self) -> bool {
        self.remaining == 0
    }

    /// At least one triple has been absorbed since the last flush.
    fn is_pending(&self) -> bool {
        self.remaining < CHUNK_TRIPLES
    }

    /// Hand out the finished chunk and reset for the next generator.
    fn take(&mut self) -> (usize, BigInt) {
        let generator = self.generator;
        let acc = core::mem::replace(&mut self.acc, BigInt::from(0u8));
        self.cur = BigInt::from(1u8);
        self.remaining = CHUNK_TRIPLES;
        self.generator += 1;
        (generator, acc)
    }
}

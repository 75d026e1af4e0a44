//! Precomputed fixed-base window tables for the Pedersen generators.
//!
//! For generator `g`, window `w` and byte value `v` the table holds
//! `v * 256^w * g`. Multiplying a generator by a 32-byte scalar then costs
//! 32 lookups and 32 additions.

use babyjubjub::{Affine, Group, Projective, ScalarField};
use once_cell::sync::OnceCell;
use tracing::{debug, instrument};

use crate::constants::{GENERATOR_COORDINATES, NUM_WINDOWS, WINDOW_SIZE};
use crate::errors::PedersenError;

const POINTS_PER_GENERATOR: usize = NUM_WINDOWS * WINDOW_SIZE;

static STANDARD_TABLE: OnceCell<GeneratorTable> = OnceCell::new();

/// Window tables for an ordered list of generators.
///
/// Immutable once built; share it by reference across threads.
#[derive(Clone, Debug)]
pub struct GeneratorTable {
    generators: Vec<Affine>,
    // generator-major, then window, then byte value
    points: Vec<Affine>,
}

impl GeneratorTable {
    /// Build tables for `generators`, rejecting any point off the curve.
    #[instrument(level = "debug", skip_all, fields(generators = generators.len()), err)]
    pub fn new(generators: &[Affine]) -> Result<Self, PedersenError> {
        if let Some(index) = generators.iter().position(|g| !g.is_on_curve()) {
            return Err(PedersenError::InvalidCurvePoint { index });
        }

        let mut points = Vec::with_capacity(generators.len() * POINTS_PER_GENERATOR);
        for (index, generator) in generators.iter().enumerate() {
            points.extend(build_windows(*generator));
            debug!(generator = index, "built generator windows");
        }

        Ok(GeneratorTable {
            generators: generators.to_vec(),
            points,
        })
    }

    /// Build tables for the five standard generators.
    pub fn standard() -> Result<Self, PedersenError> {
        let generators = GENERATOR_COORDINATES
            .iter()
            .enumerate()
            .map(|(index, (x, y))| {
                Affine::from_hex(x, y).ok_or(PedersenError::InvalidCurvePoint { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(&generators)
    }

    /// The process-wide standard table, built on first use.
    ///
    /// Construction happens at most once; concurrent first callers wait for
    /// the single builder. A failed build is not cached.
    pub fn global() -> Result<&'static Self, PedersenError> {
        STANDARD_TABLE.get_or_try_init(Self::standard)
    }

    pub fn num_generators(&self) -> usize {
        self.generators.len()
    }

    pub fn generators(&self) -> &[Affine] {
        &self.generators
    }

    /// The 256 entries of one window, `v * 256^window * g` at index `v`.
    pub fn window(&self, generator: usize, window: usize) -> Option<&[Affine]> {
        if generator >= self.num_generators() || window >= NUM_WINDOWS {
            return None;
        }
        let start = generator * POINTS_PER_GENERATOR + window * WINDOW_SIZE;
        Some(&self.points[start..start + WINDOW_SIZE])
    }

    /// Single entry `value * 256^window * g`.
    pub fn lookup(&self, generator: usize, window: usize, value: u8) -> Option<&Affine> {
        self.window(generator, window)
            .map(|entries| &entries[value as usize])
    }

    /// Multiply a generator by a scalar using the windows: the scalar's
    /// 32-byte little-endian encoding selects one entry per window.
    pub fn scalar_mul(
        &self,
        generator: usize,
        scalar: &ScalarField,
    ) -> Result<Projective, PedersenError> {
        if generator >= self.num_generators() {
            return Err(PedersenError::GeneratorOutOfRange {
                index: generator,
                count: self.num_generators(),
            });
        }

        let base = generator * POINTS_PER_GENERATOR;
        let mut acc = Projective::IDENTITY;
        for (window, byte) in scalar.to_le_bytes().iter().enumerate() {
            acc += self.points[base + window * WINDOW_SIZE + *byte as usize];
        }
        Ok(acc)
    }
}

/// Windows for one generator. Entries of each window come from repeated
/// addition of the window's step, and each window's step is 256 times the
/// previous one.
fn build_windows(generator: Affine) -> Vec<Affine> {
    let mut out = Vec::with_capacity(POINTS_PER_GENERATOR);
    let mut step = Projective::from(generator);

    for _ in 0..NUM_WINDOWS {
        let mut window = Vec::with_capacity(WINDOW_SIZE);
        let mut accum = Projective::IDENTITY;
        window.push(accum);
        for _ in 1..WINDOW_SIZE {
            accum += step;
            window.push(accum);
        }
        out.extend(Projective::batch_normalize(&window));
        step = step.mul_u64(WINDOW_SIZE as u64);
    }

    out
}

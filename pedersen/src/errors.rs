//! Error types for the Pedersen hash.

/// Errors that can occur while building generator tables or hashing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PedersenError {
    /// A configured generator could not be parsed or does not satisfy the
    /// curve equation. Table construction stops without producing a table.
    #[error("generator {index} is not a valid curve point")]
    InvalidCurvePoint { index: usize },

    /// The padded input needs more triples than the table's generators can
    /// absorb. Raised before any table lookup.
    #[error("input needs {triples} triples but the generator table holds at most {max}")]
    InputTooLong { triples: usize, max: usize },

    /// A direct table query named a generator the table does not have.
    #[error("generator index {index} is out of range for a table of {count} generators")]
    GeneratorOutOfRange { index: usize, count: usize },

    /// A digest encoding has a non-canonical coordinate or is not a point on
    /// the curve.
    #[error("malformed digest encoding")]
    InvalidDigest,
}

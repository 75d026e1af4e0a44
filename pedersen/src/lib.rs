//! Pedersen hash over the Baby Jubjub curve.
//!
//! This library maps a byte string of up to [`MAX_INPUT_LEN`] bytes to a
//! point of the prime-order subgroup of Baby Jubjub, compatible with the
//! windowed Pedersen hash used by zero-knowledge circuits over BN254:
//! - the input is expanded least-significant bit first and padded to whole
//!   triples
//! - each triple contributes a signed digit to a per-chunk scalar
//! - every 62 triples the scalar is multiplied into the next of five fixed
//!   generators through precomputed window tables
//!
//! # Example
//!
//! ```
//! use pedersen::{pedersen_hash, Digest};
//!
//! let point = pedersen_hash(b"hello pedersen").expect("input fits");
//! let digest = Digest::from(point);
//! assert_eq!(digest.to_string().len(), 128);
//! ```
//!
//! # Tables
//!
//! The standard [`GeneratorTable`] is built on first use and shared for the
//! rest of the process; [`GeneratorTable::global`] can be called up front to
//! pay the construction cost at startup. Custom generator sets get their own
//! table through [`GeneratorTable::new`] and a [`PedersenHasher`] borrowing it.

mod bits;
mod constants;
mod encoding;
mod errors;
mod hash;
mod table;


pub use bits::{encode_bits, padded_len};
pub use constants::{
    CHUNK_TRIPLES, DIGEST_SIZE, MAX_BITS, MAX_INPUT_LEN, MAX_TRIPLES, NUM_GENERATORS, NUM_WINDOWS,
    WINDOW_SIZE,
};
pub use encoding::Digest;
pub use errors::PedersenError;
pub use hash::{pedersen_hash, PedersenHasher};
pub use table::GeneratorTable;

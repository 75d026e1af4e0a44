//! Baby Jubjub, the twisted Edwards curve embedded in the BN254 scalar field.
//!
//! The curve is used in its reduced form `-x^2 + y^2 = 1 + d*x^2*y^2`. This
//! crate provides the base field, canonical scalars, affine and extended
//! projective points, and a small `Group` abstraction with generic scalar
//! multiplication. Fixed-base tables are left to the crates built on top.

mod affine;
mod basefield;
mod group;
mod projective;
mod random;
mod scalarfield;

pub use affine::{Affine, AFFINE_BYTES};
pub use basefield::BaseField;
pub use group::{Group, ScalarBytes};
pub use projective::Projective;
pub use random::RandomField;
pub use scalarfield::ScalarField;

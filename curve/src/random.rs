use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::{BaseField, ScalarField};

/// Helper trait for sampling uniformly random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomField for BaseField {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let mut bytes: [u8; 32] = rng.random();
            // p < 2^254
            bytes[0] &= 0x3f;
            if let Some(value) = BaseField::from_bytes_be(&bytes) {
                return value;
            }
        }
    }
}

impl RandomField for ScalarField {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

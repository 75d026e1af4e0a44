//! Scalar field of the curve, i.e. integers modulo the subgroup order.
//! n = 0x060c89ce5c263405370a08b6d0302b0bab3eedb83920ee0a677297dc392126f1
//!
//! Scalars are only ever consumed as bit or byte strings (table lookups and
//! double-and-add), so they are stored canonically rather than in Montgomery
//! form: [u64; 4] in little-endian order, always below n.

use core::fmt::{self, Debug, Display, Formatter};
use num_bigint::{BigInt, BigUint, Sign};
use once_cell::sync::Lazy;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::group::ScalarBytes;

/// Scalar field element, canonical representative in `[0, n)`.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ScalarField {
    limbs: [u64; 4],
}

// Subgroup order n
const MODULUS: [u64; 4] = [
    0x677297dc392126f1,
    0xab3eedb83920ee0a,
    0x370a08b6d0302b0b,
    0x060c89ce5c263405,
];

static SIGNED_MODULUS: Lazy<BigInt> =
    Lazy::new(|| BigInt::from_biguint(Sign::Plus, ScalarField::modulus()));

impl ScalarField {
    pub const ZERO: Self = ScalarField {
        limbs: [0, 0, 0, 0],
    };

    pub const ONE: Self = ScalarField {
        limbs: [1, 0, 0, 0],
    };

    /// Create a scalar from a u64 value. Every u64 is already below n.
    #[inline]
    pub fn from_canonical_u64(val: u64) -> Self {
        ScalarField {
            limbs: [val, 0, 0, 0],
        }
    }

    /// Map an arbitrary signed integer to its canonical residue in `[0, n)`.
    ///
    /// Uses a single Euclidean reduction, so negative values of any
    /// magnitude land in the same residue class that repeatedly adding `n`
    /// would reach.
    pub fn wrap(value: &BigInt) -> Self {
        let modulus = &*SIGNED_MODULUS;
        let mut reduced = value % modulus;
        if reduced.sign() == Sign::Minus {
            reduced += modulus;
        }
        Self::from_reduced(reduced.magnitude())
    }

    /// Reduce an arbitrary unsigned integer modulo n.
    pub fn from_biguint(value: &BigUint) -> Self {
        Self::from_reduced(&(value % Self::modulus()))
    }

    // `value` must already be below n
    fn from_reduced(value: &BigUint) -> Self {
        let mut bytes = value.to_bytes_le();
        bytes.resize(32, 0);
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }
        ScalarField { limbs }
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.to_le_bytes())
    }

    /// Fixed-width 32-byte little-endian encoding; byte `i` is the digit of
    /// weight `256^i`.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(self.limbs.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

    /// The subgroup order n.
    pub fn modulus() -> BigUint {
        let mut bytes = Vec::with_capacity(32);
        for &limb in &MODULUS {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }
}

#[inline]
const fn is_canonical(limbs: [u64; 4]) -> bool {
    let mut i = 4;
    while i > 0 {
        i -= 1;
        if limbs[i] != MODULUS[i] {
            return limbs[i] < MODULUS[i];
        }
    }
    false
}

impl ScalarBytes for ScalarField {
    #[inline]
    fn to_le_bytes(&self) -> [u8; 32] {
        ScalarField::to_le_bytes(self)
    }
}

impl Distribution<ScalarField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ScalarField {
        loop {
            let mut limbs: [u64; 4] = rng.random();
            // n < 2^251
            limbs[3] &= 0x07ff_ffff_ffff_ffff;

            if is_canonical(limbs) {
                return ScalarField { limbs };
            }
        }
    }
}

impl Display for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            self.limbs[3], self.limbs[2], self.limbs[1], self.limbs[0]
        )
    }
}

impl Debug for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarField({})", self)
    }
}

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Little-endian byte view of a scalar. Byte `i` carries weight `256^i`,
/// which is the digit a fixed-base window table is indexed by.
pub trait ScalarBytes {
    fn to_le_bytes(&self) -> [u8; 32];
}

/// Additive group of curve points.
///
/// The provided multiplication routines are generic and variable-time; they
/// exist as the slow reference against which precomputed tables are checked.
pub trait Group:
    Sized
    + Copy
    + PartialEq
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Neg<Output = Self>
{
    type Scalar: ScalarBytes;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Most-significant-bit first double-and-add.
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self {
        let bytes = scalar.to_le_bytes();
        let mut result = Self::identity();

        for &byte in bytes.iter().rev() {
            for bit in (0..8).rev() {
                result = result.double();
                if (byte >> bit) & 1 == 1 {
                    result += *self;
                }
            }
        }

        result
    }

    /// Fixed 4-bit window multiplication, one nibble at a time.
    fn scalar_mul_windowed(&self, scalar: &Self::Scalar) -> Self {
        if self.is_identity() {
            return Self::identity();
        }

        let mut multiples = [Self::identity(); 16];
        multiples[1] = *self;
        for i in 2..16 {
            multiples[i] = if i % 2 == 0 {
                multiples[i / 2].double()
            } else {
                multiples[i - 1] + *self
            };
        }

        let bytes = scalar.to_le_bytes();
        let mut result = Self::identity();

        for &byte in bytes.iter().rev() {
            for nibble in [byte >> 4, byte & 0x0f] {
                for _ in 0..4 {
                    result = result.double();
                }
                if nibble != 0 {
                    result += multiples[nibble as usize];
                }
            }
        }

        result
    }

    /// Multiply by a small integer, least-significant bit first.
    fn mul_u64(&self, n: u64) -> Self {
        let mut result = Self::identity();
        let mut addend = *self;
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result += addend;
            }
            bits >>= 1;
            if bits > 0 {
                addend = addend.double();
            }
        }

        result
    }
}

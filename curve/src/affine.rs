// Baby Jubjub in reduced twisted Edwards form over the BN254 scalar field:
//   -x^2 + y^2 = 1 + d*x^2*y^2
// Obtained from the usual Baby Jubjub (a = 168700, d = 168696) by scaling x
// so that a' = -1, which gives d' = -(168696/168700).
// Scaling factor: 1911982854305225074381251344103329931637610209014896889891168275855466657090
// d' = 12181644023421730124874158521699555681764249180949974110617291017600649128846
// Subgroup order n: 2736030358979909402780800718157159386076813972158567259200215660948447373041
// Cofactor (of the subgroup the generators live in): 1

use crate::basefield::BaseField;
use crate::{Group, Projective, ScalarField};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{de, Deserialize, Deserializer, Serialize};

/// d' in Montgomery form.
pub(crate) const CURVE_D: BaseField = BaseField::from_montgomery_limbs([
    0x5c3b8876504f718d,
    0x50be2c72984346b4,
    0x4783751f59126675,
    0x305ff669a7a1c091,
]);

/// Size of the uncompressed point encoding.
pub const AFFINE_BYTES: usize = 64;

/// Affine point on the twisted Edwards curve.
///
/// Every point, the identity included, has a unique affine representative,
/// so derived equality is group equality.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Affine {
    pub x: BaseField,
    pub y: BaseField,
}

impl Affine {
    /// The neutral element (0, 1).
    pub const IDENTITY: Self = Affine {
        x: BaseField::ZERO,
        y: BaseField::ONE,
    };

    /// Base point of the prime-order subgroup.
    pub const GENERATOR: Self = Affine {
        x: BaseField::from_montgomery_limbs([
            0xcc81def32098ad5b,
            0xc2ad6c3a7f5c483c,
            0xd039246853e6775d,
            0x013cef3266afa9b9,
        ]),
        y: BaseField::from_montgomery_limbs([
            0x9a750fec31888e68,
            0x3fe5e1bcc719206f,
            0xf5e28ef9fe792379,
            0x09d50b3ce60fcbbe,
        ]),
    };

    /// Create a point without checking the curve equation.
    pub fn new(x: BaseField, y: BaseField) -> Self {
        Affine { x, y }
    }

    /// Parse big-endian hex coordinates. The curve equation is not checked.
    pub fn from_hex(x: &str, y: &str) -> Option<Self> {
        Some(Affine::new(BaseField::from_hex(x)?, BaseField::from_hex(y)?))
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Check -x^2 + y^2 = 1 + d*x^2*y^2.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        let lhs = y2 - x2;
        let rhs = BaseField::ONE + CURVE_D * x2 * y2;
        lhs == rhs
    }

    #[inline]
    pub fn generator() -> Self {
        Self::GENERATOR
    }

    pub fn double(&self) -> Self {
        Projective::from(*self).double().to_affine()
    }

    #[inline]
    pub fn negate(&self) -> Self {
        Affine::new(-self.x, self.y)
    }

    /// Uncompressed encoding `x || y`, each coordinate as a canonical
    /// 32-byte big-endian integer.
    pub fn to_bytes(&self) -> [u8; AFFINE_BYTES] {
        let mut bytes = [0u8; AFFINE_BYTES];
        bytes[..32].copy_from_slice(&self.x.to_bytes_be());
        bytes[32..].copy_from_slice(&self.y.to_bytes_be());
        bytes
    }

    /// Inverse of [`Affine::to_bytes`]. Rejects non-canonical coordinates and
    /// points that are not on the curve.
    pub fn from_bytes(bytes: &[u8; AFFINE_BYTES]) -> Option<Self> {
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[..32]);
        y.copy_from_slice(&bytes[32..]);

        let point = Affine::new(BaseField::from_bytes_be(&x)?, BaseField::from_bytes_be(&y)?);
        if point.is_on_curve() {
            Some(point)
        } else {
            None
        }
    }
}

// Same shape as the derived encoding, but the point must lie on the curve.
impl<'de> Deserialize<'de> for Affine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename = "Affine")]
        struct Coordinates {
            x: BaseField,
            y: BaseField,
        }

        let Coordinates { x, y } = Coordinates::deserialize(deserializer)?;
        let point = Affine::new(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(de::Error::custom("point is not on the curve"))
        }
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Group for Affine {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        Self::is_identity(self)
    }

    #[inline]
    fn generator() -> Self {
        Self::GENERATOR
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

// Affine addition goes through extended coordinates so it pays for a single
// inversion instead of two.
impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        (Projective::from(self) + other).to_affine()
    }
}

impl AddAssign for Affine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<ScalarField> for Affine {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        Projective::from(self).scalar_mul(&scalar).to_affine()
    }
}

impl Mul<&ScalarField> for Affine {
    type Output = Self;

    fn mul(self, scalar: &ScalarField) -> Self {
        Projective::from(self).scalar_mul(scalar).to_affine()
    }
}

use crate::affine::{Affine, CURVE_D};
use crate::basefield::BaseField;
use crate::{Group, ScalarField};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Point in extended twisted Edwards coordinates (X:Y:T:Z), where
/// x = X/Z, y = Y/Z and x*y = T/Z.
///
/// The unified formulas below are complete on this curve (a = -1 is a square
/// and d is not), so no case analysis is needed for doubling or the identity.
#[derive(Copy, Clone, Debug)]
pub struct Projective {
    pub x: BaseField,
    pub y: BaseField,
    pub t: BaseField,
    pub z: BaseField,
}

impl Projective {
    /// The neutral element (0:1:0:1).
    pub const IDENTITY: Self = Projective {
        x: BaseField::ZERO,
        y: BaseField::ONE,
        t: BaseField::ZERO,
        z: BaseField::ONE,
    };

    pub fn new(x: BaseField, y: BaseField, t: BaseField, z: BaseField) -> Self {
        Projective { x, y, t, z }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == self.z
    }

    /// Convert to the unique affine representative.
    pub fn to_affine(&self) -> Affine {
        match self.z.inverse() {
            Some(z_inv) => Affine::new(self.x * z_inv, self.y * z_inv),
            // Z stays non-zero under the complete formulas; only a
            // hand-built degenerate point gets here.
            None => {
                debug_assert!(false, "projective point with Z = 0");
                Affine::IDENTITY
            }
        }
    }

    pub fn from_affine(point: &Affine) -> Self {
        Projective::new(point.x, point.y, point.x * point.y, BaseField::ONE)
    }

    /// Check (Y^2 - X^2) * Z^2 = Z^4 + d * X^2 * Y^2 and X*Y = T*Z.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        let z2 = self.z.square();

        let lhs = (y2 - x2) * z2;
        let rhs = z2.square() + CURVE_D * x2 * y2;

        lhs == rhs && self.x * self.y == self.t * self.z
    }

    #[inline]
    pub fn generator() -> Self {
        Self::from_affine(&Affine::GENERATOR)
    }

    /// dbl-2008-hwcd with a = -1.
    pub fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square().double();
        let d = -a;
        let e = (self.x + self.y).square() - a - b;
        let g = d + b;
        let f = g - c;
        let h = d - b;

        Projective::new(e * f, g * h, e * h, f * g)
    }

    #[inline]
    pub fn negate(&self) -> Self {
        Projective::new(-self.x, self.y, -self.t, self.z)
    }

    /// Normalize many points with one field inversion (Montgomery's trick).
    pub fn batch_normalize(points: &[Self]) -> Vec<Affine> {
        let mut prefix = Vec::with_capacity(points.len());
        let mut acc = BaseField::ONE;
        for point in points {
            prefix.push(acc);
            acc *= point.z;
        }

        let mut inv = match acc.inverse() {
            Some(inv) => inv,
            None => return points.iter().map(|p| p.to_affine()).collect(),
        };

        let mut out = vec![Affine::IDENTITY; points.len()];
        for (i, point) in points.iter().enumerate().rev() {
            let z_inv = inv * prefix[i];
            inv *= point.z;
            out[i] = Affine::new(point.x * z_inv, point.y * z_inv);
        }
        out
    }
}

impl Default for Projective {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for Projective {
    fn from(point: Affine) -> Self {
        Self::from_affine(&point)
    }
}

impl From<Projective> for Affine {
    fn from(point: Projective) -> Self {
        point.to_affine()
    }
}

// Points are equal when their affine images are; compare by cross-multiplying.
impl PartialEq for Projective {
    fn eq(&self, other: &Self) -> bool {
        self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
    }
}

impl Eq for Projective {}

impl Group for Projective {
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
        Projective::generator()
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

// add-2008-hwcd with a = -1
impl Add for Projective {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let a = self.x * other.x;
        let b = self.y * other.y;
        let c = self.t * CURVE_D * other.t;
        let d = self.z * other.z;
        let e = (self.x + self.y) * (other.x + other.y) - a - b;
        let f = d - c;
        let g = d + c;
        let h = b + a;

        Projective::new(e * f, g * h, e * h, f * g)
    }
}

impl Add<Affine> for Projective {
    type Output = Self;

    fn add(self, other: Affine) -> Self {
        self + Projective::from(other)
    }
}

impl AddAssign for Projective {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<Affine> for Projective {
    fn add_assign(&mut self, other: Affine) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Projective {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Projective {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Projective {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<ScalarField> for Projective {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        self.scalar_mul(&scalar)
    }
}

impl Mul<&ScalarField> for Projective {
    type Output = Self;

    fn mul(self, scalar: &ScalarField) -> Self {
        self.scalar_mul(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomField;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_identity() {
        let id = Projective::IDENTITY;
        assert!(id.is_identity());
        assert!(id.is_on_curve());
        assert_eq!(id.to_affine(), Affine::IDENTITY);

        let g = Projective::generator();
        assert_eq!(g + id, g);
        assert_eq!(id + g, g);
    }

    #[test]
    fn test_affine_roundtrip() {
        let g = Affine::generator();
        let p = Projective::from(g);
        assert!(p.is_on_curve());
        assert_eq!(p.to_affine(), g);
    }

    #[test]
    fn test_equality_ignores_scaling() {
        let g = Projective::generator();
        let k = BaseField::from_canonical_u64(7);
        let scaled = Projective::new(g.x * k, g.y * k, g.t * k, g.z * k);
        assert_eq!(g, scaled);
        assert!(scaled.is_on_curve());
        assert_ne!(g, g.double());
    }

    #[test]
    fn test_doubling_matches_addition() {
        let g = Projective::generator();
        let g2 = g.double();
        assert!(g2.is_on_curve());
        assert_eq!(g2, g + g);
        assert_eq!(g2.double(), g + g + g + g);
        assert_eq!(Projective::IDENTITY.double(), Projective::IDENTITY);
    }

    #[test]
    fn test_negation() {
        let g = Projective::generator();
        assert!((g + (-g)).is_identity());
        assert!((g - g).is_identity());
        assert_eq!((-g).to_affine(), -Affine::generator());
    }

    #[test]
    fn test_mixed_addition() {
        let g = Affine::generator();
        let g2 = g.double();
        let mut acc = Projective::from(g);
        acc += g;
        assert_eq!(acc.to_affine(), g2);
        assert_eq!((Projective::from(g2) + g).to_affine(), g2 + g);
    }

    #[test]
    fn test_associativity() {
        let g = Projective::generator();
        let a = ScalarField::from_canonical_u64(3);
        let b = ScalarField::from_canonical_u64(5);
        let sum = ScalarField::from_canonical_u64(8);

        assert_eq!(g * sum, g * a + g * b);
        assert_eq!(g.mul_u64(8), g * sum);
    }

    #[test]
    fn test_subgroup_order() {
        let g = Projective::generator();
        let n_minus_one = ScalarField::from_biguint(&(ScalarField::modulus() - 1u8));
        assert!((g * n_minus_one + g).is_identity());
    }

    #[test]
    fn test_batch_normalize() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = Projective::generator();
        let points: Vec<Projective> = (0..8)
            .map(|_| g * ScalarField::random(&mut rng))
            .chain(core::iter::once(Projective::IDENTITY))
            .collect();

        let batch = Projective::batch_normalize(&points);
        assert_eq!(batch.len(), points.len());
        for (affine, point) in batch.iter().zip(points.iter()) {
            assert_eq!(*affine, point.to_affine());
            assert!(affine.is_on_curve());
        }
        assert!(Projective::batch_normalize(&[]).is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Z = 0")]
    fn test_degenerate_point_is_not_normalized() {
        let degenerate =
            Projective::new(BaseField::ZERO, BaseField::ONE, BaseField::ZERO, BaseField::ZERO);
        let _ = degenerate.to_affine();
    }
}

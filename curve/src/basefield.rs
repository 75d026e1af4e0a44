//! Base field of Baby Jubjub, i.e. the BN254 scalar field.
//! p = 0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001
//!
//! Elements are kept in Montgomery form as [u64; 4] in little-endian order.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Base field element, the coordinate domain of curve points.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct BaseField {
    /// Montgomery form: value * R mod p, where R = 2^256
    limbs: [u64; 4],
}

// Field modulus p
const MODULUS: [u64; 4] = [
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

// R = 2^256 mod p
const R: [u64; 4] = [
    0xac96341c4ffffffb,
    0x36fc76959f60cd29,
    0x666ea36f7879462e,
    0x0e0a77c19a07df2f,
];

// R^2 = 2^512 mod p
const R2: [u64; 4] = [
    0x1bb8e645ae216da7,
    0x53fe3ab1e35c59e3,
    0x8c49833d53bb8085,
    0x0216d0b17f4e44a5,
];

// -p^{-1} mod 2^64
const MU: u64 = 0xc2e1f593efffffff;

impl BaseField {
    /// Zero element (in Montgomery form)
    pub const ZERO: Self = BaseField {
        limbs: [0, 0, 0, 0],
    };

    /// One element (in Montgomery form: R mod p)
    pub const ONE: Self = BaseField { limbs: R };

    /// Wrap limbs that are already in Montgomery form.
    ///
    /// Used for compile-time curve constants; the caller is responsible for
    /// the limbs being `value * R mod p`.
    #[inline]
    pub(crate) const fn from_montgomery_limbs(limbs: [u64; 4]) -> Self {
        BaseField { limbs }
    }

    /// Create a new field element from a u64 value
    #[inline]
    pub fn from_canonical_u64(val: u64) -> Self {
        Self::from_canonical_limbs([val, 0, 0, 0])
    }

    /// Convert from Montgomery form to canonical little-endian limbs.
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        let one = BaseField {
            limbs: [1, 0, 0, 0],
        };
        montgomery_mul(*self, one).limbs
    }

    /// Returns `None` if the limbs encode a value `>= p`.
    pub fn from_canonical_limbs_checked(limbs: [u64; 4]) -> Option<Self> {
        if is_canonical(limbs) {
            Some(Self::from_canonical_limbs(limbs))
        } else {
            None
        }
    }

    #[inline]
    fn from_canonical_limbs(limbs: [u64; 4]) -> Self {
        montgomery_mul(BaseField { limbs }, BaseField { limbs: R2 })
    }

    /// Decode a canonical 32-byte big-endian integer.
    pub fn from_bytes_be(bytes: &[u8; 32]) -> Option<Self> {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let start = 32 - 8 * (i + 1);
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes[start..start + 8]);
            *limb = u64::from_be_bytes(word);
        }
        Self::from_canonical_limbs_checked(limbs)
    }

    /// Canonical 32-byte big-endian encoding.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let canonical = self.to_canonical_limbs();
        let mut bytes = [0u8; 32];
        for (i, limb) in canonical.iter().enumerate() {
            let start = 32 - 8 * (i + 1);
            bytes[start..start + 8].copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    /// Parse a big-endian hex string of at most 64 digits, with or without a
    /// `0x` prefix. Values `>= p` are rejected.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty() || digits.len() > 64 {
            return None;
        }
        let padded = format!("{:0>64}", digits);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(padded, &mut bytes).ok()?;
        Self::from_bytes_be(&bytes)
    }

    /// Reduce an arbitrary unsigned integer modulo p.
    pub fn from_biguint(value: &BigUint) -> Self {
        let reduced = value % Self::modulus();
        let mut bytes = reduced.to_bytes_le();
        bytes.resize(32, 0);
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }
        Self::from_canonical_limbs(limbs)
    }

    pub fn to_biguint(&self) -> BigUint {
        let canonical = self.to_canonical_limbs();
        let mut bytes = Vec::with_capacity(32);
        for &limb in &canonical {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }

    /// The field modulus p.
    pub fn modulus() -> BigUint {
        let mut bytes = Vec::with_capacity(32);
        for &limb in &MODULUS {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }

    /// Check if this field element is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    #[inline]
    pub fn square(&self) -> Self {
        montgomery_mul(*self, *self)
    }

    /// Multiplicative inverse via Fermat's little theorem, `None` for zero.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        // p - 2
        let exp = sub_mod(MODULUS, [2, 0, 0, 0]);
        Some(self.pow_vartime(exp))
    }

    /// Variable-time exponentiation
    fn pow_vartime(&self, exp: [u64; 4]) -> Self {
        let mut result = Self::ONE;
        let mut base = *self;

        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..64 {
                if remaining & 1 == 1 {
                    result *= base;
                }
                base = base.square();
                remaining >>= 1;
            }
        }

        result
    }
}

/// Helper: Add two 256-bit numbers mod p
#[inline]
const fn add_mod(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);

    let (s0, borrow) = r0.overflowing_sub(MODULUS[0]);
    let (s1, borrow) = borrowing_sub(r1, MODULUS[1], borrow);
    let (s2, borrow) = borrowing_sub(r2, MODULUS[2], borrow);
    let (s3, borrow) = borrowing_sub(r3, MODULUS[3], borrow);

    if carry || !borrow {
        [s0, s1, s2, s3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Helper: Subtract two 256-bit numbers mod p
#[inline]
const fn sub_mod(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);

    if borrow {
        let (r0, carry) = r0.overflowing_add(MODULUS[0]);
        let (r1, carry) = carrying_add(r1, MODULUS[1], carry);
        let (r2, carry) = carrying_add(r2, MODULUS[2], carry);
        let (r3, _) = carrying_add(r3, MODULUS[3], carry);
        [r0, r1, r2, r3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Helper: Negate a 256-bit number mod p
#[inline]
const fn neg_mod(a: [u64; 4]) -> [u64; 4] {
    if a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0 {
        return [0, 0, 0, 0];
    }
    sub_mod(MODULUS, a)
}

#[inline]
const fn is_canonical(limbs: [u64; 4]) -> bool {
    let (_, borrow) = limbs[0].overflowing_sub(MODULUS[0]);
    let (_, borrow) = borrowing_sub(limbs[1], MODULUS[1], borrow);
    let (_, borrow) = borrowing_sub(limbs[2], MODULUS[2], borrow);
    let (_, borrow) = borrowing_sub(limbs[3], MODULUS[3], borrow);
    borrow
}

#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Montgomery multiplication: (a * b * R^{-1}) mod p
#[inline]
fn montgomery_mul(a: BaseField, b: BaseField) -> BaseField {
    let mut t = [0u64; 8];

    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (a.limbs[i] as u128) * (b.limbs[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        t[i + 4] = carry as u64;
    }

    // Montgomery reduction
    for i in 0..4 {
        let k = t[i].wrapping_mul(MU);
        let mut carry = 0u128;

        for j in 0..4 {
            let product = (k as u128) * (MODULUS[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }

        for j in 4..8 - i {
            let sum = (t[i + j] as u128) + carry;
            t[i + j] = sum as u64;
            carry = sum >> 64;
        }
    }

    // p < 2^254, so the high half is below 2p
    let result = [t[4], t[5], t[6], t[7]];
    if is_canonical(result) {
        BaseField { limbs: result }
    } else {
        BaseField {
            limbs: sub_mod(result, MODULUS),
        }
    }
}

impl Add for BaseField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        BaseField {
            limbs: add_mod(self.limbs, rhs.limbs),
        }
    }
}

impl AddAssign for BaseField {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for BaseField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        BaseField {
            limbs: sub_mod(self.limbs, rhs.limbs),
        }
    }
}

impl SubAssign for BaseField {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for BaseField {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        BaseField {
            limbs: neg_mod(self.limbs),
        }
    }
}

impl Mul for BaseField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        montgomery_mul(self, rhs)
    }
}

impl MulAssign for BaseField {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Display for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes_be()))
    }
}

impl Debug for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BaseField({})", self)
    }
}

// Serialized as the canonical big-endian bytes, never the Montgomery limbs.
impl Serialize for BaseField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_bytes_be().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BaseField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <[u8; 32]>::deserialize(deserializer)?;
        BaseField::from_bytes_be(&bytes)
            .ok_or_else(|| serde::de::Error::custom("base field element is not canonical"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P_DECIMAL: &str =
        "21888242871839275222246405745257275088548364400416034343698204186575808495617";

    #[test]
    fn test_modulus_matches_decimal() {
        let expected = BigUint::parse_bytes(P_DECIMAL.as_bytes(), 10).unwrap();
        assert_eq!(BaseField::modulus(), expected);
    }

    #[test]
    fn test_montgomery_constants() {
        let p = BaseField::modulus();
        let to_big = |limbs: [u64; 4]| {
            let mut bytes = Vec::new();
            for limb in limbs {
                bytes.extend_from_slice(&limb.to_le_bytes());
            }
            BigUint::from_bytes_le(&bytes)
        };
        let r = (BigUint::from(1u8) << 256) % &p;
        assert_eq!(to_big(R), r);
        assert_eq!(to_big(R2), (&r * &r) % &p);

        let p0 = MODULUS[0];
        assert_eq!(p0.wrapping_mul(MU), u64::MAX);
    }

    #[test]
    fn test_zero_one() {
        assert_eq!(BaseField::ZERO + BaseField::ZERO, BaseField::ZERO);
        assert_eq!(BaseField::ONE * BaseField::ONE, BaseField::ONE);
        assert_eq!(BaseField::ZERO * BaseField::ONE, BaseField::ZERO);
        assert_eq!(BaseField::ONE + BaseField::ZERO, BaseField::ONE);
        assert_eq!(BaseField::ONE.to_canonical_limbs(), [1, 0, 0, 0]);
    }

    #[test]
    fn test_arithmetic() {
        let a = BaseField::from_canonical_u64(6);
        let b = BaseField::from_canonical_u64(7);
        assert_eq!(a + b, BaseField::from_canonical_u64(13));
        assert_eq!(b - a, BaseField::from_canonical_u64(1));
        assert_eq!(a * b, BaseField::from_canonical_u64(42));
        assert_eq!(a.double(), BaseField::from_canonical_u64(12));
        assert_eq!(b.square(), BaseField::from_canonical_u64(49));
    }

    #[test]
    fn test_negation_wraps() {
        let a = BaseField::from_canonical_u64(5);
        assert_eq!(a + (-a), BaseField::ZERO);
        assert_eq!(-BaseField::ZERO, BaseField::ZERO);

        let minus_one = BaseField::modulus() - 1u8;
        assert_eq!((-BaseField::ONE).to_biguint(), minus_one);
        assert_eq!(BaseField::ZERO - BaseField::ONE, -BaseField::ONE);
    }

    #[test]
    fn test_inverse() {
        let a = BaseField::from_canonical_u64(5);
        let a_inv = a.inverse().unwrap();
        assert_eq!(a * a_inv, BaseField::ONE);
        assert!(BaseField::ZERO.inverse().is_none());

        let minus_one = -BaseField::ONE;
        assert_eq!(minus_one.inverse().unwrap(), minus_one);
    }

    #[test]
    fn test_matches_biguint_arithmetic() {
        let p = BaseField::modulus();
        let x = BigUint::parse_bytes(
            b"1911982854305225074381251344103329931637610209014896889891168275855466657090",
            10,
        )
        .unwrap();
        let y = &p - 12345u32;
        let fx = BaseField::from_biguint(&x);
        let fy = BaseField::from_biguint(&y);
        assert_eq!((fx * fy).to_biguint(), (&x * &y) % &p);
        assert_eq!((fx + fy).to_biguint(), (&x + &y) % &p);
        assert_eq!(fx.to_biguint(), x);
    }

    #[test]
    fn test_bytes_and_hex() {
        let a = BaseField::from_canonical_u64(0x0102_0304);
        let bytes = a.to_bytes_be();
        assert_eq!(&bytes[28..], &[1, 2, 3, 4]);
        assert_eq!(BaseField::from_bytes_be(&bytes), Some(a));
        assert_eq!(BaseField::from_hex("0x01020304"), Some(a));
        assert_eq!(BaseField::from_hex("1020304"), Some(a));
        assert_eq!(a.to_string(), format!("0x{}", hex::encode(bytes)));

        // p itself is not canonical
        let p_hex = "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";
        assert!(BaseField::from_hex(p_hex).is_none());
        assert!(BaseField::from_hex("").is_none());
        assert!(BaseField::from_hex("zz").is_none());
    }

    #[test]
    fn test_serde_uses_canonical_bytes() {
        let a = BaseField::from_canonical_u64(99);
        let encoded = bincode::serialize(&a).unwrap();
        assert_eq!(encoded, a.to_bytes_be().to_vec());
        let decoded: BaseField = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, a);
    }
}

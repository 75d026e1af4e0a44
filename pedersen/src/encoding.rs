//! Wire format of a hash digest.

use core::fmt::{self, Display, Formatter};

use babyjubjub::Affine;
use serde::{Deserialize, Serialize};

use crate::constants::DIGEST_SIZE;
use crate::errors::PedersenError;

/// A Pedersen hash output.
///
/// Encoded as 64 bytes, `x || y`, each coordinate the canonical 32-byte
/// big-endian integer below the base field modulus.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest(Affine);

impl Digest {
    pub fn point(&self) -> &Affine {
        &self.0
    }

    pub fn into_point(self) -> Affine {
        self.0
    }

    pub fn to_bytes(&self) -> [u8; DIGEST_SIZE] {
        self.0.to_bytes()
    }

    /// Decode a digest, rejecting wrong lengths, non-canonical coordinates
    /// and points that are not on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PedersenError> {
        let bytes: &[u8; DIGEST_SIZE] = bytes.try_into().map_err(|_| PedersenError::InvalidDigest)?;
        Affine::from_bytes(bytes)
            .map(Digest)
            .ok_or(PedersenError::InvalidDigest)
    }

    pub fn from_hex(s: &str) -> Result<Self, PedersenError> {
        let bytes = hex::decode(s).map_err(|_| PedersenError::InvalidDigest)?;
        Self::from_bytes(&bytes)
    }
}

impl From<Affine> for Digest {
    fn from(point: Affine) -> Self {
        Digest(point)
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use babyjubjub::Group;

    #[test]
    fn test_bytes_roundtrip() {
        let digest = Digest::from(Affine::generator().mul_u64(273));
        let bytes = digest.to_bytes();
        assert_eq!(Digest::from_bytes(&bytes), Ok(digest));
        assert_eq!(Digest::from_hex(&digest.to_string()), Ok(digest));
        assert_eq!(digest.to_string().len(), 2 * DIGEST_SIZE);
    }

    #[test]
    fn test_identity_encoding() {
        let digest = Digest::from(Affine::IDENTITY);
        let bytes = digest.to_bytes();
        assert!(bytes[..63].iter().all(|&b| b == 0));
        assert_eq!(bytes[63], 1);
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(Digest::from_bytes(&[0u8; 63]), Err(PedersenError::InvalidDigest));
        // (0, 0) is not on the curve
        assert_eq!(Digest::from_bytes(&[0u8; 64]), Err(PedersenError::InvalidDigest));
        assert_eq!(Digest::from_hex("not hex"), Err(PedersenError::InvalidDigest));

        let mut non_canonical = [0xffu8; 64];
        non_canonical[32..].copy_from_slice(&Affine::IDENTITY.to_bytes()[32..]);
        assert_eq!(Digest::from_bytes(&non_canonical), Err(PedersenError::InvalidDigest));
    }

    #[test]
    fn test_serde_rejects_off_curve() {
        let digest = Digest::from(Affine::generator());
        let encoded = bincode::serialize(&digest).unwrap();
        assert_eq!(encoded.as_slice(), &digest.to_bytes()[..]);
        assert_eq!(bincode::deserialize::<Digest>(&encoded).unwrap(), digest);

        let zeros = bincode::serialize(&([0u8; 32], [0u8; 32])).unwrap();
        assert!(bincode::deserialize::<Digest>(&zeros).is_err());
    }
}

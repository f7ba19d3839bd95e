//! Fixed-width bit strings.
//!
//! Every bit-addressed value in the protocol — keys, digests, trapdoors —
//! uses one convention: **MSB-first within each byte, bytes in big-endian
//! order**. Bit 0 of a [`Bits256`] is the most significant bit of its first
//! byte, and the hex form of a digest is the lowercase hex of its bytes in
//! order. The constraint layer re-orders bits at its own boundary (see
//! [`circuit`](crate::circuit)); everything outside it speaks this form.

use core::fmt;

use bitvec::{order::Msb0, view::BitView as _};
use rand::RngCore;

/// A hex string failed to parse as a fixed-width bit string.
///
/// Covers odd length, wrong length for the target width, and non-hex
/// characters.
#[derive(Debug, thiserror::Error)]
#[error("invalid hex digest: {0}")]
pub struct HexDigestError(#[from] hex::FromHexError);

/// An owned bit string of `BYTES * 8` bits, MSB-first within each byte.
///
/// Widths are part of the type, so a 252- vs 256-bit mixup is a compile
/// error rather than a malformed circuit. The two widths the protocol uses
/// are aliased as [`Bits256`] and [`Bits384`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitString<const BYTES: usize>([u8; BYTES]);

/// A 256-bit string: keys, digests, session hashes, uniqueness tags.
pub type Bits256 = BitString<32>;

/// A 384-bit string: the note commitment trapdoor `r`.
pub type Bits384 = BitString<48>;

impl<const BYTES: usize> BitString<BYTES> {
    /// The all-zero bit string.
    pub const ZERO: Self = Self([0u8; BYTES]);

    /// Number of bits in this string.
    pub const BITS: usize = BYTES * 8;

    /// Wraps raw bytes; bit `8 * i` is the most significant bit of byte `i`.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; BYTES]) -> Self {
        Self(bytes)
    }

    /// The underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BYTES] {
        &self.0
    }

    /// The bit at `index` (MSB-first), or `None` past the end.
    #[must_use]
    pub fn bit(&self, index: usize) -> Option<bool> {
        self.0.view_bits::<Msb0>().get(index).map(|bit| *bit)
    }

    /// Iterates all bits, MSB-first within each byte.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.view_bits::<Msb0>().iter().by_vals()
    }

    /// Packs an MSB-first bit sequence back into a bit string.
    ///
    /// # Panics
    ///
    /// If the iterator does not yield exactly [`Self::BITS`] bits — a
    /// caller contract violation, not a recoverable condition.
    #[must_use]
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        let mut bytes = [0u8; BYTES];
        let mut count = 0usize;
        {
            let view = bytes.view_bits_mut::<Msb0>();
            for (index, bit) in bits.into_iter().enumerate() {
                assert!(index < Self::BITS, "bit sequence longer than {} bits", Self::BITS);
                view.set(index, bit);
                count = index + 1;
            }
        }
        assert_eq!(count, Self::BITS, "bit sequence must be exactly {} bits", Self::BITS);
        Self(bytes)
    }

    /// Parses a lowercase or uppercase hex string of exactly `2 * BYTES`
    /// characters.
    pub fn from_hex(digest: &str) -> Result<Self, HexDigestError> {
        let mut bytes = [0u8; BYTES];
        hex::decode_to_slice(digest, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Lowercase hex of the underlying bytes.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Samples a uniformly random bit string.
    pub fn random(rng: &mut impl RngCore) -> Self {
        let mut bytes = [0u8; BYTES];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }
}

impl<const BYTES: usize> fmt::Debug for BitString<BYTES> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "BitString<{BYTES}>({})", self.to_hex())
    }
}

impl<const BYTES: usize> From<[u8; BYTES]> for BitString<BYTES> {
    fn from(bytes: [u8; BYTES]) -> Self {
        Self(bytes)
    }
}

#[cfg(feature = "serde")]
impl<const BYTES: usize> serde::Serialize for BitString<BYTES> {
    /// Serializes as the lowercase hex digest string.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de, const BYTES: usize> serde::Deserialize<'de> for BitString<BYTES> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let digest: String = serde::Deserialize::deserialize(deserializer)?;
        Self::from_hex(&digest).map_err(serde::de::Error::custom)
    }
}

//! Protocol-wide widths and PRF domain separation.
//!
//! Every PRF in the protocol hashes a single 512-bit compression block laid
//! out as `tag(4) ∥ key[0..252) ∥ aux(256)`, all bit strings MSB-first
//! within each byte. The 4-bit tag is what keeps the four PRF uses from
//! ever colliding, even on identical key and auxiliary inputs.

/// Width of a compression-function digest, in bits.
pub const DIGEST_BITS: usize = 256;

/// Width of a compression-function digest, in bytes.
pub const DIGEST_BYTES: usize = DIGEST_BITS / 8;

/// Width of the domain tag prepended to every PRF input block, in bits.
pub const TAG_BITS: usize = 4;

/// Number of key bits that participate in a PRF input block.
///
/// The key operand is always truncated to its first 252 bits (MSB-first);
/// the trailing [`TAG_BITS`] bits of a 256-bit key are reserved and never
/// read, which is exactly the room the domain tag occupies in the block.
pub const TRUNCATED_KEY_BITS: usize = DIGEST_BITS - TAG_BITS;

/// Width of one compression-function input block, in bits.
pub const PRF_BLOCK_BITS: usize = TAG_BITS + TRUNCATED_KEY_BITS + DIGEST_BITS;

/// Width of a note value, in bits.
pub const NOTE_VALUE_BITS: usize = 64;

/// Width of a note's commitment trapdoor `r`, in bits.
pub const TRAPDOOR_BITS: usize = 384;

/// BLAKE2s personalization for the PRF compression function.
///
/// All zero: the protocol's test vectors were generated with the plain,
/// unpersonalized BLAKE2s-256 of the 64-byte block, so domain separation
/// lives in the in-block tag rather than the hash parameter block.
pub const COMPRESSION_PERSONALIZATION: &[u8; 8] = &[0u8; 8];

/// Which of a transfer's two shielded outputs a per-output PRF serves.
///
/// A joinsplit produces exactly two shielded outputs, and the one-time-key
/// and note-randomness PRFs carry one bit of the output position in their
/// domain tag. This is a protocol constant distinguishing the outputs, not
/// a loop counter — hence an enum rather than an integer index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputIndex {
    /// The transfer's first shielded output.
    First,
    /// The transfer's second shielded output.
    Second,
}

impl OutputIndex {
    /// The bit this output position contributes to a domain tag.
    #[must_use]
    pub const fn bit(self) -> bool {
        matches!(self, Self::Second)
    }
}

/// A 4-bit PRF domain tag, MSB-first.
///
/// Four tag families are reachable:
///
/// | Tag    | PRF                  | Derives        |
/// |--------|----------------------|----------------|
/// | `1100` | [`ADDR`](Self::ADDR) | `a_pk`         |
/// | `1110` | [`NF`](Self::NF)     | `nf`           |
/// | `0i00` | [`pk`](Self::pk)     | `h_i`          |
/// | `0i10` | [`rho`](Self::rho)   | `rho_i`        |
///
/// where `i` is the [`OutputIndex`] bit. Distinct tags make the PRF
/// variants structurally unrelated functions of the same key material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomainTag([bool; TAG_BITS]);

impl DomainTag {
    /// `1100` — address-key derivation (`a_pk` from `a_sk`).
    pub const ADDR: Self = Self([true, true, false, false]);

    /// `1110` — nullifier derivation (`nf` from `a_sk` and `rho`).
    pub const NF: Self = Self([true, true, true, false]);

    /// `0i00` — one-time-key derivation for the given output.
    #[must_use]
    pub const fn pk(index: OutputIndex) -> Self {
        Self([false, index.bit(), false, false])
    }

    /// `0i10` — note-randomness derivation for the given output.
    #[must_use]
    pub const fn rho(index: OutputIndex) -> Self {
        Self([false, index.bit(), true, false])
    }

    /// The tag's bits, MSB-first.
    #[must_use]
    pub const fn bits(self) -> [bool; TAG_BITS] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every reachable tag must be pairwise distinct — this is the whole
    /// point of domain separation.
    #[test]
    fn domain_tags_pairwise_distinct() {
        let tags = [
            DomainTag::ADDR,
            DomainTag::NF,
            DomainTag::pk(OutputIndex::First),
            DomainTag::pk(OutputIndex::Second),
            DomainTag::rho(OutputIndex::First),
            DomainTag::rho(OutputIndex::Second),
        ];
        for (left_pos, left) in tags.iter().enumerate() {
            for right in tags.iter().skip(left_pos + 1) {
                assert_ne!(left, right, "two reachable domain tags collide");
            }
        }
    }

    /// The tag occupies exactly the width freed by key truncation, so a
    /// tagged block is one full compression input.
    #[test]
    fn block_widths_agree() {
        assert_eq!(TAG_BITS + TRUNCATED_KEY_BITS, DIGEST_BITS, "tagged key is digest-sized");
        assert_eq!(PRF_BLOCK_BITS, 512, "one BLAKE2s block");
    }
}

//! Notes: the unit of shielded value.
//!
//! ## Note Structure
//!
//! | Field   | Width    | Description                                        |
//! | ------- | -------- | -------------------------------------------------- |
//! | `a_pk`  | 256 bits | Owner's address tag, `PRF^addr(a_sk)`              |
//! | `value` | 64 bits  | Note value                                         |
//! | `rho`   | 256 bits | Uniqueness tag; seeds the nullifier                |
//! | `r`     | 384 bits | Commitment trapdoor, used only by the commitment   |
//!
//! A note is created when value is received and destroyed when its
//! nullifier `nf = PRF^nf(a_sk, rho)` is first revealed on-chain. The
//! note commitment and the nullifier are derived values, not stored
//! fields; commitment computation lives outside this crate, nullifier
//! derivation in [`SpendingKey::nullifier`].
//!
//! The value encoding is a type parameter (see [`NoteValue`]) rather than
//! an inheritance pair: the production note carries a `u64` magnitude, and
//! an alternate plain-integer encoding exists for tests. Both must agree
//! on zero-ness, which the trait makes true by construction.

use rand::{CryptoRng, RngCore};

use crate::{
    bits::{Bits256, Bits384},
    keys::{AddressKey, Nullifier, SpendingKey},
};

/// A note value encoding.
///
/// The single semantic obligation is zero-ness: a zero-valued note is a
/// padding note (every transfer has two inputs and two outputs, real or
/// not), and both the production `u64` encoding and the plain-integer test
/// encoding must classify zero identically.
pub trait NoteValue: Copy + Eq {
    /// Whether this is the zero amount.
    fn is_zero(&self) -> bool;
}

impl NoteValue for u64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

/// Alternate signed-integer encoding, used by tests.
impl NoteValue for i64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

/// One shielded value unit.
///
/// Generic over the value encoding `V`; the production note is
/// `Note<u64>` (the default).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note<V = u64> {
    /// The owner's address tag `a_pk`.
    pub a_pk: AddressKey,
    /// The note value.
    pub value: V,
    /// The uniqueness tag `rho`, consumed by nullifier derivation.
    pub rho: Bits256,
    /// The commitment trapdoor `r`; read only by the (external)
    /// note-commitment computation, never by the PRFs.
    pub r: Bits384,
}

impl<V: NoteValue> Note<V> {
    /// Assembles a note from its fields.
    pub const fn new(a_pk: AddressKey, value: V, rho: Bits256, r: Bits384) -> Self {
        Self { a_pk, value, rho, r }
    }

    /// Whether this is a zero-valued (padding) note.
    #[must_use]
    pub fn is_zero_valued(&self) -> bool {
        self.value.is_zero()
    }

    /// Derives this note's nullifier under the owner's spending key.
    ///
    /// The result only authorizes a spend if `a_sk` is the key behind
    /// `self.a_pk`; the circuit is what enforces that correspondence.
    #[must_use]
    pub fn nullifier(&self, a_sk: &SpendingKey) -> Nullifier {
        a_sk.nullifier(&self.rho)
    }
}

impl Note<u64> {
    /// Mints a fresh note to `a_pk`, sampling `rho` and `r` uniformly.
    ///
    /// Used when the uniqueness tag is chosen at random rather than
    /// derived from a transfer seed via
    /// [`BlindingSeed::note_randomness`](crate::keys::BlindingSeed::note_randomness).
    pub fn mint(a_pk: AddressKey, value: u64, rng: &mut (impl RngCore + CryptoRng)) -> Self {
        Self {
            a_pk,
            value,
            rho: Bits256::random(rng),
            r: Bits384::random(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;

    fn test_address() -> AddressKey {
        SpendingKey::from([0x42u8; 32]).address()
    }

    /// `is_zero_valued() ⇔ value == 0`, for the production encoding and
    /// the plain-integer test encoding alike.
    #[test]
    fn zero_valued_notes_agree_across_encodings() {
        let rho = Bits256::from_bytes([0x07u8; 32]);
        let r = Bits384::from_bytes([0x09u8; 48]);

        let padding = Note::new(test_address(), 0u64, rho, r);
        let real = Note::new(test_address(), 1000u64, rho, r);
        assert!(padding.is_zero_valued());
        assert!(!real.is_zero_valued());

        let padding_int = Note::new(test_address(), 0i64, rho, r);
        let real_int = Note::new(test_address(), 1000i64, rho, r);
        assert_eq!(padding.is_zero_valued(), padding_int.is_zero_valued());
        assert_eq!(real.is_zero_valued(), real_int.is_zero_valued());
    }

    /// Minting samples fresh randomness per note.
    #[test]
    fn minted_notes_are_unlinkable() {
        let mut rng = StdRng::seed_from_u64(0);
        let first = Note::mint(test_address(), 5u64, &mut rng);
        let second = Note::mint(test_address(), 5u64, &mut rng);
        assert_ne!(first.rho, second.rho);
        assert_ne!(first.r, second.r);
    }

    /// The nullifier binds the spending key to the note's `rho` and
    /// nothing else: same `rho`, same `nf`; fresh `rho`, fresh `nf`.
    #[test]
    fn nullifier_follows_rho() {
        let mut rng = StdRng::seed_from_u64(1);
        let a_sk = SpendingKey::from([0x42u8; 32]);
        let note = Note::mint(a_sk.address(), 7u64, &mut rng);
        let same_rho = Note::new(a_sk.address(), 9u64, note.rho, Bits384::random(&mut rng));
        let other = Note::mint(a_sk.address(), 7u64, &mut rng);

        assert_eq!(note.nullifier(&a_sk), same_rho.nullifier(&a_sk));
        assert_ne!(note.nullifier(&a_sk), other.nullifier(&a_sk));
    }
}

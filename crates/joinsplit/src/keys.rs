//! Spending authority and the values the PRF family derives from it.
//!
//! The whole hierarchy hangs off two secrets:
//!
//! - `a_sk` ([`SpendingKey`]) — long-lived, one per spending authority.
//!   Derives the public address tag `a_pk`, each spent note's nullifier
//!   `nf`, and the per-output one-time keys `h_i`.
//! - `phi` ([`BlindingSeed`]) — per-transfer, derives the fresh outputs'
//!   uniqueness tags `rho_i`.
//!
//! Every derivation is a domain-separated PRF (see [`prf`](crate::prf));
//! the in-circuit counterparts in [`circuit::prf`](crate::circuit::prf)
//! must produce bit-identical results.

use core::fmt;

use rand::{CryptoRng, RngCore};

use crate::{
    bits::{Bits256, HexDigestError},
    constants::OutputIndex,
    prf,
};

/// The secret spending key `a_sk` — opaque 256-bit entropy.
///
/// Generated once per spending authority and kept for its lifetime. Only
/// the first 252 bits ever enter a PRF block; the trailing 4 bits are
/// reserved for the domain tag's width and never read.
#[derive(Clone, Copy)]
pub struct SpendingKey(Bits256);

impl SpendingKey {
    /// Samples a fresh spending key.
    pub fn random(rng: &mut (impl RngCore + CryptoRng)) -> Self {
        Self(Bits256::random(rng))
    }

    /// Derives the public address tag: `a_pk = PRF^addr(a_sk)`.
    #[must_use]
    pub fn address(&self) -> AddressKey {
        AddressKey(prf::prf_addr(&self.0))
    }

    /// Derives the nullifier of a note carrying the uniqueness tag `rho`:
    /// `nf = PRF^nf(a_sk, rho)`.
    ///
    /// Revealing `nf` on-chain is what marks the note spent; uniqueness
    /// enforcement is the ledger's job, unforgeability is this PRF's.
    #[must_use]
    pub fn nullifier(&self, rho: &Bits256) -> Nullifier {
        Nullifier(prf::prf_nf(&self.0, rho))
    }

    /// Derives the one-time key authenticating output `index` of a
    /// transfer with session hash `h_sig`: `h_i = PRF^pk(a_sk, h_sig, i)`.
    #[must_use]
    pub fn one_time_key(&self, h_sig: &Bits256, index: OutputIndex) -> OneTimeKey {
        OneTimeKey(prf::prf_pk(&self.0, h_sig, index))
    }

    /// The raw key bits, for witnessing into a circuit.
    #[must_use]
    pub const fn expose(&self) -> &Bits256 {
        &self.0
    }
}

impl From<Bits256> for SpendingKey {
    fn from(bits: Bits256) -> Self {
        Self(bits)
    }
}

impl From<[u8; 32]> for SpendingKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(Bits256::from_bytes(bytes))
    }
}

impl fmt::Debug for SpendingKey {
    /// Key material stays out of logs and panic messages.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SpendingKey(..)")
    }
}

/// The per-transfer blinding seed `phi`.
///
/// A transfer-scoped secret; together with the session hash it determines
/// the uniqueness tags of the transfer's two fresh notes.
#[derive(Clone, Copy)]
pub struct BlindingSeed(Bits256);

impl BlindingSeed {
    /// Samples a fresh seed for one transfer.
    pub fn random(rng: &mut (impl RngCore + CryptoRng)) -> Self {
        Self(Bits256::random(rng))
    }

    /// Derives output `index`'s uniqueness tag:
    /// `rho_i = PRF^rho(phi, h_sig, i)`.
    #[must_use]
    pub fn note_randomness(&self, h_sig: &Bits256, index: OutputIndex) -> Bits256 {
        prf::prf_rho(&self.0, h_sig, index)
    }

    /// The raw seed bits, for witnessing into a circuit.
    #[must_use]
    pub const fn expose(&self) -> &Bits256 {
        &self.0
    }
}

impl From<Bits256> for BlindingSeed {
    fn from(bits: Bits256) -> Self {
        Self(bits)
    }
}

impl fmt::Debug for BlindingSeed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("BlindingSeed(..)")
    }
}

/// The public address tag `a_pk = PRF^addr(a_sk)`.
///
/// Appears in each note owned by the key's holder and authorizes spending
/// inside the circuit. Public; safe to share and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressKey(Bits256);

impl AddressKey {
    /// Parses the 64-character hex form.
    pub fn from_hex(digest: &str) -> Result<Self, HexDigestError> {
        Bits256::from_hex(digest).map(Self)
    }

    /// Lowercase hex form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// The underlying digest bits.
    #[must_use]
    pub const fn as_bits(&self) -> &Bits256 {
        &self.0
    }
}

impl From<Bits256> for AddressKey {
    fn from(digest: Bits256) -> Self {
        Self(digest)
    }
}

/// A note's nullifier `nf = PRF^nf(a_sk, rho)`.
///
/// Public once revealed; its prior unforgeability rests entirely on
/// `a_sk`'s secrecy and the PRF construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nullifier(Bits256);

impl Nullifier {
    /// Parses the 64-character hex form.
    pub fn from_hex(digest: &str) -> Result<Self, HexDigestError> {
        Bits256::from_hex(digest).map(Self)
    }

    /// Lowercase hex form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// The underlying digest bits.
    #[must_use]
    pub const fn as_bits(&self) -> &Bits256 {
        &self.0
    }
}

impl From<Bits256> for Nullifier {
    fn from(digest: Bits256) -> Self {
        Self(digest)
    }
}

/// A per-output one-time key `h_i = PRF^pk(a_sk, h_sig, i)`.
///
/// Ties output `i` of a transfer to the spender's key without linking
/// transfers to each other; `h_0` and `h_1` come from distinct domain
/// tags, so the two outputs are independently keyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OneTimeKey(Bits256);

impl OneTimeKey {
    /// The underlying digest bits.
    #[must_use]
    pub const fn as_bits(&self) -> &Bits256 {
        &self.0
    }
}

impl From<Bits256> for OneTimeKey {
    fn from(digest: Bits256) -> Self {
        Self(digest)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;

    /// Derivations from the same key must be reproducible.
    #[test]
    fn derivations_deterministic() {
        let a_sk = SpendingKey::from([0x42u8; 32]);
        let rho = Bits256::from_bytes([0x07u8; 32]);
        assert_eq!(a_sk.address(), a_sk.address());
        assert_eq!(a_sk.nullifier(&rho), a_sk.nullifier(&rho));
    }

    /// a_pk, nf and h_i derived from one key must all be different —
    /// distinct domain tags produce independent values.
    #[test]
    fn child_values_independent() {
        let a_sk = SpendingKey::from([0x42u8; 32]);
        let aux = Bits256::from_bytes([0x07u8; 32]);

        let a_pk = *a_sk.address().as_bits();
        let nf = *a_sk.nullifier(&aux).as_bits();
        let h_0 = *a_sk.one_time_key(&aux, OutputIndex::First).as_bits();
        let h_1 = *a_sk.one_time_key(&aux, OutputIndex::Second).as_bits();

        assert_ne!(a_pk, nf);
        assert_ne!(nf, h_0);
        assert_ne!(h_0, h_1);
        assert_ne!(a_pk, h_1);
    }

    /// Two transfers' blinding seeds give unrelated uniqueness tags, and
    /// one seed separates its two outputs.
    #[test]
    fn note_randomness_separated() {
        let mut rng = StdRng::seed_from_u64(7);
        let h_sig = Bits256::from_bytes([0x11u8; 32]);

        let phi = BlindingSeed::random(&mut rng);
        let other = BlindingSeed::random(&mut rng);

        let rho_0 = phi.note_randomness(&h_sig, OutputIndex::First);
        let rho_1 = phi.note_randomness(&h_sig, OutputIndex::Second);
        assert_ne!(rho_0, rho_1);
        assert_ne!(rho_0, other.note_randomness(&h_sig, OutputIndex::First));
    }

    /// Public digests round-trip their on-chain hex form.
    #[test]
    fn digests_round_trip_hex() {
        let a_sk = SpendingKey::from([0x42u8; 32]);
        let a_pk = a_sk.address();
        let nf = a_sk.nullifier(&Bits256::from_bytes([0x07u8; 32]));
        assert_eq!(AddressKey::from_hex(&a_pk.to_hex()).unwrap(), a_pk);
        assert_eq!(Nullifier::from_hex(&nf.to_hex()).unwrap(), nf);
    }

    /// Secrets must never leak through Debug.
    #[test]
    fn secrets_redacted_in_debug() {
        let a_sk = SpendingKey::from([0x42u8; 32]);
        let rendered = format!("{a_sk:?}");
        assert_eq!(rendered, "SpendingKey(..)");
        assert!(!rendered.contains("42"), "no key bytes in Debug output");
    }
}

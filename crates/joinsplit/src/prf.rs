//! Native (out-of-circuit) evaluation of the PRF family.
//!
//! Each PRF is one BLAKE2s-256 compression of a 512-bit block:
//!
//! ```text
//! digest = BLAKE2s-256( tag(4 bits) ∥ key bits 0..252 ∥ aux(256 bits) )
//! ```
//!
//! with all bit strings MSB-first within each byte (see
//! [`bits`](crate::bits)). The key operand is truncated to its first 252
//! bits; its trailing 4 bits are never read.
//!
//! The same functions exist as constraint gadgets in
//! [`circuit::prf`](crate::circuit::prf). Wallet-side derivation uses this
//! module; the circuit side must produce bit-identical digests, and the
//! test suites of both are pinned to the same vectors.

use bitvec::{order::Msb0, view::BitView as _};

use crate::{
    bits::Bits256,
    constants::{DomainTag, OutputIndex, PRF_BLOCK_BITS, TRUNCATED_KEY_BITS},
};

/// Assembles the 64-byte compression block `tag ∥ key[0..252) ∥ aux`.
fn compression_block(tag: DomainTag, key: &Bits256, aux: &Bits256) -> [u8; PRF_BLOCK_BITS / 8] {
    let mut block = [0u8; PRF_BLOCK_BITS / 8];
    let view = block.view_bits_mut::<Msb0>();
    let bits = tag
        .bits()
        .into_iter()
        .chain(key.bits().take(TRUNCATED_KEY_BITS))
        .chain(aux.bits());
    for (index, bit) in bits.enumerate() {
        view.set(index, bit);
    }
    block
}

/// The shared PRF construction: digest the tagged, truncated, concatenated
/// block.
#[must_use]
pub fn prf(tag: DomainTag, key: &Bits256, aux: &Bits256) -> Bits256 {
    let digest = blake2s_simd::blake2s(&compression_block(tag, key, aux));
    Bits256::from_bytes(*digest.as_array())
}

/// `a_pk = PRF^addr(a_sk)` — address-key derivation.
///
/// Tag `1100`, auxiliary input all-zero.
#[must_use]
pub fn prf_addr(a_sk: &Bits256) -> Bits256 {
    prf(DomainTag::ADDR, a_sk, &Bits256::ZERO)
}

/// `nf = PRF^nf(a_sk, rho)` — nullifier derivation.
///
/// Tag `1110`, auxiliary input the note's uniqueness tag `rho`.
#[must_use]
pub fn prf_nf(a_sk: &Bits256, rho: &Bits256) -> Bits256 {
    prf(DomainTag::NF, a_sk, rho)
}

/// `h_i = PRF^pk(a_sk, h_sig, i)` — one-time-key derivation for output `i`.
///
/// Tag `0i00`, auxiliary input the per-transfer session hash `h_sig`.
#[must_use]
pub fn prf_pk(a_sk: &Bits256, h_sig: &Bits256, index: OutputIndex) -> Bits256 {
    prf(DomainTag::pk(index), a_sk, h_sig)
}

/// `rho_i = PRF^rho(phi, h_sig, i)` — note-randomness derivation for
/// output `i`.
///
/// Tag `0i10`; the key operand is the per-transfer blinding seed `phi`,
/// the auxiliary input the session hash `h_sig`.
#[must_use]
pub fn prf_rho(phi: &Bits256, h_sig: &Bits256, index: OutputIndex) -> Bits256 {
    prf(DomainTag::rho(index), phi, h_sig)
}

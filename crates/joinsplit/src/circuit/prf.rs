//! The four domain-separated PRF gadgets.
//!
//! Each gadget constrains one BLAKE2s-256 compression of the 512-bit block
//! `tag ∥ key[0..252) ∥ aux` and hands the 256 digest signals back to the
//! caller, in protocol bit order. The layout is identical to the native
//! side ([`prf`](crate::prf)); the two are pinned to the same test
//! vectors.
//!
//! Instances never share intermediate signals: every call allocates fresh
//! wires under its own namespace, so two gadgets built against the same
//! inputs constrain disjoint subsets of the system. Input signal vectors
//! are only read, never mutated.
//!
//! Malformed input widths are caller contract violations and panic at
//! construction time — an invalid circuit must not be built. Everything
//! else propagates as [`SynthesisError`].

use bellman::{
    ConstraintSystem, SynthesisError,
    gadgets::{blake2s::blake2s, boolean::Boolean},
};
use ff::PrimeField;

use super::{reverse_within_bytes, zero_digest};
use crate::constants::{
    COMPRESSION_PERSONALIZATION, DIGEST_BITS, DomainTag, OutputIndex, PRF_BLOCK_BITS,
    TRUNCATED_KEY_BITS,
};

/// The shared PRF construction gadget.
///
/// Concatenates the constant `tag`, the first 252 `key` bits and the full
/// 256 `aux` bits in protocol order, bridges to the compression gadget's
/// bit order, and constrains `digest = Compress(block)`. Returns the
/// digest signals in protocol order.
///
/// # Panics
///
/// If `key` or `aux` is not exactly 256 signals.
pub fn prf<Scalar, CS>(
    mut cs: CS,
    tag: DomainTag,
    key: &[Boolean],
    aux: &[Boolean],
) -> Result<Vec<Boolean>, SynthesisError>
where
    Scalar: PrimeField,
    CS: ConstraintSystem<Scalar>,
{
    assert_eq!(key.len(), DIGEST_BITS, "key operand must be 256 signals");
    assert_eq!(aux.len(), DIGEST_BITS, "auxiliary operand must be 256 signals");

    tracing::trace!(?tag, "synthesizing PRF compression");

    let mut block = Vec::with_capacity(PRF_BLOCK_BITS);
    block.extend(tag.bits().into_iter().map(Boolean::constant));
    block.extend(key.iter().take(TRUNCATED_KEY_BITS).cloned());
    block.extend(aux.iter().cloned());

    let image = blake2s(
        cs.namespace(|| "compression"),
        &reverse_within_bytes(&block),
        COMPRESSION_PERSONALIZATION,
    )?;
    Ok(reverse_within_bytes(&image))
}

/// `a_pk = PRF^addr(a_sk)` — address-key derivation.
///
/// Tag `1100`, auxiliary input the constant zero digest.
pub fn prf_addr<Scalar, CS>(cs: CS, a_sk: &[Boolean]) -> Result<Vec<Boolean>, SynthesisError>
where
    Scalar: PrimeField,
    CS: ConstraintSystem<Scalar>,
{
    prf(cs, DomainTag::ADDR, a_sk, &zero_digest())
}

/// `nf = PRF^nf(a_sk, rho)` — nullifier derivation.
///
/// Tag `1110`, auxiliary input the spent note's uniqueness tag `rho`.
/// Neither operand leaks outside the compression boundary.
pub fn prf_nf<Scalar, CS>(
    cs: CS,
    a_sk: &[Boolean],
    rho: &[Boolean],
) -> Result<Vec<Boolean>, SynthesisError>
where
    Scalar: PrimeField,
    CS: ConstraintSystem<Scalar>,
{
    prf(cs, DomainTag::NF, a_sk, rho)
}

/// `h_i = PRF^pk(a_sk, h_sig, i)` — one-time-key derivation.
///
/// Tag `0i00`, auxiliary input the transfer's session hash. Build one
/// instance per output; the two digests are independently constrained.
pub fn prf_pk<Scalar, CS>(
    cs: CS,
    a_sk: &[Boolean],
    h_sig: &[Boolean],
    index: OutputIndex,
) -> Result<Vec<Boolean>, SynthesisError>
where
    Scalar: PrimeField,
    CS: ConstraintSystem<Scalar>,
{
    prf(cs, DomainTag::pk(index), a_sk, h_sig)
}

/// `rho_i = PRF^rho(phi, h_sig, i)` — note-randomness derivation.
///
/// Tag `0i10`; the key operand is the transfer's blinding seed `phi`.
pub fn prf_rho<Scalar, CS>(
    cs: CS,
    phi: &[Boolean],
    h_sig: &[Boolean],
    index: OutputIndex,
) -> Result<Vec<Boolean>, SynthesisError>
where
    Scalar: PrimeField,
    CS: ConstraintSystem<Scalar>,
{
    prf(cs, DomainTag::rho(index), phi, h_sig)
}

//! In-circuit counterparts of the native PRF family.
//!
//! Gadgets here are plain functions over a shared
//! [`ConstraintSystem`]: each call allocates its own intermediate
//! signals, asserts the constraints binding them, and computes the
//! matching witness values in the same pass — bellman's `Option`-valued
//! signals make "witness before constrain" unrepresentable rather than a
//! runtime error. Satisfiability is checked after synthesis (e.g. with
//! `bellman::gadgets::test::TestConstraintSystem`).
//!
//! ## Bit order
//!
//! Protocol bit strings are MSB-first within each byte
//! ([`bits`](crate::bits)); the BLAKE2s compression gadget speaks
//! LSB-first within each byte. [`reverse_within_bytes`] bridges the two at
//! the compression boundary — in both directions, so a digest leaves this
//! module in protocol order again. The hex test vectors pin this bridge
//! down; any re-ordering bug fails them bit-for-bit.
//!
//! Gadgets only read the signal vectors the caller passes in; ownership
//! of the returned digest signals moves to the caller.

pub mod prf;

use bellman::{
    ConstraintSystem, SynthesisError,
    gadgets::boolean::{AllocatedBit, Boolean},
};
use ff::PrimeField;

use crate::{
    bits::{BitString, Bits256},
    constants::DIGEST_BITS,
};

/// Reverses the bit order within each 8-bit chunk.
///
/// Converts protocol order (MSB-first per byte) to the compression
/// gadget's order (LSB-first per byte) and back; it is its own inverse.
///
/// # Panics
///
/// If the input is not a whole number of bytes (caller contract).
#[must_use]
pub fn reverse_within_bytes(bits: &[Boolean]) -> Vec<Boolean> {
    assert_eq!(bits.len() % 8, 0, "bit string must be a whole number of bytes");
    bits.chunks(8)
        .flat_map(|chunk| chunk.iter().rev().cloned())
        .collect()
}

/// The all-zero 256-bit digest, as circuit constants.
///
/// Used wherever a PRF's auxiliary input is specified as `0^256`.
/// Constants are not witness signals — there is nothing a malicious
/// prover could assign — so this is sound with exactly zero added
/// constraints.
#[must_use]
pub fn zero_digest() -> Vec<Boolean> {
    vec![Boolean::constant(false); DIGEST_BITS]
}

/// A fixed public bit string as circuit constants, MSB-first.
#[must_use]
pub fn constant_bits<const BYTES: usize>(value: &BitString<BYTES>) -> Vec<Boolean> {
    value.bits().map(Boolean::constant).collect()
}

/// Allocates one boolean signal per bit of a witness value, MSB-first.
///
/// Pass `None` when synthesizing without a witness (key generation); the
/// signals then carry no values and digest extraction yields `None`.
pub fn witness_bits<Scalar, CS, const BYTES: usize>(
    mut cs: CS,
    value: Option<&BitString<BYTES>>,
) -> Result<Vec<Boolean>, SynthesisError>
where
    Scalar: PrimeField,
    CS: ConstraintSystem<Scalar>,
{
    (0..BYTES * 8)
        .map(|index| {
            AllocatedBit::alloc(
                cs.namespace(|| format!("bit {index}")),
                value.and_then(|bits| bits.bit(index)),
            )
            .map(Boolean::from)
        })
        .collect()
}

/// Extracts a digest's concrete value from its signals.
///
/// `None` until a witness has been assigned.
///
/// # Panics
///
/// If the slice is not exactly 256 signals (caller contract).
#[must_use]
pub fn digest_value(bits: &[Boolean]) -> Option<Bits256> {
    assert_eq!(bits.len(), DIGEST_BITS, "digest must be 256 signals");
    bits.iter()
        .map(Boolean::get_value)
        .collect::<Option<Vec<bool>>>()
        .map(Bits256::from_bits)
}

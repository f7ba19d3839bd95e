//! # joinsplit
//!
//! PRF gadgets and note model for a shielded joinsplit transfer protocol.
//!
//! A joinsplit consumes two notes and creates two, proving in zero
//! knowledge that the spender holds the consumed notes' keys and that the
//! revealed nullifiers are well-formed. This crate is the cryptographic
//! core of that circuit: the domain-separated PRF family deriving a
//! spender's address tag, each note's nullifier, the per-output one-time
//! keys and the per-output note randomness — plus the [`Note`] model those
//! PRFs populate.
//!
//! Every PRF is one BLAKE2s-256 compression of a tagged 512-bit block:
//!
//! | PRF        | Tag    | Digest                                       |
//! | ---------- | ------ | -------------------------------------------- |
//! | `PRF^addr` | `1100` | `a_pk = Compress(1100 ∥ a_sk[..252] ∥ 0²⁵⁶)` |
//! | `PRF^nf`   | `1110` | `nf = Compress(1110 ∥ a_sk[..252] ∥ rho)`    |
//! | `PRF^pk`   | `0i00` | `h_i = Compress(0i00 ∥ a_sk[..252] ∥ h_sig)` |
//! | `PRF^rho`  | `0i10` | `rho_i = Compress(0i10 ∥ phi[..252] ∥ h_sig)`|
//!
//! Each function exists twice, and the pair must agree bit-for-bit:
//!
//! - **natively** ([`prf`], [`keys`]) — wallet-side derivation;
//! - **in-circuit** ([`circuit`]) — bellman gadgets that allocate
//!   signals, assert the compression constraints and compute the matching
//!   witness in a single synthesis pass.
//!
//! Circuit construction is single-threaded and ordered: signal indices
//! are allocated sequentially from one mutable constraint system, so a
//! gadget tree is built and witnessed as one unit per proof instance.
//! Parallelism belongs a level above, across independent proof builds.
//!
//! Out of scope here, by design: proof generation and verification,
//! Merkle membership, note-commitment computation, transaction assembly.

#![allow(clippy::pub_use, reason = "exporting items for consumers")]

pub mod bits;
pub mod circuit;
pub mod constants;
pub mod keys;
pub mod note;
pub mod prf;

pub use bits::{Bits256, Bits384};
pub use constants::OutputIndex;
pub use keys::{AddressKey, BlindingSeed, Nullifier, OneTimeKey, SpendingKey};
pub use note::Note;

//! Core deterministic primitives.
//!
//! Everything in this module is a pure function of its inputs. These
//! primitives must match the backend's derivation scheme bit-for-bit, so any
//! change here breaks verification of historical rounds.

pub mod derive;
pub mod hash;

// Re-export core functions
pub use derive::{derive_outcome, derive_outcomes};
pub use hash::{is_hex_digest, sha256_bytes, sha256_hex};

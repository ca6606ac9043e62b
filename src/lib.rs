//! # Fairgrid
//!
//! Provably-fair outcome verification for hash-driven casino grid games.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        FAIRGRID                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                 │
//! │  ├── hash.rs     - SHA-256 digest helpers                   │
//! │  └── derive.rs   - Seed-pair outcome derivation             │
//! │                                                             │
//! │  grid/           - Game configuration                       │
//! │  └── config.rs   - Difficulty tiers and payout ladders      │
//! │                                                             │
//! │  verify/         - Round auditing                           │
//! │  ├── commitment.rs - Server-seed commit/reveal check        │
//! │  └── round.rs    - Full-round verification report           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Outcome derivation is a pure function of the revealed seed pair and the
//! round index:
//! - No I/O, no clocks, no shared mutable state
//! - All randomness comes from the server/client seed pair
//! - One SHA-256 computation per round step, no chaining between steps
//!
//! Given identical seeds, derivation produces **identical results** on any
//! platform, which is what lets a player re-run a past round and confirm the
//! operator resolved it honestly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod grid;
pub mod verify;

// Re-export commonly used types
pub use crate::core::derive::{derive_outcome, derive_outcomes};
pub use crate::grid::config::{Difficulty, GridConfig};
pub use crate::verify::commitment::SeedCommitment;
pub use crate::verify::round::{
    verify_round, PathReplay, RoundReveal, RoundVerification, VerifyError,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

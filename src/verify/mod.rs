//! Round auditing.
//!
//! Provides verifiable round outcomes through:
//! - Server-seed commit/reveal checking
//! - Per-row outcome reconstruction from the revealed seed pair
//! - Path replay against the reconstructed bomb layout
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      VERIFICATION                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  commitment.rs   - Pre-round commitment protocol            │
//! │  round.rs        - Verification report and path replay      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commitment;
pub mod round;

// Re-export key types
pub use commitment::SeedCommitment;
pub use round::{verify_round, PathReplay, RoundReveal, RoundVerification, VerifyError};

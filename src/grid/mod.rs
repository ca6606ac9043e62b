//! Game configuration.
//!
//! Static, player-selected grid shapes and payout ladders. Nothing here is
//! derived from seed material.

pub mod config;

pub use config::{ConfigError, Difficulty, GridConfig};

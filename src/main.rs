//! Fairgrid Demo
//!
//! Walks through the full provably-fair lifecycle: commit, play, reveal,
//! verify. Useful as a smoke test and as a worked example of the audit flow.

use anyhow::Result;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use fairgrid::{
    verify_round, Difficulty, GridConfig, RoundReveal, SeedCommitment, VERSION,
};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Fairgrid v{}", VERSION);

    demo_round()?;
    demo_tampered_round()?;

    Ok(())
}

/// Demo an honest round: commit, reveal, verify, replay a path.
fn demo_round() -> Result<()> {
    info!("=== Honest Round ===");

    // Round start: the backend commits to its secret seed.
    let server_seed = "1bf502472e2123aa98d3e2fe7e54684a8055c4200fcafbb3106762e76a9230d6";
    let client_seed = "d81f6e2b9c34a07f";
    let commitment = SeedCommitment::commit(server_seed);
    info!("Commitment (shown before the round): {}", commitment.hash());

    // Round end: the backend reveals the raw seed.
    let reveal = RoundReveal {
        server_seed: server_seed.to_string(),
        client_seed: client_seed.to_string(),
        commitment,
    };

    for difficulty in Difficulty::ALL {
        let config = GridConfig::preset(difficulty);
        let report = verify_round(&reveal, &config)?;

        info!(
            "{:?} grid ({}x{}): commitment {}",
            difficulty,
            config.width,
            config.height,
            if report.is_confirmed() { "CONFIRMED" } else { "NOT CONFIRMED" }
        );
        info!("Bomb columns: {:?}", report.bomb_columns);

        // Replay a path that dodges every bomb.
        let picks: Vec<u32> = report
            .bomb_columns
            .iter()
            .map(|b| (b + 1) % config.width)
            .collect();
        let replay = report.replay_path(&picks);
        info!(
            "Perfect path clears {} rows for a {:.2}x multiplier",
            replay.rows_cleared, replay.multiplier
        );
    }

    Ok(())
}

/// Demo a tampered round: the revealed seed does not match the commitment.
fn demo_tampered_round() -> Result<()> {
    info!("=== Tampered Round ===");

    let commitment = SeedCommitment::commit("the-seed-the-operator-committed-to");
    let reveal = RoundReveal {
        server_seed: "a-different-seed-after-the-fact".to_string(),
        client_seed: "d81f6e2b9c34a07f".to_string(),
        commitment,
    };

    let report = verify_round(&reveal, &GridConfig::preset(Difficulty::Medium))?;
    if report.is_confirmed() {
        warn!("Tampered round unexpectedly confirmed");
    } else {
        info!("Fairness NOT confirmed: the operator swapped the seed");
    }

    Ok(())
}

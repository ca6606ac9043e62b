//! Grid Difficulty Tiers
//!
//! A round is played on a grid of `width` columns by `height` rows, with one
//! bomb column per row. The player picks a column per row, climbing the
//! payout ladder until they cash out or hit a bomb. The tier presets carry
//! the operator's payout tables; the verifier only needs the shape, but the
//! ladder lets a replay report the multiplier a path was worth.

use serde::{Deserialize, Serialize};

/// Player-selected difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 3 columns per row.
    Small,
    /// 4 columns per row.
    Medium,
    /// 5 columns per row.
    Big,
}

impl Difficulty {
    /// All tiers, in ascending width order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Small, Difficulty::Medium, Difficulty::Big];
}

/// Shape and payout table for one grid game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns per row (the derivation range width).
    pub width: u32,
    /// Number of rows (one independent derivation per row).
    pub height: u32,
    /// Payout multiplier after clearing row `i`, one entry per row.
    pub multipliers: Vec<f64>,
}

/// Errors for structurally invalid grid configurations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Fewer than two columns leaves no safe cell to pick.
    #[error("grid width {0} is below the minimum of 2")]
    WidthTooSmall(u32),

    /// A grid with no rows has nothing to verify.
    #[error("grid height must be at least 1")]
    EmptyGrid,

    /// Payout table length must equal the row count.
    #[error("payout table has {got} entries for {rows} rows")]
    LadderLengthMismatch {
        /// Entries in the supplied table.
        got: usize,
        /// Rows in the grid.
        rows: u32,
    },
}

impl GridConfig {
    /// Build a custom configuration, validating its shape.
    pub fn new(width: u32, height: u32, multipliers: Vec<f64>) -> Result<Self, ConfigError> {
        if width < 2 {
            return Err(ConfigError::WidthTooSmall(width));
        }
        if height == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if multipliers.len() != height as usize {
            return Err(ConfigError::LadderLengthMismatch {
                got: multipliers.len(),
                rows: height,
            });
        }
        Ok(Self {
            width,
            height,
            multipliers,
        })
    }

    /// Preset configuration for a difficulty tier.
    ///
    /// Ladders follow the survival odds `(w / (w - 1))^rows` with a 4% house
    /// edge, rounded to cents. These are operator constants; a backend with
    /// different tables supplies its own via [`GridConfig::new`].
    pub fn preset(difficulty: Difficulty) -> Self {
        let (width, multipliers) = match difficulty {
            Difficulty::Small => (
                3,
                vec![1.44, 2.16, 3.24, 4.86, 7.29, 10.93, 16.40, 24.60, 36.91, 55.36],
            ),
            Difficulty::Medium => (
                4,
                vec![1.28, 1.71, 2.28, 3.03, 4.05, 5.39, 7.19, 9.59, 12.79, 17.05],
            ),
            Difficulty::Big => (
                5,
                vec![1.20, 1.50, 1.88, 2.34, 2.93, 3.66, 4.58, 5.72, 7.15, 8.94],
            ),
        };
        Self {
            width,
            height: multipliers.len() as u32,
            multipliers,
        }
    }

    /// Payout multiplier after clearing `rows_cleared` rows.
    ///
    /// Zero rows cleared returns 1.0 (stake returned, no row resolved yet).
    /// Counts beyond the grid height clamp to the top of the ladder.
    pub fn multiplier_after(&self, rows_cleared: u32) -> f64 {
        if rows_cleared == 0 {
            return 1.0;
        }
        let idx = (rows_cleared as usize - 1).min(self.multipliers.len() - 1);
        self.multipliers[idx]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for difficulty in Difficulty::ALL {
            let config = GridConfig::preset(difficulty);
            // Presets must pass their own validation
            let rebuilt =
                GridConfig::new(config.width, config.height, config.multipliers.clone()).unwrap();
            assert_eq!(rebuilt, config);
            assert_eq!(config.height, 10);
        }
    }

    #[test]
    fn test_preset_widths() {
        assert_eq!(GridConfig::preset(Difficulty::Small).width, 3);
        assert_eq!(GridConfig::preset(Difficulty::Medium).width, 4);
        assert_eq!(GridConfig::preset(Difficulty::Big).width, 5);
    }

    #[test]
    fn test_ladders_strictly_increase() {
        for difficulty in Difficulty::ALL {
            let config = GridConfig::preset(difficulty);
            for pair in config.multipliers.windows(2) {
                assert!(pair[0] < pair[1], "{:?} ladder not increasing", difficulty);
            }
            // Clearing one row must beat the stake
            assert!(config.multipliers[0] > 1.0);
        }
    }

    #[test]
    fn test_wider_grids_pay_less_per_row() {
        let small = GridConfig::preset(Difficulty::Small);
        let big = GridConfig::preset(Difficulty::Big);
        assert!(small.multipliers[0] > big.multipliers[0]);
    }

    #[test]
    fn test_multiplier_after() {
        let config = GridConfig::preset(Difficulty::Medium);
        assert_eq!(config.multiplier_after(0), 1.0);
        assert_eq!(config.multiplier_after(1), 1.28);
        assert_eq!(config.multiplier_after(10), 17.05);
        // Clamp past the top
        assert_eq!(config.multiplier_after(99), 17.05);
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            GridConfig::new(1, 10, vec![1.0; 10]),
            Err(ConfigError::WidthTooSmall(1))
        );
        assert_eq!(GridConfig::new(3, 0, vec![]), Err(ConfigError::EmptyGrid));
        assert_eq!(
            GridConfig::new(3, 10, vec![1.0; 9]),
            Err(ConfigError::LadderLengthMismatch { got: 9, rows: 10 })
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let config = GridConfig::preset(Difficulty::Big);
        let json = serde_json::to_string(&config).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

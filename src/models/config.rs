//! Fee settings and scheduler behaviour.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_joining_fee() -> Decimal {
    Decimal::new(1000, 2)
}

fn default_per_game_fee() -> Decimal {
    Decimal::new(250, 2)
}

/// Process-wide settings for a club. Read at the moment a fee is posted,
/// so changing a fee never alters past transactions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClubConfig {
    /// Charged to new members who have not paid on sign-up.
    #[serde(default = "default_joining_fee")]
    pub joining_fee: Decimal,
    /// Charged to each of the four players when a match gets its result.
    #[serde(default = "default_per_game_fee")]
    pub per_game_fee: Decimal,
    /// Run auto-assign after every command that frees a court or grows the queue.
    #[serde(default)]
    pub reactive_auto_assign: bool,
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self {
            joining_fee: default_joining_fee(),
            per_game_fee: default_per_game_fee(),
            reactive_auto_assign: false,
        }
    }
}

impl ClubConfig {
    /// Settings from the environment, falling back to defaults for missing or bad values.
    ///
    /// - `CLUB_JOINING_FEE` (e.g. `10.00`)
    /// - `CLUB_PER_GAME_FEE` (e.g. `2.50`)
    /// - `CLUB_REACTIVE_AUTO_ASSIGN` (`true` / `false`)
    pub fn from_env() -> Self {
        Self {
            joining_fee: env_fee("CLUB_JOINING_FEE").unwrap_or_else(default_joining_fee),
            per_game_fee: env_fee("CLUB_PER_GAME_FEE").unwrap_or_else(default_per_game_fee),
            reactive_auto_assign: std::env::var("CLUB_REACTIVE_AUTO_ASSIGN")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(false),
        }
    }
}

/// A fee is usable if it is not negative.
pub fn is_valid_fee(fee: Decimal) -> bool {
    fee >= Decimal::ZERO
}

fn env_fee(key: &str) -> Option<Decimal> {
    let fee: Decimal = std::env::var(key).ok()?.trim().parse().ok()?;
    if is_valid_fee(fee) {
        Some(fee)
    } else {
        log::warn!("Ignoring {}: fee must be a non-negative decimal", key);
        None
    }
}

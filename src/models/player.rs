//! Player and Court data structures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches, queue teams and transactions).
pub type PlayerId = Uuid;

/// Unique identifier for a court.
pub type CourtId = Uuid;

/// Shown in place of a player that has been removed from the roster.
pub const REMOVED_PLAYER_NAME: &str = "Removed player";

/// Shown in place of a court that has been deleted.
pub const UNKNOWN_COURT_NAME: &str = "Unknown";

/// A club member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Human-facing number, assigned once and never reused.
    pub sequence: u32,
    pub name: String,
    /// Cached sum of this player's ledger transactions.
    /// Positive = the club owes the player, negative = the player owes the club.
    pub balance: Decimal,
}

impl Player {
    /// Create a player with a zero balance; the opening balance is posted through the ledger.
    pub fn new(name: impl Into<String>, sequence: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            sequence,
            name: name.into(),
            balance: Decimal::ZERO,
        }
    }

    /// `"<name> #<sequence>"`, the way players are listed everywhere.
    pub fn display_name(&self) -> String {
        format!("{} #{}", self.name, self.sequence)
    }
}

/// A court matches are played on.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub name: String,
}

impl Court {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

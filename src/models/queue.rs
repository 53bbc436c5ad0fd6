//! Waiting teams.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a queued team.
pub type TeamId = Uuid;

/// Two players waiting together for a court. Queue position is the index in `Club::queue`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub players: [PlayerId; 2],
}

impl Team {
    pub fn new(player_1: PlayerId, player_2: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            players: [player_1, player_2],
        }
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.contains(&player_id)
    }

    /// True if any member of this team is one of `player_ids`.
    pub fn overlaps(&self, player_ids: &[PlayerId]) -> bool {
        self.players.iter().any(|p| player_ids.contains(p))
    }
}

//! Match (game), Scores and the side that won a 2v2 game.

use crate::models::player::{CourtId, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// One of the two teams on court.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

/// Final score of a completed match. Both sides are always recorded together.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub team_a: u32,
    pub team_b: u32,
}

impl Scores {
    pub fn new(team_a: u32, team_b: u32) -> Self {
        Self { team_a, team_b }
    }

    /// The side with the strictly higher score; `None` on a tie.
    pub fn winner(&self) -> Option<Side> {
        match self.team_a.cmp(&self.team_b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Lifecycle state of a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    /// On court (or waiting for its result). Holds its court and players.
    Unscored,
    /// Result recorded; the per-game fee has been charged.
    Scored,
}

/// A 2v2 game on a court.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub court_id: CourtId,
    pub team_a: [PlayerId; 2],
    pub team_b: [PlayerId; 2],
    /// None while the match is unscored.
    pub scores: Option<Scores>,
    pub created_at: DateTime<Utc>,
}

impl Match {
    pub fn new(
        court_id: CourtId,
        team_a: [PlayerId; 2],
        team_b: [PlayerId; 2],
        scores: Option<Scores>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            court_id,
            team_a,
            team_b,
            scores,
            created_at: Utc::now(),
        }
    }

    pub fn state(&self) -> MatchState {
        if self.scores.is_some() {
            MatchState::Scored
        } else {
            MatchState::Unscored
        }
    }

    pub fn is_scored(&self) -> bool {
        self.scores.is_some()
    }

    /// All four players, team A first.
    pub fn players(&self) -> [PlayerId; 4] {
        [self.team_a[0], self.team_a[1], self.team_b[0], self.team_b[1]]
    }

    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.players().contains(&player_id)
    }

    pub fn team(&self, side: Side) -> &[PlayerId; 2] {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    /// Winning side of a scored match; `None` for ties and unscored matches.
    pub fn winner(&self) -> Option<Side> {
        self.scores.and_then(|s| s.winner())
    }
}

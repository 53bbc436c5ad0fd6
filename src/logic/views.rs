//! Read-only views with names resolved, ready for a presentation layer to render.

use crate::logic::status::{player_statuses, PlayerStatus};
use crate::models::{Club, CourtId, MatchId, MatchState, PlayerId, Scores, TeamId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub sequence: u32,
    pub display_name: String,
    pub balance: Decimal,
    pub status: PlayerStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    pub id: MatchId,
    pub court_id: CourtId,
    /// "Unknown" if the court was deleted.
    pub court_name: String,
    /// Placeholder names for removed players.
    pub team_a: [String; 2],
    pub team_b: [String; 2],
    pub scores: Option<Scores>,
    pub state: MatchState,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueueEntryView {
    pub team_id: TeamId,
    /// 1-based position in the queue.
    pub position: usize,
    pub players: [String; 2],
}

/// Roster in stored order with balance and derived status.
pub fn player_list(club: &Club) -> Vec<PlayerView> {
    let statuses = player_statuses(club);
    club.players
        .iter()
        .map(|p| PlayerView {
            id: p.id,
            sequence: p.sequence,
            display_name: p.display_name(),
            balance: p.balance,
            status: statuses
                .get(&p.id)
                .copied()
                .unwrap_or(PlayerStatus::Available),
        })
        .collect()
}

/// Match history, newest first.
pub fn match_history(club: &Club) -> Vec<MatchView> {
    club.matches
        .iter()
        .rev()
        .map(|m| MatchView {
            id: m.id,
            court_id: m.court_id,
            court_name: club.court_name(m.court_id),
            team_a: m.team_a.map(|pid| club.player_display_name(pid)),
            team_b: m.team_b.map(|pid| club.player_display_name(pid)),
            scores: m.scores,
            state: m.state(),
            created_at: m.created_at,
        })
        .collect()
}

/// The queue front to back.
pub fn queue_list(club: &Club) -> Vec<QueueEntryView> {
    club.queue
        .iter()
        .enumerate()
        .map(|(i, t)| QueueEntryView {
            team_id: t.id,
            position: i + 1,
            players: t.players.map(|pid| club.player_display_name(pid)),
        })
        .collect()
}

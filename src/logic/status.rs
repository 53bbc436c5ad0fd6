//! Derived player status and court availability. Recomputed on every call, never stored.

use crate::models::{Club, Court, CourtId, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Where a player currently is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Available,
    InQueue,
    /// On court in an unscored match.
    Playing,
}

/// Status of one player: playing beats queued beats available.
pub fn player_status(club: &Club, player_id: PlayerId) -> PlayerStatus {
    let playing = club
        .matches
        .iter()
        .any(|m| !m.is_scored() && m.involves(player_id));
    if playing {
        PlayerStatus::Playing
    } else if club.queue.iter().any(|t| t.contains(player_id)) {
        PlayerStatus::InQueue
    } else {
        PlayerStatus::Available
    }
}

/// Status of every roster player in one pass over matches and queue.
pub fn player_statuses(club: &Club) -> HashMap<PlayerId, PlayerStatus> {
    let in_game: HashSet<PlayerId> = club
        .matches
        .iter()
        .filter(|m| !m.is_scored())
        .flat_map(|m| m.players())
        .collect();
    let in_queue: HashSet<PlayerId> = club.queue.iter().flat_map(|t| t.players).collect();

    club.players
        .iter()
        .map(|p| {
            let status = if in_game.contains(&p.id) {
                PlayerStatus::Playing
            } else if in_queue.contains(&p.id) {
                PlayerStatus::InQueue
            } else {
                PlayerStatus::Available
            };
            (p.id, status)
        })
        .collect()
}

/// Courts hosting no unscored match, in stored order.
pub fn free_courts(club: &Club) -> Vec<&Court> {
    let occupied = occupied_court_ids(club);
    club.courts
        .iter()
        .filter(|c| !occupied.contains(&c.id))
        .collect()
}

pub(crate) fn occupied_court_ids(club: &Club) -> HashSet<CourtId> {
    club.matches
        .iter()
        .filter(|m| !m.is_scored())
        .map(|m| m.court_id)
        .collect()
}

//! Standings derived from completed matches.

use crate::models::{Club, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the standings table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub player_id: PlayerId,
    pub player_name: String,
    pub matches_played: u32,
    pub wins: u32,
    /// 0 when no matches have been played.
    pub win_percentage: f64,
}

#[derive(Default)]
struct Tally {
    played: u32,
    wins: u32,
}

/// Rankings for every roster player, best win percentage first, ties broken by wins.
///
/// Only scored matches count. A tie counts as played for all four players and as a win for nobody.
pub fn compute_rankings(club: &Club) -> Vec<Ranking> {
    let mut tallies: HashMap<PlayerId, Tally> = club
        .players
        .iter()
        .map(|p| (p.id, Tally::default()))
        .collect();

    for m in club.matches.iter().filter(|m| m.is_scored()) {
        for pid in m.players() {
            if let Some(t) = tallies.get_mut(&pid) {
                t.played += 1;
            }
        }
        if let Some(side) = m.winner() {
            for pid in m.team(side) {
                if let Some(t) = tallies.get_mut(pid) {
                    t.wins += 1;
                }
            }
        }
    }

    let mut rankings: Vec<Ranking> = club
        .players
        .iter()
        .map(|p| {
            let t = tallies.remove(&p.id).unwrap_or_default();
            Ranking {
                player_id: p.id,
                player_name: p.display_name(),
                matches_played: t.played,
                wins: t.wins,
                win_percentage: win_percentage(t.wins, t.played),
            }
        })
        .collect();
    rankings.sort_by(|a, b| {
        b.win_percentage
            .total_cmp(&a.win_percentage)
            .then_with(|| b.wins.cmp(&a.wins))
    });
    rankings
}

fn win_percentage(wins: u32, played: u32) -> f64 {
    if played == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(played) * 100.0
    }
}

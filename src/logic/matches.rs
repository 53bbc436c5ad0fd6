//! Match lifecycle: record, edit and delete matches, charging or refunding the per-game fee
//! when a match moves between unscored and scored.

use crate::logic::ledger::apply_to_all;
use crate::logic::scheduler::run_reactive;
use crate::models::{Club, ClubError, CourtId, Match, MatchId, PlayerId, Scores};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Match form as submitted by the caller. Blank selections are `None`.
///
/// Scores are signed so that out-of-range input can be rejected instead of wrapped.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchInput {
    pub court_id: Option<CourtId>,
    pub team_a: [Option<PlayerId>; 2],
    pub team_b: [Option<PlayerId>; 2],
    pub score_a: Option<i64>,
    pub score_b: Option<i64>,
}

impl MatchInput {
    /// Fully selected, unscored match.
    pub fn new(court_id: CourtId, team_a: [PlayerId; 2], team_b: [PlayerId; 2]) -> Self {
        Self {
            court_id: Some(court_id),
            team_a: team_a.map(Some),
            team_b: team_b.map(Some),
            score_a: None,
            score_b: None,
        }
    }

    pub fn with_scores(mut self, score_a: i64, score_b: i64) -> Self {
        self.score_a = Some(score_a);
        self.score_b = Some(score_b);
        self
    }

    /// Prefill a form for editing an existing match.
    pub fn from_match(m: &Match) -> Self {
        Self {
            court_id: Some(m.court_id),
            team_a: m.team_a.map(Some),
            team_b: m.team_b.map(Some),
            score_a: m.scores.map(|s| i64::from(s.team_a)),
            score_b: m.scores.map(|s| i64::from(s.team_b)),
        }
    }
}

/// Input that passed the shape checks: everything selected, four distinct players, scores paired.
struct ValidMatch {
    court_id: CourtId,
    team_a: [PlayerId; 2],
    team_b: [PlayerId; 2],
    scores: Option<Scores>,
}

impl ValidMatch {
    fn players(&self) -> [PlayerId; 4] {
        [self.team_a[0], self.team_a[1], self.team_b[0], self.team_b[1]]
    }
}

fn validate_input(input: &MatchInput) -> Result<ValidMatch, ClubError> {
    let court_id = input.court_id.ok_or(ClubError::MissingCourt)?;
    let (team_a, team_b) = match (input.team_a, input.team_b) {
        ([Some(a1), Some(a2)], [Some(b1), Some(b2)]) => ([a1, a2], [b1, b2]),
        _ => return Err(ClubError::MissingPlayers),
    };
    let distinct: HashSet<PlayerId> = team_a.iter().chain(team_b.iter()).copied().collect();
    if distinct.len() != 4 {
        return Err(ClubError::DuplicatePlayers);
    }
    let scores = match (input.score_a, input.score_b) {
        (None, None) => None,
        (Some(a), Some(b)) => Some(Scores::new(score_value(a)?, score_value(b)?)),
        _ => return Err(ClubError::PartialScore),
    };
    Ok(ValidMatch {
        court_id,
        team_a,
        team_b,
        scores,
    })
}

fn score_value(score: i64) -> Result<u32, ClubError> {
    u32::try_from(score).map_err(|_| ClubError::InvalidScore)
}

/// Check ids against current state. `existing` is the match being edited: its own court and
/// players stay acceptable even if they have since been removed from the roster.
fn check_references(
    club: &Club,
    valid: &ValidMatch,
    existing: Option<&Match>,
) -> Result<(), ClubError> {
    let kept_court = existing.is_some_and(|m| m.court_id == valid.court_id);
    if !kept_court && club.get_court(valid.court_id).is_none() {
        return Err(ClubError::CourtNotFound(valid.court_id));
    }
    for pid in valid.players() {
        let kept_player = existing.is_some_and(|m| m.involves(pid));
        if !kept_player && club.get_player(pid).is_none() {
            return Err(ClubError::PlayerNotFound(pid));
        }
    }

    // A live match needs a free court and players who are not on another court.
    if valid.scores.is_some() {
        return Ok(());
    }
    let existing_id = existing.map(|m| m.id);
    let mut others_live = club
        .matches
        .iter()
        .filter(|m| !m.is_scored() && Some(m.id) != existing_id);
    let players = valid.players();
    others_live.try_for_each(|m| {
        if m.court_id == valid.court_id {
            return Err(ClubError::CourtOccupied(valid.court_id));
        }
        match players.iter().find(|&&pid| m.involves(pid)) {
            Some(&pid) => Err(ClubError::PlayerUnavailable(pid)),
            None => Ok(()),
        }
    })
}

/// Drop every queued team that shares a player with `players`. Returns how many were dropped.
fn consume_queue_entries(club: &mut Club, players: &[PlayerId]) -> usize {
    let before = club.queue.len();
    club.queue.retain(|t| !t.overlaps(players));
    before - club.queue.len()
}

fn charge_fee(club: &mut Club, players: &[PlayerId], court_id: CourtId) {
    let fee = club.config.per_game_fee;
    let reason = format!("Match fee on {}", club.court_name(court_id));
    apply_to_all(club, players, -fee, &reason);
}

fn refund_fee(club: &mut Club, players: &[PlayerId], reason: String) {
    let fee = club.config.per_game_fee;
    apply_to_all(club, players, fee, &reason);
}

/// Record a new match, live or already finished.
///
/// Queued teams containing any of the four players are removed from the queue. A match
/// recorded with scores charges the per-game fee to all four players straight away.
pub fn record_match(club: &mut Club, input: MatchInput) -> Result<MatchId, ClubError> {
    let valid = validate_input(&input)?;
    check_references(club, &valid, None)?;

    let players = valid.players();
    let dropped = consume_queue_entries(club, &players);
    let new_match = Match::new(valid.court_id, valid.team_a, valid.team_b, valid.scores);
    let id = new_match.id;
    let scored = new_match.is_scored();
    club.matches.push(new_match);
    if scored {
        charge_fee(club, &players, valid.court_id);
    }

    log::info!(
        "Recorded {} match {} on {} ({} queued team(s) consumed)",
        if scored { "scored" } else { "unscored" },
        id,
        club.court_name(valid.court_id),
        dropped
    );
    run_reactive(club);
    Ok(id)
}

/// Replace a match's court, players and scores.
///
/// Unscored -> scored charges the fee to the new players; scored -> unscored refunds the
/// players who were charged. Any other edit leaves the ledger alone.
pub fn edit_match(club: &mut Club, match_id: MatchId, input: MatchInput) -> Result<(), ClubError> {
    let idx = club
        .matches
        .iter()
        .position(|m| m.id == match_id)
        .ok_or(ClubError::MatchNotFound(match_id))?;
    let previous = club.matches[idx].clone();
    let valid = validate_input(&input)?;
    check_references(club, &valid, Some(&previous))?;

    let players = valid.players();
    consume_queue_entries(club, &players);
    match (previous.is_scored(), valid.scores.is_some()) {
        (false, true) => charge_fee(club, &players, valid.court_id),
        (true, false) => {
            let reason = format!("Refund for match on {}", club.court_name(previous.court_id));
            refund_fee(club, &previous.players(), reason);
        }
        _ => {}
    }

    let m = &mut club.matches[idx];
    m.court_id = valid.court_id;
    m.team_a = valid.team_a;
    m.team_b = valid.team_b;
    m.scores = valid.scores;
    log::info!("Edited match {} ({:?})", match_id, m.state());
    run_reactive(club);
    Ok(())
}

/// Delete a match record, refunding its players first if it had been scored.
pub fn delete_match(club: &mut Club, match_id: MatchId) -> Result<Match, ClubError> {
    let idx = club
        .matches
        .iter()
        .position(|m| m.id == match_id)
        .ok_or(ClubError::MatchNotFound(match_id))?;
    if club.matches[idx].is_scored() {
        let players = club.matches[idx].players();
        let reason = format!(
            "Refund for deleted match on {}",
            club.court_name(club.matches[idx].court_id)
        );
        refund_fee(club, &players, reason);
    }
    let removed = club.matches.remove(idx);
    log::info!("Deleted match {}", removed.id);
    run_reactive(club);
    Ok(removed)
}

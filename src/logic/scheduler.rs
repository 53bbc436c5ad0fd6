//! Auto-assign: send waiting teams to free courts.

use crate::logic::status::free_courts;
use crate::models::{Club, CourtId, Match, MatchReady};

/// Pair the queue onto free courts, first come first served.
///
/// Repeatedly takes the next free court (stored order) and the next two queued teams
/// (queue order) and creates an unscored match, until courts or pairs run out. Consumed
/// teams leave the queue in the same step the matches are created. No fees are charged.
/// Returns the created matches and queues one "match ready" event per match.
pub fn auto_assign(club: &mut Club) -> Vec<Match> {
    let free: Vec<CourtId> = free_courts(club).iter().map(|c| c.id).collect();
    let new_matches: Vec<Match> = free
        .iter()
        .zip(club.queue.chunks_exact(2))
        .map(|(&court_id, pair)| Match::new(court_id, pair[0].players, pair[1].players, None))
        .collect();

    if new_matches.is_empty() {
        log::debug!(
            "Auto-assign: nothing to do ({} free court(s), {} queued team(s))",
            free.len(),
            club.queue.len()
        );
        return new_matches;
    }

    let events: Vec<MatchReady> = new_matches.iter().map(|m| match_ready(club, m)).collect();
    club.queue.drain(..new_matches.len() * 2);
    club.matches.extend(new_matches.iter().cloned());
    for event in &events {
        log::info!(
            "Match ready on {}: {} & {} vs {} & {}",
            event.court_name,
            event.team_a[0],
            event.team_a[1],
            event.team_b[0],
            event.team_b[1]
        );
    }
    club.push_notifications(events);
    new_matches
}

/// Run auto-assign after a command when the club is configured to do so.
pub(crate) fn run_reactive(club: &mut Club) {
    if club.config.reactive_auto_assign {
        auto_assign(club);
    }
}

fn match_ready(club: &Club, m: &Match) -> MatchReady {
    MatchReady {
        match_id: m.id,
        court_name: club.court_name(m.court_id),
        team_a: m.team_a.map(|pid| club.player_display_name(pid)),
        team_b: m.team_b.map(|pid| club.player_display_name(pid)),
    }
}

//! Waiting list: enqueue and dequeue two-player teams.

use crate::logic::scheduler::run_reactive;
use crate::logic::status::{player_status, PlayerStatus};
use crate::models::{Club, ClubError, PlayerId, Team, TeamId};

/// Put two available players at the back of the queue as a team.
pub fn enqueue_team(
    club: &mut Club,
    player_1: PlayerId,
    player_2: PlayerId,
) -> Result<TeamId, ClubError> {
    if player_1 == player_2 {
        return Err(ClubError::SamePlayerTwice);
    }
    for pid in [player_1, player_2] {
        if club.get_player(pid).is_none() {
            return Err(ClubError::PlayerNotFound(pid));
        }
        if player_status(club, pid) != PlayerStatus::Available {
            return Err(ClubError::PlayerUnavailable(pid));
        }
    }
    let team = Team::new(player_1, player_2);
    let id = team.id;
    club.queue.push(team);
    log::info!(
        "Queued {} & {} at position {}",
        club.player_display_name(player_1),
        club.player_display_name(player_2),
        club.queue.len()
    );
    run_reactive(club);
    Ok(id)
}

/// Take a team out of the queue without matching it. No ledger activity.
pub fn dequeue_team(club: &mut Club, team_id: TeamId) -> Result<Team, ClubError> {
    let idx = club
        .queue
        .iter()
        .position(|t| t.id == team_id)
        .ok_or(ClubError::TeamNotFound(team_id))?;
    let team = club.queue.remove(idx);
    log::info!("Removed team {} from the queue", team.id);
    Ok(team)
}

/// The two teams at the front of the queue, for prefilling a manual match. Does not consume them.
pub fn suggest_from_queue(club: &Club) -> Option<(&Team, &Team)> {
    match club.queue.as_slice() {
        [first, second, ..] => Some((first, second)),
        _ => None,
    }
}

//! Roster: players and courts.

use crate::logic::ledger::apply_transaction;
use crate::logic::scheduler::run_reactive;
use crate::models::{trimmed_name, Club, ClubError, Court, CourtId, Player, PlayerId};
use rust_decimal::Decimal;

/// Add a player with an opening balance. The balance is posted as an "Initial balance"
/// transaction when it is nonzero.
pub fn add_player(
    club: &mut Club,
    name: impl Into<String>,
    initial_balance: Decimal,
) -> Result<PlayerId, ClubError> {
    let name = trimmed_name(name)?;
    let player = Player::new(name, club.next_sequence);
    let id = player.id;
    club.next_sequence += 1;
    log::info!("Added player {}", player.display_name());
    club.players.push(player);
    if !initial_balance.is_zero() {
        apply_transaction(club, id, initial_balance, "Initial balance");
    }
    Ok(id)
}

/// Add a player, charging the current joining fee unless it was paid on sign-up.
pub fn add_player_with_joining_fee(
    club: &mut Club,
    name: impl Into<String>,
    joining_fee_paid: bool,
) -> Result<PlayerId, ClubError> {
    let opening = if joining_fee_paid {
        Decimal::ZERO
    } else {
        -club.config.joining_fee
    };
    add_player(club, name, opening)
}

/// Rename a player and set their balance. A balance change is posted as an adjustment
/// so the ledger still explains every cent.
pub fn edit_player(
    club: &mut Club,
    id: PlayerId,
    name: impl Into<String>,
    balance: Decimal,
) -> Result<(), ClubError> {
    let name = trimmed_name(name)?;
    let player = club.get_player_mut(id).ok_or(ClubError::PlayerNotFound(id))?;
    player.name = name;
    let delta = balance - player.balance;
    if !delta.is_zero() {
        apply_transaction(club, id, delta, "Balance adjustment");
    }
    Ok(())
}

/// Remove a player from the roster and drop every queued team they belong to.
/// Past matches keep the id and render a placeholder name.
pub fn delete_player(club: &mut Club, id: PlayerId) -> Result<(), ClubError> {
    let idx = club
        .players
        .iter()
        .position(|p| p.id == id)
        .ok_or(ClubError::PlayerNotFound(id))?;
    let player = club.players.remove(idx);
    let before = club.queue.len();
    club.queue.retain(|t| !t.contains(id));
    log::info!(
        "Deleted player {} ({} queued team(s) dropped)",
        player.display_name(),
        before - club.queue.len()
    );
    Ok(())
}

/// Add a court. With reactive auto-assign on, waiting teams may be sent to it immediately.
pub fn add_court(club: &mut Club, name: impl Into<String>) -> Result<CourtId, ClubError> {
    let court = Court::new(trimmed_name(name)?);
    let id = court.id;
    log::info!("Added court {}", court.name);
    club.courts.push(court);
    run_reactive(club);
    Ok(id)
}

/// Rename a court.
pub fn edit_court(club: &mut Club, id: CourtId, name: impl Into<String>) -> Result<(), ClubError> {
    let name = trimmed_name(name)?;
    let court = club
        .courts
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(ClubError::CourtNotFound(id))?;
    court.name = name;
    Ok(())
}

/// Remove a court. Matches played on it keep the dangling id and render as "Unknown".
pub fn delete_court(club: &mut Club, id: CourtId) -> Result<(), ClubError> {
    let idx = club
        .courts
        .iter()
        .position(|c| c.id == id)
        .ok_or(ClubError::CourtNotFound(id))?;
    let court = club.courts.remove(idx);
    log::info!("Deleted court {}", court.name);
    Ok(())
}

//! Ledger postings: fees, refunds, payments and balance summaries.

use crate::models::{Club, ClubError, PlayerId, Transaction, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Append a transaction and move the player's cached balance by `amount`.
///
/// Postings against a player who is no longer on the roster are kept in the log;
/// there is simply no cached balance left to update.
pub(crate) fn apply_transaction(
    club: &mut Club,
    player_id: PlayerId,
    amount: Decimal,
    reason: impl Into<String>,
) -> TransactionId {
    let transaction = Transaction::new(player_id, amount, reason);
    let id = transaction.id;
    match club.get_player_mut(player_id) {
        Some(p) => p.balance += amount,
        None => log::warn!(
            "Posting {:.2} to removed player {} ({})",
            amount,
            player_id,
            transaction.reason
        ),
    }
    log::debug!("Ledger {:+.2} for {}: {}", amount, player_id, transaction.reason);
    club.ledger.append(transaction);
    id
}

/// Post the same amount to several players (match fees and refunds).
pub(crate) fn apply_to_all(
    club: &mut Club,
    player_ids: &[PlayerId],
    amount: Decimal,
    reason: &str,
) {
    for &pid in player_ids {
        apply_transaction(club, pid, amount, reason);
    }
}

/// Record money handed over by a player. Credits their balance.
pub fn record_payment(
    club: &mut Club,
    player_id: PlayerId,
    amount: Decimal,
) -> Result<TransactionId, ClubError> {
    if amount <= Decimal::ZERO {
        return Err(ClubError::NonPositivePayment);
    }
    if club.get_player(player_id).is_none() {
        return Err(ClubError::PlayerNotFound(player_id));
    }
    let id = apply_transaction(club, player_id, amount, "Manual payment");
    log::info!(
        "Payment of {:.2} from {}",
        amount,
        club.player_display_name(player_id)
    );
    Ok(id)
}

/// A player's transactions in posting order.
pub fn statement(club: &Club, player_id: PlayerId) -> Vec<&Transaction> {
    club.ledger.for_player(player_id).collect()
}

/// What the club owes its members versus what members owe the club.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of positive balances.
    pub total_credit: Decimal,
    /// Sum of negative balances, as a positive number.
    pub total_owed: Decimal,
}

pub fn financial_summary(club: &Club) -> FinancialSummary {
    club.players
        .iter()
        .fold(FinancialSummary::default(), |mut acc, p| {
            if p.balance > Decimal::ZERO {
                acc.total_credit += p.balance;
            } else if p.balance < Decimal::ZERO {
                acc.total_owed += -p.balance;
            }
            acc
        })
}

/// True when every roster player's cached balance equals the sum of their transactions.
pub fn ledger_is_consistent(club: &Club) -> bool {
    club.players
        .iter()
        .all(|p| p.balance == club.ledger.balance_of(p.id))
}

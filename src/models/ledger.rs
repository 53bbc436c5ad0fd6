//! Append-only money log.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a ledger transaction.
pub type TransactionId = Uuid;

/// One posting against a player's balance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub player_id: PlayerId,
    /// Signed: fees are negative, refunds and payments positive.
    pub amount: Decimal,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(player_id: PlayerId, amount: Decimal, reason: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_id,
            amount,
            reason: reason.into(),
            created_at: Utc::now(),
        }
    }
}

/// The transaction log. Entries are only ever appended.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Every transaction in posting order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// A single player's transactions in posting order.
    pub fn for_player(&self, player_id: PlayerId) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(move |t| t.player_id == player_id)
    }

    /// Sum of the player's transactions. This is the source of truth for balances.
    pub fn balance_of(&self, player_id: PlayerId) -> Decimal {
        self.for_player(player_id).map(|t| t.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

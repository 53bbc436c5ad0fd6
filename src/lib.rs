//! Doubles club organizer: roster, court rotation queue, fee ledger and standings.

pub mod logic;
pub mod models;

pub use logic::{
    add_court, add_player, add_player_with_joining_fee, auto_assign, compute_rankings,
    delete_court, delete_match, delete_player, dequeue_team, edit_court, edit_match, edit_player,
    enqueue_team, financial_summary, free_courts, ledger_is_consistent, match_history,
    player_list, player_status, player_statuses, queue_list, record_match, record_payment,
    statement, suggest_from_queue, FinancialSummary, MatchInput, MatchView, PlayerStatus,
    PlayerView, QueueEntryView, Ranking,
};
pub use models::{
    Club, ClubConfig, ClubError, Court, CourtId, ErrorKind, Ledger, Match, MatchId, MatchReady,
    MatchState, Player, PlayerId, Scores, Side, Team, TeamId, Transaction, TransactionId,
    MAX_PENDING_NOTIFICATIONS,
};
pub use rust_decimal::Decimal;

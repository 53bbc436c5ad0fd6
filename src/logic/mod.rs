//! Club business logic: roster, ledger, queue, match lifecycle, auto-assign and standings.

mod ledger;
mod matches;
mod queue;
mod roster;
mod scheduler;
mod standings;
mod status;
mod views;

pub use ledger::{
    financial_summary, ledger_is_consistent, record_payment, statement, FinancialSummary,
};
pub use matches::{delete_match, edit_match, record_match, MatchInput};
pub use queue::{dequeue_team, enqueue_team, suggest_from_queue};
pub use roster::{
    add_court, add_player, add_player_with_joining_fee, delete_court, delete_player, edit_court,
    edit_player,
};
pub use scheduler::auto_assign;
pub use standings::{compute_rankings, Ranking};
pub use status::{free_courts, player_status, player_statuses, PlayerStatus};
pub use views::{match_history, player_list, queue_list, MatchView, PlayerView, QueueEntryView};

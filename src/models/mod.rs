//! Data structures for the club: players, courts, matches, queue, ledger and settings.

mod club;
mod config;
mod game;
mod ledger;
mod player;
mod queue;

pub(crate) use club::trimmed_name;
pub use club::{Club, ClubError, ErrorKind, MatchReady, MAX_PENDING_NOTIFICATIONS};
pub use config::{is_valid_fee, ClubConfig};
pub use game::{Match, MatchId, MatchState, Scores, Side};
pub use ledger::{Ledger, Transaction, TransactionId};
pub use player::{Court, CourtId, Player, PlayerId, REMOVED_PLAYER_NAME, UNKNOWN_COURT_NAME};
pub use queue::{Team, TeamId};

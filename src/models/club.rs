//! Club state and ClubError.

use crate::models::config::{is_valid_fee, ClubConfig};
use crate::models::game::{Match, MatchId};
use crate::models::ledger::Ledger;
use crate::models::player::{
    Court, CourtId, Player, PlayerId, REMOVED_PLAYER_NAME, UNKNOWN_COURT_NAME,
};
use crate::models::queue::{Team, TeamId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which half of the error taxonomy a `ClubError` belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Invalid, missing or conflicting input.
    Validation,
    /// The command referenced an id that no longer exists.
    NotFound,
}

/// Errors that can occur during club operations. State is unchanged whenever one is returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClubError {
    /// Name is empty after trimming.
    EmptyName,
    /// No court selected for a match.
    MissingCourt,
    /// Fewer than four players selected for a match.
    MissingPlayers,
    /// The same player appears twice in a match.
    DuplicatePlayers,
    /// Only one of the two scores was given.
    PartialScore,
    /// A score that is negative or out of range.
    InvalidScore,
    /// Both members of a queued team are the same player.
    SamePlayerTwice,
    /// Player is already playing (or, for the queue, already waiting).
    PlayerUnavailable(PlayerId),
    /// Court already hosts an unscored match.
    CourtOccupied(CourtId),
    /// Payments must be greater than zero.
    NonPositivePayment,
    /// Fees must not be negative.
    InvalidFee,
    PlayerNotFound(PlayerId),
    CourtNotFound(CourtId),
    MatchNotFound(MatchId),
    TeamNotFound(TeamId),
}

impl ClubError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClubError::PlayerNotFound(_)
            | ClubError::CourtNotFound(_)
            | ClubError::MatchNotFound(_)
            | ClubError::TeamNotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::Validation,
        }
    }
}

impl std::fmt::Display for ClubError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClubError::EmptyName => write!(f, "Name must not be empty"),
            ClubError::MissingCourt => write!(f, "Please select a court"),
            ClubError::MissingPlayers => write!(f, "Please select all 4 players for the match"),
            ClubError::DuplicatePlayers => write!(f, "All four players must be unique"),
            ClubError::PartialScore => {
                write!(f, "Please enter scores for both teams or leave both blank")
            }
            ClubError::InvalidScore => write!(f, "Scores must be valid, non-negative numbers"),
            ClubError::SamePlayerTwice => write!(f, "Please select two different players"),
            ClubError::PlayerUnavailable(_) => {
                write!(f, "Player is not available (already playing or in queue)")
            }
            ClubError::CourtOccupied(_) => write!(f, "Court already has a match in progress"),
            ClubError::NonPositivePayment => write!(f, "Payment must be a positive amount"),
            ClubError::InvalidFee => write!(f, "Fee must be a non-negative amount"),
            ClubError::PlayerNotFound(_) => write!(f, "Player not found"),
            ClubError::CourtNotFound(_) => write!(f, "Court not found"),
            ClubError::MatchNotFound(_) => write!(f, "Match not found"),
            ClubError::TeamNotFound(_) => write!(f, "Team not found in queue"),
        }
    }
}

impl std::error::Error for ClubError {}

/// Undrained "match ready" events kept per club.
pub const MAX_PENDING_NOTIFICATIONS: usize = 64;

/// One-shot "match ready" event: who should walk onto which court.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchReady {
    pub match_id: MatchId,
    pub court_name: String,
    pub team_a: [String; 2],
    pub team_b: [String; 2],
}

/// Full club state: roster, courts, match history, queue, ledger and settings.
///
/// Owned by the caller and mutated only through the command functions in `logic`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Club {
    pub players: Vec<Player>,
    pub courts: Vec<Court>,
    /// Match history in creation order (oldest first).
    pub matches: Vec<Match>,
    /// Waiting teams, front of the queue first.
    pub queue: Vec<Team>,
    pub ledger: Ledger,
    pub config: ClubConfig,
    /// Next player sequence number; numbers of removed players are not reused.
    pub next_sequence: u32,
    /// Pending "match ready" events, drained by `take_notifications`. Bounded by
    /// `MAX_PENDING_NOTIFICATIONS`; the oldest are dropped when a caller never drains.
    #[serde(skip)]
    pub(crate) notifications: Vec<MatchReady>,
}

impl Default for Club {
    fn default() -> Self {
        Self::new(ClubConfig::default())
    }
}

impl Club {
    /// Create an empty club.
    pub fn new(config: ClubConfig) -> Self {
        Self {
            players: Vec::new(),
            courts: Vec::new(),
            matches: Vec::new(),
            queue: Vec::new(),
            ledger: Ledger::new(),
            config,
            next_sequence: 1,
            notifications: Vec::new(),
        }
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn get_court(&self, id: CourtId) -> Option<&Court> {
        self.courts.iter().find(|c| c.id == id)
    }

    pub fn get_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Display name of a player, or a placeholder if they were removed.
    pub fn player_display_name(&self, id: PlayerId) -> String {
        self.get_player(id)
            .map(Player::display_name)
            .unwrap_or_else(|| REMOVED_PLAYER_NAME.to_string())
    }

    /// Court name, or `"Unknown"` if the court was deleted.
    pub fn court_name(&self, id: CourtId) -> String {
        self.get_court(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNKNOWN_COURT_NAME.to_string())
    }

    pub fn set_joining_fee(&mut self, fee: Decimal) -> Result<(), ClubError> {
        if !is_valid_fee(fee) {
            return Err(ClubError::InvalidFee);
        }
        self.config.joining_fee = fee;
        log::info!("Joining fee set to {:.2}", fee);
        Ok(())
    }

    pub fn set_per_game_fee(&mut self, fee: Decimal) -> Result<(), ClubError> {
        if !is_valid_fee(fee) {
            return Err(ClubError::InvalidFee);
        }
        self.config.per_game_fee = fee;
        log::info!("Per-game fee set to {:.2}", fee);
        Ok(())
    }

    /// Hand out pending "match ready" events. Each event is returned once.
    pub fn take_notifications(&mut self) -> Vec<MatchReady> {
        std::mem::take(&mut self.notifications)
    }

    /// Queue events for the next drain, keeping only the newest `MAX_PENDING_NOTIFICATIONS`.
    pub(crate) fn push_notifications(&mut self, events: impl IntoIterator<Item = MatchReady>) {
        self.notifications.extend(events);
        let excess = self
            .notifications
            .len()
            .saturating_sub(MAX_PENDING_NOTIFICATIONS);
        if excess > 0 {
            log::warn!("Dropping {} undelivered match-ready event(s)", excess);
            self.notifications.drain(..excess);
        }
    }
}

/// Trim a name and reject it if nothing is left.
pub(crate) fn trimmed_name(name: impl Into<String>) -> Result<String, ClubError> {
    let name = name.into();
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ClubError::EmptyName);
    }
    Ok(trimmed.to_string())
}

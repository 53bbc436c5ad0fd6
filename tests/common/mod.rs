//! Shared fixtures for integration tests.
#![allow(dead_code)]

use court_rotation::{
    add_court, add_player, Club, ClubConfig, CourtId, Decimal, MatchInput, PlayerId,
};

pub struct Fixture {
    pub club: Club,
    pub players: Vec<PlayerId>,
    pub courts: Vec<CourtId>,
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Club with default fees, `n_players` zero-balance players ("P0".."Pn") and `n_courts` courts.
pub fn club_with(n_players: usize, n_courts: usize) -> Fixture {
    club_with_config(n_players, n_courts, ClubConfig::default())
}

pub fn club_with_config(n_players: usize, n_courts: usize, config: ClubConfig) -> Fixture {
    init_logging();
    let mut club = Club::new(config);
    let players = (0..n_players)
        .map(|i| add_player(&mut club, format!("P{i}"), Decimal::ZERO).unwrap())
        .collect();
    let courts = (0..n_courts)
        .map(|i| add_court(&mut club, format!("Court {}", i + 1)).unwrap())
        .collect();
    Fixture {
        club,
        players,
        courts,
    }
}

/// Unscored match input for players `p[a0], p[a1]` vs `p[b0], p[b1]`.
pub fn input(court: CourtId, p: &[PlayerId], team_a: [usize; 2], team_b: [usize; 2]) -> MatchInput {
    MatchInput::new(court, team_a.map(|i| p[i]), team_b.map(|i| p[i]))
}

/// Parse a money literal such as `"-2.50"`.
pub fn money(amount: &str) -> Decimal {
    amount.parse().unwrap()
}

pub fn balance(club: &Club, id: PlayerId) -> Decimal {
    club.get_player(id).unwrap().balance
}

/// Every roster player's balance equals the sum of their transactions.
pub fn assert_ledger_consistent(club: &Club) {
    for p in &club.players {
        assert_eq!(
            p.balance,
            club.ledger.balance_of(p.id),
            "balance of {} drifted from its transactions",
            p.name
        );
    }
}

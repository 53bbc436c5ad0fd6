//! Integration tests for the waiting queue and derived player status.

mod common;

use common::{club_with, input, money};
use court_rotation::{
    dequeue_team, edit_match, enqueue_team, player_list, player_status, player_statuses,
    queue_list, record_match, suggest_from_queue, ClubError, MatchInput, PlayerStatus,
};

#[test]
fn teams_are_appended_in_arrival_order() {
    let mut f = club_with(4, 0);
    let p = f.players.clone();
    let first = enqueue_team(&mut f.club, p[0], p[1]).unwrap();
    let second = enqueue_team(&mut f.club, p[3], p[2]).unwrap();

    let ids: Vec<_> = f.club.queue.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first, second]);
    let view = queue_list(&f.club);
    assert_eq!(view[1].position, 2);
    assert_eq!(view[1].players, ["P3 #4".to_string(), "P2 #3".to_string()]);
}

#[test]
fn same_player_twice_is_rejected() {
    let mut f = club_with(1, 0);
    let p = f.players[0];
    assert_eq!(
        enqueue_team(&mut f.club, p, p),
        Err(ClubError::SamePlayerTwice)
    );
    assert!(f.club.queue.is_empty());
}

#[test]
fn queued_player_cannot_join_a_second_team() {
    let mut f = club_with(3, 0);
    let p = f.players.clone();
    enqueue_team(&mut f.club, p[0], p[1]).unwrap();
    let before = f.club.queue.clone();

    assert_eq!(
        enqueue_team(&mut f.club, p[2], p[1]),
        Err(ClubError::PlayerUnavailable(p[1]))
    );
    assert_eq!(f.club.queue, before);
}

#[test]
fn playing_player_cannot_be_queued() {
    let mut f = club_with(5, 1);
    let p = f.players.clone();
    record_match(&mut f.club, input(f.courts[0], &p, [0, 1], [2, 3])).unwrap();

    assert_eq!(
        enqueue_team(&mut f.club, p[4], p[0]),
        Err(ClubError::PlayerUnavailable(p[0]))
    );
    assert!(f.club.queue.is_empty());
}

#[test]
fn unknown_player_cannot_be_queued() {
    let mut f = club_with(1, 0);
    let ghost = uuid::Uuid::new_v4();
    assert_eq!(
        enqueue_team(&mut f.club, f.players[0], ghost),
        Err(ClubError::PlayerNotFound(ghost))
    );
}

#[test]
fn dequeue_removes_team_without_ledger_activity() {
    let mut f = club_with(4, 0);
    let p = f.players.clone();
    let a = enqueue_team(&mut f.club, p[0], p[1]).unwrap();
    let b = enqueue_team(&mut f.club, p[2], p[3]).unwrap();

    let removed = dequeue_team(&mut f.club, a).unwrap();
    assert_eq!(removed.players, [p[0], p[1]]);
    assert_eq!(f.club.queue.len(), 1);
    assert_eq!(f.club.queue[0].id, b);
    assert!(f.club.ledger.is_empty());
    assert_eq!(player_status(&f.club, p[0]), PlayerStatus::Available);

    assert_eq!(dequeue_team(&mut f.club, a), Err(ClubError::TeamNotFound(a)));
}

#[test]
fn status_follows_queue_and_matches() {
    let mut f = club_with(6, 1);
    let p = f.players.clone();
    let m = record_match(&mut f.club, input(f.courts[0], &p, [0, 1], [2, 3])).unwrap();
    enqueue_team(&mut f.club, p[4], p[5]).unwrap();

    let statuses = player_statuses(&f.club);
    assert_eq!(statuses[&p[0]], PlayerStatus::Playing);
    assert_eq!(statuses[&p[4]], PlayerStatus::InQueue);

    let scored = MatchInput::from_match(f.club.get_match(m).unwrap()).with_scores(21, 19);
    edit_match(&mut f.club, m, scored).unwrap();
    assert_eq!(player_status(&f.club, p[0]), PlayerStatus::Available);

    let listed = player_list(&f.club);
    assert_eq!(listed[0].status, PlayerStatus::Available);
    assert_eq!(listed[5].status, PlayerStatus::InQueue);
    assert_eq!(listed[0].balance, money("-2.50"));
}

#[test]
fn suggestion_peeks_at_the_front_two_teams() {
    let mut f = club_with(6, 0);
    let p = f.players.clone();
    let a = enqueue_team(&mut f.club, p[0], p[1]).unwrap();
    assert!(suggest_from_queue(&f.club).is_none());

    let b = enqueue_team(&mut f.club, p[2], p[3]).unwrap();
    enqueue_team(&mut f.club, p[4], p[5]).unwrap();
    let (first, second) = suggest_from_queue(&f.club).unwrap();
    assert_eq!((first.id, second.id), (a, b));
    assert_eq!(f.club.queue.len(), 3);
}

#[test]
fn status_serializes_in_snake_case() {
    let json = serde_json::to_string(&PlayerStatus::InQueue).unwrap();
    assert_eq!(json, r#""in_queue""#);
}

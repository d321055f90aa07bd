use gomoku::{
    Command, GameEngine, MoveOutcome, Player, Reply, TimerEvent, TurnTimer, GameSession,
};
use std::time::Duration;
use tokio::sync::mpsc;

fn session() -> (GameSession, mpsc::UnboundedReceiver<TimerEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let timer = TurnTimer::with_tick(tx, 30, Duration::from_millis(10));
    (GameSession::new(GameEngine::new(), timer), rx)
}

#[tokio::test]
async fn test_start_arms_timer() {
    let (mut session, _rx) = session();
    assert!(!session.timer().is_armed());
    session.start();
    assert!(session.timer().is_armed());
    assert_eq!(session.engine().current_player(), Player::One);
}

#[tokio::test]
async fn test_place_continue_rearms_timer() {
    let (mut session, _rx) = session();
    session.start();

    let reply = session.dispatch(Command::Place { row: 4, col: 4 });
    assert_eq!(reply, Reply::Placed(MoveOutcome::Continue));
    assert!(session.timer().is_armed());
    assert_eq!(session.engine().current_player(), Player::Two);
}

#[tokio::test]
async fn test_win_cancels_timer() {
    let (mut session, _rx) = session();
    session.start();

    for c in 0..4 {
        assert_eq!(
            session.dispatch(Command::Place { row: 0, col: c }),
            Reply::Placed(MoveOutcome::Continue)
        );
        assert_eq!(
            session.dispatch(Command::Place { row: 9, col: c }),
            Reply::Placed(MoveOutcome::Continue)
        );
    }
    let reply = session.dispatch(Command::Place { row: 0, col: 4 });
    assert!(matches!(
        reply,
        Reply::Placed(MoveOutcome::Win { winner: Player::One, .. })
    ));
    // game over, nothing left to time
    assert!(!session.timer().is_armed());
}

#[tokio::test]
async fn test_invalid_place_is_ignored() {
    let (mut session, _rx) = session();
    session.start();
    session.dispatch(Command::Place { row: 2, col: 2 });

    assert_eq!(session.dispatch(Command::Place { row: 2, col: 2 }), Reply::Ignored);
    assert_eq!(session.dispatch(Command::Place { row: 42, col: 2 }), Reply::Ignored);
    assert_eq!(session.engine().move_count(), 1);
}

#[tokio::test]
async fn test_undo_reply_and_rearm() {
    let (mut session, _rx) = session();
    session.start();
    session.dispatch(Command::Place { row: 5, col: 5 });

    match session.dispatch(Command::Undo) {
        Reply::Undone(mv) => {
            assert_eq!((mv.row, mv.col, mv.player), (5, 5, Player::One));
        }
        other => panic!("expected Undone, got {:?}", other),
    }
    assert!(session.timer().is_armed());
    // empty history: safe no-op
    assert_eq!(session.dispatch(Command::Undo), Reply::Ignored);
}

#[tokio::test]
async fn test_expire_switches_turn_and_rearms() {
    let (mut session, _rx) = session();
    session.start();

    assert!(session.expire_turn());
    assert_eq!(session.engine().current_player(), Player::Two);
    assert_eq!(session.engine().move_count(), 0);
    assert!(session.timer().is_armed());
}

#[tokio::test]
async fn test_stale_expiry_after_game_end() {
    let (mut session, _rx) = session();
    session.start();

    for c in 0..4 {
        session.dispatch(Command::Place { row: 0, col: c });
        session.dispatch(Command::Place { row: 9, col: c });
    }
    session.dispatch(Command::Place { row: 0, col: 4 });

    // an expiry racing the winning move must not flip the turn
    assert!(!session.expire_turn());
    assert!(!session.timer().is_armed());
}

#[tokio::test]
async fn test_new_game_resets_session() {
    let (mut session, _rx) = session();
    session.start();
    session.dispatch(Command::Place { row: 1, col: 1 });

    assert_eq!(session.dispatch(Command::NewGame), Reply::Restarted);
    assert_eq!(session.engine().move_count(), 0);
    assert_eq!(session.engine().current_player(), Player::One);
    assert!(session.engine().is_active());
    assert!(session.timer().is_armed());
}

use crate::*;
use game_core::{Config, Game, GameRng, TargetWindow};
use proto::{Command, Severity, Update};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Store whose reads and writes can be switched off
#[derive(Default)]
struct FlakyStore {
    inner: MemoryHighscoreStore,
    reads_fail: Arc<AtomicBool>,
    writes_fail: Arc<AtomicBool>,
}

impl HighscoreStore for FlakyStore {
    fn read_all(&self) -> Result<Vec<HighscoreRecord>, StoreError> {
        if self.reads_fail.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("disk gone"));
        }
        self.inner.read_all()
    }

    fn append(&self, record: &HighscoreRecord) -> Result<(), StoreError> {
        if self.writes_fail.load(Ordering::SeqCst) {
            return Err(StoreError::write_failed("disk full"));
        }
        self.inner.append(record)
    }
}

fn session() -> (Session, Arc<AtomicBool>, Arc<AtomicBool>) {
    let store = FlakyStore::default();
    let reads_fail = store.reads_fail.clone();
    let writes_fail = store.writes_fail.clone();
    let game = Game::new(Config::new(), GameRng::new(12345));
    (Session::new(game, Box::new(store)), reads_fail, writes_fail)
}

fn notifications(updates: &[Update]) -> Vec<(Severity, String)> {
    updates
        .iter()
        .filter_map(|u| match u {
            Update::Notify(n) => Some((n.severity, n.text.clone())),
            _ => None,
        })
        .collect()
}

fn last_frame(updates: &[Update]) -> proto::ViewModel {
    updates
        .iter()
        .rev()
        .find_map(|u| match u {
            Update::Frame(view) => Some(view.clone()),
            _ => None,
        })
        .expect("expected a frame")
}

/// Fire and animate until the shot resolves, collecting every update
fn fire_and_animate(session: &mut Session) -> Vec<Update> {
    let mut updates = session.handle(Command::Fire);
    while session.game().is_firing() {
        updates.extend(session.tick());
    }
    updates
}

#[test]
fn test_initial_view() {
    let (session, _, _) = session();
    let view = session.view();
    assert_eq!(view.ammo_text, "Ammo: 🥏🥏");
    assert_eq!(view.score_text, "Score: 0");
    assert_eq!(view.highscore_text, "Highscore: 0");
    assert_eq!(view.target.x, 5.0);
    assert_eq!(view.target.y_bottom, 2.0);
    assert_eq!(view.target.y_top, 3.0);
    assert_eq!(view.trajectory.len(), 2, "Aiming preview");
    assert!(!view.firing);
}

#[test]
fn test_hit_notifies_success() {
    let (mut session, _, _) = session();
    let updates = fire_and_animate(&mut session);

    assert_eq!(
        notifications(&updates),
        vec![(Severity::Success, MSG_TARGET_HIT.to_string())]
    );
    let view = last_frame(&updates);
    assert_eq!(view.score_text, "Score: 1");
    assert_eq!(view.ammo_text, "Ammo: 🥏🥏");
    assert!((view.target.y_top - view.target.y_bottom - 0.9).abs() < 1e-9);
}

#[test]
fn test_game_over_notifies_error() {
    let (mut session, _, _) = session();
    session.handle(Command::SetAngle { degrees: 0.0 });

    let first = fire_and_animate(&mut session);
    assert!(notifications(&first).is_empty(), "Plain landing is silent");
    assert_eq!(last_frame(&first).ammo_text, "Ammo: 🥏");

    let second = fire_and_animate(&mut session);
    assert_eq!(
        notifications(&second),
        vec![(Severity::Error, MSG_GAME_OVER.to_string())]
    );
    assert_eq!(last_frame(&second).ammo_text, "Ammo: 🥏🥏");
}

#[test]
fn test_frames_stream_during_flight() {
    let (mut session, _, _) = session();
    session.handle(Command::Fire);

    let mut previous = 1;
    for _ in 0..10 {
        let view = last_frame(&session.tick());
        assert!(view.firing);
        assert_eq!(view.trajectory.len(), previous + 1, "One point per tick");
        previous = view.trajectory.len();
    }
}

#[test]
fn test_fire_while_firing_is_silent() {
    let (mut session, _, _) = session();
    assert_eq!(session.handle(Command::Fire).len(), 1);
    assert!(session.handle(Command::Fire).is_empty());
    assert_eq!(session.view().ammo_text, "Ammo: 🥏");
}

#[test]
fn test_angle_is_clamped() {
    let (mut session, _, _) = session();
    session.handle(Command::SetAngle { degrees: 140.0 });
    assert_eq!(session.view().angle, 90.0);
    session.handle(Command::SetAngle { degrees: -5.0 });
    assert_eq!(session.view().angle, 0.0);
}

#[test]
fn test_invalid_input_is_reported() {
    let (mut session, _, _) = session();

    let updates = session.handle(Command::SetAngle { degrees: f64::NAN });
    assert_eq!(notifications(&updates)[0].0, Severity::Error);
    assert_eq!(session.view().angle, 45.0);

    let updates = session.handle(Command::SetSpeed { mps: 0.0 });
    assert_eq!(notifications(&updates)[0].0, Severity::Error);
    assert_eq!(session.view().speed, 10.0);
}

#[test]
fn test_angle_ignored_while_firing() {
    let (mut session, _, _) = session();
    session.handle(Command::Fire);
    assert!(session.handle(Command::SetAngle { degrees: 10.0 }).is_empty());
    assert_eq!(session.view().angle, 45.0);
}

#[test]
fn test_submit_highscore_updates_table() {
    let (mut session, _, _) = session();
    fire_and_animate(&mut session);

    let updates = session.handle(Command::SubmitHighscore {
        name: "Ada".to_string(),
    });

    assert_eq!(
        notifications(&updates),
        vec![(Severity::Success, MSG_HIGHSCORE_SUBMITTED.to_string())]
    );
    assert!(updates.iter().any(|u| matches!(
        u,
        Update::Highscores(rows) if rows.len() == 1 && rows[0].name == "Ada" && rows[0].score == 1
    )));
    assert_eq!(last_frame(&updates).highscore_text, "Highscore: 1");
}

#[test]
fn test_submit_write_failure_keeps_highscore() {
    let (mut session, _, writes_fail) = session();
    fire_and_animate(&mut session);
    writes_fail.store(true, Ordering::SeqCst);

    let result = session.submit_highscore("Ada");
    assert!(matches!(result, Err(StoreError::WriteFailed { .. })));
    assert_eq!(session.game().score().highscore, 1);
    assert_eq!(session.game().score().current, 1, "Score is untouched");
    assert!(session.highscores().is_empty());
}

#[test]
fn test_submit_succeeds_when_table_reload_fails() {
    let (mut session, reads_fail, _) = session();
    fire_and_animate(&mut session);
    reads_fail.store(true, Ordering::SeqCst);

    let updates = session.handle(Command::SubmitHighscore {
        name: "Ada".to_string(),
    });

    let notes = notifications(&updates);
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].0, Severity::Error, "Reload failure is reported");
    assert_eq!(
        notes[1],
        (Severity::Success, MSG_HIGHSCORE_SUBMITTED.to_string())
    );
    assert!(!updates.iter().any(|u| matches!(u, Update::Highscores(_))));

    reads_fail.store(false, Ordering::SeqCst);
    session.refresh_highscores().unwrap();
    assert_eq!(session.highscores()[0], HighscoreRecord::new("Ada", 1));
}

#[test]
fn test_refresh_failure_is_surfaced() {
    let (mut session, reads_fail, _) = session();
    session.submit_highscore("x").unwrap();
    session.refresh_highscores().unwrap();
    assert_eq!(session.highscores().len(), 1);

    reads_fail.store(true, Ordering::SeqCst);
    let updates = session.handle(Command::RefreshHighscores);
    assert_eq!(notifications(&updates)[0].0, Severity::Error);
    assert!(matches!(
        session.refresh_highscores(),
        Err(StoreError::StorageUnavailable { .. })
    ));
    assert_eq!(session.highscores().len(), 1, "Old table kept");
    assert_eq!(session.view().ammo_text, "Ammo: 🥏🥏");
}

#[test]
fn test_close_cancels_flight() {
    let (mut session, _, _) = session();
    session.handle(Command::Fire);
    session.tick();
    session.close();

    let updates = session.tick();
    assert!(notifications(&updates).is_empty());
    assert!(!last_frame(&updates).firing);
    assert!(session.handle(Command::Fire).is_empty());
}

#[test]
fn test_run_flight_returns_notifications_and_frame() {
    let (mut session, _, _) = session();
    session.fire();
    let updates = session.run_flight();
    assert_eq!(notifications(&updates).len(), 1);
    assert!(matches!(updates.last(), Some(Update::Frame(_))));
}

#[test]
fn test_csv_store_round_trip_through_session() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = CsvHighscoreStore::open(dir.path().join("scores.csv")).unwrap();
    let mut game = Game::new(Config::new(), GameRng::new(3));
    game.set_target(TargetWindow::new(5.0, 2.0, 1.0));
    let mut session = Session::new(game, Box::new(store));

    fire_and_animate(&mut session);
    session.submit_highscore("first").unwrap();
    session.submit_highscore("").unwrap();
    session.refresh_highscores().unwrap();

    let rows = session.highscore_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "first");
    assert_eq!(rows[1].name, DEFAULT_NAME);
}

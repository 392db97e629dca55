use game_core::{Game, RoundOutcome};
use proto::{Command, HighscoreRow, Notification, TargetView, Update, ViewModel};

use crate::store::{HighscoreRecord, HighscoreStore};
use crate::{InputError, StoreError};

pub const DEFAULT_NAME: &str = "Anonymous";

pub const MSG_TARGET_HIT: &str = "Target hit!";
pub const MSG_GAME_OVER: &str = "Game Over!";
pub const MSG_HIGHSCORE_SUBMITTED: &str = "Highscore submitted!";

/// A game plus its highscore table, speaking the UI boundary protocol
pub struct Session {
    game: Game,
    store: Box<dyn HighscoreStore>,
    highscores: Vec<HighscoreRecord>,
}

impl Session {
    pub fn new(game: Game, store: Box<dyn HighscoreStore>) -> Self {
        Self {
            game,
            store,
            highscores: Vec::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Last highscore table read from the store
    pub fn highscores(&self) -> &[HighscoreRecord] {
        &self.highscores
    }

    /// Apply one UI command and return what the renderer should show
    pub fn handle(&mut self, command: Command) -> Vec<Update> {
        match command {
            Command::Fire => {
                if self.fire() {
                    vec![self.frame()]
                } else {
                    Vec::new()
                }
            }
            Command::SetAngle { degrees } => match self.set_angle(degrees) {
                Ok(true) => vec![self.frame()],
                Ok(false) => Vec::new(),
                Err(e) => vec![Update::Notify(Notification::error(e.to_string()))],
            },
            Command::SetSpeed { mps } => match self.set_speed(mps) {
                Ok(true) => vec![self.frame()],
                Ok(false) => Vec::new(),
                Err(e) => vec![Update::Notify(Notification::error(e.to_string()))],
            },
            Command::SubmitHighscore { name } => match self.submit_highscore(&name) {
                Ok(()) => {
                    // The record is saved even if reading the table back fails
                    let table = match self.refresh_highscores() {
                        Ok(()) => self.table(),
                        Err(e) => Update::Notify(Notification::error(e.to_string())),
                    };
                    vec![
                        table,
                        Update::Notify(Notification::success(MSG_HIGHSCORE_SUBMITTED)),
                        self.frame(),
                    ]
                }
                Err(e) => vec![Update::Notify(Notification::error(e.to_string())), self.frame()],
            },
            Command::RefreshHighscores => match self.refresh_highscores() {
                Ok(()) => vec![self.table()],
                Err(e) => vec![Update::Notify(Notification::error(e.to_string()))],
            },
        }
    }

    /// Advance the shot in flight by one point (one animation frame)
    pub fn tick(&mut self) -> Vec<Update> {
        let mut updates = Vec::new();
        match self.game.tick() {
            RoundOutcome::Idle => return updates,
            RoundOutcome::Hit => {
                updates.push(Update::Notify(Notification::success(MSG_TARGET_HIT)));
            }
            RoundOutcome::GameOver => {
                updates.push(Update::Notify(Notification::error(MSG_GAME_OVER)));
            }
            RoundOutcome::InFlight(_) | RoundOutcome::Landed | RoundOutcome::Cancelled => {}
        }
        updates.push(self.frame());
        updates
    }

    /// Resolve the shot in flight immediately, collecting notifications
    pub fn run_flight(&mut self) -> Vec<Update> {
        let mut notifications = Vec::new();
        while self.game.is_firing() {
            notifications.extend(
                self.tick()
                    .into_iter()
                    .filter(|update| matches!(update, Update::Notify(_))),
            );
        }
        notifications.push(self.frame());
        notifications
    }

    pub fn fire(&mut self) -> bool {
        self.game.fire()
    }

    /// Aim, clamped to the playable range. `Ok(false)` while a shot is in flight.
    pub fn set_angle(&mut self, degrees: f64) -> Result<bool, InputError> {
        if !degrees.is_finite() {
            return Err(InputError::NonFiniteAngle);
        }
        let clamped = self.game.config().clamp_angle(degrees);
        if clamped != degrees {
            tracing::debug!(requested = degrees, clamped, "angle clamped");
        }
        Ok(self.game.set_angle(clamped))
    }

    /// Change launch speed. `Ok(false)` while a shot is in flight.
    pub fn set_speed(&mut self, mps: f64) -> Result<bool, InputError> {
        if !(mps.is_finite() && mps > 0.0) {
            return Err(InputError::InvalidSpeed { mps });
        }
        Ok(self.game.set_speed(mps))
    }

    /// Record the session highscore under `name`. Does not reload the table.
    ///
    /// The in-memory highscore is updated even when the write fails.
    pub fn submit_highscore(&mut self, name: &str) -> Result<(), StoreError> {
        let highscore = self.game.record_highscore();
        let record = HighscoreRecord::new(clean_name(name), highscore);

        if let Err(e) = self.store.append(&record) {
            tracing::warn!(name = %record.name, highscore, "highscore write failed: {e}");
            return Err(e);
        }
        tracing::info!(name = %record.name, highscore, "highscore submitted");
        Ok(())
    }

    pub fn refresh_highscores(&mut self) -> Result<(), StoreError> {
        match self.store.read_all() {
            Ok(records) => {
                self.highscores = records;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("highscore refresh failed: {e}");
                Err(e)
            }
        }
    }

    /// Close the session; a shot in flight is cancelled on the next tick
    pub fn close(&self) {
        self.game.close();
    }

    pub fn view(&self) -> ViewModel {
        let target = self.game.target();
        let score = self.game.score();
        let launch = self.game.launch();

        ViewModel {
            trajectory: self
                .game
                .trajectory()
                .points()
                .iter()
                .map(|p| (p.x, p.y))
                .collect(),
            target: TargetView {
                x: target.x,
                y_bottom: target.y_bottom,
                y_top: target.y_top(),
            },
            ammo_text: proto::ammo_text(self.game.ammo().rounds),
            score_text: proto::score_text(score.current),
            highscore_text: proto::highscore_text(score.highscore),
            angle: launch.angle_degrees,
            speed: launch.speed,
            firing: self.game.is_firing(),
        }
    }

    pub fn highscore_rows(&self) -> Vec<HighscoreRow> {
        self.highscores.iter().cloned().map(Into::into).collect()
    }

    fn frame(&self) -> Update {
        Update::Frame(self.view())
    }

    fn table(&self) -> Update {
        Update::Highscores(self.highscore_rows())
    }
}

/// Names are stored as a single CSV field
fn clean_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| *c != ',' && !c.is_control())
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

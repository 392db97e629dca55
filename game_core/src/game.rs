use crate::fsm::{RoundAction, RoundFsm, RoundPhase};
use crate::systems::{preview, Flight};
use crate::{
    step, Ammo, Config, Events, GameRng, LaunchParameters, Score, TargetWindow, Trajectory,
    TrajectoryPoint,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "session still active" flag, checked before every flight step
#[derive(Debug, Clone)]
pub struct ActiveFlag(Arc<AtomicBool>);

impl ActiveFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn close(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for ActiveFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundOutcome {
    /// Nothing in flight
    Idle,
    /// Projectile advanced to this point
    InFlight(TrajectoryPoint),
    Hit,
    /// Projectile came down with ammo to spare
    Landed,
    /// Projectile came down on the last round
    GameOver,
    /// Session closed mid-flight
    Cancelled,
}

impl RoundOutcome {
    /// True when this outcome ends the round
    pub fn is_final(&self) -> bool {
        !matches!(self, RoundOutcome::Idle | RoundOutcome::InFlight(_))
    }
}

/// One game session: launch settings, target, ammo, score and the shot in flight
pub struct Game {
    config: Config,
    launch: LaunchParameters,
    trajectory: Trajectory,
    target: TargetWindow,
    ammo: Ammo,
    score: Score,
    events: Events,
    fsm: RoundFsm,
    flight: Option<Flight>,
    rng: GameRng,
    active: ActiveFlag,
}

impl Game {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let launch = config.launch();
        let mut trajectory = Trajectory::new();
        trajectory.replace(preview(&launch, &config));

        Self {
            launch,
            trajectory,
            target: config.initial_target(),
            ammo: Ammo::new(config.start_ammo),
            score: Score::new(),
            events: Events::new(),
            fsm: RoundFsm::new(),
            flight: None,
            rng,
            active: ActiveFlag::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn launch(&self) -> &LaunchParameters {
        &self.launch
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn target(&self) -> &TargetWindow {
        &self.target
    }

    /// Place the target explicitly (scripted rounds, replays)
    pub fn set_target(&mut self, target: TargetWindow) {
        self.target = target;
    }

    pub fn ammo(&self) -> &Ammo {
        &self.ammo
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn phase(&self) -> RoundPhase {
        self.fsm.phase()
    }

    pub fn is_firing(&self) -> bool {
        self.fsm.is_firing()
    }

    /// Handle that can close this session from elsewhere
    pub fn active_flag(&self) -> ActiveFlag {
        self.active.clone()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_active()
    }

    /// Close the session; an in-flight shot is cancelled on the next tick
    pub fn close(&self) {
        self.active.close();
    }

    /// Launch a shot. Ignored while a shot is already in flight.
    pub fn fire(&mut self) -> bool {
        if !self.active.is_active() {
            tracing::debug!("fire ignored: session closed");
            return false;
        }
        if !self.fsm.can_transition(RoundAction::Fire) {
            tracing::debug!("fire ignored: shot already in flight");
            return false;
        }
        if !self.ammo.spend() {
            tracing::warn!("fire ignored: out of ammo");
            return false;
        }

        self.fsm.transition(RoundAction::Fire);
        self.trajectory.reset();
        self.flight = Some(Flight::new(&self.launch, &self.config));

        tracing::debug!(
            angle = self.launch.angle_degrees,
            speed = self.launch.speed,
            ammo = self.ammo.rounds,
            "shot fired"
        );
        true
    }

    /// Advance the shot in flight by one point
    pub fn tick(&mut self) -> RoundOutcome {
        self.events.clear();
        if !self.fsm.is_firing() {
            return RoundOutcome::Idle;
        }

        if !self.active.is_active() || self.flight.is_none() {
            return self.cancel();
        }
        let flight = match self.flight.as_mut() {
            Some(flight) => flight,
            None => return RoundOutcome::Cancelled,
        };

        let outcome = step(
            flight,
            &mut self.trajectory,
            &mut self.target,
            &mut self.score,
            &mut self.ammo,
            &mut self.events,
            &self.config,
            &mut self.rng,
        );

        let action = match outcome {
            RoundOutcome::Hit => Some(RoundAction::Hit),
            RoundOutcome::Landed | RoundOutcome::GameOver => Some(RoundAction::Land),
            _ => None,
        };
        if let Some(action) = action {
            self.flight = None;
            self.fsm.transition(action);
        }

        outcome
    }

    /// Tick until the shot in flight resolves
    pub fn run_flight(&mut self) -> RoundOutcome {
        loop {
            let outcome = self.tick();
            if outcome.is_final() || outcome == RoundOutcome::Idle {
                return outcome;
            }
        }
    }

    /// Change the launch angle. Only takes effect between shots.
    pub fn set_angle(&mut self, degrees: f64) -> bool {
        if self.fsm.is_firing() {
            return false;
        }
        self.launch.angle_degrees = degrees;
        self.show_preview();
        true
    }

    /// Change the launch speed. Only takes effect between shots.
    pub fn set_speed(&mut self, speed: f64) -> bool {
        if self.fsm.is_firing() {
            return false;
        }
        self.launch.speed = speed;
        self.show_preview();
        true
    }

    /// Fold the current score into the session highscore
    pub fn record_highscore(&mut self) -> u32 {
        self.score.record_highscore()
    }

    fn cancel(&mut self) -> RoundOutcome {
        self.flight = None;
        self.fsm.transition(RoundAction::Cancel);
        self.events.cancelled = true;
        tracing::info!("shot cancelled");
        RoundOutcome::Cancelled
    }

    fn show_preview(&mut self) {
        self.trajectory.replace(preview(&self.launch, &self.config));
    }
}

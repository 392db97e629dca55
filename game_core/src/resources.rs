use crate::TrajectoryPoint;
use glam::DVec2;

/// Score tracking for the current game and the session best
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub current: u32,   // Hits in the current game
    pub highscore: u32, // Best score seen this session
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.current += 1;
    }

    /// Fold the current score into the highscore
    pub fn record_highscore(&mut self) -> u32 {
        self.highscore = self.highscore.max(self.current);
        self.highscore
    }

    /// End the game: keep the best, start over from zero
    pub fn game_over(&mut self) {
        self.record_highscore();
        self.current = 0;
    }
}

/// Ammunition left in the current round
#[derive(Debug, Clone, Copy)]
pub struct Ammo {
    pub rounds: u8,
    pub capacity: u8,
}

impl Ammo {
    pub fn new(capacity: u8) -> Self {
        Self {
            rounds: capacity,
            capacity,
        }
    }

    /// Spend one round. Returns false when empty.
    pub fn spend(&mut self) -> bool {
        if self.rounds == 0 {
            return false;
        }
        self.rounds -= 1;
        true
    }

    pub fn refill(&mut self) {
        self.rounds = self.capacity;
    }

    pub fn is_empty(&self) -> bool {
        self.rounds == 0
    }
}

/// Points of the shot currently on screen
#[derive(Debug, Clone)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self {
            points: vec![DVec2::ZERO],
        }
    }

    /// Start over from the launch origin
    pub fn reset(&mut self) {
        self.points.clear();
        self.points.push(DVec2::ZERO);
    }

    /// Replace contents with a precomputed path (aiming preview)
    pub fn replace(&mut self, points: impl IntoIterator<Item = TrajectoryPoint>) {
        self.points.clear();
        self.points.extend(points);
    }

    pub fn push(&mut self, point: TrajectoryPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn last(&self) -> Option<TrajectoryPoint> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from OS entropy
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub target_hit: bool,
    pub landed: bool,
    pub game_over: bool,
    pub cancelled: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.target_hit = false;
        self.landed = false;
        self.game_over = false;
        self.cancelled = false;
    }
}

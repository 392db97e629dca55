use crate::{Config, LaunchParameters, Projectile, TrajectoryPoint};
use glam::DVec2;

/// Advance a projectile by one explicit Euler step
pub fn integrate(projectile: &mut Projectile, dt: f64, gravity: f64, drag: f64) {
    projectile.pos += projectile.vel * dt;

    // Drag acts on the pre-step velocity
    let vel = projectile.vel;
    projectile.vel.y = vel.y - gravity * dt - drag * vel.y * dt;
    projectile.vel.x = vel.x - drag * vel.x * dt;
}

/// Lazy sequence of trajectory points for one shot.
///
/// The launch origin is not yielded; the first item is the position after one
/// step. The sequence ends after the first point below ground has been
/// yielded, or once `max_steps` points have been produced. Callers that need
/// to stop early on a hit simply stop pulling.
#[derive(Debug, Clone)]
pub struct Flight {
    projectile: Projectile,
    dt: f64,
    gravity: f64,
    drag: f64,
    steps: u32,
    max_steps: u32,
    grounded: bool,
}

impl Flight {
    pub fn new(params: &LaunchParameters, config: &Config) -> Self {
        Self {
            projectile: Projectile::launch(params),
            dt: config.dt,
            gravity: config.gravity,
            drag: params.drag,
            steps: 0,
            max_steps: config.max_flight_steps,
            grounded: false,
        }
    }

    /// True once the projectile has dropped below ground
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_finished(&self) -> bool {
        self.grounded || self.steps >= self.max_steps
    }
}

impl Iterator for Flight {
    type Item = TrajectoryPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        integrate(&mut self.projectile, self.dt, self.gravity, self.drag);
        self.steps += 1;
        self.grounded = self.projectile.below_ground();

        Some(self.projectile.pos)
    }
}

/// Two-point aiming line shown while the player adjusts the launch
pub fn preview(params: &LaunchParameters, config: &Config) -> [TrajectoryPoint; 2] {
    [DVec2::ZERO, params.velocity() / config.preview_scale]
}

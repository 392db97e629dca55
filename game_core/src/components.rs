use glam::DVec2;

/// Launch settings for the next shot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    pub speed: f64,         // m/s, > 0
    pub angle_degrees: f64, // 0..=90
    pub drag: f64,          // >= 0, fixed for a session
}

impl LaunchParameters {
    pub fn new(speed: f64, angle_degrees: f64, drag: f64) -> Self {
        Self {
            speed,
            angle_degrees,
            drag,
        }
    }

    /// Initial velocity vector for these settings
    pub fn velocity(&self) -> DVec2 {
        let angle = self.angle_degrees.to_radians();
        DVec2::new(self.speed * angle.cos(), self.speed * angle.sin())
    }
}

/// A sampled projectile position, in meters
pub type TrajectoryPoint = DVec2;

/// Target window the projectile has to pass through
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetWindow {
    pub x: f64,
    pub y_bottom: f64,
    pub height: f64,
}

impl TargetWindow {
    pub fn new(x: f64, y_bottom: f64, height: f64) -> Self {
        Self {
            x,
            y_bottom,
            height,
        }
    }

    pub fn y_top(&self) -> f64 {
        self.y_bottom + self.height
    }

    /// Vertical midpoint of the window
    pub fn center_y(&self) -> f64 {
        self.y_bottom + self.height / 2.0
    }
}

/// Projectile state while in flight
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Projectile {
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self { pos, vel }
    }

    /// Projectile at the origin launched with the given settings
    pub fn launch(params: &LaunchParameters) -> Self {
        Self::new(DVec2::ZERO, params.velocity())
    }

    pub fn below_ground(&self) -> bool {
        self.pos.y < 0.0
    }
}

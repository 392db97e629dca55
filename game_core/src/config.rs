use crate::{LaunchParameters, Params, TargetWindow};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub initial_speed: f64,
    pub initial_angle: f64,
    pub drag: f64,
    pub dt: f64,
    pub gravity: f64,
    pub max_flight_steps: u32,
    pub target_x_min: f64,
    pub target_x_max: f64,
    pub target_y_min: f64,
    pub target_y_max: f64,
    pub target_height: f64,
    pub target_height_decay: f64,
    pub initial_target_x: f64,
    pub initial_target_y: f64,
    pub hit_band: f64,
    pub hit_y_margin: f64,
    pub start_ammo: u8,
    pub preview_scale: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_speed: Params::INITIAL_SPEED,
            initial_angle: Params::INITIAL_ANGLE,
            drag: Params::DRAG,
            dt: Params::DT,
            gravity: Params::GRAVITY,
            max_flight_steps: Params::MAX_FLIGHT_STEPS,
            target_x_min: Params::TARGET_X_MIN,
            target_x_max: Params::TARGET_X_MAX,
            target_y_min: Params::TARGET_Y_MIN,
            target_y_max: Params::TARGET_Y_MAX,
            target_height: Params::TARGET_HEIGHT,
            target_height_decay: Params::TARGET_HEIGHT_DECAY,
            initial_target_x: Params::INITIAL_TARGET_X,
            initial_target_y: Params::INITIAL_TARGET_Y,
            hit_band: Params::HIT_BAND,
            hit_y_margin: Params::HIT_Y_MARGIN,
            start_ammo: Params::START_AMMO,
            preview_scale: Params::PREVIEW_SCALE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp an aiming angle to the playable range
    pub fn clamp_angle(&self, degrees: f64) -> f64 {
        degrees.clamp(Params::MIN_ANGLE, Params::MAX_ANGLE)
    }

    /// Launch parameters a new session starts with
    pub fn launch(&self) -> LaunchParameters {
        LaunchParameters::new(self.initial_speed, self.initial_angle, self.drag)
    }

    /// Target window a new session starts with
    pub fn initial_target(&self) -> TargetWindow {
        TargetWindow::new(
            self.initial_target_x,
            self.initial_target_y,
            self.target_height,
        )
    }
}

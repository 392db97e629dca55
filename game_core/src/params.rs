/// Game tuning parameters for Projectiles
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Launch
    pub const INITIAL_SPEED: f64 = 10.0; // m/s
    pub const INITIAL_ANGLE: f64 = 45.0; // degrees
    pub const MIN_ANGLE: f64 = 0.0;
    pub const MAX_ANGLE: f64 = 90.0;
    pub const DRAG: f64 = 0.0; // linear, per second

    // Physics
    pub const DT: f64 = 0.01;
    pub const GRAVITY: f64 = 9.8;
    pub const MAX_FLIGHT_STEPS: u32 = 100_000; // Cap for flights that never come down

    // Target
    pub const TARGET_X_MIN: f64 = 3.0;
    pub const TARGET_X_MAX: f64 = 7.0;
    pub const TARGET_Y_MIN: f64 = 0.0;
    pub const TARGET_Y_MAX: f64 = 2.5;
    pub const TARGET_HEIGHT: f64 = 1.0;
    pub const TARGET_HEIGHT_DECAY: f64 = 0.9; // Multiply height on hit
    pub const INITIAL_TARGET_X: f64 = 5.0;
    pub const INITIAL_TARGET_Y: f64 = 2.0;

    // Hit detection
    pub const HIT_BAND: f64 = 0.3; // x-distance past the target that counts
    pub const HIT_Y_MARGIN: f64 = 0.1;

    // Ammo
    pub const START_AMMO: u8 = 2;

    // Aiming preview length is speed / PREVIEW_SCALE
    pub const PREVIEW_SCALE: f64 = 10.0;
}

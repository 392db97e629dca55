use crate::{Config, TargetWindow, TrajectoryPoint};

/// Check whether a trajectory point passes through the target window.
///
/// The x test only accepts points in a narrow band just past the target's x
/// position. A projectile whose per-step x advance (`vx * dt`) is wider than
/// the band can step over it without registering a hit.
pub fn is_hit(point: TrajectoryPoint, target: &TargetWindow, config: &Config) -> bool {
    let dx = point.x - target.x;
    let half_height = target.height / 2.0;

    dx > 0.0
        && dx < config.hit_band
        && (point.y - target.center_y()).abs() < half_height + config.hit_y_margin
}

use crate::{Config, TargetWindow};
use rand::Rng;

/// Place a new target window, keeping the previous height.
///
/// Shrinking is owned by the scoring rules, not by placement.
pub fn generate<R: Rng + ?Sized>(previous_height: f64, config: &Config, rng: &mut R) -> TargetWindow {
    let x = rng.gen_range(config.target_x_min..config.target_x_max);
    let y_bottom = rng.gen_range(config.target_y_min..config.target_y_max);
    TargetWindow::new(x, y_bottom, previous_height)
}

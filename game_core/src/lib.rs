pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use systems::*;

/// Advance the shot in flight by one trajectory point.
///
/// The new point is hit-tested before anything else happens, so a hit stops
/// the flight before the next point is computed. A point that goes below
/// ground is still recorded, and the landing is resolved in the same step.
#[allow(clippy::too_many_arguments)]
pub fn step(
    flight: &mut Flight,
    trajectory: &mut Trajectory,
    target: &mut TargetWindow,
    score: &mut Score,
    ammo: &mut Ammo,
    events: &mut Events,
    config: &Config,
    rng: &mut GameRng,
) -> RoundOutcome {
    // Clear events at start of step
    events.clear();

    let point = match flight.next() {
        Some(point) => point,
        None => return land(target, score, ammo, events, config, rng),
    };

    // 1. Hit test against the current target
    if is_hit(point, target, config) {
        apply_hit(score, ammo, target, events, config, &mut rng.0);
        return RoundOutcome::Hit;
    }

    // 2. Record the point
    trajectory.push(point);

    // 3. Ground check
    if flight.is_finished() {
        return land(target, score, ammo, events, config, rng);
    }

    RoundOutcome::InFlight(point)
}

fn land(
    target: &mut TargetWindow,
    score: &mut Score,
    ammo: &mut Ammo,
    events: &mut Events,
    config: &Config,
    rng: &mut GameRng,
) -> RoundOutcome {
    if apply_landing(score, ammo, target, events, config, &mut rng.0) {
        RoundOutcome::GameOver
    } else {
        RoundOutcome::Landed
    }
}

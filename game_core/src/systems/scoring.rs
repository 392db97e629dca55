use crate::systems::targeting;
use crate::{Ammo, Config, Events, Score, TargetWindow};
use rand::Rng;

/// Apply a target hit: score, refill, shrink and move the target
pub fn apply_hit<R: Rng + ?Sized>(
    score: &mut Score,
    ammo: &mut Ammo,
    target: &mut TargetWindow,
    events: &mut Events,
    config: &Config,
    rng: &mut R,
) {
    score.increment();
    ammo.refill();

    let height = target.height * config.target_height_decay;
    *target = targeting::generate(height, config, rng);

    events.target_hit = true;
    tracing::debug!(score = score.current, height, "target hit");
}

/// Apply the end of a round that did not hit.
///
/// Returns true when the round ended the game.
pub fn apply_landing<R: Rng + ?Sized>(
    score: &mut Score,
    ammo: &mut Ammo,
    target: &mut TargetWindow,
    events: &mut Events,
    config: &Config,
    rng: &mut R,
) -> bool {
    events.landed = true;
    if !ammo.is_empty() {
        return false;
    }

    let final_score = score.current;
    score.game_over();
    ammo.refill();
    *target = targeting::generate(config.target_height, config, rng);

    events.game_over = true;
    tracing::debug!(final_score, highscore = score.highscore, "game over");
    true
}

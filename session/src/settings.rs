use std::{env, path::PathBuf, str::FromStr, time::Duration};

use game_core::{Config, GameRng};

pub const DEFAULT_HIGHSCORE_PATH: &str = "highscores.csv";
pub const DEFAULT_TICK_MS: u64 = 16;

/// Runtime settings: game tuning overrides plus process-level knobs
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    /// Fixed RNG seed; entropy when unset
    pub seed: Option<u64>,
    pub highscore_path: PathBuf,
    /// Delay between flight steps when animating
    pub tick_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: Config::new(),
            seed: None,
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_PATH),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl Settings {
    /// Read `PROJECTILES_*` overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::new();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Config {
            initial_speed: parse_or("PROJECTILES_SPEED", read, defaults.initial_speed),
            initial_angle: parse_or("PROJECTILES_ANGLE", read, defaults.initial_angle),
            drag: parse_or("PROJECTILES_DRAG", read, defaults.drag),
            dt: parse_or("PROJECTILES_DT", read, defaults.dt),
            gravity: parse_or("PROJECTILES_GRAVITY", read, defaults.gravity),
            start_ammo: parse_or("PROJECTILES_START_AMMO", read, defaults.start_ammo),
            ..defaults.clone()
        };

        if !(config.initial_speed.is_finite() && config.initial_speed > 0.0) {
            tracing::warn!(
                "PROJECTILES_SPEED ({}) must be positive. Falling back to default.",
                config.initial_speed
            );
            config.initial_speed = defaults.initial_speed;
        }
        if !(config.drag.is_finite() && config.drag >= 0.0) {
            tracing::warn!(
                "PROJECTILES_DRAG ({}) must be non-negative. Falling back to default.",
                config.drag
            );
            config.drag = defaults.drag;
        }
        if !(config.dt.is_finite() && config.dt > 0.0) {
            tracing::warn!(
                "PROJECTILES_DT ({}) must be positive. Falling back to default.",
                config.dt
            );
            config.dt = defaults.dt;
        }
        if !(config.gravity.is_finite() && config.gravity > 0.0) {
            tracing::warn!(
                "PROJECTILES_GRAVITY ({}) must be positive. Falling back to default.",
                config.gravity
            );
            config.gravity = defaults.gravity;
        }
        if config.start_ammo == 0 {
            tracing::warn!("PROJECTILES_START_AMMO must be at least 1. Falling back to default.");
            config.start_ammo = defaults.start_ammo;
        }
        config.initial_angle = if config.initial_angle.is_finite() {
            config.clamp_angle(config.initial_angle)
        } else {
            defaults.initial_angle
        };

        let mut tick_ms = parse_or("PROJECTILES_TICK_MS", read, DEFAULT_TICK_MS);
        if tick_ms == 0 {
            tracing::warn!("PROJECTILES_TICK_MS must be at least 1. Falling back to default.");
            tick_ms = DEFAULT_TICK_MS;
        }

        Self {
            config,
            seed: read("PROJECTILES_SEED").and_then(|v| parse_logged("PROJECTILES_SEED", &v)),
            highscore_path: read("PROJECTILES_HIGHSCORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HIGHSCORE_PATH)),
            tick_interval: Duration::from_millis(tick_ms),
        }
    }

    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, read: impl Fn(&str) -> Option<String>, default: T) -> T {
    read(key)
        .and_then(|value| parse_logged(key, &value))
        .unwrap_or(default)
}

fn parse_logged<T: FromStr>(key: &str, value: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!("{key}={value:?} is not valid. Falling back to default.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_overrides() {
        let settings = settings(&[]);
        assert_eq!(settings.config.initial_speed, 10.0);
        assert_eq!(settings.config.initial_angle, 45.0);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.highscore_path, PathBuf::from("highscores.csv"));
        assert_eq!(settings.tick_interval, Duration::from_millis(16));
    }

    #[test]
    fn test_overrides_are_applied() {
        let settings = settings(&[
            ("PROJECTILES_SPEED", "12.5"),
            ("PROJECTILES_DRAG", "0.2"),
            ("PROJECTILES_START_AMMO", "3"),
            ("PROJECTILES_SEED", "42"),
            ("PROJECTILES_HIGHSCORE_PATH", "/tmp/scores.csv"),
            ("PROJECTILES_TICK_MS", "5"),
        ]);
        assert_eq!(settings.config.initial_speed, 12.5);
        assert_eq!(settings.config.drag, 0.2);
        assert_eq!(settings.config.start_ammo, 3);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.highscore_path, PathBuf::from("/tmp/scores.csv"));
        assert_eq!(settings.tick_interval, Duration::from_millis(5));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let settings = settings(&[
            ("PROJECTILES_SPEED", "-1"),
            ("PROJECTILES_DRAG", "lots"),
            ("PROJECTILES_DT", "0"),
            ("PROJECTILES_START_AMMO", "0"),
            ("PROJECTILES_SEED", "abc"),
            ("PROJECTILES_TICK_MS", "0"),
        ]);
        assert_eq!(settings.config.initial_speed, 10.0);
        assert_eq!(settings.config.drag, 0.0);
        assert_eq!(settings.config.dt, 0.01);
        assert_eq!(settings.config.start_ammo, 2);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.tick_interval, Duration::from_millis(DEFAULT_TICK_MS));
    }

    #[test]
    fn test_gravity_must_pull_down() {
        for value in ["0", "-9.8", "inf"] {
            let settings = settings(&[("PROJECTILES_GRAVITY", value)]);
            assert_eq!(settings.config.gravity, 9.8, "GRAVITY={value}");
        }
        assert_eq!(settings(&[("PROJECTILES_GRAVITY", "1.6")]).config.gravity, 1.6);
    }

    #[test]
    fn test_angle_override_is_clamped() {
        assert_eq!(settings(&[("PROJECTILES_ANGLE", "135")]).config.initial_angle, 90.0);
        assert_eq!(settings(&[("PROJECTILES_ANGLE", "NaN")]).config.initial_angle, 45.0);
    }
}

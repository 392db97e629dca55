//! Rendering/UI boundary for Projectiles
//!
//! Commands flow in from the UI, updates flow out to the renderer.
//! Uses postcard for compact binary serialization.

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

// ============================================================================
// Commands (UI to Session)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Launch a shot with the current settings
    Fire,

    /// Aim, in degrees. Clamped to 0..=90 by the session.
    SetAngle { degrees: f64 },

    /// Launch speed in m/s
    SetSpeed { mps: f64 },

    /// Record the session highscore under this name
    SubmitHighscore { name: String },

    /// Reload the highscore table
    RefreshHighscores,
}

// ============================================================================
// Updates (Session to Renderer)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// Short-lived user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

/// Target window as drawn: a vertical segment at `x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub x: f64,
    pub y_bottom: f64,
    pub y_top: f64,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub trajectory: Vec<(f64, f64)>,
    pub target: TargetView,
    pub ammo_text: String,
    pub score_text: String,
    pub highscore_text: String,
    pub angle: f64,
    pub speed: f64,
    pub firing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreRow {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Update {
    /// Full redraw
    Frame(ViewModel),

    /// Toast message
    Notify(Notification),

    /// Highscore table, best first
    Highscores(Vec<HighscoreRow>),
}

// ============================================================================
// Display Text
// ============================================================================

pub const AMMO_ICON: &str = "🥏";

pub fn ammo_text(rounds: u8) -> String {
    format!("Ammo: {}", AMMO_ICON.repeat(rounds as usize))
}

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

pub fn highscore_text(highscore: u32) -> String {
    format!("Highscore: {highscore}")
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Command {
    /// Serialize command to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize command from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl Update {
    /// Serialize update to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize update from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serialization() {
        let msg = Command::SubmitHighscore {
            name: "Anonymous".to_string(),
        };
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        let decoded = Command::from_bytes(&bytes).expect("Deserialization should succeed");
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_frame_serialization() {
        let msg = Update::Frame(ViewModel {
            trajectory: vec![(0.0, 0.0), (0.707, 0.707)],
            target: TargetView {
                x: 5.0,
                y_bottom: 2.0,
                y_top: 3.0,
            },
            ammo_text: ammo_text(2),
            score_text: score_text(0),
            highscore_text: highscore_text(0),
            angle: 45.0,
            speed: 10.0,
            firing: false,
        });
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        match Update::from_bytes(&bytes).expect("Deserialization should succeed") {
            Update::Frame(view) => {
                assert_eq!(view.trajectory.len(), 2);
                assert_eq!(view.target.y_top, 3.0);
                assert_eq!(view.ammo_text, "Ammo: 🥏🥏");
            }
            _ => panic!("Message type mismatch"),
        }
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let bytes = Update::Notify(Notification::error("Game Over!"))
            .to_bytes()
            .unwrap();
        assert!(Update::from_bytes(&bytes[..bytes.len() - 1]).is_err());
    }

    #[test]
    fn test_display_text() {
        assert_eq!(ammo_text(0), "Ammo: ");
        assert_eq!(ammo_text(1), "Ammo: 🥏");
        assert_eq!(score_text(3), "Score: 3");
        assert_eq!(highscore_text(12), "Highscore: 12");
    }

    #[test]
    fn test_notification_severity() {
        let hit = Notification::success("Target hit!");
        assert_eq!(hit.severity.as_str(), "success");
        assert_eq!(Notification::error("Game Over!").severity, Severity::Error);
    }
}

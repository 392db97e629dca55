//! Game session: wraps the deterministic core with highscore persistence,
//! input validation and the rendering boundary.

pub mod error;
pub mod session;
pub mod settings;
pub mod store;

pub use error::*;
pub use session::*;
pub use settings::*;
pub use store::{CsvHighscoreStore, HighscoreRecord, HighscoreStore, MemoryHighscoreStore};

#[cfg(test)]
mod tests;

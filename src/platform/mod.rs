//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (monotonic milliseconds)
//! - Presenting the scoreboard after each step
//! - Driving the tick loop (requestAnimationFrame on web, sleep loop on native)

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

use serde::{Deserialize, Serialize};

use crate::consts::HISTORY_UNAVAILABLE;
use crate::sim::GameState;

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Receives the scoreboard after every executed step
pub trait Presenter {
    fn present(&mut self, board: &Scoreboard);
}

/// Snapshot of everything the presentation layer shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player_pattern: String,
    pub player_score: u32,
    pub computer_pattern: String,
    pub computer_score: u32,
    /// Live history, `None` when the speed tier batches tosses
    pub history: Option<String>,
}

impl Scoreboard {
    /// Build from the current game state (`None` before the first start)
    pub fn from_state(state: &GameState) -> Option<Self> {
        let (player, computer) = (state.player?, state.computer?);
        Some(Self {
            player_pattern: player.pattern.to_string(),
            player_score: player.score,
            computer_pattern: computer.pattern.to_string(),
            computer_score: computer.score,
            history: state.history_text(),
        })
    }

    /// Text for the history window
    pub fn history_display(&self) -> &str {
        self.history.as_deref().unwrap_or(HISTORY_UNAVAILABLE)
    }
}

//! Game state and core simulation types
//!
//! State is owned by whoever drives the loop and passed explicitly to every
//! operation in `tick`.

use serde::{Deserialize, Serialize};

use super::coin::{Coin, Pattern, format_history};
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No race in progress (initial and after stop)
    #[default]
    Idle,
    /// Tosses are being drawn on each due tick
    Running,
}

/// Throughput mode: step interval and tosses per step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedTier {
    #[default]
    Slow,
    Fast,
}

impl SpeedTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedTier::Slow => "Slow",
            SpeedTier::Fast => "Fast",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" => Some(SpeedTier::Slow),
            "fast" => Some(SpeedTier::Fast),
            _ => None,
        }
    }

    /// Minimum elapsed milliseconds between steps
    pub fn update_interval_ms(&self) -> f64 {
        match self {
            SpeedTier::Slow => SLOW_UPDATE_INTERVAL_MS,
            SpeedTier::Fast => FAST_UPDATE_INTERVAL_MS,
        }
    }

    /// Tosses drawn per step
    pub fn tosses_per_step(&self) -> u32 {
        match self {
            SpeedTier::Slow => SLOW_TOSS_COUNT,
            SpeedTier::Fast => FAST_TOSS_COUNT,
        }
    }

    /// Whether individual tosses are surfaced to the presenter
    pub fn shows_history(&self) -> bool {
        matches!(self, SpeedTier::Slow)
    }
}

/// One side of the race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

/// A pattern and the number of races it has won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contestant {
    pub pattern: Pattern,
    pub score: u32,
}

impl Contestant {
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern, score: 0 }
    }
}

/// Things that happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A pattern completed the race window
    Point { side: Side, pattern: Pattern },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub speed: SpeedTier,
    /// `None` until the first start
    pub player: Option<Contestant>,
    pub computer: Option<Contestant>,
    /// Tosses since the last point or start; never holds a completed pattern
    pub history: Vec<Coin>,
    /// Clock reading (ms) of the last executed step
    pub last_update: f64,
    /// Tosses drawn since start
    pub tosses: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an idle game
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            speed: SpeedTier::default(),
            player: None,
            computer: None,
            history: Vec::new(),
            last_update: 0.0,
            tosses: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Switch speed tier; takes effect on the next tick
    pub fn set_speed(&mut self, speed: SpeedTier) {
        if self.speed != speed {
            log::debug!("Speed changed to {}", speed.as_str());
            self.speed = speed;
        }
    }

    /// Races decided so far
    pub fn races(&self) -> u32 {
        self.player.map_or(0, |c| c.score) + self.computer.map_or(0, |c| c.score)
    }

    /// History as H/T text, or `None` when the speed tier hides it
    pub fn history_text(&self) -> Option<String> {
        self.speed
            .shows_history()
            .then(|| format_history(&self.history))
    }
}

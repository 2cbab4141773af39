//! Penney's Game - a chosen coin pattern races its derived counter-pattern
//!
//! Core modules:
//! - `sim`: Deterministic simulation (patterns, tosses, scoring loop)
//! - `platform`: Clock, presentation sink and native loop driver
//! - `settings`: Persisted user preferences

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Coin, GameState, Pattern, SpeedTier, derive_opposing_pattern};

/// Game configuration constants
pub mod consts {
    /// Number of coins in every pattern
    pub const PATTERN_LEN: usize = 3;

    /// Slow tier: milliseconds between steps
    pub const SLOW_UPDATE_INTERVAL_MS: f64 = 500.0;
    /// Fast tier: milliseconds between steps
    pub const FAST_UPDATE_INTERVAL_MS: f64 = 100.0;

    /// Slow tier: tosses per step
    pub const SLOW_TOSS_COUNT: u32 = 1;
    /// Fast tier: tosses per step (batched so progress scales with speed)
    pub const FAST_TOSS_COUNT: u32 = 100;

    /// Default native frame cadence (~60 Hz, faster than the fastest tier)
    pub const DEFAULT_FRAME_MS: u64 = 16;

    /// Shown instead of the live history when tosses are batched
    pub const HISTORY_UNAVAILABLE: &str = "History not available.";
}

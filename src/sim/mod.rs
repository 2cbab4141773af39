//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time is passed in, never read
//! - Tosses come from an injected `CoinSource`
//! - No rendering or platform dependencies

pub mod coin;
pub mod source;
pub mod state;
pub mod tick;

pub use coin::{Coin, ParsePatternError, Pattern, derive_opposing_pattern, format_history};
pub use source::{CoinSource, RngCoins, SeededCoins};
pub use state::{Contestant, GameEvent, GamePhase, GameState, Side, SpeedTier};
pub use tick::{TickOutcome, start, step, stop, tick};

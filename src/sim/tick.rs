//! Speed-gated simulation tick
//!
//! Core game loop: draw tosses, detect pattern completion, score, reset.
//! Callers re-arm their scheduler after every tick until it reports `Idle`.

use super::coin::{Pattern, derive_opposing_pattern};
use super::source::CoinSource;
use super::state::{Contestant, GameEvent, GamePhase, GameState, Side, SpeedTier};

/// Result of a single scheduler tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game is not running; stop re-arming
    Idle,
    /// Not due yet, nothing changed
    Skipped,
    /// A step ran; points scored in toss order
    Stepped(Vec<GameEvent>),
}

/// Begin a race for `pattern`. No-op (returns false) while already running.
pub fn start(state: &mut GameState, pattern: Pattern, speed: SpeedTier, now_ms: f64) -> bool {
    if state.is_running() {
        log::debug!("Start ignored, game already running");
        return false;
    }

    let computer = derive_opposing_pattern(pattern);
    state.player = Some(Contestant::new(pattern));
    state.computer = Some(Contestant::new(computer));
    state.history.clear();
    state.tosses = 0;
    state.speed = speed;
    state.last_update = now_ms;
    state.phase = GamePhase::Running;

    log::info!(
        "Game started: player {} vs computer {} ({})",
        pattern,
        computer,
        speed.as_str()
    );
    true
}

/// Stop the race. Scores and history are kept until the next start.
pub fn stop(state: &mut GameState) -> bool {
    if !state.is_running() {
        return false;
    }
    state.phase = GamePhase::Idle;
    log::info!(
        "Game stopped after {} tosses, {} races",
        state.tosses,
        state.races()
    );
    true
}

/// Run one step: draw the active tier's batch of tosses.
///
/// Does nothing while idle. After each toss the trailing window is checked
/// against the player first, then the computer; a match scores one point and
/// empties the history.
pub fn step(state: &mut GameState, source: &mut impl CoinSource) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }
    let (Some(player), Some(computer)) = (state.player.as_mut(), state.computer.as_mut()) else {
        return events;
    };

    for _ in 0..state.speed.tosses_per_step() {
        state.history.push(source.toss());
        state.tosses += 1;

        let side = if player.pattern.is_suffix_of(&state.history) {
            player.score += 1;
            Side::Player
        } else if computer.pattern.is_suffix_of(&state.history) {
            computer.score += 1;
            Side::Computer
        } else {
            continue;
        };

        let pattern = match side {
            Side::Player => player.pattern,
            Side::Computer => computer.pattern,
        };
        log::debug!(
            "{:?} scores with {} (player {} - computer {})",
            side,
            pattern,
            player.score,
            computer.score
        );
        state.history.clear();
        events.push(GameEvent::Point { side, pattern });
    }

    events
}

/// Advance the game for a scheduler callback at `now_ms`.
///
/// A step runs only once the tier's interval has elapsed since the last one;
/// earlier ticks are skipped, never queued.
pub fn tick(state: &mut GameState, source: &mut impl CoinSource, now_ms: f64) -> TickOutcome {
    if !state.is_running() {
        return TickOutcome::Idle;
    }
    if state.last_update + state.speed.update_interval_ms() > now_ms {
        log::trace!("Tick at {now_ms:.1}ms not due");
        return TickOutcome::Skipped;
    }
    state.last_update = now_ms;
    TickOutcome::Stepped(step(state, source))
}

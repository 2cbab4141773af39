//! Native loop driver
//!
//! Single-threaded sleep-until-due cycle standing in for the browser's
//! requestAnimationFrame: wake every frame, tick, present on executed steps.

use std::time::{Duration, Instant};

use super::{Clock, Presenter, Scoreboard};
use crate::sim::{CoinSource, GameState, SpeedTier, TickOutcome, step, stop, tick};

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Drive a running game until it goes idle or `keep_going` returns false.
///
/// Returns the number of executed steps.
pub fn run_native<S, C, P, F>(
    state: &mut GameState,
    source: &mut S,
    clock: &C,
    presenter: &mut P,
    frame: Duration,
    mut keep_going: F,
) -> u64
where
    S: CoinSource,
    C: Clock,
    P: Presenter,
    F: FnMut(&GameState) -> bool,
{
    let mut steps = 0;
    loop {
        if !frame.is_zero() {
            std::thread::sleep(frame);
        }
        if !keep_going(state) {
            // Observed on this tick, which then reports Idle
            stop(state);
        }
        match tick(state, source, clock.now_ms()) {
            TickOutcome::Idle => break,
            TickOutcome::Skipped => {}
            TickOutcome::Stepped(_) => {
                steps += 1;
                if let Some(board) = Scoreboard::from_state(state) {
                    presenter.present(&board);
                }
            }
        }
    }
    log::debug!("Native loop exited after {steps} steps");
    steps
}

/// Run a started game without a clock until `races` races are decided.
///
/// Tosses are drawn one per step so the race count is exact. The game is
/// stopped on return.
pub fn run_races(state: &mut GameState, source: &mut impl CoinSource, races: u32) {
    state.set_speed(SpeedTier::Slow);
    while state.is_running() && state.races() < races {
        step(state, source);
    }
    stop(state);
}

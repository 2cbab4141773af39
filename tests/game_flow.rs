use penneys_game::platform::Scoreboard;
use penneys_game::sim::{
    Coin, CoinSource, GameEvent, GameState, Pattern, SeededCoins, Side, SpeedTier, TickOutcome,
    derive_opposing_pattern, start, step, stop, tick,
};
use proptest::prelude::*;

use Coin::{Heads as H, Tails as T};

/// Feeds a fixed sequence of tosses
struct Script(std::vec::IntoIter<Coin>);

impl Script {
    fn new(coins: &[Coin]) -> Self {
        Self(coins.to_vec().into_iter())
    }
}

impl CoinSource for Script {
    fn toss(&mut self) -> Coin {
        self.0.next().expect("script exhausted")
    }
}

#[test]
fn test_thh_is_answered_with_tth() {
    let computer = derive_opposing_pattern(Pattern::new(T, H, H));
    assert_eq!(computer, Pattern::new(T, T, H));
    assert_eq!(computer.to_string(), "TTH");
}

#[test]
fn test_second_start_keeps_first_game() {
    let mut state = GameState::new();
    assert!(start(&mut state, Pattern::new(H, H, H), SpeedTier::Slow, 0.0));
    assert!(!start(&mut state, Pattern::new(T, T, T), SpeedTier::Slow, 0.0));
    assert_eq!(state.player.unwrap().pattern, Pattern::new(H, H, H));
}

#[test]
fn test_trailing_window_scores_player() {
    let mut state = GameState::new();
    start(&mut state, Pattern::new(T, T, H), SpeedTier::Slow, 0.0);

    // HTT is the computer's pattern, so build the history by hand
    state.history = vec![H, T, T];
    let events = step(&mut state, &mut Script::new(&[H]));

    assert_eq!(
        events,
        vec![GameEvent::Point {
            side: Side::Player,
            pattern: Pattern::new(T, T, H),
        }]
    );
    assert_eq!(state.player.unwrap().score, 1);
    assert_eq!(state.computer.unwrap().score, 0);
    assert_eq!(state.history.len(), 0);
}

#[test]
fn test_full_session() {
    let mut state = GameState::new();
    let mut source = Script::new(&[H, T, H, H, T, H, T, T]);
    start(&mut state, Pattern::new(H, T, T), SpeedTier::Slow, 0.0);
    // Computer answers HTT with HHT
    assert_eq!(state.computer.unwrap().pattern, Pattern::new(H, H, T));

    let mut now = 0.0;
    let mut points = Vec::new();
    while points.len() < 2 {
        now += 16.0;
        if let TickOutcome::Stepped(events) = tick(&mut state, &mut source, now) {
            points.extend(events);
        }
    }

    // H T H H T -> HHT completes for the computer; then H T T for the player
    assert_eq!(
        points,
        vec![
            GameEvent::Point {
                side: Side::Computer,
                pattern: Pattern::new(H, H, T)
            },
            GameEvent::Point {
                side: Side::Player,
                pattern: Pattern::new(H, T, T)
            },
        ]
    );
    assert!(state.history.is_empty());

    assert!(stop(&mut state));
    let board = Scoreboard::from_state(&state).unwrap();
    assert_eq!(board.player_pattern, "HTT");
    assert_eq!(board.computer_pattern, "HHT");
    assert_eq!((board.player_score, board.computer_score), (1, 1));
}

#[test]
fn test_derived_pattern_wins_more_often() {
    // THH vs TTH: the counter-pattern wins about two thirds of races
    let mut state = GameState::new();
    let mut source = SeededCoins::new(2024);
    start(&mut state, Pattern::new(T, H, H), SpeedTier::Fast, 0.0);
    while state.races() < 3000 {
        step(&mut state, &mut source);
    }
    let computer = state.computer.unwrap().score as f64;
    let share = computer / state.races() as f64;
    assert!(share > 0.6, "computer share {share}");
}

proptest! {
    #[test]
    fn prop_counter_pattern_never_collides(idx in 0usize..8) {
        let p = Pattern::ALL[idx];
        prop_assert_ne!(derive_opposing_pattern(p), p);
    }

    #[test]
    fn prop_idle_step_changes_nothing(seed in any::<u64>(), idx in 0usize..8) {
        let mut state = GameState::new();
        let mut source = SeededCoins::new(seed);
        start(&mut state, Pattern::ALL[idx], SpeedTier::Fast, 0.0);
        step(&mut state, &mut source);
        stop(&mut state);

        let history = state.history.clone();
        let (player, computer) = (state.player, state.computer);
        prop_assert!(step(&mut state, &mut source).is_empty());
        prop_assert_eq!(tick(&mut state, &mut source, 1e9), TickOutcome::Idle);
        prop_assert_eq!(&state.history, &history);
        prop_assert_eq!(state.player, player);
        prop_assert_eq!(state.computer, computer);
        prop_assert!(!state.is_running());
    }
}

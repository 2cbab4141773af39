//! Coins, three-toss patterns, and the counter-pattern strategy
//!
//! Patterns render as H/T strings ("THH") everywhere they leave the core.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::PATTERN_LEN;

/// A single coin toss outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    Heads,
    Tails,
}

impl Coin {
    /// The opposite face
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Coin::Heads => Coin::Tails,
            Coin::Tails => Coin::Heads,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Coin::Heads => 'H',
            Coin::Tails => 'T',
        }
    }

    /// Parse 'H'/'T' (either case)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' => Some(Coin::Heads),
            'T' => Some(Coin::Tails),
            _ => None,
        }
    }
}

/// Error returned when a string is not exactly three H/T characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePatternError {
    input: String,
}

impl fmt::Display for ParsePatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid pattern {:?}: expected {} of H/T",
            self.input, PATTERN_LEN
        )
    }
}

impl std::error::Error for ParsePatternError {}

/// An ordered sequence of exactly three coins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern(pub [Coin; PATTERN_LEN]);

impl Pattern {
    /// Every pattern, HHH through TTT
    pub const ALL: [Pattern; 8] = {
        use Coin::{Heads as H, Tails as T};
        [
            Pattern([H, H, H]),
            Pattern([H, H, T]),
            Pattern([H, T, H]),
            Pattern([H, T, T]),
            Pattern([T, H, H]),
            Pattern([T, H, T]),
            Pattern([T, T, H]),
            Pattern([T, T, T]),
        ]
    };

    pub const fn new(first: Coin, second: Coin, third: Coin) -> Self {
        Self([first, second, third])
    }

    pub fn coins(&self) -> &[Coin; PATTERN_LEN] {
        &self.0
    }

    /// Parse "THH" style strings (case-insensitive, outer whitespace ignored)
    pub fn parse(s: &str) -> Option<Self> {
        let mut coins = [Coin::Heads; PATTERN_LEN];
        let mut chars = s.trim().chars();
        for slot in coins.iter_mut() {
            *slot = Coin::from_char(chars.next()?)?;
        }
        if chars.next().is_some() {
            return None;
        }
        Some(Self(coins))
    }

    /// True if the trailing window of `history` equals this pattern
    pub fn is_suffix_of(&self, history: &[Coin]) -> bool {
        history.len() >= PATTERN_LEN && history[history.len() - PATTERN_LEN..] == self.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for coin in self.0 {
            write!(f, "{}", coin.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParsePatternError {
            input: s.to_string(),
        })
    }
}

impl TryFrom<String> for Pattern {
    type Error = ParsePatternError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.to_string()
    }
}

/// Counter-pattern favored against `player` in Penney's game.
///
/// Invert the player's second coin, then follow with the player's first two
/// coins. The result never equals `player`.
pub fn derive_opposing_pattern(player: Pattern) -> Pattern {
    let [first, second, _] = player.0;
    Pattern([second.invert(), first, second])
}

/// Render a toss history as an H/T string
pub fn format_history(history: &[Coin]) -> String {
    history.iter().map(|c| c.as_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use Coin::{Heads as H, Tails as T};

    #[test]
    fn test_derive_thh() {
        let player = Pattern::new(T, H, H);
        assert_eq!(derive_opposing_pattern(player), Pattern::new(T, T, H));
    }

    #[test]
    fn test_derive_classic_table() {
        // Standard Penney responses for every choice
        let table = [
            ("HHH", "THH"),
            ("HHT", "THH"),
            ("HTH", "HHT"),
            ("HTT", "HHT"),
            ("THH", "TTH"),
            ("THT", "TTH"),
            ("TTH", "HTT"),
            ("TTT", "HTT"),
        ];
        for (player, expected) in table {
            let player: Pattern = player.parse().unwrap();
            assert_eq!(derive_opposing_pattern(player).to_string(), expected);
        }
    }

    #[test]
    fn test_derived_never_equals_player() {
        for p in Pattern::ALL {
            assert_ne!(derive_opposing_pattern(p), p, "collision for {p}");
        }
    }

    #[test]
    fn test_derive_is_deterministic() {
        for p in Pattern::ALL {
            assert_eq!(derive_opposing_pattern(p), derive_opposing_pattern(p));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(Pattern::parse("thh"), Some(Pattern::new(T, H, H)));
        assert_eq!(Pattern::parse("  HTH\n"), Some(Pattern::new(H, T, H)));
        assert_eq!(Pattern::parse("HT"), None);
        assert_eq!(Pattern::parse("HTHH"), None);
        assert_eq!(Pattern::parse("HXH"), None);
        assert!("".parse::<Pattern>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Pattern::new(T, T, H)).unwrap();
        assert_eq!(json, "\"TTH\"");
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Pattern::new(T, T, H));
        assert!(serde_json::from_str::<Pattern>("\"TT\"").is_err());
    }

    #[test]
    fn test_suffix_match() {
        let p = Pattern::new(T, T, H);
        assert!(p.is_suffix_of(&[H, T, T, H]));
        assert!(!p.is_suffix_of(&[T, H]));
        assert!(!p.is_suffix_of(&[T, T, H, H]));
    }

    #[test]
    fn test_format_history() {
        assert_eq!(format_history(&[H, T, T]), "HTT");
        assert_eq!(format_history(&[]), "");
    }

    proptest! {
        #[test]
        fn prop_display_parses_back(idx in 0usize..8) {
            let p = Pattern::ALL[idx];
            prop_assert_eq!(Pattern::parse(&p.to_string()), Some(p));
        }

        #[test]
        fn prop_derived_shifts_player_prefix(idx in 0usize..8) {
            let p = Pattern::ALL[idx];
            let c = derive_opposing_pattern(p);
            prop_assert_eq!(c.0[0], p.0[1].invert());
            prop_assert_eq!(&c.0[1..], &p.0[..2]);
        }
    }
}

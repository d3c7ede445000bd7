//! Text menu shown before and between rounds.

use std::str::FromStr;

use crate::error::GameError;

pub const WELCOME: [&str; 4] = [
    "Welcome to Blackjack!",
    "Try to get as close to 21 as possible without going over.",
    "Face cards are worth 10. Aces are worth 1 or 11.",
    "Good luck!",
];

pub const RULES: [&str; 5] = [
    "1. The goal is to get as close to 21 as possible without going over.",
    "2. Face cards (Jack, Queen, King) are worth 10. Aces are worth 1 or 11.",
    "3. The dealer must draw until their hand is at least 17.",
    "4. If your hand exceeds 21, you lose (bust).",
    "5. The winner is the one with the highest hand value without exceeding 21.",
];

pub const OPTIONS: [&str; 3] = ["1. Play Blackjack", "2. View Rules", "3. Quit"];

pub const PROMPT: &str = "Select an option (1-3): ";

pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a number from 1 to 3.";

pub const FAREWELL: &str = "Thanks for playing! See you next time.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Rules,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = GameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "1" => Ok(MenuChoice::Play),
            "2" => Ok(MenuChoice::Rules),
            "3" => Ok(MenuChoice::Quit),
            other => Err(GameError::InvalidMenuChoice {
                choice: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_options() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Play));
        assert_eq!(" 2\n".parse::<MenuChoice>(), Ok(MenuChoice::Rules));
        assert_eq!("3".parse::<MenuChoice>(), Ok(MenuChoice::Quit));
    }

    #[test]
    fn anything_else_is_rejected() {
        for input in ["", "4", "play", "1 2", "01"] {
            assert!(matches!(
                input.parse::<MenuChoice>(),
                Err(GameError::InvalidMenuChoice { .. })
            ));
        }
    }
}

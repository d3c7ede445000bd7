use crate::hand::Hand;

/// Dealer draws below this total and stands on it or anything above,
/// soft or hard.
pub const DEALER_STANDS_ON: u32 = 17;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Hit,
    Stand,
}

impl Action {
    pub fn from_code(code: &str) -> Option<Action> {
        match code.trim().to_ascii_uppercase().as_str() {
            "H" | "HIT" => Some(Action::Hit),
            "S" | "STAND" => Some(Action::Stand),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Action::Hit => "H",
            Action::Stand => "S",
        }
    }
}

pub fn dealer_action(hand: &Hand) -> Action {
    if hand.score() < DEALER_STANDS_ON {
        Action::Hit
    } else {
        Action::Stand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Card, Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        ranks
            .iter()
            .map(|&rank| Card::new(rank, Suit::Hearts))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn dealer_hits_sixteen() {
        assert_eq!(dealer_action(&hand(&[Rank::Six, Rank::King])), Action::Hit);
    }

    #[test]
    fn dealer_stands_on_hard_seventeen() {
        assert_eq!(dealer_action(&hand(&[Rank::Seven, Rank::King])), Action::Stand);
    }

    #[test]
    fn dealer_stands_on_soft_seventeen() {
        assert_eq!(dealer_action(&hand(&[Rank::Ace, Rank::Six])), Action::Stand);
    }

    #[test]
    fn action_codes() {
        assert_eq!(Action::from_code("h"), Some(Action::Hit));
        assert_eq!(Action::from_code(" Stand "), Some(Action::Stand));
        assert_eq!(Action::from_code("D"), None);
        assert_eq!(Action::Hit.as_code(), "H");
        assert_eq!(Action::from_code(Action::Stand.as_code()), Some(Action::Stand));
    }
}

use std::fmt;

use crate::deck::Card;

pub const BLACKJACK: u32 = 21;

/// Total of `cards` with as many Aces downgraded from 11 to 1 as needed to
/// stay at or below 21. The flag reports whether an Ace still counts 11.
pub fn hand_value(cards: &[Card]) -> (u32, bool) {
    let mut total = 0;
    let mut aces = 0;

    for card in cards {
        total += card.value();
        if card.is_ace() {
            aces += 1;
        }
    }

    while total > BLACKJACK && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (total, aces > 0)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn score(&self) -> u32 {
        hand_value(&self.cards).0
    }

    pub fn is_soft(&self) -> bool {
        hand_value(&self.cards).1
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Hand { cards }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Participant {
    pub name: String,
    pub hand: Hand,
}

impl Participant {
    pub fn new(name: &str) -> Self {
        Participant {
            name: name.to_string(),
            hand: Hand::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        ranks
            .iter()
            .map(|&rank| Card::new(rank, Suit::Spades))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn ten_and_ace_is_soft_21() {
        let h = hand(&[Rank::Ten, Rank::Ace]);
        assert_eq!(h.score(), 21);
        assert!(h.is_soft());
    }

    #[test]
    fn ace_drops_to_one_when_eleven_would_bust() {
        let h = hand(&[Rank::Ten, Rank::Ace, Rank::Five]);
        assert_eq!(h.score(), 16);
        assert!(!h.is_soft());
    }

    #[test]
    fn only_one_of_two_aces_is_downgraded() {
        let h = hand(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(h.score(), 21);
        assert!(h.is_soft());
    }

    #[test]
    fn face_cards_count_ten() {
        assert_eq!(hand(&[Rank::Jack, Rank::Queen]).score(), 20);
        assert_eq!(hand(&[Rank::King, Rank::Seven, Rank::Five]).score(), 22);
        assert!(hand(&[Rank::King, Rank::Seven, Rank::Five]).is_bust());
    }

    #[test]
    fn all_aces_downgraded_can_still_bust() {
        let h = hand(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen]);
        assert_eq!(h.score(), 22);
        assert!(h.is_bust());
    }

    #[test]
    fn display_joins_cards() {
        let mut h = Hand::new();
        h.add_card(Card::new(Rank::Ten, Suit::Hearts));
        h.add_card(Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(h.to_string(), "10 of Hearts, Ace of Clubs");
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.score(), 0);
    }
}

use serde::Serialize;

use crate::{
    deck::{Card, CardColor},
    game::{Phase, RoundOutcome, RoundState},
    hand::Participant,
};

pub const CARD_BACK_IMAGE: &str = "card_back.png";

/// Artwork file for a face-up card, e.g. `queen_spades_white.png`.
pub fn card_image_name(card: &Card) -> String {
    format!(
        "{}_{}_white.png",
        card.rank.name().to_lowercase(),
        card.suit.name().to_lowercase()
    )
    .replace(' ', "_")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub label: String,
    pub image: String,
    pub color: Option<CardColor>,
    pub hidden: bool,
}

impl CardView {
    fn face_up(card: &Card) -> Self {
        CardView {
            label: card.to_string(),
            image: card_image_name(card),
            color: Some(card.color()),
            hidden: false,
        }
    }

    fn face_down() -> Self {
        CardView {
            label: "unknown card".to_string(),
            image: CARD_BACK_IMAGE.to_string(),
            color: None,
            hidden: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandView {
    pub name: String,
    pub cards: Vec<CardView>,
    /// Hidden while the dealer's hole card is face down.
    pub score: Option<u32>,
    pub summary: String,
}

impl HandView {
    pub fn revealed(participant: &Participant) -> Self {
        HandView {
            name: participant.name.clone(),
            cards: participant.hand.cards().iter().map(CardView::face_up).collect(),
            score: Some(participant.hand.score()),
            summary: format!("{}'s Hand: {}", participant.name, participant.hand),
        }
    }

    /// Only the first card is shown; every later card stays face down.
    pub fn concealed(participant: &Participant) -> Self {
        let cards = participant.hand.cards();
        let summary = match cards.first() {
            Some(up) => format!("{}'s Hand: {} and an unknown card", participant.name, up),
            None => format!("{}'s Hand: ", participant.name),
        };
        HandView {
            name: participant.name.clone(),
            cards: cards
                .iter()
                .enumerate()
                .map(|(i, card)| {
                    if i == 0 {
                        CardView::face_up(card)
                    } else {
                        CardView::face_down()
                    }
                })
                .collect(),
            score: None,
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub phase: Phase,
    pub player: HandView,
    pub dealer: HandView,
    pub outcome: Option<RoundOutcome>,
    pub message: Option<String>,
    pub player_won: Option<bool>,
}

impl TableView {
    pub fn from_round(round: &RoundState) -> Self {
        let dealer = if round.reveal_dealer() {
            HandView::revealed(&round.dealer)
        } else {
            HandView::concealed(&round.dealer)
        };
        let outcome = round.outcome();
        TableView {
            phase: round.phase(),
            player: HandView::revealed(&round.player),
            dealer,
            outcome,
            message: outcome.map(|o| o.message().to_string()),
            player_won: outcome.map(|o| o.player_won()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Deck, Rank, Suit};
    use crate::policy::Action;

    fn dealt_round() -> RoundState {
        let mut round = RoundState::new();
        round
            .start_round(Deck::stacked(vec![
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Queen, Suit::Spades),
                Card::new(Rank::Nine, Suit::Clubs),
                Card::new(Rank::Seven, Suit::Diamonds),
            ]))
            .unwrap();
        round
    }

    #[test]
    fn image_names_are_lowercase() {
        assert_eq!(
            card_image_name(&Card::new(Rank::Queen, Suit::Spades)),
            "queen_spades_white.png"
        );
        assert_eq!(
            card_image_name(&Card::new(Rank::Ten, Suit::Hearts)),
            "10_hearts_white.png"
        );
    }

    #[test]
    fn hole_card_is_hidden_until_resolved() {
        let mut round = dealt_round();
        let view = TableView::from_round(&round);
        assert_eq!(view.dealer.cards[0].image, "queen_spades_white.png");
        assert!(view.dealer.cards[1].hidden);
        assert_eq!(view.dealer.cards[1].image, CARD_BACK_IMAGE);
        assert_eq!(view.dealer.score, None);
        assert_eq!(
            view.dealer.summary,
            "Dealer's Hand: Queen of Spades and an unknown card"
        );
        assert_eq!(view.player.score, Some(19));
        assert_eq!(view.message, None);

        round.apply(Action::Stand).unwrap();
        let view = TableView::from_round(&round);
        assert!(view.dealer.cards.iter().all(|c| !c.hidden));
        assert_eq!(view.dealer.score, Some(17));
        assert_eq!(view.outcome, Some(RoundOutcome::PlayerWins));
        assert_eq!(view.message.as_deref(), Some("You win!"));
        assert_eq!(view.player_won, Some(true));
    }

    #[test]
    fn serializes_phase_with_outcome() {
        let mut round = dealt_round();
        round.apply(Action::Stand).unwrap();
        let json = serde_json::to_value(TableView::from_round(&round)).unwrap();
        assert_eq!(json["phase"]["state"], "resolved");
        assert_eq!(json["phase"]["outcome"], "player_wins");
        assert_eq!(json["dealer"]["cards"][1]["label"], "7 of Diamonds");
    }
}

use serde::Serialize;

use crate::{
    deck::Deck,
    error::Result,
    hand::{Hand, Participant, BLACKJACK},
    policy::{dealer_action, Action},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    PlayerBust,
    DealerBust,
    DealerWins,
    PlayerWins,
}

impl RoundOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            RoundOutcome::PlayerBust => "Bust! You went over 21. You lose.",
            RoundOutcome::DealerBust => "Dealer busts! You win!",
            RoundOutcome::DealerWins => "Dealer wins!",
            RoundOutcome::PlayerWins => "You win!",
        }
    }

    pub fn player_won(&self) -> bool {
        matches!(self, RoundOutcome::DealerBust | RoundOutcome::PlayerWins)
    }
}

/// Outcome once both sides have stood. Ties go to the dealer.
pub fn compare_scores(player_score: u32, dealer_score: u32) -> RoundOutcome {
    if dealer_score > BLACKJACK {
        RoundOutcome::DealerBust
    } else if dealer_score >= player_score {
        RoundOutcome::DealerWins
    } else {
        RoundOutcome::PlayerWins
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "outcome", rename_all = "snake_case")]
pub enum Phase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Resolved(RoundOutcome),
}

pub struct RoundState {
    pub deck: Deck,
    pub player: Participant,
    pub dealer: Participant,
    phase: Phase,
}

impl Default for RoundState {
    fn default() -> Self {
        RoundState::new()
    }
}

impl RoundState {
    pub fn new() -> Self {
        RoundState {
            deck: Deck::stacked(Vec::new()),
            player: Participant::new("Player"),
            dealer: Participant::new("Dealer"),
            phase: Phase::Dealing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            Phase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn reveal_dealer(&self) -> bool {
        self.is_resolved()
    }

    /// Takes `deck` for the new round and deals player, dealer, player,
    /// dealer into fresh hands. A failed deal leaves the previous round as is.
    pub fn start_round(&mut self, deck: Deck) -> Result<()> {
        let mut deck = deck;
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..2 {
            player.add_card(deck.deal()?);
            dealer.add_card(deck.deal()?);
        }

        self.deck = deck;
        self.player.hand = player;
        self.dealer.hand = dealer;
        tracing::debug!(
            player = %self.player.hand,
            dealer_up = %self.dealer.hand.cards()[0],
            "dealt opening hands"
        );

        self.phase = Phase::PlayerTurn;
        Ok(())
    }

    /// Applies a player action. Actions outside the player's turn leave the
    /// state untouched.
    pub fn apply(&mut self, action: Action) -> Result<Phase> {
        match (self.phase, action) {
            (Phase::PlayerTurn, Action::Hit) => {
                let card = self.deck.deal()?;
                self.player.hand.add_card(card);
                tracing::debug!(%card, score = self.player.hand.score(), "player hits");
                if self.player.hand.is_bust() {
                    self.finish(RoundOutcome::PlayerBust);
                }
            }
            (Phase::PlayerTurn, Action::Stand) => {
                tracing::debug!(score = self.player.hand.score(), "player stands");
                self.dealer_turn()?;
            }
            (phase, action) => {
                tracing::debug!(?phase, ?action, "ignoring action outside the player's turn");
            }
        }
        Ok(self.phase)
    }

    /// Draws for the dealer on copies of the deck and hand; nothing is
    /// committed unless the dealer reaches a standing total.
    fn dealer_turn(&mut self) -> Result<()> {
        let mut deck = self.deck.clone();
        let mut hand = self.dealer.hand.clone();
        while dealer_action(&hand) == Action::Hit {
            let card = deck.deal()?;
            hand.add_card(card);
            tracing::debug!(%card, score = hand.score(), "dealer draws");
        }

        self.deck = deck;
        self.dealer.hand = hand;
        self.phase = Phase::DealerTurn;
        let outcome = compare_scores(self.player.hand.score(), self.dealer.hand.score());
        self.finish(outcome);
        Ok(())
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        tracing::info!(
            ?outcome,
            player = self.player.hand.score(),
            dealer = self.dealer.hand.score(),
            "round resolved"
        );
        self.phase = Phase::Resolved(outcome);
    }
}

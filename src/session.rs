use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    config::TableConfig,
    deck::{Card, Deck},
    error::Result,
    game::{RoundOutcome, RoundState},
    hand::Hand,
    policy::Action,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageColor {
    Red,
    Green,
    White,
}

impl From<RoundOutcome> for MessageColor {
    fn from(outcome: RoundOutcome) -> Self {
        if outcome.player_won() {
            MessageColor::Green
        } else {
            MessageColor::Red
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolledAction {
    Hit,
    Stand,
    Quit,
    None,
}

/// Front end driven by [`play_round`].
pub trait Renderer {
    fn render_hands(&mut self, player: &Hand, dealer: &Hand, reveal_dealer: bool);

    fn render_message(&mut self, text: &str, color: MessageColor);

    fn poll_action(&mut self) -> PolledAction;

    fn wait(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundExit {
    Resolved(RoundOutcome),
    Quit,
}

/// Plays one round on `round` with a fresh `deck`, taking player actions
/// from `renderer` until the round resolves or the player quits.
pub fn play_round<R: Renderer>(
    renderer: &mut R,
    round: &mut RoundState,
    deck: Deck,
    config: &TableConfig,
) -> Result<RoundExit> {
    round.start_round(deck)?;

    loop {
        renderer.render_hands(&round.player.hand, &round.dealer.hand, false);

        let action = match renderer.poll_action() {
            PolledAction::Hit => Action::Hit,
            PolledAction::Stand => Action::Stand,
            PolledAction::Quit => {
                tracing::info!("player quit mid-round");
                return Ok(RoundExit::Quit);
            }
            PolledAction::None => {
                renderer.wait(config.poll_interval());
                continue;
            }
        };

        round.apply(action)?;
        if let Some(outcome) = round.outcome() {
            renderer.render_hands(&round.player.hand, &round.dealer.hand, true);
            renderer.render_message(outcome.message(), outcome.into());
            renderer.wait(config.outcome_pause());
            return Ok(RoundExit::Resolved(outcome));
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptedRoundInput {
    pub seed: u64,
    /// Action codes (`"H"`, `"S"`) applied in order; unknown codes are skipped.
    #[serde(default)]
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundReport {
    pub outcome: Option<RoundOutcome>,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_score: u32,
    pub dealer_score: u32,
}

impl RoundReport {
    pub fn from_round(round: &RoundState) -> Self {
        RoundReport {
            outcome: round.outcome(),
            player_cards: round.player.hand.cards().to_vec(),
            dealer_cards: round.dealer.hand.cards().to_vec(),
            player_score: round.player.hand.score(),
            dealer_score: round.dealer.hand.score(),
        }
    }
}

/// Replays a round on `deck` with a fixed action sequence. Actions left over
/// once the round resolves are not applied.
pub fn play_scripted(deck: Deck, actions: &[Action]) -> Result<RoundReport> {
    let mut round = RoundState::new();
    round.start_round(deck)?;

    for &action in actions {
        if round.is_resolved() {
            break;
        }
        round.apply(action)?;
    }
    Ok(RoundReport::from_round(&round))
}

pub fn run_scripted(input: ScriptedRoundInput) -> Result<RoundReport> {
    let actions: Vec<Action> = input
        .actions
        .iter()
        .filter_map(|code| Action::from_code(code))
        .collect();
    play_scripted(Deck::new(input.seed), &actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Rank, Suit};

    #[test]
    fn outcome_colors() {
        assert_eq!(MessageColor::from(RoundOutcome::PlayerWins), MessageColor::Green);
        assert_eq!(MessageColor::from(RoundOutcome::DealerBust), MessageColor::Green);
        assert_eq!(MessageColor::from(RoundOutcome::DealerWins), MessageColor::Red);
        assert_eq!(MessageColor::from(RoundOutcome::PlayerBust), MessageColor::Red);
    }

    #[test]
    fn scripted_round_stops_at_resolution() {
        let deck = Deck::stacked(
            [Rank::King, Rank::Nine, Rank::Six, Rank::Eight, Rank::Queen]
                .iter()
                .map(|&rank| Card::new(rank, Suit::Clubs))
                .collect(),
        );
        let report = play_scripted(deck, &[Action::Hit, Action::Hit, Action::Stand]).unwrap();
        assert_eq!(report.outcome, Some(RoundOutcome::PlayerBust));
        assert_eq!(report.player_cards.len(), 3);
        assert_eq!(report.dealer_cards.len(), 2);
        assert_eq!(report.player_score, 26);
    }

    #[test]
    fn unfinished_script_has_no_outcome() {
        let report = play_scripted(Deck::new(5), &[]).unwrap();
        assert_eq!(report.outcome, None);
        assert_eq!(report.player_cards.len(), 2);
        assert_eq!(report.dealer_cards.len(), 2);
    }

    #[test]
    fn same_seed_and_script_same_report() {
        let input = || ScriptedRoundInput {
            seed: 2024,
            actions: vec!["H".into(), "x".into(), "S".into()],
        };
        assert_eq!(run_scripted(input()).unwrap(), run_scripted(input()).unwrap());
    }
}

//! Terminal front end: text menu plus a line-based table.
//!
//! Usage:
//!   blackjack [--seed N] [--pause-ms N] [--poll-ms N] [--json] [--debug]

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use blackjack_table::{
    hand::Hand,
    menu::{self, MenuChoice},
    session::{self, MessageColor, PolledAction, Renderer, RoundExit, RoundReport},
    RoundState, TableConfig,
};
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Parser, Debug)]
#[command(name = "blackjack", about = "Single-player Blackjack at the terminal")]
struct Cli {
    /// Seed for the first round's shuffle (later rounds use seed + n)
    #[arg(long)]
    seed: Option<u64>,

    /// How long the outcome stays on screen before returning to the menu
    #[arg(long, default_value_t = 2_000)]
    pause_ms: u64,

    /// Delay before re-polling when no action was entered
    #[arg(long, default_value_t = 100)]
    poll_ms: u64,

    /// Print a JSON report after each round
    #[arg(long)]
    json: bool,

    /// Verbose logging (also honours RUST_LOG)
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn table_config(&self) -> TableConfig {
        TableConfig {
            seed: self.seed,
            outcome_pause_ms: self.pause_ms,
            poll_interval_ms: self.poll_ms,
        }
    }
}

struct TerminalRenderer<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> TerminalRenderer<R, W> {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                tracing::error!(%err, "failed to read input");
                None
            }
        }
    }

    fn println(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            tracing::error!(%err, "failed to write output");
        }
    }

    fn prompt(&mut self, text: &str) {
        if let Err(err) = write!(self.out, "{text}").and_then(|_| self.out.flush()) {
            tracing::error!(%err, "failed to write prompt");
        }
    }
}

impl<R: BufRead, W: Write> Renderer for TerminalRenderer<R, W> {
    fn render_hands(&mut self, player: &Hand, dealer: &Hand, reveal_dealer: bool) {
        self.println("\n--- Current Game ---");
        self.println(&format!("Player's Hand: {player} ({})", player.score()));
        let dealer_line = match (reveal_dealer, dealer.cards().first()) {
            (true, _) => format!("Dealer's Hand: {dealer} ({})", dealer.score()),
            (false, Some(up)) => format!("Dealer's Hand: {up} and an unknown card"),
            (false, None) => "Dealer's Hand: ".to_string(),
        };
        self.println(&dealer_line);
        self.println("----------------------");
        if !reveal_dealer {
            self.prompt("[h]it, [s]tand or [q]uit: ");
        }
    }

    fn render_message(&mut self, text: &str, color: MessageColor) {
        let line = match color {
            MessageColor::Red => text.red().to_string(),
            MessageColor::Green => text.green().to_string(),
            MessageColor::White => text.to_string(),
        };
        self.println(&line);
    }

    fn poll_action(&mut self) -> PolledAction {
        let Some(line) = self.read_line() else {
            return PolledAction::Quit;
        };
        match line.trim().to_ascii_lowercase().as_str() {
            "h" | "hit" => PolledAction::Hit,
            "s" | "stand" => PolledAction::Stand,
            "q" | "quit" => PolledAction::Quit,
            _ => PolledAction::None,
        }
    }

    fn wait(&mut self, duration: Duration) {
        if let Err(err) = self.out.flush() {
            tracing::error!(%err, "failed to flush output");
        }
        std::thread::sleep(duration);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.debug {
        "debug"
    } else {
        "blackjack_table=warn,warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(cli.debug)
        .init();

    let config = cli.table_config();
    tracing::debug!(?config, "starting table");

    let stdin = io::stdin();
    let mut renderer = TerminalRenderer {
        input: stdin.lock(),
        out: io::stdout(),
    };
    let mut round = RoundState::new();
    let mut rounds_played: u64 = 0;

    for line in menu::WELCOME {
        renderer.println(line);
    }

    loop {
        renderer.println("\nMenu:");
        for option in menu::OPTIONS {
            renderer.println(option);
        }
        write!(renderer.out, "{}", menu::PROMPT)
            .and_then(|_| renderer.out.flush())
            .context("writing menu prompt")?;

        let Some(line) = renderer.read_line() else {
            break;
        };
        let choice = match line.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(err) => {
                tracing::debug!(%err, "rejected menu input");
                renderer.println(menu::INVALID_CHOICE);
                continue;
            }
        };

        match choice {
            MenuChoice::Play => {
                let deck = config.deck_for_round(rounds_played);
                rounds_played += 1;
                let exit = match session::play_round(&mut renderer, &mut round, deck, &config) {
                    Ok(exit) => exit,
                    Err(err) => {
                        tracing::error!(%err, round = rounds_played, "round aborted");
                        renderer.render_message(&format!("Round aborted: {err}"), MessageColor::White);
                        continue;
                    }
                };
                if cli.json {
                    let report = RoundReport::from_round(&round);
                    let json = serde_json::to_string_pretty(&report)
                        .context("serializing round report")?;
                    renderer.println(&json);
                }
                if exit == RoundExit::Quit {
                    return Ok(());
                }
            }
            MenuChoice::Rules => {
                renderer.println("\nRules:");
                for rule in menu::RULES {
                    renderer.println(rule);
                }
            }
            MenuChoice::Quit => {
                renderer.println(menu::FAREWELL);
                break;
            }
        }
    }

    Ok(())
}

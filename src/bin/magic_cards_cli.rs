//! Terminal front-end for the card trick.
//!
//! Interactive play:
//!
//! ```text
//! magic_cards_cli --range 100 --seed 7
//! ```
//!
//! Demonstration, answering honestly for a chosen number:
//!
//! ```text
//! magic_cards_cli --think 42 --variant inverted
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use magic_cards::{
    Card, FixedVariant, GameEvent, GameMachine, GameRng, GameState, Reveal, TrickConfig, Variant,
    VariantSource,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    Random,
    Standard,
    Inverted,
}

#[derive(Parser)]
#[command(name = "magic_cards_cli")]
#[command(about = "Think of a number; answer a few cards; the number is revealed")]
struct Cli {
    /// Upper bound of the range to think of a number in
    #[arg(long, default_value_t = magic_cards::core::DEFAULT_RANGE_BOUND)]
    range: u32,

    /// Seed for the variant coin flip (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Force a variant instead of flipping a coin per round
    #[arg(long, value_enum, default_value_t = VariantArg::Random)]
    variant: VariantArg,

    /// Numbers per row when printing a card
    #[arg(long, default_value_t = 10)]
    columns: usize,

    /// Answer automatically for this number and show the deduction
    #[arg(long)]
    think: Option<u32>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = TrickConfig::for_range(cli.range).context("invalid --range")?;

    let source: Box<dyn VariantSource> = match cli.variant {
        VariantArg::Standard => Box::new(FixedVariant(Variant::Standard)),
        VariantArg::Inverted => Box::new(FixedVariant(Variant::Inverted)),
        VariantArg::Random => {
            let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
            tracing::info!(seed = rng.seed(), "variant coin seeded");
            Box::new(rng)
        }
    };
    let mut machine = GameMachine::new(config, source);

    match cli.think {
        Some(number) => demonstrate(&mut machine, number, cli.columns),
        None => play(&mut machine, cli.columns),
    }
}

/// Answer every card honestly for `number` and print the deduction.
fn demonstrate(machine: &mut GameMachine<Box<dyn VariantSource>>, number: u32, columns: usize) -> Result<()> {
    let range_bound = machine.config().range_bound();
    if !(1..=range_bound).contains(&number) {
        bail!("--think must be between 1 and {range_bound}");
    }

    let mut state = machine.create_initial_state();
    let key = state.answer_key(number);
    println!("Thinking of {number} ({} variant)\n", state.variant);

    for answer in key {
        print_card(&state, columns);
        println!("> {}\n", if answer.is_yes() { "yes" } else { "no" });
        state = machine.transition(&state, answer.into());
    }

    print_reveal(&state);
    Ok(())
}

/// Interactive loop on stdin.
fn play(machine: &mut GameMachine<Box<dyn VariantSource>>, columns: usize) -> Result<()> {
    let range_bound = machine.config().range_bound();
    println!("Think of a number between 1 and {range_bound}.");
    println!("Answer y if it is on the card, n if not. r restarts, q quits.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = machine.create_initial_state();

    loop {
        if state.is_finished {
            print_reveal(&state);
            print!("Play again? [y/n] ");
        } else {
            print_card(&state, columns);
            print!("[y/n{}q] ", if state.can_restart() { "/r/" } else { "/" });
        }
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("failed to read stdin")?;

        let event = match (state.is_finished, line.trim()) {
            (_, "q") => return Ok(()),
            (true, "y") | (_, "r") => GameEvent::Restart,
            (true, "n") => return Ok(()),
            (false, "y") => GameEvent::AnswerYes,
            (false, "n") => GameEvent::AnswerNo,
            _ => {
                println!("Please answer y or n.");
                continue;
            }
        };
        if event == GameEvent::Restart {
            println!("\nNew round. Think of a number between 1 and {range_bound}.\n");
        }
        state = machine.transition(&state, event);
    }
}

fn print_card(state: &GameState, columns: usize) {
    let (current, total) = state.progress();
    println!("Card {current} of {total}. Is your number here?");
    if let Some(card) = state.current_card() {
        print_grid(card, columns);
    }
}

fn print_grid(card: &Card, columns: usize) {
    let width = card.numbers.last().map_or(1, |n| n.to_string().len());
    for row in card.rows(columns) {
        let cells: Vec<String> = row.iter().map(|n| format!("{n:>width$}")).collect();
        println!("  {}", cells.join(" "));
    }
}

fn print_reveal(state: &GameState) {
    match state.reveal() {
        Some(Reveal::Number(n)) => println!("\nYour number is {n}!\n"),
        Some(Reveal::Unrepresentable(_)) => {
            println!("\nThose answers don't match any number between 1 and {}.", state.range_bound);
            println!("Maybe one answer slipped? Let's try again.\n");
        }
        None => {}
    }
}

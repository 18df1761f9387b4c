// Copyright (C) 2026 Flopside developers.
// SPDX-License-Identifier: Apache-2.0

//! Flopside CLI, a Texas Hold'em hand analyzer.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::error;

use flopside_cards::{Card, Deck};
use flopside_eval::{HandValue, Outs, Player, PlayerResult, showdown};

mod parse;

#[derive(Debug, Parser)]
#[command(name = "flopside", about = "Texas Hold'em hand analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyzes a hand and the cards that improve it.
    Analyze {
        /// The two hole cards, e.g. "AS,KS".
        #[clap(long)]
        hole: String,
        /// The community cards, up to 5, e.g. "QS,JS,2H".
        #[clap(long, default_value = "")]
        board: String,
    },
    /// Ranks players hands at showdown.
    Showdown {
        /// A player as "NAME:C1,C2", repeat for each player.
        #[clap(long = "player", required = true)]
        players: Vec<String>,
        /// The community cards, 3 to 5.
        #[clap(long)]
        board: String,
    },
    /// Deals a random board and hole cards and ranks them.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=9))]
        players: u8,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze { hole, board } => analyze(&hole, &board),
        Command::Showdown { players, board } => showdown_cmd(&players, &board),
        Command::Deal { players } => deal(players as usize),
    }
}

fn analyze(hole: &str, board: &str) -> Result<()> {
    let hole = parse::parse_hole(hole)?;
    let board = parse::parse_cards(board)?;
    if board.len() > 5 {
        bail!("the board has more than 5 cards");
    }

    // A complete board has no cards to come, report the best hand only.
    if board.len() == 5 {
        let mut pool = hole.to_vec();
        pool.extend_from_slice(&board);
        let hand = HandValue::eval_best(&pool)?;
        println!("Best hand: {} {}", hand.label(), fmt_cards(hand.hand()));
        return Ok(());
    }

    let outs = Outs::find(&hole, &board)?;
    match outs.current() {
        Some(hand) => {
            println!("Current hand: {} {}", hand.label(), fmt_cards(hand.hand()))
        }
        None => println!(
            "Current hand: none, {} community cards to come",
            outs.cards_to_come()
        ),
    }

    if outs.buckets().is_empty() {
        println!("No single card improves this hand.");
        return Ok(());
    }

    println!("\nOuts ({} unseen cards):", outs.unseen());
    for bucket in outs.buckets_by_rank() {
        println!(
            "  {:<26} {:>2} cards {:>6.2}%  {}",
            bucket.label(),
            bucket.count(),
            outs.bucket_probability(bucket) * 100.0,
            fmt_cards(bucket.cards()),
        );
    }

    println!(
        "\nTotal outs: {}, {:.2}% improve chance with {} card(s) to come",
        outs.total(),
        outs.probability() * 100.0,
        outs.cards_to_come(),
    );
    if let Some(odds) = outs.odds_to_one() {
        println!("Odds of improving: {odds:.1}-to-1");
    }

    Ok(())
}

fn showdown_cmd(players: &[String], board: &str) -> Result<()> {
    let board = parse::parse_cards(board)?;
    let players = players
        .iter()
        .enumerate()
        .map(|(i, s)| parse::parse_player(s, i as u32 + 1))
        .collect::<Result<Vec<_>>>()?;

    let results = showdown::resolve(&players, &board)?;
    print_results(&results);

    Ok(())
}

fn deal(players: usize) -> Result<()> {
    let mut deck = Deck::new_and_shuffled(&mut rand::rng());

    let players = (1..=players)
        .map(|i| Player {
            id: i as u32,
            name: format!("Player {i}"),
            hole: [deck.deal(), deck.deal()],
        })
        .collect::<Vec<_>>();
    let board = (0..5).map(|_| deck.deal()).collect::<Vec<_>>();

    println!("Board: {}", fmt_cards(&board));
    let results = showdown::resolve(&players, &board)?;
    print_results(&results);

    Ok(())
}

fn print_results(results: &[PlayerResult]) {
    let split = results.iter().filter(|r| r.is_winner()).count() > 1;

    for result in results {
        let marker = match (result.is_winner(), split) {
            (true, true) => " (split pot)",
            (true, false) => " (winner)",
            _ => "",
        };
        println!(
            "{}. {:<12} {} {:<26} {}{}",
            result.place(),
            result.player().name,
            fmt_cards(&result.player().hole),
            result.hand().label(),
            fmt_cards(result.hand().hand()),
            marker,
        );
    }
}

fn fmt_cards(cards: &[Card]) -> String {
    let cards = cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{cards}]")
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Splitpot hand evaluator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, error};
use std::time::Instant;

use splitpot_eval::{
    Card, Deck, HandRank, HandValue, eval, low::LowRule,
    parse_cards, ranks_from_notation, split,
};

mod report;
use report::{CensusReport, HighReport, LowReport, Report, SplitReport};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    /// Enable debug logs.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a 5, 6, or 7 cards high hand.
    Eval {
        /// The hand cards, i.e. `Ah Kd 0c 9s 2h`.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Evaluates a 5 cards ace to five low hand.
    Low {
        /// The qualifying rule: eight, any, or the highest rank (5..=13).
        #[clap(long, short, default_value = "eight", value_parser = parse_rule)]
        rule: LowRule,
        /// The hand cards.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Finds the best high and low hands using two hole and three board cards.
    Split {
        /// The hole cards, i.e. `"Ah 2d Kc Kd"`.
        #[clap(long)]
        hole: String,
        /// The board cards, i.e. `"3s 4h 8c Qd Js"`.
        #[clap(long)]
        board: String,
        /// The low qualifying rule.
        #[clap(long, short, default_value = "eight", value_parser = parse_rule)]
        rule: LowRule,
    },
    /// Counts the hand categories of all hands with the given size.
    Census {
        /// The hands size.
        #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(5..=7))]
        cards: u8,
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
        tasks: u16,
    },
    /// Deals a random hand and evaluates it.
    Deal {
        /// The hand size.
        #[clap(long, short, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=7))]
        cards: u8,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let report = match cli.command {
        Command::Eval { cards } => Report::High(high(&parse_args(&cards)?)?),
        Command::Low { rule, cards } => Report::Low(low(&cards, rule)?),
        Command::Split { hole, board, rule } => {
            Report::Split(split_pot(&parse_cards(&hole)?, &parse_cards(&board)?, rule)?)
        }
        Command::Census { cards, tasks } => {
            Report::Census(census(cards as usize, tasks as usize))
        }
        Command::Deal { cards } => {
            let mut deck = Deck::new_and_shuffled(&mut rand::rng());
            let hand = (0..cards).filter_map(|_| deck.deal()).collect::<Vec<_>>();
            Report::High(high(&hand)?)
        }
    };

    report.print(cli.json)
}

/// Parses cards given as separate arguments or as whitespace separated
/// strings.
fn parse_args(args: &[String]) -> Result<Vec<Card>> {
    Ok(parse_cards(&args.join(" "))?)
}

fn parse_rule(s: &str) -> Result<LowRule, String> {
    match s.to_ascii_lowercase().as_str() {
        "eight" | "8" => Ok(LowRule::EightOrBetter),
        "any" => Ok(LowRule::AceToFive),
        s => match s.parse::<u8>() {
            Ok(n) if (5..=13).contains(&n) => Ok(LowRule::Ceiling(n)),
            _ => Err(format!("invalid low rule {s:?}, use eight, any or 5..=13")),
        },
    }
}

fn high(cards: &[Card]) -> Result<HighReport> {
    let value = HandValue::try_eval(cards)?;
    let (_, best) = HandValue::eval_with_best_hand(cards);
    Ok(HighReport::new(cards, value, &best))
}

fn low(args: &[String], rule: LowRule) -> Result<LowReport> {
    let cards = args
        .iter()
        .flat_map(|a| a.split_whitespace())
        .collect::<Vec<_>>();

    let ranks = ranks_from_notation(&cards)?;
    let hand = rule.eval(&ranks)?;
    let ranks = hand.value().and_then(|v| rule.table().hand(v));
    Ok(LowReport::new(rule, hand, ranks))
}

fn split_pot(hole: &[Card], board: &[Card], rule: LowRule) -> Result<SplitReport> {
    if board.len() > 5 {
        bail!("the board has {} cards, at most 5 allowed", board.len());
    }

    let high = split::best_high(hole, board)?;
    let low = split::best_low(hole, board, rule)?;
    Ok(SplitReport::new(rule, &high, low.as_ref()))
}

fn census(k: usize, tasks: usize) -> CensusReport {
    eval::init();

    let now = Instant::now();
    let counts = count_ranks(k, tasks);
    let elapsed = now.elapsed();

    debug!("Evaluated {} hands in {elapsed:?}", counts.iter().sum::<u64>());
    CensusReport::new(k, &counts, elapsed)
}

#[cfg(feature = "parallel")]
fn count_ranks(k: usize, tasks: usize) -> [u64; HandRank::COUNT] {
    use std::sync::atomic::{AtomicU64, Ordering};

    // Per task counters to avoid contention.
    let task_counters = (0..tasks)
        .map(|_| {
            (0..HandRank::COUNT)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    Deck::default().par_for_each(tasks, k, |task_id, hand| {
        let rank = HandValue::eval(hand).rank();
        task_counters[task_id][rank as usize].fetch_add(1, Ordering::Relaxed);
    });

    let mut counts = [0; HandRank::COUNT];
    for counters in &task_counters {
        for (count, c) in counts.iter_mut().zip(counters) {
            *count += c.load(Ordering::Relaxed);
        }
    }

    counts
}

#[cfg(not(feature = "parallel"))]
fn count_ranks(k: usize, _tasks: usize) -> [u64; HandRank::COUNT] {
    let mut counts = [0; HandRank::COUNT];
    Deck::default().for_each(k, |hand| {
        counts[HandValue::eval(hand).rank() as usize] += 1;
    });

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_rules() {
        assert_eq!(parse_rule("eight"), Ok(LowRule::EightOrBetter));
        assert_eq!(parse_rule("8"), Ok(LowRule::EightOrBetter));
        assert_eq!(parse_rule("ANY"), Ok(LowRule::AceToFive));
        assert_eq!(parse_rule("10"), Ok(LowRule::Ceiling(10)));
        assert!(parse_rule("4").is_err());
        assert!(parse_rule("14").is_err());
        assert!(parse_rule("nine").is_err());
    }

    #[test]
    fn cli_args() {
        let cli = Cli::try_parse_from(["splitpot", "eval", "Ah Kh", "Qh", "Jh", "Th"]).unwrap();
        let Command::Eval { cards } = cli.command else {
            panic!("expected eval command");
        };
        let cards = parse_args(&cards).unwrap();
        assert_eq!(high(&cards).unwrap().strength, 1);

        let cli = Cli::try_parse_from(["splitpot", "--json", "low", "-r", "any", "Kd"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Command::Low {
                rule: LowRule::AceToFive,
                ..
            }
        ));

        assert!(Cli::try_parse_from(["splitpot", "census", "--cards", "4"]).is_err());
    }

    #[test]
    fn low_command() {
        let args = ["As 2d".to_string(), "3c".to_string(), "4h".to_string(), "5s".to_string()];
        let report = low(&args, LowRule::EightOrBetter).unwrap();
        assert_eq!(report.strength, Some(1));
        assert_eq!(report.ranks, Some([5, 4, 3, 2, 1]));

        let args = ["9s 2d 3c 4h 5s".to_string()];
        let report = low(&args, LowRule::EightOrBetter).unwrap();
        assert_eq!(report.strength, None);

        assert!(low(&["As 2d".to_string()], LowRule::AceToFive).is_err());
    }

    #[test]
    fn split_command() {
        let hole = parse_cards("Ah 2d Kc Kd").unwrap();
        let board = parse_cards("3s 4h 8c Qd Js").unwrap();
        let report = split_pot(&hole, &board, LowRule::EightOrBetter).unwrap();
        assert_eq!(report.high.rank, HandRank::OnePair);
        assert_eq!(report.low.as_ref().map(|l| l.ranks), Some([8, 4, 3, 2, 1]));

        let board = parse_cards("3s 4h 8c Qd Js 2c").unwrap();
        assert!(split_pot(&hole, &board, LowRule::EightOrBetter).is_err());
    }

    #[test]
    fn census_five_cards() {
        let report = census(5, 2);
        assert_eq!(report.total, 2_598_960);
        assert_eq!(report.count(HandRank::StraightFlush), 40);
        assert_eq!(report.count(HandRank::HighCard), 1_302_540);
    }
}

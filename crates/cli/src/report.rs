// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Commands output as text or JSON.
use anyhow::Result;
use serde::Serialize;
use std::{fmt, time::Duration};

use splitpot_eval::{
    Card, HandRank, HandValue,
    low::{LOW_HAND_SIZE, LowHand, LowRule},
    split::{SplitHigh, SplitLow},
};

/// A command result.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    High(HighReport),
    Low(LowReport),
    Split(SplitReport),
    Census(CensusReport),
}

impl Report {
    /// Prints the report to stdout.
    pub fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            match self {
                Report::High(r) => println!("{r}"),
                Report::Low(r) => println!("{r}"),
                Report::Split(r) => println!("{r}"),
                Report::Census(r) => println!("{r}"),
            }
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct HighReport {
    pub cards: Vec<String>,
    pub strength: u16,
    pub rank: HandRank,
    pub description: String,
    pub best: Vec<String>,
}

impl HighReport {
    pub fn new(cards: &[Card], value: HandValue, best: &[Card]) -> Self {
        Self {
            cards: notation(cards),
            strength: value.strength(),
            rank: value.rank(),
            description: value.rank().to_string(),
            best: notation(best),
        }
    }
}

impl fmt::Display for HighReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cards:    {}", self.cards.join(" "))?;
        writeln!(f, "Rank:     {}", self.description)?;
        writeln!(f, "Strength: {}", self.strength)?;
        write!(f, "Best:     {}", self.best.join(" "))
    }
}

#[derive(Debug, Serialize)]
pub struct LowReport {
    pub rule: String,
    pub qualified: bool,
    pub strength: Option<u16>,
    pub ranks: Option<[u8; LOW_HAND_SIZE]>,
}

impl LowReport {
    pub fn new(rule: LowRule, hand: LowHand, ranks: Option<[u8; LOW_HAND_SIZE]>) -> Self {
        Self {
            rule: rule.to_string(),
            qualified: hand.is_qualified(),
            strength: hand.value().map(|v| v.strength()),
            ranks,
        }
    }
}

impl fmt::Display for LowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rule:     {}", self.rule)?;
        match (self.strength, self.ranks) {
            (Some(strength), Some(ranks)) => {
                writeln!(f, "Low:      {}", low_ranks(&ranks))?;
                write!(f, "Strength: {strength}")
            }
            _ => write!(f, "Low:      no low"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SplitReport {
    pub rule: String,
    pub high: SplitHighReport,
    pub low: Option<SplitLowReport>,
}

#[derive(Debug, Serialize)]
pub struct SplitHighReport {
    pub hole: Vec<String>,
    pub board: Vec<String>,
    pub strength: u16,
    pub rank: HandRank,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SplitLowReport {
    pub hole: Vec<String>,
    pub board: Vec<String>,
    pub strength: u16,
    pub ranks: [u8; LOW_HAND_SIZE],
}

impl SplitReport {
    pub fn new(rule: LowRule, high: &SplitHigh, low: Option<&SplitLow>) -> Self {
        let high = SplitHighReport {
            hole: notation(&high.hole),
            board: notation(&high.board),
            strength: high.value.strength(),
            rank: high.value.rank(),
            description: high.value.rank().to_string(),
        };

        let low = low.and_then(|low| {
            let ranks = rule.table().hand(low.value)?;
            Some(SplitLowReport {
                hole: notation(&low.hole),
                board: notation(&low.board),
                strength: low.value.strength(),
                ranks,
            })
        });

        Self {
            rule: rule.to_string(),
            high,
            low,
        }
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "High: {} {} | {} ({})",
            self.high.description,
            self.high.hole.join(" "),
            self.high.board.join(" "),
            self.high.strength
        )?;

        match &self.low {
            Some(low) => write!(
                f,
                "Low:  {} {} | {} ({}, {})",
                low_ranks(&low.ranks),
                low.hole.join(" "),
                low.board.join(" "),
                low.strength,
                self.rule
            ),
            None => write!(f, "Low:  no low ({})", self.rule),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RankCount {
    pub rank: HandRank,
    pub description: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct CensusReport {
    pub cards: usize,
    pub total: u64,
    pub elapsed_ms: u128,
    pub counts: Vec<RankCount>,
}

impl CensusReport {
    pub fn new(cards: usize, counts: &[u64; HandRank::COUNT], elapsed: Duration) -> Self {
        Self {
            cards,
            total: counts.iter().sum(),
            elapsed_ms: elapsed.as_millis(),
            counts: HandRank::ranks()
                .rev()
                .map(|rank| RankCount {
                    rank,
                    description: rank.to_string(),
                    count: counts[rank as usize],
                })
                .collect(),
        }
    }

    /// The number of hands for a rank.
    #[cfg(test)]
    pub fn count(&self, rank: HandRank) -> u64 {
        self.counts
            .iter()
            .find(|c| c.rank == rank)
            .map_or(0, |c| c.count)
    }
}

impl fmt::Display for CensusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total hands:     {}", self.total)?;
        writeln!(f, "Elapsed:         {}ms\n", self.elapsed_ms)?;

        for c in &self.counts {
            writeln!(f, "{:<17}{}", format!("{}:", c.description), c.count)?;
        }

        Ok(())
    }
}

fn notation(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.to_string()).collect()
}

/// Low ranks with the ace as `A`, i.e. `8-4-3-2-A`.
fn low_ranks(ranks: &[u8]) -> String {
    ranks
        .iter()
        .map(|&r| match r {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            r => r.to_string(),
        })
        .collect::<Vec<_>>()
        .join("-")
}

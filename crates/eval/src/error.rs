// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::{Card, CardError};

/// Errors returned by the checked evaluation functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Invalid card notation or card code.
    #[error(transparent)]
    Card(#[from] CardError),
    /// A card appears more than once in a hand.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A high hand must have 5, 6, or 7 cards.
    #[error("can only evaluate 5, 6 or 7 cards, got {0}")]
    UnsupportedHandSize(usize),
    /// A low hand must have exactly 5 ranks in 1..=14.
    #[error("a low hand needs exactly 5 ranks in 1..=14")]
    InvalidRankInput,
    /// A strength value outside 1..=7462.
    #[error("hand strength {0} is out of range")]
    OutOfRange(u16),
    /// Split pot hands need at least 2 hole cards and 3 board cards.
    #[error("need at least 2 hole cards and 3 board cards")]
    NotEnoughCards,
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card codec errors.
use thiserror::Error;

/// Errors returned when decoding cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The text is not a valid card notation.
    #[error("invalid card notation {0:?}")]
    InvalidNotation(String),
    /// The integer is not a valid card code.
    #[error("invalid card code 0x{0:08x}")]
    InvalidCode(u32),
}

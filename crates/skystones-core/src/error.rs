//! Errors returned by board and game operations.
//!
//! Every error is a rejection of a single call: state is left exactly as it
//! was before the call, and the caller may retry with corrected input.

use crate::card::CardId;
use crate::player::PlayerId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Coordinates {row}.{col} out of range. Use 1..4 for row and column")]
    OutOfRange { row: usize, col: usize },

    #[error("Cell {row}.{col} is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("This card does not belong to {expected}")]
    WrongOwner {
        expected: PlayerId,
        found: Option<PlayerId>,
    },

    #[error("Card {0} is not in any hand")]
    CardNotInHand(CardId),

    #[error("Card {0} has no owner and cannot be placed")]
    UnownedCard(CardId),

    #[error("Card {0} was dealt more than once")]
    DuplicateCard(CardId),

    #[error("Bad coordinate: {0}")]
    FormatError(String),

    #[error("Unknown direction '{0}'")]
    UnknownDirection(String),

    #[error("Unknown element '{0}'")]
    UnknownElement(String),

    #[error("Quadrant must be 1..4, got {0}")]
    InvalidQuadrant(u8),

    #[error("Cannot pass while holding cards")]
    HandNotEmpty,

    #[error("Game is over")]
    GameOver,

    #[error("Invalid card library: {0}")]
    Library(String),
}

//! Events produced by game operations.
//!
//! Callers that render or log the game can follow it entirely through these
//! events without diffing board snapshots.

use crate::card::CardId;
use crate::coord::{Direction, Position};
use crate::game::GameResult;
use crate::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Something that happened as the result of a move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card left a hand and landed on the board
    CardPlaced {
        player: PlayerId,
        card: CardId,
        position: Position,
    },
    /// A neighboring card changed owner
    CardCaptured {
        card: CardId,
        position: Position,
        /// Side of the placed card that won
        direction: Direction,
        from: PlayerId,
        to: PlayerId,
    },
    /// Turn handed to the other player after a move
    TurnEnded {
        player: PlayerId,
        next_player: PlayerId,
    },
    /// A player with no cards left gave up their turn
    TurnPassed {
        player: PlayerId,
        next_player: PlayerId,
    },
    /// The last cell was filled
    GameFinished { result: GameResult },
}

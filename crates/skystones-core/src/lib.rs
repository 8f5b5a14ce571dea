//! Skystones - a 4x4 tile-capture card game engine
//!
//! This crate provides the rules of the game:
//! - Grid coordinates, `"row.col"` notation and quadrants
//! - Cards with four directional values and a mutable owner
//! - The board, with placement and single-hop capture resolution
//! - The turn/game state machine and win evaluation
//! - A catalog of named cards to build hands from
//!
//! # Architecture
//!
//! The engine does no I/O. Callers drive it by calling
//! [`GameState::play_turn`] for whichever player holds the turn, and render
//! from the read-only board queries or the returned [`GameEvent`]s.
//!
//! # Modules
//!
//! - [`coord`]: Positions, directions and quadrants
//! - [`card`]: Card copies and facing values
//! - [`library`]: Card definitions
//! - [`board`]: Board and capture rules
//! - [`player`]: Players and hands
//! - [`game`]: Game state machine

pub mod actions;
pub mod board;
pub mod card;
pub mod coord;
pub mod error;
pub mod game;
pub mod library;
pub mod player;

// Re-export commonly used types
pub use actions::GameEvent;
pub use board::{Board, Capture, QuadrantSummary, CELL_COUNT};
pub use card::{Card, CardId, Element, Facing};
pub use coord::{Direction, Position, Quadrant, BOARD_SIZE};
pub use error::GameError;
pub use game::{GameConfig, GamePhase, GameResult, GameState};
pub use library::{CardDefinition, CardLibrary};
pub use player::{Hand, PlayerId};

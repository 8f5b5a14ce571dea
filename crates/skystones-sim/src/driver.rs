//! Scripted playthrough of a full game.
//!
//! On each turn the current player plays the first card in their hand onto
//! the first empty cell of [`MOVE_ORDER`]. A player with no cards passes.

use crate::render::render_board;
use skystones_core::{GameError, GameEvent, GameResult, GameState, Position};
use tracing::{debug, info, warn};

/// Cells tried in order, center first
pub const MOVE_ORDER: [(usize, usize); 16] = [
    (2, 2),
    (2, 3),
    (1, 2),
    (1, 3),
    (3, 2),
    (3, 3),
    (4, 2),
    (4, 3),
    (1, 1),
    (1, 4),
    (4, 1),
    (4, 4),
    (2, 1),
    (2, 4),
    (3, 1),
    (3, 4),
];

/// How the simulated game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub host: usize,
    pub visitor: usize,
    /// `None` when both hands ran out before the board filled
    pub result: Option<GameResult>,
    pub moves: usize,
    pub passes: usize,
}

/// First empty cell in scripted order
fn next_cell(game: &GameState) -> Option<Position> {
    MOVE_ORDER
        .iter()
        .map(|&(row, col)| Position::new(row, col))
        .find(|pos| game.board().is_empty(pos.row, pos.col).unwrap_or(false))
}

/// Play `game` to completion
pub fn run(game: &mut GameState) -> Result<Summary, GameError> {
    let mut passes = 0;

    while !game.is_game_over() {
        if game.is_stalled() {
            warn!(moves = game.moves_played(), "both hands empty before the board filled");
            break;
        }

        let player = game.current_player();
        let Some(card) = game.hand(player).cards().first().map(|c| c.id()) else {
            game.pass_turn()?;
            passes += 1;
            continue;
        };
        let Some(cell) = next_cell(game) else {
            break;
        };

        for event in game.play_turn(card, cell.row, cell.col)? {
            match event {
                GameEvent::CardPlaced { player, position, .. } => {
                    info!(%player, %position, "card played");
                }
                GameEvent::CardCaptured { position, to, .. } => {
                    info!(%position, %to, "captured");
                }
                other => debug!(?other, "event"),
            }
        }
        info!("\n{}", render_board(game.board()));
    }

    let (host, visitor) = game.score();
    Ok(Summary {
        host,
        visitor,
        result: game.is_game_over().then(|| game.check_winner()),
        moves: game.moves_played(),
        passes,
    })
}

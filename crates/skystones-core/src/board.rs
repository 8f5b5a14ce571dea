//! The 4x4 board and capture resolution.
//!
//! This module contains:
//! - The cell grid, which only ever gains cards
//! - Placement with single-hop capture of weaker neighbors
//! - Read-only queries for renderers and scoring
//! - Quadrant occupancy summaries

use crate::card::{Card, CardId};
use crate::coord::{Direction, Position, Quadrant, BOARD_SIZE};
use crate::error::GameError;
use crate::player::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// An ownership change caused by a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub card: CardId,
    /// Cell of the captured card
    pub position: Position,
    /// Side of the placed card that won the comparison
    pub direction: Direction,
    pub from: PlayerId,
    pub to: PlayerId,
}

/// Occupancy of one quadrant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantSummary {
    pub occupied_count: usize,
    pub occupied: Vec<Position>,
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Row-major cells; a filled cell is never emptied
    cells: [Option<Card>; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|_| None),
        }
    }

    /// Side length of the board
    pub const fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Whether (row, col) lies on the board (1-based)
    pub fn validate_coordinates(&self, row: usize, col: usize) -> bool {
        Position::new(row, col).is_valid()
    }

    fn checked(row: usize, col: usize) -> Result<Position, GameError> {
        let pos = Position::new(row, col);
        if pos.is_valid() {
            Ok(pos)
        } else {
            Err(GameError::OutOfRange { row, col })
        }
    }

    /// Card at a cell, if any
    pub fn get_card(&self, row: usize, col: usize) -> Result<Option<&Card>, GameError> {
        let pos = Self::checked(row, col)?;
        Ok(self.cells[pos.index()].as_ref())
    }

    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.get_card(row, col)?.is_none())
    }

    /// Check that a card could be placed at (row, col) without placing it
    pub fn check_placement(&self, row: usize, col: usize) -> Result<Position, GameError> {
        let pos = Self::checked(row, col)?;
        if self.cells[pos.index()].is_some() {
            return Err(GameError::CellOccupied { row, col });
        }
        Ok(pos)
    }

    /// Place a card and resolve captures against its neighbors.
    ///
    /// The card must already belong to a player, so every card on the board
    /// is owned. On error the board is untouched. On success returns every
    /// capture in north, south, east, west order.
    pub fn place(&mut self, row: usize, col: usize, card: Card) -> Result<Vec<Capture>, GameError> {
        let pos = self.check_placement(row, col)?;
        let attacker = card.owner().ok_or(GameError::UnownedCard(card.id()))?;
        let captures = self.resolve_captures(pos, attacker, &card);

        debug!(
            card = %card.name(),
            position = %pos,
            owner = %attacker,
            captures = captures.len(),
            "card placed"
        );

        for capture in &captures {
            if let Some(neighbor) = self.cells[capture.position.index()].as_mut() {
                neighbor.set_owner(capture.to);
            }
            debug!(
                position = %capture.position,
                from = %capture.from,
                to = %capture.to,
                "card captured"
            );
        }
        self.cells[pos.index()] = Some(card);

        Ok(captures)
    }

    /// Work out which neighbors `card` would capture from `pos`.
    ///
    /// All four checks read the board as it stands before any of them are
    /// applied, so a captured card never captures further.
    fn resolve_captures(&self, pos: Position, attacker: PlayerId, card: &Card) -> Vec<Capture> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                let target = pos.neighbor(direction)?;
                let neighbor = self.cells[target.index()].as_ref()?;
                let defender = neighbor.owner()?;
                if defender == attacker {
                    return None;
                }
                (card.value(direction) > neighbor.value(direction.opposite())).then_some(Capture {
                    card: neighbor.id(),
                    position: target,
                    direction,
                    from: defender,
                    to: attacker,
                })
            })
            .collect()
    }

    /// Number of placed cards currently owned by `owner`
    pub fn count_owned(&self, owner: PlayerId) -> usize {
        self.placed()
            .filter(|(_, card)| card.owner() == Some(owner))
            .count()
    }

    /// Number of occupied cells
    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Every placed card with its cell, row-major
    pub fn placed(&self) -> impl Iterator<Item = (Position, &Card)> {
        Position::all().filter_map(move |pos| self.cells[pos.index()].as_ref().map(|c| (pos, c)))
    }

    /// Empty cells, row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |pos| self.cells[pos.index()].is_none())
    }

    /// Occupied cells inside a quadrant
    pub fn quadrant_occupancy(&self, quadrant: Quadrant) -> QuadrantSummary {
        let occupied: Vec<Position> = quadrant
            .cells()
            .into_iter()
            .filter(|pos| self.cells[pos.index()].is_some())
            .collect();
        QuadrantSummary {
            occupied_count: occupied.len(),
            occupied,
        }
    }

    /// Occupancy of every quadrant, keyed by quadrant
    pub fn quadrant_summary(&self) -> BTreeMap<Quadrant, QuadrantSummary> {
        Quadrant::ALL
            .into_iter()
            .map(|q| (q, self.quadrant_occupancy(q)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Facing;
    use pretty_assertions::assert_eq;

    fn card(id: u32, owner: PlayerId, north: u32, south: u32, east: u32, west: u32) -> Card {
        Card::new(CardId::new(id), format!("Card {id}"), Facing::new(north, south, east, west))
            .with_owner(owner)
    }

    fn owner_at(board: &Board, row: usize, col: usize) -> Option<PlayerId> {
        board.get_card(row, col).unwrap().and_then(Card::owner)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.size(), 4);
        assert_eq!(board.placed_count(), 0);
        assert!(!board.is_full());
        for pos in Position::all() {
            assert!(board.is_empty(pos.row, pos.col).unwrap());
        }
    }

    #[test]
    fn test_validate_coordinates() {
        let board = Board::new();
        assert!(board.validate_coordinates(1, 1));
        assert!(board.validate_coordinates(4, 4));
        assert!(!board.validate_coordinates(0, 2));
        assert!(!board.validate_coordinates(2, 5));
    }

    #[test]
    fn test_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.is_empty(0, 1), Err(GameError::OutOfRange { row: 0, col: 1 }));
        assert_eq!(
            board.place(5, 1, card(1, PlayerId::Host, 1, 1, 1, 1)),
            Err(GameError::OutOfRange { row: 5, col: 1 })
        );
        assert_eq!(board.placed_count(), 0);
    }

    #[test]
    fn test_place_on_occupied_cell_is_rejected() {
        let mut board = Board::new();
        board.place(2, 2, card(1, PlayerId::Host, 1, 1, 1, 1)).unwrap();
        let before = board.clone();

        let result = board.place(2, 2, card(2, PlayerId::Visitor, 9, 9, 9, 9));
        assert_eq!(result, Err(GameError::CellOccupied { row: 2, col: 2 }));
        assert_eq!(board, before);
        assert_eq!(board.get_card(2, 2).unwrap().unwrap().id(), CardId::new(1));
    }

    #[test]
    fn test_weaker_attacker_does_not_capture() {
        let mut board = Board::new();
        assert!(board.place(2, 2, card(1, PlayerId::Host, 4, 0, 0, 0)).unwrap().is_empty());

        // south 2 against north 4
        let captures = board.place(1, 2, card(2, PlayerId::Visitor, 0, 2, 0, 0)).unwrap();
        assert!(captures.is_empty());
        assert_eq!(owner_at(&board, 2, 2), Some(PlayerId::Host));
        assert_eq!(owner_at(&board, 1, 2), Some(PlayerId::Visitor));
    }

    #[test]
    fn test_stronger_attacker_captures() {
        let mut board = Board::new();
        board.place(1, 2, card(1, PlayerId::Visitor, 0, 0, 0, 3)).unwrap();

        let captures = board.place(1, 1, card(2, PlayerId::Host, 0, 0, 5, 0)).unwrap();
        assert_eq!(
            captures,
            vec![Capture {
                card: CardId::new(1),
                position: Position::new(1, 2),
                direction: Direction::East,
                from: PlayerId::Visitor,
                to: PlayerId::Host,
            }]
        );
        assert_eq!(board.count_owned(PlayerId::Host), 2);
        assert_eq!(board.count_owned(PlayerId::Visitor), 0);
    }

    #[test]
    fn test_ties_never_capture() {
        let mut board = Board::new();
        board.place(2, 1, card(1, PlayerId::Visitor, 3, 3, 3, 3)).unwrap();

        let captures = board.place(2, 2, card(2, PlayerId::Host, 3, 3, 3, 3)).unwrap();
        assert!(captures.is_empty());
        assert_eq!(owner_at(&board, 2, 1), Some(PlayerId::Visitor));
    }

    #[test]
    fn test_own_cards_are_not_compared() {
        let mut board = Board::new();
        board.place(1, 1, card(1, PlayerId::Host, 0, 0, 0, 0)).unwrap();
        let captures = board.place(1, 2, card(2, PlayerId::Host, 9, 9, 9, 9)).unwrap();
        assert!(captures.is_empty());
    }

    #[test]
    fn test_captures_in_all_directions() {
        let mut board = Board::new();
        board.place(1, 2, card(1, PlayerId::Visitor, 0, 1, 0, 0)).unwrap();
        board.place(3, 2, card(2, PlayerId::Visitor, 1, 0, 0, 0)).unwrap();
        board.place(2, 3, card(3, PlayerId::Visitor, 0, 0, 0, 1)).unwrap();
        board.place(2, 1, card(4, PlayerId::Visitor, 0, 0, 1, 0)).unwrap();

        let captures = board.place(2, 2, card(5, PlayerId::Host, 2, 2, 2, 2)).unwrap();
        let directions: Vec<Direction> = captures.iter().map(|c| c.direction).collect();
        assert_eq!(directions, Direction::ALL.to_vec());
        assert_eq!(board.count_owned(PlayerId::Host), 5);
    }

    #[test]
    fn test_capture_does_not_chain() {
        let mut board = Board::new();
        // (1,3) would lose to (1,2)'s east side if (1,2) chained
        board.place(1, 3, card(1, PlayerId::Visitor, 0, 0, 0, 0)).unwrap();
        board.place(1, 2, card(2, PlayerId::Visitor, 0, 0, 9, 0)).unwrap();

        let captures = board.place(1, 1, card(3, PlayerId::Host, 0, 0, 5, 0)).unwrap();
        assert_eq!(captures.len(), 1);
        assert_eq!(owner_at(&board, 1, 2), Some(PlayerId::Host));
        assert_eq!(owner_at(&board, 1, 3), Some(PlayerId::Visitor));
    }

    #[test]
    fn test_edge_cells_have_fewer_neighbors() {
        let mut board = Board::new();
        board.place(4, 1, card(1, PlayerId::Visitor, 0, 0, 0, 0)).unwrap();
        // (1,1) is not adjacent to (4,1) even though north would wrap there
        let captures = board.place(1, 1, card(2, PlayerId::Host, 9, 9, 9, 9)).unwrap();
        assert!(captures.is_empty());
    }

    #[test]
    fn test_unowned_card_is_rejected() {
        let mut board = Board::new();
        board.place(1, 1, card(1, PlayerId::Host, 0, 0, 5, 0)).unwrap();
        let before = board.clone();

        let loose = Card::new(CardId::new(2), "Loose", Facing::new(0, 0, 0, 0));
        assert_eq!(board.place(1, 2, loose), Err(GameError::UnownedCard(CardId::new(2))));
        assert_eq!(board, before);
        assert!(board.is_empty(1, 2).unwrap());
    }

    #[test]
    fn test_owned_counts_cover_every_placed_card() {
        let mut board = Board::new();
        board.place(1, 1, card(1, PlayerId::Host, 0, 0, 5, 0)).unwrap();
        let _ = board.place(1, 2, Card::new(CardId::new(2), "Loose", Facing::new(0, 0, 0, 0)));
        board.place(2, 1, card(3, PlayerId::Visitor, 9, 0, 0, 0)).unwrap();

        assert_eq!(owner_at(&board, 1, 1), Some(PlayerId::Visitor));
        assert_eq!(
            board.count_owned(PlayerId::Host) + board.count_owned(PlayerId::Visitor),
            board.placed_count()
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for (i, pos) in Position::all().enumerate() {
            let owner = if i % 2 == 0 { PlayerId::Host } else { PlayerId::Visitor };
            board.place(pos.row, pos.col, card(i as u32, owner, 0, 0, 0, 0)).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.placed_count(), CELL_COUNT);
        assert_eq!(
            board.count_owned(PlayerId::Host) + board.count_owned(PlayerId::Visitor),
            CELL_COUNT
        );
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_quadrant_summary() {
        let mut board = Board::new();
        board.place(1, 1, card(1, PlayerId::Host, 0, 0, 0, 0)).unwrap();
        board.place(2, 4, card(2, PlayerId::Host, 0, 0, 0, 0)).unwrap();
        board.place(3, 2, card(3, PlayerId::Host, 0, 0, 0, 0)).unwrap();
        board.place(4, 4, card(4, PlayerId::Host, 0, 0, 0, 0)).unwrap();
        board.place(4, 3, card(5, PlayerId::Host, 0, 0, 0, 0)).unwrap();

        let summary = board.quadrant_summary();
        assert_eq!(summary.len(), 4);
        assert_eq!(summary[&Quadrant::TopLeft].occupied, vec![Position::new(1, 1)]);
        assert_eq!(summary[&Quadrant::TopRight].occupied_count, 1);
        assert_eq!(summary[&Quadrant::BottomLeft].occupied, vec![Position::new(3, 2)]);
        assert_eq!(
            summary[&Quadrant::BottomRight].occupied,
            vec![Position::new(4, 3), Position::new(4, 4)]
        );
    }
}

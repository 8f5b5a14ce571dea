//! Plain-text board drawing.

use skystones_core::{Board, Position};
use std::fmt::Write;

/// Draw the board as a grid.
///
/// Each card shows the first letter of its name and of its owner; empty
/// cells show `.`.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();
    let rule = format!("  +{}", "---+".repeat(size));

    let header: Vec<String> = (1..=size).map(|c| format!(" {c} ")).collect();
    let _ = writeln!(out, "   {}", header.join(" "));
    let _ = writeln!(out, "{rule}");

    for row in 1..=size {
        let cells: Vec<String> = (1..=size)
            .map(|col| cell_text(board, Position::new(row, col)))
            .collect();
        let _ = writeln!(out, "{row} |{}|", cells.join("|"));
        let _ = writeln!(out, "{rule}");
    }
    out
}

fn cell_text(board: &Board, pos: Position) -> String {
    match board.get_card(pos.row, pos.col) {
        Ok(Some(card)) => {
            let name = card.name().chars().next().unwrap_or('?');
            let owner = card
                .owner()
                .and_then(|p| p.name().chars().next())
                .unwrap_or('-');
            format!(" {name}{owner}")
        }
        _ => " . ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use skystones_core::{Card, CardId, Facing, PlayerId};

    #[test]
    fn test_empty_board() {
        let text = render_board(&Board::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "    1   2   3   4 ");
        assert_eq!(lines[1], "  +---+---+---+---+");
        assert_eq!(lines[2], "1 | . | . | . | . |");
    }

    #[test]
    fn test_cards_show_name_and_owner() {
        let mut board = Board::new();
        let rock =
            Card::new(CardId::new(1), "Rock", Facing::new(1, 1, 1, 1)).with_owner(PlayerId::Host);
        let spike = Card::new(CardId::new(2), "Spike", Facing::new(1, 1, 1, 1))
            .with_owner(PlayerId::Visitor);
        board.place(2, 1, rock).unwrap();
        board.place(2, 3, spike).unwrap();

        let text = render_board(&board);
        let row_two = text.lines().nth(4).unwrap();
        assert_eq!(row_two, "2 | RH| . | SV| . |");
    }
}

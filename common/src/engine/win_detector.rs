use super::board::{Board, Mark};
use super::types::WinningLine;

// Rows, then columns, then diagonals. The scan reports the first complete
// line in this order; a double completion is possible in legal play, and the
// choice only affects which line gets highlighted.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<WinningLine> {
    for cells in WINNING_LINES {
        let mark = board.cell(cells[0]);
        if mark != Mark::Empty && mark == board.cell(cells[1]) && mark == board.cell(cells[2]) {
            return Some(WinningLine { mark, cells });
        }
    }
    None
}

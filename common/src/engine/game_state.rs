use super::board::{Board, CELL_COUNT, Mark};
use super::types::{MatchStatus, MoveAccepted, RejectReason, WinningLine};
use super::win_detector::check_win;

#[derive(Debug, Clone)]
pub struct MatchState {
    board: Board,
    current_mark: Mark,
    status: MatchStatus,
    last_move: Option<usize>,
}

impl MatchState {
    pub fn new(starting_mark: Mark) -> Self {
        assert!(
            starting_mark != Mark::Empty,
            "a match must start with X or O"
        );

        Self {
            board: Board::empty(),
            current_mark: starting_mark,
            status: MatchStatus::InProgress,
            last_move: None,
        }
    }

    // Rejections leave the match untouched.
    pub fn apply_move(&mut self, index: usize) -> Result<MoveAccepted, RejectReason> {
        if self.status != MatchStatus::InProgress {
            return Err(RejectReason::MatchOver);
        }

        if index >= CELL_COUNT {
            return Err(RejectReason::OutOfRange);
        }

        if self.board.cell(index) != Mark::Empty {
            return Err(RejectReason::CellOccupied);
        }

        let mark = self.current_mark;
        self.board.place(index, mark);
        self.last_move = Some(index);

        let completed_line = self.check_match_over();
        if self.status == MatchStatus::InProgress {
            self.switch_turn();
        }

        Ok(MoveAccepted {
            index,
            mark,
            board: self.board,
            status: self.status,
            completed_line,
        })
    }

    // Win is evaluated before draw: a full board with a complete line is a win.
    fn check_match_over(&mut self) -> Option<WinningLine> {
        if let Some(line) = check_win(&self.board) {
            self.status = MatchStatus::Won {
                mark: line.mark,
                line: line.cells,
            };
            return Some(line);
        }

        if self.board.is_full() {
            self.status = MatchStatus::Drawn;
        }

        None
    }

    fn switch_turn(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_starts_empty_and_in_progress() {
        let state = MatchState::new(Mark::X);
        assert_eq!(state.status(), MatchStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.last_move(), None);
        assert!(state.board().cells().iter().all(|&c| c == Mark::Empty));
    }

    #[test]
    fn test_accepted_move_places_mark_and_toggles_turn() {
        let mut state = MatchState::new(Mark::X);
        let accepted = state.apply_move(4).unwrap();

        assert_eq!(accepted.index, 4);
        assert_eq!(accepted.mark, Mark::X);
        assert_eq!(accepted.status, MatchStatus::InProgress);
        assert_eq!(accepted.completed_line, None);
        assert_eq!(state.board().cell(4), Mark::X);
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.last_move(), Some(4));
    }

    #[test]
    fn test_out_of_range_move_is_rejected_without_mutation() {
        let mut state = MatchState::new(Mark::X);
        assert_eq!(state.apply_move(9), Err(RejectReason::OutOfRange));
        assert_eq!(state.apply_move(42), Err(RejectReason::OutOfRange));
        assert_eq!(state.status(), MatchStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::X);
        assert!(state.board().cells().iter().all(|&c| c == Mark::Empty));
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_mutation() {
        let mut state = MatchState::new(Mark::X);
        state.apply_move(0).unwrap();

        let before = *state.board();
        assert_eq!(state.apply_move(0), Err(RejectReason::CellOccupied));
        assert_eq!(*state.board(), before);
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_top_row_win_scenario() {
        // X -> 0, O -> 4, X -> 1, O -> 5, X -> 2 wins the top row.
        let mut state = MatchState::new(Mark::X);
        for index in [0, 4, 1, 5] {
            let accepted = state.apply_move(index).unwrap();
            assert_eq!(accepted.status, MatchStatus::InProgress);
        }

        let accepted = state.apply_move(2).unwrap();
        assert_eq!(
            accepted.status,
            MatchStatus::Won {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        );
        let line = accepted.completed_line.unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.cells, [0, 1, 2]);
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        // Ends on the board X O X / X O O / O X X: full, no complete line.
        let mut state = MatchState::new(Mark::X);
        let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
        for (turn, &index) in moves.iter().enumerate() {
            let accepted = state.apply_move(index).unwrap();
            if turn < moves.len() - 1 {
                assert_eq!(accepted.status, MatchStatus::InProgress);
            } else {
                assert_eq!(accepted.status, MatchStatus::Drawn);
                assert_eq!(accepted.completed_line, None);
            }
        }
        assert!(state.board().is_full());
    }

    #[test]
    fn test_moves_after_match_over_are_rejected_until_reset() {
        let mut state = MatchState::new(Mark::X);
        for index in [0, 4, 1, 5, 2] {
            state.apply_move(index).unwrap();
        }
        assert!(matches!(state.status(), MatchStatus::Won { .. }));

        for index in 0..CELL_COUNT {
            assert_eq!(state.apply_move(index), Err(RejectReason::MatchOver));
        }

        let mut fresh = MatchState::new(Mark::O);
        assert!(fresh.apply_move(0).is_ok());
        assert_eq!(fresh.board().cell(0), Mark::O);
    }

    #[test]
    fn test_win_takes_precedence_over_draw_on_final_cell() {
        // The ninth move fills the board and completes both the top row and
        // the right column at once; win wins over draw and the row is the
        // first complete line in declared order.
        let mut state = MatchState::new(Mark::X);
        for index in [0, 3, 1, 4, 5, 6, 8, 7] {
            let accepted = state.apply_move(index).unwrap();
            assert_eq!(accepted.status, MatchStatus::InProgress);
        }
        let accepted = state.apply_move(2).unwrap();
        assert!(state.board().is_full());
        assert_eq!(
            accepted.status,
            MatchStatus::Won {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        );
    }
}

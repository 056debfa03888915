use std::fmt;

use super::board::{Board, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Won { mark: Mark, line: [usize; 3] },
    Drawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    OutOfRange,
    CellOccupied,
    MatchOver,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            RejectReason::OutOfRange => "position out of bounds",
            RejectReason::CellOccupied => "cell is already marked",
            RejectReason::MatchOver => "match is already over",
        };
        write!(f, "{}", message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveAccepted {
    pub index: usize,
    pub mark: Mark,
    pub board: Board,
    pub status: MatchStatus,
    pub completed_line: Option<WinningLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    PlaceMark(usize),
    NewMatch,
    ResetScores,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    MatchStarted { starting_mark: Mark, board: Board },
    MoveAccepted { index: usize, mark: Mark, board: Board },
    MoveRejected { reason: RejectReason },
    MatchWon { mark: Mark, line: [usize; 3] },
    MatchDrawn,
    ScoreChanged { wins_x: u32, wins_o: u32 },
}

mod board;
mod game_state;
mod score;
mod session;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, Mark};
pub use game_state::MatchState;
pub use score::ScoreBoard;
pub use session::MatchSession;
pub use types::{GameCommand, GameEvent, MatchStatus, MoveAccepted, RejectReason, WinningLine};
pub use win_detector::{WINNING_LINES, check_win};

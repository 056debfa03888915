use std::sync::{Arc, Mutex};

use common::engine::{Board, GameCommand, Mark, MatchStatus, ScoreBoard};
use ringbuffer::AllocRingBuffer;

use crate::config::Config;

pub const HISTORY_BUFFER_SIZE: usize = 16;

#[derive(Debug, Clone)]
pub enum ClientCommand {
    Game(GameCommand),
    ApplySettings(Config),
    Shutdown,
}

#[derive(Debug, Clone)]
pub struct GameView {
    pub board: Board,
    pub current_mark: Mark,
    pub status: MatchStatus,
    pub scores: ScoreBoard,
    pub result_banner: Option<String>,
    pub history: AllocRingBuffer<String>,
}

impl GameView {
    pub fn initial() -> Self {
        Self {
            board: Board::empty(),
            current_mark: Mark::X,
            status: MatchStatus::InProgress,
            scores: ScoreBoard::new(),
            result_banner: None,
            history: AllocRingBuffer::new(HISTORY_BUFFER_SIZE),
        }
    }
}

pub struct SharedState {
    view: Arc<Mutex<GameView>>,
    error: Arc<Mutex<Option<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            view: Arc::new(Mutex::new(GameView::initial())),
            error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_view(&self, view: GameView) {
        *self.view.lock().unwrap() = view;
    }

    pub fn get_view(&self) -> GameView {
        self.view.lock().unwrap().clone()
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap() = Some(error);
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }

    pub fn clear_error(&self) {
        *self.error.lock().unwrap() = None;
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            view: Arc::clone(&self.view),
            error: Arc::clone(&self.error),
        }
    }
}

use super::board::Mark;
use super::game_state::MatchState;
use super::score::ScoreBoard;
use super::types::{GameCommand, GameEvent, MatchStatus};

// Starting-player rule: the winner of the previous match starts the next
// one; X starts after a draw and for the first match of the session.
pub struct MatchSession {
    match_state: MatchState,
    scores: ScoreBoard,
    last_winner: Option<Mark>,
}

impl MatchSession {
    pub fn new() -> Self {
        Self {
            match_state: MatchState::new(Mark::X),
            scores: ScoreBoard::new(),
            last_winner: None,
        }
    }

    pub fn handle(&mut self, command: GameCommand) -> Vec<GameEvent> {
        match command {
            GameCommand::PlaceMark(index) => self.place_mark(index),
            GameCommand::NewMatch => self.start_new_match(),
            GameCommand::ResetScores => self.reset_scores(),
        }
    }

    fn place_mark(&mut self, index: usize) -> Vec<GameEvent> {
        let accepted = match self.match_state.apply_move(index) {
            Ok(accepted) => accepted,
            Err(reason) => return vec![GameEvent::MoveRejected { reason }],
        };

        let mut events = vec![GameEvent::MoveAccepted {
            index: accepted.index,
            mark: accepted.mark,
            board: accepted.board,
        }];

        match accepted.status {
            MatchStatus::Won { mark, line } => {
                self.last_winner = Some(mark);
                self.scores = self.scores.record(accepted.status);
                events.push(GameEvent::MatchWon { mark, line });
                events.push(GameEvent::ScoreChanged {
                    wins_x: self.scores.wins_x,
                    wins_o: self.scores.wins_o,
                });
            }
            MatchStatus::Drawn => {
                self.last_winner = None;
                events.push(GameEvent::MatchDrawn);
            }
            MatchStatus::InProgress => {}
        }

        events
    }

    fn start_new_match(&mut self) -> Vec<GameEvent> {
        let starting_mark = self.last_winner.unwrap_or(Mark::X);
        self.match_state = MatchState::new(starting_mark);
        vec![GameEvent::MatchStarted {
            starting_mark,
            board: *self.match_state.board(),
        }]
    }

    // Clears the tally only; the match in progress keeps going.
    fn reset_scores(&mut self) -> Vec<GameEvent> {
        self.scores = self.scores.reset();
        vec![GameEvent::ScoreChanged {
            wins_x: 0,
            wins_o: 0,
        }]
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RejectReason;

    fn play(session: &mut MatchSession, moves: &[usize]) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for &index in moves {
            events.extend(session.handle(GameCommand::PlaceMark(index)));
        }
        events
    }

    #[test]
    fn test_win_emits_won_and_score_changed() {
        let mut session = MatchSession::new();
        let events = play(&mut session, &[0, 4, 1, 5, 2]);

        assert!(matches!(
            events[events.len() - 2],
            GameEvent::MatchWon {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        ));
        assert_eq!(
            events[events.len() - 1],
            GameEvent::ScoreChanged {
                wins_x: 1,
                wins_o: 0
            }
        );
        assert_eq!(session.scores(), ScoreBoard { wins_x: 1, wins_o: 0 });
    }

    #[test]
    fn test_score_is_recorded_exactly_once_per_match() {
        let mut session = MatchSession::new();
        play(&mut session, &[0, 4, 1, 5, 2]);

        // Further attempts after the win change nothing.
        let events = play(&mut session, &[3, 6, 7]);
        assert!(events.iter().all(|e| matches!(
            e,
            GameEvent::MoveRejected {
                reason: RejectReason::MatchOver
            }
        )));
        assert_eq!(session.scores(), ScoreBoard { wins_x: 1, wins_o: 0 });
    }

    #[test]
    fn test_winner_starts_the_next_match() {
        let mut session = MatchSession::new();
        // O wins: X -> 3, O -> 0, X -> 4, O -> 1, X -> 7, O -> 2.
        play(&mut session, &[3, 0, 4, 1, 7, 2]);
        assert_eq!(session.scores(), ScoreBoard { wins_x: 0, wins_o: 1 });

        let events = session.handle(GameCommand::NewMatch);
        assert!(matches!(
            events[0],
            GameEvent::MatchStarted {
                starting_mark: Mark::O,
                ..
            }
        ));
        assert_eq!(session.match_state().current_mark(), Mark::O);
    }

    #[test]
    fn test_x_starts_after_a_draw() {
        let mut session = MatchSession::new();
        let events = play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(events.contains(&GameEvent::MatchDrawn));

        let events = session.handle(GameCommand::NewMatch);
        assert!(matches!(
            events[0],
            GameEvent::MatchStarted {
                starting_mark: Mark::X,
                ..
            }
        ));
    }

    #[test]
    fn test_x_starts_the_first_match_of_a_session() {
        let session = MatchSession::new();
        assert_eq!(session.match_state().current_mark(), Mark::X);
    }

    #[test]
    fn test_draw_emits_drawn_and_no_score_change() {
        let mut session = MatchSession::new();
        let events = play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert!(events.contains(&GameEvent::MatchDrawn));
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, GameEvent::ScoreChanged { .. }))
        );
        assert_eq!(session.scores(), ScoreBoard::new());
    }

    #[test]
    fn test_reset_scores_leaves_the_board_alone() {
        let mut session = MatchSession::new();
        play(&mut session, &[0, 4, 1]);
        play(&mut session, &[0]); // occupied, rejected

        let events = session.handle(GameCommand::ResetScores);
        assert_eq!(
            events,
            vec![GameEvent::ScoreChanged {
                wins_x: 0,
                wins_o: 0
            }]
        );
        assert_eq!(session.match_state().board().cell(0), Mark::X);
        assert_eq!(session.match_state().status(), MatchStatus::InProgress);
    }

    #[test]
    fn test_rejected_move_emits_only_the_rejection() {
        let mut session = MatchSession::new();
        let events = session.handle(GameCommand::PlaceMark(11));
        assert_eq!(
            events,
            vec![GameEvent::MoveRejected {
                reason: RejectReason::OutOfRange
            }]
        );
    }
}

use super::board::Mark;
use super::types::MatchStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    pub wins_x: u32,
    pub wins_o: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // Draws and unfinished matches leave the counters unchanged.
    pub fn record(self, status: MatchStatus) -> ScoreBoard {
        match status {
            MatchStatus::Won { mark, .. } => match mark {
                Mark::X => ScoreBoard {
                    wins_x: self.wins_x + 1,
                    ..self
                },
                Mark::O => ScoreBoard {
                    wins_o: self.wins_o + 1,
                    ..self
                },
                Mark::Empty => unreachable!("a won match always names a player"),
            },
            MatchStatus::Drawn | MatchStatus::InProgress => self,
        }
    }

    pub fn reset(self) -> ScoreBoard {
        ScoreBoard::default()
    }
}

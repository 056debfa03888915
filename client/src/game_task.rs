use common::engine::{GameCommand, GameEvent, MatchSession};
use common::feedback::{AudioBackend, HapticBackend, SoundId, plan_for_event};
use common::{log, warn};
use rand::Rng;
use ringbuffer::RingBuffer;
use tokio::sync::mpsc;

use crate::config::{ClientConfigManager, Config};
use crate::state::{ClientCommand, GameView, SharedState};

const WIN_EMOJIS: &[&str] = &["🎉", "🏆", "🥇", "✨", "👑"];
const DRAW_EMOJIS: &[&str] = &["🤝", "🔄", "⚖️", "🎮", "🎯"];

// Owns the match session for the lifetime of the process. Each command is
// handled to completion before the next; the resulting view snapshot is
// published for the UI thread to read.
pub async fn game_task(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    config_manager: ClientConfigManager,
    initial_config: Config,
    audio: impl AudioBackend,
    haptics: impl HapticBackend,
) {
    let mut session = MatchSession::new();
    let mut config = initial_config;
    let mut view = GameView::initial();

    publish(&shared_state, &mut view, &session);
    log!("Game task started");

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::Game(game_command) => {
                let events = session.handle(game_command);
                for event in &events {
                    fire_feedback(&config, event, &audio, &haptics);
                    note_event(&mut view, event);
                }
                if game_command == GameCommand::ResetScores {
                    view.history.enqueue("Scores reset".to_string());
                }
                publish(&shared_state, &mut view, &session);
            }

            ClientCommand::ApplySettings(new_config) => {
                let vibration_turned_on = new_config.vibration_enabled && !config.vibration_enabled;
                config = new_config;

                if let Err(e) = config_manager.set_config(&config) {
                    // The session keeps running on the in-memory settings.
                    warn!("Failed to persist settings: {}", e);
                    shared_state.set_error(format!("Settings not saved: {}", e));
                }

                settings_cue(&config, vibration_turned_on, &audio, &haptics);
            }

            ClientCommand::Shutdown => break,
        }
    }

    log!("Game task stopped");
}

fn publish(shared_state: &SharedState, view: &mut GameView, session: &MatchSession) {
    let state = session.match_state();
    view.board = *state.board();
    view.current_mark = state.current_mark();
    view.status = state.status();
    view.scores = session.scores();
    shared_state.set_view(view.clone());
}

fn fire_feedback(
    config: &Config,
    event: &GameEvent,
    audio: &impl AudioBackend,
    haptics: &impl HapticBackend,
) {
    let plan = plan_for_event(&config.feedback_settings(), event);
    if let Some(sound) = plan.sound {
        audio.play(sound);
    }
    if let Some(timeline) = plan.haptic {
        haptics.vibrate(&timeline);
    }
}

fn note_event(view: &mut GameView, event: &GameEvent) {
    match event {
        GameEvent::MatchStarted { starting_mark, .. } => {
            view.result_banner = None;
            log!("New match, player {} starts", starting_mark);
        }
        GameEvent::MoveRejected { reason } => {
            log!("Move rejected: {}", reason);
        }
        GameEvent::MatchWon { mark, .. } => {
            let banner = format!("Player {} wins! {}", mark, pick(WIN_EMOJIS));
            view.history.enqueue(format!("Player {} won", mark));
            view.result_banner = Some(banner);
        }
        GameEvent::MatchDrawn => {
            view.history.enqueue("Draw".to_string());
            view.result_banner = Some(format!("It's a draw! {}", pick(DRAW_EMOJIS)));
        }
        GameEvent::MoveAccepted { .. } | GameEvent::ScoreChanged { .. } => {}
    }
}

// A settings change is confirmed with a soft cue: a click if sound is on,
// a sample pulse when vibration was just switched on.
fn settings_cue(
    config: &Config,
    vibration_turned_on: bool,
    audio: &impl AudioBackend,
    haptics: &impl HapticBackend,
) {
    if config.sound_enabled {
        audio.play(SoundId::Click);
    }
    if config.vibration_enabled && vibration_turned_on {
        haptics.vibrate(&[config.vibration_intensity]);
    }
}

fn pick(emojis: &[&str]) -> String {
    let mut rng = rand::rng();
    emojis[rng.random_range(0..emojis.len())].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::engine::Mark;

    #[test]
    fn test_note_event_sets_win_banner_and_history() {
        let mut view = GameView::initial();
        note_event(
            &mut view,
            &GameEvent::MatchWon {
                mark: Mark::X,
                line: [0, 1, 2],
            },
        );

        let banner = view.result_banner.unwrap();
        assert!(banner.starts_with("Player X wins!"));
        assert_eq!(view.history.len(), 1);
    }

    #[test]
    fn test_note_event_clears_banner_on_new_match() {
        let mut view = GameView::initial();
        note_event(&mut view, &GameEvent::MatchDrawn);
        assert!(view.result_banner.is_some());

        note_event(
            &mut view,
            &GameEvent::MatchStarted {
                starting_mark: Mark::X,
                board: common::engine::Board::empty(),
            },
        );
        assert_eq!(view.result_banner, None);
    }

    #[test]
    fn test_history_stays_bounded() {
        let mut view = GameView::initial();
        for _ in 0..100 {
            note_event(&mut view, &GameEvent::MatchDrawn);
        }
        assert_eq!(view.history.len(), crate::state::HISTORY_BUFFER_SIZE);
    }
}

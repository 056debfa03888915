use crate::engine::GameEvent;

pub const VIBRATION_MIN_INTENSITY: u32 = 1;
pub const VIBRATION_MAX_INTENSITY: u32 = 20;
pub const VIBRATION_DEFAULT_INTENSITY: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    Place,
    Win,
    Draw,
    Click,
    Error,
}

impl SoundId {
    pub fn clip_name(self) -> &'static str {
        match self {
            SoundId::Place => "place.mp3",
            SoundId::Win => "win.mp3",
            SoundId::Draw => "draw.mp3",
            SoundId::Click => "click.mp3",
            SoundId::Error => "error.mp3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPattern {
    Tap,
    Win,
    Draw,
    Error,
}

impl HapticPattern {
    // Alternating pulse/pause durations in milliseconds; pulses scale with
    // the configured intensity.
    pub fn timeline(self, intensity: u32) -> Vec<u32> {
        match self {
            HapticPattern::Tap => vec![intensity],
            HapticPattern::Win => vec![intensity, 100, intensity, 100, intensity * 2],
            HapticPattern::Draw => vec![intensity, 200, intensity],
            HapticPattern::Error => vec![intensity * 2, 50, intensity],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackSettings {
    pub sound_enabled: bool,
    pub vibration_enabled: bool,
    pub vibration_intensity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackPlan {
    pub sound: Option<SoundId>,
    pub haptic: Option<Vec<u32>>,
}

// Disabled toggles suppress the corresponding cue kind entirely.
pub fn plan_for_event(settings: &FeedbackSettings, event: &GameEvent) -> FeedbackPlan {
    let (sound, pattern) = match event {
        GameEvent::MoveAccepted { .. } => (Some(SoundId::Place), Some(HapticPattern::Tap)),
        GameEvent::MoveRejected { .. } => (Some(SoundId::Error), Some(HapticPattern::Error)),
        GameEvent::MatchWon { .. } => (Some(SoundId::Win), Some(HapticPattern::Win)),
        GameEvent::MatchDrawn => (Some(SoundId::Draw), Some(HapticPattern::Draw)),
        GameEvent::MatchStarted { .. } => (Some(SoundId::Click), Some(HapticPattern::Tap)),
        // The action that changed the score already cued.
        GameEvent::ScoreChanged { .. } => (None, None),
    };

    FeedbackPlan {
        sound: sound.filter(|_| settings.sound_enabled),
        haptic: pattern
            .filter(|_| settings.vibration_enabled)
            .map(|p| p.timeline(settings.vibration_intensity)),
    }
}

pub trait AudioBackend {
    fn play(&self, sound: SoundId);
}

pub trait HapticBackend {
    fn vibrate(&self, timeline: &[u32]);
}

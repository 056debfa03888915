use common::feedback::{AudioBackend, HapticBackend, SoundId};
use common::log;

// The desktop build ships no speaker or vibration-motor integration yet;
// cues land in the log instead.
// TODO: route sounds through a real playback backend once clips are bundled.

pub struct StubAudioBackend;

impl AudioBackend for StubAudioBackend {
    fn play(&self, sound: SoundId) {
        log!("audio cue: {}", sound.clip_name());
    }
}

pub struct StubHapticBackend;

impl HapticBackend for StubHapticBackend {
    fn vibrate(&self, timeline: &[u32]) {
        log!("haptic cue: {:?}ms", timeline);
    }
}

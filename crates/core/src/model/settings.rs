use serde::{Deserialize, Serialize};

/// Text-to-speech configuration for the session.
///
/// Passed into the view and the narrator at construction and mutated only
/// through `set_enabled`; a toggle takes effect on the next narration call,
/// never retroactively on speech already queued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationSettings {
    enabled: bool,
    rate: f32,
    pitch: f32,
    lang: String,
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: 1.0,
            pitch: 1.0,
            lang: "en-US".to_string(),
        }
    }
}

impl NarrationSettings {
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The single mutation point for the narration flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }
}

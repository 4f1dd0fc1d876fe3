//! Read-aloud of question and feedback text through the webview's
//! speech synthesis API.
//!
//! Utterances queue and play back-to-back; nothing cancels speech already
//! in flight.

use dioxus::document::eval;

use quiz_core::model::NarrationSettings;

/// Build the speech script for `text`, or `None` when narration is disabled
/// or there is nothing to say.
#[must_use]
pub fn speech_script(text: &str, settings: &NarrationSettings) -> Option<String> {
    if !settings.enabled() || text.trim().is_empty() {
        return None;
    }

    Some(format!(
        r#"(function() {{
            if (!window.speechSynthesis) return;
            const msg = new SpeechSynthesisUtterance({text:?});
            msg.rate = {rate};
            msg.pitch = {pitch};
            msg.lang = {lang:?};
            window.speechSynthesis.speak(msg);
        }})();"#,
        text = text,
        rate = settings.rate(),
        pitch = settings.pitch(),
        lang = settings.lang(),
    ))
}

/// Speak `text` if narration is enabled. The settings are consulted per
/// call, so a toggle applies from the next narration onward.
pub fn narrate(text: &str, settings: &NarrationSettings) {
    if let Some(script) = speech_script(text, settings) {
        let _ = eval(&script);
    }
}

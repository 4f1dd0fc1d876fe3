//! Wire types for the quiz server's JSON surface.
//!
//! The framing is server-defined; numeric fields default to zero when absent
//! so a sparse payload degrades to a 0% progress bar instead of a parse
//! failure.

use serde::{Deserialize, Serialize};

/// Response of `GET /quiz/{category}/get_question`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionPayload {
    #[serde(default)]
    pub finished: bool,
    /// Present on finished payloads; some server versions omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub question_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Body of `POST /quiz/{category}/answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub selected: String,
}

/// Response of `POST /quiz/{category}/answer`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerPayload {
    #[serde(default)]
    pub feedback_msg: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub correct: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub question_number: u32,
}

#![forbid(unsafe_code)]

pub mod backend;
pub mod error;
pub mod http;
pub mod quiz_flow;
pub mod retry;
pub mod scripted;
pub mod wire;

pub use backend::QuizBackend;
pub use error::{BackendError, QuizFlowError};
pub use http::{HttpQuizClient, ServerConfig};
pub use quiz_flow::{AnswerOutcome, QuizFlowService, QuizTurn};
pub use retry::RetryPolicy;
pub use scripted::{ScriptedQuestion, ScriptedQuizServer};

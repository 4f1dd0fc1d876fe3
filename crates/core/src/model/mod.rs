mod category;
mod feedback;
mod question;
mod settings;
mod summary;

pub use category::{CategoryError, CategoryKey};
pub use feedback::{AnswerFeedback, OptionMark, mark_options};
pub use question::{QuestionError, QuizQuestion};
pub use settings::NarrationSettings;
pub use summary::{QuizSummary, SummaryError};

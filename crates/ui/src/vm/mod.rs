mod quiz_vm;

pub use quiz_vm::{OptionRow, QuizIntent, QuizOutcome, QuizPhase, QuizVm};

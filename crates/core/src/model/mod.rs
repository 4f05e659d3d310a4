mod ids;
mod quiz;
mod score_band;
mod submission;

pub use ids::{OptionLetter, QuestionNumber, QuizId};
pub use quiz::{Question, QuestionError, QuizDocument, QuizOption};
pub use score_band::{ScoreBand, parse_score_bands};
pub use submission::{
    AnswerSheet, NO_INTERPRETATION, QuestionOutcome, SubmissionResult, UserChoice,
};

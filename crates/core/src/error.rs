use thiserror::Error;

use crate::model::QuestionError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid question number: {0:?}")]
    InvalidQuestionNumber(String),

    #[error("invalid option letter: {0:?}")]
    InvalidOptionLetter(String),

    #[error("invalid quiz id: {0:?}")]
    InvalidQuizId(String),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

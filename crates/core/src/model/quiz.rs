use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{OptionLetter, QuestionNumber};
use crate::model::score_band::{ScoreBand, parse_score_bands};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("question must have at least one option")]
    NoOptions,

    #[error("question has more than one correct option")]
    MultipleCorrect,
}

//
// ─── OPTION ────────────────────────────────────────────────────────────────────
//

/// One lettered choice of a question. `text` never contains option markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub letter: OptionLetter,
    pub text: String,
    pub is_correct: bool,
}

impl QuizOption {
    pub fn new(letter: OptionLetter, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            letter,
            text: text.into(),
            is_correct,
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A numbered question with its options, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    number: QuestionNumber,
    text: String,
    options: Vec<QuizOption>,
}

impl Question {
    /// Creates a question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` for blank text,
    /// `QuestionError::NoOptions` when `options` is empty, and
    /// `QuestionError::MultipleCorrect` when more than one option is correct.
    pub fn new(
        number: QuestionNumber,
        text: impl Into<String>,
        options: Vec<QuizOption>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if options.iter().filter(|option| option.is_correct).count() > 1 {
            return Err(QuestionError::MultipleCorrect);
        }

        Ok(Self {
            number,
            text: text.trim().to_owned(),
            options,
        })
    }

    // Accessors
    #[must_use]
    pub fn number(&self) -> QuestionNumber {
        self.number
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.is_correct)
    }

    /// Letter of the correct option, if the source marked one.
    #[must_use]
    pub fn correct_letter(&self) -> Option<OptionLetter> {
        self.correct_option().map(|option| option.letter)
    }

    #[must_use]
    pub fn option(&self, letter: OptionLetter) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.letter == letter)
    }
}

//
// ─── DOCUMENT ──────────────────────────────────────────────────────────────────
//

/// Fully parsed representation of one quiz file. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizDocument {
    title: String,
    instructions: String,
    questions: Vec<Question>,
    scoring_text: String,
    score_bands: Vec<ScoreBand>,
}

impl QuizDocument {
    /// Builds a document; score bands are derived from `scoring_text` here.
    pub fn new(
        title: impl Into<String>,
        instructions: impl Into<String>,
        questions: Vec<Question>,
        scoring_text: impl Into<String>,
    ) -> Self {
        let scoring_text = scoring_text.into();
        let score_bands = parse_score_bands(&scoring_text);
        Self {
            title: title.into(),
            instructions: instructions.into(),
            questions,
            scoring_text,
            score_bands,
        }
    }

    // Accessors
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn scoring_text(&self) -> &str {
        &self.scoring_text
    }

    #[must_use]
    pub fn score_bands(&self) -> &[ScoreBand] {
        &self.score_bands
    }

    /// First question carrying `number`, in source order.
    #[must_use]
    pub fn question(&self, number: QuestionNumber) -> Option<&Question> {
        self.questions.iter().find(|question| question.number == number)
    }

    /// First score band whose range contains `score`.
    #[must_use]
    pub fn band_for(&self, score: u32) -> Option<&ScoreBand> {
        self.score_bands.iter().find(|band| band.contains(score))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::ids::{OptionLetter, QuestionNumber};
use crate::model::score_band::ScoreBand;

/// Shown when the score falls outside every band.
pub const NO_INTERPRETATION: &str = "No result interpretation available.";

//
// ─── ANSWER SHEET ──────────────────────────────────────────────────────────────
//

/// Letters picked by the user, keyed by question number. A missing entry means
/// the question was left unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    answers: BTreeMap<QuestionNumber, OptionLetter>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a selection, replacing any earlier pick for the same question.
    pub fn select(&mut self, number: QuestionNumber, letter: OptionLetter) {
        self.answers.insert(number, letter);
    }

    pub fn clear(&mut self, number: QuestionNumber) {
        self.answers.remove(&number);
    }

    #[must_use]
    pub fn get(&self, number: QuestionNumber) -> Option<OptionLetter> {
        self.answers.get(&number).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(QuestionNumber, OptionLetter)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (QuestionNumber, OptionLetter)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

//
// ─── RESULT ────────────────────────────────────────────────────────────────────
//

/// What the user chose for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UserChoice {
    Answered(OptionLetter),
    Unanswered,
}

impl UserChoice {
    #[must_use]
    pub fn letter(self) -> Option<OptionLetter> {
        match self {
            UserChoice::Answered(letter) => Some(letter),
            UserChoice::Unanswered => None,
        }
    }
}

impl From<Option<OptionLetter>> for UserChoice {
    fn from(value: Option<OptionLetter>) -> Self {
        value.map_or(UserChoice::Unanswered, UserChoice::Answered)
    }
}

/// Grading detail for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOutcome {
    pub number: QuestionNumber,
    pub user_choice: UserChoice,
    /// `None` when the source marked no option as correct.
    pub correct_letter: Option<OptionLetter>,
    pub is_match: bool,
}

/// Outcome of grading one submission. Built per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub outcomes: Vec<QuestionOutcome>,
    pub score: u32,
    pub max_score: u32,
    pub band: Option<ScoreBand>,
}

impl SubmissionResult {
    /// Detail for the first question carrying `number`.
    #[must_use]
    pub fn outcome(&self, number: QuestionNumber) -> Option<&QuestionOutcome> {
        self.outcomes.iter().find(|outcome| outcome.number == number)
    }

    /// Band text, or the stock message when no band matched.
    #[must_use]
    pub fn interpretation(&self) -> &str {
        self.band
            .as_ref()
            .map_or(NO_INTERPRETATION, |band| band.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(n: u32) -> QuestionNumber {
        QuestionNumber::new(n).unwrap()
    }

    fn letter(c: char) -> OptionLetter {
        OptionLetter::new(c).unwrap()
    }

    #[test]
    fn answer_sheet_select_replaces_and_clears() {
        let mut sheet = AnswerSheet::new();
        sheet.select(number(1), letter('A'));
        sheet.select(number(1), letter('C'));
        assert_eq!(sheet.get(number(1)), Some(letter('C')));
        assert_eq!(sheet.len(), 1);

        sheet.clear(number(1));
        assert!(sheet.is_empty());
        assert_eq!(sheet.get(number(1)), None);
    }

    #[test]
    fn user_choice_from_option() {
        assert_eq!(UserChoice::from(None), UserChoice::Unanswered);
        assert_eq!(
            UserChoice::from(Some(letter('B'))).letter(),
            Some(letter('B'))
        );
    }

    #[test]
    fn interpretation_falls_back_to_stock_message() {
        let result = SubmissionResult {
            outcomes: Vec::new(),
            score: 0,
            max_score: 0,
            band: None,
        };
        assert_eq!(result.interpretation(), NO_INTERPRETATION);
    }
}

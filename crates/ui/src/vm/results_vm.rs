use quiz_core::model::{QuestionOutcome, SubmissionResult, UserChoice};

const UNANSWERED: &str = "Unanswered";
const NOT_MARKED: &str = "Not marked";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub question: u32,
    pub your_answer: String,
    pub correct_answer: String,
    pub verdict: &'static str,
}

impl From<&QuestionOutcome> for ResultRowVm {
    fn from(outcome: &QuestionOutcome) -> Self {
        let your_answer = match outcome.user_choice {
            UserChoice::Answered(letter) => letter.to_string(),
            UserChoice::Unanswered => UNANSWERED.to_owned(),
        };
        let correct_answer = outcome
            .correct_letter
            .map_or_else(|| NOT_MARKED.to_owned(), |letter| letter.to_string());
        // Rows that do not count toward the maximum are not called wrong.
        let verdict = if outcome.is_match {
            "\u{2705} Correct"
        } else if outcome.user_choice == UserChoice::Unanswered || outcome.correct_letter.is_none()
        {
            "Not scored"
        } else {
            "\u{274C} Wrong"
        };

        Self {
            question: outcome.number.value(),
            your_answer,
            correct_answer,
            verdict,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_line: String,
    pub assessment: String,
    pub rows: Vec<ResultRowVm>,
}

#[must_use]
pub fn map_results(result: &SubmissionResult) -> ResultsVm {
    ResultsVm {
        score_line: format!("Your score: {}/{}", result.score, result.max_score),
        assessment: result.interpretation().to_owned(),
        rows: result.outcomes.iter().map(ResultRowVm::from).collect(),
    }
}

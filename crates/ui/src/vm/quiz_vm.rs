use quiz_core::model::{OptionLetter, Question, QuestionNumber, QuizDocument};
use quiz_core::parser::CORRECT;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub letter: OptionLetter,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number: QuestionNumber,
    pub heading: String,
    pub options: Vec<OptionVm>,
}

impl QuestionVm {
    fn from_question(question: &Question, show_correct: bool) -> Self {
        let options = question
            .options()
            .iter()
            .map(|option| {
                let mut label = format!("{}. {}", option.letter, option.text);
                if show_correct && option.is_correct {
                    label.push(' ');
                    label.push(CORRECT);
                }
                OptionVm {
                    letter: option.letter,
                    label,
                }
            })
            .collect();

        Self {
            number: question.number(),
            heading: format!("{}. {}", question.number(), question.text()),
            options,
        }
    }
}

/// Form rows for every question, with the correct option flagged when
/// `show_correct` is on.
#[must_use]
pub fn map_questions(doc: &QuizDocument, show_correct: bool) -> Vec<QuestionVm> {
    doc.questions()
        .iter()
        .map(|question| QuestionVm::from_question(question, show_correct))
        .collect()
}

use crate::model::{AnswerSheet, QuestionOutcome, QuizDocument, SubmissionResult, UserChoice};

/// Grades a submission against the parsed correct answers.
///
/// Only questions that have a correct option and an answer from the user
/// count toward `max_score`; unanswered questions stay out of the
/// denominator. The band is the first scoring line whose range contains the
/// score.
#[must_use]
pub fn grade(doc: &QuizDocument, answers: &AnswerSheet) -> SubmissionResult {
    let mut score = 0;
    let mut max_score = 0;

    let outcomes = doc
        .questions()
        .iter()
        .map(|question| {
            let user_choice = UserChoice::from(answers.get(question.number()));
            let correct_letter = question.correct_letter();
            let is_match = matches!(
                (user_choice, correct_letter),
                (UserChoice::Answered(picked), Some(correct)) if picked == correct
            );

            if correct_letter.is_some() && user_choice != UserChoice::Unanswered {
                max_score += 1;
            }
            if is_match {
                score += 1;
            }

            QuestionOutcome {
                number: question.number(),
                user_choice,
                correct_letter,
                is_match,
            }
        })
        .collect();

    SubmissionResult {
        outcomes,
        score,
        max_score,
        band: doc.band_for(score).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NO_INTERPRETATION, OptionLetter, QuestionNumber};
    use crate::parser::parse_quiz;

    fn number(n: u32) -> QuestionNumber {
        QuestionNumber::new(n).unwrap()
    }

    fn letter(c: char) -> OptionLetter {
        OptionLetter::new(c).unwrap()
    }

    const TWO_QUESTIONS: &str = "Quiz\nInstructions:\nGo\n\
        1. First?\nA. Yes \u{2705}\nB. No\n\
        2. Second?\nA. Yes\nB. No \u{2705}\n\
        \u{1F525} Scoring:\n0-0 Points: Nothing yet\n1-1 Points: One right\n2-2 Points: Perfect\n";

    #[test]
    fn denominator_counts_answered_questions_only() {
        let doc = parse_quiz(TWO_QUESTIONS);
        let answers: AnswerSheet = [(number(1), letter('A'))].into_iter().collect();

        let result = grade(&doc, &answers);
        assert_eq!(result.max_score, 1);
        assert_eq!(result.score, 1);
        assert_eq!(result.interpretation(), "1-1 Points: One right");
    }

    #[test]
    fn per_question_detail_covers_every_question() {
        let doc = parse_quiz(TWO_QUESTIONS);
        let answers: AnswerSheet = [(number(1), letter('B'))].into_iter().collect();

        let result = grade(&doc, &answers);
        assert_eq!(
            result.outcomes,
            vec![
                QuestionOutcome {
                    number: number(1),
                    user_choice: UserChoice::Answered(letter('B')),
                    correct_letter: Some(letter('A')),
                    is_match: false,
                },
                QuestionOutcome {
                    number: number(2),
                    user_choice: UserChoice::Unanswered,
                    correct_letter: Some(letter('B')),
                    is_match: false,
                },
            ]
        );
        assert_eq!(result.score, 0);
        assert_eq!(result.interpretation(), "0-0 Points: Nothing yet");
    }

    #[test]
    fn question_without_correct_option_is_not_scored() {
        let doc = parse_quiz("1. Opinion?\nA. Yes\nB. No\n2. Fact?\nA. True \u{2705}\nB. False\n");
        let answers: AnswerSheet = [(number(1), letter('A')), (number(2), letter('A'))]
            .into_iter()
            .collect();

        let result = grade(&doc, &answers);
        assert_eq!(result.max_score, 1);
        assert_eq!(result.score, 1);
        let opinion = result.outcome(number(1)).unwrap();
        assert_eq!(opinion.correct_letter, None);
        assert!(!opinion.is_match);
    }

    #[test]
    fn band_lookup_uses_first_matching_line() {
        let doc = parse_quiz(
            "1. a?\nA. x \u{2705}\n2. b?\nA. x \u{2705}\n3. c?\nA. x \u{2705}\n4. d?\nA. x \u{2705}\n\
             \u{1F4AF} Scoring:\n0-2 Points: Low\n3-5 Points: High\n4-4 Points: Shadowed\n",
        );
        let answers: AnswerSheet = (1..=4).map(|n| (number(n), letter('A'))).collect();

        let result = grade(&doc, &answers);
        assert_eq!(result.score, 4);
        assert_eq!(result.band.as_ref().map(|b| b.text.as_str()), Some("3-5 Points: High"));
    }

    #[test]
    fn score_outside_every_band_has_no_interpretation() {
        let doc = parse_quiz("1. a?\nA. x \u{2705}\n\u{1F525} Scoring:\n5-9 Points: Later\n");
        let result = grade(&doc, &AnswerSheet::new());
        assert_eq!(result.score, 0);
        assert_eq!(result.max_score, 0);
        assert!(result.band.is_none());
        assert_eq!(result.interpretation(), NO_INTERPRETATION);
    }

    #[test]
    fn answers_for_unknown_questions_are_ignored() {
        let doc = parse_quiz(TWO_QUESTIONS);
        let answers: AnswerSheet = [(number(9), letter('A'))].into_iter().collect();
        let result = grade(&doc, &answers);
        assert_eq!(result.max_score, 0);
        assert_eq!(result.outcomes.len(), 2);
    }
}

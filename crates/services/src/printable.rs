use std::fmt::Write as _;

use quiz_core::model::{Question, QuizDocument};
use quiz_core::sanitize;

/// Which printable variant to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// Questions and options only.
    Blank,
    /// Correct options highlighted and tagged.
    AnswerKey,
}

impl PrintMode {
    /// Suggested download name for the converted document.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            PrintMode::Blank => "blank_quiz.pdf",
            PrintMode::AnswerKey => "quiz_with_answers.pdf",
        }
    }

    #[must_use]
    pub fn shows_answers(self) -> bool {
        matches!(self, PrintMode::AnswerKey)
    }
}

const PRINT_CSS: &str = "\
body { font-family: Arial, Helvetica, sans-serif; margin: 20px; }
.title { font-size: 24px; font-weight: bold; text-align: center; margin-bottom: 20px; }
.instructions { font-style: italic; margin-bottom: 20px; }
.question { font-weight: bold; margin-top: 15px; }
.option { margin-left: 20px; margin-bottom: 5px; }
.correct { font-weight: bold; }
.scoring { margin-top: 20px; font-weight: bold; }
";

const ANSWER_TAG: &str = "[CORRECT]";

/// Glyph-free, escaped text safe to place inside an element.
fn printable_text(raw: &str) -> String {
    ammonia::clean_text(&sanitize(raw))
}

/// Render a quiz as a self-contained HTML page for the document converter.
#[must_use]
pub fn render_printable(doc: &QuizDocument, mode: PrintMode) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    let _ = writeln!(html, "<style>\n{PRINT_CSS}</style>");
    html.push_str("</head>\n<body>\n");

    let _ = writeln!(html, "<div class=\"title\">{}</div>", printable_text(doc.title()));
    let _ = writeln!(
        html,
        "<div class=\"instructions\">{}</div>",
        printable_text(doc.instructions())
    );

    for question in doc.questions() {
        push_question(&mut html, question, mode);
    }

    html.push_str("<div class=\"scoring\">Scoring</div>\n");
    let _ = writeln!(html, "<div>{}</div>", printable_text(doc.scoring_text()));
    html.push_str("</body>\n</html>\n");
    html
}

fn push_question(html: &mut String, question: &Question, mode: PrintMode) {
    let _ = writeln!(
        html,
        "<div class=\"question\">{}. {}</div>",
        question.number(),
        printable_text(question.text())
    );
    for option in question.options() {
        let text = printable_text(&option.text);
        if mode.shows_answers() && option.is_correct {
            let _ = writeln!(
                html,
                "<div class=\"option correct\">{}. {text} {ANSWER_TAG}</div>",
                option.letter
            );
        } else {
            let _ = writeln!(html, "<div class=\"option\">{}. {text}</div>", option.letter);
        }
    }
}

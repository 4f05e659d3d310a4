//! Single-pass extraction of a [`QuizDocument`] from quiz text.
//!
//! Layout of a quiz file:
//!
//! ```text
//! <title>
//! Instructions:
//! <instructions>
//! 1. <question>
//! A. <option>
//! B. ✅ <option>
//! 2. <question>
//! ...
//! 🔥 Scoring:
//! 0-2 Points: ...
//! ```
//!
//! Parsing is total: anything that does not fit degrades to defaults.

mod markers;
mod options;

use crate::model::{Question, QuestionNumber, QuizDocument};

pub use markers::{CORRECT, FIRE, HUNDRED, WRONG};

/// Title used when the file has no `Instructions:` marker.
pub const DEFAULT_TITLE: &str = "Quiz";

const INSTRUCTIONS_MARKER: &str = "Instructions:";

/// Parses raw quiz text. Never fails.
#[must_use]
pub fn parse_quiz(raw: &str) -> QuizDocument {
    let text = raw.strip_prefix('\u{FEFF}').unwrap_or(raw);
    let sections = Sections::locate(text);

    let title = sections.title.map_or(DEFAULT_TITLE, str::trim);
    let questions = parse_questions(sections.body);
    let scoring = sections.scoring.map_or("", str::trim);

    QuizDocument::new(title, sections.instructions.trim(), questions, scoring)
}

//
// ─── SECTIONS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sections<'a> {
    title: Option<&'a str>,
    instructions: &'a str,
    body: &'a str,
    scoring: Option<&'a str>,
}

impl<'a> Sections<'a> {
    fn locate(text: &'a str) -> Self {
        let marker = text.find(INSTRUCTIONS_MARKER);
        let title = marker.map(|at| &text[..at]);
        let after_marker = marker.map(|at| at + INSTRUCTIONS_MARKER.len());

        let search_from = after_marker.unwrap_or(0);
        let first_question = lines_from(text, search_from)
            .find(|(_, line)| matches!(question_marker(line), Some((number, _)) if number.value() == 1))
            .map(|(offset, _)| offset);

        let instructions = match (after_marker, first_question) {
            (Some(start), Some(end)) => &text[start..end],
            _ => "",
        };

        let body_start = first_question.unwrap_or(search_from);
        let scoring = lines_from(text, body_start).find_map(|(offset, line)| {
            markers::scoring_label_end(line).map(|label_end| (offset, offset + label_end))
        });
        let body_end = scoring.map_or(text.len(), |(line_start, _)| line_start);

        Self {
            title,
            instructions,
            body: &text[body_start..body_end],
            scoring: scoring.map(|(_, label_end)| &text[label_end..]),
        }
    }
}

/// Lines of `text[from..]` with their absolute byte offsets, line endings
/// removed.
fn lines_from(text: &str, from: usize) -> impl Iterator<Item = (usize, &str)> {
    text[from..]
        .split_inclusive('\n')
        .scan(from, |offset, chunk| {
            let start = *offset;
            *offset += chunk.len();
            Some((start, chunk.trim_end_matches(['\n', '\r'])))
        })
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// `<n>. <text>` at the start of a line, `n` a positive integer. A bare
/// `<n>.` also counts, with empty text.
fn question_marker(line: &str) -> Option<(QuestionNumber, &str)> {
    let line = line.trim_start();
    let digits = line.find(|c: char| !c.is_ascii_digit())?;
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let number = line[..digits].parse::<u32>().ok()?;
    let number = QuestionNumber::new(number).ok()?;
    Some((number, rest.trim()))
}

#[derive(Debug)]
struct Block<'a> {
    number: QuestionNumber,
    text: &'a str,
    lines: Vec<&'a str>,
}

impl Block<'_> {
    fn into_question(self) -> Option<Question> {
        if self.text.is_empty() {
            return None;
        }
        let options = options::parse_options(&self.lines);
        Question::new(self.number, self.text, options).ok()
    }
}

/// Each numbered line opens a block that runs until the next numbered line.
fn parse_questions(body: &str) -> Vec<Question> {
    let mut blocks: Vec<Block<'_>> = Vec::new();
    for (_, line) in lines_from(body, 0) {
        if let Some((number, text)) = question_marker(line) {
            blocks.push(Block {
                number,
                text,
                lines: Vec::new(),
            });
        } else if let Some(block) = blocks.last_mut() {
            block.lines.push(line);
        }
    }

    blocks.into_iter().filter_map(Block::into_question).collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

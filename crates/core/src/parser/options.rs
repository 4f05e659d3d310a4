use std::sync::LazyLock;

use regex_lite::Regex;

use crate::model::{OptionLetter, QuizOption};
use crate::parser::markers::{self, clean_option_text};

/// `A. text`, `B text`, `C. ✅ text`: letter, optional period, whitespace.
static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z])\.?\s+(.*)$").expect("option line pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OptionLine<'a> {
    line_index: usize,
    letter: OptionLetter,
    body: &'a str,
}

/// Where the correctness marker of a question was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CorrectMarker {
    /// On the option's own line.
    Inline { option: usize },
    /// On the line right after the option.
    Positional { option: usize },
}

impl CorrectMarker {
    fn option(self) -> usize {
        match self {
            CorrectMarker::Inline { option } | CorrectMarker::Positional { option } => option,
        }
    }
}

fn option_line(line_index: usize, line: &str) -> Option<OptionLine<'_>> {
    let caps = OPTION_LINE.captures(line.trim())?;
    let letter = caps.get(1)?.as_str().chars().next()?;
    Some(OptionLine {
        line_index,
        letter: OptionLetter::new(letter).ok()?,
        body: caps.get(2)?.as_str(),
    })
}

/// First option whose own line carries the correctness marker. Markers on
/// later options are ignored.
fn inline_marker(candidates: &[OptionLine<'_>]) -> Option<CorrectMarker> {
    candidates
        .iter()
        .position(|candidate| markers::has_correct(candidate.body))
        .map(|option| CorrectMarker::Inline { option })
}

/// First option followed by a non-option line that carries the marker.
fn positional_marker(lines: &[&str], candidates: &[OptionLine<'_>]) -> Option<CorrectMarker> {
    candidates
        .iter()
        .position(|candidate| {
            lines
                .iter()
                .copied()
                .enumerate()
                .skip(candidate.line_index + 1)
                .find(|(_, line)| !line.trim().is_empty())
                .is_some_and(|(index, line)| {
                    option_line(index, line).is_none() && markers::has_correct(line)
                })
        })
        .map(|option| CorrectMarker::Positional { option })
}

/// Locates the correct option: inline markers first, the positional layout
/// only when no option line carries one.
fn detect_correct(lines: &[&str], candidates: &[OptionLine<'_>]) -> Option<CorrectMarker> {
    inline_marker(candidates).or_else(|| positional_marker(lines, candidates))
}

fn option_candidates<'a>(lines: &[&'a str]) -> Vec<OptionLine<'a>> {
    lines
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| option_line(index, line))
        .collect()
}

/// Options of one question block. `lines` excludes the question line.
pub(crate) fn parse_options(lines: &[&str]) -> Vec<QuizOption> {
    let candidates = option_candidates(lines);
    let correct = detect_correct(lines, &candidates).map(CorrectMarker::option);

    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            QuizOption::new(
                candidate.letter,
                clean_option_text(candidate.body),
                correct == Some(index),
            )
        })
        .collect()
}

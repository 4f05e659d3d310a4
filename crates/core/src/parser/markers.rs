//! Glyphs with structural meaning in quiz files.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Marks the correct option (WHITE HEAVY CHECK MARK).
pub const CORRECT: char = '\u{2705}';
/// Marks a wrong option (CROSS MARK).
pub const WRONG: char = '\u{274C}';
/// Introduces the scoring section (FIRE).
pub const FIRE: char = '\u{1F525}';
/// Introduces the scoring section (HUNDRED POINTS SYMBOL).
pub const HUNDRED: char = '\u{1F4AF}';

const VARIATION_SELECTOR: char = '\u{FE0F}';

pub const SCORING_LABEL: &str = "Scoring:";

static EMPTY_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)").expect("empty parens pattern is valid"));

#[must_use]
pub fn has_correct(text: &str) -> bool {
    text.contains(CORRECT)
}

/// Drops option markers and the empty parentheses they tend to leave behind.
#[must_use]
pub fn clean_option_text(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !matches!(*c, CORRECT | WRONG | VARIATION_SELECTOR))
        .collect();
    let stripped = EMPTY_PARENS.replace_all(&stripped, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Byte offset just past `Scoring:` when `line` opens the scoring section.
#[must_use]
pub fn scoring_label_end(line: &str) -> Option<usize> {
    let trimmed = line.trim_start();
    let glyph = trimmed.chars().next().filter(|c| matches!(*c, FIRE | HUNDRED))?;
    let after_glyph = &trimmed[glyph.len_utf8()..];
    let after_glyph = after_glyph
        .strip_prefix(VARIATION_SELECTOR)
        .unwrap_or(after_glyph);
    let label = after_glyph.trim_start();
    if label.len() == after_glyph.len() || !label.starts_with(SCORING_LABEL) {
        return None;
    }
    Some(line.len() - label.len() + SCORING_LABEL.len())
}

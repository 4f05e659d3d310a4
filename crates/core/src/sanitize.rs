//! Plain-text rendering of decorative glyphs for contexts that cannot show
//! emoji, such as printed documents.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::parser::{CORRECT, FIRE, HUNDRED, WRONG};

const GLYPH_LABELS: [(char, &str); 4] = [
    (CORRECT, "[CORRECT]"),
    (WRONG, "[WRONG]"),
    (FIRE, "[FIRE]"),
    (HUNDRED, "[100]"),
];

/// Emoji blocks plus the joiners and presentation selectors that glue them.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}", // emoticons
        r"\x{1F300}-\x{1F5FF}", // symbols & pictographs
        r"\x{1F680}-\x{1F6FF}", // transport & map
        r"\x{1F700}-\x{1F77F}", // alchemical
        r"\x{1F780}-\x{1F7FF}", // geometric shapes extended
        r"\x{1F800}-\x{1F8FF}", // supplemental arrows-c
        r"\x{1F900}-\x{1F9FF}", // supplemental symbols & pictographs
        r"\x{1FA00}-\x{1FA6F}", // chess
        r"\x{1FA70}-\x{1FAFF}", // symbols & pictographs extended-a
        r"\x{2600}-\x{27BF}",   // misc symbols, dingbats
        r"\x{1F100}-\x{1F251}", // enclosed alphanumerics & ideographs
        r"\x{24C2}",
        r"\x{2B50}\x{2B55}",
        r"\x{200D}\x{FE0F}",
        "]+",
    ))
    .expect("emoji pattern is valid")
});

/// Maps the known option/section glyphs to bracketed labels, then removes
/// every other emoji. Idempotent; ASCII and Latin text pass through untouched.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let mut labelled = String::with_capacity(text.len());
    for c in text.chars() {
        match GLYPH_LABELS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, label)) => labelled.push_str(label),
            None => labelled.push(c),
        }
    }
    EMOJI.replace_all(&labelled, "").into_owned()
}

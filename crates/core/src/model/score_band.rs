use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Serialize;

/// `<low>-<high> Points:` with a hyphen or an en dash as separator.
static BAND_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*[-\x{2013}]\s*(\d+)\s*Points:").expect("band range pattern is valid")
});

/// Scoring-range-to-interpretation mapping taken from one line of the
/// scoring section. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBand {
    pub low: u32,
    pub high: u32,
    pub text: String,
}

impl ScoreBand {
    #[must_use]
    pub fn contains(&self, score: u32) -> bool {
        (self.low..=self.high).contains(&score)
    }

    /// Reads a band from a single scoring line, `None` when the line has no
    /// range.
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let caps = BAND_RANGE.captures(line)?;
        let low = caps.get(1)?.as_str().parse().ok()?;
        let high = caps.get(2)?.as_str().parse().ok()?;
        Some(Self {
            low,
            high,
            text: line.to_owned(),
        })
    }
}

/// Bands in the order they appear in the scoring text.
#[must_use]
pub fn parse_score_bands(scoring_text: &str) -> Vec<ScoreBand> {
    scoring_text.lines().filter_map(ScoreBand::from_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hyphen_and_en_dash_ranges() {
        let bands = parse_score_bands("0-2 Points: Low\n\n3\u{2013}5 Points: High\nThanks!");
        assert_eq!(
            bands,
            vec![
                ScoreBand {
                    low: 0,
                    high: 2,
                    text: "0-2 Points: Low".into()
                },
                ScoreBand {
                    low: 3,
                    high: 5,
                    text: "3\u{2013}5 Points: High".into()
                },
            ]
        );
    }

    #[test]
    fn band_bounds_are_inclusive() {
        let band = ScoreBand::from_line("  3-5 Points: High  ").unwrap();
        assert_eq!(band.text, "3-5 Points: High");
        assert!(!band.contains(2));
        assert!(band.contains(3));
        assert!(band.contains(5));
        assert!(!band.contains(6));
    }

    #[test]
    fn ignores_lines_without_points_label() {
        assert!(ScoreBand::from_line("0-2 you did fine").is_none());
        assert!(ScoreBand::from_line("Points: 4").is_none());
        assert!(ScoreBand::from_line("   ").is_none());
    }

    #[test]
    fn accepts_emoji_prefixed_lines() {
        let band = ScoreBand::from_line("\u{1F525} 8-10 Points: On fire").unwrap();
        assert_eq!((band.low, band.high), (8, 10));
    }
}

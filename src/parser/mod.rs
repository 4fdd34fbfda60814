mod patterns;
mod types;

pub use patterns::{DEFAULT_PATTERNS, DEFAULT_SEASON};
pub use types::*;

use regex::Captures;
use tracing::trace;

/// Detect season and episode numbers in a filename using the built-in patterns
pub fn parse_episode_tag(filename: &str) -> Option<EpisodeTag> {
    parse_with(&DEFAULT_PATTERNS, filename)
}

/// Detect season and episode numbers using a caller-supplied pattern list.
///
/// Patterns are tried in order and the first one that matches anywhere in the
/// name decides the result, even if its numbers fail to convert.
pub fn parse_with(patterns: &[EpisodePattern], filename: &str) -> Option<EpisodeTag> {
    for pattern in patterns {
        if let Some(captures) = pattern.regex.captures(filename) {
            trace!(filename, pattern = pattern.name, "Episode pattern matched");
            return tag_from_captures(&captures, pattern.shape);
        }
    }

    trace!(filename, "No episode pattern matched");
    None
}

fn tag_from_captures(captures: &Captures<'_>, shape: CaptureShape) -> Option<EpisodeTag> {
    let number = |group: usize| -> Option<u32> { parse_number(captures.get(group)?.as_str()) };

    match shape {
        CaptureShape::SeasonAndEpisode => Some(EpisodeTag::new(number(1)?, number(2)?)),
        CaptureShape::EpisodeOnly => Some(EpisodeTag::new(DEFAULT_SEASON, number(1)?)),
    }
}

/// Convert a run of decimal digits to a number.
///
/// Besides ASCII, Arabic-Indic (U+0660..U+0669) and Extended Arabic-Indic
/// (U+06F0..U+06F9) digits are accepted. Other scripts yield `None`.
fn parse_number(digits: &str) -> Option<u32> {
    digits.chars().try_fold(0u32, |value, c| {
        let digit = match c {
            '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
            '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
            _ => c.to_digit(10)?,
        };
        value.checked_mul(10)?.checked_add(digit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn tag(season: u32, episode: u32) -> Option<EpisodeTag> {
        Some(EpisodeTag::new(season, episode))
    }

    // ============ Season + Episode Patterns ============

    #[test]
    fn test_parse_sxxexx() {
        assert_eq!(parse_episode_tag("Show.S02E05.mkv"), tag(2, 5));
        assert_eq!(parse_episode_tag("show.s1e3.720p.mp4"), tag(1, 3));
    }

    #[test]
    fn test_parse_cross_format() {
        assert_eq!(parse_episode_tag("Show.3x11.mkv"), tag(3, 11));
        assert_eq!(parse_episode_tag("Show 1X02.srt"), tag(1, 2));
    }

    #[test]
    fn test_parse_season_episode_words() {
        assert_eq!(
            parse_episode_tag("The Show Season 2 - Episode 4.mkv"),
            tag(2, 4)
        );
        assert_eq!(parse_episode_tag("season_10_blah_episode-12.mkv"), tag(10, 12));
    }

    #[test]
    fn test_parse_fasl_ghesmat() {
        assert_eq!(parse_episode_tag("Serial Fasl 3 Ghesmat 07.mkv"), tag(3, 7));
        assert_eq!(parse_episode_tag("fasl_1-ghesmat_2.mp4"), tag(1, 2));
    }

    // ============ Episode-only Pattern ============

    #[test]
    fn test_parse_episode_only_defaults_to_season_one() {
        assert_eq!(parse_episode_tag("Ep07.mkv"), tag(1, 7));
        assert_eq!(parse_episode_tag("Show E12.mkv"), tag(1, 12));
        assert_eq!(parse_episode_tag("Show ep-105.mkv"), tag(1, 105));
    }

    // ============ Ordering ============

    #[test]
    fn test_earlier_pattern_wins() {
        // Both S01E02 and 3x04 are present; the S..E.. rule is tried first
        assert_eq!(parse_episode_tag("3x04 S01E02.mkv"), tag(1, 2));
        // Season word beats the bare episode marker
        assert_eq!(parse_episode_tag("Season 5 Episode 6.mkv"), tag(5, 6));
    }

    #[test]
    fn test_only_first_two_digits_are_taken() {
        // S101E02 does not match S..E..; the cross rule has no x, so the
        // episode-only rule picks up "E02"
        assert_eq!(parse_episode_tag("S101E02.mkv"), tag(1, 2));
    }

    // ============ Misses ============

    #[test]
    fn test_parse_no_match() {
        assert_eq!(parse_episode_tag("random_clip.mkv"), None);
        assert_eq!(parse_episode_tag(""), None);
        assert_eq!(parse_episode_tag("mkv"), None);
    }

    #[test]
    fn test_parse_malformed_input_does_not_panic() {
        assert_eq!(parse_episode_tag("\u{0}\u{ffff}..//"), None);
        // Persian words carry no Latin markers, so nothing matches
        assert_eq!(parse_episode_tag("سریال فصل ۲ قسمت ۳.mkv"), None);
    }

    // ============ Non-ASCII Digits ============

    #[test]
    fn test_parse_persian_digits() {
        assert_eq!(parse_episode_tag("Ep۰۷.mkv"), tag(1, 7));
        assert_eq!(parse_episode_tag("Show.S۰۱E۰۲.mkv"), tag(1, 2));
        assert_eq!(parse_episode_tag("Serial Fasl ۳ Ghesmat ۱۲.mkv"), tag(3, 12));
    }

    #[test]
    fn test_parse_arabic_indic_digits() {
        assert_eq!(parse_episode_tag("Show ٢x٠٥.mkv"), tag(2, 5));
    }

    #[test]
    fn test_parse_number_digit_sets() {
        assert_eq!(parse_number("042"), Some(42));
        assert_eq!(parse_number("۱۰۵"), Some(105));
        assert_eq!(parse_number("٣"), Some(3));
        // Devanagari digits are not converted
        assert_eq!(parse_number("३"), None);
    }

    // ============ Custom Pattern Lists ============

    #[test]
    fn test_parse_with_custom_patterns() {
        let patterns = vec![EpisodePattern::new(
            "part",
            Regex::new(r"(?i)part[ _-]?(\d+)").unwrap(),
            CaptureShape::EpisodeOnly,
        )];

        assert_eq!(parse_with(&patterns, "Documentary Part 3.mkv"), tag(1, 3));
        assert_eq!(parse_with(&patterns, "Show.S02E05.mkv"), None);
        assert_eq!(parse_with(&[], "Show.S02E05.mkv"), None);
    }
}

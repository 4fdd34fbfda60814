use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{CaptureShape, EpisodePattern};

/// Season used when a filename only carries an episode marker
pub const DEFAULT_SEASON: u32 = 1;

fn rule(name: &'static str, pattern: &str, shape: CaptureShape) -> EpisodePattern {
    EpisodePattern::new(name, Regex::new(pattern).unwrap(), shape)
}

/// Built-in detection rules, in priority order
pub static DEFAULT_PATTERNS: Lazy<Vec<EpisodePattern>> = Lazy::new(|| {
    vec![
        // S01E02
        rule(
            "season-episode",
            r"(?i)s(\d{1,2})e(\d{1,2})",
            CaptureShape::SeasonAndEpisode,
        ),
        // 1x02
        rule(
            "cross",
            r"(?i)(\d{1,2})x(\d{1,2})",
            CaptureShape::SeasonAndEpisode,
        ),
        // Season 2 ... Episode 4
        rule(
            "season-word",
            r"(?i)season[ _-]?(\d{1,2}).*episode[ _-]?(\d{1,2})",
            CaptureShape::SeasonAndEpisode,
        ),
        // Fasl 2 ... Ghesmat 4 (transliterated Persian)
        rule(
            "fasl-ghesmat",
            r"(?i)fasl[ _-]?(\d{1,2}).*ghesmat[ _-]?(\d{1,2})",
            CaptureShape::SeasonAndEpisode,
        ),
        // E02, Ep02, Ep 102
        rule("episode-only", r"(?i)ep?[ _-]?(\d{1,3})", CaptureShape::EpisodeOnly),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_order() {
        let names: Vec<&str> = DEFAULT_PATTERNS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "season-episode",
                "cross",
                "season-word",
                "fasl-ghesmat",
                "episode-only"
            ]
        );
    }

    #[test]
    fn test_only_last_pattern_is_episode_only() {
        let (last, rest) = DEFAULT_PATTERNS.split_last().unwrap();
        assert_eq!(last.shape, CaptureShape::EpisodeOnly);
        assert!(rest
            .iter()
            .all(|p| p.shape == CaptureShape::SeasonAndEpisode));
    }
}

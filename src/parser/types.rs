use regex::Regex;

/// Season and episode numbers detected in a filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeTag {
    pub season: u32,
    pub episode: u32,
}

impl EpisodeTag {
    pub fn new(season: u32, episode: u32) -> Self {
        Self { season, episode }
    }
}

/// What the capture groups of a pattern stand for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureShape {
    /// Group 1 is the season, group 2 the episode
    SeasonAndEpisode,
    /// Group 1 is the episode; the season is assumed to be 1
    EpisodeOnly,
}

/// A single detection rule in the ordered pattern list
#[derive(Debug, Clone)]
pub struct EpisodePattern {
    pub name: &'static str,
    pub regex: Regex,
    pub shape: CaptureShape,
}

impl EpisodePattern {
    pub fn new(name: &'static str, regex: Regex, shape: CaptureShape) -> Self {
        Self { name, regex, shape }
    }
}

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::scanner::SeasonFolder;

/// One planned rename: a file and the name it will get
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePlanEntry {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    /// Name of the season folder the file lives in
    pub season_folder: String,
    pub original_name: String,
    pub new_name: String,
    /// Lowercase, dot-prefixed extension of the group the file was planned in
    pub extension: String,
}

impl RenamePlanEntry {
    pub fn new(
        source_path: PathBuf,
        season_folder: &SeasonFolder,
        new_name: String,
        extension: String,
    ) -> Self {
        let original_name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let destination_path = season_folder.path.join(&new_name);

        Self {
            source_path,
            destination_path,
            season_folder: season_folder.name.clone(),
            original_name,
            new_name,
            extension,
        }
    }

    /// True when the file already carries its planned name
    pub fn is_unchanged(&self) -> bool {
        self.source_path == self.destination_path
    }

    /// True when source and destination differ only in letter case
    pub fn is_case_only_change(&self) -> bool {
        !self.is_unchanged()
            && self.source_path.parent() == self.destination_path.parent()
            && self.original_name.to_lowercase() == self.new_name.to_lowercase()
    }
}

/// Display row for a preview renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow<'a> {
    pub season_folder: &'a str,
    pub original_name: &'a str,
    pub new_name: &'a str,
    pub extension: &'a str,
}

/// The rename plan for a single season folder
#[derive(Debug, Clone)]
pub struct SeasonPlan {
    pub folder: SeasonFolder,
    /// Season number used for files that do not name their own season
    pub season_number: u32,
    pub entries: Vec<RenamePlanEntry>,
}

impl SeasonPlan {
    pub fn new(folder: SeasonFolder, season_number: u32) -> Self {
        Self {
            folder,
            season_number,
            entries: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: RenamePlanEntry) {
        self.entries.push(entry);
    }

    /// Source and destination paths, in execution order
    pub fn pairs(&self) -> impl Iterator<Item = (&Path, &Path)> {
        self.entries
            .iter()
            .map(|e| (e.source_path.as_path(), e.destination_path.as_path()))
    }

    pub fn preview_rows(&self) -> impl Iterator<Item = PreviewRow<'_>> {
        self.entries.iter().map(|e| PreviewRow {
            season_folder: &e.season_folder,
            original_name: &e.original_name,
            new_name: &e.new_name,
            extension: &e.extension,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Plans for every season folder of a series, in season order
#[derive(Debug, Clone)]
pub struct SeriesPlan {
    pub root: PathBuf,
    pub seasons: Vec<SeasonPlan>,
}

impl SeriesPlan {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            seasons: Vec::new(),
        }
    }

    pub fn add_season(&mut self, plan: SeasonPlan) {
        self.seasons.push(plan);
    }

    /// Total number of planned renames across all seasons
    pub fn len(&self) -> usize {
        self.seasons.iter().map(SeasonPlan::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> impl Iterator<Item = &RenamePlanEntry> {
        self.seasons.iter().flat_map(|s| s.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(name: &str) -> SeasonFolder {
        SeasonFolder::new(name.to_string(), PathBuf::from("/tv/Show").join(name))
    }

    #[test]
    fn test_plan_entry_new() {
        let folder = season("Season 1");
        let entry = RenamePlanEntry::new(
            PathBuf::from("/tv/Show/Season 1/show.1x01.mkv"),
            &folder,
            "Show S01 E01.mkv".to_string(),
            ".mkv".to_string(),
        );

        assert_eq!(entry.original_name, "show.1x01.mkv");
        assert_eq!(entry.season_folder, "Season 1");
        assert_eq!(
            entry.destination_path,
            PathBuf::from("/tv/Show/Season 1/Show S01 E01.mkv")
        );
        assert!(!entry.is_unchanged());
        assert!(!entry.is_case_only_change());
    }

    #[test]
    fn test_plan_entry_unchanged() {
        let folder = season("Season 1");
        let entry = RenamePlanEntry::new(
            PathBuf::from("/tv/Show/Season 1/Show S01 E01.mkv"),
            &folder,
            "Show S01 E01.mkv".to_string(),
            ".mkv".to_string(),
        );

        assert!(entry.is_unchanged());
        assert!(!entry.is_case_only_change());
    }

    #[test]
    fn test_plan_entry_case_only_change() {
        let folder = season("Season 1");
        let entry = RenamePlanEntry::new(
            PathBuf::from("/tv/Show/Season 1/show s01 e01.MKV"),
            &folder,
            "Show S01 E01.mkv".to_string(),
            ".mkv".to_string(),
        );

        assert!(!entry.is_unchanged());
        assert!(entry.is_case_only_change());
    }

    #[test]
    fn test_series_plan_counts() {
        let folder = season("Season 1");
        let mut first = SeasonPlan::new(folder.clone(), 1);
        first.add_entry(RenamePlanEntry::new(
            PathBuf::from("/tv/Show/Season 1/a.mkv"),
            &folder,
            "Show S01 E01.mkv".to_string(),
            ".mkv".to_string(),
        ));
        let second = SeasonPlan::new(season("Season 2"), 2);

        let mut series = SeriesPlan::new(PathBuf::from("/tv/Show"));
        assert!(series.is_empty());

        series.add_season(first);
        series.add_season(second);

        assert_eq!(series.len(), 1);
        assert!(!series.is_empty());
        assert_eq!(series.entries().count(), 1);
        assert_eq!(series.seasons[0].pairs().count(), 1);
        assert!(series.seasons[1].is_empty());
    }
}

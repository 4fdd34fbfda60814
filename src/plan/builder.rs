use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::config::{ExtensionSet, RenameConfig};
use crate::parser::parse_episode_tag;
use crate::scanner::{
    list_media_files, locate_season_folders, MediaFile, ScannerError, SeasonFolder,
};

use super::types::{RenamePlanEntry, SeasonPlan, SeriesPlan};

/// Compose the new filename for an episode.
///
/// Numbers are padded to two digits; wider numbers keep their full width.
pub fn format_destination_name(
    series_name: &str,
    season: u32,
    episode: u32,
    extension: &str,
    include_season: bool,
) -> String {
    if include_season {
        format!("{} S{:02} E{:02}{}", series_name, season, episode, extension)
    } else {
        format!("{} E{:02}{}", series_name, episode, extension)
    }
}

/// Build the rename plan for one season folder.
///
/// Files are grouped by extension and each group is numbered on its own, in
/// case-insensitive name order. A season or episode number found in the
/// filename takes precedence over the default season and the file's position.
/// Nothing on disk is modified.
pub fn build_plan(
    season: &SeasonFolder,
    series_name: &str,
    season_number: u32,
    extensions: &ExtensionSet,
    include_season: bool,
) -> Result<SeasonPlan, ScannerError> {
    debug!(folder = %season.name, season_number, "Building rename plan");

    let mut groups: BTreeMap<String, Vec<MediaFile>> = BTreeMap::new();
    for file in list_media_files(&season.path, extensions)? {
        groups.entry(file.extension.clone()).or_default().push(file);
    }

    let mut plan = SeasonPlan::new(season.clone(), season_number);

    for (extension, mut files) in groups {
        files.sort_by_cached_key(|f| (f.name.to_lowercase(), f.name.clone()));

        for (index, file) in files.into_iter().enumerate() {
            let position = index as u32 + 1;
            let tag = parse_episode_tag(&file.name);

            // Zero is never a usable number; fall back as if nothing was found
            let episode = tag.map(|t| t.episode).filter(|&e| e > 0).unwrap_or(position);
            let season_value = tag
                .map(|t| t.season)
                .filter(|&s| s > 0)
                .unwrap_or(season_number);

            let new_name = format_destination_name(
                series_name,
                season_value,
                episode,
                &extension,
                include_season,
            );

            debug!(
                from = %file.name,
                to = %new_name,
                detected = tag.is_some(),
                "Planned rename"
            );

            plan.add_entry(RenamePlanEntry::new(
                file.path,
                season,
                new_name,
                extension.clone(),
            ));
        }
    }

    Ok(plan)
}

/// Build plans for every season folder under the configured root.
///
/// Season folders get default season numbers 1, 2, ... in folder order; a
/// root that stands in for its own single season uses 1.
pub fn plan_series(config: &RenameConfig) -> Result<SeriesPlan, ScannerError> {
    let folders = locate_season_folders(&config.root)?;

    info!(
        root = ?config.root,
        seasons = folders.len(),
        "Planning renames"
    );

    let mut series = SeriesPlan::new(config.root.clone());

    for (index, folder) in folders.iter().enumerate() {
        let season_number = if folder.is_root { 1 } else { index as u32 + 1 };

        let plan = build_plan(
            folder,
            &config.series_name,
            season_number,
            &config.extensions,
            config.include_season,
        )?;

        debug!(folder = %folder.name, count = plan.len(), "Season planned");
        series.add_season(plan);
    }

    info!(count = series.len(), "Planning complete");

    Ok(series)
}

//! Explicit configuration for a renaming run.
//!
//! Everything the planner needs is carried in a [`RenameConfig`] built once
//! from the command line (or any other front end) and passed down by reference.

use std::collections::BTreeSet;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the default extension list
pub const ENV_EXTENSIONS: &str = "SERIES_RENAMER_EXTENSIONS";

/// Extensions considered when none are configured
pub const DEFAULT_EXTENSIONS: &str = ".mkv,.srt,.mka,.mp4";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Series name is empty")]
    EmptySeriesName,

    #[error("No file extensions configured")]
    NoExtensions,

    #[error("Cannot derive a series name from path: {0}")]
    SeriesNameUnavailable(PathBuf),
}

/// Lowercase, dot-prefixed file extensions eligible for renaming
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl ExtensionSet {
    /// Parse a comma-separated list such as `".mkv, SRT,.mp4"`.
    ///
    /// Entries are trimmed and lowercased, blanks are dropped and a leading
    /// dot is added where missing.
    pub fn parse_list(list: &str) -> Self {
        let extensions = list
            .split(',')
            .map(|item| item.trim().to_lowercase())
            .filter(|item| !item.is_empty() && item != ".")
            .map(|item| {
                if item.starts_with('.') {
                    item
                } else {
                    format!(".{}", item)
                }
            })
            .collect();

        Self { extensions }
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

/// Inputs for planning and executing a rename of one series
#[derive(Debug, Clone)]
pub struct RenameConfig {
    /// Series root folder; either holds season subfolders or the episodes
    pub root: PathBuf,
    /// Display name written verbatim into every new filename
    pub series_name: String,
    pub extensions: ExtensionSet,
    /// Whether new names carry the `S<nn>` component
    pub include_season: bool,
}

impl RenameConfig {
    /// Build a validated configuration.
    ///
    /// The series name is trimmed; when `None`, the root folder's own name is
    /// used instead.
    pub fn new(
        root: impl Into<PathBuf>,
        series_name: Option<&str>,
        extensions: ExtensionSet,
        include_season: bool,
    ) -> Result<Self, ConfigError> {
        let root = root.into();

        let series_name = match series_name {
            Some(name) => name.trim().to_string(),
            None => series_name_from_path(&root)?,
        };

        if series_name.is_empty() {
            return Err(ConfigError::EmptySeriesName);
        }

        if extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }

        Ok(Self {
            root,
            series_name,
            extensions,
            include_season,
        })
    }
}

fn series_name_from_path(root: &Path) -> Result<String, ConfigError> {
    root.file_name()
        .map(|n| n.to_string_lossy().trim().to_string())
        .ok_or_else(|| ConfigError::SeriesNameUnavailable(root.to_path_buf()))
}

/// Load the extension list from the environment, falling back to the default.
///
/// The variable can also be set in a `.env` file in the working directory.
pub fn extensions_from_env() -> ExtensionSet {
    let list = env::var(ENV_EXTENSIONS)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EXTENSIONS.to_string());

    ExtensionSet::parse_list(&list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to serialize env var tests (they share global state)
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_parse_extension_list() {
        let set = ExtensionSet::parse_list(".mkv, SRT ,,.Mp4, .");

        assert_eq!(set.len(), 3);
        assert!(set.contains(".mkv"));
        assert!(set.contains(".srt"));
        assert!(set.contains(".mp4"));
        assert!(!set.contains("mkv"));
    }

    #[test]
    fn test_parse_empty_extension_list() {
        assert!(ExtensionSet::parse_list("").is_empty());
        assert!(ExtensionSet::parse_list(" , ,").is_empty());
    }

    #[test]
    fn test_config_uses_root_name_by_default() {
        let config = RenameConfig::new(
            "/media/Breaking Bad",
            None,
            ExtensionSet::parse_list(".mkv"),
            true,
        )
        .unwrap();

        assert_eq!(config.series_name, "Breaking Bad");
        assert!(config.include_season);
    }

    #[test]
    fn test_config_trims_series_name() {
        let config = RenameConfig::new(
            "/media/x",
            Some("  The Show "),
            ExtensionSet::parse_list(".mkv"),
            false,
        )
        .unwrap();

        assert_eq!(config.series_name, "The Show");
    }

    #[test]
    fn test_config_rejects_empty_name() {
        let result = RenameConfig::new(
            "/media/x",
            Some("   "),
            ExtensionSet::parse_list(".mkv"),
            true,
        );
        assert_eq!(result.unwrap_err(), ConfigError::EmptySeriesName);
    }

    #[test]
    fn test_config_rejects_empty_extensions() {
        let result = RenameConfig::new("/media/x", Some("Show"), ExtensionSet::default(), true);
        assert_eq!(result.unwrap_err(), ConfigError::NoExtensions);
    }

    #[test]
    fn test_config_without_derivable_name() {
        let result = RenameConfig::new("/", None, ExtensionSet::parse_list(".mkv"), true);
        assert!(matches!(
            result,
            Err(ConfigError::SeriesNameUnavailable(_))
        ));
    }

    #[test]
    fn test_extensions_from_env_default() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();
        env::remove_var(ENV_EXTENSIONS);

        let set = extensions_from_env();

        assert_eq!(set, ExtensionSet::parse_list(DEFAULT_EXTENSIONS));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_extensions_from_env_override() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();
        env::set_var(ENV_EXTENSIONS, "avi,.MOV");

        let set = extensions_from_env();

        assert_eq!(set.len(), 2);
        assert!(set.contains(".avi"));
        assert!(set.contains(".mov"));

        env::remove_var(ENV_EXTENSIONS);
    }
}

//! Progress output for user-facing status updates.
//!
//! In verbose mode, output is suppressed since tracing handles everything.
//! In normal mode, output is shown with colors while a job runs.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Progress {
    /// Create a progress reporter writing to stderr.
    /// When verbose=true, output is suppressed (tracing handles it)
    pub fn new(verbose: bool) -> Self {
        let colors_enabled = should_use_colors();
        if !colors_enabled {
            colored::control::set_override(false);
        }
        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled,
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Report the start of planning
    pub fn plan_start(&mut self, root: &Path) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("Scanning {}", root.display()).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "Scanning {}", root.display());
        }
    }

    /// Report a season folder that has been planned
    pub fn season_planned(&mut self, folder: &str, entries: usize) {
        if self.silent || entries == 0 {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                folder.bold(),
                format!("({} files)", entries).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "{} ({} files)", folder, entries);
        }
    }

    /// Report progress on a single rename
    pub fn rename_progress(&mut self, current: usize, total: usize, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let counter = format!("[{}/{}]", current, total);
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                from.dimmed(),
                "→".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "[{}/{}] {} -> {}", current, total, from, to);
        }
    }

    /// Report an error during operation (non-fatal)
    pub fn warn(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }

    /// Report rename batch complete
    pub fn rename_complete(&mut self, renamed: usize, planned: usize) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        if renamed == planned {
            if self.colors_enabled {
                let _ = writeln!(
                    self.writer,
                    "{} {}",
                    "✓".green().bold(),
                    format!("{} files renamed", renamed).green()
                );
            } else {
                let _ = writeln!(self.writer, "Rename complete. {} files renamed.", renamed);
            }
        } else if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                "✗".red().bold(),
                format!("{} of {} files renamed", renamed, planned).red()
            );
        } else {
            let _ = writeln!(
                self.writer,
                "Rename incomplete. {} of {} files renamed.",
                renamed, planned
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_progress() -> (Progress, std::sync::Arc<std::sync::Mutex<Vec<u8>>>) {
        let buffer = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let writer = TestWriter(buffer.clone());
        let progress = Progress::with_writer(Box::new(writer));
        (progress, buffer)
    }

    struct TestWriter(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output_of(buffer: &std::sync::Arc<std::sync::Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_rename_progress() {
        let (mut progress, buffer) = create_test_progress();

        progress.rename_progress(1, 3, "a.mkv", "Show S01 E01.mkv");
        progress.rename_progress(2, 3, "b.mkv", "Show S01 E02.mkv");

        let output = output_of(&buffer);
        assert!(output.contains("[1/3] a.mkv -> Show S01 E01.mkv"));
        assert!(output.contains("[2/3]"));
    }

    #[test]
    fn test_empty_season_is_not_reported() {
        let (mut progress, buffer) = create_test_progress();

        progress.season_planned("Extras Season", 0);
        progress.season_planned("Season 1", 4);

        let output = output_of(&buffer);
        assert!(!output.contains("Extras"));
        assert!(output.contains("Season 1 (4 files)"));
    }

    #[test]
    fn test_rename_complete_partial() {
        let (mut progress, buffer) = create_test_progress();

        progress.rename_complete(2, 5);

        let output = output_of(&buffer);
        assert!(output.contains("2 of 5 files renamed"));
    }
}

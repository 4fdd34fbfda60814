//! Applies rename plans to the filesystem.
//!
//! Pairs are applied one at a time in plan order. Nothing is ever overwritten:
//! a pair whose destination already exists fails instead.

use std::ffi::OsStr;
use std::fs;
use thiserror::Error;
use tracing::{info, warn};

use crate::plan::{RenamePlanEntry, SeasonPlan, SeriesPlan};

#[derive(Error, Debug)]
pub enum ExecuteError {
    #[error("Destination already exists: {0}")]
    DestinationExists(String),

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    Filesystem {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

/// What to do when a single rename fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the batch at the first failure
    #[default]
    FailFast,
    /// Record the failure and carry on with the remaining pairs
    Continue,
}

/// Progress notification for a single pair
#[derive(Debug)]
pub enum ExecutionEvent<'a> {
    Renamed(&'a RenamePlanEntry),
    Unchanged(&'a RenamePlanEntry),
    Failed(&'a RenamePlanEntry, &'a ExecuteError),
}

/// A pair that could not be applied
#[derive(Debug)]
pub struct RenameFailure {
    pub original_name: String,
    pub new_name: String,
    pub error: ExecuteError,
}

/// Outcome of executing one or more plans
#[derive(Debug, Default)]
pub struct ExecutionReport {
    /// Number of pairs in the plan(s)
    pub planned: usize,
    /// Pairs actually moved on disk
    pub renamed: usize,
    /// Pairs whose file already had its planned name
    pub unchanged: usize,
    pub failures: Vec<RenameFailure>,
}

impl ExecutionReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Pairs that were never attempted because the batch stopped early
    pub fn skipped(&self) -> usize {
        self.planned - self.renamed - self.unchanged - self.failures.len()
    }

    fn merge(&mut self, other: ExecutionReport) {
        self.planned += other.planned;
        self.renamed += other.renamed;
        self.unchanged += other.unchanged;
        self.failures.extend(other.failures);
    }
}

/// Apply a season plan, reporting each pair through `on_event`
pub fn execute_plan<F>(
    plan: &SeasonPlan,
    policy: FailurePolicy,
    mut on_event: F,
) -> ExecutionReport
where
    F: FnMut(ExecutionEvent<'_>),
{
    let mut report = ExecutionReport {
        planned: plan.len(),
        ..Default::default()
    };

    for entry in &plan.entries {
        if entry.is_unchanged() {
            on_event(ExecutionEvent::Unchanged(entry));
            report.unchanged += 1;
            continue;
        }

        match apply_entry(entry) {
            Ok(()) => {
                info!("Renamed: {} -> {}", entry.original_name, entry.new_name);
                on_event(ExecutionEvent::Renamed(entry));
                report.renamed += 1;
            }
            Err(error) => {
                warn!("{}", error);
                on_event(ExecutionEvent::Failed(entry, &error));
                report.failures.push(RenameFailure {
                    original_name: entry.original_name.clone(),
                    new_name: entry.new_name.clone(),
                    error,
                });

                if policy == FailurePolicy::FailFast {
                    break;
                }
            }
        }
    }

    report
}

/// Apply every season plan of a series in order.
///
/// Under [`FailurePolicy::FailFast`] the first failure also stops the
/// remaining seasons; their pairs still count as planned.
pub fn execute_series<F>(
    series: &SeriesPlan,
    policy: FailurePolicy,
    mut on_event: F,
) -> ExecutionReport
where
    F: FnMut(ExecutionEvent<'_>),
{
    let mut report = ExecutionReport::default();
    let mut stopped = false;

    for season in &series.seasons {
        if stopped {
            report.planned += season.len();
            continue;
        }

        let season_report = execute_plan(season, policy, &mut on_event);
        stopped = policy == FailurePolicy::FailFast && season_report.has_failures();
        report.merge(season_report);
    }

    info!(
        planned = report.planned,
        renamed = report.renamed,
        failed = report.failures.len(),
        "Execution finished"
    );

    report
}

fn apply_entry(entry: &RenamePlanEntry) -> Result<(), ExecuteError> {
    if destination_taken(entry) {
        return Err(ExecuteError::DestinationExists(entry.new_name.clone()));
    }

    fs::rename(&entry.source_path, &entry.destination_path).map_err(|e| {
        ExecuteError::Filesystem {
            from: entry.original_name.clone(),
            to: entry.new_name.clone(),
            source: e,
        }
    })
}

/// Whether applying `entry` would replace some other file.
///
/// On case-insensitive filesystems a case-only rename sees its own source at
/// the destination path, so only an entry spelled exactly like the new name
/// counts as taken.
fn destination_taken(entry: &RenamePlanEntry) -> bool {
    if !entry.destination_path.exists() {
        return false;
    }

    if !entry.is_case_only_change() {
        return true;
    }

    let folder = match entry.destination_path.parent() {
        Some(folder) => folder,
        None => return true,
    };

    match fs::read_dir(folder) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .any(|e| e.file_name() == OsStr::new(&entry.new_name)),
        Err(_) => true,
    }
}

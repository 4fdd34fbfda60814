//! Background rename jobs.
//!
//! A job runs a whole plan, or plan followed by execution, on one worker
//! thread. The caller receives [`JobEvent`]s over a channel while the job runs
//! and collects the [`JobOutcome`] by joining the handle. Pairs inside a job
//! are always applied sequentially.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::debug;

use crate::config::RenameConfig;
use crate::error::AppError;
use crate::execute::{execute_series, ExecutionEvent, ExecutionReport, FailurePolicy};
use crate::plan::{plan_series, SeriesPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    /// Build the plan only
    Preview,
    /// Build the plan and apply it
    Rename,
}

/// Progress reported by a running job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    SeasonPlanned { folder: String, entries: usize },
    Renamed { from: String, to: String },
    Unchanged { name: String },
    Failed { from: String, to: String, message: String },
}

/// Result of a finished job
#[derive(Debug)]
pub struct JobOutcome {
    pub plan: SeriesPlan,
    /// Present only for [`JobKind::Rename`]
    pub report: Option<ExecutionReport>,
}

/// Handle to a job running on a worker thread
pub struct JobHandle {
    events: Receiver<JobEvent>,
    worker: JoinHandle<Result<JobOutcome, AppError>>,
}

impl JobHandle {
    /// Events sent so far and until the job finishes.
    ///
    /// The iterator ends once the worker is done and the channel drains.
    pub fn events(&self) -> impl Iterator<Item = JobEvent> + '_ {
        self.events.iter()
    }

    /// Wait for the job and return its outcome
    pub fn join(self) -> Result<JobOutcome, AppError> {
        self.worker
            .join()
            .map_err(|_| AppError::Other("Rename job panicked".to_string()))?
    }
}

/// Start a job on a new worker thread
pub fn spawn_job(config: RenameConfig, kind: JobKind, policy: FailurePolicy) -> JobHandle {
    let (sender, events) = mpsc::channel();

    let worker = thread::spawn(move || run_job(&config, kind, policy, &sender));

    JobHandle { events, worker }
}

/// Run a job on the current thread, sending progress to `sender`.
///
/// A dropped receiver does not stop the job; events are discarded instead.
pub fn run_job(
    config: &RenameConfig,
    kind: JobKind,
    policy: FailurePolicy,
    sender: &Sender<JobEvent>,
) -> Result<JobOutcome, AppError> {
    debug!(?kind, ?policy, "Starting job");

    let plan = plan_series(config)?;

    for season in &plan.seasons {
        let _ = sender.send(JobEvent::SeasonPlanned {
            folder: season.folder.name.clone(),
            entries: season.len(),
        });
    }

    let report = match kind {
        JobKind::Preview => None,
        JobKind::Rename => Some(execute_series(&plan, policy, |event| {
            let _ = sender.send(job_event(event));
        })),
    };

    Ok(JobOutcome { plan, report })
}

fn job_event(event: ExecutionEvent<'_>) -> JobEvent {
    match event {
        ExecutionEvent::Renamed(entry) => JobEvent::Renamed {
            from: entry.original_name.clone(),
            to: entry.new_name.clone(),
        },
        ExecutionEvent::Unchanged(entry) => JobEvent::Unchanged {
            name: entry.original_name.clone(),
        },
        ExecutionEvent::Failed(entry, error) => JobEvent::Failed {
            from: entry.original_name.clone(),
            to: entry.new_name.clone(),
            message: error.to_string(),
        },
    }
}

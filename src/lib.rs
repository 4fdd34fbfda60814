pub mod cli;
pub mod config;
pub mod error;
pub mod execute;
pub mod job;
pub mod logging;
pub mod output;
pub mod parser;
pub mod plan;
pub mod progress;
pub mod scanner;

pub use config::{extensions_from_env, ConfigError, ExtensionSet, RenameConfig};
pub use error::{AppError, ExitCode};
pub use execute::{
    execute_plan, execute_series, ExecuteError, ExecutionEvent, ExecutionReport, FailurePolicy,
};
pub use job::{spawn_job, JobEvent, JobHandle, JobKind, JobOutcome};
pub use parser::{parse_episode_tag, parse_with, CaptureShape, EpisodePattern, EpisodeTag};
pub use plan::{
    build_plan, format_destination_name, plan_series, RenamePlanEntry, SeasonPlan, SeriesPlan,
};
pub use scanner::{locate_season_folders, ScannerError, SeasonFolder};

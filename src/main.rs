use clap::Parser;
use series_renamer::cli::{Args, PreviewFormat};
use series_renamer::config::{extensions_from_env, ExtensionSet, RenameConfig};
use series_renamer::error::AppError;
use series_renamer::execute::FailurePolicy;
use series_renamer::job::{spawn_job, JobEvent, JobKind};
use series_renamer::logging;
use series_renamer::output::{
    display_execution_result, display_preview, display_preview_json, display_preview_simple,
};
use series_renamer::progress::Progress;
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let extensions = match &args.extensions {
        Some(list) => ExtensionSet::parse_list(list),
        None => extensions_from_env(),
    };
    debug!(extensions = ?extensions.iter().collect::<Vec<_>>(), "Extensions configured");

    let config = RenameConfig::new(
        &args.root_dir,
        args.name.as_deref(),
        extensions,
        !args.no_season,
    )?;

    info!(series = %config.series_name, root = ?config.root, "Configuration loaded");

    let kind = if args.dry {
        JobKind::Preview
    } else {
        JobKind::Rename
    };
    let policy = if args.keep_going {
        FailurePolicy::Continue
    } else {
        FailurePolicy::FailFast
    };

    // Machine-readable previews keep stderr quiet as well
    let format = args.format.unwrap_or(PreviewFormat::Human);
    let quiet = args.verbose > 0 || format != PreviewFormat::Human;
    let mut progress = Progress::new(quiet);
    progress.plan_start(&config.root);

    let handle = spawn_job(config, kind, policy);

    let mut total = 0;
    let mut current = 0;
    for event in handle.events() {
        match event {
            JobEvent::SeasonPlanned { folder, entries } => {
                total += entries;
                progress.season_planned(&folder, entries);
            }
            JobEvent::Renamed { from, to } => {
                current += 1;
                progress.rename_progress(current, total, &from, &to);
            }
            JobEvent::Unchanged { name } => {
                current += 1;
                debug!(name = %name, "Already named correctly");
            }
            JobEvent::Failed { from, to, message } => {
                current += 1;
                progress.warn(&format!("{} -> {}: {}", from, to, message));
            }
        }
    }

    let outcome = handle.join()?;
    let mut stdout = std::io::stdout();

    match outcome.report {
        None => {
            let rendered = match format {
                PreviewFormat::Human => display_preview(&outcome.plan, &mut stdout),
                PreviewFormat::Simple => display_preview_simple(&outcome.plan, &mut stdout),
                PreviewFormat::Json => display_preview_json(&outcome.plan, &mut stdout),
            };
            rendered.map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
        }
        Some(report) => {
            progress.rename_complete(report.renamed, report.planned - report.unchanged);

            display_execution_result(&report, &mut stdout)
                .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

            if report.has_failures() {
                return Err(AppError::incomplete(&report));
            }
        }
    }

    Ok(())
}

mod builder;
mod types;

pub use builder::{build_plan, format_destination_name, plan_series};
pub use types::{PreviewRow, RenamePlanEntry, SeasonPlan, SeriesPlan};

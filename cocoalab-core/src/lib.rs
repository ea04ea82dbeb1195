//! CocoaLab core — monthly cocoa analytical dataset pipeline.
//!
//! A single-run batch pipeline over two delimited inputs:
//! - Daily cocoa prices, exchange rates, and weather series
//! - Monthly search-trend series
//!
//! Five ordered phases transform them into one monthly aggregate table:
//! - `load` — structural parsing of both inputs
//! - `clean` — sort, dedupe, numeric coercion, range clipping, forward-fill
//! - `features` / `holiday` — calendar, log-price, and holiday-window flags
//! - `merge` — left join of the trend series by calendar month
//! - `aggregate` — per-month means, log return, holiday-occurred flag
//!
//! Each phase is a pure function from an input table to a new output
//! table; `pipeline` composes them and `output` writes the result.

pub mod aggregate;
pub mod clean;
pub mod config;
pub mod features;
pub mod holiday;
pub mod load;
pub mod merge;
pub mod model;
pub mod output;
pub mod pipeline;

pub use aggregate::aggregate_monthly;
pub use clean::{clean, forward_fill, parse_and_clip, sort_and_dedup};
pub use config::{ConfigError, PipelineConfig};
pub use features::{derive_features, month_start, observed_years};
pub use holiday::{easter_sunday, HolidayCalendar};
pub use load::{load_daily, load_trend, LoadError};
pub use merge::merge_trend;
pub use model::{
    DailyRecord, FeatureRecord, MergedRecord, MonthlyAggregate, RawDailyRow, TrendRecord,
};
pub use output::{monthly_to_csv, write_monthly_csv, OutputError, OUTPUT_COLUMNS};
pub use pipeline::{
    assemble, build_monthly_dataset, dataset_hash, PipelineError, PipelineResult, RunSummary,
};

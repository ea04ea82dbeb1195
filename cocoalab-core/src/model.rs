//! Row types for each stage of the pipeline.
//!
//! Each phase consumes one row type and produces the next:
//! `RawDailyRow` → `DailyRecord` → `FeatureRecord` → `MergedRecord` →
//! `MonthlyAggregate`. Phases never mutate shared state; every transition
//! takes its input by value and returns a new table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw daily row as read from the input file, before cleaning.
///
/// Numeric columns are kept as raw strings (`None` for empty cells) so the
/// cleaner owns comma-stripping and range policy. Full-row equality and
/// hashing support exact duplicate removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawDailyRow {
    pub date: NaiveDate,
    pub price_ny: Option<String>,
    pub mid_rate: Option<String>,
    pub t2m: Option<String>,
    pub t2m_max: Option<String>,
    pub t2m_min: Option<String>,
    pub prectotcorr: Option<String>,
    pub allsky_sfc_sw_dwn: Option<String>,
}

/// One cleaned daily record.
///
/// Invariants after cleaning: `price_ny` is `None` or in (0, 10000];
/// `mid_rate` is `None` or in (0, 1000]; weather fields are `None` or ≥ 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub price_ny: Option<f64>,
    pub mid_rate: Option<f64>,
    pub t2m: Option<f64>,
    pub t2m_max: Option<f64>,
    pub t2m_min: Option<f64>,
    pub prectotcorr: Option<f64>,
    pub allsky_sfc_sw_dwn: Option<f64>,
}

/// Daily record with derived calendar and holiday features.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub date: NaiveDate,
    /// First calendar day of the record's month.
    pub month: NaiveDate,
    /// 1 = Monday … 7 = Sunday.
    pub weekday: u32,
    pub price_ny: Option<f64>,
    pub mid_rate: Option<f64>,
    pub t2m: Option<f64>,
    pub t2m_max: Option<f64>,
    pub t2m_min: Option<f64>,
    pub prectotcorr: Option<f64>,
    pub allsky_sfc_sw_dwn: Option<f64>,
    /// Natural log of `price_ny`; `None` propagates.
    pub log_price: Option<f64>,
    pub is_holiday: bool,
}

/// One monthly search-trend record. Unique per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    /// First calendar day of the month.
    pub month: NaiveDate,
    pub cocoa_trend: Option<f64>,
}

/// Feature record joined with the monthly trend value.
///
/// `cocoa_trend` is `None` for months absent from the trend table.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub date: NaiveDate,
    pub month: NaiveDate,
    pub weekday: u32,
    pub price_ny: Option<f64>,
    pub mid_rate: Option<f64>,
    pub t2m: Option<f64>,
    pub t2m_max: Option<f64>,
    pub t2m_min: Option<f64>,
    pub prectotcorr: Option<f64>,
    pub allsky_sfc_sw_dwn: Option<f64>,
    pub log_price: Option<f64>,
    pub is_holiday: bool,
    pub cocoa_trend: Option<f64>,
}

/// One output row: all daily fields aggregated over a calendar month.
///
/// Means ignore nulls; a month with no valid values for a field yields
/// `None` for that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub month: NaiveDate,
    pub year: i32,
    pub month_num: u32,
    pub mid_rate: Option<f64>,
    pub t2m: Option<f64>,
    pub t2m_max: Option<f64>,
    pub t2m_min: Option<f64>,
    pub prectotcorr: Option<f64>,
    pub allsky_sfc_sw_dwn: Option<f64>,
    pub cocoa_trend: Option<f64>,
    pub log_price: Option<f64>,
    pub price_ny: Option<f64>,
    /// ln(last price / first price) within the month, by date order.
    pub log_return_rate: Option<f64>,
    /// 1 if any day in the month fell in a holiday window, else 0.
    pub is_holiday: u8,
}

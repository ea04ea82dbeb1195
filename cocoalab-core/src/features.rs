//! Calendar and holiday feature derivation.

use crate::holiday::HolidayCalendar;
use crate::model::{DailyRecord, FeatureRecord};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// First calendar day of `date`'s month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// Distinct years present among the records, ascending.
pub fn observed_years(rows: &[DailyRecord]) -> Vec<i32> {
    let years: BTreeSet<i32> = rows.iter().map(|r| r.date.year()).collect();
    years.into_iter().collect()
}

/// Add `month`, `weekday`, `log_price`, and `is_holiday` to each record.
///
/// `log_price` is the natural log of `price_ny`; null and non-positive
/// prices propagate to null rather than erroring.
pub fn derive_features(rows: Vec<DailyRecord>, holidays: &HolidayCalendar) -> Vec<FeatureRecord> {
    rows.into_iter()
        .map(|r| FeatureRecord {
            date: r.date,
            month: month_start(r.date),
            weekday: r.date.weekday().number_from_monday(),
            log_price: r.price_ny.filter(|p| *p > 0.0).map(f64::ln),
            is_holiday: holidays.contains(r.date),
            price_ny: r.price_ny,
            mid_rate: r.mid_rate,
            t2m: r.t2m,
            t2m_max: r.t2m_max,
            t2m_min: r.t2m_min,
            prectotcorr: r.prectotcorr,
            allsky_sfc_sw_dwn: r.allsky_sfc_sw_dwn,
        })
        .collect()
}

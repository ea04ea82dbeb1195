//! Left join of the daily feature rows to the monthly trend table.

use crate::model::{FeatureRecord, MergedRecord, TrendRecord};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Join each daily row to its month's trend value.
///
/// Unmatched months get `None`. Rows are sorted by date before and after
/// the join so downstream first/last lookups are deterministic.
pub fn merge_trend(daily: Vec<FeatureRecord>, trend: &[TrendRecord]) -> Vec<MergedRecord> {
    let by_month: BTreeMap<NaiveDate, Option<f64>> = trend
        .iter()
        .map(|t| (t.month, t.cocoa_trend))
        .collect();

    let mut daily = daily;
    daily.sort_by_key(|r| r.date);

    let mut merged: Vec<MergedRecord> = daily
        .into_iter()
        .map(|r| MergedRecord {
            cocoa_trend: by_month.get(&r.month).copied().flatten(),
            date: r.date,
            month: r.month,
            weekday: r.weekday,
            price_ny: r.price_ny,
            mid_rate: r.mid_rate,
            t2m: r.t2m,
            t2m_max: r.t2m_max,
            t2m_min: r.t2m_min,
            prectotcorr: r.prectotcorr,
            allsky_sfc_sw_dwn: r.allsky_sfc_sw_dwn,
            log_price: r.log_price,
            is_holiday: r.is_holiday,
        })
        .collect();
    merged.sort_by_key(|r| r.date);
    merged
}

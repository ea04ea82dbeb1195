//! Monthly aggregation: null-ignoring means, the monthly log return, and
//! the holiday-occurred flag.

use crate::model::{MergedRecord, MonthlyAggregate};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Group date-sorted daily rows by month and aggregate each group.
///
/// One output row per distinct month, ascending. Means ignore nulls; a
/// group with no valid values for a field yields `None`.
pub fn aggregate_monthly(rows: &[MergedRecord]) -> Vec<MonthlyAggregate> {
    let mut groups: BTreeMap<NaiveDate, Vec<&MergedRecord>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.month).or_default().push(row);
    }

    groups
        .into_iter()
        .map(|(month, group)| MonthlyAggregate {
            month,
            year: month.year(),
            month_num: month.month(),
            mid_rate: mean(group.iter().map(|r| r.mid_rate)),
            t2m: mean(group.iter().map(|r| r.t2m)),
            t2m_max: mean(group.iter().map(|r| r.t2m_max)),
            t2m_min: mean(group.iter().map(|r| r.t2m_min)),
            prectotcorr: mean(group.iter().map(|r| r.prectotcorr)),
            allsky_sfc_sw_dwn: mean(group.iter().map(|r| r.allsky_sfc_sw_dwn)),
            cocoa_trend: mean(group.iter().map(|r| r.cocoa_trend)),
            log_price: mean(group.iter().map(|r| r.log_price)),
            price_ny: mean(group.iter().map(|r| r.price_ny)),
            log_return_rate: log_return(&group),
            is_holiday: group.iter().any(|r| r.is_holiday) as u8,
        })
        .collect()
}

/// ln(last price / first price) within the month, by date order.
///
/// `None` if either endpoint price is null. The group is assumed
/// date-sorted (the merger guarantees it).
fn log_return(group: &[&MergedRecord]) -> Option<f64> {
    let first = group.first()?.price_ny?;
    let last = group.last()?.price_ny?;
    Some((last / first).ln())
}

/// Mean over the non-null values; `None` if every value is null.
fn mean(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values.flatten() {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

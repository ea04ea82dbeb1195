//! Cleaning phase: sort, dedupe, numeric coercion, range clipping,
//! forward-fill.
//!
//! Every operation is a pure total function over the daily table. Once the
//! loader has succeeded there is no hard failure path here: malformed
//! values degrade to `None` instead of raising.

use crate::model::{DailyRecord, RawDailyRow};
use std::collections::HashSet;

/// Upper bound for plausible NY cocoa prices; values above it are nulled.
pub const PRICE_CEILING: f64 = 10_000.0;

/// Upper bound for plausible exchange rates; values above it are nulled.
pub const RATE_CEILING: f64 = 1_000.0;

/// Full cleaning pass: sort → dedupe → parse/clip → forward-fill.
pub fn clean(rows: Vec<RawDailyRow>) -> Vec<DailyRecord> {
    forward_fill(parse_and_clip(sort_and_dedup(rows)))
}

/// Stable sort by date ascending, then exact full-row duplicate removal
/// keeping the first occurrence.
pub fn sort_and_dedup(mut rows: Vec<RawDailyRow>) -> Vec<RawDailyRow> {
    rows.sort_by_key(|r| r.date);
    let mut seen: HashSet<RawDailyRow> = HashSet::with_capacity(rows.len());
    rows.into_iter().filter(|r| seen.insert(r.clone())).collect()
}

/// Parse raw string cells into decimals and null out-of-range values.
///
/// Prices and rates strip thousands separators before parsing; values ≤ 0
/// or above their ceiling become `None`. Weather fields null unparseable
/// and negative values.
pub fn parse_and_clip(rows: Vec<RawDailyRow>) -> Vec<DailyRecord> {
    rows.into_iter()
        .map(|r| DailyRecord {
            date: r.date,
            price_ny: parse_bounded(r.price_ny.as_deref(), PRICE_CEILING),
            mid_rate: parse_bounded(r.mid_rate.as_deref(), RATE_CEILING),
            t2m: parse_non_negative(r.t2m.as_deref()),
            t2m_max: parse_non_negative(r.t2m_max.as_deref()),
            t2m_min: parse_non_negative(r.t2m_min.as_deref()),
            prectotcorr: parse_non_negative(r.prectotcorr.as_deref()),
            allsky_sfc_sw_dwn: parse_non_negative(r.allsky_sfc_sw_dwn.as_deref()),
        })
        .collect()
}

/// Replace every null cell with the most recent non-null value earlier in
/// the date-sorted sequence, per column. Leading nulls stay null.
///
/// Idempotent: a second pass changes nothing.
pub fn forward_fill(rows: Vec<DailyRecord>) -> Vec<DailyRecord> {
    let mut out: Vec<DailyRecord> = Vec::with_capacity(rows.len());
    for r in rows {
        let filled = match out.last() {
            Some(p) => DailyRecord {
                date: r.date,
                price_ny: r.price_ny.or(p.price_ny),
                mid_rate: r.mid_rate.or(p.mid_rate),
                t2m: r.t2m.or(p.t2m),
                t2m_max: r.t2m_max.or(p.t2m_max),
                t2m_min: r.t2m_min.or(p.t2m_min),
                prectotcorr: r.prectotcorr.or(p.prectotcorr),
                allsky_sfc_sw_dwn: r.allsky_sfc_sw_dwn.or(p.allsky_sfc_sw_dwn),
            },
            None => r,
        };
        out.push(filled);
    }
    out
}

/// Strip thousands separators and parse; `None` for garbage, values ≤ 0,
/// or values above `ceiling`.
fn parse_bounded(raw: Option<&str>, ceiling: f64) -> Option<f64> {
    let v = parse_decimal(raw?)?;
    if v <= 0.0 || v > ceiling {
        None
    } else {
        Some(v)
    }
}

/// Coerce to a decimal; `None` for garbage or negative values.
fn parse_non_negative(raw: Option<&str>) -> Option<f64> {
    let v = parse_decimal(raw?)?;
    if v < 0.0 {
        None
    } else {
        Some(v)
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let stripped: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok()
}

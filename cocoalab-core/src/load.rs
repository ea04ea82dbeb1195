//! Loading the two raw inputs: the daily price/weather table and the
//! monthly search-trend table.
//!
//! The loader owns structural validation only — required columns and date
//! parsing. Value-level cleanup (comma stripping, range clipping) belongs
//! to the cleaner. A missing file or column aborts the run; a malformed
//! cell never does.

use crate::model::{RawDailyRow, TrendRecord};
use chrono::NaiveDate;
use csv::StringRecord;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Structural errors from the loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("missing required column '{column}' in {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("unparseable date '{value}' at line {line} of {path}")]
    BadDate {
        value: String,
        line: usize,
        path: PathBuf,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the daily raw table.
///
/// Requires `Date`, `Price_NY`, and `Mid.Rate` columns; picks up whichever
/// of the weather columns are present. Incidental `YEAR`, `DOY`, and
/// unnamed index columns are ignored.
pub fn load_daily(path: &Path) -> Result<Vec<RawDailyRow>, LoadError> {
    let file = open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    let date_idx = require_column(&headers, "Date", path)?;
    let price_idx = require_column(&headers, "Price_NY", path)?;
    let rate_idx = require_column(&headers, "Mid.Rate", path)?;
    let t2m_idx = find_column(&headers, "T2M");
    let t2m_max_idx = find_column(&headers, "T2M_MAX");
    let t2m_min_idx = find_column(&headers, "T2M_MIN");
    let prectotcorr_idx = find_column(&headers, "PRECTOTCORR");
    let allsky_idx = find_column(&headers, "ALLSKY_SFC_SW_DWN");

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = i + 2; // line 1 is the header
        let date = parse_date(cell(&record, Some(date_idx)).as_deref(), line, path)?;
        rows.push(RawDailyRow {
            date,
            price_ny: cell(&record, Some(price_idx)),
            mid_rate: cell(&record, Some(rate_idx)),
            t2m: cell(&record, t2m_idx),
            t2m_max: cell(&record, t2m_max_idx),
            t2m_min: cell(&record, t2m_min_idx),
            prectotcorr: cell(&record, prectotcorr_idx),
            allsky_sfc_sw_dwn: cell(&record, allsky_idx),
        });
    }
    Ok(rows)
}

/// Read the monthly trend table.
///
/// The file carries two leading non-data lines before its header; the two
/// data columns are taken positionally as month and trend value. Months
/// parse as `YYYY-MM` and map to the first day of the month; duplicate
/// months keep the first occurrence.
pub fn load_trend(path: &Path) -> Result<Vec<TrendRecord>, LoadError> {
    let mut content = String::new();
    open(path)?.read_to_string(&mut content)?;

    // Skip the two leading meta lines; the header follows.
    let data = content
        .splitn(3, '\n')
        .nth(2)
        .ok_or_else(|| LoadError::MissingColumn {
            column: "Month".into(),
            path: path.to_path_buf(),
        })?;

    let mut reader = csv::Reader::from_reader(data.as_bytes());
    if reader.headers()?.len() < 2 {
        return Err(LoadError::MissingColumn {
            column: "Cocoa_Trend".into(),
            path: path.to_path_buf(),
        });
    }

    let mut seen: HashSet<NaiveDate> = HashSet::new();
    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = i + 4; // two skipped lines plus the header
        let raw_month = cell(&record, Some(0));
        let month = parse_month(raw_month.as_deref(), line, path)?;
        if !seen.insert(month) {
            continue;
        }
        let cocoa_trend = cell(&record, Some(1)).and_then(|v| v.parse::<f64>().ok());
        rows.push(TrendRecord { month, cocoa_trend });
    }
    Ok(rows)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io(e)
        }
    })
}

fn require_column(headers: &StringRecord, name: &str, path: &Path) -> Result<usize, LoadError> {
    find_column(headers, name).ok_or_else(|| LoadError::MissingColumn {
        column: name.into(),
        path: path.to_path_buf(),
    })
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

/// Non-empty trimmed cell content, `None` for absent or blank cells.
fn cell(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    let value = record.get(idx?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_date(raw: Option<&str>, line: usize, path: &Path) -> Result<NaiveDate, LoadError> {
    let value = raw.unwrap_or("");
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .map_err(|_| LoadError::BadDate {
            value: value.to_string(),
            line,
            path: path.to_path_buf(),
        })
}

fn parse_month(raw: Option<&str>, line: usize, path: &Path) -> Result<NaiveDate, LoadError> {
    let value = raw.unwrap_or("");
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").map_err(|_| {
        LoadError::BadDate {
            value: value.to_string(),
            line,
            path: path.to_path_buf(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_daily_with_all_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "cocoa.csv",
            "Date,Price_NY,Mid.Rate,T2M,T2M_MAX,T2M_MIN,PRECTOTCORR,ALLSKY_SFC_SW_DWN\n\
             2021-03-01,\"2,543.75\",5.9,26.4,31.0,22.1,0.2,18.5\n\
             2021-03-02,2550,6.0,26.8,31.5,22.4,0.0,19.1\n",
        );

        let rows = load_daily(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
        assert_eq!(rows[0].price_ny.as_deref(), Some("2,543.75"));
        assert_eq!(rows[1].t2m.as_deref(), Some("26.8"));
    }

    #[test]
    fn tolerates_index_year_doy_columns_and_missing_weather() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "cocoa.csv",
            ",Date,Price_NY,Mid.Rate,YEAR,DOY\n\
             0,2021-03-01,2500,5.9,2021,60\n",
        );

        let rows = load_daily(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].price_ny.as_deref(), Some("2500"));
        assert_eq!(rows[0].t2m, None);
    }

    #[test]
    fn missing_price_column_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "cocoa.csv", "Date,Mid.Rate\n2021-03-01,5.9\n");

        let err = load_daily(&path).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { ref column, .. } if column == "Price_NY"));
    }

    #[test]
    fn missing_file_is_distinct_from_format_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_daily(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::InputNotFound { .. }));
    }

    #[test]
    fn unparseable_date_aborts_with_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "cocoa.csv",
            "Date,Price_NY,Mid.Rate\n2021-03-01,2500,5.9\nnot-a-date,2501,5.9\n",
        );

        let err = load_daily(&path).unwrap_err();
        match err {
            LoadError::BadDate { value, line, .. } => {
                assert_eq!(value, "not-a-date");
                assert_eq!(line, 3);
            }
            other => panic!("expected BadDate, got {other:?}"),
        }
    }

    #[test]
    fn slash_dates_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "cocoa.csv",
            "Date,Price_NY,Mid.Rate\n03/01/2021,2500,5.9\n",
        );

        let rows = load_daily(&path).unwrap();
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
    }

    #[test]
    fn loads_trend_skipping_meta_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "multiTimeline.csv",
            "Category: All categories\n\
             \n\
             Month,cocoa: (Worldwide)\n\
             2021-01,64\n\
             2021-02,58\n",
        );

        let rows = load_trend(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].month, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(rows[0].cocoa_trend, Some(64.0));
        assert_eq!(rows[1].cocoa_trend, Some(58.0));
    }

    #[test]
    fn trend_duplicate_months_keep_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "multiTimeline.csv",
            "Category: All categories\n\n Month,cocoa\n2021-01,64\n2021-01,99\n",
        );

        let rows = load_trend(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cocoa_trend, Some(64.0));
    }

    #[test]
    fn trend_garbage_value_degrades_to_null() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "multiTimeline.csv",
            "Category: All categories\n\nMonth,cocoa\n2021-01,<1\n",
        );

        let rows = load_trend(&path).unwrap();
        assert_eq!(rows[0].cocoa_trend, None);
    }

    #[test]
    fn trend_single_column_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "multiTimeline.csv", "meta\n\nMonth\n2021-01\n");

        let err = load_trend(&path).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { .. }));
    }
}

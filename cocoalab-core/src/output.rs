//! CSV export of the monthly aggregate table.
//!
//! Column order matches the downstream modeling dataset contract:
//! Month, Mid.Rate, T2M, T2M_MAX, T2M_MIN, PRECTOTCORR,
//! ALLSKY_SFC_SW_DWN, Cocoa_Trend, logprice, Price_NY, log_return_rate,
//! Is_Holiday, YEAR, MONTH_NUM. Null cells are written empty. The file is
//! written once, overwriting any prior file at the path.

use crate::model::MonthlyAggregate;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to flush csv writer: {0}")]
    Flush(String),
}

pub const OUTPUT_COLUMNS: [&str; 14] = [
    "Month",
    "Mid.Rate",
    "T2M",
    "T2M_MAX",
    "T2M_MIN",
    "PRECTOTCORR",
    "ALLSKY_SFC_SW_DWN",
    "Cocoa_Trend",
    "logprice",
    "Price_NY",
    "log_return_rate",
    "Is_Holiday",
    "YEAR",
    "MONTH_NUM",
];

/// Serialize the monthly table to CSV.
pub fn monthly_to_csv(rows: &[MonthlyAggregate]) -> Result<String, OutputError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(OUTPUT_COLUMNS)?;
    for r in rows {
        wtr.write_record([
            r.month.format("%Y-%m-%d").to_string(),
            fmt(r.mid_rate),
            fmt(r.t2m),
            fmt(r.t2m_max),
            fmt(r.t2m_min),
            fmt(r.prectotcorr),
            fmt(r.allsky_sfc_sw_dwn),
            fmt(r.cocoa_trend),
            fmt(r.log_price),
            fmt(r.price_ny),
            fmt(r.log_return_rate),
            r.is_holiday.to_string(),
            r.year.to_string(),
            r.month_num.to_string(),
        ])?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| OutputError::Flush(e.to_string()))?;
    Ok(String::from_utf8(data)?)
}

/// Write the monthly table to `path`, replacing any existing file.
pub fn write_monthly_csv(path: &Path, rows: &[MonthlyAggregate]) -> Result<(), OutputError> {
    let csv = monthly_to_csv(rows)?;
    std::fs::write(path, csv)?;
    Ok(())
}

fn fmt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.6}"),
        None => String::new(),
    }
}

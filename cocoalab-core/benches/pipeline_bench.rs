use chrono::{Duration, NaiveDate};
use cocoalab_core::clean::clean;
use cocoalab_core::model::{RawDailyRow, TrendRecord};
use cocoalab_core::pipeline::assemble;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Five years of synthetic daily rows with periodic gaps and garbage.
fn synthetic_rows(n: usize) -> Vec<RawDailyRow> {
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let price = 2000.0 + (i % 700) as f64 * 3.5;
            RawDailyRow {
                date: start + Duration::days(i as i64),
                price_ny: match i % 11 {
                    0 => None,
                    1 => Some("garbage".into()),
                    _ => Some(format!("{:.2}", price)),
                },
                mid_rate: Some("5.95".into()),
                t2m: Some(format!("{:.1}", 24.0 + (i % 10) as f64)),
                t2m_max: Some("31.0".into()),
                t2m_min: Some("22.0".into()),
                prectotcorr: if i % 7 == 0 { Some("-1".into()) } else { Some("0.2".into()) },
                allsky_sfc_sw_dwn: Some("18.5".into()),
            }
        })
        .collect()
}

fn synthetic_trend(months: usize) -> Vec<TrendRecord> {
    (0..months)
        .map(|i| TrendRecord {
            month: NaiveDate::from_ymd_opt(2019 + (i / 12) as i32, (i % 12) as u32 + 1, 1).unwrap(),
            cocoa_trend: Some(40.0 + (i % 30) as f64),
        })
        .collect()
}

fn bench_clean(c: &mut Criterion) {
    let rows = synthetic_rows(1825);
    c.bench_function("clean_5y_daily", |b| {
        b.iter(|| clean(black_box(rows.clone())))
    });
}

fn bench_assemble(c: &mut Criterion) {
    let rows = synthetic_rows(1825);
    let trend = synthetic_trend(60);
    c.bench_function("assemble_5y_monthly", |b| {
        b.iter(|| assemble(black_box(rows.clone()), black_box(&trend)))
    });
}

criterion_group!(benches, bench_clean, bench_assemble);
criterion_main!(benches);

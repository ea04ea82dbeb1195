//! Holiday calendar: fixed anchors plus the movable spring holiday.
//!
//! For every year observed in the daily data, three anchor dates (Dec 25,
//! Oct 31, and Gregorian Easter) each expand to an inclusive 11-day window
//! (anchor − 5 through anchor + 5). The union of all windows backs the
//! `is_holiday` feature via a sorted-set lookup.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Days on each side of an anchor date included in its holiday window.
const WINDOW_RADIUS: i64 = 5;

/// Gregorian Easter Sunday for the given year.
///
/// Anonymous Gregorian computus (Meeus/Jones/Butcher). Valid for all years
/// in the Gregorian calendar.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap()
}

/// Anchor dates for one year: Christmas, Halloween, Easter.
fn anchors(year: i32) -> [NaiveDate; 3] {
    [
        NaiveDate::from_ymd_opt(year, 12, 25).unwrap(),
        NaiveDate::from_ymd_opt(year, 10, 31).unwrap(),
        easter_sunday(year),
    ]
}

/// Union of per-year holiday windows with O(log n) membership tests.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    windows: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Build the window union for every given year.
    pub fn from_years(years: impl IntoIterator<Item = i32>) -> Self {
        let mut windows = BTreeSet::new();
        for year in years {
            for anchor in anchors(year) {
                for offset in -WINDOW_RADIUS..=WINDOW_RADIUS {
                    windows.insert(anchor + Duration::days(offset));
                }
            }
        }
        Self { windows }
    }

    /// Whether `date` falls inside any holiday window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.windows.contains(&date)
    }

    /// Number of distinct window days.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn easter_known_dates() {
        assert_eq!(easter_sunday(2020), d(2020, 4, 12));
        assert_eq!(easter_sunday(2021), d(2021, 4, 4));
        assert_eq!(easter_sunday(2022), d(2022, 4, 17));
        assert_eq!(easter_sunday(2023), d(2023, 4, 9));
        assert_eq!(easter_sunday(2024), d(2024, 3, 31));
        assert_eq!(easter_sunday(2025), d(2025, 4, 20));
    }

    #[test]
    fn christmas_window_boundaries() {
        let cal = HolidayCalendar::from_years([2021]);

        // Dec 20 through Dec 30 inclusive are window days.
        for day in 20..=30 {
            assert!(cal.contains(d(2021, 12, day)), "Dec {day} should flag");
        }
        // Dec 19 (−6) and Dec 31 (+6) fall outside the window.
        assert!(!cal.contains(d(2021, 12, 19)));
        assert!(!cal.contains(d(2021, 12, 31)));
    }

    #[test]
    fn halloween_and_easter_windows_present() {
        let cal = HolidayCalendar::from_years([2021]);

        assert!(cal.contains(d(2021, 10, 26)));
        assert!(cal.contains(d(2021, 11, 5)));
        assert!(!cal.contains(d(2021, 11, 6)));

        // Easter 2021 is April 4: window Mar 30 – Apr 9.
        assert!(cal.contains(d(2021, 3, 30)));
        assert!(cal.contains(d(2021, 4, 9)));
        assert!(!cal.contains(d(2021, 3, 29)));
        assert!(!cal.contains(d(2021, 4, 10)));
    }

    #[test]
    fn windows_union_across_years() {
        let cal = HolidayCalendar::from_years([2020, 2021]);
        assert!(cal.contains(d(2020, 12, 25)));
        assert!(cal.contains(d(2021, 12, 25)));
        // 2022 was not observed, so its windows are absent.
        assert!(!cal.contains(d(2022, 12, 25)));
    }

    #[test]
    fn empty_years_empty_calendar() {
        let cal = HolidayCalendar::from_years([]);
        assert!(cal.is_empty());
        assert!(!cal.contains(d(2021, 12, 25)));
    }
}

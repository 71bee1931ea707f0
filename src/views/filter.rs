use crate::data::{MovieRecord, StockRecord};
use chrono::NaiveDate;

/// Anything with a (possibly absent) observation date.
pub trait Dated {
    fn date(&self) -> Option<NaiveDate>;
}

impl Dated for StockRecord {
    fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

impl Dated for MovieRecord {
    fn date(&self) -> Option<NaiveDate> {
        self.release_date
    }
}

/// Rows whose date falls in the closed interval
/// `[Jan 1 start_year, Dec 31 end_year]`. Null dates fail the comparison and
/// drop out. `start_year > end_year` is a valid request and yields an empty
/// result; guarding against nonsensical ranges is the caller's business.
pub fn filter_by_year_range<T: Dated + Clone>(rows: &[T], start_year: i32, end_year: i32) -> Vec<T> {
    let bounds = NaiveDate::from_ymd_opt(start_year, 1, 1)
        .zip(NaiveDate::from_ymd_opt(end_year, 12, 31));
    let Some((start, end)) = bounds else {
        return Vec::new();
    };
    rows.iter()
        .filter(|r| r.date().map_or(false, |d| d >= start && d <= end))
        .cloned()
        .collect()
}

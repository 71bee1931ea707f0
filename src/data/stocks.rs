use super::coerce;
use super::loader::RawTable;
use super::{DataError, Result, StockRecord};
use serde::Serialize;

/// Corporate-action annotation rows carry this marker in one of their
/// fields. The match is exact-substring and case-sensitive, matching the
/// upstream scrape.
const DIVIDEND_MARKER: &str = "Dividend";

/// Normalized price history. Rows keep input order, duplicate dates are
/// preserved, and the table is never mutated after construction; consumers
/// derive filtered views instead.
#[derive(Debug, Clone, Serialize)]
pub struct StockTable {
    records: Vec<StockRecord>,
    dropped_rows: usize,
}

impl StockTable {
    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// How many raw rows were discarded as dividend annotations.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Rows whose date failed coercion. They stay in the table but fall out
    /// of any closed-interval date filter.
    pub fn null_dates(&self) -> usize {
        self.records.iter().filter(|r| r.date.is_none()).count()
    }
}

pub struct StockNormalizer;

impl StockNormalizer {
    /// Single pass over the raw rows: drop annotation rows, coerce the rest.
    /// Row-level defects become nulls; only a missing `Date` column is fatal.
    pub fn normalize(raw: &RawTable) -> Result<StockTable> {
        if raw.column_index("date").is_none() {
            return Err(DataError::MissingColumn("Date".to_string()));
        }

        let mut records = Vec::with_capacity(raw.len());
        let mut dropped_rows = 0;
        for row in raw.rows() {
            if row.iter().any(|field| field.contains(DIVIDEND_MARKER)) {
                dropped_rows += 1;
                continue;
            }
            records.push(StockRecord {
                date: raw.field(row, "date").and_then(coerce::parse_date),
                open: raw.field(row, "open").and_then(coerce::parse_number),
                high: raw.field(row, "high").and_then(coerce::parse_number),
                low: raw.field(row, "low").and_then(coerce::parse_number),
                close: raw.field(row, "close").and_then(coerce::parse_number),
                volume: raw.field(row, "volume").and_then(coerce::parse_count),
            });
        }

        Ok(StockTable {
            records,
            dropped_rows,
        })
    }
}

use super::coerce;
use super::loader::RawTable;
use super::{DataError, MovieRecord, Result};
use crate::types::Brand;
use serde::Serialize;
use std::collections::HashMap;

pub const RELEASE_DATES: &str = "Release Dates";
pub const OPENING_EARNINGS: &str = "Opening Earnings";
pub const GROSS_INCOME: &str = "Gross Income";
pub const MAX_THEATERS: &str = "Max Theaters";

// Columns a listing may lack without failing the load. Derived views that
// depend on one of these check `missing_columns` and degrade instead.
const OPTIONAL_COLUMNS: [&str; 4] =
    [RELEASE_DATES, OPENING_EARNINGS, GROSS_INCOME, MAX_THEATERS];

/// Normalized listing for one brand. `missing_columns` signals schema gaps
/// to the consumer without raising.
#[derive(Debug, Clone, Serialize)]
pub struct MovieTable {
    brand: Brand,
    records: Vec<MovieRecord>,
    missing_columns: Vec<String>,
}

impl MovieTable {
    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn missing_columns(&self) -> &[String] {
        &self.missing_columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        !self.missing_columns.iter().any(|c| c == name)
    }
}

pub struct MovieNormalizer;

impl MovieNormalizer {
    /// Normalize one brand's raw listing. `Title` is the only hard
    /// requirement; every other field coerces null-on-failure and rows are
    /// always retained.
    pub fn normalize(brand: Brand, raw: &RawTable) -> Result<MovieTable> {
        let title_col = raw
            .column_index("title")
            .ok_or_else(|| DataError::MissingColumn("Title".to_string()))?;

        let missing_columns: Vec<String> = OPTIONAL_COLUMNS
            .iter()
            .filter(|c| raw.column_index(c).is_none())
            .map(|c| c.to_string())
            .collect();

        let mut records = Vec::with_capacity(raw.len());
        for row in raw.rows() {
            let title = row.get(title_col).cloned().unwrap_or_default();
            records.push(MovieRecord {
                title,
                brand,
                release_date: raw.field(row, RELEASE_DATES).and_then(coerce::parse_date),
                opening_earnings: raw
                    .field(row, OPENING_EARNINGS)
                    .and_then(coerce::parse_currency),
                gross_income: raw.field(row, GROSS_INCOME).and_then(coerce::parse_currency),
                max_theaters: raw.field(row, MAX_THEATERS).and_then(coerce::parse_count),
            });
        }

        Ok(MovieTable {
            brand,
            records,
            missing_columns,
        })
    }
}

/// All nine normalized listings, keyed by brand: the eight studios plus the
/// pre-merged `Disney Owned` aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct BrandCatalog {
    tables: HashMap<Brand, MovieTable>,
}

impl BrandCatalog {
    pub fn new(tables: HashMap<Brand, MovieTable>) -> Self {
        Self { tables }
    }

    pub fn get(&self, brand: Brand) -> Option<&MovieTable> {
        self.tables.get(&brand)
    }

    /// Lookup by display name, the form the UI layer holds. Names outside
    /// the known key set fail loudly; there is no silent empty default.
    pub fn get_by_name(&self, name: &str) -> Result<&MovieTable> {
        let brand =
            Brand::from_name(name).ok_or_else(|| DataError::UnknownBrand(name.to_string()))?;
        self.tables
            .get(&brand)
            .ok_or_else(|| DataError::UnknownBrand(name.to_string()))
    }

    pub fn brands(&self) -> impl Iterator<Item = Brand> + '_ {
        Brand::ALL
            .into_iter()
            .filter(|b| self.tables.contains_key(b))
    }
}

pub mod cache;
pub mod coerce;
pub mod loader;
pub mod movies;
pub mod stocks;

use crate::types::Brand;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One trading-day observation. Every field is nullable: coercion failures
/// become `None`, never a load failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub date: Option<NaiveDate>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
}

/// One box-office listing under a specific brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub brand: Brand,
    pub release_date: Option<NaiveDate>,
    pub opening_earnings: Option<f64>,
    pub gross_income: Option<f64>,
    pub max_theaters: Option<u64>,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Unknown brand: {0}")]
    UnknownBrand(String),
}

pub type Result<T> = std::result::Result<T, DataError>;

use crate::data::movies::{BrandCatalog, GROSS_INCOME};
use crate::data::{MovieRecord, StockRecord};
use crate::types::Brand;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
}

impl PriceField {
    pub const ALL: [PriceField; 4] = [
        PriceField::Open,
        PriceField::High,
        PriceField::Low,
        PriceField::Close,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PriceField::Open => "Open",
            PriceField::High => "High",
            PriceField::Low => "Low",
            PriceField::Close => "Close",
        }
    }

    fn value(&self, record: &StockRecord) -> Option<f64> {
        match self {
            PriceField::Open => record.open,
            PriceField::High => record.high,
            PriceField::Low => record.low,
            PriceField::Close => record.close,
        }
    }
}

/// One observation-series pair of the long format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeltRow {
    pub date: Option<NaiveDate>,
    pub field: PriceField,
    pub value: Option<f64>,
}

/// Wide-to-long reshape feeding multi-series charts: for each input row in
/// order, one output row per requested field in the listed order. Null
/// values are emitted, not skipped.
pub fn melt(records: &[StockRecord], fields: &[PriceField]) -> Vec<MeltRow> {
    let mut out = Vec::with_capacity(records.len() * fields.len());
    for record in records {
        for field in fields {
            out.push(MeltRow {
                date: record.date,
                field: *field,
                value: field.value(record),
            });
        }
    }
    out
}

/// Group rows by key and sum a nullable value per group, null contributing
/// nothing. Groups come out in order of first appearance.
pub fn sum_by_group<T, K, V>(rows: &[T], key: K, value: V) -> Vec<(String, f64)>
where
    K: Fn(&T) -> String,
    V: Fn(&T) -> Option<f64>,
{
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();
    for row in rows {
        let k = key(row);
        if !totals.contains_key(&k) {
            order.push(k.clone());
        }
        *totals.entry(k).or_insert(0.0) += value(row).unwrap_or(0.0);
    }
    order
        .into_iter()
        .map(|k| {
            let total = totals[&k];
            (k, total)
        })
        .collect()
}

/// Total gross income per studio brand across the catalog. Returns `None`
/// when any studio listing lacks the gross column (the non-fatal schema
/// degrade) or has not been loaded; callers skip the dependent chart.
pub fn gross_by_brand(catalog: &BrandCatalog) -> Option<Vec<(String, f64)>> {
    let mut rows: Vec<&MovieRecord> = Vec::new();
    for brand in Brand::studios() {
        let table = catalog.get(brand)?;
        if !table.has_column(GROSS_INCOME) {
            return None;
        }
        rows.extend(table.records());
    }
    Some(sum_by_group(
        &rows,
        |r| r.brand.to_string(),
        |r| r.gross_income,
    ))
}

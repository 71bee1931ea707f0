mod filter;
mod reshape;

pub use filter::{filter_by_year_range, Dated};
pub use reshape::{gross_by_brand, melt, sum_by_group, MeltRow, PriceField};

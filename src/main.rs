use anyhow::{anyhow, Result};
use boxoffice_toolkit::config::Config;
use boxoffice_toolkit::data::cache::DatasetCache;
use boxoffice_toolkit::data::loader::DataLoader;
use boxoffice_toolkit::data::movies::{BrandCatalog, MovieNormalizer, MovieTable};
use boxoffice_toolkit::data::stocks::{StockNormalizer, StockTable};
use boxoffice_toolkit::types::Brand;
use boxoffice_toolkit::views::{filter_by_year_range, gross_by_brand, melt, PriceField};
use std::collections::HashMap;
use std::env;

fn main() -> Result<()> {
    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "config/dashboard.yaml".to_string());
    let config = Config::load(&config_path)?;
    println!(
        "Loaded dashboard configuration: {} movie sources, years {}-{}",
        config.movie_sources.len(),
        config.dashboard.year_min,
        config.dashboard.year_max
    );

    // Stocks: one source, loaded once per session.
    let mut stock_cache: DatasetCache<StockTable> = DatasetCache::new();
    let stocks = stock_cache.get_or_load(&config.stock_source, || {
        let raw = DataLoader::read_csv_path(&config.stock_source)?;
        StockNormalizer::normalize(&raw)
    })?;

    println!("\n=== Stock price history ===");
    println!("Rows: {}", stocks.len());
    println!("Dividend annotation rows dropped: {}", stocks.dropped_rows());
    println!("Rows with unparseable dates: {}", stocks.null_dates());

    let year = config.dashboard.default_year;
    let in_year = filter_by_year_range(stocks.records(), year, year);
    println!("Trading rows in {}: {}", year, in_year.len());
    let long = melt(&in_year, &PriceField::ALL);
    println!(
        "Long-format rows for the {} OHLC chart: {}",
        year,
        long.len()
    );

    // Movies: nine sources (eight studios plus the merged listing), each
    // loaded once and assembled into the catalog.
    let mut movie_cache: DatasetCache<MovieTable> = DatasetCache::new();
    let mut tables: HashMap<Brand, MovieTable> = HashMap::new();
    for source in &config.movie_sources {
        let brand = Brand::from_name(&source.name)
            .ok_or_else(|| anyhow!("config names unknown brand: {}", source.name))?;
        let table = movie_cache.get_or_load(&source.name, || {
            let raw = DataLoader::read_csv_path(&source.path)?;
            MovieNormalizer::normalize(brand, &raw)
        })?;
        tables.insert(brand, table.clone());
    }
    let catalog = BrandCatalog::new(tables);

    println!("\n=== Movie catalog ===");
    for brand in catalog.brands() {
        let table = catalog.get_by_name(brand.display_name())?;
        print!("{}: {} titles", brand, table.len());
        if table.missing_columns().is_empty() {
            println!();
        } else {
            println!(" (missing columns: {})", table.missing_columns().join(", "));
        }
    }

    println!("\n=== Gross income by brand ===");
    match gross_by_brand(&catalog) {
        Some(sums) => {
            for (brand, total) in sums {
                println!("{}: ${:.0}", brand, total);
            }
        }
        None => println!("Gross income column unavailable; skipping the brand chart."),
    }

    Ok(())
}

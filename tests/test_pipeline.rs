use boxoffice_toolkit::data::cache::DatasetCache;
use boxoffice_toolkit::data::loader::{DataLoader, RawTable};
use boxoffice_toolkit::data::movies::{BrandCatalog, MovieNormalizer, MovieTable, GROSS_INCOME};
use boxoffice_toolkit::data::stocks::{StockNormalizer, StockTable};
use boxoffice_toolkit::data::DataError;
use boxoffice_toolkit::types::Brand;
use boxoffice_toolkit::views::{filter_by_year_range, gross_by_brand, melt, PriceField};
use chrono::NaiveDate;
use std::collections::HashMap;

fn load_stocks() -> StockTable {
    let raw = DataLoader::read_csv_path("tests/data/sample_stocks.csv")
        .expect("failed to read stock fixture");
    StockNormalizer::normalize(&raw).expect("failed to normalize stocks")
}

fn empty_listing(brand: Brand) -> MovieTable {
    let raw = RawTable::new(
        vec![
            "Title".to_string(),
            "Release Dates".to_string(),
            "Opening Earnings".to_string(),
            "Gross Income".to_string(),
            "Max Theaters".to_string(),
        ],
        Vec::new(),
    );
    MovieNormalizer::normalize(brand, &raw).expect("failed to normalize empty listing")
}

fn load_brand(brand: Brand, path: &str) -> MovieTable {
    let raw = DataLoader::read_csv_path(path).expect("failed to read movie fixture");
    MovieNormalizer::normalize(brand, &raw).expect("failed to normalize movies")
}

/// Catalog with real Marvel/Pixar fixtures and empty but fully schemed
/// listings for the remaining studios.
fn full_catalog() -> BrandCatalog {
    let mut tables = HashMap::new();
    tables.insert(
        Brand::Marvel,
        load_brand(Brand::Marvel, "tests/data/marvel_movies.csv"),
    );
    tables.insert(
        Brand::Pixar,
        load_brand(Brand::Pixar, "tests/data/pixar_movies.csv"),
    );
    for brand in Brand::studios() {
        tables
            .entry(brand)
            .or_insert_with(|| empty_listing(brand));
    }
    tables.insert(Brand::DisneyOwned, empty_listing(Brand::DisneyOwned));
    BrandCatalog::new(tables)
}

#[test]
fn stock_pipeline_end_to_end() {
    let stocks = load_stocks();

    // 7 raw rows: one dividend annotation dropped, one null-date row kept.
    assert_eq!(stocks.len(), 6);
    assert_eq!(stocks.dropped_rows(), 1);
    assert_eq!(stocks.null_dates(), 1);

    // Volume survives group separators; failed open coerces to null.
    assert_eq!(stocks.records()[0].volume, Some(6_767_600));
    let last = stocks.records().last().unwrap();
    assert_eq!(last.open, None);
    assert_eq!(last.close, Some(177.63));
}

#[test]
fn year_filter_is_closed_and_excludes_null_dates() {
    let stocks = load_stocks();
    let in_2020 = filter_by_year_range(stocks.records(), 2020, 2020);

    let dates: Vec<_> = in_2020.iter().map(|r| r.date.unwrap()).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
            NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
        ]
    );
    assert!(filter_by_year_range(stocks.records(), 2021, 2020).is_empty());
}

#[test]
fn melt_feeds_the_ohlc_chart() {
    let stocks = load_stocks();
    let in_2020 = filter_by_year_range(stocks.records(), 2020, 2020);
    let long = melt(&in_2020, &PriceField::ALL);

    assert_eq!(long.len(), in_2020.len() * 4);
    assert_eq!(long[0].field, PriceField::Open);
    assert_eq!(long[0].value, Some(145.31));
    assert_eq!(long[3].field, PriceField::Close);
}

#[test]
fn catalog_lookup_and_brand_totals() {
    let catalog = full_catalog();

    let marvel = catalog.get_by_name("Marvel").expect("Marvel should exist");
    assert_eq!(marvel.len(), 3);
    // Null-on-failure currency policy, applied uniformly.
    assert_eq!(marvel.records()[2].gross_income, None);

    match catalog.get_by_name("Nonexistent") {
        Err(DataError::UnknownBrand(name)) => assert_eq!(name, "Nonexistent"),
        other => panic!("expected UnknownBrand, got {other:?}"),
    }

    let sums = gross_by_brand(&catalog).expect("gross column present everywhere");
    let totals: HashMap<_, _> = sums.into_iter().collect();
    assert_eq!(
        totals.get("Marvel").copied(),
        Some(1_518_812_988.0 + 1_346_913_161.0)
    );
    assert_eq!(
        totals.get("Pixar").copied(),
        Some(1_073_394_593.0 + 121_886_598.0)
    );
}

#[test]
fn missing_gross_column_degrades_brand_totals() {
    let mut tables = HashMap::new();
    for brand in Brand::studios() {
        tables.insert(brand, empty_listing(brand));
    }
    // Disneynature's scrape has no earnings columns at all.
    tables.insert(
        Brand::Disneynature,
        load_brand(Brand::Disneynature, "tests/data/disneynature_movies.csv"),
    );
    let catalog = BrandCatalog::new(tables);

    let nature = catalog.get(Brand::Disneynature).unwrap();
    assert!(!nature.has_column(GROSS_INCOME));
    assert_eq!(nature.len(), 2);
    assert_eq!(gross_by_brand(&catalog), None);
}

#[test]
fn sources_load_once_per_session() {
    let mut cache: DatasetCache<StockTable> = DatasetCache::new();
    let mut loads = 0;
    for _ in 0..3 {
        cache
            .get_or_load("stocks", || {
                loads += 1;
                let raw = DataLoader::read_csv_path("tests/data/sample_stocks.csv")?;
                StockNormalizer::normalize(&raw)
            })
            .expect("load failed");
    }
    assert_eq!(loads, 1);
}

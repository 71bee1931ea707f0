use super::Result;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

/// A CSV source read as-is: header row plus loosely typed string rows.
/// Extraneous columns are preserved and simply never looked up; short rows
/// (the reader is flexible) read as missing fields.
#[derive(Debug, Clone)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Case-insensitive header lookup; scraped sources are inconsistent
    /// about capitalization.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    }

    /// Field of `row` under the named column, if both the column and the
    /// cell exist.
    pub fn field<'a>(&self, row: &'a [String], name: &str) -> Option<&'a str> {
        self.column_index(name)
            .and_then(|i| row.get(i))
            .map(String::as_str)
    }
}

pub struct DataLoader;

impl DataLoader {
    pub fn read_csv<R: Read>(reader: R) -> Result<RawTable> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(RawTable { headers, rows })
    }

    pub fn read_csv_path<P: AsRef<Path>>(path: P) -> Result<RawTable> {
        let file = std::fs::File::open(path)?;
        Self::read_csv(file)
    }
}

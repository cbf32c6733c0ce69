//! CSV table reading with column access by header name.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord};

/// One fully-loaded CSV table: header row plus records, in file order.
#[derive(Debug, Clone)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl CsvTable {
    pub fn read(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("failed to open {}", path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("failed to read header of {}", path.display()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record.with_context(|| format!("failed to read {}", path.display()))?);
        }

        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("missing column '{}'", name))
    }

    /// Keep only rows whose `name` cell parses to exactly `value`.
    /// Blank and unparseable cells never match.
    pub fn filter_numeric_eq(&self, name: &str, value: f64) -> Result<Self> {
        let col = self.column_index(name)?;
        let rows = self
            .rows
            .iter()
            .filter(|row| parse_cell(cell(row, col)) == Some(value))
            .cloned()
            .collect();
        Ok(Self {
            headers: self.headers.clone(),
            rows,
        })
    }

    /// Numeric column; blank or unparseable cells become not-a-number.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let col = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| parse_cell(cell(row, col)).unwrap_or(f64::NAN))
            .collect())
    }

    /// Integer column; blank or unparseable cells become -1.
    pub fn integer_column(&self, name: &str) -> Result<Vec<i64>> {
        let col = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| match parse_cell(cell(row, col)) {
                Some(v) => v as i64,
                None => -1,
            })
            .collect())
    }

    pub fn string_column(&self, name: &str) -> Result<Vec<String>> {
        let col = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| cell(row, col).to_string())
            .collect())
    }

    pub fn require_columns(&self, names: &[&str]) -> Result<()> {
        let missing: Vec<&str> = names
            .iter()
            .copied()
            .filter(|&name| self.column_index(name).is_err())
            .collect();
        if !missing.is_empty() {
            bail!("missing required columns: {}", missing.join(", "));
        }
        Ok(())
    }
}

fn cell(row: &StringRecord, col: usize) -> &str {
    row.get(col).unwrap_or("")
}

fn parse_cell(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

//! Submission table writer.
//!
//! One row per (subject, forecast month), subject-major, months 1..84.
//! Header text must match the external submission template byte for
//! byte; not-a-number cells are written blank.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Months, NaiveDate};

use crate::forecast::{FORECAST_MONTHS, ForecastSet};

pub const SUBMISSION_HEADERS: [&str; 12] = [
    "RID",
    "Forecast Month",
    "Forecast Date",
    "CN relative probability",
    "MCI relative probability",
    "AD relative probability",
    "ADAS13",
    "ADAS13 50% CI lower",
    "ADAS13 50% CI upper",
    "Ventricles_ICV",
    "Ventricles_ICV 50% CI lower",
    "Ventricles_ICV 50% CI upper",
];

/// First forecast date; independent of any input row.
pub fn forecast_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 5, 1).expect("valid calendar date")
}

/// "YYYY-MM" date for 1-based forecast month `month`.
pub fn forecast_date(month: usize) -> Result<String> {
    let date = forecast_start_date()
        .checked_add_months(Months::new(month as u32 - 1))
        .context("forecast date out of range")?;
    Ok(date.format("%Y-%m").to_string())
}

pub fn write_submission(path: &Path, forecasts: &ForecastSet) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    writer.write_record(SUBMISSION_HEADERS)?;
    for subject in &forecasts.subjects {
        for month in 1..=FORECAST_MONTHS {
            writer.write_record(&[
                subject.rid.to_string(),
                month.to_string(),
                forecast_date(month)?,
                numeric_cell(subject.status.cn),
                numeric_cell(subject.status.mci),
                numeric_cell(subject.status.ad),
                numeric_cell(subject.adas13.best),
                numeric_cell(subject.adas13.lower),
                numeric_cell(subject.adas13.upper),
                numeric_cell(subject.ventricles_icv.best),
                numeric_cell(subject.ventricles_icv.lower),
                numeric_cell(subject.ventricles_icv.upper),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn numeric_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

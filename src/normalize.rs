//! Column normalization: unify both tables into one set of parallel
//! arrays with sentinel-encoded missing values.
//!
//! Every function returns fresh arrays; inputs are never mutated.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use crate::columns::{ColumnSet, RawStatus, RawTables};

/// Sentinel for a missing numeric observation.
pub const MISSING: f64 = -1.0;

/// Epoch for the exam-month scale.
pub fn months_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid calendar date")
}

/// Current-status label from a raw `DX` history cell.
///
/// History cells read "<prior> to <current>"; the current status is the
/// text after the last space. A cell with no space is already a plain
/// status and is returned whole. Missing becomes the empty label.
pub fn current_status_label(raw: &RawStatus) -> String {
    match raw {
        RawStatus::Missing => String::new(),
        RawStatus::Text(s) => match s.rfind(' ') {
            Some(idx) => s[idx + 1..].to_string(),
            None => s.clone(),
        },
    }
}

/// Replace not-a-number cells with the missing sentinel.
pub fn fill_missing(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|v| if v.is_nan() { MISSING } else { *v })
        .collect()
}

/// ICV column adjusted for ratio computation: wherever the volume is
/// missing, ICV is forced to 1 so volume/ICV stays at the sentinel.
pub fn icv_for_ratio(icv: &[f64], ventricles: &[f64]) -> Vec<f64> {
    icv.iter()
        .zip(ventricles)
        .map(|(i, v)| if *v == MISSING { 1.0 } else { *i })
        .collect()
}

/// Elementwise volume / intracranial-volume ratio.
pub fn volume_ratio(ventricles: &[f64], icv: &[f64]) -> Vec<f64> {
    ventricles.iter().zip(icv).map(|(v, i)| v / i).collect()
}

/// Months since the 2000-01-01 epoch for a "YYYY-MM-DD" exam date.
///
/// Uses the 365-day-year approximation (days / 365 * 12), not calendar
/// months.
pub fn exam_month_offset(date: &str) -> Result<f64> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("unparseable exam date '{}'", date))?;
    let days = (parsed - months_epoch()).num_days();
    Ok(days as f64 / 365.0 * 12.0)
}

/// Concatenate both tables (D1_D2 block first) and derive the unified
/// columns used by the forecaster.
pub fn unify(tables: &RawTables) -> Result<ColumnSet> {
    let n = tables.d1d2.len() + tables.d3.len();

    let rid: Vec<i64> = concat(&tables.d1d2.rid, &tables.d3.rid);
    let adas13 = fill_missing(&concat(&tables.d1d2.adas13, &tables.d3.adas13));
    let ventricles = fill_missing(&concat(&tables.d1d2.ventricles, &tables.d3.ventricles));
    let icv_raw = fill_missing(&concat(&tables.d1d2.icv, &tables.d3.icv));
    let icv = icv_for_ratio(&icv_raw, &ventricles);
    let ventricles_icv = volume_ratio(&ventricles, &icv);

    let status: Vec<String> = tables
        .d1d2
        .dx
        .iter()
        .chain(&tables.d3.dx)
        .map(current_status_label)
        .collect();

    let mut exam_month = Vec::with_capacity(n);
    for date in tables.d1d2.examdate.iter().chain(&tables.d3.examdate) {
        exam_month.push(exam_month_offset(date)?);
    }

    let mut in_target = vec![false; tables.d1d2.len()];
    in_target.extend(std::iter::repeat(true).take(tables.d3.len()));

    ensure_len(adas13.len(), n, "ADAS13")?;
    ensure_len(ventricles.len(), n, "Ventricles")?;
    ensure_len(icv.len(), n, "ICV")?;
    ensure_len(ventricles_icv.len(), n, "Ventricles_ICV")?;
    ensure_len(status.len(), n, "status")?;
    ensure_len(exam_month.len(), n, "exam month")?;
    ensure_len(in_target.len(), n, "target flag")?;

    Ok(ColumnSet {
        rid,
        adas13,
        ventricles,
        icv,
        ventricles_icv,
        status,
        exam_month,
        in_target,
    })
}

fn concat<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

fn ensure_len(got: usize, expected: usize, name: &str) -> Result<()> {
    if got != expected {
        bail!("{} column length mismatch: {} != {}", name, got, expected);
    }
    Ok(())
}

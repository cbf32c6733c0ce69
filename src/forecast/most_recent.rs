//! Most-recent-observation selection.
//!
//! Ordering contract: rows are scanned in concatenation order (D1_D2
//! block then D3 block); among rows sharing the maximum exam month, the
//! last one scanned wins.

use crate::normalize::MISSING;

/// Latest positive value among the given rows, or the missing sentinel.
pub fn most_recent_positive(rows: &[usize], exam_month: &[f64], values: &[f64]) -> f64 {
    let mut best = MISSING;
    let mut best_month = f64::NEG_INFINITY;
    for &r in rows {
        if values[r] > 0.0 && exam_month[r] >= best_month {
            best_month = exam_month[r];
            best = values[r];
        }
    }
    best
}

/// Latest non-empty status label among the given rows, or the empty
/// label.
pub fn most_recent_status(rows: &[usize], exam_month: &[f64], status: &[String]) -> String {
    let mut best = String::new();
    let mut best_month = f64::NEG_INFINITY;
    for &r in rows {
        if !status[r].is_empty() && exam_month[r] >= best_month {
            best_month = exam_month[r];
            best = status[r].clone();
        }
    }
    best
}

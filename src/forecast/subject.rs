//! Per-subject forecast construction.

use tracing::info;

use crate::columns::ColumnSet;
use crate::forecast::defaults::PopulationDefaults;
use crate::forecast::most_recent::{most_recent_positive, most_recent_status};
use crate::forecast::{Interval, StatusProbs, SubjectForecast};

/// Fixed status likelihoods per current diagnosis. Anything outside the
/// known vocabulary, including the empty label, gets the near-uniform
/// triple.
pub fn status_probabilities(status: &str, verbose: bool) -> StatusProbs {
    match status {
        "NL" => StatusProbs {
            cn: 1.0,
            mci: 0.0,
            ad: 0.0,
        },
        "MCI" => StatusProbs {
            cn: 0.0,
            mci: 1.0,
            ad: 0.0,
        },
        "Dementia" => StatusProbs {
            cn: 0.0,
            mci: 0.0,
            ad: 1.0,
        },
        other => {
            if verbose {
                info!(status = %other, "unrecognised clinical status, using uniform likelihoods");
            }
            StatusProbs {
                cn: 0.33,
                mci: 0.33,
                ad: 0.34,
            }
        }
    }
}

/// Round to 9 decimal places.
pub fn round_9dp(x: f64) -> f64 {
    (x * 1e9).round() / 1e9
}

/// Build one subject's forecast from their target-flagged rows: carry the
/// most recent valid observation forward, or fall back to the population
/// defaults.
pub fn forecast_subject(
    columns: &ColumnSet,
    defaults: &PopulationDefaults,
    rid: i64,
    verbose: bool,
) -> SubjectForecast {
    let rows: Vec<usize> = (0..columns.len())
        .filter(|&r| columns.rid[r] == rid && columns.in_target[r])
        .collect();

    let status = most_recent_status(&rows, &columns.exam_month, &columns.status);
    let adas13 = most_recent_positive(&rows, &columns.exam_month, &columns.adas13);
    let ratio = most_recent_positive(&rows, &columns.exam_month, &columns.ventricles_icv);

    let adas13 = if adas13 >= 0.0 {
        Interval {
            best: adas13,
            lower: (adas13 - 1.0).max(0.0),
            upper: adas13 + 1.0,
        }
    } else {
        Interval {
            best: defaults.adas13_typical,
            lower: defaults.adas13_typical - defaults.adas13_margin,
            upper: defaults.adas13_typical + defaults.adas13_margin,
        }
    };

    let ventricles_icv = if ratio > 0.0 {
        Interval {
            best: ratio,
            lower: ratio - defaults.ventricles_icv_default_margin,
            upper: ratio + defaults.ventricles_icv_default_margin,
        }
    } else {
        Interval {
            best: defaults.ventricles_icv_typical,
            lower: defaults.ventricles_icv_typical - defaults.ventricles_icv_broad_margin,
            upper: defaults.ventricles_icv_typical + defaults.ventricles_icv_broad_margin,
        }
    };

    SubjectForecast {
        rid,
        status: status_probabilities(&status, verbose),
        adas13,
        ventricles_icv: ventricles_icv.map(round_9dp),
    }
}

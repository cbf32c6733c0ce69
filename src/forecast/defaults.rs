//! Population-level fallback values for subjects with no usable history.

use anyhow::{Context, Result};

use crate::columns::ColumnSet;
use crate::math::stats::{LinearFit, polyfit_linear};

/// Typical ventricle volume in raw units, used when a subject has no
/// imaging history.
pub const VENTRICLES_TYPICAL: f64 = 25000.0;
/// Broad 50% CI half-width (raw units) around the typical volume.
pub const VENTRICLES_BROAD_MARGIN: f64 = 20000.0;
/// Default 50% CI half-width (raw units) around an observed volume.
pub const VENTRICLES_DEFAULT_MARGIN: f64 = 1000.0;

/// Typical ADAS13 score, used when a subject has no score history.
pub const ADAS13_TYPICAL: f64 = 12.0;
/// 50% CI half-width around the typical ADAS13 score.
pub const ADAS13_MARGIN: f64 = 10.0;

/// Defaults computed once over the full observation set. The raw-volume
/// constants are mapped into ratio space through a least-squares line of
/// Ventricles_ICV against Ventricles.
#[derive(Debug, Clone, Copy)]
pub struct PopulationDefaults {
    pub fit: LinearFit,
    pub ventricles_icv_typical: f64,
    pub ventricles_icv_broad_margin: f64,
    pub ventricles_icv_default_margin: f64,
    pub adas13_typical: f64,
    pub adas13_margin: f64,
}

impl PopulationDefaults {
    pub fn from_observations(columns: &ColumnSet) -> Result<Self> {
        let mut x = Vec::new();
        let mut y = Vec::new();
        for r in 0..columns.len() {
            if columns.ventricles[r] > 0.0 && columns.icv[r] > 0.0 {
                x.push(columns.ventricles[r]);
                y.push(columns.ventricles_icv[r]);
            }
        }

        let fit = polyfit_linear(&x, &y)
            .context("cannot fit volume-to-ratio line over the observation set")?;
        let half_span = |margin: f64| (fit.eval(margin) - fit.eval(-margin)).abs() / 2.0;

        Ok(Self {
            fit,
            ventricles_icv_typical: fit.eval(VENTRICLES_TYPICAL),
            ventricles_icv_broad_margin: half_span(VENTRICLES_BROAD_MARGIN),
            ventricles_icv_default_margin: half_span(VENTRICLES_DEFAULT_MARGIN),
            adas13_typical: ADAS13_TYPICAL,
            adas13_margin: ADAS13_MARGIN,
        })
    }
}

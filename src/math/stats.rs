//! Small numeric primitives.

use anyhow::{Result, bail};

/// Degree-1 polynomial fitted by ordinary least squares.
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Least-squares line through (x, y). Requires at least two distinct
/// x values; anything less leaves the slope undefined.
pub fn polyfit_linear(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    if x.len() != y.len() {
        bail!("polyfit input length mismatch: {} != {}", x.len(), y.len());
    }
    if x.is_empty() {
        bail!("polyfit requires at least one observation");
    }

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        sxx += dx * dx;
        sxy += dx * (yi - y_mean);
    }

    if sxx == 0.0 {
        bail!("polyfit requires at least two distinct x values");
    }

    let slope = sxy / sxx;
    Ok(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

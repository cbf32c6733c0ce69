use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::forecast::defaults::PopulationDefaults;
use crate::forecast::subject::forecast_subject;
use crate::forecast::{ForecastSet, target_cohort};
use crate::pipeline::Stage;
use crate::schema::v1::DefaultsMeta;

pub struct Stage3Forecast;

impl Stage3Forecast {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Forecast {
    fn name(&self) -> &'static str {
        "stage3_forecast"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let columns = match &ctx.columns {
            Some(columns) => columns,
            None => bail!("columns not unified before Stage 3"),
        };

        let defaults = PopulationDefaults::from_observations(columns)?;
        info!(
            ventricles_icv_typical = defaults.ventricles_icv_typical,
            ventricles_icv_broad_margin = defaults.ventricles_icv_broad_margin,
            ventricles_icv_default_margin = defaults.ventricles_icv_default_margin,
            "population_defaults_ready"
        );

        let cohort = target_cohort(columns);
        let empty_cohort = cohort.is_empty();
        if empty_cohort {
            warn!("no target-flagged rows; the submission table will be empty");
        }

        let subjects = cohort
            .iter()
            .map(|&rid| forecast_subject(columns, &defaults, rid, ctx.verbose))
            .collect();

        ctx.report.defaults = Some(DefaultsMeta {
            ventricles_icv_typical: defaults.ventricles_icv_typical,
            ventricles_icv_broad_margin: defaults.ventricles_icv_broad_margin,
            ventricles_icv_default_margin: defaults.ventricles_icv_default_margin,
            adas13_typical: defaults.adas13_typical,
            adas13_margin: defaults.adas13_margin,
        });
        ctx.report.forecast.subjects = Some(cohort.len() as u64);

        if empty_cohort {
            ctx.warnings
                .push("no target-flagged rows in the input tables".to_string());
        }

        info!(subjects = cohort.len(), "forecast_ready");
        ctx.defaults = Some(defaults);
        ctx.cohort = cohort;
        ctx.forecasts = Some(ForecastSet { subjects });
        Ok(())
    }
}

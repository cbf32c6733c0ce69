use std::path::PathBuf;

use crate::columns::{ColumnSet, RawTables};
use crate::forecast::defaults::PopulationDefaults;
use crate::forecast::{FORECAST_MONTHS, ForecastSet};
use crate::schema::v1::RunReportV1;

pub const D1_D2_FILE: &str = "TADPOLE_D1_D2.csv";
pub const D3_FILE: &str = "TADPOLE_D3.csv";
pub const SUBMISSION_FILE: &str = "TADPOLE_Submission_BenchmarkLastVisit-ID-5.csv";
pub const REPORT_FILE: &str = "run_report.json";

#[derive(Debug, Clone, Default)]
pub struct InputMeta {
    pub d1d2_rows: Option<u64>,
    pub d3_rows: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub submission_path: PathBuf,
    pub json_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub d1d2_path: PathBuf,
    pub d3_path: PathBuf,
    pub verbose: bool,
    pub write_json: bool,
    pub raw: Option<RawTables>,
    pub columns: Option<ColumnSet>,
    pub cohort: Vec<i64>,
    pub defaults: Option<PopulationDefaults>,
    pub forecasts: Option<ForecastSet>,
    pub warnings: Vec<String>,
    pub input_meta: InputMeta,
    pub output: OutputPaths,
    pub report: RunReportV1,
}

impl Ctx {
    pub fn new(
        data_dir: PathBuf,
        out_dir: PathBuf,
        verbose: bool,
        write_json: bool,
        tool_version: &str,
    ) -> Self {
        let submission_path = out_dir.join(SUBMISSION_FILE);
        let json_path = out_dir.join(REPORT_FILE);
        let report = RunReportV1::empty(tool_version, FORECAST_MONTHS as u64);
        Self {
            d1d2_path: data_dir.join(D1_D2_FILE),
            d3_path: data_dir.join(D3_FILE),
            verbose,
            write_json,
            raw: None,
            columns: None,
            cohort: Vec::new(),
            defaults: None,
            forecasts: None,
            warnings: Vec::new(),
            input_meta: InputMeta::default(),
            output: OutputPaths {
                out_dir,
                submission_path,
                json_path,
            },
            report,
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub d1d2_rows: Option<u64>,
    pub d3_rows: Option<u64>,
    pub observation_rows: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsMeta {
    pub ventricles_icv_typical: f64,
    pub ventricles_icv_broad_margin: f64,
    pub ventricles_icv_default_margin: f64,
    pub adas13_typical: f64,
    pub adas13_margin: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastMeta {
    pub subjects: Option<u64>,
    pub months_per_subject: u64,
    pub rows: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReportV1 {
    pub tool: ToolInfo,
    pub input: InputMeta,
    pub defaults: Option<DefaultsMeta>,
    pub forecast: ForecastMeta,
    pub submission_path: Option<String>,
    pub warnings: Vec<String>,
}

impl RunReportV1 {
    pub fn empty(tool_version: &str, months_per_subject: u64) -> Self {
        Self {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: tool_version.to_string(),
            },
            input: InputMeta {
                d1d2_rows: None,
                d3_rows: None,
                observation_rows: None,
            },
            defaults: None,
            forecast: ForecastMeta {
                subjects: None,
                months_per_subject,
                rows: None,
            },
            submission_path: None,
            warnings: Vec::new(),
        }
    }
}

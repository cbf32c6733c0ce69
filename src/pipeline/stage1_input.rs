use std::path::Path;

use anyhow::{Result, bail};
use tracing::info;

use crate::columns::{RawStatus, RawTables, TableColumns};
use crate::ctx::Ctx;
use crate::io::table::CsvTable;
use crate::pipeline::Stage;

pub const REQUIRED_D1_D2: [&str; 7] = [
    "RID",
    "D2",
    "DX",
    "ADAS13",
    "Ventricles",
    "ICV_bl",
    "EXAMDATE",
];
pub const REQUIRED_D3: [&str; 6] = ["RID", "DX", "ADAS13", "Ventricles", "ICV", "EXAMDATE"];

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        check_input_files(&ctx.d1d2_path, &ctx.d3_path)?;

        let d1d2 = CsvTable::read(&ctx.d1d2_path)?;
        d1d2.require_columns(&REQUIRED_D1_D2)?;
        // Keep only the historical rows; D2 == 1 marks the rolling
        // forecast cohort, which D3 supersedes here.
        let d1d2 = d1d2.filter_numeric_eq("D2", 0.0)?;

        let d3 = CsvTable::read(&ctx.d3_path)?;
        d3.require_columns(&REQUIRED_D3)?;

        info!(
            d1d2_rows = d1d2.len(),
            d3_rows = d3.len(),
            "input_tables_loaded"
        );

        ctx.input_meta.d1d2_rows = Some(d1d2.len() as u64);
        ctx.input_meta.d3_rows = Some(d3.len() as u64);
        ctx.report.input.d1d2_rows = ctx.input_meta.d1d2_rows;
        ctx.report.input.d3_rows = ctx.input_meta.d3_rows;

        ctx.raw = Some(RawTables {
            d1d2: extract_columns(&d1d2, "ICV_bl")?,
            d3: extract_columns(&d3, "ICV")?,
        });
        Ok(())
    }
}

/// Both inputs must exist before any processing starts. Every missing
/// path is reported on standard output, then the run terminates.
fn check_input_files(d1d2_path: &Path, d3_path: &Path) -> Result<()> {
    let mut missing = Vec::new();
    for path in [d1d2_path, d3_path] {
        if !path.exists() {
            println!(
                "File {} does not exist!\nYou need to download it from ADNI\n and/or move it in the right directory",
                path.display()
            );
            missing.push(path.display().to_string());
        }
    }
    if !missing.is_empty() {
        bail!("missing input files: {}", missing.join(", "));
    }
    Ok(())
}

fn extract_columns(table: &CsvTable, icv_column: &str) -> Result<TableColumns> {
    Ok(TableColumns {
        rid: table.integer_column("RID")?,
        adas13: table.numeric_column("ADAS13")?,
        ventricles: table.numeric_column("Ventricles")?,
        icv: table.numeric_column(icv_column)?,
        dx: table
            .string_column("DX")?
            .iter()
            .map(|cell| RawStatus::from_cell(cell))
            .collect(),
        examdate: table.string_column("EXAMDATE")?,
    })
}

/// Presence and header check used by the `validate` subcommand.
pub fn validate_inputs(d1d2_path: &Path, d3_path: &Path) -> Result<String> {
    check_input_files(d1d2_path, d3_path)?;

    let mut out = String::new();
    let d1d2 = CsvTable::read(d1d2_path)?;
    d1d2.require_columns(&REQUIRED_D1_D2)?;
    out.push_str(&format!(
        "{}: ok ({} rows)\n",
        d1d2_path.display(),
        d1d2.len()
    ));

    let d3 = CsvTable::read(d3_path)?;
    d3.require_columns(&REQUIRED_D3)?;
    out.push_str(&format!("{}: ok ({} rows)\n", d3_path.display(), d3.len()));

    Ok(out)
}

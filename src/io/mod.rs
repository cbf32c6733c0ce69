use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;

use crate::schema::v1::RunReportV1;

pub mod json_writer;
pub mod submission;
pub mod summary;
pub mod table;

pub fn write_json(path: &Path, report: &RunReportV1) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

// ! Writer module for assembling output workbooks

mod xlsx_writer;

pub use xlsx_writer::write_workbook;

use anyhow::{Context, Result};
use std::path::Path;

use crate::table::ProjectedTable;

/// Serialize the projections and write the workbook to a file
pub fn write_workbook_file<P: AsRef<Path>>(
    path: P,
    sheets: &[(String, ProjectedTable)],
) -> Result<()> {
    let bytes = write_workbook(sheets)?;
    std::fs::write(path.as_ref(), bytes)
        .with_context(|| format!("Failed to write workbook: {}", path.as_ref().display()))?;
    Ok(())
}

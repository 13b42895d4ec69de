//! Excel file reader using calamine

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Xlsx, open_workbook_auto};
use std::io::Cursor;
use std::path::Path;

use crate::table::{CellValue, RawTable};

/// Read the first sheet of a workbook file into a table.
///
/// The first row is split off as the header, matching the layout of the
/// upstream exports. An empty sheet yields an empty table.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .with_context(|| format!("Workbook has no sheets: {}", path.display()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet '{}'", sheet_name))?;

    Ok(table_from_range(&range))
}

/// Read the first sheet of an in-memory XLSX byte stream into a table
pub fn read_table_from_bytes(bytes: &[u8]) -> Result<RawTable> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).context("Failed to open workbook from bytes")?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .context("Workbook has no sheets")?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet '{}'", sheet_name))?;

    Ok(table_from_range(&range))
}

fn table_from_range(range: &Range<Data>) -> RawTable {
    let mut rows = range.rows();

    let columns = match rows.next() {
        Some(header) => header.iter().map(|d| parse_cell_value(d).to_text()).collect(),
        None => Vec::new(),
    };

    let data = rows
        .map(|row| row.iter().map(parse_cell_value).collect())
        .collect();

    RawTable {
        columns,
        rows: data,
    }
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Text(format!("{:?}", e)),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

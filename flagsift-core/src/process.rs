//! Per-source row filtering and column projection

use crate::column::column_label_to_index;
use crate::error::ExtractError;
use crate::sources::SourceSpec;
use crate::table::{CellValue, ProjectedTable, RawTable};

/// Filter a source table by its flag column and project it to the keep columns.
///
/// An absent table yields a header-only projection whose columns are the keep
/// labels themselves, so the sheet can still be rendered. For a present table,
/// validation is fail-fast: a table narrower than the flag column or the
/// widest keep column aborts the whole source with no partial output.
pub fn process(table: Option<&RawTable>, spec: &SourceSpec) -> Result<ProjectedTable, ExtractError> {
    let Some(table) = table else {
        return Ok(ProjectedTable {
            columns: spec.keep_columns.clone(),
            rows: Vec::new(),
        });
    };

    let flag_idx = column_label_to_index(&spec.flag_column)?;
    if flag_idx >= table.column_count() {
        return Err(ExtractError::MissingFlagColumn {
            source: spec.name.clone(),
            label: spec.flag_column.clone(),
        });
    }

    let keep_idxs = spec
        .keep_columns
        .iter()
        .map(|label| column_label_to_index(label))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(&max_idx) = keep_idxs.iter().max() {
        if max_idx >= table.column_count() {
            // Report the first keep label, in list order, resolving to the max
            let pos = keep_idxs.iter().position(|&i| i == max_idx).unwrap_or(0);
            return Err(ExtractError::InsufficientColumns {
                source: spec.name.clone(),
                label: spec.keep_columns[pos].clone(),
            });
        }
    }

    let columns = keep_idxs
        .iter()
        .map(|&i| table.columns.get(i).cloned().unwrap_or_default())
        .collect();

    // Stable filter: row order is preserved. Duplicate or non-monotonic keep
    // indices are allowed, the output width always equals the keep list length.
    let rows = table
        .rows
        .iter()
        .filter(|row| {
            let flag = row.get(flag_idx).unwrap_or(&CellValue::Empty);
            spec.predicate.matches(flag)
        })
        .map(|row| {
            keep_idxs
                .iter()
                .map(|&i| row.get(i).cloned().unwrap_or(CellValue::Empty))
                .collect()
        })
        .collect();

    Ok(ProjectedTable { columns, rows })
}

//! flagsift-core: flag-based row extraction from spreadsheet exports
//!
//! This library filters each input table by a configured flag column, projects
//! the surviving rows to a fixed set of letter-addressed columns, and
//! assembles the results into a single multi-sheet XLSX workbook.

pub mod column;
pub mod error;
pub mod process;
pub mod reader;
pub mod sources;
pub mod table;
pub mod writer;

use anyhow::Result;

pub use error::ExtractError;
pub use sources::{FlagPredicate, SourceSpec, builtin_sources};
pub use table::{CellValue, ProjectedTable, RawTable};

/// Main extraction interface
pub struct Extractor {
    sources: Vec<SourceSpec>,
}

impl Extractor {
    /// Create an extractor with the built-in source specifications
    pub fn new() -> Self {
        Self::with_sources(builtin_sources())
    }

    /// Create an extractor with custom source specifications
    pub fn with_sources(sources: Vec<SourceSpec>) -> Self {
        Self { sources }
    }

    /// The configured sources, in output sheet order
    pub fn sources(&self) -> &[SourceSpec] {
        &self.sources
    }

    /// Filter and project one table per configured source.
    ///
    /// `tables` must supply one entry per source, in configuration order;
    /// `None` stands for a source with no input. Sources are independent,
    /// the first validation failure aborts the whole invocation.
    pub fn project(
        &self,
        tables: &[Option<RawTable>],
    ) -> Result<Vec<(String, ProjectedTable)>, ExtractError> {
        if tables.len() != self.sources.len() {
            return Err(ExtractError::SourceCountMismatch {
                expected: self.sources.len(),
                got: tables.len(),
            });
        }

        self.sources
            .iter()
            .zip(tables)
            .map(|(spec, table)| {
                process::process(table.as_ref(), spec).map(|p| (spec.name.clone(), p))
            })
            .collect()
    }

    /// Project all sources and serialize the result into workbook bytes
    pub fn extract(&self, tables: &[Option<RawTable>]) -> Result<Vec<u8>> {
        let projections = self.project(tables)?;
        writer::write_workbook(&projections)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

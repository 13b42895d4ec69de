use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use flagsift_core::{Extractor, reader, writer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flagsift")]
#[command(about = "Extract flagged rows from LEX/SPX exports into a single workbook", long_about = None)]
#[command(version)]
struct Cli {
    /// LEX export (.xlsx)
    #[arg(long, value_name = "FILE")]
    lex: Option<PathBuf>,

    /// SPX export (.xlsx)
    #[arg(long, value_name = "FILE")]
    spx: Option<PathBuf>,

    /// Output workbook path
    #[arg(short, long, default_value = "tax_invoice_request.xlsx")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.lex.is_none() && cli.spx.is_none() {
        anyhow::bail!("At least one input file is required (--lex or --spx).");
    }

    // One entry per built-in source, in sheet order: LEX, SPX
    let inputs = [&cli.lex, &cli.spx];
    let mut tables = Vec::with_capacity(inputs.len());
    for path in inputs {
        let table = match path {
            Some(path) => Some(
                reader::read_table(path)
                    .with_context(|| format!("Failed to read input: {}", path.display()))?,
            ),
            None => None,
        };
        tables.push(table);
    }

    let extractor = Extractor::new();
    let projections = extractor.project(&tables)?;

    for (name, table) in &projections {
        println!("{}: {} flagged rows", name.bold(), table.row_count());
    }

    writer::write_workbook_file(&cli.output, &projections)?;
    println!("{} {}", "Wrote".green().bold(), cli.output.display());

    Ok(())
}

//! sheet2csv command-line tool
//!
//! ワークブックの各シートを、同じディレクトリの`<シート名>.csv`へ書き出す。
//! ログは`RUST_LOG`で制御し、標準エラー出力へ出力する（デフォルト: `warn`）。

use clap::Parser;
use sheet2csv::{ExporterBuilder, SheetToCsvError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheet2csv")]
#[command(about = "Export every sheet of a workbook to <sheet name>.csv next to it")]
#[command(version)]
struct Cli {
    /// Path to the workbook (.xlsx, .xlsm, .xlsb, .xls, .ods)
    workbook: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match export(&cli.workbook) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn export(workbook: &std::path::Path) -> Result<(), SheetToCsvError> {
    let exporter = ExporterBuilder::new().build()?;
    let exported = exporter.run(workbook)?;
    tracing::debug!(files = exported.len(), "export finished");
    Ok(())
}

fn handle_error(error: &SheetToCsvError) {
    eprintln!("Error: {}", error);
    match error {
        SheetToCsvError::MissingInput(_) => {
            eprintln!("Please check the workbook path.");
        }
        SheetToCsvError::Open { .. } | SheetToCsvError::Read { .. } => {
            eprintln!("The file may not be a valid workbook or may be corrupted.");
        }
        SheetToCsvError::Write { .. } => {
            eprintln!("Please check that the output directory is writable.");
        }
        _ => {}
    }
}

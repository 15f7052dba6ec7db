//! sheet2csv - Export every sheet of a spreadsheet workbook to its own CSV file
//!
//! このクレートは、ワークブック（XLSX / XLSM / XLSB / XLS / ODS）の各シートを、
//! ワークブックと同じディレクトリにある`<小文字化したシート名>.csv`へ書き出します。
//! 最初の行をヘッダーとし、行番号列は付けません。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sheet2csv::ExporterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // デフォルト設定で作成
//!     let exporter = ExporterBuilder::new().build()?;
//!
//!     // /data/plants.csv, /data/zones.csv, ... を書き出し、
//!     // 1ファイルごとに "Exported <path>" を標準出力へ表示
//!     exporter.run("/data/landscaping_schema.xlsx")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! 進捗行を別の出力先へ送る場合は`run_with_progress`を使用します:
//!
//! ```rust,no_run
//! use sheet2csv::ExporterBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let exporter = ExporterBuilder::new().build()?;
//! let mut progress = Vec::new();
//! let exported = exporter.run_with_progress("/data/garden.xlsx", &mut progress)?;
//! for sheet in &exported {
//!     println!("{} -> {} ({} rows)", sheet.sheet, sheet.path.display(), sheet.rows);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use sheet2csv::{DateFormat, ExporterBuilder, SheetSelector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let exporter = ExporterBuilder::new()
//!         .with_sheet_selector(SheetSelector::Name("Plants".to_string()))
//!         .with_date_format(DateFormat::Custom("%d/%m/%Y".to_string()))
//!         .with_delimiter(b'\t')
//!         .with_extension("tsv")
//!         .build()?;
//!
//!     exporter.run("/data/garden.xlsx")?;
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod error;
mod formatter;
mod output;
mod parser;
mod security;
mod table;
mod types;

// 公開API
pub use api::{DateFormat, SheetSelector};
pub use builder::{Exporter, ExporterBuilder};
pub use error::SheetToCsvError;
pub use output::output_path_for;
pub use types::ExportedSheet;

//! Parser Module
//!
//! calamineを使用したワークブック読み込みの実装。
//! 形式（XLSX / XLSM / XLSB / XLS / ODS）は拡張子とファイル内容から自動判別します。

mod workbook;

pub(crate) use workbook::WorkbookReader;

//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;
use thiserror::Error;

/// sheet2csvクレート全体で使用するエラー型
///
/// ワークブックの存在確認、読み込み、CSV書き出しの各段階で発生する
/// エラーを統一的に扱います。どのエラーも実行全体を中断させ、
/// 残りのシートは処理されません。
///
/// # エラーの種類
///
/// - `MissingInput`: 指定されたワークブックが存在しない（I/Oより前に検出）
/// - `Open` / `Read`: ワークブックまたはシートの解析に失敗（calamine由来）
/// - `Write`: CSVファイルの書き込みに失敗（csv由来）
/// - `Config`: 設定の検証やシート選択に失敗
///
/// # 使用例
///
/// ```rust,no_run
/// use sheet2csv::{ExporterBuilder, SheetToCsvError};
///
/// # fn main() -> Result<(), SheetToCsvError> {
/// let exporter = ExporterBuilder::new().build()?;
/// match exporter.run("/tmp/missing.xlsx") {
///     Err(SheetToCsvError::MissingInput(path)) => {
///         eprintln!("not found: {}", path.display());
///     }
///     other => {
///         other?;
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Error, Debug)]
pub enum SheetToCsvError {
    /// 指定されたワークブックが存在しない
    ///
    /// 処理開始前に検出されるため、出力ファイルは一切作成されません。
    #[error("Workbook not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// ワークブックを開けなかったエラー
    ///
    /// ファイル形式が不正、破損したファイル、サポートされていない形式などが
    /// 原因となります。
    #[error("Failed to open workbook '{}': {source}", .path.display())]
    Open {
        /// 開こうとしたワークブックのパス
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// シートの読み込みに失敗したエラー
    #[error("Failed to read sheet '{sheet}': {source}")]
    Read {
        /// 読み込みに失敗したシート名
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// CSVファイルの書き込みに失敗したエラー
    ///
    /// 出力ディレクトリに書き込み権限がない、ディスクが満杯などが原因となります。
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        /// 書き込み先のパス
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ExporterBuilder::build()`時の検証、またはシート選択時
    /// （存在しないシート名、範囲外のインデックス）に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use sheet2csv::{ExporterBuilder, SheetToCsvError};
    ///
    /// let result = ExporterBuilder::new()
    ///     .with_delimiter(b'\n')  // 無効な区切り文字
    ///     .build();
    ///
    /// match result {
    ///     Err(SheetToCsvError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルサイズの上限超過や、出力先ディレクトリの外を指す
    /// シート名などで発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}

//! Builder Module
//!
//! Fluent Builder APIを提供し、`Exporter`インスタンスを段階的に構築する。

use crate::api::{DateFormat, SheetSelector};
use crate::error::SheetToCsvError;
use crate::formatter::{render_custom, CellFormatter};
use crate::output::{output_path_for, CsvSink};
use crate::parser::WorkbookReader;
use crate::security::SecurityConfig;
use crate::table::SheetTable;
use crate::types::ExportedSheet;
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// 書き出し処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ExportConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// 日付形式
    pub date_format: DateFormat,

    /// フィールド区切り文字
    pub delimiter: u8,

    /// 出力ファイルの拡張子（`.`なし）
    pub extension: String,

    /// すべてのセルが空の行を読み飛ばすか
    pub skip_blank_rows: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::All,
            date_format: DateFormat::Iso8601,
            delimiter: b',',
            extension: "csv".to_string(),
            skip_blank_rows: true,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Exporter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use sheet2csv::{ExporterBuilder, SheetSelector};
///
/// # fn main() -> Result<(), sheet2csv::SheetToCsvError> {
/// let exporter = ExporterBuilder::new()
///     .with_sheet_selector(SheetSelector::Name("Plants".to_string()))
///     .with_delimiter(b';')
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ExporterBuilder {
    /// 内部設定（構築中）
    config: ExportConfig,
}

impl Default for ExporterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExporterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: すべてのシート
    /// - 日付形式: ISO 8601
    /// - 区切り文字: `,`
    /// - 拡張子: `csv`
    /// - 空行: スキップ
    pub fn new() -> Self {
        Self {
            config: ExportConfig::default(),
        }
    }

    /// 書き出し対象のシートを選択する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use sheet2csv::{ExporterBuilder, SheetSelector};
    ///
    /// // 最初のシートのみ
    /// let builder = ExporterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Index(0));
    ///
    /// // 複数シートを名前で指定
    /// let builder = ExporterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Names(vec!["Plants".to_string(), "Zones".to_string()]));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// 日付の出力形式を指定する
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// フィールド区切り文字を指定する
    ///
    /// ASCII文字のみ指定できます。`"`、`\r`、`\n`は`build()`時にエラーになります。
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// 出力ファイルの拡張子を指定する（`.`なし、例: `"tsv"`）
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.config.extension = extension.to_string();
        self
    }

    /// すべてのセルが空の行を読み飛ばすかを指定する
    ///
    /// * `true`: 空行を出力しない（デフォルト）
    /// * `false`: 空行も空フィールドの行として出力する。使用範囲より上の行も含む
    pub fn skip_blank_rows(mut self, skip: bool) -> Self {
        self.config.skip_blank_rows = skip;
        self
    }

    /// 設定を検証し、`Exporter`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Exporter)` - 設定が有効な場合
    /// * `Err(SheetToCsvError::Config)` - 設定が無効な場合
    ///
    /// # 発生し得るエラー
    ///
    /// * カスタム日付形式が空、または不正な書式指定子・タイムゾーン指定子を含む
    /// * 区切り文字がASCII以外、または`"`、`\r`、`\n`
    /// * 拡張子が空、または`.`やパス区切り文字を含む
    pub fn build(self) -> Result<Exporter, SheetToCsvError> {
        // 1. カスタム日付形式の検証
        if let DateFormat::Custom(ref format_str) = self.config.date_format {
            // 見本の日時で実際に描画し、未知の指定子やタイムゾーン指定子を弾く
            let sample =
                NaiveDate::from_ymd_opt(2024, 1, 15).and_then(|d| d.and_hms_opt(12, 30, 0));
            let invalid = format_str.is_empty()
                || sample.and_then(|dt| render_custom(&dt, format_str)).is_none();
            if invalid {
                return Err(SheetToCsvError::Config(format!(
                    "Invalid date format string: '{}'",
                    format_str
                )));
            }
        }

        // 2. 区切り文字の検証
        let delimiter = self.config.delimiter;
        if !delimiter.is_ascii() || matches!(delimiter, b'"' | b'\r' | b'\n') {
            return Err(SheetToCsvError::Config(format!(
                "Invalid delimiter: {:?}",
                delimiter as char
            )));
        }

        // 3. 拡張子の検証
        let extension = &self.config.extension;
        if extension.is_empty() || extension.contains(&['.', '/', '\\'][..]) {
            return Err(SheetToCsvError::Config(format!(
                "Invalid extension: '{}'",
                extension
            )));
        }

        Ok(Exporter::new(self.config))
    }
}

/// 書き出し処理のファサード
///
/// ワークブックの各シートを、ワークブックと同じディレクトリにある
/// `<小文字化したシート名>.csv`へ書き出すメインエントリーポイントです。
#[derive(Debug)]
pub struct Exporter {
    /// 書き出し設定
    config: ExportConfig,

    /// セルフォーマッター
    formatter: CellFormatter,

    /// 区切りテキストの出力先
    sink: CsvSink,

    /// セキュリティ制限
    security: SecurityConfig,
}

impl Exporter {
    pub(crate) fn new(config: ExportConfig) -> Self {
        Self {
            formatter: CellFormatter::new(config.date_format.clone()),
            sink: CsvSink::new(config.delimiter),
            security: SecurityConfig::default(),
            config,
        }
    }

    /// ワークブックの各シートをCSVに書き出し、進捗を標準出力に表示する
    ///
    /// 書き出したファイルごとに`Exported <path>`の1行を出力します。
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use sheet2csv::ExporterBuilder;
    ///
    /// # fn main() -> Result<(), sheet2csv::SheetToCsvError> {
    /// let exporter = ExporterBuilder::new().build()?;
    /// let exported = exporter.run("/data/landscaping_schema.xlsx")?;
    /// assert!(!exported.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn run<P: AsRef<Path>>(&self, workbook: P) -> Result<Vec<ExportedSheet>, SheetToCsvError> {
        let stdout = std::io::stdout();
        self.run_with_progress(workbook, stdout.lock())
    }

    /// ワークブックの各シートをCSVに書き出し、進捗を任意のライターに出力する
    ///
    /// # 引数
    ///
    /// * `workbook` - ワークブックのパス
    /// * `progress` - 進捗行（`Exported <path>`）の出力先
    ///
    /// # 戻り値
    ///
    /// * `Ok(Vec<ExportedSheet>)` - 書き出したシートの記録（書き出し順）
    /// * `Err(SheetToCsvError)` - エラーが発生した場合
    ///
    /// # 処理フロー
    ///
    /// 1. ワークブックの存在確認（存在しなければ何も出力せずに`MissingInput`）
    /// 2. ワークブックを開き、シートを選択（ワークブック内の並び順）
    /// 3. 各シートについて順番に処理（ループ）
    ///    - シート範囲の読み込みとテーブル構築
    ///    - 書き出し先パスの計算
    ///    - CSVの書き出し（上書き）
    ///    - 進捗行の出力
    ///
    /// いずれかのシートで失敗した場合、残りのシートは処理されません。
    /// それまでに書き出したファイルはそのまま残ります。
    pub fn run_with_progress<P: AsRef<Path>, W: Write>(
        &self,
        workbook: P,
        mut progress: W,
    ) -> Result<Vec<ExportedSheet>, SheetToCsvError> {
        let workbook = workbook.as_ref();

        // 1. 存在確認
        if !workbook.is_file() {
            return Err(SheetToCsvError::MissingInput(workbook.to_path_buf()));
        }
        self.security.check_input_size(workbook)?;

        // 2. ワークブックを開いてシートを選択
        let mut reader = WorkbookReader::open(workbook)?;
        let sheet_names = reader.select_sheets(&self.config.sheet_selector)?;
        debug!(
            workbook = %reader.path().display(),
            sheets = ?sheet_names,
            "selected sheets"
        );

        // 3. 各シートを順番に書き出す
        let mut exported = Vec::with_capacity(sheet_names.len());
        for sheet_name in sheet_names {
            let range = reader.read_sheet(&sheet_name)?;
            let table =
                SheetTable::from_range(&range, &self.formatter, self.config.skip_blank_rows);
            if table.is_empty() {
                debug!(sheet = %sheet_name, "sheet has no cells; writing an empty file");
            }

            let path = output_path_for(workbook, &sheet_name, &self.config.extension)?;
            self.sink.write_file(&table, &path)?;

            writeln!(progress, "Exported {}", path.display())?;
            progress.flush()?;

            info!(
                sheet = %sheet_name,
                path = %path.display(),
                rows = table.rows.len(),
                columns = table.width(),
                "exported sheet"
            );

            exported.push(ExportedSheet {
                rows: table.rows.len(),
                columns: table.width(),
                sheet: sheet_name,
                path,
            });
        }

        Ok(exported)
    }
}

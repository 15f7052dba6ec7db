//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// 日付の出力形式
///
/// 日付・時刻セルをCSVフィールドに変換する際の出力形式を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateFormat {
    /// ISO 8601形式（デフォルト）
    ///
    /// - 時刻が0時ちょうどの場合は日付のみ: `2025-11-20`
    /// - 時刻を含む場合: `2025-11-20 14:30:00`
    /// - 時刻のみのセル（シリアル値が1未満）や経過時間: `14:30:00`
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// すべての日付・時刻セルに同じフォーマット文字列を適用します。
    ///
    /// # フォーマット指定子（主要なもの）
    ///
    /// - `%Y`: 4桁の年（例: 2025）
    /// - `%m`: 2桁の月（01-12）
    /// - `%d`: 2桁の日（01-31）
    /// - `%H`: 24時間形式の時（00-23）
    /// - `%M`: 分（00-59）
    /// - `%S`: 秒（00-59）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use sheet2csv::{DateFormat, ExporterBuilder};
    ///
    /// # fn main() -> Result<(), sheet2csv::SheetToCsvError> {
    /// let exporter = ExporterBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%d/%m/%Y".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Custom(String),
}

/// シート選択方式
///
/// 書き出し対象のシートを選択する方法を指定します。
/// 選択結果は常にワークブック内の並び順（`Indices`/`Names`の場合は指定順）で処理されます。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// すべてのシートを書き出す（デフォルト）
    All,

    /// インデックス指定（0始まり）
    ///
    /// 例: `SheetSelector::Index(0)` は最初のシートを選択
    Index(usize),

    /// シート名指定（大文字・小文字を区別）
    ///
    /// 例: `SheetSelector::Name("Plants".to_string())`
    Name(String),

    /// 複数のインデックス指定
    ///
    /// 例: `SheetSelector::Indices(vec![0, 2])`
    Indices(Vec<usize>),

    /// 複数のシート名指定
    ///
    /// 例: `SheetSelector::Names(vec!["Plants".to_string(), "Zones".to_string()])`
    Names(Vec<String>),
}

//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use std::path::PathBuf;

/// 書き出し済みシートの記録
///
/// `Exporter::run`が書き出したファイルごとに1つ生成され、書き出し順に返されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedSheet {
    /// 元のシート名（大文字・小文字はそのまま）
    pub sheet: String,

    /// 書き出し先のCSVファイルパス
    pub path: PathBuf,

    /// ヘッダー行を除いたデータ行数
    pub rows: usize,

    /// 列数
    pub columns: usize,
}

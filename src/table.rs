//! Table Module
//!
//! シートの使用範囲（`calamine::Range`）から、ヘッダー行とデータ行からなる
//! メモリ上のテーブルを構築するモジュール。

use calamine::{Data, Range};
use std::collections::HashMap;

use crate::formatter::CellFormatter;

/// 1シート分のテーブル
///
/// すべての行は`headers`と同じ列数を持ちます。
/// 列はA列を起点とし、使用範囲がB列以降から始まる場合は先頭に空の列が補われます。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct SheetTable {
    /// 列ヘッダー（最初の行から推定）
    pub headers: Vec<String>,

    /// データ行（ヘッダー行を除く、元の順序）
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// シートの使用範囲からテーブルを構築
    ///
    /// # 引数
    ///
    /// * `range` - calamineが返したシートの使用範囲
    /// * `formatter` - セルフォーマッター
    /// * `skip_blank_rows` - すべてのセルが空の行を読み飛ばすか
    ///
    /// # 処理内容
    ///
    /// 1. 各行をフォーマットし、A列起点になるよう左側を空フィールドで埋める
    /// 2. （`skip_blank_rows`の場合）空行を除外
    /// 3. 最初の行をヘッダーとして扱い、空欄や重複を解消
    pub fn from_range(range: &Range<Data>, formatter: &CellFormatter, skip_blank_rows: bool) -> Self {
        let Some((start_row, start_col)) = range.start() else {
            return Self::default();
        };

        let leading_cols = start_col as usize;
        let width = leading_cols + range.width();
        let mut records: Vec<Vec<String>> = Vec::with_capacity(range.height());

        if !skip_blank_rows {
            // 使用範囲より上の行も空行として出力する
            for _ in 0..start_row {
                records.push(vec![String::new(); width]);
            }
        }

        for row in range.rows() {
            let mut record = Vec::with_capacity(width);
            record.resize(leading_cols, String::new());
            record.extend(row.iter().map(|cell| formatter.format_cell(cell)));

            if skip_blank_rows && record.iter().all(|field| field.is_empty()) {
                continue;
            }
            records.push(record);
        }

        let mut records = records.into_iter();
        let Some(header_row) = records.next() else {
            return Self::default();
        };

        Self {
            headers: infer_headers(header_row),
            rows: records.collect(),
        }
    }

    /// 列数
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// ヘッダーもデータもないか
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// 最初の行から列ヘッダーを推定
///
/// - 空欄のヘッダーは`Unnamed: <列インデックス>`（0始まり）
/// - 重複したヘッダーには`.1`, `.2`, ... を付加
/// - 付加した結果が既存のヘッダーと衝突する場合は、その名前にさらに番号を付加
///   （`["a", "a.1", "a"]` → `a`, `a.1`, `a.1.1`）
pub(crate) fn infer_headers(raw: Vec<String>) -> Vec<String> {
    // 名前ごとの出現回数
    let mut counts: HashMap<String, usize> = HashMap::with_capacity(raw.len());
    let mut headers = Vec::with_capacity(raw.len());

    for (idx, name) in raw.into_iter().enumerate() {
        let mut header = if name.is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            name
        };

        let mut count = counts.get(&header).copied().unwrap_or(0);
        while count > 0 {
            counts.insert(header.clone(), count + 1);
            header = format!("{}.{}", header, count);
            count = counts.get(&header).copied().unwrap_or(0);
        }

        counts.insert(header.clone(), 1);
        headers.push(header);
    }

    headers
}

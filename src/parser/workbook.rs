//! Workbook Reader
//!
//! calamineのラッパーとして、ワークブックレベルの操作（シート一覧、シート選択、
//! シート範囲の読み込み）を提供します。

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::api::SheetSelector;
use crate::error::SheetToCsvError;

/// ワークブックリーダー
pub(crate) struct WorkbookReader {
    /// calamineのワークブック（形式は自動判別）
    workbook: Sheets<BufReader<File>>,
    /// 開いたワークブックのパス（エラーメッセージ用）
    path: PathBuf,
}

impl WorkbookReader {
    /// ワークブックを開く
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookReader)` - 読み込みに成功した場合
    /// * `Err(SheetToCsvError::Open)` - 形式が不明、破損している場合など
    pub fn open(path: &Path) -> Result<Self, SheetToCsvError> {
        let workbook = open_workbook_auto(path).map_err(|source| SheetToCsvError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            workbook,
            path: path.to_path_buf(),
        })
    }

    /// ワークブックのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// すべてのシート名をワークブック内の並び順で取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シート選択方式に基づいてシートを選択
    ///
    /// # 引数
    ///
    /// * `selector` - シート選択方式
    ///
    /// # 戻り値
    ///
    /// * `Ok(Vec<String>)` - 選択されたシート名のリスト
    /// * `Err(SheetToCsvError::Config)` - シートが見つからない、またはインデックスが範囲外の場合
    pub fn select_sheets(&self, selector: &SheetSelector) -> Result<Vec<String>, SheetToCsvError> {
        let all_sheet_names = self.sheet_names();

        let by_index = |index: usize| {
            all_sheet_names.get(index).cloned().ok_or_else(|| {
                SheetToCsvError::Config(format!(
                    "Sheet index {} is out of range (total: {})",
                    index,
                    all_sheet_names.len()
                ))
            })
        };

        let by_name = |name: &String| {
            if all_sheet_names.contains(name) {
                Ok(name.clone())
            } else {
                Err(SheetToCsvError::Config(format!("Sheet '{}' not found", name)))
            }
        };

        match selector {
            SheetSelector::All => Ok(all_sheet_names.clone()),
            SheetSelector::Index(index) => Ok(vec![by_index(*index)?]),
            SheetSelector::Name(name) => Ok(vec![by_name(name)?]),
            SheetSelector::Indices(indices) => indices.iter().map(|&i| by_index(i)).collect(),
            SheetSelector::Names(names) => names.iter().map(by_name).collect(),
        }
    }

    /// シートの使用範囲を読み込む
    ///
    /// # 戻り値
    ///
    /// * `Ok(Range<Data>)` - シートの使用範囲（空のシートは空の範囲）
    /// * `Err(SheetToCsvError::Read)` - シートの解析に失敗した場合
    pub fn read_sheet(&mut self, sheet_name: &str) -> Result<Range<Data>, SheetToCsvError> {
        self.workbook
            .worksheet_range(sheet_name)
            .map_err(|source| SheetToCsvError::Read {
                sheet: sheet_name.to_string(),
                source,
            })
    }
}

// 実際のワークブックが必要なため、テストは統合テスト（tests/）で実装します。

//! Output Module
//!
//! 書き出し先パスの決定と、テーブルの区切りテキスト出力を提供するモジュール。

mod csv_writer;

use crate::error::SheetToCsvError;
use crate::security::validate_output_name;
use std::path::{Path, PathBuf};

pub(crate) use csv_writer::CsvSink;

/// シートの書き出し先パスを計算する
///
/// `<ワークブックの親ディレクトリ>/<小文字化したシート名>.<拡張子>`を返します。
/// 同名のファイルが既に存在する場合は上書きされます（重複の回避は行いません）。
///
/// # 引数
///
/// * `workbook` - ワークブックのパス
/// * `sheet_name` - シート名
/// * `extension` - 拡張子（先頭の`.`は含めない）
///
/// # 戻り値
///
/// * `Ok(PathBuf)` - 書き出し先のパス
/// * `Err(SheetToCsvError::SecurityViolation)` - シート名がファイル名として使えない場合
///
/// # 使用例
///
/// ```rust
/// use std::path::Path;
/// use sheet2csv::output_path_for;
///
/// let path = output_path_for(Path::new("/data/garden.xlsx"), "Plants", "csv").unwrap();
/// assert_eq!(path, Path::new("/data/plants.csv"));
/// ```
pub fn output_path_for(
    workbook: &Path,
    sheet_name: &str,
    extension: &str,
) -> Result<PathBuf, SheetToCsvError> {
    let stem = sheet_name.to_lowercase();
    validate_output_name(&stem).map_err(SheetToCsvError::SecurityViolation)?;

    let dir = workbook.parent().unwrap_or_else(|| Path::new(""));
    Ok(dir.join(format!("{}.{}", stem, extension)))
}

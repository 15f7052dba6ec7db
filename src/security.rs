//! Security Module
//!
//! セキュリティ対策を実装するモジュール。
//! 巨大な入力ファイルの拒否と、出力先ディレクトリ外への書き込み防止を提供します。

use crate::error::SheetToCsvError;
use std::path::Path;

/// セキュリティ設定
///
/// ファイル処理時のセキュリティ制限を定義します。
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 2GB (2_147_483_648 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 2_147_483_648, // 2GB
        }
    }
}

impl SecurityConfig {
    /// 入力ファイルのサイズを検証
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - サイズが上限以下の場合
    /// * `Err(SheetToCsvError::SecurityViolation)` - 上限を超えている場合
    pub fn check_input_size(&self, path: &Path) -> Result<(), SheetToCsvError> {
        let size = std::fs::metadata(path)?.len();
        if size > self.max_input_file_size {
            return Err(SheetToCsvError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                size, self.max_input_file_size
            )));
        }
        Ok(())
    }
}

/// 出力ファイル名（拡張子を除く）の検証
///
/// シート名から作られたファイル名が、ワークブックと同じディレクトリ内の
/// 単一のファイルを指すことを保証します。
/// XLSXのシート名には`/`や`\`を使えませんが、ODSなど他の形式では使えるため検証が必要です。
///
/// # 引数
///
/// * `name` - 小文字化済みのシート名
///
/// # 戻り値
///
/// * `Ok(())` - 名前が安全な場合
/// * `Err(String)` - 空、`.`/`..`のみ、パス区切り文字やNULを含む場合
pub(crate) fn validate_output_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Empty sheet name cannot be used as a file name".to_string());
    }

    if name == "." || name == ".." {
        return Err(format!("Sheet name is a relative path component: {}", name));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(format!("Path separator in sheet name is not allowed: {}", name));
    }

    if name.contains('\0') {
        return Err(format!("NUL in sheet name is not allowed: {:?}", name));
    }

    Ok(())
}

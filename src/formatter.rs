//! Formatter Module
//!
//! セル値をCSVフィールドの文字列に変換する処理を提供するモジュール。
//! 値の加工は行わず、表示形式の変換のみを行います。

use calamine::{Data, ExcelDateTime};
use chrono::{NaiveDateTime, NaiveTime};
use std::fmt::Write;

use crate::api::DateFormat;

/// 倍精度浮動小数点数で誤差なく表現できる整数の上限（2^53）
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// セルフォーマッター
///
/// セル値のフォーマット処理のファサードとして機能します。
#[derive(Debug)]
pub(crate) struct CellFormatter {
    /// 日付フォーマッター
    date_formatter: DateFormatter,

    /// 数値フォーマッター
    number_formatter: NumberFormatter,
}

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new(date_format: DateFormat) -> Self {
        Self {
            date_formatter: DateFormatter {
                format: date_format,
            },
            number_formatter: NumberFormatter,
        }
    }

    /// セル値をフォーマット
    ///
    /// # 引数
    ///
    /// * `cell` - calamineのセルデータ
    ///
    /// # 戻り値
    ///
    /// CSVフィールドとして書き出す文字列（エスケープ前）。空セルは空文字列。
    pub fn format_cell(&self, cell: &Data) -> String {
        match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => self.number_formatter.format(*f),
            Data::Bool(b) => if *b { "True" } else { "False" }.to_string(),
            Data::DateTime(dt) => self.date_formatter.format(dt, &self.number_formatter),
            Data::DateTimeIso(s) => s.clone(),
            Data::DurationIso(s) => s.clone(),
            Data::Error(e) => e.to_string(),
        }
    }
}

impl Default for CellFormatter {
    fn default() -> Self {
        Self::new(DateFormat::Iso8601)
    }
}

/// 日付フォーマッター
///
/// Excelのシリアル日付値を文字列に変換します。
/// 1900年/1904年エポックの違いは`ExcelDateTime`側で吸収されます。
#[derive(Debug)]
pub(crate) struct DateFormatter {
    format: DateFormat,
}

impl DateFormatter {
    /// 日付・時刻・経過時間をフォーマット
    ///
    /// 日付として解釈できないシリアル値は数値として出力します。
    pub fn format(&self, value: &ExcelDateTime, fallback: &NumberFormatter) -> String {
        if value.is_duration() {
            return format_duration(value.as_f64());
        }

        let serial = value.as_f64();
        let Some(datetime) = value.as_datetime() else {
            return fallback.format(serial);
        };

        match &self.format {
            DateFormat::Custom(format_str) => render_custom(&datetime, format_str)
                .unwrap_or_else(|| fallback.format(serial)),
            DateFormat::Iso8601 => {
                if (0.0..1.0).contains(&serial) {
                    // 時刻のみのセル
                    datetime.format("%H:%M:%S").to_string()
                } else if datetime.time() == NaiveTime::MIN {
                    datetime.format("%Y-%m-%d").to_string()
                } else {
                    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
        }
    }
}

/// カスタム形式で日時を文字列化
///
/// タイムゾーン指定子（`%z`、`%Z`など）のように`NaiveDateTime`では
/// 描画できない書式の場合は`None`を返します。
pub(crate) fn render_custom(datetime: &NaiveDateTime, format_str: &str) -> Option<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", datetime.format(format_str)).ok()?;
    Some(rendered)
}

/// 経過時間（日単位）を`H:MM:SS`形式に変換
///
/// 24時間を超える場合も時の桁は繰り上げない（例: 1.5日 → `36:00:00`）。
fn format_duration(days: f64) -> String {
    let total_seconds = (days * 86_400.0).round() as i64;
    let sign = if total_seconds < 0 { "-" } else { "" };
    let total_seconds = total_seconds.abs();
    format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}

/// 数値フォーマッター
///
/// XLSXは整数も浮動小数点数として保存するため、整数値は小数点なしで出力します。
#[derive(Debug)]
pub(crate) struct NumberFormatter;

impl NumberFormatter {
    /// 数値をフォーマット
    ///
    /// - 整数値（絶対値が2^53未満）: `1`, `-42`
    /// - それ以外: 往復変換可能な最短の10進表記（`1.5`, `0.1`）
    /// - NaNは空文字列、無限大は`inf`/`-inf`
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return String::new();
        }

        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_string();
        }

        if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
            return format!("{}", value as i64);
        }

        format!("{}", value)
    }
}

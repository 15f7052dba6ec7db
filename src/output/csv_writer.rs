//! CSV Output Implementation
//!
//! `csv`クレートを使用してテーブルを区切りテキストとして書き出す。

use crate::error::SheetToCsvError;
use crate::table::SheetTable;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 区切りテキストの出力先
///
/// ヘッダー行を先頭に、行番号列は付けず、各行を`\n`で終端して出力します。
/// 区切り文字・引用符・改行を含むフィールドのみ引用符で囲みます。
#[derive(Debug, Clone, Copy)]
pub(crate) struct CsvSink {
    delimiter: u8,
}

impl CsvSink {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// テーブルを任意のライターに書き出す
    pub fn write_to<W: Write>(&self, table: &SheetTable, writer: W) -> Result<(), csv::Error> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(Terminator::Any(b'\n'))
            .quote_style(QuoteStyle::Necessary)
            .from_writer(writer);

        if !table.headers.is_empty() {
            writer.write_record(&table.headers)?;
        }
        for row in &table.rows {
            writer.write_record(row)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// テーブルをファイルに書き出す
    ///
    /// ファイルは新規作成、または既存の内容を切り詰めて上書きされます。
    /// 一時ファイルを経由しないため、途中で失敗すると不完全なファイルが残ります。
    pub fn write_file(&self, table: &SheetTable, path: &Path) -> Result<(), SheetToCsvError> {
        let write_error = |source: csv::Error| SheetToCsvError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(|e| write_error(e.into()))?;
        self.write_to(table, BufWriter::new(file))
            .map_err(write_error)
    }
}

impl Default for CsvSink {
    fn default() -> Self {
        Self::new(b',')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> SheetTable {
        SheetTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    fn render(sink: CsvSink, table: &SheetTable) -> String {
        let mut buffer = Vec::new();
        sink.write_to(table, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_header_and_rows() {
        let t = table(&["id", "name"], &[&["1", "Rose"], &["2", "Fern"]]);
        assert_eq!(render(CsvSink::default(), &t), "id,name\n1,Rose\n2,Fern\n");
    }

    #[test]
    fn test_write_header_only() {
        let t = table(&["id", "label"], &[]);
        assert_eq!(render(CsvSink::default(), &t), "id,label\n");
    }

    #[test]
    fn test_write_empty_table() {
        assert_eq!(render(CsvSink::default(), &SheetTable::default()), "");
    }

    #[test]
    fn test_write_quotes_when_necessary() {
        let t = table(
            &["name", "note"],
            &[&["Rose, red", "say \"hi\""], &["multi\nline", "plain"]],
        );
        assert_eq!(
            render(CsvSink::default(), &t),
            "name,note\n\"Rose, red\",\"say \"\"hi\"\"\"\n\"multi\nline\",plain\n"
        );
    }

    #[test]
    fn test_write_custom_delimiter() {
        let t = table(&["id", "name"], &[&["1", "Rose, red"]]);
        assert_eq!(render(CsvSink::new(b';'), &t), "id;name\n1;Rose, red\n");
    }

    #[test]
    fn test_write_file_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plants.csv");
        std::fs::write(&path, "stale content that is longer than the new one\n").unwrap();

        let t = table(&["id"], &[&["1"]]);
        CsvSink::default().write_file(&t, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "id\n1\n");
    }

    #[test]
    fn test_write_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("plants.csv");

        let t = table(&["id"], &[]);
        match CsvSink::default().write_file(&t, &path) {
            Err(SheetToCsvError::Write { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected Write error, got {:?}", other),
        }
    }
}

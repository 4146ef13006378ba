//! 表ファイル読み込み
//!
//! 拡張子で .xlsx（calamine）と .csv を切り替える

pub mod csv;
pub mod xlsx;

use crate::error::{AnalyzerError, Result};
use first_word_common::Table;
use std::path::Path;

/// 対応する表形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Excel,
    Csv,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xls" | "ods" => Some(TableFormat::Excel),
            "csv" => Some(TableFormat::Csv),
            _ => None,
        }
    }
}

/// 表ファイルを読み込む
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(AnalyzerError::FileNotFound(path.display().to_string()));
    }

    let format = TableFormat::from_path(path)
        .ok_or_else(|| AnalyzerError::UnsupportedFormat(path.display().to_string()))?;

    let table = match format {
        TableFormat::Excel => xlsx::read_first_sheet(path)?,
        TableFormat::Csv => csv::read_csv_file(path)?,
    };

    tracing::debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.len(),
        "table loaded"
    );

    Ok(table)
}

/// 空ヘッダーの列名（Unnamed: N）
pub(crate) fn header_name(raw: &str, index: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        format!("Unnamed: {}", index)
    } else {
        trimmed.to_string()
    }
}

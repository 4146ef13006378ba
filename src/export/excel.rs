//! Excel出力（CLI版）
//!
//! 共通ライブラリの excel_core でバッファを生成してファイルに保存

use crate::error::{AnalyzerError, Result};
use first_word_common::export::excel_core;
use first_word_common::Table;
use std::path::Path;

/// シート名
pub const SHEET_NAME: &str = "Resultados";

pub fn write_table_xlsx(table: &Table, output_path: &Path) -> Result<()> {
    let buffer = excel_core::generate_table_buffer(table, SHEET_NAME)
        .map_err(|e| AnalyzerError::ExcelGeneration(e.to_string()))?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}

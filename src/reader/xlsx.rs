//! Excel読み込み（先頭シートのみ）

use super::header_name;
use crate::error::{AnalyzerError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use first_word_common::{Cell, Table};
use std::path::Path;

/// calamine のセル値を変換
fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        // 真偽値・日時などは文字列として扱わない
        other => Cell::Other(other.to_string()),
    }
}

/// 先頭シートを表として読み込む（1行目がヘッダー）
pub fn read_first_sheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| AnalyzerError::ExcelRead(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AnalyzerError::EmptyWorkbook(path.display().to_string()))?
        .map_err(|e| AnalyzerError::ExcelRead(format!("{}: {}", path.display(), e)))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .enumerate()
            .map(|(i, data)| header_name(&to_cell(data).to_string(), i))
            .collect(),
        None => return Ok(Table::default()),
    };

    let mut table = Table::new(headers);
    for row in rows {
        let cells: Vec<Cell> = row.iter().map(to_cell).collect();
        // 完全な空行は読み飛ばす
        if cells.iter().all(Cell::is_empty) {
            continue;
        }
        table.push_row(cells);
    }

    Ok(table)
}

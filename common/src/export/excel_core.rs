//! Excel生成（共通ライブラリ）
//!
//! 表データを1シートのxlsxとしてバッファに書き出す

use crate::error::{Error, Result};
use crate::types::{Cell, Table};
use rust_xlsxwriter::*;

/// 列幅（文字数換算）の上下限
const MIN_COL_WIDTH: f64 = 8.0;
const MAX_COL_WIDTH: f64 = 60.0;

/// 列幅を内容から推定
fn estimate_column_width(table: &Table, col: usize) -> f64 {
    let header_len = table.headers.get(col).map(|h| h.chars().count()).unwrap_or(0);
    let max_len = table
        .rows
        .iter()
        .map(|row| row.get(col).map(|c| c.to_string().chars().count()).unwrap_or(0))
        .fold(header_len, usize::max);

    (max_len as f64 + 2.0).clamp(MIN_COL_WIDTH, MAX_COL_WIDTH)
}

/// 表をxlsxバッファに生成
///
/// # Arguments
/// * `table` - 出力する表（1行目がヘッダー）
/// * `sheet_name` - シート名
pub fn generate_table_buffer(table: &Table, sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x333333))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)
        .map_err(|e| Error::Excel(format!("シート名設定エラー: {}", e)))?;

    for (col, header) in table.headers.iter().enumerate() {
        let col_num = col as u16;
        worksheet.write_string_with_format(0, col_num, header, &header_format)
            .map_err(|e| Error::Excel(format!("ヘッダー書き込みエラー: {}", e)))?;
        worksheet.set_column_width(col_num, estimate_column_width(table, col))
            .map_err(|e| Error::Excel(format!("列幅設定エラー: {}", e)))?;
    }

    for (idx, row) in table.rows.iter().enumerate() {
        let row_num = idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col_num = col as u16;
            match cell {
                Cell::Empty => {}
                Cell::Text(s) | Cell::Other(s) => {
                    worksheet.write_string_with_format(row_num, col_num, s, &value_format)
                        .map_err(|e| Error::Excel(format!("値書き込みエラー: {}", e)))?;
                }
                Cell::Number(n) => {
                    worksheet.write_number_with_format(row_num, col_num, *n, &value_format)
                        .map_err(|e| Error::Excel(format!("値書き込みエラー: {}", e)))?;
                }
            }
        }
    }

    // ヘッダー行を固定
    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| Error::Excel(format!("ウィンドウ枠固定エラー: {}", e)))?;

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| Error::Excel(format!("Excel保存エラー: {}", e)))
}

//! CSV読み込み
//!
//! カンマ区切り・ダブルクォート（"" エスケープ、改行を含むフィールド可）。
//! UTF-8（BOM付き可）のみ対応。

use super::header_name;
use crate::error::{AnalyzerError, Result};
use first_word_common::{Cell, Table};
use std::path::Path;

pub fn read_csv_file(path: &Path) -> Result<Table> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|_| {
        AnalyzerError::CsvParse(format!("{}: o arquivo não está em UTF-8", path.display()))
    })?;
    parse_csv_str(&content)
}

/// CSV文字列を表に変換（1行目がヘッダー）
pub fn parse_csv_str(content: &str) -> Result<Table> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut records = parse_records(content)?.into_iter();

    let headers: Vec<String> = match records.next() {
        Some(header) => header
            .iter()
            .enumerate()
            .map(|(i, h)| header_name(h, i))
            .collect(),
        None => return Ok(Table::default()),
    };

    let mut table = Table::new(headers);
    for record in records {
        let cells: Vec<Cell> = record
            .into_iter()
            .map(|field| if field.trim().is_empty() { Cell::Empty } else { Cell::Text(field) })
            .collect();
        if cells.iter().all(Cell::is_empty) {
            continue;
        }
        table.push_row(cells);
    }

    Ok(table)
}

/// レコード単位に分解
fn parse_records(content: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    // "" はエスケープされた "
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
                line += 1;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(AnalyzerError::CsvParse(format!(
            "aspas não fechadas (linha {})",
            line
        )));
    }

    // 最終行（改行なし）
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let table = parse_csv_str("ID,Descrição\n1,Arroz tipo 1\n2,Caneta azul\n").unwrap();
        assert_eq!(table.headers, vec!["ID", "Descrição"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, 1), &Cell::from("Caneta azul"));
    }

    #[test]
    fn test_quoted_fields() {
        let csv = "ID,Descrição\r\n1,\"Parafuso, sextavado \"\"M8\"\"\"\r\n2,\"Linha 1\nLinha 2\"\r\n";
        let table = parse_csv_str(csv).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 1), &Cell::from("Parafuso, sextavado \"M8\""));
        assert_eq!(table.cell(1, 1), &Cell::from("Linha 1\nLinha 2"));
    }

    #[test]
    fn test_bom_and_blank_lines() {
        let csv = "\u{feff}Descrição\n\nArroz\n,\nFeijão";
        let table = parse_csv_str(csv).unwrap();
        assert_eq!(table.headers, vec!["Descrição"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, 0), &Cell::from("Feijão"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = parse_csv_str("ID,Descrição,Extra\n1,Arroz\n").unwrap();
        assert_eq!(table.rows[0].len(), 3);
        assert_eq!(table.cell(0, 2), &Cell::Empty);
    }

    #[test]
    fn test_unclosed_quote_is_error() {
        let result = parse_csv_str("Descrição\n\"Arroz");
        assert!(matches!(result, Err(AnalyzerError::CsvParse(_))));
    }

    #[test]
    fn test_empty_content() {
        let table = parse_csv_str("").unwrap();
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }
}

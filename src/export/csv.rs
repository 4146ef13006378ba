//! CSV出力

use crate::error::Result;
use first_word_common::{Cell, Table};
use std::io::Write;
use std::path::Path;

/// フィールドを必要に応じてクォート
fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// 表をCSV文字列に変換
pub fn table_to_csv(table: &Table) -> String {
    let mut out = String::new();

    let header: Vec<String> = table.headers.iter().map(|h| escape_field(h)).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for row in &table.rows {
        let fields: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Cell::Empty => String::new(),
                other => escape_field(&other.to_string()),
            })
            .collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

pub fn write_table_csv(table: &Table, output_path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(output_path)?;
    file.write_all(table_to_csv(table).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::csv::parse_csv_str;

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("arroz"), "arroz");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("M8 \"inox\""), "\"M8 \"\"inox\"\"\"");
    }

    #[test]
    fn test_csv_is_readable_by_reader() {
        let mut table = Table::with_headers(&["Descrição", "Frequência"]);
        table.push_row(vec![Cell::from("Parafuso, \"M8\"\nlinha 2"), Cell::from(3usize)]);
        table.push_row(vec![Cell::Empty, Cell::from(1usize)]);

        let parsed = parse_csv_str(&table_to_csv(&table)).unwrap();
        assert_eq!(parsed.headers, table.headers);
        assert_eq!(parsed.cell(0, 0), &Cell::from("Parafuso, \"M8\"\nlinha 2"));
        assert_eq!(parsed.cell(0, 1), &Cell::from("3"));
        assert_eq!(parsed.cell(1, 0), &Cell::Empty);
    }
}

//! 設定ファイル読み込み
//!
//! 属性・カテゴリ・除外フレーズの各設定ファイル（.xlsx / .csv）を読み込む。
//! 読み込みに失敗した設定は警告を出して「なし」として扱う。

use crate::error::{AnalyzerError, Result};
use crate::reader;
use first_word_common::{columns, AttributeConfig, CategoryMap, IgnorePhrases, Table, Variation};
use std::path::Path;

/// 別名のいずれかに一致する列を探す（なければエラー）
fn require_column(table: &Table, aliases: &[&str]) -> Result<usize> {
    table
        .find_column(aliases)
        .ok_or_else(|| AnalyzerError::MissingColumn(aliases[0].to_string()))
}

/// 属性設定を読み込む
pub fn load_attribute_config(path: &Path) -> Result<AttributeConfig> {
    let table = reader::read_table(path)?;
    attribute_config_from_table(&table)
}

pub fn attribute_config_from_table(table: &Table) -> Result<AttributeConfig> {
    let attr_col = require_column(table, columns::ATTRIBUTE)?;
    let var_col = require_column(table, columns::VARIATION)?;
    let pat_col = require_column(table, columns::PATTERNS)?;

    let mut config = AttributeConfig::new();
    for row in 0..table.len() {
        let attribute = table.cell(row, attr_col);
        let variation = table.cell(row, var_col);
        let patterns = table.cell(row, pat_col);

        // いずれかが空の行は読み飛ばす
        if attribute.is_empty() || variation.is_empty() || patterns.is_empty() {
            continue;
        }

        let patterns = patterns.to_string();
        let variation = Variation::new(&variation.to_string(), patterns.split(','))?;
        config.add_variation(&attribute.to_string(), variation);
    }

    Ok(config)
}

/// カテゴリ設定を読み込む
pub fn load_categories(path: &Path) -> Result<CategoryMap> {
    let table = reader::read_table(path)?;
    categories_from_table(&table)
}

pub fn categories_from_table(table: &Table) -> Result<CategoryMap> {
    let word_col = require_column(table, columns::WORD)?;
    let category_col = require_column(table, columns::CATEGORY_ALIASES)?;

    Ok((0..table.len())
        .map(|row| {
            (
                table.cell(row, word_col).to_string(),
                table.cell(row, category_col).to_string(),
            )
        })
        .collect())
}

/// 除外フレーズを読み込む（列がなければ空）
pub fn load_ignore_phrases(path: &Path) -> Result<IgnorePhrases> {
    let table = reader::read_table(path)?;
    Ok(ignore_phrases_from_table(&table))
}

pub fn ignore_phrases_from_table(table: &Table) -> IgnorePhrases {
    match table.find_column(columns::IGNORE_PHRASES) {
        Some(col) => (0..table.len())
            .map(|row| table.cell(row, col).to_string())
            .collect(),
        None => {
            tracing::debug!(headers = ?table.headers, "ignore-phrase column not found");
            IgnorePhrases::new()
        }
    }
}

/// 任意の設定ファイルを読み込む
///
/// 失敗時は警告を表示して None（設定なし）を返す。
pub fn load_optional<T, F>(path: Option<&Path>, label: &str, loader: F) -> Option<T>
where
    F: FnOnce(&Path) -> Result<T>,
{
    let path = path?;
    match loader(path) {
        Ok(value) => Some(value),
        Err(e) => {
            eprintln!("⚠ Erro ao carregar {}: {}", label, e);
            tracing::warn!(path = %path.display(), error = %e, "config file ignored");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use first_word_common::{find_matches, Cell};

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        let mut table = Table::with_headers(headers);
        for row in rows {
            table.push_row(row.iter().map(|v| if v.is_empty() { Cell::Empty } else { Cell::from(*v) }).collect());
        }
        table
    }

    #[test]
    fn test_attribute_config_from_table() {
        let t = table(
            &["Atributo", "Variações", "Padrões de reconhecimento"],
            &[
                &["Voltagem", "110v", "110v, 110 V ,110volts"],
                &["Voltagem", "220v", "220v,220 v"],
                &["Cor", "", "azul"],
                &["Cor", "Azul", "azul"],
            ],
        );
        let config = attribute_config_from_table(&t).unwrap();
        assert_eq!(config.names(), vec!["Voltagem", "Cor"]);
        assert_eq!(config.attributes()[0].variations[0].patterns, vec!["110v", "110 v", "110volts"]);
        assert_eq!(config.attributes()[1].variations.len(), 1);

        let matches = find_matches(Some("Ventilador 110 v azul"), &config);
        assert_eq!(matches.get("Voltagem").map(String::as_str), Some("110v"));
        assert_eq!(matches.get("Cor").map(String::as_str), Some("Azul"));
    }

    #[test]
    fn test_attribute_config_english_headers() {
        let t = table(
            &["Attribute", "Variation", "Recognition patterns"],
            &[&["Voltage", "110v", "110v"]],
        );
        assert_eq!(attribute_config_from_table(&t).unwrap().len(), 1);
    }

    #[test]
    fn test_attribute_config_missing_column() {
        let t = table(&["Atributo", "Variações"], &[]);
        let err = attribute_config_from_table(&t).unwrap_err();
        assert!(matches!(err, AnalyzerError::MissingColumn(ref c) if c == "Padrões de reconhecimento"));
    }

    #[test]
    fn test_categories_from_table() {
        let t = table(&["Palavra", "Categoria"], &[&["Maçã", "Alimentos"], &["", "Vazio"]]);
        let map = categories_from_table(&t).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.lookup(Some("maçã")), Some("Alimentos"));
    }

    #[test]
    fn test_ignore_phrases_without_column_is_empty() {
        let t = table(&["Outra"], &[&["cota"]]);
        assert!(ignore_phrases_from_table(&t).is_empty());

        let t = table(&["Palavras/Frases para ignorar"], &[&["Cota"], &["ampla concorrência"], &[""]]);
        let phrases = ignore_phrases_from_table(&t);
        assert_eq!(phrases.iter().collect::<Vec<_>>(), vec!["ampla concorrência", "cota"]);
    }

    #[test]
    fn test_load_optional_swallows_errors() {
        let loaded: Option<CategoryMap> =
            load_optional(Some(Path::new("/nonexistent/categorias.xlsx")), "categorias", load_categories);
        assert!(loaded.is_none());

        let none: Option<CategoryMap> = load_optional(None, "categorias", load_categories);
        assert!(none.is_none());
    }
}

//! 入力・設定ファイルのテンプレート
//!
//! 空の説明文テンプレートと、記入例入りの設定テンプレートを生成する。

use crate::types::{columns, Cell, Table};

/// 説明文テンプレート（ID, Descrição）
pub fn descriptions_template() -> Table {
    Table::with_headers(&[columns::ID, columns::DESCRIPTION])
}

/// 属性設定テンプレート
pub fn attributes_template() -> Table {
    let mut table = Table::with_headers(&[
        columns::ATTRIBUTE[0],
        columns::VARIATION[0],
        columns::PATTERNS[0],
    ]);

    for volts in ["110", "220"] {
        let patterns = ["v", " v", "volts", " volts", "-volts", "-volt", " volt"]
            .iter()
            .map(|suffix| format!("{}{}", volts, suffix))
            .collect::<Vec<_>>()
            .join(",");
        table.push_row(vec![
            Cell::from("Voltagem"),
            Cell::from(format!("{}v", volts)),
            Cell::from(patterns),
        ]);
    }

    table
}

/// カテゴリ設定テンプレート
pub fn categories_template() -> Table {
    let mut table = Table::with_headers(&[columns::WORD[0], columns::CATEGORY]);
    for (word, category) in [
        ("Maçã", "Alimentos"),
        ("Arroz", "Alimentos"),
        ("Parafuso", "Ferramentas"),
    ] {
        table.push_row(vec![Cell::from(word), Cell::from(category)]);
    }
    table
}

/// 除外フレーズテンプレート
pub fn ignore_phrases_template() -> Table {
    let mut table = Table::with_headers(&[columns::IGNORE_PHRASES[0]]);
    for phrase in [
        "cota",
        "ampla concorrência",
        "item",
        "produto",
        "modelo",
        "material permanente",
    ] {
        table.push_row(vec![Cell::from(phrase)]);
    }
    table
}

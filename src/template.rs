//! テンプレート出力
//!
//! 説明文・属性・カテゴリ・除外フレーズの記入用テンプレートを書き出す

use crate::cli::{ExportFormat, TemplateKind};
use crate::error::Result;
use crate::export;
use first_word_common::template;
use first_word_common::Table;
use std::path::{Path, PathBuf};

/// テンプレート種別ごとの (ファイル名, 表)
fn templates_for(kind: &TemplateKind) -> Vec<(&'static str, Table)> {
    let all = [
        TemplateKind::Descriptions,
        TemplateKind::Attributes,
        TemplateKind::Categories,
        TemplateKind::Ignore,
    ];

    let kinds: Vec<&TemplateKind> = match kind {
        TemplateKind::All => all.iter().collect(),
        single => vec![single],
    };

    kinds
        .into_iter()
        .filter_map(|k| match k {
            TemplateKind::Descriptions => Some(("modelo_descricoes", template::descriptions_template())),
            TemplateKind::Attributes => Some(("modelo_atributos", template::attributes_template())),
            TemplateKind::Categories => Some(("modelo_categorias", template::categories_template())),
            TemplateKind::Ignore => Some(("modelo_palavras_frases_ignorar", template::ignore_phrases_template())),
            TemplateKind::All => None,
        })
        .collect()
}

/// テンプレートを書き出す
pub fn write_templates(
    kind: &TemplateKind,
    format: &ExportFormat,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();
    for (stem, table) in templates_for(kind) {
        written.extend(export::write_table(&table, format, output_dir, stem)?);
    }
    Ok(written)
}

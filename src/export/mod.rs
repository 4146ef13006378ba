pub mod csv;
pub mod excel;

use crate::analysis::AnalysisReport;
use crate::cli::ExportFormat;
use crate::error::Result;
use first_word_common::Table;
use std::path::{Path, PathBuf};

/// 出力ファイル名（拡張子なし）
pub const FULL_DATA_STEM: &str = "dados_completos_analisados";
pub const STATISTICS_STEM: &str = "estatisticas_analise";
pub const CATEGORIES_STEM: &str = "distribuicao_categorias";

/// 表を指定形式で書き出し、書き出したパスを返す
pub fn write_table(
    table: &Table,
    format: &ExportFormat,
    output_dir: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if matches!(format, ExportFormat::Excel | ExportFormat::Both) {
        let path = output_dir.join(format!("{}.xlsx", stem));
        excel::write_table_xlsx(table, &path)?;
        written.push(path);
    }

    if matches!(format, ExportFormat::Csv | ExportFormat::Both) {
        let path = output_dir.join(format!("{}.csv", stem));
        csv::write_table_csv(table, &path)?;
        written.push(path);
    }

    Ok(written)
}

/// 解析結果を出力（全データ・頻度表・カテゴリ分布）
pub fn export_report(
    report: &AnalysisReport,
    format: &ExportFormat,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();

    println!("- Gerando dados completos...");
    written.extend(write_table(&report.full_table(), format, output_dir, FULL_DATA_STEM)?);

    println!("- Gerando estatísticas...");
    written.extend(write_table(&report.frequency_table(), format, output_dir, STATISTICS_STEM)?);

    if let Some(categories) = report.category_table() {
        println!("- Gerando distribuição por categoria...");
        written.extend(write_table(&categories, format, output_dir, CATEGORIES_STEM)?);
    }

    for path in &written {
        println!("✔ Arquivo gerado: {}", path.display());
    }

    Ok(written)
}

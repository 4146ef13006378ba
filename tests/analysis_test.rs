//! 解析の統合テスト
//!
//! CSV入力と設定ファイルから、全データ・頻度表・カテゴリ分布までを通しで確認

use first_word_analyzer::analysis;
use first_word_analyzer::cli::ExportFormat;
use first_word_analyzer::export;
use first_word_analyzer::loader;
use first_word_analyzer::reader;
use first_word_analyzer::session::Session;
use first_word_common::{CasePolicy, Cell};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("ファイル書き込み失敗");
    path
}

fn session_with_files(dir: &Path) -> Session {
    let attributes = write_file(
        dir,
        "atributos.csv",
        "Atributo,Variações,Padrões de reconhecimento\n\
         Voltagem,110v,\"110v,110 v,110 volts\"\n\
         Voltagem,220v,\"220v,220 v,220 volts\"\n\
         Cor,Azul,azul\n",
    );
    let categories = write_file(
        dir,
        "categorias.csv",
        "Palavra,Categoria\nArroz,Alimentos\nFeijão,Alimentos\nParafuso,Ferramentas\n",
    );
    let ignore = write_file(
        dir,
        "ignorar.csv",
        "Palavras/Frases para ignorar\ncota\nampla concorrência\ncota reservada\n",
    );

    let mut session = Session::default();
    session.attributes =
        loader::load_optional(Some(attributes.as_path()), "configuração", loader::load_attribute_config);
    session.categories = loader::load_optional(Some(categories.as_path()), "categorias", loader::load_categories);
    session.file_ignore_phrases =
        loader::load_optional(Some(ignore.as_path()), "palavras/frases", loader::load_ignore_phrases);
    session
}

/// 設定ファイル込みの通し解析
#[test]
fn test_end_to_end_with_config_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let session = session_with_files(dir.path());
    assert!(session.attributes.is_some());
    assert!(session.categories.is_some());

    let input = write_file(
        dir.path(),
        "dados.csv",
        "ID,Descrição\n\
         1,Cota reservada - Arroz tipo 1\n\
         2,AMPLA CONCORRÊNCIA: Feijão carioca\n\
         3,Parafuso 110 v azul\n\
         4,Arroz 220 volts\n\
         5,de\n\
         6,\n",
    );

    let table = reader::read_table(&input).unwrap();
    let report = analysis::analyze(&table, &session).unwrap();

    let words: Vec<Option<&str>> = report.rows.iter().map(|r| r.first_word.as_deref()).collect();
    assert_eq!(
        words,
        vec![Some("arroz"), Some("feijão"), Some("parafuso"), Some("arroz"), None, None]
    );

    assert_eq!(report.attribute_names, vec!["Voltagem", "Cor"]);
    assert_eq!(
        report.rows[2].attributes,
        vec![Some("110v".to_string()), Some("Azul".to_string())]
    );
    assert_eq!(report.rows[3].attributes, vec![Some("220v".to_string()), None]);

    let categories = report.category_frequencies.as_ref().unwrap();
    assert_eq!(categories[0].value, "Alimentos");
    assert_eq!(categories[0].count, 3);
    assert_eq!(categories[1].value, "Ferramentas");

    let full = report.full_table();
    assert_eq!(
        full.headers,
        vec!["ID", "Descrição", "Primeira Palavra", "Categoria", "Voltagem", "Cor"]
    );
    assert_eq!(full.cell(4, 2), &Cell::Empty);
}

/// 手動追加フレーズで再解析すると結果が変わる
#[test]
fn test_reanalysis_after_manual_phrase() {
    let mut table = first_word_common::Table::with_headers(&["Descrição"]);
    table.push_row(vec![Cell::from("Material permanente Cadeira giratória")]);
    table.push_row(vec![Cell::from("Material de consumo Papel A4")]);

    let mut session = Session::default();
    let before = analysis::analyze(&table, &session).unwrap();
    assert_eq!(before.word_frequencies[0].0.value, "material");
    assert_eq!(before.word_frequencies[0].0.count, 2);

    session.add_ignore_phrase("material permanente");
    session.add_ignore_phrase("material de consumo");
    let after = analysis::analyze(&table, &session).unwrap();
    let words: Vec<Option<&str>> = after.rows.iter().map(|r| r.first_word.as_deref()).collect();
    assert_eq!(words, vec![Some("cadeira"), Some("papel")]);

    assert_eq!(session.clear_manual(), 2);
    let cleared = analysis::analyze(&table, &session).unwrap();
    assert_eq!(cleared.word_frequencies[0].0.value, "material");
}

/// 大文字小文字を保持する設定
#[test]
fn test_preserve_case_policy() {
    let mut table = first_word_common::Table::with_headers(&["Descrição"]);
    table.push_row(vec![Cell::from("Arroz tipo 1")]);
    table.push_row(vec![Cell::from("arroz integral")]);

    let mut session = Session::default();
    session.case_policy = CasePolicy::Preserve;
    let report = analysis::analyze(&table, &session).unwrap();
    let values: Vec<&str> = report.word_frequencies.iter().map(|(e, _)| e.value.as_str()).collect();
    assert_eq!(values, vec!["Arroz", "arroz"]);
}

/// 解析からエクスポートまで（カテゴリ分布あり）
#[test]
fn test_export_with_categories() {
    let dir = tempdir().expect("Failed to create temp dir");
    let session = session_with_files(dir.path());
    let input = write_file(dir.path(), "dados.csv", "Descrição\nArroz\nParafuso\nArroz\n");

    let table = reader::read_table(&input).unwrap();
    let report = analysis::analyze(&table, &session).unwrap();
    let out = dir.path().join("saida");
    let written = export::export_report(&report, &ExportFormat::Csv, &out).unwrap();
    assert_eq!(written.len(), 3);

    let distribution = reader::read_table(&out.join("distribuicao_categorias.csv")).unwrap();
    assert_eq!(distribution.headers, vec!["Categoria", "Frequência"]);
    assert_eq!(distribution.cell(0, 0).as_text(), Some("Alimentos"));
    assert_eq!(distribution.cell(0, 1).as_text(), Some("2"));
}

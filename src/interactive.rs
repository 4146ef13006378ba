//! 対話セッション
//!
//! セッション状態を保持したまま、除外フレーズの追加・削除、設定の読み込み、
//! 再解析、エクスポートを繰り返す。処理中のエラーは表示してセッションを継続する。

use crate::analysis::{self, AnalysisReport};
use crate::cli::ExportFormat;
use crate::error::{AnalyzerError, Result};
use crate::export;
use crate::loader;
use crate::reader;
use crate::render;
use crate::session::Session;
use dialoguer::{Input, Select};
use std::path::PathBuf;

/// メニュー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// 説明文ファイルを選択
    SelectInput,
    /// 属性設定を読み込む
    LoadAttributes,
    /// カテゴリ設定を読み込む
    LoadCategories,
    /// 除外フレーズファイルを読み込む
    LoadIgnoreFile,
    /// 除外フレーズを追加
    AddIgnorePhrase,
    /// ストップワードを追加
    AddStopword,
    /// 手動追加分を削除
    ClearManual,
    /// 除外項目を一覧
    ListIgnored,
    /// 解析
    Analyze,
    /// 直前の解析結果を出力
    Export,
    /// 終了
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 11] = [
        MenuAction::SelectInput,
        MenuAction::LoadAttributes,
        MenuAction::LoadCategories,
        MenuAction::LoadIgnoreFile,
        MenuAction::AddIgnorePhrase,
        MenuAction::AddStopword,
        MenuAction::ClearManual,
        MenuAction::ListIgnored,
        MenuAction::Analyze,
        MenuAction::Export,
        MenuAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::SelectInput => "Carregar arquivo de descrições",
            MenuAction::LoadAttributes => "Carregar configuração de atributos",
            MenuAction::LoadCategories => "Carregar configuração de categorias",
            MenuAction::LoadIgnoreFile => "Carregar palavras/frases para ignorar",
            MenuAction::AddIgnorePhrase => "Adicionar palavra ou frase para ignorar",
            MenuAction::AddStopword => "Adicionar stopword",
            MenuAction::ClearManual => "Limpar adições manuais",
            MenuAction::ListIgnored => "Listar itens ignorados",
            MenuAction::Analyze => "Analisar",
            MenuAction::Export => "Exportar resultados",
            MenuAction::Quit => "Sair",
        }
    }
}

/// 対話セッションの状態
pub struct InteractiveState {
    pub session: Session,
    pub input: Option<PathBuf>,
    pub last_report: Option<AnalysisReport>,
    pub top_n: usize,
}

impl InteractiveState {
    pub fn new(session: Session, input: Option<PathBuf>, top_n: usize) -> Self {
        Self { session, input, last_report: None, top_n }
    }

    /// 説明文ファイルを解析し、結果を保持する
    pub fn run_analysis(&mut self) -> Result<&AnalysisReport> {
        let input = self
            .input
            .clone()
            .ok_or_else(|| AnalyzerError::Config("Nenhum arquivo de descrições carregado".into()))?;

        let table = reader::read_table(&input)?;
        println!("✔ Arquivo carregado com sucesso! ({} registros)", table.len());

        let bar = analysis::progress_bar(table.len());
        let report = analysis::analyze_with_progress(&table, &self.session, &bar)?;
        Ok(&*self.last_report.insert(report))
    }

    /// 直前の解析結果を出力
    pub fn export_last(&self, format: &ExportFormat, output_dir: &std::path::Path) -> Result<Vec<PathBuf>> {
        let report = self.last_report.as_ref().ok_or(AnalyzerError::NoAnalysis)?;
        export::export_report(report, format, output_dir)
    }
}

fn prompt_text(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AnalyzerError::Prompt(e.to_string()))?;
    Ok(value.trim().to_string())
}

fn prompt_path(prompt: &str) -> Result<Option<PathBuf>> {
    let value = prompt_text(prompt)?;
    Ok((!value.is_empty()).then(|| PathBuf::from(value)))
}

/// 出力形式の選択肢
const EXPORT_FORMATS: [(&str, ExportFormat); 3] = [
    ("Excel (.xlsx)", ExportFormat::Excel),
    ("CSV", ExportFormat::Csv),
    ("Excel + CSV", ExportFormat::Both),
];

fn prompt_format() -> Result<ExportFormat> {
    let labels: Vec<&str> = EXPORT_FORMATS.iter().map(|(label, _)| *label).collect();
    let index = Select::new()
        .with_prompt("Formato de saída")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| AnalyzerError::Prompt(e.to_string()))?;
    Ok(EXPORT_FORMATS[index].1.clone())
}

fn prompt_action() -> Result<MenuAction> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
    let index = Select::new()
        .with_prompt("Escolha uma ação")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| AnalyzerError::Prompt(e.to_string()))?;
    Ok(MenuAction::ALL[index])
}

/// 1操作を実行。終了なら false
fn handle_action(state: &mut InteractiveState, action: MenuAction) -> Result<bool> {
    match action {
        MenuAction::SelectInput => {
            if let Some(path) = prompt_path("Caminho do arquivo (.xlsx ou .csv)")? {
                state.input = Some(path);
            }
        }
        MenuAction::LoadAttributes => {
            if let Some(path) = prompt_path("Arquivo de atributos")? {
                state.session.attributes =
                    loader::load_optional(Some(path.as_path()), "configuração", loader::load_attribute_config);
                if let Some(config) = &state.session.attributes {
                    println!("✔ {} atributos carregados", config.len());
                }
            }
        }
        MenuAction::LoadCategories => {
            if let Some(path) = prompt_path("Arquivo de categorias")? {
                state.session.categories =
                    loader::load_optional(Some(path.as_path()), "categorias", loader::load_categories);
                if let Some(map) = &state.session.categories {
                    println!("✔ {} palavras categorizadas", map.len());
                }
            }
        }
        MenuAction::LoadIgnoreFile => {
            if let Some(path) = prompt_path("Arquivo de palavras/frases")? {
                state.session.file_ignore_phrases = loader::load_optional(
                    Some(path.as_path()),
                    "palavras/frases para ignorar",
                    loader::load_ignore_phrases,
                );
                if let Some(phrases) = &state.session.file_ignore_phrases {
                    println!("✔ {} itens carregados", phrases.len());
                }
            }
        }
        MenuAction::AddIgnorePhrase => {
            let phrase = prompt_text("Digite uma palavra ou frase para ignorar")?;
            if state.session.add_ignore_phrase(&phrase) {
                println!("✔ '{}' adicionado com sucesso!", phrase);
            }
        }
        MenuAction::AddStopword => {
            let word = prompt_text("Digite uma stopword")?;
            if state.session.add_stopword(&word) {
                println!("✔ Stopword '{}' adicionada", word.to_lowercase());
            }
        }
        MenuAction::ClearManual => {
            let removed = state.session.clear_manual();
            println!("✔ {} itens removidos", removed);
        }
        MenuAction::ListIgnored => {
            let items = state.session.manual_items();
            if items.is_empty() {
                println!("Nenhuma adição manual");
            } else {
                println!("Itens ignorados atualmente:");
                for item in items {
                    println!("  - {}", item);
                }
            }
            if let Some(phrases) = &state.session.file_ignore_phrases {
                println!("(+{} itens do arquivo)", phrases.len());
            }
            let stopwords = state.session.stopwords.added();
            if !stopwords.is_empty() {
                println!("Stopwords adicionadas: {}", stopwords.join(", "));
            }
        }
        MenuAction::Analyze => {
            let top = state.top_n;
            let report = state.run_analysis()?;
            render::print_summary(report, top);
        }
        MenuAction::Export => {
            let format = prompt_format()?;
            let output = prompt_path("Diretório de saída (vazio = atual)")?
                .unwrap_or_else(|| PathBuf::from("."));
            state.export_last(&format, &output)?;
        }
        MenuAction::Quit => return Ok(false),
    }

    Ok(true)
}

/// 対話セッションを実行
pub fn run_interactive(mut state: InteractiveState) -> Result<()> {
    println!("🔍 Analisador de primeiras palavras - sessão interativa\n");

    loop {
        let action = prompt_action()?;
        match handle_action(&mut state, action) {
            Ok(true) => println!(),
            Ok(false) => break,
            // プロンプト自体の失敗（端末なし等）は終了
            Err(e @ AnalyzerError::Prompt(_)) => return Err(e),
            Err(e) => {
                eprintln!("❌ Erro ao processar o arquivo: {}\n", e);
                tracing::debug!(error = ?e, "interactive action failed");
            }
        }
    }

    println!("Sessão encerrada");
    Ok(())
}

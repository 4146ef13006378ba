use clap::{Parser, Subcommand};
use first_word_common::CasePolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "first-word")]
#[command(about = "Analisador de primeiras palavras de descrições", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Exibir logs detalhados
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analisar um arquivo de descrições e exportar os resultados
    Analyze {
        /// Arquivo de descrições (.xlsx ou .csv)
        #[arg(required = true)]
        input: PathBuf,

        /// Configuração de atributos
        #[arg(short, long)]
        attributes: Option<PathBuf>,

        /// Configuração de categorias
        #[arg(short, long)]
        categories: Option<PathBuf>,

        /// Palavras/frases para ignorar (arquivo)
        #[arg(short, long)]
        ignore: Option<PathBuf>,

        /// Palavra/frase para ignorar (pode repetir)
        #[arg(short = 'x', long = "ignore-phrase")]
        ignore_phrases: Vec<String>,

        /// Stopword adicional (pode repetir)
        #[arg(short = 's', long = "stopword")]
        stopwords: Vec<String>,

        /// Diretório de saída (padrão: diretório atual)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Formato de saída (excel/csv/both)
        #[arg(short, long, default_value = "excel")]
        format: ExportFormat,

        /// Nome da coluna de descrição
        #[arg(long)]
        column: Option<String>,

        /// Caixa da primeira palavra (lower/preserve)
        #[arg(long)]
        case: Option<CasePolicy>,

        /// Quantidade de palavras exibidas no terminal
        #[arg(long)]
        top: Option<usize>,

        /// Não gerar arquivos, apenas exibir no terminal
        #[arg(long)]
        no_export: bool,
    },

    /// Gerar modelos de planilha
    Template {
        /// Tipo de modelo (descriptions/attributes/categories/ignore/all)
        #[arg(default_value = "all")]
        kind: TemplateKind,

        /// Diretório de saída
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Formato de saída (excel/csv/both)
        #[arg(short, long, default_value = "excel")]
        format: ExportFormat,
    },

    /// Sessão interativa (adicionar itens ignorados, reanalisar, exportar)
    Interactive {
        /// Arquivo de descrições
        input: Option<PathBuf>,

        /// Configuração de atributos
        #[arg(short, long)]
        attributes: Option<PathBuf>,

        /// Configuração de categorias
        #[arg(short, long)]
        categories: Option<PathBuf>,

        /// Palavras/frases para ignorar (arquivo)
        #[arg(short, long)]
        ignore: Option<PathBuf>,
    },

    /// Listar as stopwords efetivas
    Stopwords {
        /// Stopword a salvar nas configurações (pode repetir)
        #[arg(short, long)]
        add: Vec<String>,
    },

    /// Mostrar/editar configurações
    Config {
        /// Mostrar configurações
        #[arg(long)]
        show: bool,

        /// Definir o nome da coluna de descrição
        #[arg(long)]
        set_column: Option<String>,

        /// Definir a caixa da primeira palavra (lower/preserve)
        #[arg(long)]
        set_case: Option<CasePolicy>,

        /// Definir a quantidade de palavras exibidas
        #[arg(long)]
        set_top: Option<usize>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Excel,
    Csv,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "csv" => Ok(ExportFormat::Csv),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use excel, csv, or both", s)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TemplateKind {
    Descriptions,
    Attributes,
    Categories,
    Ignore,
    #[default]
    All,
}

impl std::str::FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "descriptions" | "descricoes" | "data" => Ok(TemplateKind::Descriptions),
            "attributes" | "atributos" => Ok(TemplateKind::Attributes),
            "categories" | "categorias" => Ok(TemplateKind::Categories),
            "ignore" | "ignorar" => Ok(TemplateKind::Ignore),
            "all" | "todos" => Ok(TemplateKind::All),
            _ => Err(format!(
                "Unknown template: {}. Use descriptions, attributes, categories, ignore, or all",
                s
            )),
        }
    }
}

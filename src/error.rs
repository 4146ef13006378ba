use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Formato de arquivo não suportado: {0} (use .xlsx ou .csv)")]
    UnsupportedFormat(String),

    #[error("O arquivo deve conter a coluna '{0}'")]
    MissingColumn(String),

    #[error("Erro ao ler planilha: {0}")]
    ExcelRead(String),

    #[error("Planilha sem abas: {0}")]
    EmptyWorkbook(String),

    #[error("Erro ao ler CSV: {0}")]
    CsvParse(String),

    #[error("Erro ao gerar Excel: {0}")]
    ExcelGeneration(String),

    #[error("Nenhuma análise disponível para exportar")]
    NoAnalysis,

    #[error("Erro de entrada interativa: {0}")]
    Prompt(String),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] first_word_common::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

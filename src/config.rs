use crate::error::{AnalyzerError, Result};
use first_word_common::{columns, CasePolicy, DEFAULT_MAX_PASSES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 説明文の列名
    pub description_column: String,
    /// 先頭語の大文字小文字
    pub case_policy: CasePolicy,
    /// 除外フレーズ除去のループ上限
    pub max_strip_passes: usize,
    /// 端末に表示する上位件数
    pub top_n: usize,
    /// 追加ストップワード
    pub stopwords: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            description_column: columns::DESCRIPTION.into(),
            case_policy: CasePolicy::Lower,
            max_strip_passes: DEFAULT_MAX_PASSES,
            top_n: 20,
            stopwords: Vec::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 追加ストップワードを登録（正規化・重複除去）。新規なら true
    pub fn add_stopword(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() || self.stopwords.contains(&word) {
            return false;
        }
        self.stopwords.push(word);
        true
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AnalyzerError::Config("Diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("first-word").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.description_column, "Descrição");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            description_column: "Descricao".into(),
            case_policy: CasePolicy::Preserve,
            top_n: 5,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"case_policy": "preserve"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.case_policy, CasePolicy::Preserve);
        assert_eq!(config.top_n, 20);
    }

    #[test]
    fn test_add_stopword_dedups() {
        let mut config = Config::default();
        assert!(config.add_stopword(" Kit "));
        assert!(!config.add_stopword("kit"));
        assert!(!config.add_stopword("  "));
        assert_eq!(config.stopwords, vec!["kit"]);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(AnalyzerError::JsonParse(_))
        ));
    }
}

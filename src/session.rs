//! セッション状態
//!
//! ストップワード・除外フレーズ・読み込み済み設定をまとめた状態。
//! 1回のCLI実行（または対話セッション）ごとに生成し、終了時に破棄する。

use crate::config::Config;
use first_word_common::{
    AttributeConfig, CasePolicy, CategoryMap, FirstWordExtractor, IgnorePhrases, StopwordSet,
    DEFAULT_MAX_PASSES,
};

#[derive(Debug, Clone)]
pub struct Session {
    /// 組み込み + 追加ストップワード
    pub stopwords: StopwordSet,
    /// 設定ファイルから読み込んだ除外フレーズ
    pub file_ignore_phrases: Option<IgnorePhrases>,
    /// 手動で追加した除外フレーズ
    pub manual_ignore_phrases: IgnorePhrases,
    pub attributes: Option<AttributeConfig>,
    pub categories: Option<CategoryMap>,
    pub description_column: String,
    pub case_policy: CasePolicy,
    pub max_strip_passes: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Session {
    pub fn from_config(config: &Config) -> Self {
        let mut stopwords = StopwordSet::default();
        stopwords.extend(&config.stopwords);

        Self {
            stopwords,
            file_ignore_phrases: None,
            manual_ignore_phrases: IgnorePhrases::new(),
            attributes: None,
            categories: None,
            description_column: config.description_column.clone(),
            case_policy: config.case_policy,
            max_strip_passes: if config.max_strip_passes == 0 {
                DEFAULT_MAX_PASSES
            } else {
                config.max_strip_passes
            },
        }
    }

    /// 除外フレーズを手動追加。新規なら true
    pub fn add_ignore_phrase(&mut self, phrase: &str) -> bool {
        self.manual_ignore_phrases.insert(phrase)
    }

    /// 手動追加分を削除
    pub fn clear_manual(&mut self) -> usize {
        let removed = self.manual_ignore_phrases.len();
        self.manual_ignore_phrases.clear();
        removed
    }

    pub fn add_stopword(&mut self, word: &str) -> bool {
        self.stopwords.insert(word)
    }

    /// 有効な除外フレーズ（ファイル ∪ 手動）
    pub fn effective_ignore_phrases(&self) -> IgnorePhrases {
        match &self.file_ignore_phrases {
            Some(from_file) => from_file.union(&self.manual_ignore_phrases),
            None => self.manual_ignore_phrases.clone(),
        }
    }

    /// 手動追加分の一覧（ソート済み）
    pub fn manual_items(&self) -> Vec<&str> {
        let mut items: Vec<&str> = self.manual_ignore_phrases.iter().collect();
        items.sort_unstable();
        items
    }

    /// このセッションの設定で抽出器を作る
    pub fn extractor<'a>(&'a self, ignore_phrases: &'a IgnorePhrases) -> FirstWordExtractor<'a> {
        FirstWordExtractor::new(&self.stopwords, ignore_phrases)
            .with_case_policy(self.case_policy)
            .with_max_passes(self.max_strip_passes)
    }
}

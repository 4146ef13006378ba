//! 先頭語抽出
//!
//! ## 処理フロー
//! 1. 前後の空白を除去（空なら語なし）
//! 2. 先頭の除外フレーズを最長一致で除去（繰り返し）
//! 3. 先頭の英数字・アクセント付きラテン文字以外を除去し、最初のトークンを取得
//! 4. ストップワードなら読み飛ばして 2 に戻る、3文字未満なら語なし
//!
//! 2〜4 は上限付きのループで、除去が終わらない入力でも必ず停止する。

use crate::ignore::IgnorePhrases;
use crate::stopwords::{StopwordSet, MIN_WORD_LEN};
use crate::types::CasePolicy;
use regex::Regex;

/// ループ上限のデフォルト値
pub const DEFAULT_MAX_PASSES: usize = 64;

lazy_static::lazy_static! {
    // 英数字 + Latin-1 のアクセント付き文字（À-ÿ）以外の先頭文字
    static ref LEADING_NOISE_RE: Regex = Regex::new(r"^[^a-zA-ZÀ-ÿ0-9]+").unwrap();
}

/// 先頭語抽出器
///
/// ストップワード・除外フレーズはセッションから借用する。
#[derive(Debug, Clone, Copy)]
pub struct FirstWordExtractor<'a> {
    stopwords: &'a StopwordSet,
    ignore_phrases: &'a IgnorePhrases,
    case_policy: CasePolicy,
    max_passes: usize,
}

impl<'a> FirstWordExtractor<'a> {
    pub fn new(stopwords: &'a StopwordSet, ignore_phrases: &'a IgnorePhrases) -> Self {
        Self {
            stopwords,
            ignore_phrases,
            case_policy: CasePolicy::default(),
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    pub fn with_case_policy(mut self, case_policy: CasePolicy) -> Self {
        self.case_policy = case_policy;
        self
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    /// 先頭語を抽出する（語なしは None）
    pub fn extract(&self, text: Option<&str>) -> Option<String> {
        let mut rest = text?.trim();

        for _ in 0..self.max_passes {
            if rest.is_empty() {
                return None;
            }

            if let Some(stripped) = self.ignore_phrases.strip_longest_prefix(rest) {
                rest = stripped;
                continue;
            }

            if let Some(noise) = LEADING_NOISE_RE.find(rest) {
                rest = &rest[noise.end()..];
                continue;
            }

            // rest は空白以外で始まるので、トークンは rest の先頭
            let token = rest.split_whitespace().next()?;

            if self.stopwords.contains(token) {
                rest = rest[token.len()..].trim_start();
                continue;
            }

            if token.chars().count() < MIN_WORD_LEN {
                return None;
            }

            return Some(match self.case_policy {
                CasePolicy::Lower => token.to_lowercase(),
                CasePolicy::Preserve => token.to_string(),
            });
        }

        tracing::warn!(
            max_passes = self.max_passes,
            "first-word extraction hit the pass limit: {:?}",
            text
        );
        None
    }
}

/// 先頭語を抽出する（小文字化・デフォルト上限）
pub fn extract_first_word(
    text: Option<&str>,
    stopwords: &StopwordSet,
    ignore_phrases: &IgnorePhrases,
) -> Option<String> {
    FirstWordExtractor::new(stopwords, ignore_phrases).extract(text)
}

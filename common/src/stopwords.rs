//! ストップワード
//!
//! 組み込みのポルトガル語機能語 + ユーザー追加分（和集合）

use std::collections::HashSet;

/// 組み込みストップワード
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "de", "para", "com", "sem", "em", "por", "que", "os", "as", "um", "uma",
    "ao", "aos", "do", "da", "dos", "das", "no", "na", "nos", "nas", "pelo",
    "pela", "pelos", "pelas", "este", "esta", "estes", "estas", "esse",
    "essa", "esses", "essas", "aquele", "aquela", "aqueles", "aquelas",
    "ou", "e", "mas", "porém", "entretanto", "contudo", "quando", "enquanto",
    "como", "porque", "pois", "assim", "então", "logo", "portanto", "desse",
    "dessa", "destes", "destas", "deste", "isso", "isto", "aquilo",
];

/// 最小語長（文字数）
pub const MIN_WORD_LEN: usize = 3;

/// ストップワード集合（小文字で保持）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOPWORDS.iter().copied())
    }
}

impl StopwordSet {
    /// 空の集合（組み込み語なし）
    pub fn empty() -> Self {
        Self { words: HashSet::new() }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        set.extend(words);
        set
    }

    /// 追加（前後空白除去・小文字化、空文字は無視）。新規なら true
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// 大文字小文字を区別せずに判定
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// ソート済み一覧
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(|s| s.as_str()).collect();
        words.sort_unstable();
        words
    }

    /// 組み込み語以外（ユーザー追加分）のソート済み一覧
    pub fn added(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .words
            .iter()
            .map(|s| s.as_str())
            .filter(|w| !DEFAULT_STOPWORDS.contains(w))
            .collect();
        words.sort_unstable();
        words
    }
}

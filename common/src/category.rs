//! 語 → カテゴリ対応表

use std::collections::HashMap;

/// カテゴリ対応表（キーは小文字）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    entries: HashMap<String, String>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登録（同じ語は後勝ち、空の語・カテゴリは無視）
    pub fn insert(&mut self, word: &str, category: &str) {
        let word = word.trim().to_lowercase();
        let category = category.trim();
        if word.is_empty() || category.is_empty() {
            return;
        }
        self.entries.insert(word, category.to_string());
    }

    /// カテゴリを取得（語なし・未登録は None）
    pub fn lookup(&self, word: Option<&str>) -> Option<&str> {
        let word = word?.to_lowercase();
        self.entries.get(&word).map(|c| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W: AsRef<str>, C: AsRef<str>> FromIterator<(W, C)> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = (W, C)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (word, category) in iter {
            map.insert(word.as_ref(), category.as_ref());
        }
        map
    }
}

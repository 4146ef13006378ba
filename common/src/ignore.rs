//! 除外フレーズ
//!
//! 説明文の先頭に付く定型句（"ampla concorrência" 等）を除去する。
//! 長いフレーズから順に照合するため、常に文字数の降順で保持する。

/// 除外フレーズ集合（小文字・重複なし・文字数降順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnorePhrases {
    phrases: Vec<String>,
}

impl IgnorePhrases {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加（前後空白除去・小文字化、空文字は無視）。新規なら true
    pub fn insert(&mut self, phrase: &str) -> bool {
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() || self.phrases.contains(&phrase) {
            return false;
        }

        // 文字数の降順を維持（同じ長さは追加順）
        let len = phrase.chars().count();
        let pos = self
            .phrases
            .iter()
            .position(|p| p.chars().count() < len)
            .unwrap_or(self.phrases.len());
        self.phrases.insert(pos, phrase);
        true
    }

    pub fn extend<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for phrase in phrases {
            self.insert(phrase.as_ref());
        }
    }

    /// 2つの集合の和
    pub fn union(&self, other: &IgnorePhrases) -> IgnorePhrases {
        let mut merged = self.clone();
        merged.extend(other.iter());
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn clear(&mut self) {
        self.phrases.clear();
    }

    /// 先頭に一致する最長フレーズを除去し、残り（先頭空白除去済み）を返す
    pub fn strip_longest_prefix<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.phrases
            .iter()
            .find_map(|phrase| strip_prefix_ignore_case(text, phrase))
            .map(str::trim_start)
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnorePhrases {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut phrases = Self::new();
        phrases.extend(iter);
        phrases
    }
}

/// 大文字小文字を区別しない前方一致。一致すれば残りの部分文字列を返す
///
/// 両辺を文字単位で小文字に畳み込んで比較する（1文字が複数文字になる場合を含む）。
/// 一致の終端はテキストの文字境界であること。
fn strip_prefix_ignore_case<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    let mut expected = phrase.chars().flat_map(char::to_lowercase).peekable();
    for (idx, c) in text.char_indices() {
        if expected.peek().is_none() {
            return Some(&text[idx..]);
        }
        for lower in c.to_lowercase() {
            if expected.next() != Some(lower) {
                return None;
            }
        }
    }

    // テキスト末尾まで一致
    expected.peek().is_none().then_some("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_longest_first() {
        let phrases: IgnorePhrases = ["item", "ampla concorrência", "cota", "material permanente"]
            .into_iter()
            .collect();
        let listed: Vec<&str> = phrases.iter().collect();
        assert_eq!(
            listed,
            vec!["material permanente", "ampla concorrência", "item", "cota"]
        );
    }

    #[test]
    fn test_insert_normalizes_and_dedups() {
        let mut phrases = IgnorePhrases::new();
        assert!(phrases.insert("  Ampla Concorrência "));
        assert!(!phrases.insert("ampla concorrência"));
        assert!(!phrases.insert("   "));
        assert_eq!(phrases.len(), 1);
    }

    #[test]
    fn test_strip_case_insensitive_prefix() {
        let phrases: IgnorePhrases = ["ampla concorrência"].into_iter().collect();
        assert_eq!(
            phrases.strip_longest_prefix("AMPLA CONCORRÊNCIA  Arroz tipo 1"),
            Some("Arroz tipo 1")
        );
        assert_eq!(phrases.strip_longest_prefix("Arroz ampla concorrência"), None);
    }

    #[test]
    fn test_strip_when_lowercase_expands() {
        // 'İ' は小文字化すると 2 文字（i + 結合用ドット）になる
        let phrases: IgnorePhrases = ["İtem"].into_iter().collect();
        assert_eq!(phrases.strip_longest_prefix("İtem Caneta"), Some("Caneta"));
        assert_eq!(phrases.strip_longest_prefix("item Caneta"), None);
    }

    #[test]
    fn test_strip_prefers_longest_phrase() {
        let phrases: IgnorePhrases = ["item", "item de cota"].into_iter().collect();
        assert_eq!(
            phrases.strip_longest_prefix("Item de cota caneta azul"),
            Some("caneta azul")
        );
    }

    #[test]
    fn test_strip_whole_text() {
        let phrases: IgnorePhrases = ["produto"].into_iter().collect();
        assert_eq!(phrases.strip_longest_prefix("Produto"), Some(""));
        assert_eq!(phrases.strip_longest_prefix("Prod"), None);
    }

    #[test]
    fn test_union() {
        let a: IgnorePhrases = ["cota"].into_iter().collect();
        let b: IgnorePhrases = ["cota", "modelo"].into_iter().collect();
        assert_eq!(a.union(&b).len(), 2);
    }
}

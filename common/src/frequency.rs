//! 頻度集計
//!
//! 件数の降順、同数は最初に出現した順（安定ソート）。

use crate::types::FrequencyEntry;
use std::collections::HashMap;

/// 値の出現頻度を集計する（None は数えない）
pub fn count_frequencies<I, S>(values: I) -> Vec<FrequencyEntry>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<FrequencyEntry> = Vec::new();

    for value in values.into_iter().flatten() {
        let value = value.as_ref();
        match index.get(value) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(value.to_string(), entries.len());
                entries.push(FrequencyEntry {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by は安定ソートなので出現順が保たれる
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// 集計の合計件数
pub fn total_count(entries: &[FrequencyEntry]) -> usize {
    entries.iter().map(|e| e.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_with_first_seen_ties() {
        let words = vec![
            Some("caneta"),
            Some("arroz"),
            None,
            Some("lápis"),
            Some("arroz"),
            Some("caneta"),
            Some("papel"),
        ];
        let entries = count_frequencies(words);
        let order: Vec<(&str, usize)> = entries.iter().map(|e| (e.value.as_str(), e.count)).collect();
        assert_eq!(
            order,
            vec![("caneta", 2), ("arroz", 2), ("lápis", 1), ("papel", 1)]
        );
    }

    #[test]
    fn test_total_equals_non_null_count() {
        let words = vec![Some("a"), None, Some("b"), Some("a"), None];
        let entries = count_frequencies(words.clone());
        assert_eq!(total_count(&entries), words.iter().flatten().count());
    }

    #[test]
    fn test_empty_input() {
        let entries = count_frequencies(Vec::<Option<String>>::new());
        assert!(entries.is_empty());
        assert_eq!(total_count(&entries), 0);
    }
}

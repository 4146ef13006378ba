//! 属性パターン照合
//!
//! 属性（例: Voltagem）ごとに、バリエーション（例: 110v）とその認識パターンを持つ。
//! パターンは単語境界付き・大文字小文字無視のリテラル検索で照合する。

use crate::error::Result;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};

/// バリエーション（ラベル + 認識パターン）
#[derive(Debug, Clone)]
pub struct Variation {
    pub label: String,
    pub patterns: Vec<String>,
    regexes: Vec<Regex>,
}

impl Variation {
    /// パターンをコンパイルして生成（前後空白除去・小文字化、空パターンは捨てる）
    pub fn new<I, S>(label: &str, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept = Vec::new();
        let mut regexes = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref().trim().to_lowercase();
            if pattern.is_empty() || kept.contains(&pattern) {
                continue;
            }
            regexes.push(Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&pattern)))?);
            kept.push(pattern);
        }

        Ok(Self {
            label: label.trim().to_string(),
            patterns: kept,
            regexes,
        })
    }

    /// いずれかのパターンに一致するか（最初の一致で打ち切り）
    pub fn is_match(&self, text: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(text))
    }
}

/// 属性（名前 + バリエーション一覧）
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub variations: Vec<Variation>,
}

/// 属性設定（ファイル上の出現順を保持）
#[derive(Debug, Clone, Default)]
pub struct AttributeConfig {
    attributes: Vec<Attribute>,
}

impl AttributeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// バリエーションを追加（属性がなければ末尾に作成）
    pub fn add_variation(&mut self, attribute: &str, variation: Variation) {
        let attribute = attribute.trim();
        match self.attributes.iter_mut().find(|a| a.name == attribute) {
            Some(existing) => existing.variations.push(variation),
            None => self.attributes.push(Attribute {
                name: attribute.to_string(),
                variations: vec![variation],
            }),
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// 属性名一覧（出力列の順序）
    pub fn names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// 説明文中の属性バリエーションを照合する
///
/// 戻り値は 属性名 → 一致したバリエーション（重複除去・ソート・"/"区切り）。
/// 一致のない属性は含まない。
pub fn find_matches(text: Option<&str>, config: &AttributeConfig) -> HashMap<String, String> {
    let mut matches = HashMap::new();
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return matches;
    };

    for attribute in &config.attributes {
        let labels: BTreeSet<&str> = attribute
            .variations
            .iter()
            .filter(|v| v.is_match(text))
            .map(|v| v.label.as_str())
            .collect();

        if !labels.is_empty() {
            let joined: Vec<&str> = labels.into_iter().collect();
            matches.insert(attribute.name.clone(), joined.join("/"));
        }
    }

    matches
}

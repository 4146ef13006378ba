//! 共通型定義
//!
//! 表データ（読み込み・出力共通）と列名の定義

use serde::{Deserialize, Serialize};

/// 列名定義
pub mod columns {
    pub const ID: &str = "ID";
    pub const DESCRIPTION: &str = "Descrição";
    pub const FIRST_WORD: &str = "Primeira Palavra";
    pub const CATEGORY: &str = "Categoria";
    pub const FREQUENCY: &str = "Frequência";

    // 属性設定ファイル
    pub const ATTRIBUTE: &[&str] = &["Atributo", "Attribute"];
    pub const VARIATION: &[&str] = &["Variações", "Variação", "Variation"];
    pub const PATTERNS: &[&str] = &["Padrões de reconhecimento", "Recognition patterns"];

    // カテゴリ設定ファイル
    pub const WORD: &[&str] = &["Palavra", "Word"];
    pub const CATEGORY_ALIASES: &[&str] = &["Categoria", "Category"];

    // 除外フレーズ設定ファイル
    pub const IGNORE_PHRASES: &[&str] = &["Palavras/Frases para ignorar", "Phrases to ignore"];
}

/// セル値
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    /// 文字列・数値以外の値（真偽値・日時など）。表示用の文字列を保持
    Other(String),
}

impl Cell {
    /// 文字列セルのみ取得（数値・日時・空などは None）
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) | Cell::Other(_) => false,
        }
    }

    /// 任意の値から生成（None は空セル）
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            Some(s) => Cell::Text(s.to_string()),
            None => Cell::Empty,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<usize> for Cell {
    fn from(n: usize) -> Self {
        Cell::Number(n as f64)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) | Cell::Other(s) => write!(f, "{}", s),
            // 整数値は小数点なしで表示
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{}", n),
        }
    }
}

/// 表データ（ヘッダー + 行）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub fn with_headers(headers: &[&str]) -> Self {
        Self::new(headers.iter().map(|h| h.to_string()).collect())
    }

    /// 行を追加（列数に合わせて切り詰め・補完）
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), Cell::Empty);
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 列番号を取得（前後の空白は無視）
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// 別名のいずれかに一致する列番号を取得
    pub fn find_column(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|name| self.column_index(name))
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// 列の値を上書き、存在しなければ末尾に追加
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) {
        let idx = match self.column_index(name) {
            Some(idx) => idx,
            None => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.push(Cell::Empty);
                }
                self.headers.len() - 1
            }
        };

        let mut values = values.into_iter();
        for row in &mut self.rows {
            row.resize(self.headers.len(), Cell::Empty);
            row[idx] = values.next().unwrap_or_default();
        }
    }
}

/// 抽出語の大文字小文字ポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    /// 小文字に統一（集計向け）
    #[default]
    Lower,
    /// 元の表記を保持
    Preserve,
}

impl std::str::FromStr for CasePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lower" | "lowercase" => Ok(CasePolicy::Lower),
            "preserve" | "original" => Ok(CasePolicy::Preserve),
            _ => Err(format!("Unknown case policy: {}. Use lower or preserve", s)),
        }
    }
}

impl std::fmt::Display for CasePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CasePolicy::Lower => write!(f, "lower"),
            CasePolicy::Preserve => write!(f, "preserve"),
        }
    }
}

/// 頻度表の1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: usize,
}

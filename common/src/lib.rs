//! First Word Common Library
//!
//! 説明文の先頭語抽出・属性照合・頻度集計のコア（I/Oなし）

pub mod types;
pub mod error;
pub mod stopwords;
pub mod ignore;
pub mod extract;
pub mod matcher;
pub mod frequency;
pub mod category;
pub mod template;
pub mod export;

pub use types::{columns, CasePolicy, Cell, FrequencyEntry, Table};
pub use error::{Error, Result};
pub use stopwords::{StopwordSet, DEFAULT_STOPWORDS};
pub use ignore::IgnorePhrases;
pub use extract::{extract_first_word, FirstWordExtractor, DEFAULT_MAX_PASSES};
pub use matcher::{find_matches, Attribute, AttributeConfig, Variation};
pub use frequency::{count_frequencies, total_count};
pub use category::CategoryMap;

//! 説明文解析
//!
//! ## 処理フロー
//! 1. 説明文列の確認（なければエラーで中断）
//! 2. 各行の先頭語・カテゴリ・属性を算出
//! 3. 先頭語の頻度表とカテゴリ分布を集計

use crate::error::{AnalyzerError, Result};
use crate::session::Session;
use first_word_common::{
    columns, count_frequencies, find_matches, Cell, FrequencyEntry, Table,
};
use indicatif::{ProgressBar, ProgressStyle};

/// 1行分の解析結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzedRow {
    pub first_word: Option<String>,
    pub category: Option<String>,
    /// 属性名の順序（AnalysisReport::attribute_names）に対応
    pub attributes: Vec<Option<String>>,
}

/// 解析結果全体
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// 元の表
    pub source: Table,
    pub rows: Vec<AnalyzedRow>,
    pub attribute_names: Vec<String>,
    pub has_categories: bool,
    /// 先頭語の頻度（カテゴリは has_categories の時のみ）
    pub word_frequencies: Vec<(FrequencyEntry, Option<String>)>,
    pub category_frequencies: Option<Vec<FrequencyEntry>>,
}

impl AnalysisReport {
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// 先頭語が得られなかった行数
    pub fn rows_without_word(&self) -> usize {
        self.rows.iter().filter(|r| r.first_word.is_none()).count()
    }

    /// 元データ + 派生列（Primeira Palavra, Categoria, 属性列）
    pub fn full_table(&self) -> Table {
        let mut table = self.source.clone();

        table.set_column(
            columns::FIRST_WORD,
            self.rows.iter().map(|r| Cell::from_option(r.first_word.as_deref())).collect(),
        );

        if self.has_categories {
            table.set_column(
                columns::CATEGORY,
                self.rows.iter().map(|r| Cell::from_option(r.category.as_deref())).collect(),
            );
        }

        for (idx, name) in self.attribute_names.iter().enumerate() {
            table.set_column(
                name,
                self.rows
                    .iter()
                    .map(|r| Cell::from_option(r.attributes.get(idx).and_then(|v| v.as_deref())))
                    .collect(),
            );
        }

        table
    }

    /// 先頭語の頻度表
    pub fn frequency_table(&self) -> Table {
        let mut headers = vec![columns::FIRST_WORD, columns::FREQUENCY];
        if self.has_categories {
            headers.push(columns::CATEGORY);
        }

        let mut table = Table::with_headers(&headers);
        for (entry, category) in &self.word_frequencies {
            let mut row = vec![Cell::from(entry.value.as_str()), Cell::from(entry.count)];
            if self.has_categories {
                row.push(Cell::from_option(category.as_deref()));
            }
            table.push_row(row);
        }
        table
    }

    /// カテゴリ分布表
    pub fn category_table(&self) -> Option<Table> {
        let frequencies = self.category_frequencies.as_ref()?;
        let mut table = Table::with_headers(&[columns::CATEGORY, columns::FREQUENCY]);
        for entry in frequencies {
            table.push_row(vec![Cell::from(entry.value.as_str()), Cell::from(entry.count)]);
        }
        Some(table)
    }
}

/// 表を解析する
pub fn analyze(table: &Table, session: &Session) -> Result<AnalysisReport> {
    analyze_with_progress(table, session, &ProgressBar::hidden())
}

/// 進捗バー付きで表を解析する
pub fn analyze_with_progress(
    table: &Table,
    session: &Session,
    progress: &ProgressBar,
) -> Result<AnalysisReport> {
    let description_col = table
        .column_index(&session.description_column)
        .ok_or_else(|| AnalyzerError::MissingColumn(session.description_column.clone()))?;

    let ignore_phrases = session.effective_ignore_phrases();
    let extractor = session.extractor(&ignore_phrases);
    let attribute_names: Vec<String> = session
        .attributes
        .as_ref()
        .map(|a| a.names().into_iter().map(String::from).collect())
        .unwrap_or_default();

    tracing::debug!(
        rows = table.len(),
        ignore_phrases = ignore_phrases.len(),
        stopwords = session.stopwords.len(),
        attributes = attribute_names.len(),
        "analysis started"
    );

    progress.set_length(table.len() as u64);
    let mut rows = Vec::with_capacity(table.len());

    for row in 0..table.len() {
        let description = table.cell(row, description_col).as_text();
        let first_word = extractor.extract(description);

        let category = session.categories.as_ref().and_then(|categories| {
            categories.lookup(first_word.as_deref()).map(String::from)
        });

        let attributes = match &session.attributes {
            Some(config) => {
                let mut matches = find_matches(description, config);
                attribute_names.iter().map(|name| matches.remove(name)).collect()
            }
            None => Vec::new(),
        };

        rows.push(AnalyzedRow { first_word, category, attributes });
        progress.inc(1);
    }
    progress.finish_and_clear();

    let has_categories = session.categories.is_some();

    let word_frequencies = count_frequencies(rows.iter().map(|r| r.first_word.as_deref()))
        .into_iter()
        .map(|entry| {
            let category = session
                .categories
                .as_ref()
                .and_then(|c| c.lookup(Some(entry.value.as_str())).map(String::from));
            (entry, category)
        })
        .collect();

    let category_frequencies = has_categories
        .then(|| count_frequencies(rows.iter().map(|r| r.category.as_deref())));

    Ok(AnalysisReport {
        source: table.clone(),
        rows,
        attribute_names,
        has_categories,
        word_frequencies,
        category_frequencies,
    })
}

/// 端末用の進捗バー
pub fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} [{bar:30}] {pos}/{len}") {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_message("Processando descrições");
    bar
}

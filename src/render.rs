//! 端末表示
//!
//! 頻度表とカテゴリ分布をテキストの棒グラフで表示する

use crate::analysis::AnalysisReport;
use first_word_common::{total_count, FrequencyEntry};

/// 棒グラフの最大幅
const BAR_WIDTH: usize = 30;

/// 棒の長さ（最大件数に対する比率）
pub fn bar_length(count: usize, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let len = (count * BAR_WIDTH + max / 2) / max;
    len.max(usize::from(count > 0))
}

/// 頻度表を整形（上位 top 件）
pub fn format_frequencies(entries: &[FrequencyEntry], top: usize) -> Vec<String> {
    let shown = &entries[..entries.len().min(top)];
    let label_width = shown.iter().map(|e| e.value.chars().count()).max().unwrap_or(0);
    let max = shown.first().map(|e| e.count).unwrap_or(0);

    shown
        .iter()
        .map(|e| {
            let pad = label_width - e.value.chars().count();
            format!(
                "  {}{}  {:>5}  {}",
                e.value,
                " ".repeat(pad),
                e.count,
                "█".repeat(bar_length(e.count, max))
            )
        })
        .collect()
}

/// 先頭語表の見出し（異なり語数・延べ件数）
pub fn words_heading(entries: &[FrequencyEntry]) -> String {
    format!(
        "📈 Primeiras palavras ({} distintas, {} ocorrências):",
        entries.len(),
        total_count(entries)
    )
}

/// 解析結果の概要を表示
pub fn print_summary(report: &AnalysisReport, top: usize) {
    println!(
        "✔ {} registros processados ({} sem palavra válida)",
        report.total_rows(),
        report.rows_without_word()
    );

    let words: Vec<FrequencyEntry> = report.word_frequencies.iter().map(|(e, _)| e.clone()).collect();
    if words.is_empty() {
        println!("⚠ Nenhuma palavra válida encontrada no início das descrições");
        return;
    }

    println!("\n{}", words_heading(&words));
    for line in format_frequencies(&words, top) {
        println!("{}", line);
    }
    if words.len() > top {
        println!("  ... (+{} palavras)", words.len() - top);
    }

    if let Some(categories) = &report.category_frequencies {
        println!("\n📊 Distribuição por categoria:");
        for line in format_frequencies(categories, top) {
            println!("{}", line);
        }
    }

    if !report.attribute_names.is_empty() {
        println!("\n🔎 Atributos reconhecidos:");
        for (idx, name) in report.attribute_names.iter().enumerate() {
            let matched = report
                .rows
                .iter()
                .filter(|r| r.attributes.get(idx).is_some_and(|v| v.is_some()))
                .count();
            println!("  {}: {} registros", name, matched);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(value: &str, count: usize) -> FrequencyEntry {
        FrequencyEntry { value: value.to_string(), count }
    }

    #[test]
    fn test_bar_length() {
        assert_eq!(bar_length(10, 10), BAR_WIDTH);
        assert_eq!(bar_length(5, 10), BAR_WIDTH / 2);
        assert_eq!(bar_length(1, 1000), 1);
        assert_eq!(bar_length(0, 10), 0);
        assert_eq!(bar_length(0, 0), 0);
    }

    #[test]
    fn test_words_heading_counts() {
        let entries = vec![entry("arroz", 4), entry("pão", 2)];
        assert_eq!(
            words_heading(&entries),
            "📈 Primeiras palavras (2 distintas, 6 ocorrências):"
        );
    }

    #[test]
    fn test_format_frequencies_aligns_and_limits() {
        let entries = vec![entry("arroz", 4), entry("pão", 2), entry("caneta", 1)];
        let lines = format_frequencies(&entries, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  arroz      4  "));
        assert!(lines[1].starts_with("  pão        2  "));
    }
}

mod common;

use common::{lv, scenario_references, FixedSegmenter};
use lexilevel::api::analyze_tokens;
use lexilevel::reference::types::{Category, Lesson, ReferenceKind};
use lexilevel::reference::ReferenceTable;
use lexilevel::segment::{TokenFilter, WhitespaceSegmenter};
use lexilevel::stats::{compute_distribution, compute_summary};
use lexilevel::Analyzer;
use rstest::rstest;
use std::sync::Arc;

const EPS: f64 = 0.01;

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// --- SUMMARY ---

#[rstest]
#[case(&[], 0, 0, 0.0)]
#[case(&["你好"], 1, 1, 0.0)]
#[case(&["你好", "你好", "再见"], 3, 2, 33.33)]
#[case(&["好", "好", "好", "好"], 4, 1, 75.0)]
#[case(&["一", "二", "三", "一", "二"], 5, 3, 40.0)]
fn test_summary_counts(
    #[case] words: &[&str],
    #[case] count: usize,
    #[case] unique: usize,
    #[case] rate: f64,
) {
    let s = compute_summary(&words.concat(), words);
    assert_eq!(s.token_count, count);
    assert_eq!(s.unique_token_count, unique);
    assert!((s.repetition_rate - rate).abs() < EPS, "rate was {}", s.repetition_rate);
}

#[test]
fn test_summary_length_uses_raw_text() {
    // Spaces and punctuation count toward length even when not tokens.
    let s = compute_summary("你好， 再见", &["你好", "再见"]);
    assert_eq!(s.character_length, 6);
    assert_eq!(s.token_count, 2);
}

// --- SCENARIOS ---

#[test]
fn test_scenario_hello_hello_goodbye() {
    let refs = scenario_references();
    let report = analyze_tokens("你好你好再见", tokens(&["你好", "你好", "再见"]), &refs);

    assert_eq!(report.summary.token_count, 3);
    assert_eq!(report.summary.unique_token_count, 2);
    assert!((report.summary.repetition_rate - 33.33).abs() < EPS);

    // HSK: level 1 = 2, unknown = 1, levels 2..7 = 0
    let hsk = &report.hsk;
    assert_eq!(hsk.rows.len(), 8);
    assert_eq!(hsk.count_of(&Category::Known(lv(1))), 2);
    assert!((hsk.row(&Category::Known(lv(1))).unwrap().percentage - 66.67).abs() < EPS);
    assert_eq!(hsk.unknown_count(), 1);
    assert!((hsk.row(&Category::Unknown).unwrap().percentage - 33.33).abs() < EPS);
    for level in 2..=7 {
        assert_eq!(hsk.count_of(&Category::Known(lv(level))), 0);
    }

    // TOCFL: everything unknown
    assert_eq!(report.tocfl.unknown_count(), 3);
    assert!((report.tocfl.row(&Category::Unknown).unwrap().percentage - 100.0).abs() < EPS);

    // IC: lesson 2 = 2, out-of-table word bucketed as unknown
    let ic = &report.ic;
    assert_eq!(ic.count_of(&Category::Known(Lesson::new("2"))), 2);
    assert_eq!(ic.unknown_count(), 1);
    assert_eq!(ic.total(), 3);
}

#[test]
fn test_lookups_are_independent_per_reference() {
    let refs = lexilevel::ReferenceSet::new(
        ReferenceTable::from_entries(ReferenceKind::Hsk, [("经济", lv(4))]),
        ReferenceTable::from_entries(ReferenceKind::Tocfl, [("经济", lv(3))]),
        ReferenceTable::new(ReferenceKind::Ic),
    );
    let report = analyze_tokens("经济", tokens(&["经济"]), &refs);

    assert_eq!(report.hsk.count_of(&Category::Known(lv(4))), 1);
    assert_eq!(report.hsk.unknown_count(), 0);
    assert_eq!(report.tocfl.count_of(&Category::Known(lv(3))), 1);
    assert_eq!(report.tocfl.unknown_count(), 0);
    assert_eq!(report.ic.unknown_count(), 1);
}

#[test]
fn test_empty_text_degrades_to_zero() {
    let refs = scenario_references();
    let analyzer = Analyzer::new(Arc::new(refs), Box::new(WhitespaceSegmenter));
    let report = analyzer.analyze("   \n\t ");

    assert_eq!(report.summary.character_length, 6);
    assert_eq!(report.summary.token_count, 0);
    assert_eq!(report.summary.unique_token_count, 0);
    assert_eq!(report.summary.repetition_rate, 0.0);
    for dist in [&report.hsk, &report.tocfl] {
        assert!(dist.rows.iter().all(|r| r.count == 0 && r.percentage == 0.0));
    }
    assert!(report.ic.rows.iter().all(|r| r.percentage == 0.0));
    assert!(report.ic_chart.is_empty());
}

#[test]
fn test_ic_chart_only_lists_present_lessons() {
    let refs = lexilevel::ReferenceSet::new(
        ReferenceTable::new(ReferenceKind::Hsk),
        ReferenceTable::new(ReferenceKind::Tocfl),
        ReferenceTable::from_entries(
            ReferenceKind::Ic,
            [
                ("你好", Lesson::new("1")),
                ("老师", Lesson::new("2")),
                ("咖啡", Lesson::new("5")),
            ],
        ),
    );
    let report = analyze_tokens("", tokens(&["咖啡", "你好", "咖啡"]), &refs);

    assert_eq!(report.ic.rows.len(), 4); // 1, 2, 5, N/A
    let charted: Vec<String> = report
        .ic_chart
        .iter()
        .map(|r| r.category.to_string())
        .collect();
    assert_eq!(charted, vec!["1", "5"]);
}

#[test]
fn test_segmenter_is_pluggable() {
    let refs = Arc::new(scenario_references());
    let analyzer = Analyzer::new(refs, Box::new(FixedSegmenter::new(&["你好", "再见"])));
    let report = analyzer.analyze("whatever the input is");

    assert_eq!(report.tokens, vec!["你好", "再见"]);
    assert_eq!(report.hsk.count_of(&Category::Known(lv(1))), 1);
}

#[test]
fn test_punctuation_filter_changes_token_count() {
    let refs = Arc::new(scenario_references());
    let segmenter = || Box::new(FixedSegmenter::new(&["你好", "，", "再见", "。"]));

    let keep = Analyzer::new(refs.clone(), segmenter()).analyze("你好，再见。");
    assert_eq!(keep.summary.token_count, 4);
    assert_eq!(keep.hsk.unknown_count(), 3);

    let skip = Analyzer::new(refs, segmenter())
        .with_filter(TokenFilter {
            skip_punctuation: true,
        })
        .analyze("你好，再见。");
    assert_eq!(skip.summary.token_count, 2);
    assert_eq!(skip.summary.character_length, 6);
    assert_eq!(skip.hsk.unknown_count(), 1);
}

#[test]
fn test_distribution_rows_follow_level_order() {
    let table = ReferenceTable::from_entries(ReferenceKind::Hsk, [("难", lv(6)), ("易", lv(1))]);
    let dist = compute_distribution(&["难", "易"], &table, &table.domain());
    let labels: Vec<String> = dist.rows.iter().map(|r| r.category.to_string()).collect();
    assert_eq!(labels, vec!["1", "2", "3", "4", "5", "6", "7", "N/A"]);
}

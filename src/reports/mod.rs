use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lexilevel::reference::ReferenceTable;
use lexilevel::stats::{DistributionRow, LevelDistribution, SummaryStats};
use lexilevel::AnalysisReport;
use std::fmt::Display;
use std::hash::Hash;

const BAR_WIDTH: usize = 40;

pub fn print_analysis(report: &AnalysisReport, show_tokens: bool) {
    if show_tokens {
        print_tokens(&report.tokens);
    }
    print_summary(&report.summary);

    print_distribution(&report.hsk);
    print_bar_chart(&report.hsk, &report.hsk.rows.iter().collect::<Vec<_>>());

    print_distribution(&report.tocfl);
    print_bar_chart(&report.tocfl, &report.tocfl.rows.iter().collect::<Vec<_>>());

    print_distribution(&report.ic);
    print_bar_chart(&report.ic, &report.ic_chart.iter().collect::<Vec<_>>());
}

pub fn print_tokens(tokens: &[String]) {
    println!("\nSegmentation:");
    println!("{}", tokens.join(" / "));
}

pub fn print_summary(s: &SummaryStats) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Text General Statistics").add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Length of the text"),
        Cell::new(format!("{} characters", s.character_length)),
    ]);
    table.add_row(vec![
        Cell::new("Words used in the text"),
        Cell::new(format!("{} words", s.token_count)),
    ]);
    table.add_row(vec![
        Cell::new("Unique words used in the text"),
        Cell::new(format!("{} words", s.unique_token_count)),
    ]);
    table.add_row(vec![
        Cell::new("Word repetition rate"),
        Cell::new(format!("{:.2}%", s.repetition_rate)).fg(Color::Cyan),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}

pub fn print_distribution<K: Display>(dist: &LevelDistribution<K>) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new(dist.kind.axis_label()).add_attribute(Attribute::Bold),
        Cell::new("count"),
        Cell::new("percentage"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in &dist.rows {
        let label = Cell::new(row.category.to_string());
        let label = if row.category.is_known() {
            label
        } else {
            label.fg(Color::Yellow)
        };
        table.add_row(vec![
            label,
            Cell::new(row.count),
            Cell::new(format!("{:.2}", row.percentage)),
        ]);
    }

    println!("\n{}", dist.kind.title());
    println!("{}", table);
}

pub fn print_bar_chart<K: Display>(dist: &LevelDistribution<K>, rows: &[&DistributionRow<K>]) {
    println!("\n{} Visualization", dist.kind);
    if rows.is_empty() {
        println!("(no words to chart)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new(dist.kind.axis_label()).add_attribute(Attribute::Bold),
        Cell::new("Percentage of words"),
        Cell::new("%"),
    ]);

    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for row in rows {
        table.add_row(vec![
            Cell::new(row.category.to_string()),
            Cell::new(render_bar(row.percentage, BAR_WIDTH)).fg(Color::Green),
            Cell::new(format!("{:.1}", row.percentage)),
        ]);
    }
    println!("{}", table);
}

pub fn print_reference_inventory<K>(reference: &ReferenceTable<K>)
where
    K: Display + Clone + Eq + Hash,
{
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new(reference.kind().axis_label()).add_attribute(Attribute::Bold),
        Cell::new("words"),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (value, count) in reference.value_counts() {
        table.add_row(vec![Cell::new(value), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(reference.len()).add_attribute(Attribute::Bold),
    ]);

    println!("\n{} ({} duplicates skipped)", reference.kind(), reference.duplicates());
    println!("{}", table);
}

/// Horizontal bar scaled so 100% fills `width` cells.
pub fn render_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}

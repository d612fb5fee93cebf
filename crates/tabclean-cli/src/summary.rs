use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabclean_vocab::Vocabulary;

use crate::types::{CleanResult, VocabularySource};

pub fn print_preview(preview: &tabclean_model::Table) {
    if preview.width() == 0 {
        return;
    }
    println!("Preview (first {} rows):", preview.height());
    println!("{}", render_preview(preview));
}

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    if let VocabularySource::File(path) = &result.vocabulary {
        println!("Vocabulary: {}", path.display());
    }
    println!("{}", render_summary(result));
}

pub fn print_vocabulary(vocabulary: &Vocabulary, source: &VocabularySource) {
    match source {
        VocabularySource::BuiltIn => println!("Vocabulary: built-in"),
        VocabularySource::File(path) => println!("Vocabulary: {}", path.display()),
    }
    println!("{}", render_vocabulary(vocabulary));
}

/// Renders loaded rows with their column kinds in the header.
pub fn render_preview(preview: &tabclean_model::Table) -> Table {
    let mut table = Table::new();
    table.set_header(
        preview
            .columns()
            .iter()
            .map(|column| header_cell(&format!("{} ({})", column.name, column.kind)))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in preview.rows() {
        table.add_row(
            row.cells
                .iter()
                .map(|cell| {
                    if cell.is_null() {
                        dim_cell("-")
                    } else {
                        Cell::new(cell.to_string())
                    }
                })
                .collect::<Vec<_>>(),
        );
    }
    table
}

pub fn render_summary(result: &CleanResult) -> Table {
    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Rows Before"),
        Cell::new(report.original_rows()),
    ]);
    table.add_row(vec![
        Cell::new("Rows After"),
        Cell::new(report.cleaned_rows()),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate Rows Removed"),
        count_cell(report.duplicates_removed()),
    ]);
    table.add_row(vec![
        Cell::new("Normalized Entities"),
        count_cell(report.normalized_entities()),
    ]);
    table.add_row(vec![
        Cell::new("Initial Size"),
        Cell::new(format_kilobytes(result.input_bytes)),
    ]);
    table.add_row(vec![
        Cell::new("Final Size"),
        match result.output_bytes {
            Some(bytes) => Cell::new(format_kilobytes(bytes)),
            None => dim_cell("-"),
        },
    ]);
    table.add_row(vec![
        Cell::new("Size Reduction")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        match result.size_reduction_percent() {
            Some(percent) => Cell::new(format!("{percent:.2}%")).add_attribute(Attribute::Bold),
            None => dim_cell("-"),
        },
    ]);
    table
}

/// Renders one row per canonical name with its aliases.
pub fn render_vocabulary(vocabulary: &Vocabulary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Canonical"), header_cell("Aliases")]);
    apply_table_style(&mut table);
    for term in vocabulary.terms() {
        table.add_row(vec![
            Cell::new(&term.canonical)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(term.aliases.join(", ")),
        ]);
    }
    if vocabulary.is_empty() {
        table.add_row(vec![dim_cell("(empty)"), dim_cell("-")]);
    }
    table
}

pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

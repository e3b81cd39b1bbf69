use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use custcheck_cli::pipeline::{BatchConfig, BatchSummary, FileSummary, format_elapsed};

pub fn print_summary(config: &BatchConfig, summary: &BatchSummary) {
    println!("Input: {}", config.input_dir.display());
    println!("Output: {}", config.output_file.display());
    println!("Log: {}", config.log_file.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Date"),
        header_cell("Valid"),
        header_cell("Skipped"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for file in &summary.files {
        table.add_row(vec![
            file_cell(file),
            Cell::new(file.date.to_string()),
            count_cell(file.valid_rows, Color::Green),
            count_cell(file.skipped_rows, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format_elapsed(summary.elapsed)).fg(Color::Cyan),
        Cell::new(summary.valid_rows).add_attribute(Attribute::Bold),
        Cell::new(summary.skipped_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if summary.failed_files > 0 {
        eprintln!("Unreadable files: {}", summary.failed_files);
        for file in summary.files.iter().filter(|f| f.error.is_some()) {
            if let Some(error) = &file.error {
                eprintln!("- {error}");
            }
        }
    }
}

fn file_cell(file: &FileSummary) -> Cell {
    let name = file.path.display().to_string();
    if file.error.is_some() {
        Cell::new(name).fg(Color::Red)
    } else {
        Cell::new(name)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

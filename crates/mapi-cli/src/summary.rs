use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mapi_core::{UnresolvedReason, UnresolvedTag};
use mapi_model::CanonicalName;

use crate::types::{CheckResult, ConvertResult, FetchResult, NormalizedName};

pub fn print_normalized(rows: &[NormalizedName]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Raw name"),
        header_cell("Convention"),
        header_cell("Canonical name"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        let name = match &row.name {
            Some(name) => Cell::new(name).fg(Color::Green),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(&row.raw), dim_cell(row.kind), name]);
    }
    println!("{table}");
}

pub fn print_fetch(result: &FetchResult) {
    println!("Cache: {}", result.cache_dir.display());
    for name in &result.fetched {
        println!("  {name}: present");
    }
}

/// Goes to stderr: stdout may be carrying the table itself.
pub fn print_convert(result: &ConvertResult) {
    match &result.output {
        Some(path) => eprintln!("Output: {}", path.display()),
        None => eprintln!("Output: stdout"),
    }
    eprintln!(
        "Sources: {}  Tags: {}  Unresolved: {}",
        result.source_count,
        result.tag_count,
        result.unresolved.len()
    );
    if let Some(table) = unresolved_table(&result.unresolved) {
        eprintln!("{table}");
    }
}

pub fn print_check(result: &CheckResult) {
    println!("Table: {}", result.table.display());
    println!(
        "Tags: {}  Unresolved: {}",
        result.tag_count,
        result.unresolved.len()
    );
    if let Some(table) = unresolved_table(&result.unresolved) {
        println!("{table}");
    }
    if !result.stale.is_empty() {
        eprintln!("Recorded ids no longer derivable from their spellings:");
        for tag in &result.stale {
            eprintln!("- {tag}");
        }
    }
}

fn unresolved_table(unresolved: &[UnresolvedTag]) -> Option<Table> {
    if unresolved.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tag"),
        header_cell("Reason"),
        header_cell("Spellings"),
        header_cell("Candidates"),
        header_cell("Disjunctive id"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for tag in unresolved {
        let candidates = if tag.candidates.is_empty() {
            dim_cell("none")
        } else {
            Cell::new(
                tag.candidates
                    .iter()
                    .map(CanonicalName::as_str)
                    .collect::<Vec<_>>()
                    .join("\n"),
            )
            .fg(Color::Yellow)
        };
        let reason = tag.reason();
        let reason = match reason {
            UnresolvedReason::Conflict => Cell::new(reason.as_str()).fg(Color::Yellow),
            UnresolvedReason::NoCandidates => Cell::new(reason.as_str()).fg(Color::Red),
            UnresolvedReason::SingleCandidate => dim_cell(reason.as_str()),
        };
        let disjunctive = match tag.disjunctive_id() {
            Some(id) => Cell::new(id),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(tag.tag).add_attribute(Attribute::Bold),
            reason,
            Cell::new(tag.orig_ids.join("\n")),
            candidates,
            disjunctive,
        ]);
    }
    Some(table)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

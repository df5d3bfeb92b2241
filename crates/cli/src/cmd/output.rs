//! Shared output formatting for heading queries.

use mdsection_core::markdown::HeadingInfo;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

/// Heading row for table and JSON output. Lines are 1-based.
#[derive(Debug, Serialize, Tabled)]
pub struct HeadingOutput {
    #[tabled(rename = "Line")]
    pub line: usize,
    #[tabled(rename = "Level")]
    pub level: usize,
    #[tabled(rename = "Title")]
    pub title: String,
}

impl From<&HeadingInfo> for HeadingOutput {
    fn from(h: &HeadingInfo) -> Self {
        Self { line: h.line + 1, level: h.level, title: h.title.clone() }
    }
}

/// Print headings as a table.
pub fn print_headings_table(headings: &[HeadingInfo]) {
    if headings.is_empty() {
        println!("(no headings found)");
        return;
    }

    let rows: Vec<HeadingOutput> = headings.iter().map(HeadingOutput::from).collect();
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!("-- {} headings --", headings.len());
}

/// Print headings as JSON.
pub fn print_headings_json(headings: &[HeadingInfo]) {
    let output: Vec<HeadingOutput> = headings.iter().map(HeadingOutput::from).collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

/// Print heading titles only, indented by level (quiet mode).
pub fn print_headings_quiet(headings: &[HeadingInfo]) {
    for h in headings {
        println!("{}{}", "  ".repeat(h.level.saturating_sub(1)), h.title);
    }
}

/// Print available headings as a hint after a failed lookup.
pub fn print_available_headings(headings: &[HeadingInfo]) {
    if headings.is_empty() {
        eprintln!("(document has no headings)");
        return;
    }
    eprintln!("Available sections:");
    for h in headings {
        eprintln!("  - {} (level {})", h.title, h.level);
    }
}

use mdsection_core::markdown::SectionEditor;

use super::output::{print_headings_json, print_headings_quiet, print_headings_table};
use crate::{HeadingsArgs, OutputFormat};

pub fn run(args: &HeadingsArgs) {
    let input = super::read_document("headings", &args.file);
    let headings = SectionEditor::new().find_headings(&input);

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_headings_table(&headings),
        OutputFormat::Json => print_headings_json(&headings),
        OutputFormat::Quiet => print_headings_quiet(&headings),
    }
}

fn resolve_format(output: OutputFormat, json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        output
    }
}

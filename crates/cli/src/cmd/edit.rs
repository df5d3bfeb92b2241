//! Mutating commands: replace, add and upsert.

use std::fs;
use std::io;
use std::path::Path;

use mdsection_core::config::types::ResolvedConfig;
use mdsection_core::markdown::{EditOptions, SectionEditor};

use super::fail;
use super::output::print_available_headings;
use crate::{AddArgs, ContentArgs, PlacementArgs, ReplaceArgs, UpsertArgs, WriteArgs};

pub fn replace(cfg: &ResolvedConfig, args: &ReplaceArgs) {
    let input = super::read_document("replace", &args.file);
    let content = read_content("replace", &args.content);
    let editor = build_editor(cfg, &args.write);

    let result =
        editor.replace_section_content(&input, &args.section, &content, args.replace_heading);
    if !result.changed {
        eprintln!("FAIL mdsection replace");
        eprintln!("Section not found: '{}'", args.section);
        print_available_headings(&editor.find_headings(&input));
        crate::logging::shutdown();
        std::process::exit(1);
    }

    let Some(written) = finish("replace", &args.file, &input, &result.content, &args.write)
    else {
        return;
    };
    println!("section: {}", args.section.trim());
    println!("written: {written}");
}

pub fn add(cfg: &ResolvedConfig, args: &AddArgs) {
    let input = super::read_document("add", &args.file);
    let content = read_content("add", &args.content);
    let editor = build_editor(cfg, &args.write);

    let result = editor
        .add_section(
            &input,
            &content,
            args.placement.after.as_deref(),
            args.placement.at_beginning,
        )
        .unwrap_or_else(|e| fail("add", e));

    let Some(written) = finish("add", &args.file, &input, &result.content, &args.write) else {
        return;
    };
    println!("placement: {}", describe(&args.placement));
    println!("written: {written}");
}

pub fn upsert(cfg: &ResolvedConfig, args: &UpsertArgs) {
    let input = super::read_document("upsert", &args.file);
    let content = read_content("upsert", &args.content);
    let editor = build_editor(cfg, &args.write);

    let result = editor
        .upsert_section(
            &input,
            &args.section,
            &content,
            args.replace_heading,
            args.placement.after.as_deref(),
            args.placement.at_beginning,
        )
        .unwrap_or_else(|e| fail("upsert", e));

    let Some(written) = finish("upsert", &args.file, &input, &result.content, &args.write)
    else {
        return;
    };
    println!("section: {}", args.section.trim());
    println!("action:  {}", result.action.as_str());
    println!("written: {written}");
}

fn build_editor(cfg: &ResolvedConfig, write: &WriteArgs) -> SectionEditor {
    let mut options: EditOptions = cfg.editor.edit_options();
    if write.keep_trailing_whitespace {
        options.strip_trailing_whitespace = false;
    }
    SectionEditor::with_options(options)
}

fn describe(placement: &PlacementArgs) -> String {
    match (placement.after.as_deref(), placement.at_beginning) {
        (Some(heading), _) => format!("after '{heading}'"),
        (None, true) => "beginning".to_string(),
        (None, false) => "end".to_string(),
    }
}

fn read_content(command: &str, args: &ContentArgs) -> String {
    if let Some(ref text) = args.content {
        return text.clone();
    }
    let Some(ref path) = args.content_file else {
        fail(command, "no content given");
    };
    let read = if path.as_os_str() == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    };
    read.unwrap_or_else(|e| fail(command, format!("Failed to read content {}: {e}", path.display())))
}

/// Print or write the new document. Returns the "written" status line, or
/// `None` for a dry run, where stdout carries only the document.
fn finish(
    command: &str,
    path: &Path,
    original: &str,
    updated: &str,
    write: &WriteArgs,
) -> Option<&'static str> {
    if write.dry_run {
        print!("{updated}");
        return None;
    }

    let written = if updated == original {
        tracing::debug!(path = %path.display(), "document unchanged, not writing");
        "no (unchanged)"
    } else {
        if let Err(e) = fs::write(path, updated) {
            fail(command, format!("Failed to write to {}: {e}", path.display()));
        }
        "yes"
    };

    println!("OK   mdsection {command}");
    println!("file:    {}", path.display());
    Some(written)
}

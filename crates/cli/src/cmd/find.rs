use mdsection_core::markdown::SectionEditor;
use mdsection_core::markdown::lines::split_lines;
use mdsection_core::markdown::section::subsection_titles;

use super::output::print_available_headings;
use crate::FindArgs;

pub fn run(args: &FindArgs) {
    let input = super::read_document("find", &args.file);
    let editor = SectionEditor::new();

    let Some(range) = editor.find_section(&input, &args.section, args.level) else {
        eprintln!("FAIL mdsection find");
        eprintln!("Section not found: '{}'", args.section);
        print_available_headings(&editor.find_headings(&input));
        crate::logging::shutdown();
        std::process::exit(1);
    };

    let lines = split_lines(&input);

    println!("OK   mdsection find");
    println!("file:    {}", args.file.display());
    println!("section: {}", args.section.trim());
    // 1-based, inclusive
    println!("start:   {}", range.start + 1);
    println!("end:     {}", range.end);
    let nested = subsection_titles(&lines, range);
    if !nested.is_empty() {
        println!("nested:  {}", nested.join(", "));
    }
}

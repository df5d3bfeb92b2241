use insta::assert_snapshot;
use mdsection_core::markdown::{SectionEditor, UpsertAction};

const HOW_TO_CONTRIBUTE: &str = "## How to Contribute

Take a look at the [Help Wanted](https://github.com/vipm-io/OpenG-Array-Library/issues) issues list.

";

#[test]
fn golden_readme_replace_how_to_contribute() {
    let input = include_str!("fixtures/readme_project.md");

    let result = SectionEditor::new()
        .upsert_section(input, "How to Contribute", HOW_TO_CONTRIBUTE, true, None, false)
        .unwrap();

    assert_eq!(result.action, UpsertAction::Replaced);
    assert_snapshot!("readme_replace_how_to_contribute", result.content);
}

#[test]
fn golden_readme_append_license() {
    let input = include_str!("fixtures/readme_project.md");

    let result = SectionEditor::new()
        .upsert_section(input, "License", "\n## License\n\nBSD-3-Clause\n", false, None, false)
        .unwrap();

    assert_eq!(result.action, UpsertAction::Inserted);
    assert_snapshot!("readme_append_license", result.content);
}

#[test]
fn golden_output_is_stable_on_second_pass() {
    let input = include_str!("fixtures/readme_project.md");
    let editor = SectionEditor::new();

    let once = editor
        .upsert_section(input, "How to Contribute", HOW_TO_CONTRIBUTE, true, None, false)
        .unwrap();
    let twice = editor
        .upsert_section(&once.content, "How to Contribute", HOW_TO_CONTRIBUTE, true, None, false)
        .unwrap();

    assert_eq!(once.content, twice.content);
}

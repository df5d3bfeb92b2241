//! Conversion between a document string and its lines.

use super::types::EditOptions;

/// Split a document into lines, dropping `\n` or `\r\n` terminators
pub fn split_lines(document: &str) -> Vec<&str> {
    document.lines().collect()
}

/// Join lines back into a document, terminating every line with `\n`.
///
/// With `strip_trailing_whitespace` set, each line is right-trimmed on the way out.
pub fn join_lines<S: AsRef<str>>(lines: &[S], options: EditOptions) -> String {
    let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for line in lines {
        let line = line.as_ref();
        if options.strip_trailing_whitespace {
            out.push_str(line.trim_end());
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

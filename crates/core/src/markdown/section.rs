//! Section editor: section boundaries and the replace/add/upsert mutations.
//!
//! All operations take the document by reference and return a new string.

use tracing::{debug, info};

use super::heading::{find_heading, heading_level, heading_title};
use super::lines::{join_lines, split_lines};
use super::types::{
    EditOptions, EditResult, Placement, SectionRange, UpsertAction, UpsertResult,
};

/// Locate the section whose heading matches `title` (and `level`, if given),
/// searching from line `start`.
pub fn find_section<S: AsRef<str>>(
    lines: &[S],
    title: &str,
    level: Option<usize>,
    start: usize,
) -> Option<SectionRange> {
    let Some(heading) = find_heading(lines, title, level, start) else {
        debug!(title, "section heading not found");
        return None;
    };
    let anchor_level = heading_level(lines[heading].as_ref()).ok()?;
    let end = section_end(lines, heading, anchor_level);
    debug!(title, start = heading, end, "found section");
    Some(SectionRange::new(heading, end))
}

/// First line after `heading` that is a heading of level `<= level`, or the
/// number of lines.
fn section_end<S: AsRef<str>>(lines: &[S], heading: usize, level: usize) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(heading + 1)
        .find(|(_, line)| heading_level(line.as_ref()).is_ok_and(|l| l <= level))
        .map_or(lines.len(), |(i, _)| i)
}

/// Replace the body of the section titled `title`.
///
/// With `replace_heading` the heading line is replaced too. If the section
/// does not exist the document is returned untouched with `changed == false`.
pub fn replace_section_content(
    document: &str,
    title: &str,
    new_content: &str,
    replace_heading: bool,
    options: EditOptions,
) -> EditResult {
    let lines = split_lines(document);
    let Some(range) = find_section(&lines, title, None, 0) else {
        return EditResult { content: document.to_string(), changed: false };
    };

    let keep_until = if replace_heading { range.start } else { range.start + 1 };
    let mut edited = Vec::with_capacity(lines.len());
    edited.extend_from_slice(&lines[..keep_until]);
    edited.extend(split_lines(new_content));
    edited.extend_from_slice(&lines[range.end..]);

    EditResult { content: join_lines(&edited, options), changed: true }
}

/// Insert `new_content` into the document at `placement`.
///
/// `Placement::Beginning` prepends `new_content` verbatim to the serialized
/// document. `Placement::AfterHeading` falls back to the end of the document
/// when the heading is missing. Always reports `changed == true`.
pub fn add_section(
    document: &str,
    new_content: &str,
    placement: &Placement,
    options: EditOptions,
) -> EditResult {
    let lines = split_lines(document);
    let at = match placement {
        Placement::Beginning => {
            let rest = join_lines(&lines, options);
            return EditResult { content: format!("{new_content}{rest}"), changed: true };
        }
        Placement::End => lines.len(),
        Placement::AfterHeading(heading) => match find_heading(&lines, heading, None, 0) {
            Some(i) => i + 1,
            None => {
                debug!(heading = heading.as_str(), "heading not found, appending at end");
                lines.len()
            }
        },
    };

    let mut edited = Vec::with_capacity(lines.len());
    edited.extend_from_slice(&lines[..at]);
    edited.extend(split_lines(new_content));
    edited.extend_from_slice(&lines[at..]);

    EditResult { content: join_lines(&edited, options), changed: true }
}

/// Replace the section titled `title` if present, otherwise add `new_content`
/// at `placement`.
pub fn upsert_section(
    document: &str,
    title: &str,
    new_content: &str,
    replace_heading: bool,
    placement: &Placement,
    options: EditOptions,
) -> UpsertResult {
    let replaced =
        replace_section_content(document, title, new_content, replace_heading, options);
    if replaced.changed {
        info!(title, "replaced section content");
        return UpsertResult { content: replaced.content, action: UpsertAction::Replaced };
    }

    info!(title, ?placement, "section not found, adding new content");
    let added = add_section(document, new_content, placement, options);
    UpsertResult { content: added.content, action: UpsertAction::Inserted }
}

/// Text of the section titled `title`, heading line included
pub fn section_text(
    document: &str,
    title: &str,
    level: Option<usize>,
    options: EditOptions,
) -> Option<String> {
    let lines = split_lines(document);
    let range = find_section(&lines, title, level, 0)?;
    Some(join_lines(&lines[range.start..range.end], options))
}

/// Titles of the headings nested inside a section, in document order.
///
/// Empty when `range` does not fit inside `lines`.
pub fn subsection_titles<S: AsRef<str>>(lines: &[S], range: SectionRange) -> Vec<String> {
    let Some(body) = lines.get(range.body()) else {
        return Vec::new();
    };
    body.iter()
        .filter_map(|line| heading_title(line.as_ref()).ok().map(str::to_string))
        .collect()
}

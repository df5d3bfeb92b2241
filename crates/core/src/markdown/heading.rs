//! Heading locator: recognizes `#` heading lines and finds them by title.
//!
//! A line is a heading when it starts with one or more `#`, followed by at
//! least one whitespace character and a non-empty title. Nothing else about
//! Markdown is interpreted, so a `#` line inside a code fence still counts.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{HeadingInfo, SectionError};

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    // marker run, required whitespace, title starting at the first non-space
    Regex::new(r"^(#+)\s+(\S.*)$").unwrap()
});

/// Split a heading line into its level and trimmed title
fn parse(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING_RE.captures(line)?;
    let marker = caps.get(1)?.as_str();
    let title = caps.get(2)?.as_str().trim();
    Some((marker.len(), title))
}

pub fn is_heading(line: &str) -> bool {
    parse(line).is_some()
}

/// Number of leading `#` markers of a heading line.
///
/// # Errors
/// `MalformedHeading` if `line` is not a heading.
pub fn heading_level(line: &str) -> Result<usize, SectionError> {
    parse(line)
        .map(|(level, _)| level)
        .ok_or_else(|| SectionError::MalformedHeading(line.to_string()))
}

/// Title of a heading line with surrounding whitespace removed.
///
/// # Errors
/// `MalformedHeading` if `line` is not a heading.
pub fn heading_title(line: &str) -> Result<&str, SectionError> {
    parse(line)
        .map(|(_, title)| title)
        .ok_or_else(|| SectionError::MalformedHeading(line.to_string()))
}

/// Index of the first heading at or after `start` whose title equals `title`
/// (both trimmed, case-sensitive) and, when given, whose level equals `level`.
pub fn find_heading<S: AsRef<str>>(
    lines: &[S],
    title: &str,
    level: Option<usize>,
    start: usize,
) -> Option<usize> {
    let wanted = title.trim();
    lines.iter().enumerate().skip(start).find_map(|(i, line)| {
        let (found_level, found_title) = parse(line.as_ref())?;
        let level_ok = level.is_none_or(|l| l == found_level);
        (level_ok && found_title == wanted).then_some(i)
    })
}

/// Every heading in document order
pub fn find_headings<S: AsRef<str>>(lines: &[S]) -> Vec<HeadingInfo> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let (level, title) = parse(line.as_ref())?;
            Some(HeadingInfo { title: title.to_string(), level, line: i })
        })
        .collect()
}

use serde::Serialize;
use thiserror::Error;

/// A heading found in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingInfo {
    /// The heading text, trimmed
    pub title: String,
    /// Number of leading `#` markers
    pub level: usize,
    /// Zero-based line index of the heading
    pub line: usize,
}

/// Half-open line range `[start, end)` occupied by a section.
///
/// `start` is always a heading line. `end` is the next heading of equal or
/// shallower level, or the document length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionRange {
    pub start: usize,
    pub end: usize,
}

impl SectionRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines in the section, heading included
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lines strictly between the heading and the section end
    pub fn body(&self) -> std::ops::Range<usize> {
        (self.start + 1).min(self.end)..self.end
    }

    pub fn contains(&self, line: usize) -> bool {
        (self.start..self.end).contains(&line)
    }
}

/// Where `add_section` puts new content
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Placement {
    /// Append at the end of the document
    #[default]
    End,
    /// Prepend verbatim before all existing content
    Beginning,
    /// Insert right after the first heading with this title, or at the end
    /// of the document if no such heading exists
    AfterHeading(String),
}

impl Placement {
    /// Build a placement from the flag pair used by callers.
    ///
    /// # Errors
    /// `ConflictingPlacement` when both `after_heading` and `at_beginning` are set.
    pub fn from_flags(
        after_heading: Option<&str>,
        at_beginning: bool,
    ) -> Result<Self, SectionError> {
        match (after_heading, at_beginning) {
            (Some(_), true) => Err(SectionError::ConflictingPlacement),
            (Some(heading), false) => Ok(Self::AfterHeading(heading.to_string())),
            (None, true) => Ok(Self::Beginning),
            (None, false) => Ok(Self::End),
        }
    }
}

/// Serialization knobs shared by every mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOptions {
    /// Right-trim every line when the document is joined back together
    pub strip_trailing_whitespace: bool,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self { strip_trailing_whitespace: true }
    }
}

/// Result of a replace or add operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// The new document
    pub content: String,
    /// Whether the operation matched and edited the document
    pub changed: bool,
}

/// Which path an upsert took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertAction {
    /// An existing section was replaced
    Replaced,
    /// The section was absent and new content was added
    Inserted,
}

impl UpsertAction {
    pub fn replaced(self) -> bool {
        matches!(self, Self::Replaced)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Replaced => "replaced",
            Self::Inserted => "inserted",
        }
    }
}

/// Result of an upsert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertResult {
    pub content: String,
    pub action: UpsertAction,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error("not a heading line: {0:?}")]
    MalformedHeading(String),

    #[error("can't place content both after a heading and at the beginning")]
    ConflictingPlacement,
}

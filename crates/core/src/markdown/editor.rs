use crate::markdown::types::*;
use crate::markdown::{heading, lines, section};

/// High-level API for heading-addressed section edits.
///
/// Holds the serialization options so callers configure them once.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionEditor {
    options: EditOptions,
}

impl SectionEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EditOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EditOptions {
        self.options
    }

    /// Find the line range of a section
    ///
    /// # Arguments
    /// * `input` - The source Markdown document
    /// * `title` - Heading title, compared after trimming
    /// * `level` - Required heading level, or `None` for any level
    ///
    /// # Returns
    /// The half-open range from the heading line to the next heading of equal
    /// or shallower level, or `None` if no heading matches
    pub fn find_section(
        &self,
        input: &str,
        title: &str,
        level: Option<usize>,
    ) -> Option<SectionRange> {
        section::find_section(&lines::split_lines(input), title, level, 0)
    }

    /// Replace the content of a section, optionally including its heading
    pub fn replace_section_content(
        &self,
        input: &str,
        title: &str,
        new_content: &str,
        replace_heading: bool,
    ) -> EditResult {
        section::replace_section_content(input, title, new_content, replace_heading, self.options)
    }

    /// Add new content after a heading, at the beginning, or at the end
    ///
    /// # Errors
    /// * `ConflictingPlacement` - both `after_heading` and `at_beginning` were given
    pub fn add_section(
        &self,
        input: &str,
        new_content: &str,
        after_heading: Option<&str>,
        at_beginning: bool,
    ) -> Result<EditResult, SectionError> {
        let placement = Placement::from_flags(after_heading, at_beginning)?;
        Ok(section::add_section(input, new_content, &placement, self.options))
    }

    /// Replace a section if it exists, otherwise add it using the placement hints
    ///
    /// # Errors
    /// * `ConflictingPlacement` - both `after_heading` and `at_beginning` were given
    pub fn upsert_section(
        &self,
        input: &str,
        title: &str,
        new_content: &str,
        replace_heading: bool,
        after_heading: Option<&str>,
        at_beginning: bool,
    ) -> Result<UpsertResult, SectionError> {
        let placement = Placement::from_flags(after_heading, at_beginning)?;
        Ok(section::upsert_section(
            input,
            title,
            new_content,
            replace_heading,
            &placement,
            self.options,
        ))
    }

    /// Find all headings in a document
    pub fn find_headings(&self, input: &str) -> Vec<HeadingInfo> {
        heading::find_headings(&lines::split_lines(input))
    }

    /// Check if a section exists in the document
    pub fn section_exists(&self, input: &str, title: &str, level: Option<usize>) -> bool {
        self.find_section(input, title, level).is_some()
    }

    /// Text of a section, heading included
    pub fn section_text(&self, input: &str, title: &str, level: Option<usize>) -> Option<String> {
        section::section_text(input, title, level, self.options)
    }
}

pub mod editor;
pub mod heading;
pub mod lines;
pub mod section;
pub mod types;

// Re-export primary API
pub use editor::SectionEditor;
pub use types::{
    EditOptions, EditResult, HeadingInfo, Placement, SectionError, SectionRange,
    UpsertAction, UpsertResult,
};

pub mod doctor;
pub mod edit;
pub mod find;
pub mod headings;
pub mod output;

use std::fs;
use std::path::Path;

/// Report a failed command and exit with status 1
pub fn fail(command: &str, message: impl std::fmt::Display) -> ! {
    eprintln!("FAIL mdsection {command}");
    eprintln!("{message}");
    crate::logging::shutdown();
    std::process::exit(1);
}

/// Read a Markdown file, failing the command if it can't be read
pub fn read_document(command: &str, path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        fail(command, format!("Failed to read {}: {e}", path.display()))
    })
}

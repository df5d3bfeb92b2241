#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod config;
pub mod markdown;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

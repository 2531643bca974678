#![forbid(unsafe_code)]

//! Markset localization foundation.
//!
//! Provides the markset grammar that UI elements carry in their marker
//! attribute, and the per-category language tables those marks resolve
//! against. Element handling lives in `markset-web`.

pub mod markset;
pub mod table;

pub use markset::{Category, Markset, MarksetError, build_markset, extract_mark, modify_markset};
pub use table::{CoverageReport, LanguageTable, MissingMark, TableError};

#![forbid(unsafe_code)]

//! Markset element localization.
//!
//! # Role
//! `markset-web` reads the markset an element carries, resolves it against a
//! [`LanguageTable`](markset_i18n::LanguageTable) and applies the strings
//! according to the element's kind:
//!
//! - **Label**: text replaces the rendered content, tip is attached.
//! - **Input**: value is set, tip is attached.
//! - **Select**: tip on the list, text on each option.
//! - **Link**: tip only.
//!
//! Attached tips are handed to a [`TipScheduler`] for presentation.
//!
//! # Hosts
//! Anything implementing [`Element`] can be localized. [`MemoryElement`]
//! covers headless use; on `wasm32` the `wasm` module adapts real DOM nodes
//! and exports `translateDocument` to JavaScript.

pub mod element;
pub mod memory;
pub mod scheduler;
pub mod translator;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use element::{Element, ElementKind};
pub use memory::MemoryElement;
pub use scheduler::{NoopScheduler, ScheduledTip, TipScheduler};
pub use translator::{Translator, TranslatorConfig};

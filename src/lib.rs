// src/lib.rs
// Public library surface for integration tests and the demo binary.

pub mod config;
pub mod feed;
pub mod positivity_bar;
pub mod source_display;
pub mod view;

// ---- Re-exports for stable public API ----
pub use crate::positivity_bar::{display_score, format_score, render, render_with, BarProps, PositivityBar};
pub use crate::source_display::{resolve, SourceDisplayInfo, SourceEntry, SourceTable};
pub use crate::view::ViewNode;

//! Critique - a terminal viewer for structured code reviews
//!
//! This library loads a review document (title, summary, and narrative
//! sections with annotated code excerpts) and presents it as a two-level TUI:
//! an overview of all sections and a scrollable detail view of one section.

pub mod logging;
pub mod review;
pub mod ui;

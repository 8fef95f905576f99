//! # UI Module
//!
//! Terminal user interface for browsing a review.
//!
//! ## Components
//!
//! - [`App`] - the overview/detail state machine
//! - [`overview`] - section list with a bouncing marquee on the selected row
//! - [`detail`] - one section's explanation, code and note, scrollable both ways
//! - [`mod@render`] - paints the active view into a ratatui frame
//! - [`runner`] - event loop tying input, timer ticks and drawing together
//!
//! ## Layout
//!
//! Both views fill the whole terminal and are built from plain lines:
//!
//! ```text
//!  Reviewing <title>                      Reviewing <title> - <section> [2/5]
//! ------------------------------        ------------------------------
//!   summary...                            explanation...
//! ------------------------------           src/lib.rs:10-20
//! > Section one - explanation...        code...
//!   Section two                         ...
//! ------------------------------
//!  j/k select  enter view  esc close     j/k scroll  h/l scroll horiz  esc back  q close
//! ```

pub mod app;
pub mod config;
pub mod detail;
pub mod overview;
pub mod render;
pub mod runner;
pub mod text;
pub mod theme;
pub mod timer;

pub use app::App;
pub use render::render;

use ratatui::text::Line;

/// Plain text of a rendered line, with styling dropped.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

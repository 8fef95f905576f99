//! # Detail View
//!
//! One section's explanation and code excerpts as a scrollable buffer.
//!
//! The buffer is a pure projection of the section at the current width and is
//! rebuilt on every [`DetailView::render`]; only the scroll offsets persist
//! between frames.
//!
//! ```text
//!  Reviewing <title> - <section> [2/5]
//! ----------------------------------------
//!   wrapped explanation ...
//!
//!  src/cache.rs:10-24
//! fn evict(&mut self) {          <- first visible code line, highlighted
//!     ...
//! ----------------------------------------
//!  src/cache.rs:40-42
//!     ...
//!
//! Note: benchmarks pending
//!
//!  j/k scroll  h/l scroll horiz  esc back  q close
//! ```

use crate::review::{Review, Section};
use crate::ui::text::{is_rule, rule, skip_chars, truncate, wrap};
use crate::ui::theme::Styler;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Size;
use ratatui::text::{Line, Span};
use std::sync::Arc;

/// Key legend shown on the last detail line.
pub const DETAIL_LEGEND: &str = " j/k scroll  h/l scroll horiz  esc back  q close";

/// Header line plus separator.
const HEADER_HEIGHT: usize = 2;
/// Key legend.
const FOOTER_HEIGHT: usize = 1;

/// Rows left for the content buffer at a given terminal height.
pub fn available_height(height: u16) -> usize {
    usize::from(height).saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Prose and spacing, drawn as-is (rules are dimmed).
    Text,
    /// File headers and notes.
    Muted,
    /// A raw source line: never wrapped, scrolls horizontally.
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub text: String,
    pub kind: LineKind,
}

impl ContentLine {
    fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    fn blank() -> Self {
        Self::new(String::new(), LineKind::Text)
    }

    pub fn is_code(&self) -> bool {
        self.kind == LineKind::Code
    }
}

/// What the owner should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    None,
    Back,
    Close,
}

pub struct DetailView {
    review: Arc<Review>,
    section_index: usize,
    scroll_offset: usize,
    horizontal_offset: usize,
    content: Vec<ContentLine>,
}

impl DetailView {
    pub fn new(review: Arc<Review>, section_index: usize) -> Self {
        Self {
            review,
            section_index,
            scroll_offset: 0,
            horizontal_offset: 0,
            content: Vec::new(),
        }
    }

    pub fn section_index(&self) -> usize {
        self.section_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn horizontal_offset(&self) -> usize {
        self.horizontal_offset
    }

    /// Content buffer from the most recent render.
    pub fn content_lines(&self) -> &[ContentLine] {
        &self.content
    }

    fn max_scroll(&self, height: u16) -> usize {
        self.content.len().saturating_sub(available_height(height))
    }

    pub fn render(&mut self, size: Size, styles: &dyn Styler) -> Vec<Line<'static>> {
        let width = usize::from(size.width);
        let section = self.review.sections.get(self.section_index);
        let mut lines = Vec::new();

        let header = format!(
            " Reviewing {} - {} [{}/{}] ",
            self.review.title,
            section.map_or("", |s| s.title.as_str()),
            self.section_index + 1,
            self.review.sections.len()
        );
        lines.push(Line::from(
            styles.accent(styles.bold(Span::raw(truncate(&header, width)))),
        ));
        lines.push(Line::from(styles.dim(Span::raw(rule(width)))));

        self.content = section.map_or_else(Vec::new, |s| build_content(s, width));
        // a resize can shrink the buffer under the current offset
        self.scroll_offset = self.scroll_offset.min(self.max_scroll(size.height));

        let end = (self.scroll_offset + available_height(size.height)).min(self.content.len());
        let visible = &self.content[self.scroll_offset..end];
        let cursor = visible.iter().position(ContentLine::is_code);

        for (i, line) in visible.iter().enumerate() {
            let span = match line.kind {
                LineKind::Code => {
                    let text = truncate(skip_chars(&line.text, self.horizontal_offset), width);
                    let span = styles.dim(Span::raw(text));
                    if cursor == Some(i) {
                        styles.highlight(span)
                    } else {
                        span
                    }
                }
                LineKind::Muted => styles.dim(Span::raw(line.text.clone())),
                LineKind::Text if is_rule(&line.text) => styles.dim(Span::raw(line.text.clone())),
                LineKind::Text => Span::raw(line.text.clone()),
            };
            lines.push(Line::from(span));
        }

        let body_end = usize::from(size.height).saturating_sub(FOOTER_HEIGHT);
        while lines.len() < body_end {
            lines.push(Line::default());
        }
        lines.push(Line::from(styles.dim(Span::raw(DETAIL_LEGEND))));

        lines
    }

    /// Apply a key press; `height` is the current terminal height.
    pub fn handle_key(&mut self, key: KeyEvent, height: u16) -> DetailAction {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = (self.scroll_offset + 1).min(self.max_scroll(height));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.horizontal_offset = self.horizontal_offset.saturating_add(1);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.horizontal_offset = self.horizontal_offset.saturating_sub(1);
            }
            KeyCode::Esc => return DetailAction::Back,
            KeyCode::Char('q') => return DetailAction::Close,
            _ => {}
        }
        DetailAction::None
    }
}

/// Lay out a section at `width` columns.
fn build_content(section: &Section, width: usize) -> Vec<ContentLine> {
    let mut content: Vec<ContentLine> = wrap(&section.explanation, width.saturating_sub(2), None)
        .into_iter()
        .map(|line| ContentLine::new(format!("  {line}"), LineKind::Text))
        .collect();
    content.push(ContentLine::blank());

    let block_count = section.code_blocks.len();
    for (i, block) in section.code_blocks.iter().enumerate() {
        content.push(ContentLine::new(
            format!(" {} ", block.location()),
            LineKind::Muted,
        ));
        for code_line in block.code.split('\n') {
            content.push(ContentLine::new(
                code_line.trim_end_matches('\r'),
                LineKind::Code,
            ));
        }
        if i + 1 < block_count {
            content.push(ContentLine::new(rule(width), LineKind::Text));
        } else {
            content.push(ContentLine::blank());
        }
    }

    if let Some(note) = &section.note {
        content.push(ContentLine::new(format!("Note: {note}"), LineKind::Muted));
        content.push(ContentLine::blank());
    }

    content
}

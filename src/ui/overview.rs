//! # Overview View
//!
//! Title, clipped summary and a selectable list of section titles.
//!
//! The selected row shows `"{title} - {explanation}"` and slides back and
//! forth one character per tick so long explanations can be read without
//! opening the section. The tick comes from a [`ScrollTimer`] owned by this
//! view; the navigation controller stops it while a section is open.

use crate::review::Review;
use crate::ui::text::{rule, skip_chars, truncate, wrap, ELLIPSIS};
use crate::ui::theme::Styler;
use crate::ui::timer::{ScrollTimer, DEFAULT_TICK};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};
use std::sync::Arc;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Key legend shown on the last overview line.
pub const OVERVIEW_LEGEND: &str = " j/k select  enter view  esc close";

/// Summary lines shown before clipping.
pub const SUMMARY_MAX_LINES: usize = 6;

/// What the owner should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewAction {
    None,
    Select(usize),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Forward,
    Backward,
}

pub struct OverviewView {
    review: Arc<Review>,
    selected: usize,
    scroll_offset: usize,
    direction: ScrollDirection,
    timer: ScrollTimer,
}

impl OverviewView {
    pub fn new(review: Arc<Review>, initial_selection: usize) -> Self {
        Self::with_tick(review, initial_selection, DEFAULT_TICK)
    }

    /// Like [`OverviewView::new`] with a custom animation period.
    pub fn with_tick(review: Arc<Review>, initial_selection: usize, tick: Duration) -> Self {
        let selected = initial_selection.min(review.sections.len().saturating_sub(1));
        let mut view = Self {
            review,
            selected,
            scroll_offset: 0,
            direction: ScrollDirection::Forward,
            timer: ScrollTimer::new(tick),
        };
        view.restart_timer();
        view
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn is_animating(&self) -> bool {
        self.timer.is_running()
    }

    /// When the animation next wants a tick.
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Stop the marquee animation.
    pub fn clear_timer(&mut self) {
        self.timer.stop();
    }

    /// Rewind the marquee to the start of the selected row and resume ticking.
    pub fn restart_timer(&mut self) {
        self.scroll_offset = 0;
        self.direction = ScrollDirection::Forward;
        self.timer.start(Instant::now());
    }

    /// Advance the marquee if a tick is due. Returns `true` when a redraw is needed.
    pub fn on_tick(&mut self, now: Instant, width: u16) -> bool {
        if !self.timer.fire(now) {
            return false;
        }
        self.advance_scroll(width)
    }

    /// One animation step: move one character and bounce at either end.
    ///
    /// The visible window is the width the selected row is truncated to, so
    /// the far bound is exactly where the tail of the text comes into view.
    pub fn advance_scroll(&mut self, width: u16) -> bool {
        let Some(section) = self.review.sections.get(self.selected) else {
            return false;
        };

        let text_len = section.marquee_text().chars().count();
        let max_offset = text_len.saturating_sub(marquee_width(width));

        if max_offset == 0 {
            let moved = self.scroll_offset != 0;
            self.scroll_offset = 0;
            return moved;
        }

        let next = match self.direction {
            ScrollDirection::Forward => self.scroll_offset + 1,
            ScrollDirection::Backward => self.scroll_offset.saturating_sub(1),
        };

        if next >= max_offset {
            self.scroll_offset = max_offset;
            self.direction = ScrollDirection::Backward;
        } else if next == 0 {
            self.scroll_offset = 0;
            self.direction = ScrollDirection::Forward;
        } else {
            self.scroll_offset = next;
        }
        true
    }

    pub fn render(&self, width: u16, styles: &dyn Styler) -> Vec<Line<'static>> {
        let w = usize::from(width);
        let review = &self.review;
        let mut lines = Vec::new();

        let header = truncate(&format!(" Reviewing {} ", review.title), w);
        lines.push(Line::from(styles.accent(styles.bold(Span::raw(header)))));
        lines.push(Line::from(styles.dim(Span::raw(rule(w)))));

        for line in wrap(&review.summary, w.saturating_sub(2), Some(SUMMARY_MAX_LINES)) {
            lines.push(Line::raw(format!("  {line}")));
        }
        // rough guess at "more summary than fits", not an exact-fit check
        if review.summary.width() > w * SUMMARY_MAX_LINES {
            lines.push(Line::from(styles.dim(Span::raw(format!("  {ELLIPSIS}")))));
        }

        lines.push(Line::from(styles.dim(Span::raw(rule(w)))));

        let row_width = w.saturating_sub(4);
        for (i, section) in review.sections.iter().enumerate() {
            if i == self.selected {
                let text = section.marquee_text();
                let visible = truncate(skip_chars(&text, self.scroll_offset), row_width);
                lines.push(Line::from(vec![
                    styles.accent(Span::raw("> ")),
                    Span::raw(visible),
                ]));
            } else {
                lines.push(Line::raw(format!("  {}", truncate(&section.title, row_width))));
            }
        }

        lines.push(Line::from(styles.dim(Span::raw(rule(w)))));
        lines.push(Line::from(styles.dim(Span::raw(OVERVIEW_LEGEND))));

        lines
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverviewAction {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.review.sections.len() {
                    self.selected += 1;
                    self.restart_timer();
                }
                OverviewAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                    self.restart_timer();
                }
                OverviewAction::None
            }
            KeyCode::Enter => {
                if self.review.sections.is_empty() {
                    return OverviewAction::None;
                }
                self.clear_timer();
                OverviewAction::Select(self.selected)
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.clear_timer();
                OverviewAction::Close
            }
            _ => OverviewAction::None,
        }
    }
}

/// Columns available to the selected row's text.
fn marquee_width(width: u16) -> usize {
    usize::from(width).saturating_sub(4)
}

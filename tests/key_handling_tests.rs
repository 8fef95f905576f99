//! Keyboard event handling tests
//!
//! Tests for the per-view key bindings: selection movement in the overview and
//! vertical/horizontal scrolling in the detail view.

use critique::review::{CodeBlock, Review, Section};
use critique::ui::detail::{DetailAction, DetailView};
use critique::ui::line_text;
use critique::ui::overview::{OverviewAction, OverviewView};
use critique::ui::theme::PlainStyler;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Size;
use std::sync::Arc;

/// Helper to create a key event
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

/// Ten single-line explanation paragraphs and one five-line code block.
fn create_test_review() -> Arc<Review> {
    let explanation = (0..10)
        .map(|i| format!("para {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    Arc::new(Review {
        title: "Keys".to_string(),
        summary: "Key handling".to_string(),
        sections: vec![
            Section {
                title: "Scrolling".to_string(),
                explanation,
                code_blocks: vec![CodeBlock {
                    lang: "rust".to_string(),
                    path: "src/scroll.rs".to_string(),
                    start_line: 1,
                    end_line: 5,
                    code: "line one\nline two\nline three\nline four\nline five".to_string(),
                }],
                note: None,
            },
            Section {
                title: "Second".to_string(),
                explanation: "short".to_string(),
                code_blocks: Vec::new(),
                note: None,
            },
            Section {
                title: "Third".to_string(),
                explanation: "short".to_string(),
                code_blocks: Vec::new(),
                note: None,
            },
        ],
    })
}

#[test]
fn test_overview_vim_and_arrow_keys() {
    let mut view = OverviewView::new(create_test_review(), 0);

    assert_eq!(view.handle_key(key(KeyCode::Char('j'))), OverviewAction::None);
    assert_eq!(view.selected_index(), 1);
    view.handle_key(key(KeyCode::Down));
    assert_eq!(view.selected_index(), 2);
    view.handle_key(key(KeyCode::Char('k')));
    view.handle_key(key(KeyCode::Up));
    view.handle_key(key(KeyCode::Up));
    assert_eq!(view.selected_index(), 0);
}

#[test]
fn test_overview_enter_selects_and_stops_timer() {
    let mut view = OverviewView::new(create_test_review(), 1);
    assert!(view.is_animating());

    assert_eq!(view.handle_key(key(KeyCode::Enter)), OverviewAction::Select(1));
    assert!(!view.is_animating());
}

#[test]
fn test_overview_quit_keys() {
    for code in [KeyCode::Esc, KeyCode::Char('q')] {
        let mut view = OverviewView::new(create_test_review(), 0);
        assert_eq!(view.handle_key(key(code)), OverviewAction::Close);
        assert!(!view.is_animating());
    }
}

#[test]
fn test_overview_unknown_keys_ignored() {
    let mut view = OverviewView::new(create_test_review(), 1);
    for code in [KeyCode::Char('x'), KeyCode::Tab, KeyCode::Left, KeyCode::Char('Q')] {
        assert_eq!(view.handle_key(key(code)), OverviewAction::None);
    }
    assert_eq!(view.selected_index(), 1);
    assert!(view.is_animating());
}

#[test]
fn test_detail_scroll_window() {
    // height 11 leaves 8 content rows; content is 18 lines long
    let size = Size::new(60, 11);
    let mut view = DetailView::new(create_test_review(), 0);

    let lines: Vec<String> = view.render(size, &PlainStyler).iter().map(line_text).collect();
    assert_eq!(view.content_lines().len(), 18);
    assert_eq!(lines[2], "  para 0");
    assert_eq!(lines[9], "  para 7");

    view.handle_key(key(KeyCode::Down), size.height);
    let lines: Vec<String> = view.render(size, &PlainStyler).iter().map(line_text).collect();
    assert_eq!(lines[2], "  para 1");
    assert_eq!(lines[9], "  para 8");
}

#[test]
fn test_detail_scroll_clamps_at_bottom() {
    let size = Size::new(60, 11);
    let mut view = DetailView::new(create_test_review(), 0);
    view.render(size, &PlainStyler);

    for _ in 0..50 {
        view.handle_key(key(KeyCode::Char('j')), size.height);
    }
    assert_eq!(view.scroll_offset(), 10);

    let lines: Vec<String> = view.render(size, &PlainStyler).iter().map(line_text).collect();
    assert_eq!(lines[3], " src/scroll.rs:1-5 ");
    assert_eq!(lines[8], "line five");

    view.handle_key(key(KeyCode::Up), size.height);
    assert_eq!(view.scroll_offset(), 9);
}

#[test]
fn test_detail_horizontal_scroll() {
    let size = Size::new(60, 24);
    let mut view = DetailView::new(create_test_review(), 0);
    view.render(size, &PlainStyler);

    view.handle_key(key(KeyCode::Left), size.height);
    assert_eq!(view.horizontal_offset(), 0);

    for _ in 0..5 {
        view.handle_key(key(KeyCode::Char('l')), size.height);
    }
    view.handle_key(key(KeyCode::Char('h')), size.height);
    assert_eq!(view.horizontal_offset(), 4);

    let lines: Vec<String> = view.render(size, &PlainStyler).iter().map(line_text).collect();
    // code lines shift, prose does not
    assert!(lines.iter().any(|l| l == " one"));
    assert!(lines.iter().any(|l| l == "  para 0"));

    // past the end of every code line is allowed
    for _ in 0..100 {
        view.handle_key(key(KeyCode::Right), size.height);
    }
    assert_eq!(view.horizontal_offset(), 104);
}

#[test]
fn test_detail_back_and_close() {
    let mut view = DetailView::new(create_test_review(), 0);
    assert_eq!(view.handle_key(key(KeyCode::Esc), 24), DetailAction::Back);
    assert_eq!(view.handle_key(key(KeyCode::Char('q')), 24), DetailAction::Close);
    assert_eq!(view.handle_key(key(KeyCode::Enter), 24), DetailAction::None);
}

//! # Theme System
//!
//! Colour palettes and the styling capability the views draw with.
//!
//! ## Overview
//!
//! Views never build `ratatui` styles themselves. They hand plain spans to a
//! [`Styler`], which decorates them (bold, dim, accent foreground, highlight
//! background). [`Theme`] is the coloured implementation; [`PlainStyler`]
//! leaves text untouched and is used when colours are disabled.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Catppuccin Latte** - light pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette
//! - **Gruvbox Dark** - retro groove color scheme

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Text decorations available to the views.
///
/// Each method takes a span and returns it decorated; the views treat the
/// result as opaque.
pub trait Styler {
    fn bold(&self, span: Span<'static>) -> Span<'static>;
    fn dim(&self, span: Span<'static>) -> Span<'static>;
    fn accent(&self, span: Span<'static>) -> Span<'static>;
    fn highlight(&self, span: Span<'static>) -> Span<'static>;

    /// Style painted under the whole frame.
    fn base_style(&self) -> Style {
        Style::default()
    }
}

/// All colors used by the review TUI, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name, matched by `--theme` and the config file.
    pub name: &'static str,
    /// Primary text color.
    pub fg: Color,
    /// Muted text: separators, file headers, notes, key legends, code.
    pub dim: Color,
    /// Headers and the selection marker.
    pub accent: Color,
    /// Background of the cursor line in the detail view.
    pub highlight_bg: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

impl Styler for Theme {
    fn bold(&self, span: Span<'static>) -> Span<'static> {
        span.patch_style(Style::default().add_modifier(Modifier::BOLD))
    }

    fn dim(&self, span: Span<'static>) -> Span<'static> {
        span.patch_style(Style::default().fg(self.dim))
    }

    fn accent(&self, span: Span<'static>) -> Span<'static> {
        span.patch_style(Style::default().fg(self.accent))
    }

    fn highlight(&self, span: Span<'static>) -> Span<'static> {
        span.patch_style(Style::default().bg(self.highlight_bg))
    }

    fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }
}

/// Styler that leaves every span undecorated.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn bold(&self, span: Span<'static>) -> Span<'static> {
        span
    }

    fn dim(&self, span: Span<'static>) -> Span<'static> {
        span
    }

    fn accent(&self, span: Span<'static>) -> Span<'static> {
        span
    }

    fn highlight(&self, span: Span<'static>) -> Span<'static> {
        // keep the cursor line visible without colour
        span.patch_style(Style::default().add_modifier(Modifier::REVERSED))
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        fg: Color::Rgb(205, 214, 244),         // text
        dim: Color::Rgb(108, 112, 134),        // overlay0
        accent: Color::Rgb(137, 180, 250),     // blue
        highlight_bg: Color::Rgb(69, 71, 90),  // surface1
    },
    // 1 - Catppuccin Latte
    Theme {
        name: "Catppuccin Latte",
        fg: Color::Rgb(76, 79, 105),              // text
        dim: Color::Rgb(156, 160, 176),           // overlay0
        accent: Color::Rgb(30, 102, 245),         // blue
        highlight_bg: Color::Rgb(188, 192, 204),  // surface1
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        fg: Color::Rgb(248, 248, 242),
        dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253), // cyan
        highlight_bg: Color::Rgb(68, 71, 90),
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        fg: Color::Rgb(216, 222, 233),
        dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208), // frost
        highlight_bg: Color::Rgb(67, 76, 94),
    },
    // 4 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        fg: Color::Rgb(235, 219, 178),
        dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152), // blue
        highlight_bg: Color::Rgb(80, 73, 69),
    },
];

use crate::review::Review;
use crate::ui::detail::{DetailAction, DetailView};
use crate::ui::overview::{OverviewAction, OverviewView};
use crate::ui::theme::Styler;
use crate::ui::timer::DEFAULT_TICK;
use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::layout::Size;
use ratatui::style::Style;
use ratatui::text::Line;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Which view currently owns the screen.
pub enum Mode {
    Overview,
    Detail(DetailView),
}

/// Startup options for a review session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Section selected when the overview first opens (clamped).
    pub initial_section: usize,
    /// Marquee animation period.
    pub tick: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            initial_section: 0,
            tick: DEFAULT_TICK,
        }
    }
}

enum Transition {
    Stay,
    Open(usize),
    Back,
    Close,
}

impl From<OverviewAction> for Transition {
    fn from(action: OverviewAction) -> Self {
        match action {
            OverviewAction::None => Transition::Stay,
            OverviewAction::Select(index) => Transition::Open(index),
            OverviewAction::Close => Transition::Close,
        }
    }
}

impl From<DetailAction> for Transition {
    fn from(action: DetailAction) -> Self {
        match action {
            DetailAction::None => Transition::Stay,
            DetailAction::Back => Transition::Back,
            DetailAction::Close => Transition::Close,
        }
    }
}

/// Interactive review session: the overview/detail state machine.
///
/// The overview view lives for the whole session and keeps its selection
/// across detail excursions. A detail view is built fresh each time a section
/// is opened and dropped on the way back. Only the overview owns a timer, and
/// it runs only while the overview is on screen.
pub struct App {
    review: Arc<Review>,
    overview: OverviewView,
    mode: Mode,
    styler: Box<dyn Styler>,
    /// Terminal size seen by the last draw or resize event.
    pub viewport: Size,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(review: Review, styler: Box<dyn Styler>, settings: SessionSettings) -> Self {
        let review = Arc::new(review);
        let overview =
            OverviewView::with_tick(Arc::clone(&review), settings.initial_section, settings.tick);
        info!(
            title = %review.title,
            sections = review.sections.len(),
            selected = overview.selected_index(),
            "Review session started"
        );

        Self {
            review,
            overview,
            mode: Mode::Overview,
            styler,
            viewport: Size::new(0, 0),
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn review(&self) -> &Review {
        &self.review
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn overview(&self) -> &OverviewView {
        &self.overview
    }

    /// The open detail view, if any.
    pub fn detail(&self) -> Option<&DetailView> {
        match &self.mode {
            Mode::Detail(view) => Some(view),
            Mode::Overview => None,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.overview.selected_index()
    }

    pub fn base_style(&self) -> Style {
        self.styler.base_style()
    }

    /// Route a key press to the active view and apply the resulting transition.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.should_quit || key.kind != KeyEventKind::Press {
            return;
        }

        let transition = match &mut self.mode {
            Mode::Overview => Transition::from(self.overview.handle_key(key)),
            Mode::Detail(view) => Transition::from(view.handle_key(key, self.viewport.height)),
        };
        self.needs_redraw = true;

        match transition {
            Transition::Stay => {}
            Transition::Open(index) => self.open_section(index),
            Transition::Back => self.back_to_overview(),
            Transition::Close => self.close(),
        }
    }

    fn open_section(&mut self, index: usize) {
        self.overview.clear_timer();
        debug!(section = index, "Opening section");
        self.mode = Mode::Detail(DetailView::new(Arc::clone(&self.review), index));
    }

    fn back_to_overview(&mut self) {
        debug!(section = self.overview.selected_index(), "Returning to overview");
        self.mode = Mode::Overview;
        self.overview.restart_timer();
    }

    /// End the session. Idempotent.
    pub fn close(&mut self) {
        if self.should_quit {
            return;
        }
        self.overview.clear_timer();
        self.should_quit = true;
        info!("Review session closed");
    }

    /// Drive the overview animation; marks the frame dirty when it moved.
    pub fn on_tick(&mut self, now: Instant) {
        if let Mode::Overview = self.mode {
            if self.overview.on_tick(now, self.viewport.width) {
                self.needs_redraw = true;
            }
        }
    }

    /// When the event loop must wake up for the next animation tick.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.mode {
            Mode::Overview => self.overview.deadline(),
            Mode::Detail(_) => None,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        let size = Size::new(width, height);
        if size != self.viewport {
            self.viewport = size;
            self.needs_redraw = true;
        }
    }

    /// Lines of the active view at the current viewport.
    pub fn lines(&mut self) -> Vec<Line<'static>> {
        match &mut self.mode {
            Mode::Overview => self
                .overview
                .render(self.viewport.width, self.styler.as_ref()),
            Mode::Detail(view) => view.render(self.viewport, self.styler.as_ref()),
        }
    }
}

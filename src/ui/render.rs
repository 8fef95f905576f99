use crate::ui::app::App;
use ratatui::{widgets::Paragraph, Frame};

/// Paint the active view over the whole frame.
///
/// The frame size is handed to the app first so layout always uses the
/// current terminal dimensions.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.resize(area.width, area.height);

    let paragraph = Paragraph::new(app.lines()).style(app.base_style());
    frame.render_widget(paragraph, area);

    app.needs_redraw = false;
}

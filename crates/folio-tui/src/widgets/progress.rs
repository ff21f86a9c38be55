use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Thin read-progress bar across the top of the screen
pub struct ProgressWidget;

impl ProgressWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let filled =
            (area.width as f64 * app.scroll_state.progress_pct / 100.0).round() as usize;
        let filled = filled.min(area.width as usize);
        let rest = area.width as usize - filled;

        let line = Line::from(vec![
            Span::styled(
                "━".repeat(filled),
                Style::default().fg(app.theme.progress),
            ),
            Span::styled(
                "─".repeat(rest),
                Style::default().fg(app.theme.progress_track),
            ),
        ]);

        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(app.theme.bg)),
            area,
        );
    }
}

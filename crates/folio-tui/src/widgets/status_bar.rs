use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let section = app
            .scroll_state
            .active_section
            .and_then(|idx| app.page.sections.get(idx))
            .map(|s| s.title.as_str())
            .unwrap_or("—");

        let status = format!(
            " {} | {} | {:.0}%",
            section,
            app.prefs.applied().as_str(),
            app.scroll_state.progress_pct,
        );

        let mut hints = String::from(" 1-9:jump m:menu t:theme o:open q:quit ");
        if app.scroll_state.back_to_top_visible {
            hints.insert_str(0, " b:top↑ ");
        }

        let pad = area
            .width
            .saturating_sub(status.width() as u16 + hints.width() as u16) as usize;

        let line = Line::from(vec![
            Span::styled(
                status,
                Style::default().fg(theme.fg).bg(theme.bg_scrolled),
            ),
            Span::styled(" ".repeat(pad), Style::default().bg(theme.bg_scrolled)),
            Span::styled(
                hints,
                Style::default().fg(theme.fg_dim).bg(theme.bg_scrolled),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

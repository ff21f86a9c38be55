use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

/// Slide-out navigation panel, drawn over the content while open
pub struct MenuWidget;

impl MenuWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Menu ")
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface));

        let lines: Vec<Line> = app
            .page
            .sections
            .iter()
            .enumerate()
            .map(|(idx, section)| {
                let selected = idx == app.menu_selected;
                let active = app.scroll_state.active_section == Some(idx);
                let mut style = Style::default().fg(if active {
                    theme.link_active
                } else {
                    theme.fg
                });
                if selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let marker = if active { "›" } else { " " };
                Line::from(Span::styled(format!("{marker} {}", section.title), style))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

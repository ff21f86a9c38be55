use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Sticky header: page title, nav links with the active section highlighted,
/// and the menu control. Switches to a compact tinted style once scrolled.
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let bg = if app.scroll_state.header_scrolled {
            theme.bg_scrolled
        } else {
            theme.bg
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", app.page.title),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];

        for (idx, section) in app.page.sections.iter().enumerate() {
            let active = app.scroll_state.active_section == Some(idx);
            let focused = app.nav_focus == Some(idx);
            let mut style = Style::default().fg(if active {
                theme.link_active
            } else {
                theme.link
            });
            if active {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if focused {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {} ", section.title), style));
        }

        // menu control, mirrors the expanded flag
        let burger = if app.menu.expanded() { "✕" } else { "≡" };
        let used: u16 = spans.iter().map(|s| s.width() as u16).sum();
        let pad = area.width.saturating_sub(used + 3);
        spans.push(Span::raw(" ".repeat(pad as usize)));
        spans.push(Span::styled(
            format!(" {burger} "),
            Style::default().fg(theme.accent),
        ));

        let rule = Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(theme.border),
        ));

        frame.render_widget(
            Paragraph::new(vec![Line::from(spans), rule]).style(Style::default().bg(bg)),
            area,
        );
    }
}

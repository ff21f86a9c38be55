use folio_core::page::BlockRole;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::layout::{text_width, wrap, CONTENT_PADDING};

/// Scrolled page body: hero, sections, blocks, footer.
///
/// Line construction mirrors the height rules in [`crate::layout`]; blocks
/// still in their pre-reveal phase render in the hidden style until their
/// stagger delay fires.
pub struct SectionsWidget;

impl SectionsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let tw = text_width(area.width);
        let pad = " ".repeat(CONTENT_PADDING as usize);
        let mut lines: Vec<Line> = Vec::new();

        // hero
        lines.push(Line::from(Span::styled(
            format!("{pad}{}", app.page.title),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("{pad}{}", app.page.tagline.as_deref().unwrap_or("")),
            Style::default().fg(theme.fg_dim),
        )));
        lines.push(Line::default());

        let mut reveal_idx = 0;
        for section in &app.page.sections {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{pad}{}", section.title),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  #{}", section.id), Style::default().fg(theme.fg_dim)),
            ]));
            lines.push(Line::default());

            for block in &section.blocks {
                let hidden = if block.role.reveals() {
                    let h = !app.reveal.is_revealed(reveal_idx);
                    reveal_idx += 1;
                    h
                } else {
                    false
                };

                let fg = |color| {
                    Style::default().fg(if hidden { theme.fg_hidden } else { color })
                };

                match block.role {
                    BlockRole::Badge => {
                        lines.push(Line::from(Span::styled(
                            format!("{pad}▪ {}", block.body),
                            fg(theme.badge),
                        )));
                    }
                    BlockRole::Text => {
                        for row in wrap(&block.body, tw) {
                            lines.push(Line::from(Span::styled(
                                format!("{pad}{row}"),
                                fg(theme.fg),
                            )));
                        }
                    }
                    BlockRole::Card | BlockRole::Panel => {
                        if let Some(title) = &block.title {
                            let mut title_spans = vec![Span::styled(
                                format!("{pad}{title}"),
                                fg(theme.fg).add_modifier(Modifier::BOLD),
                            )];
                            if block.link.is_some() {
                                title_spans
                                    .push(Span::styled(" ↗", fg(theme.link)));
                            }
                            lines.push(Line::from(title_spans));
                        }
                        for row in wrap(&block.body, tw) {
                            lines.push(Line::from(Span::styled(
                                format!("{pad}{row}"),
                                fg(theme.fg_dim),
                            )));
                        }
                    }
                }
                lines.push(Line::default());
            }
        }

        // footer
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{pad}© {} {}", folio_core::page::footer_year(), app.page.title),
            Style::default().fg(theme.fg_dim),
        )));

        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().bg(theme.bg))
                .scroll((app.animator.current(), 0)),
            area,
        );
    }
}

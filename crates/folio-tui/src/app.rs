use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_core::page::Page;
use folio_core::reveal::RevealObserver;
use folio_core::theme::{FilePrefStore, ThemePrefs};
use folio_core::{nav, AppConfig, FrameGate, MenuController, ScrollMetrics, ScrollState};
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::{debug, warn};

use crate::layout::PageLayout;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;
use crate::widgets::{
    HeaderWidget, MenuWidget, ProgressWidget, SectionsWidget, StatusBarWidget,
};

/// Rows of fixed chrome: one for the progress bar, two for the header
pub const PROGRESS_ROWS: u16 = 1;
pub const HEADER_ROWS: u16 = 2;
pub const STATUS_ROWS: u16 = 1;

/// Application state and the event-to-behavior glue
pub struct App {
    pub config: Arc<AppConfig>,
    pub page: Page,
    pub prefs: ThemePrefs<FilePrefStore>,
    pub theme: Theme,
    pub layout: PageLayout,
    pub animator: ScrollAnimator,
    pub gate: FrameGate,
    pub scroll_state: ScrollState,
    pub menu: MenuController,
    pub menu_selected: usize,
    /// Header nav link focused via Tab, if any
    pub nav_focus: Option<usize>,
    pub reveal: RevealObserver,
    pub should_quit: bool,
    /// Content area of the last draw, for scroll math and mouse hit tests
    content_area: Rect,
}

impl App {
    pub fn new(config: Arc<AppConfig>, page: Page, prefs: ThemePrefs<FilePrefStore>) -> Self {
        // theme is already applied by ThemePrefs; pick the palette before
        // the first frame so there is no flash of the wrong theme
        let theme = Theme::for_mode(prefs.applied());
        let layout = PageLayout::compute(&page, 80);
        let reveal_count = layout.reveal_extents().len();

        let mut app = Self {
            theme,
            animator: ScrollAnimator::new(&config.ui.scroll),
            gate: FrameGate::default(),
            scroll_state: ScrollState::default(),
            menu: MenuController::new(config.ui.menu_breakpoint_cols),
            menu_selected: 0,
            nav_focus: None,
            reveal: RevealObserver::new(reveal_count, &config.ui.reveal),
            should_quit: false,
            content_area: Rect::new(0, PROGRESS_ROWS + HEADER_ROWS, 80, 21),
            config,
            page,
            prefs,
            layout,
        };
        // establish correct initial state without waiting for a scroll event
        app.scroll_state = app.derive_scroll_state();
        app
    }

    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.animator.current(),
            viewport_height: self.content_area.height,
            content_height: self.layout.content_height,
        }
    }

    fn derive_scroll_state(&self) -> ScrollState {
        ScrollState::derive(self.metrics(), &self.layout.section_tops, &self.config.ui.scroll)
    }

    fn max_scroll(&self) -> u16 {
        self.layout.max_scroll(self.content_area.height)
    }

    /// One pass per tick: advance animation, recompute scroll-derived state
    /// at most once, feed visibility to the reveal observer
    pub fn on_frame(&mut self, now: Instant) {
        if self.animator.update(now, self.max_scroll()) {
            self.gate.request();
        }
        if self.gate.take() {
            self.scroll_state = self.derive_scroll_state();
        }

        let extents = self.layout.reveal_extents();
        self.reveal.process_frame(
            now,
            &extents,
            self.animator.current(),
            self.content_area.height,
        );
        self.reveal.tick(now);
    }

    /// A short poll timeout is needed while anything animates
    pub fn needs_fast_tick(&self) -> bool {
        self.animator.is_animating() || self.reveal.any_scheduled()
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.layout = PageLayout::compute(&self.page, width);
        self.content_area = Rect::new(
            0,
            PROGRESS_ROWS + HEADER_ROWS,
            width,
            height.saturating_sub(PROGRESS_ROWS + HEADER_ROWS + STATUS_ROWS),
        );
        self.menu.on_resize(width);
        self.gate.request();
    }

    /// Manual scrolling; inert while the menu locks the page
    pub fn scroll_by(&mut self, delta: i32) {
        if self.menu.scroll_locked() {
            return;
        }
        self.animator.scroll_by(delta, self.max_scroll());
        self.gate.request();
    }

    pub fn jump_to(&mut self, pos: u16) {
        if self.menu.scroll_locked() {
            return;
        }
        self.animator.animate_to(pos, self.max_scroll());
        self.gate.request();
    }

    pub fn jump_to_bottom(&mut self) {
        self.jump_to(self.max_scroll());
    }

    /// Anchor navigation by section index; always closes the menu
    pub fn navigate_to_section(&mut self, idx: usize) {
        let Some(section) = self.page.sections.get(idx) else {
            self.menu.close();
            return;
        };
        let id = section.id.clone();
        self.navigate_to_anchor(&id);
    }

    /// Anchor navigation by id; unknown ids scroll nowhere but still close
    /// the menu
    pub fn navigate_to_anchor(&mut self, id: &str) {
        let target = nav::resolve_anchor(
            &self.page,
            &self.layout.section_tops,
            id,
            HEADER_ROWS,
            self.config.ui.scroll.anchor_gap,
        );
        match target {
            Some(pos) => {
                let max = self.max_scroll();
                self.animator.animate_to(pos.min(max), max);
                self.gate.request();
            }
            None => debug!("anchor {id} has no section, ignoring"),
        }
        self.menu.close();
    }

    pub fn back_to_top(&mut self) {
        let max = self.max_scroll();
        self.animator.animate_to(0, max);
        self.gate.request();
    }

    pub fn toggle_theme(&mut self) {
        let mode = self.prefs.toggle();
        self.theme = Theme::for_mode(mode);
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
        if self.menu.is_open() {
            self.menu_selected = self.scroll_state.active_section.unwrap_or(0);
        }
    }

    pub fn menu_move(&mut self, delta: i32) {
        if self.page.sections.is_empty() {
            return;
        }
        let last = self.page.sections.len() - 1;
        let next = (self.menu_selected as i32 + delta).clamp(0, last as i32);
        self.menu_selected = next as usize;
    }

    pub fn nav_cycle(&mut self, delta: i32) {
        if self.page.sections.is_empty() {
            return;
        }
        let count = self.page.sections.len() as i32;
        let next = match self.nav_focus {
            Some(cur) => (cur as i32 + delta).rem_euclid(count),
            None if delta >= 0 => 0,
            None => count - 1,
        };
        self.nav_focus = Some(next as usize);
    }

    /// Open the first external link of the active section
    pub fn open_active_link(&mut self) {
        let Some(idx) = self.scroll_state.active_section else {
            return;
        };
        let link = self.page.sections[idx]
            .blocks
            .iter()
            .find_map(|b| b.link.as_deref());
        if let Some(link) = link {
            if let Err(e) = open::that(link) {
                warn!("failed to open {link}: {e}");
            }
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.scroll_by(self.config.ui.scroll.scroll_step as i32)
            }
            MouseEventKind::ScrollUp => {
                self.scroll_by(-(self.config.ui.scroll.scroll_step as i32))
            }
            MouseEventKind::Down(MouseButton::Left) if self.menu.is_open() => {
                let panel = self.menu_panel_area();
                if panel.contains((mouse.column, mouse.row).into()) {
                    // first entry sits one row below the panel border
                    let row = mouse.row.saturating_sub(panel.y + 1) as usize;
                    if row < self.page.sections.len() {
                        self.navigate_to_section(row);
                    }
                } else {
                    // overlay click
                    self.menu.close();
                }
            }
            _ => {}
        }
    }

    /// Where the slide-out panel sits when open; also the mouse hit zone
    pub fn menu_panel_area(&self) -> Rect {
        let area = self.content_area;
        let width = (area.width / 3).clamp(18, 32).min(area.width);
        Rect::new(
            area.right().saturating_sub(width),
            area.y,
            width,
            (self.page.sections.len() as u16 + 2).min(area.height),
        )
    }

    pub fn content_area(&self) -> Rect {
        self.content_area
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let header_y = PROGRESS_ROWS;
        let content_y = PROGRESS_ROWS + HEADER_ROWS;
        let content_h = area
            .height
            .saturating_sub(PROGRESS_ROWS + HEADER_ROWS + STATUS_ROWS);
        self.content_area = Rect::new(0, content_y, area.width, content_h);

        let progress_area = Rect::new(0, 0, area.width, PROGRESS_ROWS.min(area.height));
        let header_area = Rect::new(0, header_y, area.width, HEADER_ROWS.min(area.height));
        let status_area = Rect::new(
            0,
            area.height.saturating_sub(STATUS_ROWS),
            area.width,
            STATUS_ROWS.min(area.height),
        );

        ProgressWidget::render(frame, progress_area, self);
        HeaderWidget::render(frame, header_area, self);
        SectionsWidget::render(frame, self.content_area, self);
        if self.menu.is_open() {
            MenuWidget::render(frame, self.menu_panel_area(), self);
        }
        StatusBarWidget::render(frame, status_area, self);
    }
}

/// Build the theme preference store at its default location
pub fn default_prefs() -> ThemePrefs<FilePrefStore> {
    ThemePrefs::new(FilePrefStore::default_path())
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn test_app(dir: &std::path::Path) -> App {
        let prefs = ThemePrefs::new(FilePrefStore::new(dir.join("theme.toml")));
        let mut app = App::new(Arc::new(AppConfig::default()), Page::sample(), prefs);
        app.on_resize(80, 24);
        app
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_overlay_click_closes_menu() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.toggle_menu();
        assert!(app.menu.is_open());

        let panel = app.menu_panel_area();
        // click well to the left of the panel, on the overlay
        app.on_mouse(left_click(panel.x.saturating_sub(5), panel.y + 1));
        assert!(!app.menu.is_open());
        assert_eq!(app.animator.target(), 0);
    }

    #[test]
    fn test_overlay_click_when_closed_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.on_mouse(left_click(0, 10));
        assert!(!app.menu.is_open());
        assert_eq!(app.animator.target(), 0);
    }

    #[test]
    fn test_menu_entry_click_navigates_and_closes() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.toggle_menu();

        let panel = app.menu_panel_area();
        // third entry sits two rows below the first, which is at panel.y + 1
        app.on_mouse(left_click(panel.x + 2, panel.y + 1 + 2));

        assert!(!app.menu.is_open());
        let max = app.layout.max_scroll(app.content_area().height);
        let expected = app.layout.section_tops[2]
            .saturating_sub(HEADER_ROWS + app.config.ui.scroll.anchor_gap)
            .min(max);
        assert_eq!(app.animator.target(), expected);
    }

    #[test]
    fn test_wheel_scroll_moves_target() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.on_mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            app.animator.target(),
            app.config.ui.scroll.scroll_step
        );
    }
}

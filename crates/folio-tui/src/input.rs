use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    HalfPageDown,
    HalfPageUp,
    JumpTop,
    JumpBottom,
    /// Anchor-navigate to the nth section
    JumpSection(usize),
    /// Cycle the focused header nav link
    NavNext,
    NavPrev,
    /// Navigate to the focused nav link
    NavSelect,
    ToggleTheme,
    ToggleMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    /// Navigate to the highlighted menu entry
    MenuSelect,
    BackToTop,
    OpenLink,
    None,
}

/// Map a key event to an action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.menu.is_open() {
        return handle_menu_mode(key);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, KeyModifiers::NONE) => {
            Action::ScrollDown
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, KeyModifiers::NONE) => {
            Action::ScrollUp
        }
        (KeyCode::Char('d'), KeyModifiers::CONTROL) | (KeyCode::PageDown, KeyModifiers::NONE) => {
            Action::HalfPageDown
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) | (KeyCode::PageUp, KeyModifiers::NONE) => {
            Action::HalfPageUp
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, KeyModifiers::NONE) => {
            Action::JumpTop
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) | (KeyCode::End, KeyModifiers::NONE) => {
            Action::JumpBottom
        }

        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpSection(c as usize - '1' as usize)
        }
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NavNext,
        (KeyCode::BackTab, _) => Action::NavPrev,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::NavSelect,

        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::ToggleTheme,
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMenu,
        (KeyCode::Char('b'), KeyModifiers::NONE) => Action::BackToTop,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenLink,

        // Escape with the menu closed does nothing
        _ => Action::None,
    }
}

fn handle_menu_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::CloseMenu,
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, KeyModifiers::NONE) => {
            Action::MenuDown
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, KeyModifiers::NONE) => {
            Action::MenuUp
        }
        (KeyCode::Enter, KeyModifiers::NONE) => Action::MenuSelect,
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMenu,
        _ => Action::None,
    }
}

/// Apply an action to the app state
pub fn apply_action(action: Action, app: &mut App) {
    let step = app.config.ui.scroll.scroll_step as i32;
    let half_page = (app.content_area().height / 2).max(1) as i32;

    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_by(step),
        Action::ScrollUp => app.scroll_by(-step),
        Action::HalfPageDown => app.scroll_by(half_page),
        Action::HalfPageUp => app.scroll_by(-half_page),
        Action::JumpTop => app.jump_to(0),
        Action::JumpBottom => app.jump_to_bottom(),
        Action::JumpSection(idx) => app.navigate_to_section(idx),
        Action::NavNext => app.nav_cycle(1),
        Action::NavPrev => app.nav_cycle(-1),
        Action::NavSelect => {
            if let Some(idx) = app.nav_focus {
                app.navigate_to_section(idx);
            }
        }
        Action::ToggleTheme => app.toggle_theme(),
        Action::ToggleMenu => app.toggle_menu(),
        Action::CloseMenu => app.menu.close(),
        Action::MenuUp => app.menu_move(-1),
        Action::MenuDown => app.menu_move(1),
        Action::MenuSelect => {
            let idx = app.menu_selected;
            app.navigate_to_section(idx);
        }
        Action::BackToTop => app.back_to_top(),
        Action::OpenLink => app.open_active_link(),
        Action::None => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use folio_core::page::Page;
    use folio_core::theme::{FilePrefStore, ThemePrefs};
    use folio_core::AppConfig;

    use super::*;

    fn test_app(dir: &std::path::Path) -> App {
        let prefs = ThemePrefs::new(FilePrefStore::new(dir.join("theme.toml")));
        let mut app = App::new(Arc::new(AppConfig::default()), Page::sample(), prefs);
        app.on_resize(80, 24);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_escape_closes_open_menu() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.toggle_menu();
        assert!(app.menu.is_open());

        let action = handle_key_event(key(KeyCode::Esc), &app);
        assert_eq!(action, Action::CloseMenu);
        apply_action(action, &mut app);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn test_escape_with_closed_menu_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::None);
    }

    #[test]
    fn test_digit_maps_to_section_jump() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        assert_eq!(
            handle_key_event(key(KeyCode::Char('2')), &app),
            Action::JumpSection(1)
        );
    }

    #[test]
    fn test_menu_select_navigates_and_closes() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.toggle_menu();
        apply_action(Action::MenuDown, &mut app);
        apply_action(Action::MenuSelect, &mut app);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn test_scroll_is_locked_while_menu_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.toggle_menu();
        apply_action(Action::ScrollDown, &mut app);
        assert_eq!(app.animator.target(), 0);
    }

    #[test]
    fn test_theme_toggle_action_flips_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        let before = app.prefs.applied();
        apply_action(Action::ToggleTheme, &mut app);
        assert_eq!(app.prefs.applied(), before.flip());
    }
}

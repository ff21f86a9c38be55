//! Slide-out menu state machine.
//!
//! Two states, several closing triggers, every transition idempotent. The
//! expanded flag and the scroll lock mirror the state and are only mutated
//! here.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug)]
pub struct MenuController {
    state: MenuState,
    expanded: bool,
    scroll_locked: bool,
    breakpoint_cols: u16,
}

impl MenuController {
    pub fn new(breakpoint_cols: u16) -> Self {
        Self {
            state: MenuState::Closed,
            expanded: false,
            scroll_locked: false,
            breakpoint_cols,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Expanded accessibility flag on the menu control
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Background scrolling is disabled while open
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn open(&mut self) {
        self.state = MenuState::Open;
        self.sync_flags();
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
        self.sync_flags();
    }

    /// Hamburger control: flip the current state
    pub fn toggle(&mut self) {
        match self.state {
            MenuState::Closed => self.open(),
            MenuState::Open => self.close(),
        }
    }

    /// Force-close when the viewport grows past the breakpoint while open
    pub fn on_resize(&mut self, width_cols: u16) {
        if width_cols > self.breakpoint_cols && self.is_open() {
            self.close();
        }
    }

    fn sync_flags(&mut self) {
        let open = self.is_open();
        self.expanded = open;
        self.scroll_locked = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> MenuController {
        MenuController::new(100)
    }

    fn assert_flags_track(m: &MenuController) {
        assert_eq!(m.expanded(), m.is_open());
        assert_eq!(m.scroll_locked(), m.is_open());
    }

    #[test]
    fn test_toggle_cycles() {
        let mut m = menu();
        assert!(!m.is_open());
        m.toggle();
        assert!(m.is_open());
        assert_flags_track(&m);
        m.toggle();
        assert!(!m.is_open());
        assert_flags_track(&m);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut m = menu();
        m.open();
        m.close();
        let expanded = m.expanded();
        let locked = m.scroll_locked();
        m.close();
        assert!(!m.is_open());
        assert_eq!(m.expanded(), expanded);
        assert_eq!(m.scroll_locked(), locked);
    }

    #[test]
    fn test_resize_wide_closes_open_menu() {
        let mut m = menu();
        m.open();
        m.on_resize(101);
        assert!(!m.is_open());
        assert_flags_track(&m);
    }

    #[test]
    fn test_resize_at_breakpoint_keeps_menu() {
        let mut m = menu();
        m.open();
        m.on_resize(100);
        assert!(m.is_open());
    }

    #[test]
    fn test_resize_when_closed_is_noop() {
        let mut m = menu();
        m.on_resize(150);
        assert!(!m.is_open());
        assert_flags_track(&m);
    }

    #[test]
    fn test_open_sets_both_flags() {
        let mut m = menu();
        m.open();
        assert!(m.expanded());
        assert!(m.scroll_locked());
    }
}

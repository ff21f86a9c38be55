use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use folio_core::{AppConfig, Page};
use folio_tui::{
    app::{default_prefs, App},
    event::{AppEvent, EventHandler},
    input::{apply_action, handle_key_event},
};

pub fn run(config: Arc<AppConfig>, page_file: Option<PathBuf>) -> Result<()> {
    let page = load_page(&config, page_file)?;
    info!("loaded page \"{}\" with {} sections", page.title, page.sections.len());

    // The stored theme preference is applied here, before any drawing
    let prefs = default_prefs();
    let mut app = App::new(config.clone(), page, prefs);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("folio")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    app.on_resize(size.width, size.height);

    let event_handler = EventHandler::new(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_fps,
    );

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    // checked at the end of each iteration for the next poll timeout
    let mut needs_fast_tick = false;

    loop {
        match event_handler.next(needs_fast_tick)? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                apply_action(action, app);
            }
            Some(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Some(AppEvent::Resize(w, h)) => app.on_resize(w, h),
            Some(AppEvent::Tick) | None => {}
        }

        app.on_frame(Instant::now());
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit {
            return Ok(());
        }
        needs_fast_tick = app.needs_fast_tick();
    }
}

fn load_page(config: &AppConfig, page_file: Option<PathBuf>) -> Result<Page> {
    let path = page_file.or_else(|| config.general.page_file.clone());
    match path {
        Some(path) => Ok(Page::load(&path)?),
        None => Ok(Page::sample()),
    }
}

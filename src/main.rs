use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use peekr::app::{App, InputMode};
use peekr::history::HistoryStore;
use peekr::storage::FileStorage;
use peekr::ui;

fn main() -> Result<()> {
    // Ensure terminal is restored on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal);
    restore_terminal()?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let history = HistoryStore::load(Box::new(FileStorage::default_location()));
    let mut app = App::new(history, Box::new(FileStorage::default_location()));

    // A path on the command line is previewed immediately.
    if let Some(arg) = std::env::args().nth(1) {
        app.open_path(PathBuf::from(arg));
    }

    while app.running {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input: use a short timeout while a read is in flight
        // (to apply completions promptly) and a longer one when idle to
        // save CPU.
        let poll_timeout = if app.pending_reads > 0 {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(200)
        };
        if event::poll(poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            handle_key(&mut app, key);
            app.clamp_indices();
        }

        app.drain_read_events();
        app.tick();
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // The open prompt captures all typing.
    if app.input_mode == InputMode::OpenPath {
        match key.code {
            KeyCode::Esc => app.cancel_path_input(),
            KeyCode::Enter => app.submit_path_input(),
            KeyCode::Backspace => {
                app.path_input.pop();
            }
            KeyCode::Char(c) => app.path_input.push(c),
            _ => {}
        }
        return;
    }

    // Global keys.
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) =
        (key.code, key.modifiers)
    {
        app.running = false;
        return;
    }

    if app.show_menu {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => app.toggle_menu(),
            KeyCode::Down | KeyCode::Char('j') => {
                app.menu_index = app.menu_index.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.menu_index = app.menu_index.saturating_sub(1);
            }
            KeyCode::Enter => app.run_menu_action(),
            _ => {}
        }
        return;
    }

    if app.show_history {
        match key.code {
            KeyCode::Esc | KeyCode::Char('h') => app.toggle_history(),
            KeyCode::Down | KeyCode::Char('j') => {
                app.history_index = app.history_index.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.history_index = app.history_index.saturating_sub(1);
            }
            KeyCode::Enter => app.open_from_history(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('o') => {
            app.input_mode = InputMode::OpenPath;
            app.path_input.clear();
        }
        KeyCode::Char('h') => app.toggle_history(),
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('c') => app.copy_content(),
        KeyCode::Char('e') => app.export_markup(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::PageDown => app.scroll_down(20),
        KeyCode::PageUp => app.scroll_up(20),
        KeyCode::Home => app.scroll_up(u16::MAX),
        _ => {}
    }
}

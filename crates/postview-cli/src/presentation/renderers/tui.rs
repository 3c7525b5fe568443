//! TUI Renderer for the interactive browser
//!
//! Owns the browser session and the terminal. Every frame is rebuilt from the
//! session's state through `build_screen`, so the renderer itself keeps no
//! copy of the posts.
//!
//! ## Design:
//! - Key presses become `Action`s; actions become session operations
//! - Load outcomes are applied between frames, on the UI thread
//! - The session is unmounted before the terminal is restored

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
};
use tracing::{debug, warn};

use postview_runtime::{BrowserSession, PostSource};

use crate::presentation::presenters::build_screen;
use crate::presentation::view_models::{ScreenBody, ScreenViewModel};
use crate::presentation::views::tui::{HeaderView, PostDetailView, PostListView, StatusBarView};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a key press asks the browser to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    First,
    Last,
    Open,
    Back,
    Refresh,
    Quit,
}

/// Map a key press to an action. `Esc` leaves the detail body before it
/// quits.
pub fn key_action(key: KeyEvent, in_detail: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc if in_detail => Some(Action::Back),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') | KeyCode::Char('h') => {
            Some(Action::Back)
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Some(Action::Open),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::First),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Last),
        _ => None,
    }
}

/// Apply `action` to the session. Returns `false` when the browser should
/// close.
pub fn apply_action<S: PostSource>(session: &mut BrowserSession<S>, action: Action) -> bool {
    let browser = session.browser_mut();
    match action {
        Action::Quit => return false,
        Action::Up => browser.move_up(),
        Action::Down => browser.move_down(),
        Action::First => browser.move_first(),
        Action::Last => browser.move_last(),
        Action::Open => {
            browser.select_highlighted();
        }
        Action::Back => browser.back(),
        Action::Refresh => session.refresh(),
    }
    true
}

/// Paint one frame: header, body, status bar.
pub fn draw(f: &mut Frame, screen: &ScreenViewModel) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .split(f.area());

    f.render_widget(HeaderView::new(screen), chunks[0]);

    let in_detail = match &screen.body {
        ScreenBody::List { items, cursor } => {
            f.render_widget(
                PostListView::new(items, *cursor, screen.status.loading),
                chunks[1],
            );
            false
        }
        ScreenBody::Detail { id, title, body } => {
            f.render_widget(PostDetailView::new(*id, title, body), chunks[1]);
            true
        }
    };

    f.render_widget(StatusBarView::new(&screen.status, in_detail), chunks[2]);
}

pub struct TuiRenderer<S: PostSource> {
    session: BrowserSession<S>,
    source: String,
}

impl<S: PostSource> TuiRenderer<S> {
    pub fn new(session: BrowserSession<S>) -> Self {
        let source = session.source().describe();
        Self { session, source }
    }

    /// Take over the terminal until the user quits.
    ///
    /// Must be called from inside a tokio runtime context: mounting spawns
    /// the first fetch.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        if let Err(e) = ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(130);
        }) {
            warn!(error = %e, "failed to install Ctrl-C handler");
        }

        self.session.mount();
        let result = self.event_loop(&mut terminal);
        self.session.unmount();

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            if self.session.poll() {
                debug!(state = ?self.session.browser().load_state(), "browser updated");
            }

            let screen = build_screen(self.session.browser(), &self.source);
            terminal.draw(|f| draw(f, &screen))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };

            let in_detail = self.session.browser().selected().is_some();
            if let Some(action) = key_action(key, in_detail)
                && !apply_action(&mut self.session, action)
            {
                return Ok(());
            }
        }
    }
}

use crate::{
    alert::AlertResponse,
    components::{TasksList, TodoInput},
    dialog::DialogAction,
    events::{Event, EventHandler},
    home::Home,
    ui,
};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::time::Duration;
use todo_core::{AppConfig, TodoError, TodoResult};

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub focus: Focus,
    pub home: Home,
    pub tasks_list: TasksList,
    pub todo_input: TodoInput,
    pub config: AppConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Tasks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Help,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let todo_input = TodoInput::new(config.effective_input_placeholder());
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            focus: Focus::Input,
            home: Home::new(),
            tasks_list: TasksList::new(),
            todo_input,
            config,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Brings the rows up to date after a committed mutation.
    pub fn refresh(&mut self) {
        if self.home.take_refresh() {
            self.tasks_list.sync(self.home.tasks());
        }
    }

    /// Routes one key press. While an alert is open the shell treats it as
    /// modal and sends every key to the alert, even though `Home` itself
    /// keeps accepting operations with a confirmation pending.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.mode == AppMode::Help {
            self.mode = AppMode::Normal;
            return;
        }

        if self.home.alert().is_some() {
            self.handle_alert_key(key.code);
        } else {
            match self.focus {
                Focus::Input => self.handle_input_key(key.code),
                Focus::Tasks => self.handle_tasks_key(key),
            }
        }

        self.refresh();
    }

    fn handle_alert_key(&mut self, key_code: KeyCode) {
        let Some(alert) = self.home.alert_mut() else {
            return;
        };
        match alert.handle_key(key_code) {
            AlertResponse::Press(index) => self.home.respond_to_alert(index),
            AlertResponse::Dismiss => self.home.dismiss_alert(),
            AlertResponse::None => {}
        }
    }

    fn handle_input_key(&mut self, key_code: KeyCode) {
        if key_code == KeyCode::Tab {
            self.focus = Focus::Tasks;
            return;
        }
        let home = &mut self.home;
        let action = self
            .todo_input
            .handle_key(key_code, |title| home.add_task(title));
        if action == DialogAction::Cancel {
            self.focus = Focus::Tasks;
        }
    }

    fn handle_tasks_key(&mut self, key: KeyEvent) {
        if self.tasks_list.is_editing() {
            self.tasks_list.handle_key(key, &mut self.home);
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('?') => self.mode = AppMode::Help,
            KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('n') => self.focus = Focus::Input,
            _ => {
                self.tasks_list.handle_key(key, &mut self.home);
            }
        }
    }

    pub async fn run(&mut self) -> TodoResult<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> TodoResult<()> {
        let tick_rate = Duration::from_millis(self.config.effective_tick_rate_ms());
        let mut events = EventHandler::new(tick_rate);

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key),
                Some(Event::Resize(width, height)) => {
                    tracing::debug!("Terminal resized to {}x{}", width, height);
                }
                Some(Event::Tick) => {}
                None => break,
            }
        }

        events.stop();
        Ok(())
    }
}

fn setup_terminal() -> TodoResult<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    enter_alternate_screen(&mut stdout, disable_raw_mode)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        TodoError::Terminal(format!("failed to initialise terminal: {}", e))
    })
}

/// Switches `out` to the alternate screen. On failure `leave_raw_mode` runs
/// before the error is returned.
fn enter_alternate_screen<W: Write>(
    out: &mut W,
    leave_raw_mode: impl FnOnce() -> io::Result<()>,
) -> TodoResult<()> {
    execute!(out, EnterAlternateScreen).map_err(|e| {
        if let Err(restore) = leave_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {}", restore);
        }
        TodoError::Terminal(format!("failed to enter alternate screen: {}", e))
    })
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

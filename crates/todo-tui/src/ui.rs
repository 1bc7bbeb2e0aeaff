use crate::app::{App, AppMode, Focus};
use crate::components::*;
use crate::keybindings::KeybindingRegistry;
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let popup_open = app.home.alert().is_some() || app.mode == AppMode::Help;

    render_header(frame, chunks[0], app.home.task_count());
    app.todo_input
        .render(frame, chunks[1], app.focus == Focus::Input && !popup_open);
    app.tasks_list
        .render(frame, chunks[2], app.focus == Focus::Tasks && !popup_open);
    render_footer(app, frame, chunks[3]);

    if let Some(alert) = app.home.alert() {
        render_alert(frame, alert);
    } else if app.mode == AppMode::Help {
        let context = KeybindingRegistry::get_provider(app).get_context();
        render_help_popup(frame, &context);
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let context = KeybindingRegistry::get_provider(app).get_context();
    let footer = Paragraph::new(context.footer_hint())
        .style(label_text())
        .block(Block::default().borders(Borders::ALL).border_style(unfocused_border()));
    frame.render_widget(footer, area);
}

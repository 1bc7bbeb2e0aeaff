use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn header_style() -> Style {
    Style::default()
        .fg(ratatui::style::Color::White)
        .bg(BRAND)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_row() -> Style {
    Style::default().bg(SELECTED_BG)
}

pub fn stripe_row() -> Style {
    Style::default().bg(STRIPE_BG)
}

pub fn task_title(done: bool) -> Style {
    if done {
        Style::default()
            .fg(DONE_TEXT)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(NORMAL_TEXT)
    }
}

pub fn task_marker(done: bool) -> Style {
    if done {
        Style::default()
            .fg(ratatui::style::Color::White)
            .bg(DONE_MARKER)
    } else {
        Style::default().fg(MARKER_BORDER)
    }
}

pub fn editing_text() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn action_enabled() -> Style {
    Style::default().fg(MARKER_BORDER)
}

pub fn action_disabled() -> Style {
    Style::default()
        .fg(DISABLED_TEXT)
        .add_modifier(Modifier::DIM)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn warning_text() -> Style {
    Style::default().fg(WARNING_TEXT)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}

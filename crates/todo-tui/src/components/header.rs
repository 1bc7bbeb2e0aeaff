use crate::theme::header_style;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub fn tasks_counter_label(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("You have {} {}", count, noun)
}

pub fn render_header(frame: &mut Frame, area: Rect, tasks_counter: usize) {
    let line = Line::from(vec![
        Span::raw(" to.do "),
        Span::raw("  "),
        Span::raw(tasks_counter_label(tasks_counter)),
    ]);
    let header = Paragraph::new(line)
        .alignment(Alignment::Left)
        .style(header_style())
        .block(Block::default().style(header_style()));
    frame.render_widget(header, area);
}

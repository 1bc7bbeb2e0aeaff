use crate::alert::Alert;
use crate::keybindings::KeybindingContext;
use crate::theme::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn render_popup_with_block(
    frame: &mut Frame,
    title: &str,
    width_percent: u16,
    height_percent: u16,
) -> Rect {
    let area = centered_rect(width_percent, height_percent, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}

pub fn alert_buttons_line(alert: &Alert) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, button) in alert.buttons().iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("   "));
        }
        let style = if index == alert.selected() {
            bold_highlight().add_modifier(ratatui::style::Modifier::REVERSED)
        } else {
            normal_text()
        };
        spans.push(Span::styled(format!(" {} ", button.text), style));
    }
    Line::from(spans)
}

pub fn render_alert(frame: &mut Frame, alert: &Alert) {
    let inner = render_popup_with_block(frame, &alert.title, 50, 30);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(alert.message.as_str())
        .style(warning_text())
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let buttons = Paragraph::new(alert_buttons_line(alert)).alignment(Alignment::Right);
    frame.render_widget(buttons, chunks[1]);
}

pub fn render_help_popup(frame: &mut Frame, context: &KeybindingContext) {
    let inner = render_popup_with_block(frame, &context.name, 60, 60);

    let lines: Vec<Line> = context
        .bindings
        .iter()
        .map(|binding| {
            Line::from(vec![
                Span::styled(format!("{:<12}", binding.key), bold_highlight()),
                Span::styled(binding.description.clone(), normal_text()),
            ])
        })
        .chain(std::iter::once(Line::from("")))
        .chain(std::iter::once(Line::from(Span::styled(
            "Press any key to close",
            label_text(),
        ))))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

use crate::theme::stripe_row;
use ratatui::{style::Style, text::Line, widgets::ListItem};

/// Alternating background behind each row.
pub fn wrap_row(index: usize, line: Line<'static>) -> ListItem<'static> {
    let style = if index % 2 == 1 {
        stripe_row()
    } else {
        Style::default()
    };
    ListItem::new(line).style(style)
}

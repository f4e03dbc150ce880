use chrono::NaiveTime;
use ratatui::text::{Line, Span};

use crate::ui::theme::Theme;

/// Title row with the wall-clock time, then a full-width `=` rule.
pub fn title_lines(product: &str, now: NaiveTime, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(product.to_string(), theme.bold()),
            Span::raw(format!(" - {}", now.format("%H:%M:%S"))),
        ]),
        Line::from(Span::styled("=".repeat(width), theme.rule())),
    ]
}

/// Section header: blank spacer, bold title, full-width `-` rule.
pub fn create_header(title: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(title.to_string(), theme.bold())),
        Line::from(Span::styled("-".repeat(width), theme.rule())),
    ]
}

use ratatui::text::{Line, Span};

use crate::ui::theme::Theme;

pub const QUIT_HINT: &str = "Press 'q' to quit";

pub fn render(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(QUIT_HINT, theme.footer())),
    ]
}

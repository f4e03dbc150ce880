use ratatui::style::{Color, Modifier, Style};

/// Colors shared by the dashboard sections. Bar colors come from
/// [`crate::format::Severity`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub rule_fg: Color,
    pub footer_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            rule_fg: Color::Blue,
            footer_fg: Color::Blue,
        }
    }
}

impl Theme {
    pub fn bold(self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn rule(self) -> Style {
        Style::default().fg(self.rule_fg)
    }

    pub fn footer(self) -> Style {
        Style::default().fg(self.footer_fg)
    }
}

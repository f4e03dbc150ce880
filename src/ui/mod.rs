pub mod cpu_block;
pub mod header;
pub mod process_table;
pub mod statusbar;
pub mod theme;

use chrono::{Local, NaiveTime};
use ratatui::text::Line;

use crate::system::snapshot::SystemSnapshot;
use crate::ui::theme::Theme;

pub const PRODUCT_NAME: &str = "WinTop";

/// Turns a [`SystemSnapshot`] into the rows of one dashboard frame.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    theme: Theme,
}

impl LayoutEngine {
    pub fn new(theme: Theme) -> Self {
        LayoutEngine { theme }
    }

    pub fn render(&self, snapshot: &SystemSnapshot, term_width: u16) -> Vec<Line<'static>> {
        self.render_at(snapshot, term_width, Local::now().time())
    }

    pub fn render_at(
        &self,
        snapshot: &SystemSnapshot,
        term_width: u16,
        now: NaiveTime,
    ) -> Vec<Line<'static>> {
        let _span = tracing::debug_span!("ui.render", width = term_width).entered();

        let width = usize::from(term_width);
        let theme = &self.theme;

        let mut lines = header::title_lines(PRODUCT_NAME, now, width, theme);
        lines.extend(header::create_header(
            "CPU Usage and System Resources",
            width,
            theme,
        ));
        lines.extend(cpu_block::render(snapshot, theme));
        lines.extend(header::create_header("Top Processes", width, theme));
        lines.extend(process_table::render(&snapshot.processes, theme));
        lines.extend(statusbar::render(theme));
        lines
    }
}

/// Plain text of a styled line, without any styling.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

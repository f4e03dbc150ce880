use ratatui::text::{Line, Span};

use crate::format::fit_column;
use crate::system::snapshot::ProcessEntry;
use crate::ui::theme::Theme;

pub const PID_WIDTH: usize = 15;
pub const NAME_WIDTH: usize = 35;
pub const CPU_WIDTH: usize = 15;
pub const MEM_WIDTH: usize = 15;

const WIDTHS: [usize; 4] = [PID_WIDTH, NAME_WIDTH, CPU_WIDTH, MEM_WIDTH];
const TITLES: [&str; 4] = ["PID", "Name", "CPU%", "MEM%"];

const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

struct BorderChars {
    left: char,
    junction: char,
    right: char,
}

const TOP: BorderChars = BorderChars {
    left: '┌',
    junction: '┬',
    right: '┐',
};
const SEPARATOR: BorderChars = BorderChars {
    left: '├',
    junction: '┼',
    right: '┤',
};
const BOTTOM: BorderChars = BorderChars {
    left: '└',
    junction: '┴',
    right: '┘',
};

pub fn render(processes: &[ProcessEntry], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(processes.len() + 4);
    lines.push(border(&TOP));
    lines.push(title_row(theme));
    lines.push(border(&SEPARATOR));
    lines.extend(processes.iter().map(process_row));
    lines.push(border(&BOTTOM));
    lines
}

fn border(chars: &BorderChars) -> Line<'static> {
    let segments: Vec<String> = WIDTHS.iter().map(|w| HORIZONTAL.repeat(*w)).collect();
    let mut text = String::new();
    text.push(chars.left);
    text.push_str(&segments.join(&chars.junction.to_string()));
    text.push(chars.right);
    Line::raw(text)
}

fn title_row(theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::raw(VERTICAL)];
    for (title, width) in TITLES.iter().zip(WIDTHS) {
        spans.push(Span::styled(format!("{title:^width$}"), theme.bold()));
        spans.push(Span::raw(VERTICAL));
    }
    Line::from(spans)
}

pub fn process_row(process: &ProcessEntry) -> Line<'static> {
    Line::raw(format!(
        "{v}{pid:^pid_w$}{v}{name}{v}{cpu:^cpu_w$.1}{v}{mem:^mem_w$.1}{v}",
        v = VERTICAL,
        pid = process.pid,
        pid_w = PID_WIDTH,
        name = fit_column(&process.name, NAME_WIDTH),
        cpu = process.cpu_percent,
        cpu_w = CPU_WIDTH,
        mem = process.mem_percent,
        mem_w = MEM_WIDTH,
    ))
}

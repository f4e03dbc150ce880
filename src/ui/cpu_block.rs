use ratatui::text::{Line, Span};

use crate::format::{DEFAULT_BAR_WIDTH, create_bar, format_bytes};
use crate::system::snapshot::{MemoryStats, SystemSnapshot};
use crate::ui::theme::Theme;

const COLUMN_GAP: &str = "    ";

/// Pairs core `i` with core `i + n/2` on each row, with memory and swap
/// alongside the first two rows.
///
/// With an odd core count the last core is never shown, and with fewer than
/// two cores no rows (and so no memory or swap) are emitted.
pub fn render(snapshot: &SystemSnapshot, theme: &Theme) -> Vec<Line<'static>> {
    let resources = [
        resource_spans("Memory", &snapshot.memory),
        resource_spans("Swap", &snapshot.swap),
    ];

    let cores = &snapshot.cpu_percent;
    let mid = cores.len() / 2;

    (0..mid)
        .map(|i| {
            let mut spans = core_spans(i, cores[i], theme);
            spans.push(Span::raw(COLUMN_GAP));
            spans.extend(core_spans(i + mid, cores[i + mid], theme));
            spans.push(Span::raw(COLUMN_GAP));
            if let Some(resource) = resources.get(i) {
                spans.extend(resource.iter().cloned());
            }
            Line::from(spans)
        })
        .collect()
}

fn core_spans(index: usize, percent: f64, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("CPU{index:2}"), theme.bold()),
        Span::raw(format!(" {percent:5.1}% ")),
        create_bar(percent, DEFAULT_BAR_WIDTH),
    ]
}

fn resource_spans(label: &str, stats: &MemoryStats) -> Vec<Span<'static>> {
    vec![
        Span::raw(format!(
            "{label}: {}/{} ",
            format_bytes(stats.used),
            format_bytes(stats.total)
        )),
        create_bar(stats.percent, DEFAULT_BAR_WIDTH),
    ]
}

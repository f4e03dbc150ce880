use ratatui::style::{Color, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const DEFAULT_BAR_WIDTH: usize = 20;

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

impl Severity {
    pub fn color(self) -> Color {
        match self {
            Severity::Normal => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Critical => Color::Red,
        }
    }
}

/// Severity band for a usage percentage: below 60 is normal, below 80 a warning.
pub fn severity(percent: f64) -> Severity {
    if percent < 60.0 {
        Severity::Normal
    } else if percent < 80.0 {
        Severity::Warning
    } else {
        Severity::Critical
    }
}

/// Scales by 1024 until the value drops below 1024 or the unit reaches TB.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2}{}", BYTE_UNITS[unit])
}

pub fn bar_fill(percent: f64, width: usize) -> usize {
    let filled = (width as f64 * percent / 100.0).floor();
    if filled.is_nan() || filled <= 0.0 {
        0
    } else {
        (filled as usize).min(width)
    }
}

pub fn create_bar(percent: f64, width: usize) -> Span<'static> {
    let filled = bar_fill(percent, width);
    let text = format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled));
    Span::styled(text, Style::default().fg(severity(percent).color()))
}

/// Left-justifies `text` to `width` columns. Text wider than the column is cut to
/// `width - 3` columns and suffixed with `...`.
pub fn fit_column(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }

    let budget = width.saturating_sub(ELLIPSIS.len());
    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        result.push(ch);
        used += ch_width;
    }
    result.push_str(ELLIPSIS);
    let pad = width.saturating_sub(used + ELLIPSIS.len());
    result.push_str(&" ".repeat(pad));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bytes_zero() {
        assert_eq!(format_bytes(0), "0.00B");
    }

    #[test]
    fn format_bytes_scales_units() {
        assert_eq!(format_bytes(1023), "1023.00B");
        assert_eq!(format_bytes(1536), "1.50KB");
        assert_eq!(format_bytes(4 * 1024 * 1024 * 1024), "4.00GB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00MB");
    }

    #[test]
    fn format_bytes_stops_at_terabytes() {
        let pb = 1024u64.pow(5);
        assert_eq!(format_bytes(pb), "1024.00TB");
        assert_eq!(format_bytes(u64::MAX), "16777216.00TB");
    }

    #[test]
    fn bar_half_is_green() {
        let bar = create_bar(50.0, 20);
        assert_eq!(bar.content, format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(bar.style.fg, Some(Color::Green));
    }

    #[test]
    fn bar_thresholds() {
        assert_eq!(create_bar(59.9, 20).style.fg, Some(Color::Green));
        assert_eq!(create_bar(60.0, 20).style.fg, Some(Color::Yellow));
        assert_eq!(create_bar(70.0, 20).style.fg, Some(Color::Yellow));
        assert_eq!(create_bar(80.0, 20).style.fg, Some(Color::Red));

        let red = create_bar(90.0, 20);
        assert_eq!(red.style.fg, Some(Color::Red));
        assert_eq!(red.content.matches('#').count(), 18);
    }

    #[test]
    fn bar_clamps_out_of_range() {
        let over = create_bar(250.0, 20);
        assert_eq!(over.content.matches('#').count(), 20);
        assert_eq!(over.content.chars().count(), 22);

        let under = create_bar(-5.0, 20);
        assert_eq!(under.content.matches('-').count(), 20);

        assert_eq!(bar_fill(f64::NAN, 20), 0);
    }

    #[test]
    fn fit_column_pads_short_text() {
        assert_eq!(fit_column("foo", 6), "foo   ");
        assert_eq!(fit_column("", 3), "   ");
    }

    #[test]
    fn fit_column_exact_width_is_kept() {
        let name = "a".repeat(35);
        assert_eq!(fit_column(&name, 35), name);
    }

    #[test]
    fn fit_column_truncates_one_over() {
        let name = "b".repeat(36);
        let fitted = fit_column(&name, 35);
        assert_eq!(fitted, format!("{}...", "b".repeat(32)));
    }

    #[test]
    fn fit_column_wide_glyphs_keep_alignment() {
        let fitted = fit_column("日本語のプロセス名前", 10);
        assert_eq!(fitted.width(), 10);
        assert!(fitted.contains("..."));
    }
}

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::Line;
use wintop::system::provider::{MetricsProvider, ProcessAccessError};
use wintop::system::snapshot::{MemoryStats, ProcessEntry};
use wintop::terminal::TerminalDriver;
use wintop::ui::line_text;

pub const GB: u64 = 1024 * 1024 * 1024;

pub fn process(pid: u32, name: &str, cpu: f64, mem: f64) -> ProcessEntry {
    ProcessEntry {
        pid,
        name: name.to_string(),
        cpu_percent: cpu,
        mem_percent: mem,
    }
}

/// In-memory provider returning the same readings on every call.
pub struct FakeProvider {
    pub cores: Vec<f64>,
    pub memory: MemoryStats,
    pub swap: MemoryStats,
    pub processes: Vec<Result<ProcessEntry, ProcessAccessError>>,
    pub fail_cpu: bool,
    pub cpu_calls: usize,
}

impl Default for FakeProvider {
    fn default() -> Self {
        FakeProvider {
            cores: vec![50.0, 50.0],
            memory: MemoryStats::from_bytes(8 * GB, 4 * GB),
            swap: MemoryStats::from_bytes(2 * GB, 0),
            processes: vec![Ok(process(1, "foo", 5.0, 2.0))],
            fail_cpu: false,
            cpu_calls: 0,
        }
    }
}

impl MetricsProvider for FakeProvider {
    fn per_core_cpu_percent(&mut self) -> Result<Vec<f64>> {
        self.cpu_calls += 1;
        if self.fail_cpu {
            return Err(eyre!("cpu counters unavailable"));
        }
        Ok(self.cores.clone())
    }

    fn virtual_memory(&mut self) -> Result<MemoryStats> {
        Ok(self.memory)
    }

    fn swap_memory(&mut self) -> Result<MemoryStats> {
        Ok(self.swap)
    }

    fn enumerate_processes(&mut self) -> Result<Vec<Result<ProcessEntry, ProcessAccessError>>> {
        Ok(self.processes.clone())
    }
}

/// Driver that records every call and replays scripted key reads. Once the
/// script runs out it answers `q` so a test can never spin forever.
pub struct FakeDriver {
    pub calls: Vec<&'static str>,
    pub frames: Vec<Vec<String>>,
    pub keys: VecDeque<Option<KeyEvent>>,
    pub widths: VecDeque<u16>,
    pub width: u16,
    pub fail_write: bool,
    pub timeouts: Vec<Duration>,
}

impl Default for FakeDriver {
    fn default() -> Self {
        FakeDriver {
            calls: Vec::new(),
            frames: Vec::new(),
            keys: VecDeque::new(),
            widths: VecDeque::new(),
            width: 100,
            fail_write: false,
            timeouts: Vec::new(),
        }
    }
}

impl FakeDriver {
    pub fn with_keys(keys: impl IntoIterator<Item = Option<KeyEvent>>) -> Self {
        FakeDriver {
            keys: keys.into_iter().collect(),
            ..FakeDriver::default()
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.iter().filter(|c| **c == name).count()
    }

    pub fn released_in_order(&self) -> bool {
        let tail: Vec<&str> = self.calls.iter().rev().take(3).rev().copied().collect();
        tail == ["raw_off", "show_cursor", "exit_screen"]
    }
}

pub fn char_key(c: char) -> Option<KeyEvent> {
    Some(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

pub fn ctrl_key(c: char) -> Option<KeyEvent> {
    Some(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

impl TerminalDriver for FakeDriver {
    fn width(&mut self) -> Result<u16> {
        if let Some(next) = self.widths.pop_front() {
            self.width = next;
        }
        Ok(self.width)
    }

    fn clear_and_home(&mut self) -> Result<()> {
        self.calls.push("clear");
        Ok(())
    }

    fn write(&mut self, lines: Vec<Line<'static>>) -> Result<()> {
        self.calls.push("write");
        if self.fail_write {
            return Err(eyre!("terminal went away"));
        }
        self.frames.push(lines.iter().map(line_text).collect());
        Ok(())
    }

    fn enter_exclusive_screen(&mut self) -> Result<()> {
        self.calls.push("enter_screen");
        Ok(())
    }

    fn exit_exclusive_screen(&mut self) -> Result<()> {
        self.calls.push("exit_screen");
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.calls.push("hide_cursor");
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.calls.push("show_cursor");
        Ok(())
    }

    fn enable_raw_input(&mut self) -> Result<()> {
        self.calls.push("raw_on");
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.calls.push("raw_off");
        Ok(())
    }

    fn read_key_with_timeout(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        self.calls.push("read_key");
        self.timeouts.push(timeout);
        Ok(self.keys.pop_front().unwrap_or_else(|| char_key('q')))
    }
}

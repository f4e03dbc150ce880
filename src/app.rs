use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use crate::action::Action;
use crate::system::provider::MetricsProvider;
use crate::system::sampler::Sampler;
use crate::terminal::{TerminalDriver, TerminalSession};
use crate::ui::LayoutEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// The refresh loop: sample, render, draw, then wait for a key.
pub struct App<P> {
    sampler: Sampler<P>,
    layout: LayoutEngine,
    key_timeout: Duration,
    shutdown: Arc<AtomicBool>,
    state: LoopState,
    last_width: Option<u16>,
    frames: u64,
}

impl<P: MetricsProvider> App<P> {
    pub fn new(sampler: Sampler<P>, layout: LayoutEngine, key_timeout: Duration) -> Self {
        App {
            sampler,
            layout,
            key_timeout,
            shutdown: Arc::new(AtomicBool::new(false)),
            state: LoopState::Stopped,
            last_width: None,
            frames: 0,
        }
    }

    /// Shares a flag that, once set, stops the loop at the next key wait.
    pub fn with_shutdown_flag(mut self, shutdown: Arc<AtomicBool>) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs until `q`, Ctrl+C, the shutdown flag, or a tick error. The terminal
    /// is restored before this returns, whichever way the loop ended.
    pub fn run<D: TerminalDriver>(&mut self, driver: &mut D) -> Result<()> {
        let mut session = TerminalSession::acquire(driver)?;
        self.state = LoopState::Running;
        tracing::info!(
            refresh_ms = self.key_timeout.as_millis() as u64,
            process_limit = self.sampler.process_limit(),
            "dashboard started"
        );

        let result = self.run_loop(&mut *session);
        self.state = LoopState::Stopped;
        drop(session);

        match &result {
            Ok(()) => tracing::info!(frames = self.frames, "dashboard stopped"),
            Err(err) => tracing::error!(frames = self.frames, error = %err, "dashboard failed"),
        }
        result
    }

    fn run_loop<D: TerminalDriver>(&mut self, driver: &mut D) -> Result<()> {
        while self.state == LoopState::Running {
            if self.shutdown.load(Ordering::SeqCst) {
                self.state = LoopState::Stopped;
                break;
            }

            self.tick(driver)?;

            let key = driver
                .read_key_with_timeout(self.key_timeout)
                .wrap_err("failed to read key")?;
            if self.shutdown.load(Ordering::SeqCst) || Action::from_key(key) == Action::Quit {
                self.state = LoopState::Stopped;
            }
        }
        Ok(())
    }

    /// One frame: sample, lay out at the current width, write.
    pub fn tick<D: TerminalDriver>(&mut self, driver: &mut D) -> Result<()> {
        let snapshot = self.sampler.sample()?;
        let width = driver.width().wrap_err("failed to query terminal width")?;
        let lines = self.layout.render(&snapshot, width);

        if self.last_width != Some(width) {
            driver.clear_and_home().wrap_err("failed to clear screen")?;
            self.last_width = Some(width);
        }
        driver.write(lines).wrap_err("failed to draw frame")?;

        self.frames += 1;
        tracing::debug!(frame = self.frames, width, "frame drawn");
        Ok(())
    }
}

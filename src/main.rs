use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use wintop::app::App;
use wintop::config::{Config, load_config, load_config_from_path};
use wintop::logging;
use wintop::system::collector::SysinfoProvider;
use wintop::system::sampler::Sampler;
use wintop::terminal::{self, CrosstermDriver};
use wintop::ui::LayoutEngine;

#[derive(Parser)]
#[command(
    name = "wintop",
    about = "Terminal dashboard for CPU, memory and top processes"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Key wait between refreshes in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Number of rows in the process table
    #[arg(long)]
    processes: Option<usize>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);

    if let Some(path) = &config.logging.file {
        logging::init_file_logging(path, &config.logging.level)?;
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let signal_flag = Arc::clone(&shutdown);
    ctrlc::set_handler(move || signal_flag.store(true, Ordering::SeqCst))
        .wrap_err("failed to install termination handler")?;

    let mut driver = CrosstermDriver::new()?;
    terminal::install_panic_hook();

    let sampler = Sampler::with_process_limit(SysinfoProvider::new(), config.general.process_limit);
    let mut app = App::new(sampler, LayoutEngine::default(), config.general.refresh_rate())
        .with_shutdown_flag(shutdown);

    app.run(&mut driver)
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(limit) = cli.processes {
        config.general.process_limit = limit;
    }
    if let Some(ref path) = cli.log_file {
        config.logging.file = Some(path.clone());
    }

    config
}

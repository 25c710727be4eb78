use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use iowaittop::config::{self, load_config, load_config_from_path};
use iowaittop::display::{Display, OutputFormat};
use iowaittop::logging;
use iowaittop::monitor::Monitor;
use iowaittop::system::procfs::ProcFs;

#[derive(Parser)]
#[command(
    name = "iowaittop",
    about = "Show the processes whose I/O-wait counter grows fastest"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delay between frames in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Number of processes to show per frame
    #[arg(long)]
    top: Option<usize>,

    /// Root of the proc filesystem
    #[arg(long)]
    proc_root: Option<PathBuf>,

    /// Output format: table, json
    #[arg(long)]
    format: Option<String>,

    /// Clear the terminal before each frame
    #[arg(long, default_value_t = false)]
    clear: bool,

    /// Exit after this many frames instead of running until interrupted.
    #[arg(long)]
    iterations: Option<u64>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct Settings {
    interval: Duration,
    top_count: usize,
    proc_root: PathBuf,
    display: Display,
    iterations: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);
    logging::init_tracing(logging::level_filter(&config.log.level, cli.verbose)?)?;

    let settings = settings_from(config, cli.iterations)?;
    run(settings).await
}

async fn run(settings: Settings) -> Result<()> {
    let source = ProcFs::new(settings.proc_root.clone());
    let mut monitor = Monitor::with_top_count(source, settings.top_count);
    let mut out = stdout();
    let mut frames = 0u64;

    loop {
        let frame = monitor
            .next_frame()
            .wrap_err_with(|| format!("couldn't open {}", settings.proc_root.display()))?;

        match settings.display.show(&mut out, &frame) {
            Ok(()) => {}
            // Reader went away (e.g. piped into `head`).
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
            Err(e) => return Err(e).wrap_err("failed to write frame"),
        }

        frames += 1;
        if settings.iterations.is_some_and(|n| frames >= n) {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(settings.interval) => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!(frames, "interrupted");
                return Ok(());
            }
        }
    }
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(interval) = cli.interval_ms {
        config.general.interval_ms = interval;
    }
    if let Some(top) = cli.top {
        config.general.top_count = top;
    }
    if let Some(ref root) = cli.proc_root {
        config.general.proc_root = root.clone();
    }
    if let Some(ref format) = cli.format {
        config.display.format = format.clone();
    }
    if cli.clear {
        config.display.clear_screen = true;
    }

    config
}

fn settings_from(config: config::Config, iterations: Option<u64>) -> Result<Settings> {
    if config.general.interval_ms == 0 {
        return Err(eyre!("interval must be greater than 0"));
    }
    if config.general.top_count == 0 {
        return Err(eyre!("top count must be greater than 0"));
    }
    if iterations == Some(0) {
        return Err(eyre!("--iterations must be greater than 0"));
    }
    let format = OutputFormat::from_str_config(&config.display.format)
        .ok_or_else(|| eyre!("unknown output format `{}`", config.display.format))?;

    Ok(Settings {
        interval: Duration::from_millis(config.general.interval_ms),
        top_count: config.general.top_count,
        proc_root: config.general.proc_root,
        display: Display {
            format,
            clear_screen: config.display.clear_screen,
        },
        iterations,
    })
}

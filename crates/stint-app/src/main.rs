//! STINT - fullscreen stopwatch display
//!
//! Shows one or four large timers. Space starts/stops them, Escape quits.
//! Colors come from a semicolon-delimited `colors.csv`.

mod app;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::App;
use stint_core::StintResult;
use stint_surface::TerminalSurface;
use stint_time::RefreshCadence;

#[derive(Parser, Debug)]
#[command(name = "stint", about = "Fullscreen stopwatch display")]
struct Args {
    /// Show four independent timers, one per screen quadrant
    #[arg(long, action = clap::ArgAction::SetTrue)]
    quad: bool,

    /// Color table path
    #[arg(long, value_name = "PATH", default_value = "colors.csv")]
    colors: PathBuf,

    /// Redraw period in milliseconds
    #[arg(long, value_name = "MILLIS", default_value_t = 1)]
    period_ms: u64,
}

#[tokio::main]
async fn main() -> StintResult<()> {
    // Logs go to stderr so the alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cadence = RefreshCadence::from_millis(args.period_ms);

    let mut app = if args.quad {
        App::quad(&args.colors, cadence)?
    } else {
        App::single(&args.colors, cadence)
    };

    let mut surface = TerminalSurface::new()?;
    let commands = app::spawn_input_reader();
    app.run(&mut surface, commands).await
}

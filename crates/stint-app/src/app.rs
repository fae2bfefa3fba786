//! Application context and run loop
//!
//! All mutable display state lives in one `App` value owned by the run
//! loop. The input reader shares nothing with it; commands arrive over a
//! channel.

use std::path::Path;
use std::time::Instant;

use tokio::sync::mpsc;

use stint_core::{ClockColor, ColorLayout, Position, StintResult};
use stint_surface::{ClockFrame, Command, Frame, Surface, TerminalSurface};
use stint_time::{format_elapsed, RefreshCadence, Stopwatch};

/// Which layout the display runs, with its loaded colors
#[derive(Clone, Copy, Debug)]
enum Layout {
    Single { color: ClockColor },
    Quad { colors: ColorLayout },
}

/// Application context: the timers, their colors, and the redraw cadence
pub struct App {
    layout: Layout,
    clocks: [Stopwatch; 4],
    cadence: RefreshCadence,
}

impl App {
    /// Single-clock display; color loading never fails in this variant
    pub fn single(colors_path: &Path, cadence: RefreshCadence) -> Self {
        let color = stint_colors::load_single(colors_path);
        tracing::info!(
            "Single-clock display, background {}, foreground {}",
            color.background,
            color.foreground
        );

        App {
            layout: Layout::Single { color },
            clocks: Default::default(),
            cadence,
        }
    }

    /// Quad-clock display; a missing or invalid color file is fatal here
    pub fn quad(colors_path: &Path, cadence: RefreshCadence) -> StintResult<Self> {
        let colors = stint_colors::load_quad(colors_path)?;
        tracing::info!("Quad-clock display, colors loaded");

        Ok(App {
            layout: Layout::Quad { colors },
            clocks: Default::default(),
            cadence,
        })
    }

    fn visible(&self) -> usize {
        match self.layout {
            Layout::Single { .. } => 1,
            Layout::Quad { .. } => 4,
        }
    }

    /// Apply one input command at `now`. Returns false to leave the loop.
    fn handle(&mut self, command: Command, now: Instant) -> bool {
        match command {
            Command::ToggleTimer => {
                let visible = self.visible();
                for clock in &mut self.clocks[..visible] {
                    let state = clock.toggle(now);
                    tracing::debug!("Timer toggled: {:?}", state);
                }
                true
            }
            Command::Quit => false,
        }
    }

    /// Build the frame the surface should show at `now`
    fn frame(&self, now: Instant) -> Frame {
        match self.layout {
            Layout::Single { color } => Frame::Single(ClockFrame {
                text: format_elapsed(self.clocks[0].elapsed(now)),
                color,
            }),
            Layout::Quad { colors } => Frame::Quad(Position::ALL.map(|position| ClockFrame {
                text: format_elapsed(self.clocks[position.index()].elapsed(now)),
                color: colors.get(position),
            })),
        }
    }

    /// Drive the display until quit or input teardown
    pub async fn run(
        &mut self,
        surface: &mut impl Surface,
        mut commands: mpsc::Receiver<Command>,
    ) -> StintResult<()> {
        let mut interval = self.cadence.interval();

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    surface.draw(&self.frame(Instant::now()))?;
                }
                command = commands.recv() => {
                    match command {
                        Some(command) => {
                            if !self.handle(command, Instant::now()) {
                                break;
                            }
                        }
                        // Input reader gone; nothing can ever toggle again.
                        None => break,
                    }
                }
            }
        }

        Ok(())
    }
}

/// Start the blocking input reader
///
/// Runs on a plain detached thread: `event::read` blocks, and the process
/// exits without waiting for it.
pub fn spawn_input_reader() -> mpsc::Receiver<Command> {
    let (tx, rx) = mpsc::channel(16);

    std::thread::spawn(move || loop {
        match TerminalSurface::read_command() {
            Ok(Some(command)) => {
                if tx.blocking_send(command).is_err() || command == Command::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Input reader stopped: {}", e);
                break;
            }
        }
    });

    rx
}

//! Fullscreen terminal surface over crossterm

use std::io::{self, Stdout, Write};

use crossterm::event;
use crossterm::{
    cursor, queue,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use stint_core::{ClockColor, Rgb, StintResult};

use crate::command::{map_event, Command};
use crate::glyph;

/// One clock's contribution to a redraw
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockFrame {
    /// Formatted elapsed time, e.g. `"12.345"`
    pub text: String,
    pub color: ClockColor,
}

/// A full redraw request
///
/// The quad array is indexed by [`Position`] slot order.
///
/// [`Position`]: stint_core::Position
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    Single(ClockFrame),
    Quad([ClockFrame; 4]),
}

/// Rendering surface abstraction
///
/// The display shell only talks to this trait; the stopwatch and color
/// components never see a terminal type.
pub trait Surface {
    /// (columns, rows) of the drawable area
    fn size(&self) -> StintResult<(u16, u16)>;

    /// Draw a full frame
    fn draw(&mut self, frame: &Frame) -> StintResult<()>;
}

/// A rectangular screen area in cell coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// The whole screen as one region
pub fn full_region(size: (u16, u16)) -> Region {
    Region {
        x: 0,
        y: 0,
        width: size.0,
        height: size.1,
    }
}

/// The four screen quadrants in [`Position`] slot order
///
/// Odd columns and rows go to the right/bottom half.
///
/// [`Position`]: stint_core::Position
pub fn quadrants(size: (u16, u16)) -> [Region; 4] {
    let (cols, rows) = size;
    let left = cols / 2;
    let top = rows / 2;
    let right = cols - left;
    let bottom = rows - top;

    [
        Region { x: 0, y: 0, width: left, height: top },
        Region { x: left, y: 0, width: right, height: top },
        Region { x: 0, y: top, width: left, height: bottom },
        Region { x: left, y: top, width: right, height: bottom },
    ]
}

/// Fullscreen terminal surface
///
/// Construction switches the terminal to the alternate screen in raw mode
/// with the cursor hidden; drop restores all three.
pub struct TerminalSurface {
    out: Stdout,
}

impl TerminalSurface {
    pub fn new() -> StintResult<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        crossterm::execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(TerminalSurface { out })
    }

    /// Block until the next terminal event, translated
    ///
    /// `None` for events outside the input surface.
    pub fn read_command() -> StintResult<Option<Command>> {
        let event = event::read()?;
        Ok(map_event(&event))
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> StintResult<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn draw(&mut self, frame: &Frame) -> StintResult<()> {
        let size = terminal::size()?;

        match frame {
            Frame::Single(clock) => draw_clock(&mut self.out, full_region(size), clock)?,
            Frame::Quad(clocks) => {
                for (region, clock) in quadrants(size).iter().zip(clocks.iter()) {
                    draw_clock(&mut self.out, *region, clock)?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = crossterm::execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn to_crossterm(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn draw_clock(out: &mut Stdout, region: Region, clock: &ClockFrame) -> io::Result<()> {
    if region.width == 0 || region.height == 0 {
        return Ok(());
    }

    queue!(
        out,
        SetBackgroundColor(to_crossterm(clock.color.background)),
        SetForegroundColor(to_crossterm(clock.color.foreground)),
    )?;

    let blank = " ".repeat(region.width as usize);
    for row in 0..region.height {
        queue!(out, cursor::MoveTo(region.x, region.y + row), Print(&blank))?;
    }

    let len = clock.text.chars().count();
    let scale = glyph::fit_scale(len, region.width, region.height);
    if scale == 0 {
        // Too small for the big-digit face; plain text keeps the display alive.
        let x = region.x + region.width.saturating_sub(len as u16) / 2;
        let y = region.y + region.height / 2;
        return queue!(out, cursor::MoveTo(x, y), Print(&clock.text));
    }

    let text_width = glyph::rendered_width(len, scale) as u16;
    let lines = glyph::render_text(&clock.text, scale);
    let x = region.x + (region.width - text_width) / 2;
    let y = region.y + (region.height - lines.len() as u16) / 2;
    for (i, line) in lines.iter().enumerate() {
        queue!(out, cursor::MoveTo(x, y + i as u16), Print(line))?;
    }

    Ok(())
}

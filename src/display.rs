use std::io::Write;

use crate::error::Result;
use crate::types::DisplayPayload;

/// Receives one rendered frame per tick.
pub trait DisplaySink {
    fn show(&mut self, payload: &DisplayPayload) -> Result<()>;
}

/// Prints each frame as five text rows, followed by a blank line.
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn show(&mut self, payload: &DisplayPayload) -> Result<()> {
        for line in payload.lines() {
            writeln!(self.out, "{}", line.text)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every frame in memory.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub frames: Vec<DisplayPayload>,
}

impl DisplaySink for RecordingDisplay {
    fn show(&mut self, payload: &DisplayPayload) -> Result<()> {
        self.frames.push(payload.clone());
        Ok(())
    }
}

impl<D: DisplaySink + ?Sized> DisplaySink for &mut D {
    fn show(&mut self, payload: &DisplayPayload) -> Result<()> {
        (**self).show(payload)
    }
}

//! Text frame writer.
//!
//! [`FrameWriter`] streams frames to any `Write` sink. Each frame is a
//! `# step N` header, the grid as `'0'`/`'1'` rows, and a blank line.

use std::io::Write;

use crate::error::ReplayError;
use crate::frame::Frame;

/// Writes frames as text to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and the CLI can
/// use a `BufWriter<File>` or stdout.
///
/// # Examples
///
/// ```
/// use life_core::Grid;
/// use life_replay::{Frame, FrameWriter};
///
/// let mut grid = Grid::new(2, 2).unwrap();
/// grid.set_cell(0, 1, true).unwrap();
///
/// let mut writer = FrameWriter::new(Vec::new());
/// writer.write_frame(&Frame::capture(&grid)).unwrap();
/// assert_eq!(writer.frames_written(), 1);
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(text, "# step 0\n01\n00\n\n");
/// ```
pub struct FrameWriter<W: Write> {
    writer: W,
    frames_written: u64,
}

impl<W: Write> FrameWriter<W> {
    /// Wrap a sink. Nothing is written until the first frame.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frames_written: 0,
        }
    }

    /// Write one frame block.
    pub fn write_frame(&mut self, frame: &Frame) -> Result<(), ReplayError> {
        writeln!(self.writer, "# step {}", frame.step)?;
        self.writer.write_all(frame.grid.to_text().as_bytes())?;
        writeln!(self.writer)?;
        self.frames_written += 1;
        Ok(())
    }

    /// Write every frame in order.
    pub fn write_all(&mut self, frames: &[Frame]) -> Result<(), ReplayError> {
        for frame in frames {
            self.write_frame(frame)?;
        }
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<(), ReplayError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the writer and return the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

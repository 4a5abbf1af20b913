//! Text frame reader.
//!
//! [`FrameReader`] parses the blocks written by
//! [`FrameWriter`](crate::FrameWriter) from any `BufRead` source.

use std::io::BufRead;

use life_core::Grid;

use crate::error::ReplayError;
use crate::frame::Frame;

const HEADER_PREFIX: &str = "# step ";

/// Reads frames from a text stream.
pub struct FrameReader<R: BufRead> {
    reader: R,
    line_no: usize,
    frames_read: u64,
}

impl<R: BufRead> FrameReader<R> {
    /// Wrap a source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            frames_read: 0,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, ReplayError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_owned()))
    }

    /// Read the next frame, or `None` at end of stream.
    ///
    /// Blank lines between blocks are skipped. The frame grid's step
    /// counter is 0; the header step is kept in [`Frame::step`].
    pub fn next_frame(&mut self) -> Result<Option<Frame>, ReplayError> {
        let header = loop {
            match self.read_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
            }
        };
        let header_line = self.line_no;
        let step = header
            .strip_prefix(HEADER_PREFIX)
            .and_then(|n| n.trim().parse::<u64>().ok())
            .ok_or_else(|| ReplayError::MalformedFrame {
                line: header_line,
                detail: format!("expected `{HEADER_PREFIX}N`, found {header:?}"),
            })?;

        let mut rows = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.trim().is_empty() {
                break;
            }
            rows.push(line);
        }
        if rows.is_empty() {
            return Err(ReplayError::MalformedFrame {
                line: header_line,
                detail: format!("frame {step} has no rows"),
            });
        }

        let grid_err = |source| ReplayError::Grid { step, source };
        let width = rows[0].trim().chars().count() as u32;
        let mut grid = Grid::new(rows.len() as u32, width).map_err(grid_err)?;
        grid.load_from_text(&rows).map_err(grid_err)?;
        self.frames_read += 1;
        Ok(Some(Frame::new(step, grid)))
    }

    /// Read every remaining frame.
    pub fn read_all(&mut self) -> Result<Vec<Frame>, ReplayError> {
        let mut frames = Vec::new();
        while let Some(frame) = self.next_frame()? {
            frames.push(frame);
        }
        Ok(frames)
    }

    /// Number of frames read so far.
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }
}

use std::io::{self, Write};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Destination des rangées émises par `LinePrinter::flush`.
///
/// Une rangée = une ligne de texte, de haut en bas.
///
/// # Example
/// ```
/// use br_render::sink::LineSink;
/// let mut lines: Vec<String> = Vec::new();
/// lines.emit_line("o...o.").unwrap();
/// assert_eq!(lines, vec!["o...o.".to_string()]);
/// ```
pub trait LineSink {
    /// Emit one row.
    ///
    /// # Errors
    /// Returns an error if the underlying output fails.
    fn emit_line(&mut self, line: &str) -> io::Result<()>;
}

impl LineSink for Vec<String> {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_owned());
        Ok(())
    }
}

/// Writes each row followed by `\n` to any `io::Write`.
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{line}")
    }
}

/// Écrit les rangées directement dans une zone d'un `ratatui::Buffer`.
///
/// Les rangées et colonnes hors de `area` sont tronquées.
///
/// # Example
/// ```
/// use br_render::sink::{BufferSink, LineSink};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 4, 1);
/// let mut buf = Buffer::empty(area);
/// BufferSink::new(&mut buf, area).emit_line("o.o.").unwrap();
/// assert_eq!(buf.cell((2, 0)).map(|c| c.symbol()), Some("o"));
/// ```
pub struct BufferSink<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    row: u16,
}

impl<'a> BufferSink<'a> {
    /// Start writing at the top-left corner of `area`.
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area, row: 0 }
    }
}

impl LineSink for BufferSink<'_> {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        if self.row >= self.area.height {
            return Ok(());
        }
        let y = self.area.y + self.row;
        for (cx, ch) in (0..self.area.width).zip(line.chars()) {
            if let Some(cell) = self.buf.cell_mut((self.area.x + cx, y)) {
                cell.set_char(ch);
            }
        }
        self.row += 1;
        Ok(())
    }
}

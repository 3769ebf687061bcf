use std::io;

use br_core::config::total_width;
use br_core::error::CoreError;
use br_core::grid::CharGrid;
use br_core::traits::Font;

use crate::sink::LineSink;

/// Imprimante de ligne Braille.
///
/// Les caractères sont écrits dans un buffer de `height × total_width`
/// symboles, séparés par `spacing` colonnes de fond. Un caractère qui ne
/// tient plus dans la ligne est ignoré (pas de retour à la ligne
/// automatique). `flush` émet les rangées puis vide le buffer.
///
/// # Example
/// ```
/// use br_braille::BrailleFont;
/// use br_core::pattern::BrailleEncoder;
/// use br_render::printer::LinePrinter;
///
/// let font = BrailleFont::new(3, 2, 'o', '.', &BrailleEncoder);
/// let mut printer = LinePrinter::new(font, 2, 1).unwrap();
/// printer.write_string("hi");
/// let mut out: Vec<String> = Vec::new();
/// printer.flush(&mut out).unwrap();
/// assert_eq!(out, vec!["o...o", "oo.o.", "....."]);
/// ```
pub struct LinePrinter<F: Font> {
    font: F,
    buffer: CharGrid,
    line_length: usize,
    spacing: usize,
    background: char,
    cursor: usize,
}

impl<F: Font> LinePrinter<F> {
    /// Create a printer holding up to `line_length` characters.
    ///
    /// The background defaults to the font's space symbol.
    /// A `line_length` of 0 is raised to 1.
    ///
    /// # Errors
    /// Returns `CoreError::Config` if the buffer size overflows a `usize`.
    pub fn new(font: F, line_length: usize, spacing: usize) -> Result<Self, CoreError> {
        let line_length = line_length.max(1);
        let background = font.space_symbol();
        let buffer = total_width(line_length, font.width(), spacing)
            .and_then(|width| CharGrid::try_new(width, font.height(), background))
            .ok_or_else(|| {
                CoreError::Config(format!(
                    "buffer de ligne trop grand : {line_length} cellules, espacement {spacing}"
                ))
            })?;
        Ok(Self {
            font,
            buffer,
            line_length,
            spacing,
            background,
            cursor: 0,
        })
    }

    /// Utiliser `background` pour le fond du buffer (espacements inclus).
    #[must_use]
    pub fn with_background(mut self, background: char) -> Self {
        self.background = background;
        self.clear();
        self
    }

    /// Column where the previous cell ends: `0` for an empty line,
    /// otherwise `cursor·width + (cursor−1)·spacing`.
    #[inline]
    #[must_use]
    pub fn compute_offset(&self, cursor: usize) -> usize {
        if cursor == 0 {
            0
        } else {
            cursor * self.font.width() + (cursor - 1) * self.spacing
        }
    }

    /// True if one more character fits in the line.
    #[must_use]
    pub fn can_write(&self) -> bool {
        self.cursor == 0
            || self.compute_offset(self.cursor) + self.spacing + self.font.width()
                <= self.buffer.width
    }

    /// Write one character at the cursor. Dropped silently on overflow.
    pub fn write_character(&mut self, ch: char) {
        if !self.can_write() {
            log::trace!("Ligne pleine ({} car.), '{ch}' ignoré", self.line_length);
            return;
        }
        let start = if self.cursor == 0 {
            0
        } else {
            self.compute_offset(self.cursor) + self.spacing
        };
        self.buffer.blit(start, self.font.bitmap(ch));
        self.cursor += 1;
    }

    /// Write every character of `text` in order.
    ///
    /// Characters written before an overflow are kept.
    pub fn write_string(&mut self, text: &str) {
        for ch in text.chars() {
            self.write_character(ch);
        }
    }

    /// Emit each buffer row to `sink`, top to bottom, then clear the buffer.
    ///
    /// The buffer is cleared even if the sink fails.
    ///
    /// # Errors
    /// Returns the first error reported by the sink.
    pub fn flush<S: LineSink + ?Sized>(&mut self, sink: &mut S) -> io::Result<()> {
        let rows = self.buffer.rows();
        self.clear();
        for row in &rows {
            sink.emit_line(row)?;
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.buffer.fill(self.background);
        self.cursor = 0;
    }

    /// Characters written since the last flush.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Capacity of the line in characters.
    #[must_use]
    pub fn line_length(&self) -> usize {
        self.line_length
    }

    /// Width of the buffer in columns.
    #[must_use]
    pub fn total_width(&self) -> usize {
        self.buffer.width
    }

    /// Current buffer content.
    #[must_use]
    pub fn buffer(&self) -> &CharGrid {
        &self.buffer
    }

    /// The font used for rendering.
    pub fn font(&self) -> &F {
        &self.font
    }
}

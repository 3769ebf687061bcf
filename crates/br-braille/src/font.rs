use br_core::grid::CharGrid;
use br_core::pattern::DotPattern;
use br_core::traits::{Encoder, Font};

/// Police Braille monospace : un bitmap pré-calculé par lettre a–z,
/// plus un bitmap vide pour l'espace et tout caractère non-lettre.
///
/// Les bitmaps sont construits une fois et ne sont jamais modifiés ;
/// la police peut être partagée entre threads (`Arc<BrailleFont>`).
///
/// # Example
/// ```
/// use br_braille::font::BrailleFont;
/// use br_core::pattern::BrailleEncoder;
/// use br_core::traits::Font;
///
/// let font = BrailleFont::new(3, 2, 'o', '.', &BrailleEncoder);
/// assert_eq!(font.bitmap('h').rows(), vec!["o.", "oo", ".."]);
/// assert_eq!(font.bitmap('!').rows(), vec!["..", "..", ".."]);
/// ```
#[derive(Clone, Debug)]
pub struct BrailleFont {
    letters: Vec<CharGrid>,
    blank: CharGrid,
    height: usize,
    width: usize,
    dot_symbol: char,
    space_symbol: char,
}

impl BrailleFont {
    /// Build the font for `height × width` cells.
    ///
    /// Dots outside the top-left 3×2 footprint do not exist; extra rows and
    /// columns are filled with `space_symbol`. Cells smaller than 3×2
    /// silently lose the dots that do not fit.
    #[must_use]
    pub fn new<E: Encoder + ?Sized>(
        height: usize,
        width: usize,
        dot_symbol: char,
        space_symbol: char,
        encoder: &E,
    ) -> Self {
        let letters = ('a'..='z')
            .map(|ch| {
                expand_pattern(
                    encoder.to_pattern(ch),
                    height,
                    width,
                    dot_symbol,
                    space_symbol,
                )
            })
            .collect();
        log::debug!("Police Braille {height}×{width} construite ('{dot_symbol}'/'{space_symbol}')");
        Self {
            letters,
            blank: CharGrid::new(width, height, space_symbol),
            height,
            width,
            dot_symbol,
            space_symbol,
        }
    }

    /// Build a font from the font fields of a configuration.
    #[must_use]
    pub fn from_config<E: Encoder + ?Sized>(config: &br_core::BrailleConfig, encoder: &E) -> Self {
        Self::new(
            config.cell_height,
            config.cell_width,
            config.dot_symbol,
            config.space_symbol,
            encoder,
        )
    }

    /// Symbol used for raised dots.
    #[must_use]
    pub fn dot_symbol(&self) -> char {
        self.dot_symbol
    }

    /// Bitmap used for space and non-letters.
    #[must_use]
    pub fn blank(&self) -> &CharGrid {
        &self.blank
    }
}

/// Expand a pattern into a `height × width` bitmap, bit i at (i mod 3, i div 3).
fn expand_pattern(
    pattern: DotPattern,
    height: usize,
    width: usize,
    dot_symbol: char,
    space_symbol: char,
) -> CharGrid {
    let mut grid = CharGrid::new(width, height, space_symbol);
    for bit in 0..DotPattern::DOTS {
        let (row, col) = DotPattern::position(bit);
        if pattern.is_set(bit) {
            // set() ignore les positions hors grille (cellules < 3×2).
            grid.set(col, row, dot_symbol);
        }
    }
    grid
}

impl Font for BrailleFont {
    #[inline]
    fn bitmap(&self, ch: char) -> &CharGrid {
        if ch.is_ascii_alphabetic() {
            &self.letters[(ch.to_ascii_lowercase() as u8 - b'a') as usize]
        } else {
            &self.blank
        }
    }

    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    fn space_symbol(&self) -> char {
        self.space_symbol
    }
}

use br_core::grid::CharGrid;
use br_core::pattern::DotPattern;
use br_core::traits::{Decoder, Encoder};
use br_core::{CELL_HEIGHT, CELL_WIDTH};

use crate::tree::{SymbolNode, SymbolTree};

/// Décodeur de bitmaps 3×2 vers ASCII, via le `SymbolTree`.
///
/// Un motif absent de l'arbre donne un espace : « espace » et « inconnu »
/// ne sont pas distingués. Un bitmap de mauvaise forme donne `None`.
///
/// # Example
/// ```
/// use br_braille::decoder::BrailleDecoder;
/// use br_core::grid::CharGrid;
/// use br_core::pattern::BrailleEncoder;
/// use br_core::traits::Decoder;
///
/// let decoder = BrailleDecoder::new(&BrailleEncoder);
/// let h = CharGrid::from_rows(&["o.", "oo", ".."]).unwrap();
/// assert_eq!(decoder.decode_bitmap(Some(&h), 'o'), Some('h'));
/// assert_eq!(decoder.decode_bitmap(None, 'o'), None);
/// ```
#[derive(Clone, Debug)]
pub struct BrailleDecoder {
    tree: SymbolTree,
}

impl BrailleDecoder {
    /// Build the decoder and its symbol tree from `encoder`.
    #[must_use]
    pub fn new<E: Encoder + ?Sized>(encoder: &E) -> Self {
        Self {
            tree: SymbolTree::build(encoder),
        }
    }

    /// The tree used for lookups.
    #[must_use]
    pub fn tree(&self) -> &SymbolTree {
        &self.tree
    }

    /// Read the 6-bit pattern of a 3×2 bitmap.
    ///
    /// Returns `None` if the bitmap is not exactly 3×2.
    #[must_use]
    pub fn extract_pattern(bitmap: &CharGrid, dot_symbol: char) -> Option<DotPattern> {
        if bitmap.height != CELL_HEIGHT || bitmap.width != CELL_WIDTH {
            return None;
        }
        let pattern = (0..DotPattern::DOTS).fold(DotPattern::EMPTY, |acc, bit| {
            let (row, col) = DotPattern::position(bit);
            if bitmap.get(col, row) == Some(dot_symbol) {
                acc.with(bit)
            } else {
                acc
            }
        });
        Some(pattern)
    }
}

impl Decoder for BrailleDecoder {
    fn decode_bitmap(&self, bitmap: Option<&CharGrid>, dot_symbol: char) -> Option<char> {
        let pattern = Self::extract_pattern(bitmap?, dot_symbol)?;
        Some(
            self.tree
                .lookup(pattern)
                .and_then(SymbolNode::symbol)
                .unwrap_or(' '),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BrailleFont;
    use br_core::pattern::BrailleEncoder;
    use br_core::traits::Font;

    #[test]
    fn decodes_every_font_letter() {
        let font = BrailleFont::new(3, 2, 'o', '.', &BrailleEncoder);
        let decoder = BrailleDecoder::new(&BrailleEncoder);
        for ch in 'a'..='z' {
            assert_eq!(decoder.decode_bitmap(Some(font.bitmap(ch)), 'o'), Some(ch));
        }
    }

    #[test]
    fn blank_bitmap_is_space() {
        let font = BrailleFont::new(3, 2, 'o', '.', &BrailleEncoder);
        let decoder = BrailleDecoder::new(&BrailleEncoder);
        assert_eq!(decoder.decode_bitmap(Some(font.blank()), 'o'), Some(' '));
    }

    #[test]
    fn unknown_pattern_decodes_as_space() {
        let decoder = BrailleDecoder::new(&BrailleEncoder);
        let full = CharGrid::new(2, 3, 'o');
        assert_eq!(decoder.decode_bitmap(Some(&full), 'o'), Some(' '));
    }

    #[test]
    fn wrong_shape_is_invalid() {
        let decoder = BrailleDecoder::new(&BrailleEncoder);
        let wide = CharGrid::new(3, 3, '.');
        let short = CharGrid::new(2, 2, '.');
        assert_eq!(decoder.decode_bitmap(Some(&wide), 'o'), None);
        assert_eq!(decoder.decode_bitmap(Some(&short), 'o'), None);
    }

    #[test]
    fn dot_symbol_is_configurable() {
        let decoder = BrailleDecoder::new(&BrailleEncoder);
        let e = CharGrid::from_rows(&["# ", " #", "  "]).unwrap();
        assert_eq!(decoder.decode_bitmap(Some(&e), '#'), Some('e'));
        // Avec un autre symbole, aucun point n'est levé.
        assert_eq!(decoder.decode_bitmap(Some(&e), 'o'), Some(' '));
    }
}

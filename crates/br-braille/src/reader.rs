//! Lecture de lignes Braille scannées.
//!
//! Une ligne scannée = 3 rangées de texte de même longueur. Les cellules
//! sont découpées avec la même géométrie que l'imprimante :
//! cellule n en colonne `n·(2 + spacing)`.

use rayon::prelude::*;

use br_core::grid::CharGrid;
use br_core::traits::Decoder;
use br_core::{CELL_HEIGHT, CELL_WIDTH};

use crate::decoder::BrailleDecoder;

/// Traduit des lignes scannées en texte ASCII.
///
/// # Example
/// ```
/// use br_braille::{BrailleDecoder, BrailleReader};
/// use br_core::pattern::BrailleEncoder;
///
/// let reader = BrailleReader::new(BrailleDecoder::new(&BrailleEncoder));
/// let scan = ["o. .o", "oo o.", ".. .."];
/// assert_eq!(reader.translate_line(&scan, 'o', 1), "hi");
/// assert_eq!(reader.translate_line(&scan[..2], 'o', 1), "");
/// ```
#[derive(Clone, Debug)]
pub struct BrailleReader<D: Decoder = BrailleDecoder> {
    decoder: D,
}

impl<D: Decoder> BrailleReader<D> {
    /// Wrap a decoder.
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// The wrapped decoder.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Extract the 3×2 bitmap of cell `position`.
    ///
    /// Returns `None` if there are not exactly 3 scan lines or the cell
    /// runs past the end of the shortest line.
    pub fn extract_character<S: AsRef<str>>(
        &self,
        position: usize,
        spacing: usize,
        scan_lines: &[S],
    ) -> Option<CharGrid> {
        if scan_lines.len() != CELL_HEIGHT {
            return None;
        }
        let rows = split_rows(scan_lines);
        slice_cell(&rows, position, spacing)
    }

    /// Decode one scanned line, left to right.
    ///
    /// Wrong row count, or a spacing so large the geometry overflows,
    /// gives an empty string. Each cell is decoded independently; a cell
    /// that cannot be sliced is skipped.
    pub fn translate_line<S: AsRef<str>>(
        &self,
        scan_lines: &[S],
        dot_symbol: char,
        spacing: usize,
    ) -> String {
        if scan_lines.len() != CELL_HEIGHT {
            return String::new();
        }
        let rows = split_rows(scan_lines);
        let (Some(span), Some(stride)) = (
            row_len(&rows).checked_add(spacing),
            CELL_WIDTH.checked_add(spacing),
        ) else {
            return String::new();
        };
        (0..span / stride)
            .filter_map(|position| {
                let cell = slice_cell(&rows, position, spacing);
                self.decoder.decode_bitmap(cell.as_ref(), dot_symbol)
            })
            .collect()
    }

    /// Decode consecutive 3-row blocks in parallel, one string per block.
    ///
    /// A trailing block with fewer than 3 rows yields an empty string.
    pub fn translate_page<S: AsRef<str> + Sync>(
        &self,
        lines: &[S],
        dot_symbol: char,
        spacing: usize,
    ) -> Vec<String> {
        lines
            .par_chunks(CELL_HEIGHT)
            .map(|block| {
                if block.len() != CELL_HEIGHT {
                    log::warn!(
                        "Bloc incomplet ignoré : {} rangée(s) au lieu de {CELL_HEIGHT}",
                        block.len()
                    );
                }
                self.translate_line(block, dot_symbol, spacing)
            })
            .collect()
    }
}

fn split_rows<S: AsRef<str>>(scan_lines: &[S]) -> Vec<Vec<char>> {
    scan_lines
        .iter()
        .map(|line| line.as_ref().chars().collect())
        .collect()
}

fn row_len(rows: &[Vec<char>]) -> usize {
    rows.iter().map(Vec::len).min().unwrap_or(0)
}

fn slice_cell(rows: &[Vec<char>], position: usize, spacing: usize) -> Option<CharGrid> {
    let index = if position == 0 {
        0
    } else {
        position.checked_mul(CELL_WIDTH.checked_add(spacing)?)?
    };
    if index.checked_add(CELL_WIDTH)? > row_len(rows) {
        return None;
    }
    let mut cell = CharGrid::new(CELL_WIDTH, CELL_HEIGHT, ' ');
    for (y, row) in rows.iter().enumerate() {
        for x in 0..CELL_WIDTH {
            cell.set(x, y, row[index + x]);
        }
    }
    Some(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use br_core::pattern::BrailleEncoder;

    fn reader() -> BrailleReader {
        BrailleReader::new(BrailleDecoder::new(&BrailleEncoder))
    }

    #[test]
    fn decodes_hi_with_single_spacing() {
        let scan = ["o. .o", "oo o.", ".. .."];
        assert_eq!(reader().translate_line(&scan, 'o', 1), "hi");
    }

    #[test]
    fn two_rows_give_empty_output() {
        let scan = ["o. .o", "oo o."];
        assert_eq!(reader().translate_line(&scan, 'o', 1), "");
        assert!(reader().extract_character(0, 1, &scan).is_none());
    }

    #[test]
    fn extract_out_of_range_is_none() {
        let scan = ["o. .o", "oo o.", ".. .."];
        assert!(reader().extract_character(2, 1, &scan).is_none());
        let cell = reader().extract_character(1, 1, &scan).unwrap();
        assert_eq!(cell.rows(), vec![".o", "o.", ".."]);
    }

    #[test]
    fn blank_cells_and_trailing_partial_cell() {
        // "a", espace, puis une colonne isolée qui ne forme pas de cellule.
        let scan = ["o.   ..  o", "..   ..  .", "..   ..  ."];
        assert_eq!(reader().translate_line(&scan, 'o', 3), "a ");
    }

    #[test]
    fn empty_rows_decode_to_nothing() {
        let scan = ["", "", ""];
        assert_eq!(reader().translate_line(&scan, 'o', 4), "");
    }

    #[test]
    fn huge_position_or_spacing_is_absent() {
        let scan = ["o. .o", "oo o.", ".. .."];
        let r = reader();
        assert!(r.extract_character(usize::MAX / 3, 1, &scan).is_none());
        assert!(r.extract_character(1, usize::MAX, &scan).is_none());
        assert!(r.extract_character(usize::MAX, usize::MAX - 1, &scan).is_none());
        // La première cellule ne dépend pas de l'espacement.
        let first = r.extract_character(0, usize::MAX, &scan).unwrap();
        assert_eq!(first.rows(), vec!["o.", "oo", ".."]);
        assert_eq!(r.translate_line(&scan, 'o', usize::MAX), "");
        assert_eq!(r.translate_line(&scan, 'o', usize::MAX - 1), "");
    }

    #[test]
    fn decoder_is_shared_with_reader() {
        let r = reader();
        assert_eq!(r.decoder().tree().len(), 27);
    }

    #[test]
    fn page_is_split_into_blocks() {
        let page = [
            "o. .o", "oo o.", ".. ..", // hi
            "o.", "..", "..", // a
            "oo",
        ];
        let out = reader().translate_page(&page, 'o', 1);
        assert_eq!(out, vec!["hi".to_string(), "a".to_string(), String::new()]);
    }
}

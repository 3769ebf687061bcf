//! Encodage 6 points des lettres a–z.
//!
//! Numérotation des points (column-major) et bit correspondant :
//! +---+---+
//! | 1 | 4 |
//! +---+---+
//! | 2 | 5 |
//! +---+---+
//! | 3 | 6 |
//! +---+---+
//!
//! Le point n occupe le bit n-1 : colonne gauche = bits 0..2, colonne
//! droite = bits 3..5.

use crate::traits::Encoder;
use crate::{CELL_HEIGHT, CELL_WIDTH};

/// Braille base codepoint (U+2800).
const BRAILLE_BASE: u32 = 0x2800;

/// Standard Braille grade-1 alphabet, indexed by `letter - 'a'`.
const LETTER_PATTERNS: [u8; 26] = [
    0b00_0001, // a: 1
    0b00_0011, // b: 1 2
    0b00_1001, // c: 1 4
    0b01_1001, // d: 1 4 5
    0b01_0001, // e: 1 5
    0b00_1011, // f: 1 2 4
    0b01_1011, // g: 1 2 4 5
    0b01_0011, // h: 1 2 5
    0b00_1010, // i: 2 4
    0b01_1010, // j: 2 4 5
    0b00_0101, // k: 1 3
    0b00_0111, // l: 1 2 3
    0b00_1101, // m: 1 3 4
    0b01_1101, // n: 1 3 4 5
    0b01_0101, // o: 1 3 5
    0b00_1111, // p: 1 2 3 4
    0b01_1111, // q: 1 2 3 4 5
    0b01_0111, // r: 1 2 3 5
    0b00_1110, // s: 2 3 4
    0b01_1110, // t: 2 3 4 5
    0b10_0101, // u: 1 3 6
    0b10_0111, // v: 1 2 3 6
    0b11_1010, // w: 2 4 5 6
    0b10_1101, // x: 1 3 4 6
    0b11_1101, // y: 1 3 4 5 6
    0b11_0101, // z: 1 3 5 6
];

/// Un motif 6 points. Seuls les bits 0..5 sont significatifs.
///
/// # Example
/// ```
/// use br_core::pattern::DotPattern;
/// let p = DotPattern::from_bits(0b01_0011);
/// assert!(p.is_set(0));
/// assert!(!p.is_set(2));
/// assert_eq!(DotPattern::position(4), (1, 1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DotPattern(u8);

impl DotPattern {
    /// Number of dots in a cell.
    pub const DOTS: usize = CELL_HEIGHT * CELL_WIDTH;

    /// All dots flat. Encodes the space character.
    pub const EMPTY: Self = Self(0);

    const MASK: u8 = (1 << Self::DOTS) - 1;

    /// Build from raw bits; bits above 5 are discarded.
    #[inline(always)]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// Raw 6-bit value.
    #[inline(always)]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if dot `index` (0-based bit index) is raised.
    #[inline(always)]
    #[must_use]
    pub const fn is_set(self, index: usize) -> bool {
        index < Self::DOTS && (self.0 >> index) & 1 == 1
    }

    /// Returns a copy with dot `index` raised.
    #[inline(always)]
    #[must_use]
    pub const fn with(self, index: usize) -> Self {
        if index < Self::DOTS {
            Self(self.0 | (1 << index))
        } else {
            self
        }
    }

    /// Position `(row, column)` of bit `index` inside the 3×2 cell.
    #[inline(always)]
    #[must_use]
    pub const fn position(index: usize) -> (usize, usize) {
        (index % CELL_HEIGHT, index / CELL_HEIGHT)
    }

    /// Caractère Unicode Braille (U+2800 + bits) pour ce motif.
    ///
    /// # Example
    /// ```
    /// use br_core::pattern::DotPattern;
    /// assert_eq!(DotPattern::EMPTY.to_unicode(), '\u{2800}');
    /// assert_eq!(DotPattern::from_bits(0b11_1111).to_unicode(), '\u{283F}');
    /// ```
    #[must_use]
    pub const fn to_unicode(self) -> char {
        match char::from_u32(BRAILLE_BASE + self.0 as u32) {
            Some(c) => c,
            None => ' ',
        }
    }
}

/// Encodeur de l'alphabet Braille standard (lettres minuscules).
///
/// Les majuscules sont normalisées en minuscules. Tout autre caractère
/// est encodé comme un espace (`DotPattern::EMPTY`).
///
/// # Example
/// ```
/// use br_core::pattern::{BrailleEncoder, DotPattern};
/// use br_core::traits::Encoder;
/// let enc = BrailleEncoder;
/// assert_eq!(enc.to_pattern('a'), DotPattern::from_bits(0b1));
/// assert_eq!(enc.to_pattern('A'), enc.to_pattern('a'));
/// assert_eq!(enc.to_pattern(' '), DotPattern::EMPTY);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BrailleEncoder;

impl Encoder for BrailleEncoder {
    #[inline(always)]
    fn to_pattern(&self, ch: char) -> DotPattern {
        if ch.is_ascii_alphabetic() {
            let idx = (ch.to_ascii_lowercase() as u8 - b'a') as usize;
            DotPattern::from_bits(LETTER_PATTERNS[idx])
        } else {
            DotPattern::EMPTY
        }
    }
}

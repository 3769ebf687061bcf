use std::sync::Arc;

use crate::grid::CharGrid;
use crate::pattern::DotPattern;

/// Associe un caractère ASCII à son motif 6 points.
///
/// Implémenté par : `BrailleEncoder`.
///
/// # Example
/// ```
/// use br_core::traits::Encoder;
/// use br_core::pattern::DotPattern;
///
/// struct AllFlat;
/// impl Encoder for AllFlat {
///     fn to_pattern(&self, _ch: char) -> DotPattern { DotPattern::EMPTY }
/// }
/// ```
pub trait Encoder: Send + Sync {
    /// Motif canonique de `ch`. Pur, sans effet de bord.
    fn to_pattern(&self, ch: char) -> DotPattern;
}

/// Fournit le bitmap imprimable de chaque caractère. Police monospace.
///
/// Implémenté par : `BrailleFont`.
pub trait Font: Send + Sync {
    /// Bitmap de `ch`. Les non-lettres retournent le bitmap vide.
    fn bitmap(&self, ch: char) -> &CharGrid;

    /// Number of rows of every bitmap.
    fn height(&self) -> usize;

    /// Number of columns of every bitmap.
    fn width(&self) -> usize;

    /// Symbol used for flat dots and blank cells.
    fn space_symbol(&self) -> char;
}

impl<F: Font + ?Sized> Font for Arc<F> {
    fn bitmap(&self, ch: char) -> &CharGrid {
        (**self).bitmap(ch)
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn width(&self) -> usize {
        (**self).width()
    }

    fn space_symbol(&self) -> char {
        (**self).space_symbol()
    }
}

/// Décode un bitmap scanné en caractère ASCII.
///
/// # Example
/// ```
/// use br_core::traits::Decoder;
/// use br_core::grid::CharGrid;
///
/// struct Blind;
/// impl Decoder for Blind {
///     fn decode_bitmap(&self, bitmap: Option<&CharGrid>, _dot: char) -> Option<char> {
///         bitmap.map(|_| ' ')
///     }
/// }
/// assert_eq!(Blind.decode_bitmap(None, 'o'), None);
/// ```
pub trait Decoder: Send + Sync {
    /// `None` si le bitmap est absent ou de forme invalide.
    /// `Some(' ')` pour un motif inconnu.
    fn decode_bitmap(&self, bitmap: Option<&CharGrid>, dot_symbol: char) -> Option<char>;
}

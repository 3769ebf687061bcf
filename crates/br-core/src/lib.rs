/// Types, traits, and configuration shared across the brailline workspace.
///
/// This crate holds the 6-dot pattern encoding, the symbol grid used for
/// character bitmaps and line buffers, and the TOML configuration layer.

pub mod config;
pub mod error;
pub mod grid;
pub mod pattern;
pub mod traits;

pub use config::BrailleConfig;
pub use error::CoreError;
pub use grid::CharGrid;
pub use pattern::{BrailleEncoder, DotPattern};
pub use traits::{Decoder, Encoder, Font};

/// Hauteur standard d'une cellule Braille 6 points.
pub const CELL_HEIGHT: usize = 3;

/// Largeur standard d'une cellule Braille 6 points.
pub const CELL_WIDTH: usize = 2;

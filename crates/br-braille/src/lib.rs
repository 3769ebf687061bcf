/// Braille transcoding engine for brailline.
///
/// Encode path: `font` expands dot patterns into printable bitmaps.
/// Decode path: `tree`, `decoder` and `reader` turn scan lines back into text.
pub mod decoder;
pub mod font;
pub mod reader;
pub mod tree;

pub use decoder::BrailleDecoder;
pub use font::BrailleFont;
pub use reader::BrailleReader;
pub use tree::{SymbolNode, SymbolTree};

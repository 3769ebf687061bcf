/// Line printing for brailline.
///
/// Lays out Braille bitmaps into a fixed-width line buffer and flushes
/// its rows to a `LineSink` (stdout, memory, or a ratatui buffer).
pub mod printer;
pub mod sink;

pub use printer::LinePrinter;
pub use sink::{BufferSink, LineSink, WriterSink};

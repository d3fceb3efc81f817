// Core module - Column formatter and help page rendering
pub mod branding;
pub mod formatter;
pub mod page;
pub mod paint;
pub mod registry;

pub use formatter::{render_records, Cursor, MissingOption, Record};
pub use page::HelpPage;
pub use paint::{AnsiPainter, Paint, PlainPainter, Tone};
pub use registry::{Command, COMMANDS};

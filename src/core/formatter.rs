//! Column formatter
//!
//! A small string builder that tracks the current column and row so that
//! fields can be padded out to fixed, 1-based tab-stops. Fields that are
//! already past a stop are left as they are: nothing is truncated and the
//! next field simply follows.

use std::fmt;

use crate::core::paint::{Fragment, Paint, Tone};
use crate::domain::config::TabStops;

const SPACE: char = ' ';
const NEWLINE: char = '\n';

/// Placeholder written between brackets for a record without an option
pub const MISSING_OPTION_LITERAL: &str = "null";

/// Formatting state for a single render pass
#[derive(Debug, Default, Clone)]
pub struct Cursor {
    buffer: String,
    column: usize,
    row: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text, advancing the column by its length in characters
    pub fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.advance(text);
    }

    /// Append text painted with `tone`.
    ///
    /// Only the visible text counts towards the column.
    pub fn append_styled(&mut self, text: &str, tone: Tone, painter: &dyn Paint) {
        self.buffer.push_str(&painter.paint(text, tone));
        self.advance(text);
    }

    pub fn append_fragment(&mut self, fragment: &Fragment, painter: &dyn Paint) {
        match *fragment {
            Fragment::Plain(text) => self.append(text),
            Fragment::Styled(text, tone) => self.append_styled(text, tone, painter),
        }
    }

    /// Pad with spaces so the next append starts at 1-based column `target`.
    ///
    /// Appends nothing when the cursor is already at or past that column.
    pub fn pad_to_column(&mut self, target: usize) {
        let width = target.saturating_sub(1).saturating_sub(self.column);
        self.buffer.extend(std::iter::repeat(SPACE).take(width));
        self.column += width;
    }

    pub fn newline(&mut self) {
        self.buffer.push(NEWLINE);
        self.column = 0;
        self.row += 1;
    }

    /// The accumulated text
    pub fn render(&self) -> String {
        self.buffer.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Characters emitted on the current line
    pub fn column(&self) -> usize {
        self.column
    }

    /// Newlines emitted so far
    pub fn row(&self) -> usize {
        self.row
    }

    fn advance(&mut self, text: &str) {
        match text.rfind(NEWLINE) {
            Some(last) => {
                self.row += text.matches(NEWLINE).count();
                self.column = text[last + 1..].chars().count();
            }
            None => self.column += text.chars().count(),
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

/// One row of help text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub name: &'a str,
    pub option: Option<&'a str>,
    pub description: &'a str,
}

impl<'a> Record<'a> {
    pub fn new(name: &'a str, option: Option<&'a str>, description: &'a str) -> Self {
        Self {
            name,
            option,
            description,
        }
    }
}

/// How a record without an option fills its option field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingOption {
    /// `[null]`, as the command listing has always printed it
    #[default]
    Literal,
    /// No bracket field at all
    Blank,
}

/// Write one record at the given tab-stops, without the line break
pub fn write_record(
    cursor: &mut Cursor,
    record: &Record<'_>,
    stops: &TabStops,
    missing: MissingOption,
) {
    cursor.append(&SPACE.to_string().repeat(stops.indent));
    cursor.append(record.name);

    let option = match (record.option, missing) {
        (Some(option), _) => Some(option),
        (None, MissingOption::Literal) => Some(MISSING_OPTION_LITERAL),
        (None, MissingOption::Blank) => None,
    };
    if let Some(option) = option {
        cursor.pad_to_column(stops.option_column);
        cursor.append(&format!("[{}]", option));
    }

    cursor.pad_to_column(stops.description_column);
    cursor.append(record.description);
}

/// Write every record in order, one line each
pub fn write_records<'a, I>(cursor: &mut Cursor, records: I, stops: &TabStops, missing: MissingOption)
where
    I: IntoIterator<Item = Record<'a>>,
{
    for record in records {
        write_record(cursor, &record, stops, missing);
        cursor.newline();
    }
}

/// Render records into a fresh text block
pub fn render_records<'a, I>(records: I, stops: &TabStops, missing: MissingOption) -> String
where
    I: IntoIterator<Item = Record<'a>>,
{
    let mut cursor = Cursor::new();
    write_records(&mut cursor, records, stops, missing);
    tracing::debug!(rows = cursor.row(), "rendered command records");
    cursor.into_string()
}

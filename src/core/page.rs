//! Full help page
//!
//! Lays the registry out through the column formatter: usage line, the
//! Basic and Advanced command sections, the global options table and the
//! usage examples.

use crate::core::formatter::{write_record, Cursor, MissingOption};
use crate::core::paint::{Fragment, Paint, Tone};
use crate::core::registry::{
    HelpEntry, UsageExample, ADVANCED_COMMANDS, BASIC_COMMANDS, EXAMPLES, GLOBAL_OPTIONS,
};
use crate::domain::config::LayoutConfig;

const SECTION_INDENT: usize = 2;
const GROUP_INDENT: usize = 4;
const BULLET: &str = "–";

/// Renders the help page for one program name and layout
pub struct HelpPage<'a> {
    package_name: &'a str,
    logo: &'a str,
    layout: &'a LayoutConfig,
    painter: &'a dyn Paint,
}

impl<'a> HelpPage<'a> {
    pub fn new(
        package_name: &'a str,
        logo: &'a str,
        layout: &'a LayoutConfig,
        painter: &'a dyn Paint,
    ) -> Self {
        Self {
            package_name,
            logo,
            layout,
            painter,
        }
    }

    pub fn render(&self) -> String {
        let mut cursor = Cursor::new();

        cursor.newline();
        self.write_usage(&mut cursor);
        cursor.newline();

        self.write_heading(&mut cursor, SECTION_INDENT, "Commands:");
        cursor.newline();
        self.write_heading(&mut cursor, GROUP_INDENT, "Basic");
        cursor.newline();
        self.write_commands(&mut cursor, BASIC_COMMANDS);
        cursor.newline();
        self.write_heading(&mut cursor, GROUP_INDENT, "Advanced");
        cursor.newline();
        self.write_commands(&mut cursor, ADVANCED_COMMANDS);
        cursor.newline();

        self.write_heading(&mut cursor, SECTION_INDENT, "Options:");
        cursor.newline();
        self.write_options(&mut cursor);
        cursor.newline();

        self.write_heading(&mut cursor, SECTION_INDENT, "Examples:");
        cursor.newline();
        for example in EXAMPLES {
            self.write_example(&mut cursor, example);
        }

        tracing::debug!(
            rows = cursor.row(),
            package = self.package_name,
            "rendered help page"
        );
        cursor.into_string()
    }

    fn write_usage(&self, cursor: &mut Cursor) {
        cursor.append(&indent(SECTION_INDENT));
        cursor.append_styled(
            &format!("{} {}", self.logo, self.package_name),
            Tone::Bold,
            self.painter,
        );
        cursor.append(" [options] <command | path>");
        cursor.newline();
    }

    fn write_heading(&self, cursor: &mut Cursor, width: usize, title: &str) {
        cursor.append(&indent(width));
        cursor.append_styled(title, Tone::Dim, self.painter);
        cursor.newline();
    }

    fn write_commands(&self, cursor: &mut Cursor, entries: &[HelpEntry]) {
        for entry in entries {
            write_record(
                cursor,
                &entry.record(),
                &self.layout.commands,
                MissingOption::Blank,
            );
            if entry.default {
                cursor.append(" ");
                cursor.append_styled("(default)", Tone::Bold, self.painter);
            }
            cursor.newline();
        }
    }

    fn write_options(&self, cursor: &mut Cursor) {
        let stops = &self.layout.options;
        for option in GLOBAL_OPTIONS {
            cursor.append(&indent(stops.indent));
            self.write_fragments(cursor, option.flags);
            cursor.pad_to_column(stops.description_column);
            self.write_fragments(cursor, option.description);
            cursor.newline();
        }
    }

    fn write_example(&self, cursor: &mut Cursor, example: &UsageExample) {
        cursor.append(&indent(SECTION_INDENT));
        cursor.append_styled(BULLET, Tone::Gray, self.painter);
        cursor.append(" ");
        self.write_fragments(cursor, example.title);
        cursor.newline();
        cursor.newline();

        cursor.append(&indent(GROUP_INDENT));
        cursor.append_styled(
            &example.command_line(self.package_name),
            Tone::Cyan,
            self.painter,
        );
        cursor.newline();
        cursor.newline();
    }

    fn write_fragments(&self, cursor: &mut Cursor, fragments: &[Fragment]) {
        for fragment in fragments {
            cursor.append_fragment(fragment, self.painter);
        }
    }
}

fn indent(width: usize) -> String {
    " ".repeat(width)
}

use crossterm::style::{style, Stylize};

/// Named text styles used on the help page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Bold,
    Dim,
    Gray,
    Cyan,
    Underline,
    BoldUnderline,
}

/// Applies a [`Tone`] to a piece of text.
///
/// Implementations must not change the visible characters, only wrap them;
/// the formatter counts columns on the unpainted text.
pub trait Paint {
    fn paint(&self, text: &str, tone: Tone) -> String;
}

/// ANSI escape sequence painter
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiPainter;

impl Paint for AnsiPainter {
    fn paint(&self, text: &str, tone: Tone) -> String {
        let content = style(text);
        match tone {
            Tone::Bold => content.bold().to_string(),
            Tone::Dim => content.dim().to_string(),
            Tone::Gray => content.dark_grey().to_string(),
            Tone::Cyan => content.cyan().to_string(),
            Tone::Underline => content.underlined().to_string(),
            Tone::BoldUnderline => content.bold().underlined().to_string(),
        }
    }
}

/// Painter for pipes, `NO_COLOR` and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainPainter;

impl Paint for PlainPainter {
    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }
}

/// One run of help text with an optional tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Plain(&'static str),
    Styled(&'static str, Tone),
}

impl Fragment {
    /// Visible text, without styling
    pub fn text(&self) -> &'static str {
        match self {
            Fragment::Plain(text) | Fragment::Styled(text, _) => text,
        }
    }
}

/// Pick the painter for the given colour setting
pub fn painter(color: bool) -> Box<dyn Paint> {
    if color {
        Box::new(AnsiPainter)
    } else {
        Box::new(PlainPainter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_painter_is_identity() {
        for tone in [
            Tone::Bold,
            Tone::Dim,
            Tone::Gray,
            Tone::Cyan,
            Tone::Underline,
            Tone::BoldUnderline,
        ] {
            assert_eq!(PlainPainter.paint("FILE", tone), "FILE");
        }
    }

    #[test]
    fn test_ansi_painter_wraps_text() {
        let painted = AnsiPainter.paint("Commands:", Tone::Dim);
        assert!(painted.contains("Commands:"));
        assert!(painted.starts_with('\u{1b}'));
        assert_ne!(painted, "Commands:");
    }

    #[test]
    fn test_fragment_text() {
        assert_eq!(Fragment::Plain("-h, --help").text(), "-h, --help");
        assert_eq!(Fragment::Styled("TOKEN", Tone::Underline).text(), "TOKEN");
    }
}

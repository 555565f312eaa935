//! Styled output lines.
//!
//! Every unit of text the terminal prints is an [`OutputLine`]: immutable
//! once appended, carrying a [`Style`] tag the renderer maps to a color.
//! Lines of the shape `"  name - description"` double as *command links*:
//! activating one re-dispatches the named command.

/// Category tag attached to an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Regular command output.
    Plain,
    /// Positive feedback (section headers, confirmations).
    Success,
    /// Error feedback.
    Error,
    /// Echo of a submitted input line.
    History,
    /// Banner / large display text.
    Heading,
}

/// One immutable unit of text in the output log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// The text content, without a trailing newline.
    pub text: String,
    /// Style tag for the renderer.
    pub style: Style,
}

/// Marker prefix for command links.
const LINK_INDENT: &str = "  ";
/// Separator between a linked command name and its description.
const LINK_SEPARATOR: &str = " - ";

impl OutputLine {
    /// Create a line with an explicit style.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// A `Style::Plain` line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::Plain)
    }

    /// A `Style::Success` line.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Style::Success)
    }

    /// A `Style::Error` line.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Style::Error)
    }

    /// A `Style::History` line.
    pub fn history(text: impl Into<String>) -> Self {
        Self::new(text, Style::History)
    }

    /// A `Style::Heading` line.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(text, Style::Heading)
    }

    /// Format a command link line: `"  name - description"`.
    pub fn link(name: &str, description: &str) -> Self {
        Self::plain(format!("{LINK_INDENT}{name}{LINK_SEPARATOR}{description}"))
    }

    /// If this line is a command link, return the command name it executes.
    ///
    /// A link is any line that starts with the two-space indent marker and
    /// contains the `" - "` separator; the name is the trimmed text before
    /// the first separator.
    pub fn command_link(&self) -> Option<&str> {
        if !self.text.starts_with(LINK_INDENT) {
            return None;
        }
        let trimmed = self.text.trim();
        let (name, _) = trimmed.split_once(LINK_SEPARATOR)?;
        if name.is_empty() {
            return None;
        }
        Some(name)
    }
}

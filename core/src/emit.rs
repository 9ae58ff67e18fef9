//! groff directives for classified config lines.

use std::io::{self, Write};

/// Paragraph break.
pub const PARAGRAPH: &str = ".PP";

/// One thing the emitter knows how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManEvent<'a> {
    /// A line of explanation text, written as-is.
    Text(&'a str),
    /// The end of a run of explanation lines.
    CloseExplanation,
    /// A blank line in the config; the next option starts here.
    OptionBoundary,
    /// A `[name]` section of the config file.
    Group(&'a str),
    /// A documented option.
    Option { name: &'a str, value: &'a str },
}

/// Renders an event as the groff lines it produces, in order.
///
/// # Examples
///
/// ```
/// use confman_core::{ManEvent, render_event};
///
/// assert_eq!(
///     render_event(ManEvent::Group("trigger")),
///     vec![".SS \"The trigger config section\"".to_string()]
/// );
/// assert_eq!(
///     render_event(ManEvent::Option { name: "daemon", value: "yes" }),
///     vec![".B daemon = yes".to_string(), ".PP".to_string()]
/// );
/// ```
pub fn render_event(event: ManEvent<'_>) -> Vec<String> {
    match event {
        ManEvent::Text(text) => vec![text.to_string()],
        ManEvent::CloseExplanation | ManEvent::OptionBoundary => vec![PARAGRAPH.to_string()],
        ManEvent::Group(name) => vec![format!(".SS \"The {name} config section\"")],
        ManEvent::Option { name, value } => {
            vec![format!(".B {name} = {value}"), PARAGRAPH.to_string()]
        }
    }
}

/// Writes rendered events straight to the underlying stream.
///
/// Nothing is buffered beyond what `W` itself buffers, so the output order
/// is the order of [`ManWriter::emit`] calls.
pub struct ManWriter<W: Write> {
    out: W,
    lines_written: usize,
}

impl<W: Write> ManWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            lines_written: 0,
        }
    }

    pub fn emit(&mut self, event: ManEvent<'_>) -> io::Result<()> {
        for line in render_event(event) {
            writeln!(self.out, "{line}")?;
            self.lines_written += 1;
        }
        Ok(())
    }

    /// Number of groff lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_not_escaped() {
        assert_eq!(
            render_event(ManEvent::Text("use \\fBmcelog --client\\fR")),
            vec!["use \\fBmcelog --client\\fR"]
        );
    }

    #[test]
    fn test_boundaries_render_paragraph() {
        assert_eq!(render_event(ManEvent::CloseExplanation), vec![".PP"]);
        assert_eq!(render_event(ManEvent::OptionBoundary), vec![".PP"]);
    }

    #[test]
    fn test_writer_emits_lines_in_call_order() {
        let mut writer = ManWriter::new(Vec::new());
        writer.emit(ManEvent::Group("server")).expect("emit");
        writer
            .emit(ManEvent::Option {
                name: "client-user",
                value: "root",
            })
            .expect("emit");
        assert_eq!(writer.lines_written(), 3);

        let out = String::from_utf8(writer.into_inner()).expect("utf8");
        assert_eq!(
            out,
            ".SS \"The server config section\"\n.B client-user = root\n.PP\n"
        );
    }
}

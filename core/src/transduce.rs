//! The config-to-groff state machine.
//!
//! Each input line goes through [`step`], which takes the current
//! [`TransducerState`] and returns the next one together with a
//! [`LineOutcome`]. [`transduce`] drives `step` over a whole file and
//! writes the resulting groff lines as it goes.
//!
//! # Example
//!
//! ```
//! use confman_core::transduce;
//!
//! let config = "# mcelog example config\n\n# enable the daemon\ndaemon = yes\n";
//! let mut out = Vec::new();
//! let mut diagnostics = Vec::new();
//! let summary = transduce(config.as_bytes(), &mut out, &mut diagnostics).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     ".PP\nEnable the daemon\n.PP\n.B daemon = yes\n.PP\n"
//! );
//! assert_eq!(summary.options, 1);
//! assert!(diagnostics.is_empty());
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::emit::{ManEvent, ManWriter};
use crate::error::{GenError, Result};
use crate::line::{LineKind, capitalize_first, classify_line, is_comment_line};

/// Running state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransducerState {
    /// Still inside the leading block of `#` lines.
    pub in_header: bool,
    /// Explanation lines seen since the last boundary.
    pub explanation_run: usize,
    /// 1-based number of the last line stepped over.
    pub line_number: usize,
}

impl Default for TransducerState {
    fn default() -> Self {
        Self {
            in_header: true,
            explanation_run: 0,
            line_number: 0,
        }
    }
}

/// What [`step`] decided about one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Part of the header block; produces nothing.
    Header,
    /// A classified line. Explanation text is already capitalized when it
    /// opens a run.
    Line {
        closes_explanation: bool,
        kind: LineKind,
    },
}

impl LineOutcome {
    /// The emitter events for this line, in output order.
    pub fn events(&self) -> Vec<ManEvent<'_>> {
        let LineOutcome::Line {
            closes_explanation,
            kind,
        } = self
        else {
            return Vec::new();
        };

        let mut events = Vec::with_capacity(2);
        if *closes_explanation {
            events.push(ManEvent::CloseExplanation);
        }
        match kind {
            LineKind::Explanation { text } => events.push(ManEvent::Text(text)),
            LineKind::Blank => events.push(ManEvent::OptionBoundary),
            LineKind::GroupHeader { name } => events.push(ManEvent::Group(name)),
            LineKind::ConfigOption { name, value, .. } => {
                events.push(ManEvent::Option { name, value })
            }
            LineKind::Unparseable => {}
        }
        events
    }

    /// Returns `true` when the line matched no grammar.
    pub fn is_unparseable(&self) -> bool {
        matches!(
            self,
            LineOutcome::Line {
                kind: LineKind::Unparseable,
                ..
            }
        )
    }
}

/// Advances the state machine by one line.
///
/// `line` must not include its terminator. The first line that does not
/// start with `#` ends the header block and is classified like any other
/// line. Unparseable lines leave the explanation run untouched.
pub fn step(state: TransducerState, line: &str) -> (TransducerState, LineOutcome) {
    let mut next = TransducerState {
        line_number: state.line_number + 1,
        ..state
    };

    if next.in_header {
        if is_comment_line(line) {
            return (next, LineOutcome::Header);
        }
        next.in_header = false;
    }

    let kind = match classify_line(line) {
        LineKind::Explanation { text } => {
            let text = if next.explanation_run == 0 {
                capitalize_first(&text)
            } else {
                text
            };
            next.explanation_run += 1;
            return (
                next,
                LineOutcome::Line {
                    closes_explanation: false,
                    kind: LineKind::Explanation { text },
                },
            );
        }
        LineKind::Unparseable => {
            return (
                next,
                LineOutcome::Line {
                    closes_explanation: false,
                    kind: LineKind::Unparseable,
                },
            );
        }
        kind => kind,
    };

    let closes_explanation = next.explanation_run > 0;
    next.explanation_run = 0;
    (
        next,
        LineOutcome::Line {
            closes_explanation,
            kind,
        },
    )
}

/// Counts collected over one [`transduce`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransduceSummary {
    pub lines: usize,
    pub header_lines: usize,
    pub explanation_lines: usize,
    pub blank_lines: usize,
    pub groups: usize,
    pub options: usize,
    pub disabled_options: usize,
    /// 1-based numbers of lines that matched no grammar.
    pub unparseable_lines: Vec<usize>,
}

impl TransduceSummary {
    fn record(&mut self, outcome: &LineOutcome, line_number: usize) {
        self.lines += 1;
        match outcome {
            LineOutcome::Header => self.header_lines += 1,
            LineOutcome::Line { kind, .. } => match kind {
                LineKind::Explanation { .. } => self.explanation_lines += 1,
                LineKind::Blank => self.blank_lines += 1,
                LineKind::GroupHeader { .. } => self.groups += 1,
                LineKind::ConfigOption { disabled, .. } => {
                    self.options += 1;
                    if *disabled {
                        self.disabled_options += 1;
                    }
                }
                LineKind::Unparseable => self.unparseable_lines.push(line_number),
            },
        }
    }
}

/// Streams a config file through the state machine.
///
/// groff lines go to `out` as soon as each input line is classified.
/// Every unparseable line produces `Unparseable line <n>` on
/// `diagnostics`, flushed immediately, and processing continues.
///
/// # Errors
///
/// Returns [`GenError::Read`] if `input` fails and [`GenError::Write`] if
/// either output stream fails.
pub fn transduce<R, W, E>(input: R, out: W, mut diagnostics: E) -> Result<TransduceSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut writer = ManWriter::new(out);
    let mut state = TransducerState::default();
    let mut summary = TransduceSummary::default();

    for line in input.lines() {
        let line = line.map_err(GenError::Read)?;
        let (next, outcome) = step(state, &line);
        state = next;
        debug!(line = state.line_number, ?outcome, "classified config line");

        for event in outcome.events() {
            writer.emit(event).map_err(GenError::Write)?;
        }

        if outcome.is_unparseable() {
            debug!(line = state.line_number, text = %line, "unparseable config line");
            writeln!(diagnostics, "Unparseable line {}", state.line_number)
                .and_then(|()| diagnostics.flush())
                .map_err(GenError::Write)?;
        }

        summary.record(&outcome, state.line_number);
    }

    let groff_lines = writer.lines_written();
    writer.into_inner().flush().map_err(GenError::Write)?;

    info!(
        lines = summary.lines,
        groups = summary.groups,
        options = summary.options,
        disabled_options = summary.disabled_options,
        unparseable = summary.unparseable_lines.len(),
        groff_lines,
        "config transduced"
    );

    Ok(summary)
}

//! Line classification for commented example config files.
//!
//! The example config follows a fixed convention:
//!
//! - `# text` lines explain the option or group that follows.
//! - `[name]` lines open a config section.
//! - `name = value` lines show an option, optionally disabled as
//!   `#name = value`.
//! - whitespace-only lines separate one option from the next.
//!
//! [`classify_line`] looks at a single line in isolation. The leading
//! header block and explanation runs depend on earlier lines and are
//! handled by [`crate::transduce`].

use std::sync::LazyLock;

use regex::Regex;

/// What a single config line means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `#` followed by one whitespace character; `text` is the rest.
    Explanation { text: String },
    /// Whitespace only; a new option follows.
    Blank,
    /// `[name]`.
    GroupHeader { name: String },
    /// `name = value`, with `disabled` set when the line started with `#`.
    ConfigOption {
        disabled: bool,
        name: String,
        value: String,
    },
    /// None of the above.
    Unparseable,
}

static PATTERNS: LazyLock<LinePatterns> = LazyLock::new(LinePatterns::new);

struct LinePatterns {
    group_header: Regex,
    config_option: Regex,
}

impl LinePatterns {
    fn new() -> Self {
        Self {
            // [name], name without ']'
            group_header: Regex::new(r"^\[([^\]]*)\]$").expect("static regex must compile"),
            // #name = value, name = value
            config_option: Regex::new(r"^(#?)([a-z-]+) = (.*)$")
                .expect("static regex must compile"),
        }
    }
}

/// Classifies one line of the config file.
///
/// `line` must already have its terminator removed. Rules are tried in a
/// fixed order and the first match wins: explanation, blank, group header,
/// config option.
///
/// # Examples
///
/// ```
/// use confman_core::{LineKind, classify_line};
///
/// assert_eq!(
///     classify_line("[dimm]"),
///     LineKind::GroupHeader { name: "dimm".to_string() }
/// );
/// assert_eq!(
///     classify_line("#logfile = /tmp/logfile"),
///     LineKind::ConfigOption {
///         disabled: true,
///         name: "logfile".to_string(),
///         value: "/tmp/logfile".to_string(),
///     }
/// );
/// assert_eq!(classify_line("Logfile: yes"), LineKind::Unparseable);
/// ```
pub fn classify_line(line: &str) -> LineKind {
    if let Some(text) = explanation_text(line) {
        return LineKind::Explanation {
            text: text.to_string(),
        };
    }

    if is_blank_line(line) {
        return LineKind::Blank;
    }

    if let Some(caps) = PATTERNS.group_header.captures(line) {
        return LineKind::GroupHeader {
            name: caps[1].to_string(),
        };
    }

    if let Some(caps) = PATTERNS.config_option.captures(line) {
        return LineKind::ConfigOption {
            disabled: !caps[1].is_empty(),
            name: caps[2].to_string(),
            value: caps[3].to_string(),
        };
    }

    LineKind::Unparseable
}

/// Returns the explanation text when `line` is `#` plus exactly one
/// whitespace character plus anything.
///
/// A bare `#` is an empty explanation. Any whitespace beyond the first
/// character after `#` belongs to the text.
pub fn explanation_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    let mut chars = rest.chars();
    match chars.next() {
        None => Some(""),
        Some(ch) if ch.is_whitespace() => Some(chars.as_str()),
        Some(_) => None,
    }
}

/// Returns `true` for lines made only of whitespace, including the empty
/// line left behind once the terminator is stripped.
pub fn is_blank_line(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Returns `true` while a line still belongs to the leading header block.
pub(crate) fn is_comment_line(line: &str) -> bool {
    line.starts_with('#')
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

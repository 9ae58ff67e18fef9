//! Man-page generation from commented example config files.
//!
//! An example config documents itself through a comment convention:
//! explanation comments (`# text`) describe what follows, `[name]` lines
//! open sections, and `name = value` lines (optionally disabled as
//! `#name = value`) show each option. This crate turns such a file into
//! groff `man(7)` source:
//!
//! - [`classify_line`]: decides what one line is ([`LineKind`]).
//! - [`step`] / [`TransducerState`]: the per-line state machine that skips
//!   the leading header block and tracks explanation runs.
//! - [`render_event`] / [`ManWriter`]: the groff directives for each line.
//! - [`transduce`]: streams a whole config file, reporting unparseable
//!   lines as `Unparseable line <n>` diagnostics.
//! - [`generate_man_page`]: preamble, intro, body and SEE ALSO trailer,
//!   described by a [`PageConfig`].
//!
//! # Example
//!
//! ```
//! use confman_core::{PageConfig, generate_man_page};
//!
//! let config = "# mcelog.conf example\n\n# run in the background\ndaemon = yes\n";
//! let mut out = Vec::new();
//! let summary = generate_man_page(
//!     config.as_bytes(),
//!     ".SH NAME\nmcelog.conf \\- mcelog configuration",
//!     &PageConfig::default(),
//!     &mut out,
//!     std::io::sink(),
//! )
//! .unwrap();
//!
//! let page = String::from_utf8(out).unwrap();
//! assert!(page.contains("Run in the background\n.PP\n.B daemon = yes\n.PP\n"));
//! assert_eq!(summary.options, 1);
//! ```

mod config;
mod emit;
mod error;
mod line;
mod page;
mod transduce;

pub use config::{ManReference, PageConfig};
pub use emit::{ManEvent, ManWriter, PARAGRAPH, render_event};
pub use error::{GenError, Result};
pub use line::{LineKind, capitalize_first, classify_line, explanation_text, is_blank_line};
pub use page::{generate_from_files, generate_man_page, write_preamble, write_trailer};
pub use transduce::{LineOutcome, TransduceSummary, TransducerState, step, transduce};

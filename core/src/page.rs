//! Whole-page assembly: preamble, intro, body, trailer.

use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use crate::config::PageConfig;
use crate::error::{GenError, Result};
use crate::transduce::{TransduceSummary, transduce};

/// Writes the generated-file notice and the `.TH` line.
pub fn write_preamble<W: Write>(out: &mut W, page: &PageConfig) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, ".\\\" Auto generated {} manpage. Do not edit.", page.title)?;
    writeln!(
        out,
        ".TH \"{}\" {} \"{}\"",
        page.title, page.section, page.source
    )?;
    writeln!(out)
}

/// Writes the SEE ALSO section.
pub fn write_trailer<W: Write>(out: &mut W, page: &PageConfig) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, ".SH SEE ALSO")?;
    let last = page.see_also.len().saturating_sub(1);
    for (idx, reference) in page.see_also.iter().enumerate() {
        let sep = if idx < last { "," } else { "" };
        writeln!(out, ".BR {} ({}){sep}", reference.name, reference.section)?;
    }
    if let Some(url) = &page.url {
        writeln!(out, ".B {url}")?;
    }
    writeln!(out)
}

/// Writes a complete man page.
///
/// The intro text is copied verbatim and followed by a newline, then the
/// config is streamed through [`transduce`].
///
/// # Examples
///
/// ```
/// use confman_core::{PageConfig, generate_man_page};
///
/// let mut out = Vec::new();
/// let mut diagnostics = Vec::new();
/// generate_man_page(
///     "# header\n[server]\n".as_bytes(),
///     ".SH NAME\nmcelog.conf",
///     &PageConfig::default(),
///     &mut out,
///     &mut diagnostics,
/// )
/// .unwrap();
///
/// let page = String::from_utf8(out).unwrap();
/// assert!(page.starts_with("\n.\\\" Auto generated mcelog.conf manpage. Do not edit.\n"));
/// assert!(page.contains(".SH NAME\nmcelog.conf\n.SS \"The server config section\"\n"));
/// assert!(page.ends_with(".B http://www.mcelog.org\n\n"));
/// ```
pub fn generate_man_page<R, W, E>(
    config: R,
    intro: &str,
    page: &PageConfig,
    mut out: W,
    diagnostics: E,
) -> Result<TransduceSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    write_preamble(&mut out, page).map_err(GenError::Write)?;
    writeln!(out, "{intro}").map_err(GenError::Write)?;
    let summary = transduce(config, &mut out, diagnostics)?;
    write_trailer(&mut out, page).map_err(GenError::Write)?;
    out.flush().map_err(GenError::Write)?;
    Ok(summary)
}

/// Opens both inputs, then writes the page.
///
/// Both files are opened before anything is written, so a missing input
/// produces no output.
///
/// # Errors
///
/// Returns [`GenError::Io`] naming the path that could not be opened or
/// read, or any error from [`generate_man_page`].
pub fn generate_from_files<W, E>(
    config_path: &Path,
    intro_path: &Path,
    page: &PageConfig,
    out: W,
    diagnostics: E,
) -> Result<TransduceSummary>
where
    W: Write,
    E: Write,
{
    let config = fs::File::open(config_path).map_err(|err| GenError::io(config_path, err))?;
    let intro = fs::read_to_string(intro_path).map_err(|err| GenError::io(intro_path, err))?;
    debug!(
        config = %config_path.display(),
        intro = %intro_path.display(),
        intro_bytes = intro.len(),
        "inputs opened"
    );

    generate_man_page(BufReader::new(config), &intro, page, out, diagnostics)
}

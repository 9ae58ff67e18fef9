use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use confman_core::{GenError, PageConfig, generate_from_files};
use tracing::info;

mod logging;

#[derive(Debug, Parser)]
#[command(name = "genconfig")]
#[command(version)]
#[command(about = "Generate man config documentation from an example config file")]
struct Cli {
    /// Example config file (e.g. mcelog.conf).
    config: PathBuf,
    /// Intro file copied verbatim after the title line.
    intro: PathBuf,
    /// YAML file with the page title, section and SEE ALSO references.
    #[arg(long, value_name = "FILE")]
    page_config: Option<PathBuf>,
    /// Log more to stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("warning: logging disabled: {err}");
    }

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), GenError> {
    let page = match &cli.page_config {
        Some(path) => PageConfig::load(path)?,
        None => PageConfig::default(),
    };

    let summary = generate_from_files(
        &cli.config,
        &cli.intro,
        &page,
        io::stdout().lock(),
        io::stderr().lock(),
    )?;

    info!(
        config = %cli.config.display(),
        options = summary.options,
        groups = summary.groups,
        unparseable = summary.unparseable_lines.len(),
        "man page written"
    );
    Ok(())
}

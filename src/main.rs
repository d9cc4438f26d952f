// Use jemalloc for better memory allocation performance on Unix-like systems
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

// Use mimalloc on Windows for better performance
#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use htmlrep_lib::config::Config;
use htmlrep_lib::exit_codes::exit;
use htmlrep_lib::{ReportSelection, scan_reader, write_reports};

/// Print a report of the tags and links used in UTF-8 encoded HTML.
///
/// The input is only tokenized, never parsed, so many documents may be
/// concatenated together. Three reports are printed, separated by blank
/// lines: tags with their attributes, links found in attributes, and
/// probable links found in text content.
///
/// Examples:
///
///   cat *.html | htmlrep          show all reports
///
///   cat *.html | htmlrep -t       show only the tags report
///
///   cat *.html | htmlrep -l -c    show only probable links from text
#[derive(Parser)]
#[command(author, version, about, long_about, verbatim_doc_comment)]
struct Cli {
    /// HTML files to read in order; reads stdin when none are given or for `-`
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Only show the tags and attributes report
    #[arg(short = 't', long = "tags-only")]
    tags_only: bool,

    /// Only show the links reports
    #[arg(short = 'l', long = "links-only")]
    links_only: bool,

    /// Of the links reports, only show links from text content
    #[arg(short = 'c', long = "content-links-only")]
    content_links_only: bool,

    /// Of the links reports, only show links from attributes
    #[arg(short = 'a', long = "attribute-links-only")]
    attribute_links_only: bool,

    /// Path to configuration file
    #[arg(long)]
    config: Option<String>,

    /// Ignore all configuration files and use built-in defaults
    #[arg(long)]
    isolated: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Control colored output: auto, always, never
    #[arg(long, default_value = "auto", value_parser = ["auto", "always", "never"])]
    color: String,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    // RUST_LOG, when set, overrides the level chosen above
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Open every input in order as one concatenated stream.
///
/// Stdin is read unlocked so that `-` may appear more than once; later
/// occurrences see end of input.
fn open_input(files: &[PathBuf]) -> Result<Box<dyn Read>> {
    if files.is_empty() {
        return Ok(Box::new(io::stdin()));
    }

    let mut input: Box<dyn Read> = Box::new(io::empty());
    for path in files {
        let next: Box<dyn Read> = if path.as_os_str() == "-" {
            Box::new(io::stdin())
        } else {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        };
        input = Box::new(input.chain(next));
    }
    Ok(input)
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_with_discovery(cli.config.as_deref(), None, cli.isolated)?;
    let selection = ReportSelection::from_flags(
        cli.tags_only,
        cli.links_only,
        cli.content_links_only,
        cli.attribute_links_only,
    )
    .intersect(config.reports.into());
    if selection.is_empty() {
        log::warn!("Every report is disabled by the configuration; nothing to show");
    }

    let input = open_input(&cli.files)?;
    let report = scan_reader(input).context("Failed to scan input")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_reports(&report, selection, &mut out)?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

fn main() {
    // Reset SIGPIPE to default behavior on Unix so piping to `head` etc. works correctly.
    // Without this, Rust ignores SIGPIPE and writes fail with a broken pipe error.
    #[cfg(unix)]
    {
        // SAFETY: Setting SIGPIPE to SIG_DFL is standard practice for CLI tools
        // that produce output meant to be piped.
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    let cli = Cli::parse();

    match cli.color.as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::unset_override(),
    }

    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), err);
        exit::tool_error();
    }
}

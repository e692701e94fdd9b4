//! `nodelist`: build a list from the command line and apply list operations
//!
//! ```text
//! nodelist 5 3 1 4 1 --insert 9@2 --delete 3 --sort --stats
//! ```
//!
//! Operations run in a fixed order: inserts, deletes, reverse, sort, then
//! search, stats and the final rendering.

use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info};

use nodelist::{ops, LinkedList, RenderStyle};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "nodelist",
    version,
    about = "Build a singly linked list and apply list operations"
)]
struct Cli {
    /// Initial values, appended in order
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Insert VALUE before the node at INDEX (repeatable)
    #[arg(long = "insert", value_name = "VALUE@INDEX", allow_hyphen_values = true)]
    inserts: Vec<Insertion>,

    /// Delete the first node holding VALUE (repeatable)
    #[arg(long = "delete", value_name = "VALUE", allow_negative_numbers = true)]
    deletes: Vec<i64>,

    /// Reverse the list
    #[arg(long)]
    reverse: bool,

    /// Sort the list
    #[arg(long)]
    sort: bool,

    /// Report whether VALUE is present
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    search: Option<i64>,

    /// Print length and sortedness
    #[arg(long)]
    stats: bool,

    /// Render with ascii glyphs
    #[arg(long)]
    ascii: bool,

    /// Print the final values as a JSON array
    #[arg(long, conflicts_with = "ascii")]
    json: bool,
}

/// A `VALUE@INDEX` pair from `--insert`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Insertion {
    value: i64,
    index: usize,
}

impl FromStr for Insertion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let Some((value, index)) = s.split_once('@') else {
            bail!("expected VALUE@INDEX, got {:?}", s);
        };
        Ok(Self {
            value: value
                .trim()
                .parse()
                .with_context(|| format!("invalid value in {:?}", s))?,
            index: index
                .trim()
                .parse()
                .with_context(|| format!("invalid index in {:?}", s))?,
        })
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout is reserved for the list output
    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let mut list: LinkedList = cli.values.iter().copied().collect();
    info!(length = list.len(), "built list");

    for insertion in &cli.inserts {
        list.insert(insertion.value, insertion.index)
            .with_context(|| format!("failed to insert {}@{}", insertion.value, insertion.index))?;
    }

    for &value in &cli.deletes {
        if !list.delete(value) {
            debug!(value, "nothing to delete");
        }
    }

    if cli.reverse {
        list.reverse();
    }

    if cli.sort {
        list.sort();
    }

    if let Some(target) = cli.search {
        let verdict = if list.contains(target) { "found" } else { "not found" };
        writeln!(out, "search {}: {}", target, verdict)?;
    }

    if cli.stats {
        // Iterative forms only; user input may be arbitrarily long
        writeln!(out, "length: {}", list.len())?;
        writeln!(out, "sorted: {}", list.is_sorted())?;
    }

    if cli.json {
        serde_json::to_writer(&mut *out, &list).context("failed to encode list as JSON")?;
        writeln!(out)?;
    } else {
        let style = if cli.ascii {
            RenderStyle::ascii()
        } else {
            RenderStyle::default()
        };
        ops::write_to(list.head(), out, &style)?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

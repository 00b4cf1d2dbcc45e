use clap::{ArgAction, Parser};
use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use splay_rope::{script, util::render_tree, Rope};

/// Cut substrings out of a document and paste them elsewhere.
///
/// Reads the document on the first line, an operation count on the second,
/// then one `i j k` line per operation: cut the 0-based inclusive range
/// `[i, j]` and paste it after the `k`-th remaining character.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input file, `-` or nothing for stdin
    input: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG wins
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print every node in level order before and after processing
    #[arg(long)]
    dump: bool,

    /// Verify subtree sizes and parent links after every operation
    #[arg(long)]
    check: bool,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn read_input(path: Option<&Path>) -> Result<String, Report> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).wrap_err_with(|| format!("Error reading '{}'", path.display()))
        }
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input).wrap_err("Error reading stdin")?;
            Ok(input)
        }
    }
}

/// Run `input` as a script, writing the final document to `out` and any
/// `--dump` listing to `diag`.
fn run<O, D>(args: &Args, input: &str, out: &mut O, diag: &mut D) -> Result<(), Report>
where
    O: Write,
    D: Write,
{
    let script = script::parse(input)?;

    let mut rope: Rope = script.text.chars().collect();
    info!(len = rope.len(), ops = script.ops.len(), "built rope");

    if args.dump {
        render_tree(diag, &rope)?;
    }

    for (index, op) in script.ops.iter().enumerate() {
        let number = index + 1;
        rope.apply(*op).wrap_err_with(|| format!("Operation {} ({}) failed", number, op))?;
        debug!(number, %op, "applied");

        if args.check && !rope.is_consistent() {
            return Err(eyre!("Tree invariant broken after operation {} ({})", number, op));
        }
    }

    if args.dump {
        render_tree(diag, &rope)?;
    }

    writeln!(out, "{}", rope)?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(args.verbose);

    let input = read_input(args.input.as_deref())?;
    run(&args, &input, &mut io::stdout().lock(), &mut io::stderr())
}

mod report;

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use getopts::Options;
use tracing_subscriber::EnvFilter;

use report::{OutputMode, Reporter, parse_line};
use shield_core::{Moderator, ReplyDesk};

const LEXICON_ENV: &str = "SHIELD_LEXICON_PATH";
const REPLIES_ENV: &str = "SHIELD_REPLIES_PATH";

fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} [OPTIONS] [TEXT...]", program);
    print!("{}", opts.usage(&brief));
    println!("\nWithout TEXT, comments are read from stdin, one per line.");
    println!("\nEnvironment variables:");
    println!("  SHIELD_LEXICON_PATH   Lexicon RON file (overridden by --lexicon)");
    println!("  SHIELD_REPLIES_PATH   Reply templates RON file (overridden by --replies)");
    println!("  RUST_LOG              Log filter, e.g. info or debug");
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("l", "lexicon", "Lexicon RON file", "PATH");
    opts.optopt("R", "replies", "Reply templates RON file", "PATH");
    opts.optflag("n", "normalize", "Print the normalized form only");
    opts.optflag("r", "reply", "Print a fallback reply for clean comments");
    opts.optopt("s", "seed", "Seed for reply selection (default 0)", "N");
    opts.optflag("j", "json", "Read and write JSON lines");
    opts.optflag("h", "help", "Show this help message");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("Error parsing arguments: {}", f);
            print_usage(&program, opts);
            process::exit(1);
        }
    };

    if matches.opt_present("h") {
        print_usage(&program, opts);
        return Ok(());
    }

    let mode = if matches.opt_present("n") {
        OutputMode::Normalize
    } else if matches.opt_present("j") {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let moderator = match matches.opt_str("l").or_else(|| env::var(LEXICON_ENV).ok()) {
        Some(path) => Moderator::from_path(&path)
            .with_context(|| format!("Failed to load lexicon from {}", path))?,
        None => Moderator::embedded().context("Failed to load embedded lexicon")?,
    };

    let replies = if matches.opt_present("r") {
        let seed = match matches.opt_str("s") {
            Some(seed) => seed
                .parse::<u64>()
                .with_context(|| format!("Invalid seed: {}", seed))?,
            None => 0,
        };
        let desk = match matches.opt_str("R").or_else(|| env::var(REPLIES_ENV).ok()) {
            Some(path) => ReplyDesk::from_path(&path)
                .with_context(|| format!("Failed to load reply templates from {}", path))?,
            None => ReplyDesk::embedded().context("Failed to load embedded reply templates")?,
        };
        Some((desk, seed))
    } else {
        None
    };

    let reporter = Reporter::new(moderator, replies, mode);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !matches.free.is_empty() {
        let comment = matches.free.join(" ");
        writeln!(out, "{}", reporter.report(&comment)?)?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = Vec::new();
    let mut line_number = 0;
    loop {
        line.clear();
        if input
            .read_until(b'\n', &mut line)
            .context("Failed to read stdin")?
            == 0
        {
            break;
        }
        line_number += 1;

        match parse_line(&line, mode) {
            Ok(comment) => writeln!(out, "{}", reporter.report(&comment)?)?,
            Err(e) => {
                log::warn!("Skipping line {}: {}", line_number, e);
                eprintln!("line {}: {}", line_number, e);
            }
        }
    }

    Ok(())
}

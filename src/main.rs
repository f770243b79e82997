use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use labka::interpreter::{
    environment::{DEFAULT_MAX_CALL_DEPTH, Environment},
    session::{Session, SessionOptions},
};
use log::LevelFilter;

/// labka reads one statement per line from standard input, prints the value of
/// every expression and remembers every `var` and `def` for later lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate these newline-separated lines instead of reading standard
    /// input.
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Stop at the first failing line and exit with a non-zero status.
    #[arg(long)]
    fail_fast: bool,

    /// Maximum number of nested user-function calls.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Log more detail to standard error (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .format_timestamp(None)
                              .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let environment = Environment::with_max_call_depth(args.max_call_depth);
    let mut session = Session::new(environment,
                                   SessionOptions { fail_fast: args.fail_fast });

    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    let summary = match &args.eval {
        Some(source) => session.run(source.as_bytes(), &mut out, &mut err),
        None => session.run(io::stdin().lock(), &mut out, &mut err),
    };

    match summary {
        Ok(summary) if summary.stopped_early => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = out.flush();
            eprintln!("Failed to read input: {e}");
            ExitCode::FAILURE
        },
    }
}

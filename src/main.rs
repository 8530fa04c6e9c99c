use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use scanner::{display_error, lexer::lexer::Scanner};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Scan a KAY source file and print its tokens, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ScanArgs {
    /// Source file to tokenize. A missing file yields no tokens.
    source_file: PathBuf,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log filter directives, overriding --verbose.
    #[arg(long, env = "KAY_LOG")]
    log: Option<String>,
}

fn init_tracing(args: &ScanArgs) {
    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = args
        .log
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = ScanArgs::parse();
    init_tracing(&args);

    let start = Instant::now();
    let mut scanner = Scanner::open(&args.source_file);
    let mut count = 0usize;

    while !scanner.at_end() {
        match scanner.next_token() {
            Ok(Some(token)) => {
                println!("{}", token);
                count += 1;
            }
            Ok(None) => break,
            Err(error) => {
                display_error(&error);
                return ExitCode::FAILURE;
            }
        }
    }

    info!(tokens = count, elapsed = ?start.elapsed(), "tokenized");
    ExitCode::SUCCESS
}

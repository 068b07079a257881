use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lex_core::{Scanner, SourceStream, TokenKind};
use tracing::error;

/// Scan a source file (or stdin) and print each lexical unit.
#[derive(Parser)]
struct Args {
    /// Path to scan. Omit to read from stdin.
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let source = match args.path {
        Some(path) => match fs::read(&path) {
            Ok(bytes) => SourceStream::from_slice(bytes),
            Err(err) => {
                error!(path = %path.display(), %err, "failed to read source file");
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut bytes = Vec::new();
            if let Err(err) = io::stdin().read_to_end(&mut bytes) {
                error!(%err, "failed to read stdin");
                return ExitCode::FAILURE;
            }
            SourceStream::from_slice(bytes)
        }
    };

    let mut scanner = Scanner::new(source);

    loop {
        match scanner.scan() {
            Ok(unit) => {
                let done = unit.kind == TokenKind::End;
                println!(
                    "{}:{} {:?} {:?}",
                    unit.line,
                    unit.column,
                    unit.kind,
                    String::from_utf8_lossy(&unit.bytes)
                );
                if done {
                    return ExitCode::SUCCESS;
                }
            }
            Err(err) => {
                error!(%err, "scan aborted");
                return ExitCode::FAILURE;
            }
        }
    }
}

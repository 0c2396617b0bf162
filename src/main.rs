use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use decaf_scanner::{
    config::{ScannerConfig, DEFAULT_BUCKET_COUNT},
    errors::errors::Error,
    lexer::{lexer::Scanner, symbols::SymbolTable, tokens::TokenKind},
    render_error,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Scans a Decaf source file and prints one line per token.
#[derive(Parser, Debug)]
#[command(name = "decaf-scanner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical scanner for Decaf sources", long_about = None)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Print the symbol table after the token stream
    #[arg(short, long)]
    symbols: bool,

    /// Number of symbol table buckets
    #[arg(short, long, env = "DECAF_BUCKETS", default_value_t = DEFAULT_BUCKET_COUNT)]
    buckets: usize,

    /// Enable verbose output
    #[arg(short, long, env = "DECAF_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "DECAF_NO_COLOR")]
    no_color: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let source = read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    let config = ScannerConfig::new(Some(file_name.clone())).with_bucket_count(cli.buckets);

    let start = Instant::now();
    let mut diagnostics: Vec<Error> = vec![];
    let mut scanner = Scanner::new(source.clone(), config, &mut diagnostics);
    let mut halted = false;

    for token in scanner.by_ref() {
        match token {
            Ok(token) if token.kind == TokenKind::EOF => {}
            Ok(token) => println!("{}", token.describe()),
            Err(_) => halted = true,
        }
    }

    let symbols = scanner.into_symbols();
    info!("Tokenized in {:?}", start.elapsed());

    for error in &diagnostics {
        eprint!("{}", render_error(error, &source, &file_name));
    }

    if cli.symbols {
        print_symbols(&symbols);
    }

    if halted {
        return Err(anyhow!("scan of {} stopped early", file_name));
    }

    if diagnostics.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn print_symbols(symbols: &SymbolTable) {
    println!();
    println!(
        "{} identifiers in {} buckets (longest chain {})",
        symbols.len(),
        symbols.bucket_count(),
        symbols.longest_chain()
    );

    for (_, decl) in symbols.iter() {
        println!(
            "{:<12} first seen on line {}, {} occurrence(s)",
            decl.name, decl.first_line, decl.occurrence_count
        );
    }
}

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use coolfront::diagnostics::{CompileError, render_error};

/// Deepest expression tree `parse --json` will serialize; serde recurses once per level.
const MAX_JSON_DEPTH: usize = 1024;

#[derive(Parser)]
#[command(name = "coolfront", version, about = "Lexer and parser for a small class-based language")]
struct Cli {
    /// Log pipeline progress to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored diagnostics
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of a source file, one token per line
    Tokens {
        /// Source file path
        file: PathBuf,
    },
    /// Parse a source file and print its syntax tree
    Parse {
        /// Source file path
        file: PathBuf,
        /// Emit the AST as JSON instead of the indented tree
        #[arg(long)]
        json: bool,
    },
    /// Check that a source file lexes and parses
    Check {
        /// Source file path
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
}

fn read_source(file: &Path) -> String {
    match std::fs::read_to_string(file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: could not read {}: {e}", file.display());
            std::process::exit(1);
        }
    }
}

fn fail(source: &str, file: &Path, err: &CompileError, color: bool) -> ! {
    render_error(source, &file.to_string_lossy(), err, color);
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let color = !cli.no_color;

    match cli.command {
        Commands::Tokens { file } => {
            let source = read_source(&file);
            match coolfront::lex_source(&source) {
                Ok(tokens) => {
                    for token in &tokens {
                        println!("{token}");
                    }
                }
                Err(err) => fail(&source, &file, &err, color),
            }
        }
        Commands::Parse { file, json } => {
            let source = read_source(&file);
            let program = match coolfront::parse_source(&source) {
                Ok(program) => program,
                Err(err) => fail(&source, &file, &err, color),
            };
            if json {
                let depth = program.max_expr_depth();
                if depth > MAX_JSON_DEPTH {
                    eprintln!("error: expression tree depth {depth} exceeds the JSON output limit of {MAX_JSON_DEPTH}");
                    std::process::exit(1);
                }
                match serde_json::to_string_pretty(&program) {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        eprintln!("error: could not serialize AST: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print!("{}", coolfront::pretty::render_tree(&program));
            }
        }
        Commands::Check { file } => {
            let source = read_source(&file);
            match coolfront::parse_source(&source) {
                Ok(program) => println!("ok: {} class(es)", program.classes.len()),
                Err(err) => fail(&source, &file, &err, color),
            }
        }
    }
}

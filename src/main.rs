//! The Quill interpreter CLI.
//!
//! ```text
//! quill            # same as `quill repl`
//! quill repl
//! quill run <file>
//! ```

use clap::{Parser as ClapParser, Subcommand};
use quill::diagnostics;
use quill::environment::new_environment;
use quill::eval::eval_program;
use quill::gc::{Gc, DEFAULT_THRESHOLD};
use quill::lexer::Lexer;
use quill::parser::Parser as QuillParser;

/// Command-line interface for the Quill interpreter.
#[derive(ClapParser)]
#[command(name = "quill")]
#[command(about = "A tree-walking interpreter for the Quill scripting language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Overrides the collector's trigger threshold (live-value count).
    #[arg(long, global = true, default_value_t = DEFAULT_THRESHOLD)]
    gc_threshold: usize,

    /// Raises the log level to show garbage-collection cycle activity.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive read-eval-print loop.
    Repl,
    /// Evaluate a source file and print its final value.
    Run {
        /// Path to a Quill source file.
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    install_logging(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(cli.gc_threshold),
        Commands::Run { file } => run_file(&file, cli.gc_threshold),
    };

    if let Err(message) = result {
        eprintln!("Error: {message}");
        std::process::exit(1);
    }
}

fn install_logging(verbose: bool) {
    let filter = if verbose { "quill=trace" } else { "quill=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .without_time()
        .init();
}

fn run_repl(gc_threshold: usize) -> Result<(), String> {
    quill::repl::run(gc_threshold).map_err(|e| e.to_string())
}

fn run_file(path: &str, gc_threshold: usize) -> Result<(), String> {
    let source = std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;

    let mut parser = QuillParser::new(Lexer::new(&source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        diagnostics::report_parse_errors(path, &source, parser.errors());
        return Err("parsing failed".to_string());
    }

    let env = new_environment();
    let mut gc = Gc::new(gc_threshold);
    let value = eval_program(&program, &env, &mut gc);

    if value.is_error(&gc) {
        diagnostics::report_eval_error(path, &source, value, &gc);
        return Err("evaluation failed".to_string());
    }

    println!("{}", value.inspect(&gc));
    Ok(())
}

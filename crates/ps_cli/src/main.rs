use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ps_ast::StripOptions;
use ps_strip::strip_source;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter, e.g. `PYSTRIP_LOG=debug`.
const LOG_ENV: &str = "PYSTRIP_LOG";

#[derive(Parser)]
#[command(name = "pystrip", about = "pystrip: strip comments and docstrings from Python files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip comments and docstrings from a file or a directory of .py files.
    StripComments {
        /// File or directory path to process.
        path: PathBuf,
        /// Remove lines left empty after stripping.
        #[arg(long)]
        remove_newlines: bool,
        /// Report skipped and failed files, then confirm completion.
        #[arg(long)]
        verbose: bool,
        /// Print the run report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Strip a single file and print the result instead of writing it
    /// next to the input.
    Preview {
        /// Input .py file.
        input: PathBuf,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Remove lines left empty after stripping.
        #[arg(long)]
        remove_newlines: bool,
    },
    /// Parse the file and report any syntax errors.
    Check { input: PathBuf },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::StripComments {
            path,
            remove_newlines,
            verbose,
            json,
        } => {
            let options = StripOptions { remove_newlines };
            let report = ps_driver::run(&path, &options)
                .with_context(|| format!("failed to process {}", path.display()))?;
            tracing::debug!(
                written = report.written().count(),
                skipped = report.skipped().count(),
                failed = report.failures().count(),
                "run finished"
            );

            if verbose {
                report.write_verbose(&mut io::stdout().lock(), &mut io::stderr().lock())?;
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Commands::Preview {
            input,
            output,
            remove_newlines,
        } => {
            let filename = input.display().to_string();
            let source = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {filename}"))?;
            let options = StripOptions { remove_newlines };

            match strip_source(&source, &options)
                .with_context(|| format!("failed to strip {filename}"))?
            {
                Some(stripped) => match &output {
                    Some(path) => std::fs::write(path, &stripped)?,
                    None => println!("{stripped}"),
                },
                None => eprintln!("Skipped: {filename} is empty"),
            }
        }
        Commands::Check { input } => {
            let filename = input.display().to_string();
            let source = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {filename}"))?;

            ps_parser::check(&source).with_context(|| format!("{filename} is not valid Python"))?;
            eprintln!("OK: {filename}");
        }
    }

    Ok(())
}

//! canon-sql CLI
//!
//! Command-line tool that rewrites SQLite SELECT statements into canonical
//! form or prints their syntax tree.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use canon_sql_core::parser::DEFAULT_MAX_DEPTH;
use canon_sql_core::{SqlTranslator, TracingObserver, TranslatorConfig};

/// Canonicalize SQLite SELECT statements.
#[derive(Parser)]
#[command(name = "canon-sql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Maximum nesting depth accepted by the parser and translator.
    #[arg(long, env = "CANON_SQL_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of a SELECT statement.
    Translate {
        #[command(flatten)]
        input: Input,
    },

    /// Print the syntax tree of the input.
    Tree {
        #[command(flatten)]
        input: Input,

        /// Output format of the tree.
        #[arg(short, long, value_enum, default_value_t = TreeFormat::Sexpr)]
        format: TreeFormat,
    },
}

/// Where the SQL comes from. Standard input is read when neither is given.
#[derive(clap::Args)]
struct Input {
    /// SQL text.
    #[arg(conflicts_with = "file")]
    sql: Option<String>,

    /// Read SQL from a file.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TreeFormat {
    /// Lisp-style nested lists.
    Sexpr,
    /// Pretty-printed JSON.
    Json,
}

impl Input {
    fn read(self) -> anyhow::Result<String> {
        if let Some(sql) = self.sql {
            return Ok(sql);
        }
        if let Some(path) = self.file {
            return fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()));
        }
        let mut sql = String::new();
        io::stdin()
            .read_to_string(&mut sql)
            .context("failed to read standard input")?;
        Ok(sql)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = TranslatorConfig::new().with_max_depth(cli.max_depth);
    let driver = |sql: String| {
        SqlTranslator::new(sql)
            .with_config(config)
            .with_observer(TracingObserver)
    };

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Translate { input } => {
            let driver = driver(input.read()?);
            debug!(bytes = driver.sql().len(), "translating input");
            let sql = driver.translate()?;
            writeln!(stdout, "{sql}")?;
        }

        Commands::Tree { input, format } => {
            let driver = driver(input.read()?);
            match format {
                TreeFormat::Sexpr => driver.write_syntax_tree(&mut stdout)?,
                TreeFormat::Json => driver.write_syntax_tree_json(&mut stdout)?,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tree_arguments() {
        let cli = Cli::try_parse_from([
            "canon-sql",
            "--max-depth",
            "32",
            "tree",
            "--format",
            "json",
            "SELECT 1",
        ])
        .unwrap();
        assert_eq!(cli.max_depth, 32);
        match cli.command {
            Commands::Tree { input, format } => {
                assert!(matches!(format, TreeFormat::Json));
                assert_eq!(input.read().unwrap(), "SELECT 1");
            }
            Commands::Translate { .. } => panic!("expected tree command"),
        }
    }

    #[test]
    fn test_sql_and_file_conflict() {
        let result =
            Cli::try_parse_from(["canon-sql", "translate", "--file", "q.sql", "SELECT 1"]);
        assert!(result.is_err());
    }
}

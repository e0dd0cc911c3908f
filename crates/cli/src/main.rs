//! dombind: generate statically-typed element bindings from a
//! vocabulary schema.

mod generate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// DOM vocabulary binding generator.
#[derive(Parser)]
#[command(name = "dombind", version, about = "DOM vocabulary binding generator")]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate bindings from a vocabulary schema
    Generate {
        #[command(subcommand)]
        command: GenerateCommands,
    },
}

#[derive(Subcommand)]
enum GenerateCommands {
    /// Generate a TypeScript declarations module
    Typescript {
        /// Path to the vocabulary schema (.yaml, .yml, or .json)
        input: PathBuf,

        /// Path of the TypeScript module to write
        #[arg(long)]
        out: PathBuf,

        /// Module specifier for the runtime import
        #[arg(long, default_value = "./runtime")]
        runtime_import: String,
    },
}

pub(crate) fn report_error(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{}", msg);
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { command } => generate::cmd_generate(command, cli.quiet),
    }
}

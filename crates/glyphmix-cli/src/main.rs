//! Glyphmix CLI - Command-line interface for the Saizeriya logo widget
//!
//! This binary slices the source logo into its five glyphs, composes random
//! glyph sequences and exports them as PNG.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use glyphmix_cli::commands;
use glyphmix_cli::commands::generate::GenerateArgs;

/// Glyphmix - Saizeriya logo challenger
#[derive(Parser)]
#[command(name = "glyphmix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the glyph catalog with source offsets and widths
    Catalog {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Slice the source logo and write one PNG per glyph
    Extract {
        /// Path to the source logo PNG
        #[arg(short, long)]
        source: String,

        /// Output directory for the glyph PNGs
        #[arg(short, long, default_value = "glyphs")]
        out_dir: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate a glyph sequence and export it as PNG
    Generate {
        /// Path to the source logo PNG
        #[arg(short, long)]
        source: String,

        /// Seed for the random draw (default: fresh entropy)
        #[arg(long)]
        seed: Option<u32>,

        /// Fixed sequence instead of a random one (e.g. "サイゼ" or "sa,i,ze")
        #[arg(short, long)]
        glyphs: Option<String>,

        /// Output PNG path (default: saizeriya-logo.png)
        #[arg(short, long)]
        out: Option<String>,

        /// Layout JSON file (min_width, min_height, glyph_height, background)
        #[arg(long)]
        layout: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: regenerate and download from the terminal
    Play {
        /// Path to the source logo PNG
        #[arg(short, long)]
        source: String,

        /// Seed for the random draws (default: fresh entropy)
        #[arg(long)]
        seed: Option<u32>,

        /// Output PNG path (default: saizeriya-logo.png)
        #[arg(short, long)]
        out: Option<String>,

        /// Layout JSON file (min_width, min_height, glyph_height, background)
        #[arg(long)]
        layout: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Catalog { json } => commands::catalog::run(json),
        Commands::Extract {
            source,
            out_dir,
            json,
        } => commands::extract::run(&source, &out_dir, json),
        Commands::Generate {
            source,
            seed,
            glyphs,
            out,
            layout,
            json,
        } => commands::generate::run(
            &GenerateArgs {
                source: &source,
                seed,
                glyphs: glyphs.as_deref(),
                out: out.as_deref(),
                layout: layout.as_deref(),
            },
            json,
        ),
        Commands::Play {
            source,
            seed,
            out,
            layout,
        } => commands::play::run(&source, seed, out.as_deref(), layout.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `extract` — writes the segmentation fixture file
//   2. `stats`   — reports corpus utterance/token counts
//   3. `verify`  — re-checks an existing fixture file
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExtractArgs, StatsArgs, VerifyArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "hkcancor-fixtures",
    version = "0.1.0",
    about = "Extract utterance/word-segmentation pairs from a Cantonese corpus into a JSON fixture file."
)]
pub struct Cli {
    /// The subcommand to run (extract, stats, or verify)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Extract(args) => Self::run_extract(args),
            Commands::Stats(args)   => Self::run_stats(args),
            Commands::Verify(args)  => Self::run_verify(args),
        }
    }

    /// Handles the `extract` subcommand.
    /// Converts CLI args into an ExtractConfig and hands off to Layer 2.
    fn run_extract(args: ExtractArgs) -> Result<()> {
        use crate::application::extract_use_case::ExtractUseCase;

        tracing::info!("Starting extraction from corpus in: {}", args.corpus_dir);
        let out = args.out.clone();

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = ExtractUseCase::new(args.into());
        let written  = use_case.execute()?;

        println!("Extraction complete. {} records written to '{}'.", written, out);
        Ok(())
    }

    /// Handles the `stats` subcommand.
    /// Loads the corpus and prints per-file and total counts.
    fn run_stats(args: StatsArgs) -> Result<()> {
        use crate::application::stats_use_case::StatsUseCase;

        let use_case = StatsUseCase::new(args.corpus_dir);
        let stats    = use_case.execute()?;

        for f in &stats.files {
            println!(
                "{:<24} {:>8} utterances {:>10} tokens",
                f.source, f.utterances, f.tokens
            );
        }
        println!(
            "total: {} files, {} utterances, {} tokens",
            stats.file_count(),
            stats.total_utterances,
            stats.total_tokens
        );
        Ok(())
    }

    /// Handles the `verify` subcommand.
    /// Checks every record of an existing fixture file.
    fn run_verify(args: VerifyArgs) -> Result<()> {
        use crate::application::verify_use_case::VerifyUseCase;

        let use_case = VerifyUseCase::new(args.fixture.clone());
        let checked  = use_case.execute()?;

        println!("OK — {} records verified in '{}'.", checked, args.fixture);
        Ok(())
    }
}

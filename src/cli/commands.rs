// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `extract`, `stats`, `verify`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → path args)
//
// The flag defaults reproduce the paths the one-shot version of
// this tool hard-coded, so running `extract` with no flags still
// writes ./data/hkcancor_segmentation.json.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::extract_use_case::ExtractConfig;

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract [text, segments] pairs from the corpus into a JSON fixture
    Extract(ExtractArgs),

    /// Report utterance and token counts for a corpus directory
    Stats(StatsArgs),

    /// Check the concatenation invariant of an existing fixture file
    Verify(VerifyArgs),
}

/// All arguments for the `extract` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Directory containing the word-segmented utterance dump files
    #[arg(long, default_value = "data/hkcancor")]
    pub corpus_dir: String,

    /// Path of the JSON fixture file to write (overwritten if present)
    #[arg(long, default_value = "data/hkcancor_segmentation.json")]
    pub out: String,
}

/// Convert CLI ExtractArgs into the application-layer ExtractConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<ExtractArgs> for ExtractConfig {
    fn from(a: ExtractArgs) -> Self {
        ExtractConfig {
            corpus_dir: a.corpus_dir,
            out_path:   a.out,
        }
    }
}

/// All arguments for the `stats` command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Directory containing the word-segmented utterance dump files
    #[arg(long, default_value = "data/hkcancor")]
    pub corpus_dir: String,
}

/// All arguments for the `verify` command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path of the fixture file to check
    #[arg(long, default_value = "data/hkcancor_segmentation.json")]
    pub fixture: String,
}

// ============================================================
// Layer 2 — ExtractUseCase
// ============================================================
// Orchestrates the full extraction pipeline in order:
//
//   Step 1: Load the corpus          (Layer 4 - data)
//   Step 2: Flatten into records     (Layer 4 - data)
//   Step 3: Write the fixture file   (Layer 5 - infra)
//
// Any failure in any step propagates straight up via Result —
// a one-shot preparation tool either writes the complete file
// or exits non-zero with the error chain as its diagnostic.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{extractor::Extractor, loader::UtteranceFileLoader};
use crate::domain::record::SegmentationRecord;
use crate::domain::traits::CorpusSource;
use crate::infra::fixture_store::FixtureStore;

// ─── Extraction Configuration ────────────────────────────────────────────────
// The two knobs the original one-shot script hard-coded, made
// explicit parameters so the pipeline is testable against any
// corpus directory and output path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub corpus_dir: String,
    pub out_path:   String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            corpus_dir: "data/hkcancor".to_string(),
            out_path:   "data/hkcancor_segmentation.json".to_string(),
        }
    }
}

// ─── ExtractUseCase ───────────────────────────────────────────────────────────
// Owns the config and runs the full extraction pipeline.
pub struct ExtractUseCase {
    config: ExtractConfig,
}

impl ExtractUseCase {
    /// Create a new ExtractUseCase with the given configuration
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Execute the full extraction pipeline end to end.
    /// Returns the number of records written.
    pub fn execute(&self) -> Result<usize> {
        let cfg = &self.config;

        // ── Steps 1-2: Load the corpus and flatten it ─────────────────────────
        // UtteranceFileLoader walks the directory in name order
        // and rebuilds the per-file utterance lists
        tracing::info!("Loading corpus from '{}'", cfg.corpus_dir);
        let loader = UtteranceFileLoader::new(&cfg.corpus_dir);
        let records = extract_records(&loader)?;

        // ── Step 3: Write the fixture file ────────────────────────────────────
        // Overwrites any previous fixture at the same path
        let store = FixtureStore::new(&cfg.out_path);
        store.save(&records)?;
        tracing::info!(
            "Wrote {} records to '{}'",
            records.len(),
            cfg.out_path
        );

        Ok(records.len())
    }
}

/// Load a corpus from any CorpusSource and flatten it into the
/// output record list. Split out from execute() so tests can run
/// the transformation against in-memory stub corpora.
pub fn extract_records<S: CorpusSource>(source: &S) -> Result<Vec<SegmentationRecord>> {
    let files = source.utterances_by_file()?;
    Ok(Extractor::new().extract(&files))
}

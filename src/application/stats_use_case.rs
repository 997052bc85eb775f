// ============================================================
// Layer 2 — Stats Use Case
// ============================================================
// Read-only corpus size report over the same loader output
// the extraction uses:
//   - per file: utterance and token counts
//   - totals across the whole corpus
//
// Useful as a sanity check before extraction — the total
// utterance count here must equal the record count `extract`
// reports for the same directory.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::loader::UtteranceFileLoader;
use crate::domain::corpus::CorpusFile;
use crate::domain::traits::CorpusSource;

/// Counts for one corpus file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStats {
    /// The corpus file name these counts belong to
    pub source: String,

    /// Number of utterances in the file
    pub utterances: usize,

    /// Total number of tokens across the file's utterances
    pub tokens: usize,
}

/// Aggregated counts for a whole corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusStats {
    /// One entry per corpus file, in loader order
    pub files: Vec<FileStats>,

    /// Total utterances across all files —
    /// equals the record count of an extraction run
    pub total_utterances: usize,

    /// Total tokens across all files
    pub total_tokens: usize,
}

impl CorpusStats {
    /// Compute stats from loaded corpus files
    pub fn from_files(files: &[CorpusFile]) -> Self {
        let per_file: Vec<FileStats> = files
            .iter()
            .map(|f| FileStats {
                source:     f.source.clone(),
                utterances: f.utterance_count(),
                tokens:     f.token_count(),
            })
            .collect();

        let total_utterances = per_file.iter().map(|f| f.utterances).sum();
        let total_tokens     = per_file.iter().map(|f| f.tokens).sum();

        Self {
            files: per_file,
            total_utterances,
            total_tokens,
        }
    }

    /// Number of corpus files counted
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

pub struct StatsUseCase {
    corpus_dir: String,
}

impl StatsUseCase {
    pub fn new(corpus_dir: impl Into<String>) -> Self {
        Self { corpus_dir: corpus_dir.into() }
    }

    /// Load the corpus and compute its counts
    pub fn execute(&self) -> Result<CorpusStats> {
        tracing::info!("Counting corpus in '{}'", self.corpus_dir);
        let loader = UtteranceFileLoader::new(&self.corpus_dir);
        let files  = loader.utterances_by_file()?;
        Ok(CorpusStats::from_files(&files))
    }
}

// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - UtteranceFileLoader implements CorpusSource
//   - Tests implement CorpusSource with an in-memory stub
//   - The application layer only sees CorpusSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use crate::domain::corpus::CorpusFile;
use anyhow::Result;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can supply a word-segmented corpus,
/// grouped by file.
///
/// This is the injection boundary around the upstream corpus
/// toolchain: everything downstream only ever asks for
/// "utterances grouped by file" and never sees how the corpus
/// was fetched or parsed.
///
/// Implementations:
///   - UtteranceFileLoader → reads pre-tokenized dump files
///   - (tests)             → in-memory stub corpora
pub trait CorpusSource {
    /// Load all corpus files, each with its utterances in order.
    /// Returns the files in a stable, deterministic order.
    fn utterances_by_file(&self) -> Result<Vec<CorpusFile>>;
}

// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO clap or tracing types
//   - Only plain Rust structs and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no corpus files on disk needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Tokens, utterances, and the per-file grouping of a corpus
pub mod corpus;

// One [text, segments] pair of the output fixture file
pub mod record;

// Core abstractions (traits) that other layers implement
pub mod traits;

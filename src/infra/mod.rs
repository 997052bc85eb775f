// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Handles the cross-cutting concerns that don't belong in
// any specific business layer:
//
//   fixture_store.rs — Fixture file persistence
//                      Serializes the record list to compact
//                      JSON and writes it to disk, and reads
//                      an existing fixture file back for the
//                      verify command. The on-disk shape is an
//                      array of [text, segments] pairs.
//
// Why is this a separate layer?
//   Serialization and file layout are shared by the extract
//   and verify use cases but belong to neither. Keeping them
//   here makes it easy to swap the storage format without
//   touching the pipeline.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Fixture file saving and loading
pub mod fixture_store;

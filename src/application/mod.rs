// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (extracting, counting, or verifying).
//
// Rules for this layer:
//   - No UI or printing here (that's Layer 1)
//   - No direct parsing of dump files (that's Layer 4)
//   - No direct JSON encoding (that's Layer 5)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The extraction workflow: load → flatten → write fixture
pub mod extract_use_case;

// Corpus size reporting over the same loader output
pub mod stats_use_case;

// Invariant checking over an existing fixture file
pub mod verify_use_case;

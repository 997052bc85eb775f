// ============================================================
// Layer 5 — Fixture Store
// ============================================================
// Saves and restores the segmentation fixture file.
//
// On-disk format:
//   A single UTF-8 JSON document whose top-level value is an
//   array; each element is a 2-element array:
//     [["你好", ["你", "好"]], ["多謝你", ["多", "謝", "你"]], ...]
//
// The encoding is compact (no pretty-printing) and fully
// determined by the record list — serde_json emits the same
// bytes for the same input every time, which is what makes
// repeated extraction runs byte-identical.
//
// Writing overwrites any existing file at the path in place.
// There is no atomic temp-file-then-rename discipline: this is
// a one-shot preparation tool, and a failed run's output is
// simply regenerated.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::record::SegmentationRecord;

/// Manages reading and writing of the fixture JSON file.
pub struct FixtureStore {
    /// Full path to the fixture file
    path: PathBuf,
}

impl FixtureStore {
    /// Create a new FixtureStore for the given file path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: PathBuf::from(path.into()) }
    }

    /// Serialize the records and write them to the fixture path.
    /// Parent directories are created if missing; an existing
    /// file is overwritten.
    pub fn save(&self, records: &[SegmentationRecord]) -> Result<()> {
        // create_dir_all creates parent directories too, like `mkdir -p`
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Cannot create output directory '{}'", parent.display())
                })?;
            }
        }

        let json = serde_json::to_string(records)?;

        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write fixture to '{}'", self.path.display()))?;

        tracing::debug!(
            "Saved {} records to '{}'",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Read the fixture file back into a record list.
    /// Used by the verify command and by tests.
    pub fn load(&self) -> Result<Vec<SegmentationRecord>> {
        let json = fs::read_to_string(&self.path).with_context(|| {
            format!(
                "Cannot read fixture from '{}'. \
                 Have you run 'extract' first?",
                self.path.display()
            )
        })?;

        // Deserialize the array of [text, segments] pairs
        serde_json::from_str(&json).with_context(|| {
            format!("'{}' is not a valid fixture file", self.path.display())
        })
    }

    /// Return the path of the fixture file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

// ============================================================
// Layer 2 — Verify Use Case
// ============================================================
// Reads an existing fixture file back and checks, for every
// record, that the text equals the concatenation of its
// segments. Extraction guarantees this by construction, so a
// failure here means the file was edited by hand or produced
// by something else.
//
// Steps:
//   Step 1: Load the fixture file    (Layer 5 - infra)
//   Step 2: Check every record       (Layer 3 - domain)

use anyhow::{bail, Result};

use crate::infra::fixture_store::FixtureStore;

pub struct VerifyUseCase {
    fixture_path: String,
}

impl VerifyUseCase {
    pub fn new(fixture_path: impl Into<String>) -> Self {
        Self { fixture_path: fixture_path.into() }
    }

    /// Load the fixture and check the concatenation invariant.
    /// Returns the number of records checked, or an error naming
    /// the first inconsistent record.
    pub fn execute(&self) -> Result<usize> {
        let store   = FixtureStore::new(&self.fixture_path);
        let records = store.load()?;

        for (i, record) in records.iter().enumerate() {
            if !record.is_consistent() {
                bail!(
                    "Record {} is inconsistent: text '{}' does not equal \
                     the concatenation of its {} segments",
                    i,
                    record.text,
                    record.segment_count()
                );
            }
        }

        tracing::info!(
            "Verified {} records in '{}'",
            records.len(),
            self.fixture_path
        );
        Ok(records.len())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::SegmentationRecord;
    use std::fs;

    #[test]
    fn test_accepts_a_well_formed_fixture() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = tmp.path().join("fixture.json");
        FixtureStore::new(path.to_str().unwrap())
            .save(&[
                SegmentationRecord::from_segments(vec!["你".to_string(), "好".to_string()]),
            ])
            .unwrap();

        let checked = VerifyUseCase::new(path.to_str().unwrap()).execute().unwrap();
        assert_eq!(checked, 1);
    }

    #[test]
    fn test_accepts_an_empty_fixture() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = tmp.path().join("fixture.json");
        fs::write(&path, "[]").unwrap();

        let checked = VerifyUseCase::new(path.to_str().unwrap()).execute().unwrap();
        assert_eq!(checked, 0);
    }

    #[test]
    fn test_rejects_a_tampered_record() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = tmp.path().join("fixture.json");
        // text does not match the segments
        fs::write(&path, r#"[["你好",["多","謝"]]]"#).unwrap();

        assert!(VerifyUseCase::new(path.to_str().unwrap()).execute().is_err());
    }

    #[test]
    fn test_rejects_a_missing_file() {
        assert!(VerifyUseCase::new("/no/such/fixture.json").execute().is_err());
    }
}

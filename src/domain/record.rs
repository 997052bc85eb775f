// ============================================================
// Layer 3 — SegmentationRecord Domain Type
// ============================================================
// Represents a single entry of the output fixture file:
// one utterance's unsegmented text plus its gold segmentation.
//
// Example:
//   text:     "多謝你"
//   segments: ["多", "謝", "你"]
//
// The invariant this whole tool exists to guarantee:
//   text == segments joined with NO separator
// A record is only ever built through from_segments(), which
// makes the invariant hold by construction.
//
// On disk the record is a 2-element JSON array, NOT an object:
//   ["多謝你", ["多", "謝", "你"]]
// The #[serde(from/into)] attributes below map the struct onto
// a (String, Vec<String>) tuple so serde produces exactly that
// shape while the rest of the code gets named fields.
//
// Reference: Rust Book §5 (Structs)
//            serde.rs documentation (container attributes)

use serde::{Deserialize, Serialize};

/// One labelled segmentation example: the raw utterance text
/// and the ordered word segments that compose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, Vec<String>)", into = "(String, Vec<String>)")]
pub struct SegmentationRecord {
    /// The full utterance text with no separators
    pub text: String,

    /// The ordered word segments; concatenating them yields text
    pub segments: Vec<String>,
}

impl SegmentationRecord {
    /// Build a record from an ordered list of segments.
    /// The text is derived by concatenation, so the
    /// text == concat(segments) invariant cannot be violated.
    pub fn from_segments(segments: Vec<String>) -> Self {
        let text = segments.concat();
        Self { text, segments }
    }

    /// Check the concatenation invariant on an already-built record.
    /// Always true for records built here; used by `verify` to
    /// validate fixture files read back from disk.
    pub fn is_consistent(&self) -> bool {
        self.text == self.segments.concat()
    }

    /// Number of segments in this record
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// Deserialization goes through the on-disk tuple shape
impl From<(String, Vec<String>)> for SegmentationRecord {
    fn from((text, segments): (String, Vec<String>)) -> Self {
        Self { text, segments }
    }
}

/// Serialization goes through the on-disk tuple shape
impl From<SegmentationRecord> for (String, Vec<String>) {
    fn from(r: SegmentationRecord) -> Self {
        (r.text, r.segments)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_concatenation_of_segments() {
        let r = SegmentationRecord::from_segments(vec![
            "多".to_string(),
            "謝".to_string(),
            "你".to_string(),
        ]);
        assert_eq!(r.text, "多謝你");
        assert!(r.is_consistent());
    }

    #[test]
    fn test_empty_segments_give_empty_text() {
        let r = SegmentationRecord::from_segments(Vec::new());
        assert_eq!(r.text, "");
        assert_eq!(r.segment_count(), 0);
        assert!(r.is_consistent());
    }

    #[test]
    fn test_empty_string_segment_survives() {
        // An empty word adds an element to segments but nothing to text
        let r = SegmentationRecord::from_segments(vec!["".to_string(), "好".to_string()]);
        assert_eq!(r.text, "好");
        assert_eq!(r.segment_count(), 2);
        assert!(r.is_consistent());
    }

    #[test]
    fn test_serializes_as_two_element_array() {
        let r = SegmentationRecord::from_segments(vec!["你".to_string(), "好".to_string()]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"["你好",["你","好"]]"#);
    }

    #[test]
    fn test_deserializes_from_two_element_array() {
        let r: SegmentationRecord =
            serde_json::from_str(r#"["你好",["你","好"]]"#).unwrap();
        assert_eq!(r.text, "你好");
        assert_eq!(r.segments, vec!["你", "好"]);
    }

    #[test]
    fn test_inconsistent_record_is_detected() {
        // A hand-built (deserialized) record can break the invariant
        let r: SegmentationRecord =
            serde_json::from_str(r#"["你好",["多","謝"]]"#).unwrap();
        assert!(!r.is_consistent());
    }
}

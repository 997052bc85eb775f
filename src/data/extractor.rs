// ============================================================
// Layer 4 — Record Extractor
// ============================================================
// Flattens a loaded corpus into the output record list.
//
// For each file, for each utterance (both orders preserved):
//   segments = the utterance's token words, in order
//   text     = the segments concatenated with no separator
//
// The per-file grouping is intentionally dropped here — the
// fixture consumers want one flat list of examples, and only
// the per-utterance grouping survives into the output.
//
// No filtering, deduplication, or normalization happens at this
// step. What the loader produced is what gets serialized; an
// empty token contributes an empty segment and nothing to the
// text.
//
// Reference: Rust Book §13 (Iterators)

use crate::domain::corpus::CorpusFile;
use crate::domain::record::SegmentationRecord;

pub struct Extractor;

impl Extractor {
    /// Create a new Extractor instance
    pub fn new() -> Self {
        Self
    }

    /// Flatten corpus files into one list of segmentation records,
    /// in (file, utterance-within-file) order.
    pub fn extract(&self, files: &[CorpusFile]) -> Vec<SegmentationRecord> {
        let mut records = Vec::new();

        for file in files {
            for utt in &file.utterances {
                // Pull out the word strings in token order
                let segments: Vec<String> =
                    utt.tokens.iter().map(|t| t.word.clone()).collect();

                // from_segments derives the text by concatenation,
                // so text == concat(segments) holds by construction
                records.push(SegmentationRecord::from_segments(segments));
            }
        }

        tracing::info!(
            "Extracted {} records from {} corpus files",
            records.len(),
            files.len()
        );

        records
    }
}

/// Implement Default so Extractor can be created with Extractor::default()
impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::corpus::Utterance;

    fn sample_corpus() -> Vec<CorpusFile> {
        vec![CorpusFile::new(
            "a.txt",
            vec![
                Utterance::from_words(["你", "好"]),
                Utterance::from_words(["多", "謝", "你"]),
            ],
        )]
    }

    #[test]
    fn test_record_per_utterance() {
        let records = Extractor::new().extract(&sample_corpus());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "你好");
        assert_eq!(records[0].segments, vec!["你", "好"]);
        assert_eq!(records[1].text, "多謝你");
        assert_eq!(records[1].segments, vec!["多", "謝", "你"]);
    }

    #[test]
    fn test_invariant_holds_for_every_record() {
        for r in Extractor::new().extract(&sample_corpus()) {
            assert!(r.is_consistent());
        }
    }

    #[test]
    fn test_empty_corpus_gives_no_records() {
        let records = Extractor::new().extract(&[]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_file_grouping_is_flattened() {
        let files = vec![
            CorpusFile::new("a.txt", vec![Utterance::from_words(["你"])]),
            CorpusFile::new("b.txt", vec![Utterance::from_words(["好"])]),
        ];
        let records = Extractor::new().extract(&files);
        // One flat list, file order preserved, grouping gone
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "你");
        assert_eq!(records[1].text, "好");
    }

    #[test]
    fn test_empty_token_is_not_special_cased() {
        let files = vec![CorpusFile::new(
            "a.txt",
            vec![Utterance::from_words(["", "好"])],
        )];
        let records = Extractor::new().extract(&files);
        assert_eq!(records[0].segments, vec!["", "好"]);
        assert_eq!(records[0].text, "好");
    }

    #[test]
    fn test_utterance_with_no_tokens_still_yields_a_record() {
        let files = vec![CorpusFile::new(
            "a.txt",
            vec![Utterance::new(Vec::new())],
        )];
        let records = Extractor::new().extract(&files);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "");
        assert!(records[0].segments.is_empty());
    }
}

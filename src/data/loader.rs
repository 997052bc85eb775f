// ============================================================
// Layer 4 — Utterance Dump Loader
// ============================================================
// Loads pre-tokenized utterance files from a directory.
//
// The upstream corpus toolchain (the HKCanCor distribution and
// its CHAT-format reader) already does the hard work of word
// segmentation. We deliberately do NOT re-parse CHAT transcripts
// here — this loader only reads the toolchain's dump format:
//
//   one utterance per line
//   tokens separated by whitespace
//   lines starting with '#' are provenance headers, skipped
//   blank lines are skipped
//
// Example dump file:
//   # HKCanCor session FC-001
//   你 好
//   多 謝 你
//
// File ordering: fs::read_dir returns entries in an OS-dependent
// order, so the paths are sorted by file name before reading.
// Repeated runs over the same corpus must produce byte-identical
// output.
//
// Reference: Rust Book §8 (Collections)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::corpus::{CorpusFile, Utterance};
use crate::domain::traits::CorpusSource;

/// Loads all .txt utterance dumps from a given directory.
/// Implements the CorpusSource trait from Layer 3.
pub struct UtteranceFileLoader {
    /// Path to the directory containing utterance dump files
    dir: String,
}

impl UtteranceFileLoader {
    /// Create a new UtteranceFileLoader pointed at a directory
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Implement the CorpusSource trait so the application layer
/// can call utterances_by_file() without knowing about the
/// dump format
impl CorpusSource for UtteranceFileLoader {
    fn utterances_by_file(&self) -> Result<Vec<CorpusFile>> {
        let dir = Path::new(&self.dir);

        // A missing corpus directory is fatal — this tool has
        // nothing useful to do without its input, so the error
        // propagates all the way to main.
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Cannot read corpus directory '{}'", self.dir))?;

        // Collect the .txt paths first so they can be sorted —
        // directory order is OS-dependent
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path  = entry.path();

            // Only process files with the .txt extension
            if path.extension().and_then(|e| e.to_str()) == Some("txt") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut files = Vec::new();
        for path in &paths {
            let file = load_single_dump(path)?;
            tracing::debug!(
                "Loaded: {} ({} utterances)",
                file.source,
                file.utterance_count()
            );
            files.push(file);
        }

        tracing::info!("Successfully loaded {} corpus files", files.len());
        Ok(files)
    }
}

/// Parse a single utterance dump file and return a CorpusFile.
/// Line order becomes utterance order.
fn load_single_dump(path: &Path) -> Result<CorpusFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let mut utterances = Vec::new();

    for line in content.lines() {
        // Skip blank lines and '#' header lines — everything
        // else is one utterance
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // split_whitespace never yields empty strings, so a dump
        // line cannot produce an empty token — only in-memory
        // sources can (and the extractor handles those too)
        utterances.push(Utterance::from_words(trimmed.split_whitespace()));
    }

    // Use the filename as the source identifier
    let source = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(CorpusFile::new(source, utterances))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dump(dir: &Path, name: &str, content: &str) {
        let mut f = fs::File::create(dir.join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_loads_utterances_in_line_order() {
        let tmp = tempfile::tempdir().unwrap();
        write_dump(tmp.path(), "a.txt", "你 好\n多 謝 你\n");

        let loader = UtteranceFileLoader::new(tmp.path().to_str().unwrap());
        let files  = loader.utterances_by_file().unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].source, "a.txt");
        assert_eq!(files[0].utterances[0], Utterance::from_words(["你", "好"]));
        assert_eq!(files[0].utterances[1], Utterance::from_words(["多", "謝", "你"]));
    }

    #[test]
    fn test_skips_headers_and_blank_lines() {
        let tmp = tempfile::tempdir().unwrap();
        write_dump(tmp.path(), "a.txt", "# session FC-001\n\n你 好\n\n");

        let loader = UtteranceFileLoader::new(tmp.path().to_str().unwrap());
        let files  = loader.utterances_by_file().unwrap();

        assert_eq!(files[0].utterance_count(), 1);
    }

    #[test]
    fn test_files_are_visited_in_name_order() {
        let tmp = tempfile::tempdir().unwrap();
        // Create out of order on purpose — the loader must sort
        write_dump(tmp.path(), "b.txt", "好\n");
        write_dump(tmp.path(), "a.txt", "你\n");

        let loader = UtteranceFileLoader::new(tmp.path().to_str().unwrap());
        let files  = loader.utterances_by_file().unwrap();

        assert_eq!(files[0].source, "a.txt");
        assert_eq!(files[1].source, "b.txt");
    }

    #[test]
    fn test_non_txt_files_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        write_dump(tmp.path(), "a.txt", "你 好\n");
        write_dump(tmp.path(), "notes.md", "not corpus data\n");

        let loader = UtteranceFileLoader::new(tmp.path().to_str().unwrap());
        let files  = loader.utterances_by_file().unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let loader = UtteranceFileLoader::new("/no/such/dir");
        assert!(loader.utterances_by_file().is_err());
    }

    #[test]
    fn test_empty_directory_gives_empty_corpus() {
        let tmp    = tempfile::tempdir().unwrap();
        let loader = UtteranceFileLoader::new(tmp.path().to_str().unwrap());
        let files  = loader.utterances_by_file().unwrap();
        assert!(files.is_empty());
    }
}

// ============================================================
// Layer 3 — Corpus Domain Types
// ============================================================
// Plain data structs describing a word-segmented corpus the way
// the loader hands it to us:
//
//   CorpusFile
//     └── utterances: Vec<Utterance>
//           └── tokens: Vec<Token>
//                 └── word: String   (the actual segment!)
//
// All three are read-only after loading — nothing downstream
// mutates a corpus, it is only iterated and flattened.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §8 (Collections)

use serde::{Deserialize, Serialize};

/// One word unit of an utterance.
///
/// The word string is carried through exactly as the loader
/// produced it — segmentation markers and punctuation included.
/// An empty word is legal and is NOT special-cased anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form of this segment
    pub word: String,
}

impl Token {
    /// Create a new Token.
    /// Uses impl Into<String> so callers can pass &str or String —
    /// this is idiomatic Rust for flexible string arguments.
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

/// One utterance — an ordered sequence of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    /// The tokens of this utterance, in corpus order
    pub tokens: Vec<Token>,
}

impl Utterance {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Build an utterance from bare word strings.
    /// Mostly a convenience for the loader and for tests.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: words.into_iter().map(Token::new).collect(),
        }
    }

    /// Number of tokens in this utterance
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// One corpus file — a named, ordered sequence of utterances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusFile {
    /// The filename — kept for traceability so stats and log
    /// messages can say which file a count came from
    pub source: String,

    /// The utterances of this file, in file order
    pub utterances: Vec<Utterance>,
}

impl CorpusFile {
    pub fn new(source: impl Into<String>, utterances: Vec<Utterance>) -> Self {
        Self {
            source: source.into(),
            utterances,
        }
    }

    /// Number of utterances in this file
    pub fn utterance_count(&self) -> usize {
        self.utterances.len()
    }

    /// Total number of tokens across all utterances in this file
    pub fn token_count(&self) -> usize {
        self.utterances.iter().map(Utterance::token_count).sum()
    }
}

//! Stop word filtering
//!
//! The default English list is embedded and built once per process.
//! Callers that need a different vocabulary inject their own [`StopWords`].

use ahash::AHashSet;
use once_cell::sync::Lazy;

/// Common English function words that carry little topical signal
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by",
    "can", "do", "does", "for", "from", "go", "has", "have", "he",
    "her", "him", "his", "how", "i", "if", "in", "is", "it", "its",
    "just", "me", "my", "no", "not", "of", "on", "or", "our", "out",
    "she", "so", "some", "such", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "this", "those", "to", "up",
    "us", "was", "we", "what", "when", "where", "which", "who", "whom",
    "why", "will", "with", "you", "your",
];

static ENGLISH: Lazy<StopWords> = Lazy::new(|| StopWords::from_list(ENGLISH_STOP_WORDS));

/// An immutable-by-default set of lowercase stop words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: AHashSet<String>,
}

impl StopWords {
    /// The shared embedded English list
    pub fn english() -> &'static StopWords {
        &ENGLISH
    }

    /// A set that filters nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from a custom list; entries are lowercased
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut set = Self::empty();
        set.extend(words);
        set
    }

    /// Add more words to the set
    pub fn extend<S: AsRef<str>>(&mut self, words: &[S]) {
        self.words.extend(
            words
                .iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    /// Check a normalized (lowercase) token against the set
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

//! Document-wide word frequencies
//!
//! Counts span the whole document rather than single sentences, so the
//! resulting weights reflect which words the document as a whole repeats.

use ahash::AHashMap;

use crate::stopwords::StopWords;
use crate::tokenizer::{normalize, Tokens};

/// Mapping from normalized word to a strictly positive occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: AHashMap<String, u32>,
}

impl WordFrequencies {
    /// Count every non-stop token of `text`
    pub fn count(text: &str, stop_words: &StopWords) -> Self {
        let normalized = normalize(text);
        let mut counts: AHashMap<String, u32> = AHashMap::new();

        for token in Tokens::new(&normalized) {
            if stop_words.contains(token) {
                continue;
            }
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_owned(), 1);
                }
            }
        }

        Self { counts }
    }

    /// Occurrence count of a normalized word, if it was seen
    pub fn get(&self, word: &str) -> Option<u32> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(word, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// The `n` most frequent words, highest count first, ties alphabetical
    pub fn most_common(&self, n: usize) -> Vec<(&str, u32)> {
        let mut words: Vec<(&str, u32)> = self.iter().collect();
        words.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(n);
        words
    }
}

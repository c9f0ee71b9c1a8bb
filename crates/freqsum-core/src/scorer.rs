//! Sentence scoring
//!
//! A sentence scores the sum of the document-wide frequencies of its tokens.
//! Stop words are already absent from the frequency map, so they add nothing.

use ahash::AHashMap;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::frequency::WordFrequencies;
use crate::splitter::Sentence;
use crate::tokenizer::{normalize, Tokens};

/// Sentence position -> score, for sentences with at least one scored token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceScores {
    scores: AHashMap<usize, u64>,
}

impl SentenceScores {
    /// Score of a sentence; unscored sentences count as 0
    pub fn get(&self, position: usize) -> u64 {
        self.scores.get(&position).copied().unwrap_or(0)
    }

    /// Whether any token of the sentence was found in the frequency map
    pub fn contains(&self, position: usize) -> bool {
        self.scores.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.scores.iter().map(|(&position, &score)| (position, score))
    }
}

impl FromIterator<(usize, u64)> for SentenceScores {
    fn from_iter<I: IntoIterator<Item = (usize, u64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Score one sentence; `None` when none of its tokens carry a frequency
pub fn score_sentence(text: &str, frequencies: &WordFrequencies) -> Option<u64> {
    let normalized = normalize(text);
    let mut score = None;
    for token in Tokens::new(&normalized) {
        if let Some(freq) = frequencies.get(token) {
            *score.get_or_insert(0) += u64::from(freq);
        }
    }
    score
}

/// Score every sentence against the document frequencies
#[cfg(not(feature = "parallel"))]
pub fn score_sentences(
    sentences: &[Sentence<'_>],
    frequencies: &WordFrequencies,
) -> SentenceScores {
    sentences
        .iter()
        .filter_map(|s| score_sentence(s.text, frequencies).map(|score| (s.position, score)))
        .collect()
}

/// Score every sentence against the document frequencies
#[cfg(feature = "parallel")]
pub fn score_sentences(
    sentences: &[Sentence<'_>],
    frequencies: &WordFrequencies,
) -> SentenceScores {
    let scored: Vec<(usize, u64)> = sentences
        .par_iter()
        .filter_map(|s| score_sentence(s.text, frequencies).map(|score| (s.position, score)))
        .collect();
    scored.into_iter().collect()
}

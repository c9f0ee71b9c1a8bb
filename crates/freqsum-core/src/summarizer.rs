//! Extractive summarization
//!
//! Ties the pipeline together: split the document into sentences, weight
//! words by their frequency across the whole document, score each sentence
//! by the weights of its words and keep the best sentences in their
//! original order.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, SummarizeError};
use crate::frequency::WordFrequencies;
use crate::scorer::score_sentences;
use crate::selector::select_top_k;
use crate::splitter::split_sentences;
use crate::stopwords::StopWords;

/// Number of sentences kept when the caller does not ask for a count
pub const DEFAULT_NUM_SENTENCES: usize = 5;

/// Stop word configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopWordConfig {
    /// Start from the embedded English list
    pub use_default: bool,
    /// Additional words to ignore
    pub extra: Vec<String>,
}

impl Default for StopWordConfig {
    fn default() -> Self {
        Self {
            use_default: true,
            extra: Vec::new(),
        }
    }
}

impl StopWordConfig {
    fn build(&self) -> Cow<'static, StopWords> {
        match (self.use_default, self.extra.is_empty()) {
            (true, true) => Cow::Borrowed(StopWords::english()),
            (true, false) => {
                let mut words = StopWords::english().clone();
                words.extend(self.extra.as_slice());
                Cow::Owned(words)
            }
            (false, _) => Cow::Owned(StopWords::from_list(self.extra.as_slice())),
        }
    }
}

/// Summarizer parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    pub num_sentences: usize,
    pub stop_words: StopWordConfig,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            num_sentences: DEFAULT_NUM_SENTENCES,
            stop_words: StopWordConfig::default(),
        }
    }
}

/// A sentence kept in the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedSentence<'a> {
    pub position: usize,
    pub score: u64,
    pub text: &'a str,
}

/// Summary of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary<'a> {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence<'a>>,
    /// Number of sentences the document was split into
    pub total_sentences: usize,
}

impl Summary<'_> {
    /// The selected sentences joined by single spaces
    pub fn text(&self) -> String {
        self.to_string()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sentence) in self.sentences.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(sentence.text)?;
        }
        Ok(())
    }
}

/// Frequency-based extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    num_sentences: usize,
    stop_words: Cow<'static, StopWords>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Summarizer with the default sentence count and English stop words
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            num_sentences: config.num_sentences,
            stop_words: config.stop_words.build(),
        }
    }

    /// Replace the stop word set
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Cow::Owned(stop_words);
        self
    }

    /// Set the number of sentences to keep
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    pub fn num_sentences(&self) -> usize {
        self.num_sentences
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Summarize a document
    pub fn summarize<'a>(&self, text: &'a str) -> Result<Summary<'a>> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Err(SummarizeError::NoSentences);
        }

        let frequencies = WordFrequencies::count(text, &self.stop_words);
        let scores = score_sentences(&sentences, &frequencies);
        debug!(
            sentences = sentences.len(),
            vocabulary = frequencies.len(),
            scored = scores.len(),
            "scored document"
        );

        let total_sentences = sentences.len();
        let selected: Vec<SelectedSentence<'a>> =
            select_top_k(&scores, self.num_sentences, total_sentences)
                .into_iter()
                .map(|position| {
                    let score = scores.get(position);
                    trace!(position, score, "selected sentence");
                    SelectedSentence {
                        position,
                        score,
                        text: sentences[position].text,
                    }
                })
                .collect();

        debug!(
            requested = self.num_sentences,
            selected = selected.len(),
            "built summary"
        );

        Ok(Summary {
            sentences: selected,
            total_sentences,
        })
    }
}

/// Summarize `text` down to `num_sentences` sentences with English stop words
pub fn summarize(text: &str, num_sentences: usize) -> Result<String> {
    Summarizer::new()
        .with_num_sentences(num_sentences)
        .summarize(text)
        .map(|summary| summary.text())
}

//! freqsum core - frequency-based extractive summarization
//!
//! Splits a document into sentences, weights words by how often the
//! document uses them, and keeps the highest-scoring sentences in their
//! original order.

pub mod error;
pub mod frequency;
pub mod scorer;
pub mod selector;
pub mod splitter;
pub mod stopwords;
pub mod summarizer;
pub mod tokenizer;

pub use error::{Result, SummarizeError};
pub use frequency::WordFrequencies;
pub use scorer::{score_sentences, SentenceScores};
pub use selector::select_top_k;
pub use splitter::{split_sentences, Sentence};
pub use stopwords::{StopWords, ENGLISH_STOP_WORDS};
pub use summarizer::{
    summarize, SelectedSentence, StopWordConfig, Summarizer, SummarizerConfig, Summary,
    DEFAULT_NUM_SENTENCES,
};

//! Python bindings for the freqsum summarizer

use freqsum_core::{StopWords, SummarizeError, Summarizer as CoreSummarizer, DEFAULT_NUM_SENTENCES};
use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

create_exception!(freqsum_rust, EmptyInputError, PyValueError);
create_exception!(freqsum_rust, NoSentencesError, PyValueError);

fn to_py_err(err: SummarizeError) -> PyErr {
    match err {
        SummarizeError::EmptyInput => EmptyInputError::new_err(err.to_string()),
        SummarizeError::NoSentences => NoSentencesError::new_err(err.to_string()),
    }
}

/// Python-exposed summarizer
#[pyclass]
pub struct Summarizer {
    inner: CoreSummarizer,
}

#[pymethods]
impl Summarizer {
    /// Create a summarizer
    ///
    /// Args:
    ///     num_sentences: Sentences to keep (default: 5)
    ///     stop_words: Words to ignore instead of the built-in English list
    #[new]
    #[pyo3(signature = (num_sentences=DEFAULT_NUM_SENTENCES, stop_words=None))]
    fn new(num_sentences: usize, stop_words: Option<Vec<String>>) -> Self {
        let mut inner = CoreSummarizer::new().with_num_sentences(num_sentences);
        if let Some(words) = stop_words {
            inner = inner.with_stop_words(StopWords::from_list(words.as_slice()));
        }
        Self { inner }
    }

    /// Summarize text
    ///
    /// Returns:
    ///     The selected sentences joined by single spaces
    fn summarize(&self, text: &str) -> PyResult<String> {
        self.inner
            .summarize(text)
            .map(|summary| summary.text())
            .map_err(to_py_err)
    }

    /// Summarize text, keeping sentence positions and scores
    ///
    /// Returns:
    ///     List of (position, score, text) tuples in document order
    fn summarize_detailed(&self, text: &str) -> PyResult<Vec<(usize, u64, String)>> {
        let summary = self.inner.summarize(text).map_err(to_py_err)?;
        Ok(summary
            .sentences
            .into_iter()
            .map(|s| (s.position, s.score, s.text.to_string()))
            .collect())
    }

    #[getter]
    fn num_sentences(&self) -> usize {
        self.inner.num_sentences()
    }

    fn __repr__(&self) -> String {
        format!(
            "Summarizer(num_sentences={}, stop_words={})",
            self.inner.num_sentences(),
            self.inner.stop_words().len()
        )
    }
}

/// Summarize an article down to its most representative sentences
///
/// Args:
///     article_text: Text to summarize
///     num_sentences: Sentences to keep (default: 5)
///
/// Raises:
///     EmptyInputError: the text is empty or whitespace
///     NoSentencesError: no sentences could be found
#[pyfunction]
#[pyo3(signature = (article_text, num_sentences=DEFAULT_NUM_SENTENCES))]
fn summarize(article_text: &str, num_sentences: usize) -> PyResult<String> {
    freqsum_core::summarize(article_text, num_sentences).map_err(to_py_err)
}

/// Python module
#[pymodule]
fn freqsum_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(summarize, m)?)?;
    m.add_class::<Summarizer>()?;
    m.add("EmptyInputError", m.py().get_type_bound::<EmptyInputError>())?;
    m.add("NoSentencesError", m.py().get_type_bound::<NoSentencesError>())?;
    Ok(())
}

//! Word tokenizer for frequency counting and sentence scoring
//!
//! Text is lowercased, then scanned for maximal runs of ASCII letters.
//! Everything else (digits, underscores, punctuation, whitespace and
//! non-ASCII letters) separates tokens and is dropped.

/// Lowercase text ahead of token scanning
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Iterator over the alphabetic runs of already normalized text
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(normalized: &'a str) -> Self {
        Self {
            text: normalized,
            pos: 0,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        // ASCII bytes never occur inside a multi-byte UTF-8 sequence, so
        // byte offsets at letter boundaries are always char boundaries.
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_lowercase() {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_lowercase() {
            self.pos += 1;
        }
        Some(&self.text[start..self.pos])
    }
}

/// Tokenize text into owned lowercase terms
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    Tokens::new(&normalized).map(str::to_owned).collect()
}

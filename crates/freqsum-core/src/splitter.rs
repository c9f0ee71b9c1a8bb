//! Sentence segmentation
//!
//! A sentence ends at `.`, `!` or `?` when the mark is followed by whitespace
//! or by the end of the input. Abbreviations, decimals and quoted punctuation
//! are not special-cased: "Dr. Smith" is two sentences.

use serde::Serialize;

/// A trimmed sentence borrowed from the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sentence<'a> {
    /// Zero-based position in the document's sentence sequence
    pub position: usize,
    pub text: &'a str,
}

fn is_terminal(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Split text into non-empty trimmed sentences, in document order
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch.is_whitespace() && prev.is_some_and(is_terminal) {
            let mut end = idx + ch.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }
            push_fragment(&text[start..idx], &mut sentences);
            start = end;
            prev = None;
            continue;
        }
        prev = Some(ch);
    }
    push_fragment(&text[start..], &mut sentences);

    sentences
}

fn push_fragment<'a>(fragment: &'a str, sentences: &mut Vec<Sentence<'a>>) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(Sentence {
            position: sentences.len(),
            text: trimmed,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(sentences: &[Sentence<'a>]) -> Vec<&'a str> {
        sentences.iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_basic_split() {
        let sentences = split_sentences("Cats are mammals. Cats chase mice! Do dogs bark? Yes.");
        assert_eq!(
            texts(&sentences),
            vec!["Cats are mammals.", "Cats chase mice!", "Do dogs bark?", "Yes."]
        );
    }

    #[test]
    fn test_positions_are_contiguous() {
        let sentences = split_sentences("  One.   Two.\n\nThree.  ");
        let positions: Vec<usize> = sentences.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(texts(&sentences), vec!["One.", "Two.", "Three."]);
    }

    #[test]
    fn test_no_split_without_whitespace() {
        let sentences = split_sentences("Version 1.5 shipped.Then v2 came. Done");
        assert_eq!(
            texts(&sentences),
            vec!["Version 1.5 shipped.Then v2 came.", "Done"]
        );
    }

    #[test]
    fn test_abbreviations_are_not_special() {
        let sentences = split_sentences("Dr. Smith arrived.");
        assert_eq!(texts(&sentences), vec!["Dr.", "Smith arrived."]);
    }

    #[test]
    fn test_unterminated_text_is_one_sentence() {
        let sentences = split_sentences("no terminal punctuation here");
        assert_eq!(texts(&sentences), vec!["no terminal punctuation here"]);
    }

    #[test]
    fn test_multiline_sentence_keeps_inner_newlines() {
        let sentences = split_sentences("This spans\n    two lines. Next.");
        assert_eq!(texts(&sentences), vec!["This spans\n    two lines.", "Next."]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences(" \n\t ").is_empty());
    }

    #[test]
    fn test_repeated_terminals() {
        let sentences = split_sentences("Really?! Yes... Fine.");
        assert_eq!(texts(&sentences), vec!["Really?!", "Yes...", "Fine."]);
    }
}

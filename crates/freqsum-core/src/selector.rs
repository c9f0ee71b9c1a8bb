//! Top-K sentence selection
//!
//! Every sentence is a candidate; a sentence without a score ranks as 0.
//! Candidates are ordered by score descending, then by position ascending,
//! so among equal scores the earlier sentence is kept. The chosen positions
//! are returned in document order.

use std::cmp::Ordering;

use crate::scorer::SentenceScores;

/// Pick up to `k` sentence positions out of `total_sentences`
pub fn select_top_k(scores: &SentenceScores, k: usize, total_sentences: usize) -> Vec<usize> {
    let k = k.min(total_sentences);
    if k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, u64)> = (0..total_sentences)
        .map(|position| (position, scores.get(position)))
        .collect();

    // Positions are unique, so this is a strict total order and the
    // partition below is deterministic.
    let by_rank = |a: &(usize, u64), b: &(usize, u64)| -> Ordering {
        b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
    };
    if k < ranked.len() {
        ranked.select_nth_unstable_by(k - 1, by_rank);
        ranked.truncate(k);
    }

    let mut selected: Vec<usize> = ranked.into_iter().map(|(position, _)| position).collect();
    selected.sort_unstable();
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(usize, u64)]) -> SentenceScores {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_selects_highest_in_document_order() {
        let scores = scores(&[(0, 1), (1, 9), (2, 4), (3, 7)]);
        assert_eq!(select_top_k(&scores, 2, 4), vec![1, 3]);
        assert_eq!(select_top_k(&scores, 3, 4), vec![1, 2, 3]);
    }

    #[test]
    fn test_ties_prefer_lower_position() {
        let scores = scores(&[(0, 3), (1, 4), (2, 3), (3, 3)]);
        assert_eq!(select_top_k(&scores, 2, 4), vec![0, 1]);
        assert_eq!(select_top_k(&scores, 3, 4), vec![0, 1, 2]);
    }

    #[test]
    fn test_clamps_to_total() {
        let scores = scores(&[(0, 1), (1, 2)]);
        assert_eq!(select_top_k(&scores, 10, 2), vec![0, 1]);
    }

    #[test]
    fn test_zero_k() {
        let scores = scores(&[(0, 1)]);
        assert!(select_top_k(&scores, 0, 1).is_empty());
    }

    #[test]
    fn test_unscored_sentences_rank_as_zero() {
        let scores = scores(&[(2, 5)]);
        assert_eq!(select_top_k(&scores, 1, 4), vec![2]);
        assert_eq!(select_top_k(&scores, 2, 4), vec![0, 2]);
    }

    #[test]
    fn test_empty_scores_still_select() {
        let scores = SentenceScores::default();
        assert_eq!(select_top_k(&scores, 2, 3), vec![0, 1]);
        assert!(select_top_k(&scores, 2, 0).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let scores = scores(&[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
        let first = select_top_k(&scores, 3, 5);
        for _ in 0..10 {
            assert_eq!(select_top_k(&scores, 3, 5), first);
        }
        assert_eq!(first, vec![0, 1, 2]);
    }
}

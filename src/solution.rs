//! The result of a successful search.

use crate::path::{PathArena, PathId};
use crate::word::Word;

/// Chosen line breaks for a paragraph.
///
/// Invariants:
/// - `indices` is strictly increasing; entry `k` is the index of the last
///   word on line `k`, so for a non-empty paragraph the final entry is `n-1`.
/// - `breaks[k]` is the word at `indices[k]`.
/// - `adjustments.len() == indices.len() + 1`: one space width (em) per line,
///   then a trailing natural value for the content after the last break.
/// - `score` is the sum of the badness of every line.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub indices: Vec<usize>,
    pub breaks: Vec<Word>,
    pub adjustments: Vec<f64>,
    pub score: f64,
}

impl Solution {
    /// Solution for a paragraph without words.
    pub fn empty(trailing_spacing: f64) -> Self {
        Self {
            indices: Vec::new(),
            breaks: Vec::new(),
            adjustments: vec![trailing_spacing],
            score: 0.0,
        }
    }

    pub(crate) fn from_path(
        arena: &PathArena,
        id: PathId,
        words: &[Word],
        trailing_spacing: f64,
    ) -> Self {
        let (indices, mut adjustments) = arena.trace(id);
        adjustments.push(trailing_spacing);
        let breaks = indices.iter().map(|&i| words[i].clone()).collect();
        Self {
            indices,
            breaks,
            adjustments,
            score: arena.get(id).score,
        }
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.indices.len()
    }

    /// Split `words` into the lines this solution describes.
    ///
    /// Words after the last break, if any, form one extra line.
    pub fn lines<'w>(&self, words: &'w [Word]) -> Vec<&'w [Word]> {
        let mut lines = Vec::with_capacity(self.indices.len() + 1);
        let mut start = 0usize;
        for &end in &self.indices {
            lines.push(&words[start..=end]);
            start = end + 1;
        }
        if start < words.len() {
            lines.push(&words[start..]);
        }
        lines
    }

    /// Each line paired with its space width.
    pub fn spaced_lines<'w>(&self, words: &'w [Word]) -> Vec<(&'w [Word], f64)> {
        self.lines(words)
            .into_iter()
            .zip(self.adjustments.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Word> {
        ["a", "bb", "cc", "d", "ee"].into_iter().map(Word::new).collect()
    }

    #[test]
    fn lines_partition_the_words() {
        let words = sample();
        let solution = Solution {
            indices: vec![1, 3, 4],
            breaks: vec![Word::new("bb"), Word::new("d"), Word::new("ee")],
            adjustments: vec![0.5, 0.6, 0.5, 0.5],
            score: 3.0,
        };
        let lines = solution.lines(&words);
        assert_eq!(lines.len(), 3);
        let rebuilt: Vec<&Word> = lines.iter().flat_map(|l| l.iter()).collect();
        assert_eq!(rebuilt, words.iter().collect::<Vec<_>>());
        assert_eq!(solution.spaced_lines(&words)[1].1, 0.6);
    }

    #[test]
    fn empty_solution_keeps_adjustment_invariant() {
        let solution = Solution::empty(0.5);
        assert_eq!(solution.adjustments.len(), solution.indices.len() + 1);
        assert!(solution.lines(&[]).is_empty());
        assert_eq!(solution.line_count(), 0);
    }

    #[test]
    fn from_path_collects_breaks() {
        let words = sample();
        let mut arena = PathArena::new();
        let first = arena.extend(arena.root(), 2, 4.0, 0.7);
        let second = arena.extend(first, 4, 4.0, 0.5);
        let solution = Solution::from_path(&arena, second, &words, 0.5);
        assert_eq!(solution.indices, vec![2, 4]);
        assert_eq!(solution.breaks, vec![Word::new("cc"), Word::new("ee")]);
        assert_eq!(solution.adjustments, vec![0.7, 0.5, 0.5]);
        assert_eq!(solution.score, 4.0);
    }
}

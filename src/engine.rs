//! Breakpoint search.
//!
//! The engine sweeps the words left to right. At word `i` every live
//! candidate path is asked whether the line from its last break up to `i`
//! is feasible:
//! 1. Feasible verdicts compete; the cheapest `score + badness` becomes one
//!    new path ending at `i`.
//! 2. Irrecoverably over-full verdicts remove the candidate for good.
//! 3. Under-full verdicts leave the candidate alive, since later words may
//!    fill its line.
//!
//! Extended candidates stay in the frontier as break origins for later
//! words. After the last word the cheapest path ending there is the answer.
//!
//! The engine is generic over the [`LineEvaluator`] that judges lines.

use crate::builder::BreakConfig;
use crate::demerits::{Demerits, Feasibility};
use crate::error::BreakError;
use crate::path::{Frontier, PathArena, PathId};
use crate::solution::Solution;
use crate::traits::LineEvaluator;
use crate::word::Word;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Optimal line breaker over a given cost model `E`.
///
/// Typical usage:
/// ```
/// use parbreak::{BreakConfig, BreakEngine, Word};
///
/// let words: Vec<Word> = "The quick brown fox jumps."
///     .split_whitespace()
///     .map(Word::new)
///     .collect();
/// let engine = BreakEngine::new(BreakConfig::new(20.0, 5.0));
/// let solution = engine.search(&words).unwrap();
/// assert_eq!(solution.indices, vec![3, 4]);
/// assert_eq!(solution.adjustments.len(), solution.indices.len() + 1);
/// ```
#[derive(Clone, Debug)]
pub struct BreakEngine<E: LineEvaluator = Demerits> {
    evaluator: E,
}

impl BreakEngine<Demerits> {
    /// Create an engine with the default cost model.
    ///
    /// # Panics
    /// Panics if `config` does not validate; use
    /// [`BreakEngineBuilder`](crate::BreakEngineBuilder) to get an error
    /// instead.
    pub fn new(config: BreakConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid break configuration: {err}");
        }
        Self::with_evaluator(config.demerits())
    }
}

/// Cheapest feasible extension found for the current word.
#[derive(Clone, Copy, Debug)]
struct Extension {
    origin: PathId,
    score: f64,
    em_width: f64,
}

impl<E: LineEvaluator> BreakEngine<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Find the minimum-badness set of line breaks for `words`.
    ///
    /// Fails with [`BreakError::InfeasibleParameters`] if no sequence of
    /// feasible lines covers the whole paragraph.
    pub fn search(&self, words: &[Word]) -> Result<Solution, BreakError> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "search",
            words = words.len(),
            target_width = self.evaluator.target_width(),
            tolerance = self.evaluator.tolerance()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let trailing = self.evaluator.natural_spacing();
        let Some(last) = words.len().checked_sub(1) else {
            return Ok(Solution::empty(trailing));
        };

        let mut arena = PathArena::new();
        let mut frontier = Frontier::new(arena.root());

        for end in 0..words.len() {
            if let Some(ext) = self.extend_frontier(words, &arena, &mut frontier, end, end == last)
            {
                let id = arena.extend(ext.origin, end, ext.score, ext.em_width);
                frontier.push(id);
            }
        }

        let best = frontier
            .ids()
            .iter()
            .copied()
            .filter(|&id| arena.get(id).end == Some(last))
            .min_by(|&a, &b| arena.get(a).score.total_cmp(&arena.get(b).score));

        match best {
            Some(id) => {
                let solution = Solution::from_path(&arena, id, words, trailing);
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    lines = solution.line_count(),
                    score = solution.score,
                    paths_created = arena.len(),
                    "selected break sequence"
                );
                Ok(solution)
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    live = frontier.len(),
                    paths_created = arena.len(),
                    "no path reaches the final word"
                );
                Err(BreakError::InfeasibleParameters {
                    target_width: self.evaluator.target_width(),
                    tolerance: self.evaluator.tolerance(),
                })
            }
        }
    }

    /// Evaluate every live candidate against the line ending at `end`,
    /// prune the irrecoverable ones and return the cheapest extension.
    fn extend_frontier(
        &self,
        words: &[Word],
        arena: &PathArena,
        frontier: &mut Frontier,
        end: usize,
        is_last: bool,
    ) -> Option<Extension> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("extend_frontier", end, live = frontier.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let verdicts =
            evaluate_frontier(&self.evaluator, words, arena, frontier.ids(), end, is_last);

        let mut best: Option<Extension> = None;
        let mut doomed = Vec::with_capacity(verdicts.len());
        for (&id, verdict) in frontier.ids().iter().zip(&verdicts) {
            doomed.push(verdict.is_irrecoverable());
            if let Feasibility::Feasible { badness, em_width } = *verdict {
                let score = arena.get(id).score + badness;
                if best.map_or(true, |b| score < b.score) {
                    best = Some(Extension {
                        origin: id,
                        score,
                        em_width,
                    });
                }
            }
        }

        let pruned = frontier.prune(&doomed);
        #[cfg(feature = "tracing")]
        {
            if pruned > 0 {
                tracing::trace!(end, pruned, live = frontier.len(), "pruned over-full candidates");
            }
        }
        #[cfg(not(feature = "tracing"))]
        let _ = pruned;

        best
    }
}

/// Verdicts for the line from each live path's last break to `end`, in
/// frontier order.
#[cfg(not(feature = "parallel"))]
fn evaluate_frontier<E: LineEvaluator>(
    evaluator: &E,
    words: &[Word],
    arena: &PathArena,
    live: &[PathId],
    end: usize,
    is_last: bool,
) -> Vec<Feasibility> {
    live.iter()
        .map(|&id| evaluator.evaluate(&words[arena.next_start(id)..=end], is_last))
        .collect()
}

/// Verdicts for the line from each live path's last break to `end`, in
/// frontier order. The reduction over these stays sequential, so ties break
/// exactly as in the serial build.
#[cfg(feature = "parallel")]
fn evaluate_frontier<E: LineEvaluator>(
    evaluator: &E,
    words: &[Word],
    arena: &PathArena,
    live: &[PathId],
    end: usize,
    is_last: bool,
) -> Vec<Feasibility> {
    live.par_iter()
        .map(|&id| evaluator.evaluate(&words[arena.next_start(id)..=end], is_last))
        .collect()
}

/// Run one search with the default cost model.
pub fn search(words: &[Word], target_width: f64, tolerance: f64) -> Result<Solution, BreakError> {
    let config = BreakConfig::new(target_width, tolerance);
    config.validate()?;
    BreakEngine::with_evaluator(config.demerits()).search(words)
}

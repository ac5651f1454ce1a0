//! Demerit evaluation for one candidate line.
//!
//! Lengths are measured in character units. A line's natural length is the sum
//! of its word lengths, one unit per inter-word gap, and one extra unit after
//! every sentence-ending word that is not the last on the line.
//!
//! Justifying to the target width spreads the difference evenly over the
//! gaps. Each gap may stretch by `stretch` units or shrink by `shrink` units at
//! most; the *adjustment ratio* expresses the required change as a fraction of
//! that budget. Ratios below `-1` are physically impossible (spaces would be
//! negative), ratios above the caller's tolerance are rejected as too loose.
//! Feasible lines cost `|ratio|^3 * 100 + 0.5`.

use crate::traits::LineEvaluator;
use crate::utils::{at_least, at_most, RATIO_EPSILON};
use crate::word::Word;

/// Inter-word spacing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    /// Width of an unadjusted space, in em.
    pub natural_em: f64,
    /// Stretch budget per gap, as a fraction of the natural space.
    pub stretch: f64,
    /// Shrink budget per gap, as a fraction of the natural space. At most
    /// `1`: a larger budget would allow negative spaces, and an over-full
    /// line could then recover by taking on more words, which the search
    /// relies on never happening.
    pub shrink: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            natural_em: 0.5,
            stretch: 0.5,
            shrink: 0.3,
        }
    }
}

impl Spacing {
    /// Space width in em for a given adjustment ratio.
    #[inline]
    pub fn em_width(&self, ratio: f64) -> f64 {
        let factor = if ratio <= 0.0 { self.shrink } else { self.stretch };
        ratio * factor * self.natural_em + self.natural_em
    }
}

/// The evaluator's verdict on a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Feasibility {
    /// The line may be set; `badness` is its cost and `em_width` the space
    /// width to justify it.
    Feasible { badness: f64, em_width: f64 },
    /// The line may not be set; `ratio` is the adjustment ratio it would have
    /// needed.
    Infeasible { ratio: f64 },
}

impl Feasibility {
    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self, Feasibility::Feasible { .. })
    }

    /// Over-full beyond repair: more words can only make it longer.
    #[inline]
    pub fn is_irrecoverable(&self) -> bool {
        matches!(*self, Feasibility::Infeasible { ratio } if !at_least(ratio, -1.0))
    }

    pub fn badness(&self) -> Option<f64> {
        match *self {
            Feasibility::Feasible { badness, .. } => Some(badness),
            Feasibility::Infeasible { .. } => None,
        }
    }
}

/// Natural (unadjusted) length of `line` in character units.
pub fn natural_length(line: &[Word]) -> usize {
    let Some((_, body)) = line.split_last() else {
        return 0;
    };
    let words: usize = line.iter().map(Word::display_length).sum();
    let sentence_extras = body.iter().filter(|w| w.ends_sentence()).count();
    words + body.len() + sentence_extras
}

/// Cubic badness for a feasible adjustment ratio.
#[inline]
pub fn badness(ratio: f64) -> f64 {
    ratio.abs().powi(3) * 100.0 + 0.5
}

/// Required adjustment ratio for `line` at `target_width`.
///
/// Single-word lines have no gaps: they fit exactly (ratio `0`) or not at all
/// (`±∞`).
pub fn adjustment_ratio(line: &[Word], target_width: f64, spacing: &Spacing) -> f64 {
    let adjustment = target_width - natural_length(line) as f64;
    let spaces = line.len().saturating_sub(1) as f64;

    if spaces == 0.0 {
        if adjustment.abs() <= RATIO_EPSILON {
            0.0
        } else if adjustment < 0.0 {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else if adjustment <= 0.0 {
        adjustment / (spacing.shrink * spaces)
    } else {
        adjustment / (spacing.stretch * spaces)
    }
}

/// Evaluate `line` with the default [`Spacing`].
pub fn evaluate(line: &[Word], target_width: f64, tolerance: f64, is_last: bool) -> Feasibility {
    evaluate_with(line, target_width, tolerance, is_last, &Spacing::default())
}

/// Evaluate `line` against `target_width` and `tolerance`.
///
/// The closing line of the paragraph, and any line ending in a forced break,
/// is exempt from the stretch limit and costs nothing at natural spacing; it
/// still has to fit (ratio `>= -1`). A forced break anywhere but at the end of
/// the line makes the line irrecoverable.
pub fn evaluate_with(
    line: &[Word],
    target_width: f64,
    tolerance: f64,
    is_last: bool,
    spacing: &Spacing,
) -> Feasibility {
    let Some((closing, body)) = line.split_last() else {
        return Feasibility::Infeasible {
            ratio: f64::NEG_INFINITY,
        };
    };
    if body.iter().any(Word::is_forced_break) {
        return Feasibility::Infeasible {
            ratio: f64::NEG_INFINITY,
        };
    }

    let ratio = adjustment_ratio(line, target_width, spacing);
    if !at_least(ratio, -1.0) {
        return Feasibility::Infeasible { ratio };
    }
    if is_last || closing.is_forced_break() {
        return Feasibility::Feasible {
            badness: 0.0,
            em_width: spacing.natural_em,
        };
    }
    if !at_most(ratio, tolerance) {
        return Feasibility::Infeasible { ratio };
    }

    let ratio = ratio.max(-1.0);
    Feasibility::Feasible {
        badness: badness(ratio),
        em_width: spacing.em_width(ratio),
    }
}

/// The default evaluator: monospaced widths, cubic badness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Demerits {
    pub target_width: f64,
    pub tolerance: f64,
    pub spacing: Spacing,
}

impl Demerits {
    pub fn new(target_width: f64, tolerance: f64) -> Self {
        Self {
            target_width,
            tolerance,
            spacing: Spacing::default(),
        }
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }
}

impl LineEvaluator for Demerits {
    fn evaluate(&self, line: &[Word], is_last: bool) -> Feasibility {
        evaluate_with(
            line,
            self.target_width,
            self.tolerance,
            is_last,
            &self.spacing,
        )
    }

    fn target_width(&self) -> f64 {
        self.target_width
    }

    fn tolerance(&self) -> f64 {
        self.tolerance
    }

    fn natural_spacing(&self) -> f64 {
        self.spacing.natural_em
    }
}

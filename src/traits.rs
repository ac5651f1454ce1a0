//! The seam between the breakpoint search and the line cost model.
//!
//! [`BreakEngine`](crate::engine::BreakEngine) never inspects widths itself;
//! every question of the form "may the words `line` share one output line, and
//! at what cost?" goes through a [`LineEvaluator`]. The default implementation
//! is [`Demerits`](crate::demerits::Demerits), the monospaced cubic-badness
//! model, but any cost model that honours the contract below plugs in.

use crate::demerits::Feasibility;
use crate::word::Word;

/// Cost model for a single candidate line.
///
/// Contract relied on by the search:
/// - `line` is never empty.
/// - A verdict of [`Feasibility::Infeasible`] whose ratio is below `-1` means
///   the line is irrecoverably over-full: appending more words can never make
///   it feasible again, so the search drops the originating candidate.
/// - Any other infeasible verdict keeps the candidate alive.
/// - Verdicts are deterministic for a given `(line, is_last)`.
pub trait LineEvaluator: Send + Sync {
    /// Judge the line formed by `line`; `is_last` is true if it closes the
    /// paragraph.
    fn evaluate(&self, line: &[Word], is_last: bool) -> Feasibility;

    /// Width every line is justified to.
    fn target_width(&self) -> f64;

    /// Maximum tolerated stretch ratio.
    fn tolerance(&self) -> f64;

    /// Spacing (in em) used where no adjustment applies.
    fn natural_spacing(&self) -> f64 {
        0.5
    }
}

impl<E: LineEvaluator + ?Sized> LineEvaluator for &E {
    fn evaluate(&self, line: &[Word], is_last: bool) -> Feasibility {
        (**self).evaluate(line, is_last)
    }

    fn target_width(&self) -> f64 {
        (**self).target_width()
    }

    fn tolerance(&self) -> f64 {
        (**self).tolerance()
    }

    fn natural_spacing(&self) -> f64 {
        (**self).natural_spacing()
    }
}

//! Optimal paragraph line breaking.
//!
//! This crate splits a paragraph of words into lines so that every line,
//! justified to a fixed target width, has inter-word spacing as close to
//! natural as possible. The total cost is minimised over the whole paragraph
//! rather than greedily per line, in the manner of Knuth and Plass.
//!
//! ## Core idea
//! 1. Every candidate line is judged by a [`LineEvaluator`]: feasible with a
//!    badness (cubic in the required stretch or shrink ratio), or infeasible.
//! 2. [`BreakEngine`] sweeps the words once, keeping a frontier of candidate
//!    break sequences. Each word gets the cheapest feasible extension of any
//!    candidate; candidates whose line can only overflow are pruned.
//! 3. The cheapest sequence reaching the last word is the [`Solution`].
//!
//! Widths are measured in characters (monospaced output). The last line of a
//! paragraph, and any line closed by a forced break, is set at natural spacing
//! for free.
//!
//! ## Quick start
//! ```
//! use parbreak::{tokenize, BreakEngineBuilder, BreakPolicy};
//!
//! let words = tokenize("The quick brown fox jumps.", BreakPolicy::Newline);
//! let engine = BreakEngineBuilder::new()
//!     .with_target_width(20.0)
//!     .with_tolerance(5.0)
//!     .build()
//!     .unwrap();
//! let solution = engine.search(&words).unwrap();
//! assert_eq!(solution.line_count(), 2);
//! assert_eq!(solution.adjustments.last(), Some(&0.5));
//! ```
//!
//! ## Output
//! The [`render`] module annotates a solution with per-line spacing and writes
//! a monospaced LaTeX document, or a plain listing of lines and their spacing.

pub mod builder;
pub mod demerits;
pub mod engine;
pub mod error;
pub mod path;
pub mod render;
pub mod solution;
pub mod traits;
pub mod utils;
pub mod word;

pub use crate::builder::{BreakConfig, BreakEngineBuilder};
pub use crate::demerits::{Demerits, Feasibility, Spacing};
pub use crate::engine::{search, BreakEngine};
pub use crate::error::BreakError;
pub use crate::solution::Solution;
pub use crate::traits::LineEvaluator;
pub use crate::word::{tokenize, BreakPolicy, Word, WordKind};

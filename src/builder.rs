use crate::demerits::{Demerits, Spacing};
use crate::error::BreakError;
use crate::BreakEngine;

/// Parameters of one line-breaking run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakConfig {
    /// Width every line is justified to, in character units.
    pub target_width: f64,
    /// Largest stretch ratio accepted on a non-final line.
    pub tolerance: f64,
    pub spacing: Spacing,
}

impl Default for BreakConfig {
    fn default() -> Self {
        Self {
            target_width: 80.0,
            tolerance: 2.0,
            spacing: Spacing::default(),
        }
    }
}

impl BreakConfig {
    pub fn new(target_width: f64, tolerance: f64) -> Self {
        Self {
            target_width,
            tolerance,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), BreakError> {
        if !(self.target_width.is_finite() && self.target_width > 0.0) {
            return Err(BreakError::InvalidTargetWidth(self.target_width));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(BreakError::InvalidTolerance(self.tolerance));
        }
        for (name, value) in [
            ("natural_em", self.spacing.natural_em),
            ("stretch", self.spacing.stretch),
            ("shrink", self.spacing.shrink),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(BreakError::InvalidSpacing(name, value));
            }
        }
        if self.spacing.shrink > 1.0 {
            return Err(BreakError::InvalidSpacing("shrink", self.spacing.shrink));
        }
        Ok(())
    }

    pub fn demerits(&self) -> Demerits {
        Demerits::new(self.target_width, self.tolerance).with_spacing(self.spacing)
    }
}

pub struct BreakEngineBuilder {
    config: BreakConfig,
}

impl Default for BreakEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakEngineBuilder {
    pub fn new() -> Self {
        Self {
            config: BreakConfig::default(),
        }
    }
    pub fn with_target_width(mut self, target_width: f64) -> Self {
        self.config.target_width = target_width;
        self
    }
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.config.spacing = spacing;
        self
    }
    pub fn config(&self) -> &BreakConfig {
        &self.config
    }
    pub fn build(self) -> Result<BreakEngine<Demerits>, BreakError> {
        self.config.validate()?;
        Ok(BreakEngine::with_evaluator(self.config.demerits()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_driver() {
        let config = BreakConfig::default();
        assert_eq!(config.target_width, 80.0);
        assert_eq!(config.tolerance, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_width() {
        let err = BreakEngineBuilder::new()
            .with_target_width(0.0)
            .build()
            .err();
        assert_eq!(err, Some(BreakError::InvalidTargetWidth(0.0)));
        assert!(BreakEngineBuilder::new()
            .with_target_width(f64::NAN)
            .build()
            .is_err());
    }

    #[test]
    fn rejects_negative_tolerance() {
        let err = BreakEngineBuilder::new().with_tolerance(-0.5).build().err();
        assert_eq!(err, Some(BreakError::InvalidTolerance(-0.5)));
    }

    #[test]
    fn zero_tolerance_is_allowed() {
        assert!(BreakEngineBuilder::new().with_tolerance(0.0).build().is_ok());
    }

    #[test]
    fn rejects_degenerate_spacing() {
        let spacing = Spacing {
            shrink: 0.0,
            ..Spacing::default()
        };
        let err = BreakEngineBuilder::new().with_spacing(spacing).build().err();
        assert_eq!(err, Some(BreakError::InvalidSpacing("shrink", 0.0)));
    }

    #[test]
    fn rejects_shrink_beyond_natural_space() {
        let spacing = Spacing {
            shrink: 2.0,
            ..Spacing::default()
        };
        let err = BreakEngineBuilder::new()
            .with_target_width(2.5)
            .with_tolerance(1.0)
            .with_spacing(spacing)
            .build()
            .err();
        assert_eq!(err, Some(BreakError::InvalidSpacing("shrink", 2.0)));
    }

    #[test]
    fn full_shrink_keeps_pruning_sound() {
        // Shrinking every gap to nothing is the largest budget allowed.
        let spacing = Spacing {
            shrink: 1.0,
            ..Spacing::default()
        };
        let engine = BreakEngineBuilder::new()
            .with_target_width(2.5)
            .with_tolerance(1.0)
            .with_spacing(spacing)
            .build()
            .unwrap();
        let words: Vec<_> = ["ab", "cd", ""].into_iter().map(crate::Word::new).collect();
        assert!(matches!(
            engine.search(&words),
            Err(BreakError::InfeasibleParameters { .. })
        ));
        let words: Vec<_> = ["a", "b"].into_iter().map(crate::Word::new).collect();
        let solution = engine.search(&words).unwrap();
        assert_eq!(solution.indices, vec![1]);
    }

    #[test]
    fn built_engine_carries_config() {
        let engine = BreakEngineBuilder::new()
            .with_target_width(42.0)
            .with_tolerance(3.0)
            .build()
            .unwrap();
        assert_eq!(engine.evaluator().target_width, 42.0);
        assert_eq!(engine.evaluator().tolerance, 3.0);
    }
}

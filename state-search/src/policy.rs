//! Fold policies for combining child results in top-down DP.

use crate::problem::Scalar;

/// How a DP solve folds child sub-results into a parent value.
///
/// The solver folds viable children only: a child that reaches no goal is
/// `None` to the solver and never enters the fold, so zero is always an
/// ordinary value, never a marker.
///
/// Counting problems use `Sum` with zero-cost edges and a goal value of
/// one, so every goal path contributes exactly one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// Keep the smallest child value (shortest / cheapest)
    Min,
    /// Keep the largest child value (longest / most valuable)
    Max,
    /// Add child values (path / configuration counting)
    Sum,
}

impl Combine {
    /// Folds one child contribution into the accumulator.
    pub fn fold<C: Scalar>(&self, acc: C, child: C) -> C {
        match self {
            Combine::Min => acc.min(child),
            Combine::Max => acc.max(child),
            Combine::Sum => acc.saturating_add(&child),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_picks_and_adds() {
        assert_eq!(Combine::Min.fold(5u32, 3), 3);
        assert_eq!(Combine::Max.fold(5i32, 3), 5);
        assert_eq!(Combine::Sum.fold(5u64, 3), 8);
    }

    #[test]
    fn fold_keeps_zero_as_an_ordinary_value() {
        assert_eq!(Combine::Min.fold(0u32, 4), 0);
        assert_eq!(Combine::Max.fold(0u32, 4), 4);
        assert_eq!(Combine::Sum.fold(0u64, 4), 4);
    }

    #[test]
    fn sum_fold_saturates_instead_of_wrapping() {
        assert_eq!(Combine::Sum.fold(u64::MAX, 1), u64::MAX);
    }
}

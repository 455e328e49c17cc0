/// Termination predicate on the best score of a generation.
///
/// Checked at every generation boundary, before offspring are bred. Any
/// `Fn(f64) -> bool` closure is a goal.
pub trait Goal: Send + Sync {
    fn is_reached(&self, best_score: f64) -> bool;
}

impl<F> Goal for F
where
    F: Fn(f64) -> bool + Send + Sync,
{
    fn is_reached(&self, best_score: f64) -> bool {
        self(best_score)
    }
}

/// Reached once the best score is at or below the threshold.
///
/// The default threshold of `0.0` treats a perfect (or better) score as solved.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitnessThreshold(pub f64);

impl Goal for FitnessThreshold {
    fn is_reached(&self, best_score: f64) -> bool {
        best_score <= self.0
    }
}

//! # Error Types
//!
//! This module defines the error type shared by every part of the engine.
//! Configuration problems are reported before a run starts, oracle failures
//! are reported together with the stage, generation and offspring slot that
//! triggered them.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genfit::error::{GeneticError, Result};
//!
//! fn score_length(text: &str) -> Result<f64> {
//!     if text.is_empty() {
//!         return Err(GeneticError::FitnessCalculation("empty candidate".to_string()));
//!     }
//!     Ok(text.len() as f64)
//! }
//!
//! assert!(score_length("").is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genfit::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[f64]) -> genfit::error::Result<f64> {
//!     scores
//!         .iter()
//!         .copied()
//!         .min_by(f64::total_cmp)
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_score(&[3.0, 1.0]).unwrap(), 1.0);
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// The part of a run during which the fitness oracle failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Scoring the randomly initialized population.
    Initialization,
    /// Scoring freshly bred offspring.
    Evaluation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Initialization => write!(f, "initialization"),
            Stage::Evaluation => write!(f, "evaluation"),
        }
    }
}

/// Represents errors that can occur while evolving a population.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when a breeding operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error returned by a fitness oracle that cannot score a candidate.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Oracle failure, tagged with where in the run it happened.
    ///
    /// `candidate` is the `Debug` rendering of the genome that was being scored.
    #[error("Oracle failed during {stage} (generation {generation}, slot {slot}): {source}")]
    Oracle {
        stage: Stage,
        generation: usize,
        slot: usize,
        candidate: String,
        #[source]
        source: Box<GeneticError>,
    },

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

impl GeneticError {
    /// Wraps an oracle error with the stage, generation, slot and candidate it came from.
    pub fn oracle(
        stage: Stage,
        generation: usize,
        slot: usize,
        candidate: String,
        source: GeneticError,
    ) -> Self {
        GeneticError::Oracle {
            stage,
            generation,
            slot,
            candidate,
            source: Box::new(source),
        }
    }
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use genfit::error::ResultExt;
/// use std::sync::Mutex;
///
/// fn read_counter(counter: &Mutex<u32>) -> genfit::error::Result<u32> {
///     let guard = counter.lock().context("counter lock poisoned")?;
///     Ok(*guard)
/// }
///
/// assert_eq!(read_counter(&Mutex::new(3)).unwrap(), 3);
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an Option to a Result, producing the error lazily.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_oracle_error_names_stage_and_slot() {
        let err = GeneticError::oracle(
            Stage::Evaluation,
            7,
            3,
            "Genome { genes: [TextGene('x')] }".to_string(),
            GeneticError::FitnessCalculation("renderer crashed".to_string()),
        );
        let message = err.to_string();

        assert!(message.contains("evaluation"));
        assert!(message.contains("generation 7"));
        assert!(message.contains("slot 3"));
        assert!(message.contains("renderer crashed"));
        assert!(err.source().is_some());
        match err {
            GeneticError::Oracle { candidate, .. } => assert!(candidate.contains("'x'")),
            other => panic!("Expected Oracle error, got {:?}", other),
        }
    }

    #[test]
    fn test_context_wraps_foreign_error() {
        let parsed: std::result::Result<u8, _> = "300".parse::<u8>();
        match parsed.context("parsing channel") {
            Err(GeneticError::Other(msg)) => assert!(msg.starts_with("parsing channel: ")),
            other => panic!("Expected Other error, got {:?}", other),
        }
    }

    #[test]
    fn test_option_ext() {
        let empty: Option<u8> = None;
        assert!(matches!(
            empty.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        ));
    }
}

//! # Error Types
//!
//! This module defines the error type shared by the whole crate. Clashes and
//! slow convergence are never errors: they are scored outcomes. Errors are
//! reserved for invalid configuration, a catalog that references missing
//! entities, and out-of-range population access.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use timetable_ga::error::{GeneticError, Result};
//!
//! fn check_rate(rate: f64) -> Result<()> {
//!     if !(0.0..=1.0).contains(&rate) {
//!         return Err(GeneticError::Configuration(format!("Invalid rate {}", rate)));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_rate(0.5).is_ok());
//! assert!(check_rate(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use timetable_ga::error::{GeneticError, OptionExt};
//!
//! fn best(scores: &[u32]) -> timetable_ga::error::Result<u32> {
//!     scores.iter().max().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//!
//! assert!(best(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while building or evolving a timetable.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A module or group references an entity absent from the catalog,
    /// or a catalog table violates its own invariants.
    #[error("Catalog integrity error: {0}")]
    CatalogIntegrity(String),

    /// A population rank beyond the population size was requested.
    #[error("Rank {rank} is out of range for a population of {size}")]
    RankOutOfRange { rank: usize, size: usize },

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A chromosome cannot be developed into a timetable.
    #[error("Development error: {0}")]
    Development(String),

    /// Error that occurs when a fitness calculation fails.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for timetable operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
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
    use super::*;

    #[test]
    fn test_rank_out_of_range_message() {
        let err = GeneticError::RankOutOfRange { rank: 7, size: 3 };
        assert_eq!(
            err.to_string(),
            "Rank 7 is out of range for a population of 3"
        );
    }

    #[test]
    fn test_every_variant_names_its_category() {
        let errors = [
            GeneticError::Configuration("bad rate".to_string()),
            GeneticError::CatalogIntegrity("unknown room 9".to_string()),
            GeneticError::RankOutOfRange { rank: 1, size: 0 },
            GeneticError::EmptyPopulation,
            GeneticError::Development("short chromosome".to_string()),
            GeneticError::FitnessCalculation("NaN".to_string()),
        ];

        for err in &errors {
            // No wildcard arm: every variant is listed
            let prefix = match err {
                GeneticError::Configuration(_) => "Configuration error: ",
                GeneticError::CatalogIntegrity(_) => "Catalog integrity error: ",
                GeneticError::RankOutOfRange { .. } => "Rank ",
                GeneticError::EmptyPopulation => "Empty population error: ",
                GeneticError::Development(_) => "Development error: ",
                GeneticError::FitnessCalculation(_) => "Fitness calculation error: ",
            };
            assert!(err.to_string().starts_with(prefix));
        }
    }

    #[test]
    fn test_ok_or_else_genetic() {
        let none: Option<u32> = None;
        assert!(matches!(
            none.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        ));
        assert_eq!(Some(3).ok_or_else_genetic(|| GeneticError::EmptyPopulation).unwrap(), 3);
    }
}

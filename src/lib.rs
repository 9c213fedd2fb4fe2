//! # timetable-ga
//!
//! A genetic algorithm that searches for a clash-free assignment of course
//! classes to rooms, timeslots and professors.
//!
//! - [`catalog`] holds the reference data of one problem.
//! - [`timetable`] decodes chromosomes into classes and counts clashes.
//! - [`chromosome`] and [`population`] are the encoding and its collection.
//! - [`selection`] and [`evolution`] hold the operators and the run loop.

pub mod catalog;
pub mod chromosome;
pub mod error;
pub mod evolution;
pub mod population;
pub mod rng;
pub mod selection;
pub mod timetable;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};

//! # GeneticAlgorithmOptions
//!
//! The `GeneticAlgorithmOptions` struct holds the numeric parameters of a run:
//! population size, mutation and crossover rates, elitism count, tournament
//! size and the generation budget.
//!
//! ## Example
//!
//! ```rust
//! use timetable_ga::evolution::options::GeneticAlgorithmOptions;
//!
//! // Create a new GeneticAlgorithmOptions instance with custom parameters
//! let custom_options = GeneticAlgorithmOptions::new(100, 0.01, 0.9, 2, 5);
//! assert!(custom_options.validate().is_ok());
//!
//! // Create a new GeneticAlgorithmOptions instance with default parameters
//! let default_options = GeneticAlgorithmOptions::default();
//! assert_eq!(default_options.get_max_generations(), 200);
//! ```
//!
//! ## Validation
//!
//! Options are plain data until [`GeneticAlgorithmOptions::validate`] runs,
//! which `GeneticAlgorithm::new` does once at construction:
//!
//! - `population_size` must be at least 1,
//! - `mutation_rate` and `crossover_rate` must lie in `[0, 1]`,
//! - `elitism_count` must not exceed `population_size`,
//! - `tournament_size` must lie in `[1, population_size]`.

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticAlgorithmOptions {
    population_size: usize,
    mutation_rate: f64,
    crossover_rate: f64,
    elitism_count: usize,
    tournament_size: usize,
    /// Generation budget of a launcher run
    max_generations: usize,
}

impl GeneticAlgorithmOptions {
    pub fn new(
        population_size: usize,
        mutation_rate: f64,
        crossover_rate: f64,
        elitism_count: usize,
        tournament_size: usize,
    ) -> Self {
        Self {
            population_size,
            mutation_rate,
            crossover_rate,
            elitism_count,
            tournament_size,
            max_generations: 200, // Default generation budget
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_elitism_count(&self) -> usize {
        self.elitism_count
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the mutation rate.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the crossover rate.
    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    /// Sets the elitism count.
    pub fn set_elitism_count(&mut self, elitism_count: usize) {
        self.elitism_count = elitism_count;
    }

    /// Sets the tournament size.
    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    /// Sets the generation budget.
    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    /// Checks the parameters against each other.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` naming the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        for (name, rate) in [
            ("Mutation rate", self.mutation_rate),
            ("Crossover rate", self.crossover_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(GeneticError::Configuration(format!(
                    "{} must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }

        if self.elitism_count > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Elitism count ({}) exceeds population size ({})",
                self.elitism_count, self.population_size
            )));
        }

        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Tournament size must be within [1, {}], got {}",
                self.population_size, self.tournament_size
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating a `GeneticAlgorithmOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use timetable_ga::evolution::options::GeneticAlgorithmOptions;
    ///
    /// let options = GeneticAlgorithmOptions::builder()
    ///     .population_size(50)
    ///     .mutation_rate(0.02)
    ///     .crossover_rate(0.8)
    ///     .elitism_count(3)
    ///     .tournament_size(4)
    ///     .max_generations(1000)
    ///     .build();
    ///
    /// assert_eq!(options.get_population_size(), 50);
    /// ```
    pub fn builder() -> GeneticAlgorithmOptionsBuilder {
        GeneticAlgorithmOptionsBuilder::default()
    }
}

impl Default for GeneticAlgorithmOptions {
    fn default() -> Self {
        Self {
            population_size: 10,
            mutation_rate: 0.1,
            crossover_rate: 0.9,
            elitism_count: 2,
            tournament_size: 5,
            max_generations: 200,
        }
    }
}

/// Builder for `GeneticAlgorithmOptions`.
///
/// Unset parameters fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct GeneticAlgorithmOptionsBuilder {
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    crossover_rate: Option<f64>,
    elitism_count: Option<usize>,
    tournament_size: Option<usize>,
    max_generations: Option<usize>,
}

impl GeneticAlgorithmOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn elitism_count(mut self, value: usize) -> Self {
        self.elitism_count = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Builds the `GeneticAlgorithmOptions` instance.
    pub fn build(self) -> GeneticAlgorithmOptions {
        let defaults = GeneticAlgorithmOptions::default();
        GeneticAlgorithmOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            elitism_count: self.elitism_count.unwrap_or(defaults.elitism_count),
            tournament_size: self.tournament_size.unwrap_or(defaults.tournament_size),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
        }
    }
}

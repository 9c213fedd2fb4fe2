use tracing::{debug, info};

use super::engine::GeneticAlgorithm;
use crate::{
    chromosome::Chromosome,
    error::{GeneticError, OptionExt, Result},
    rng::RandomNumberGenerator,
    timetable::{Class, Timetable},
};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The generation budget was spent.
    MaxGenerationsReached,
    /// A clash-free timetable was found.
    PerfectSolutionFound,
}

/// Progress of one evaluated generation, handed to the run observer.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport<'a> {
    pub generation: usize,
    pub best_fitness: f64,
    pub average_fitness: f64,
    /// The fittest chromosome of the generation.
    pub fittest: &'a Chromosome,
}

/// Represents the result of a run: the fittest chromosome and its decoded schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    pub fittest: Chromosome,
    pub fitness: f64,
    pub classes: Vec<Class>,
    pub clashes: usize,
    /// Number of evaluated generations, counting the initial population as 1.
    pub generations: usize,
    pub termination: Termination,
}

/// Drives a [`GeneticAlgorithm`] over one timetable until the generation
/// budget is spent or a clash-free timetable is found.
///
/// # Example
///
/// ```rust
/// use timetable_ga::catalog::Catalog;
/// use timetable_ga::evolution::{EvolutionLauncher, GeneticAlgorithm, GeneticAlgorithmOptions, Termination};
/// use timetable_ga::rng::RandomNumberGenerator;
/// use timetable_ga::timetable::Timetable;
///
/// let catalog = Catalog::builder()
///     .add_room(1, "A1", 15)
///     .add_timeslot(1, "Mon 09:00 - 11:00")
///     .add_timeslot(2, "Mon 11:00 - 13:00")
///     .add_professor(1, "Dr P Smith")
///     .add_module(1, "cs1", "Computer Science", 1, vec![1])
///     .add_group(1, 10, vec![1])
///     .build()
///     .unwrap();
///
/// let algorithm = GeneticAlgorithm::new(GeneticAlgorithmOptions::default()).unwrap();
/// let launcher = EvolutionLauncher::new(algorithm, Timetable::new(catalog).unwrap());
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// let result = launcher.evolve(&mut rng).unwrap();
/// assert_eq!(result.termination, Termination::PerfectSolutionFound);
/// assert_eq!(result.generations, 1);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncher {
    algorithm: GeneticAlgorithm,
    timetable: Timetable,
}

impl EvolutionLauncher {
    pub fn new(algorithm: GeneticAlgorithm, timetable: Timetable) -> Self {
        Self {
            algorithm,
            timetable,
        }
    }

    pub fn algorithm(&self) -> &GeneticAlgorithm {
        &self.algorithm
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    /// Runs the evolution loop.
    ///
    /// # Errors
    ///
    /// Returns an error if a chromosome cannot be decoded or scored.
    pub fn evolve(&self, rng: &mut RandomNumberGenerator) -> Result<EvolutionResult> {
        self.evolve_with(rng, |_| {})
    }

    /// Runs the evolution loop, calling `observer` once per evaluated generation.
    ///
    /// Generations are numbered from 1, the evaluated initial population.
    /// After each evaluation the run stops if the fittest chromosome is
    /// clash-free, or if the generation number has reached the configured
    /// budget; otherwise crossover, mutation and evaluation produce the next
    /// generation.
    ///
    /// # Errors
    ///
    /// Returns an error if a chromosome cannot be decoded or scored.
    pub fn evolve_with<F>(&self, rng: &mut RandomNumberGenerator, mut observer: F) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationReport<'_>),
    {
        let options = self.algorithm.options();
        let max_generations = options.get_max_generations();

        info!(
            population_size = options.get_population_size(),
            classes = self.timetable.class_count(),
            max_generations,
            "Starting timetable evolution"
        );

        let mut population = self.algorithm.init_population(&self.timetable, rng);
        self.algorithm.eval_population(&mut population, &self.timetable)?;
        let mut generation = 1;

        let termination = loop {
            let fittest = population.fittest(0)?;
            let report = GenerationReport {
                generation,
                best_fitness: fittest.fitness().unwrap_or_default(),
                average_fitness: population.average_fitness().unwrap_or_default(),
                fittest,
            };
            debug!(
                generation,
                best_fitness = report.best_fitness,
                average_fitness = report.average_fitness,
                "Generation evaluated"
            );
            observer(&report);

            if self.algorithm.is_solution_found(&population) {
                break Termination::PerfectSolutionFound;
            }
            if self
                .algorithm
                .is_termination_condition_met(generation, max_generations)
            {
                break Termination::MaxGenerationsReached;
            }

            population = self.algorithm.crossover_population(&population, rng)?;
            population = self
                .algorithm
                .mutate_population(&population, &self.timetable, rng)?;
            self.algorithm.eval_population(&mut population, &self.timetable)?;
            generation += 1;
        };

        let fittest = population.fittest(0)?.clone();
        let fitness = fittest.fitness().ok_or_else_genetic(|| {
            GeneticError::FitnessCalculation("Fittest chromosome was never evaluated".to_string())
        })?;
        let classes = self.timetable.decode(&fittest)?;
        let clashes = self.timetable.count_clashes(&classes)?;

        info!(
            generations = generation,
            fitness,
            clashes,
            ?termination,
            "Timetable evolution finished"
        );

        Ok(EvolutionResult {
            fittest,
            fitness,
            classes,
            clashes,
            generations: generation,
            termination,
        })
    }
}

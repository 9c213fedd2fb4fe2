use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A selection strategy picks the chromosome that takes part in the next
/// crossover. Strategies compare cached fitness values, so the population
/// should be evaluated beforehand; unevaluated chromosomes lose every
/// comparison.
///
/// # Examples
///
/// ```
/// use timetable_ga::chromosome::Chromosome;
/// use timetable_ga::population::Population;
/// use timetable_ga::rng::RandomNumberGenerator;
/// use timetable_ga::selection::{SelectionStrategy, TournamentSelection};
///
/// let population = Population::from_chromosomes(vec![
///     Chromosome::from_genes(vec![0, 0, 0]).unwrap(),
///     Chromosome::from_genes(vec![1, 1, 1]).unwrap(),
/// ]);
/// let mut rng = RandomNumberGenerator::from_seed(4);
///
/// let selection = TournamentSelection::new(2).unwrap();
/// let parent = selection.select_parent(&population, &mut rng).unwrap();
/// assert_eq!(parent.block_count(), 1);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects one parent from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty.
    fn select_parent<'a>(
        &self,
        population: &'a Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Chromosome>;
}

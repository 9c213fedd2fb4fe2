use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that picks parents through tournaments.
///
/// Each tournament draws `tournament_size` chromosomes uniformly at random,
/// with replacement, and returns the fittest of them. When several
/// participants share the best fitness the one drawn first wins.
///
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the population index of the winner.
    fn run_tournament(
        &self,
        chromosomes: &[Chromosome],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        if chromosomes.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let score = |idx: usize| chromosomes[idx].fitness().unwrap_or(f64::NEG_INFINITY);

        let mut best_idx = rng.gen_index(chromosomes.len());
        let mut best_fitness = score(best_idx);

        for _ in 1..self.tournament_size {
            let idx = rng.gen_index(chromosomes.len());
            let current_fitness = score(idx);

            if current_fitness > best_fitness {
                best_idx = idx;
                best_fitness = current_fitness;
            }
        }

        Ok(best_idx)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 5 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select_parent<'a>(
        &self,
        population: &'a Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Chromosome> {
        let winner_idx = self.run_tournament(population.chromosomes(), rng)?;
        Ok(&population.chromosomes()[winner_idx])
    }
}

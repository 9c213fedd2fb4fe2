//! # GeneticAlgorithm
//!
//! The genetic operators of a timetable run: initialization, evaluation,
//! termination checks, tournament selection, uniform crossover with elitism,
//! and per-gene-block mutation.
//!
//! Crossover and mutation never edit a population in place. Each returns a
//! new population of the same size whose first `elitism_count` members are
//! deep copies of the best ranked chromosomes of its input.

use tracing::{debug, warn};

use super::{challenge::Challenge, options::GeneticAlgorithmOptions};
use crate::{
    chromosome::Chromosome,
    error::Result,
    population::Population,
    rng::RandomNumberGenerator,
    selection::{SelectionStrategy, TournamentSelection},
    timetable::Timetable,
};

#[derive(Debug, Clone)]
pub struct GeneticAlgorithm {
    options: GeneticAlgorithmOptions,
    selection: TournamentSelection,
}

impl GeneticAlgorithm {
    /// Creates a new `GeneticAlgorithm` with validated options.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options are invalid.
    pub fn new(options: GeneticAlgorithmOptions) -> Result<Self> {
        options.validate()?;

        if options.get_elitism_count() == options.get_population_size() {
            warn!(
                elitism_count = options.get_elitism_count(),
                "Every chromosome is elite; the population cannot evolve"
            );
        }

        let selection = TournamentSelection::new(options.get_tournament_size())?;
        Ok(Self { options, selection })
    }

    pub fn options(&self) -> &GeneticAlgorithmOptions {
        &self.options
    }

    /// Builds a fresh, unevaluated population of the configured size.
    pub fn init_population(
        &self,
        timetable: &Timetable,
        rng: &mut RandomNumberGenerator,
    ) -> Population {
        Population::random(self.options.get_population_size(), timetable, rng)
    }

    /// Evaluates every unevaluated chromosome, then ranks the population best first.
    pub fn eval_population<C>(&self, population: &mut Population, challenge: &C) -> Result<()>
    where
        C: Challenge<Chromosome>,
    {
        population.evaluate(challenge)?;
        population.sort_by_fitness_descending();
        Ok(())
    }

    /// Whether the generation budget is spent.
    pub fn is_termination_condition_met(&self, generation: usize, max_generations: usize) -> bool {
        generation >= max_generations
    }

    /// Whether the fittest chromosome is clash-free.
    pub fn is_solution_found(&self, population: &Population) -> bool {
        population
            .fittest(0)
            .ok()
            .and_then(Chromosome::fitness)
            .is_some_and(|fitness| fitness == 1.0)
    }

    /// Tournament selection over the configured tournament size.
    pub fn select_parent<'a>(
        &self,
        population: &'a Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Chromosome> {
        self.selection.select_parent(population, rng)
    }

    /// Produces the next generation by crossover.
    ///
    /// The top `elitism_count` chromosomes are copied untouched. Every other
    /// rank is, with probability `crossover_rate`, replaced by the uniform
    /// crossover of two tournament-selected parents, and otherwise carried
    /// forward unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if parent selection or crossover fails.
    pub fn crossover_population(
        &self,
        population: &Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let ranked = ranked_copy(population);
        let elite = self.options.get_elitism_count().min(ranked.len());
        let mut offspring = Vec::with_capacity(ranked.len());
        let mut crossovers = 0;

        for (rank, chromosome) in ranked.iter().enumerate() {
            if rank >= elite && rng.chance(self.options.get_crossover_rate()) {
                let first = self.select_parent(&ranked, rng)?;
                let second = self.select_parent(&ranked, rng)?;
                offspring.push(first.uniform_crossover(second, rng)?);
                crossovers += 1;
            } else {
                offspring.push(chromosome.clone());
            }
        }

        debug!(crossovers, elite, "Crossover applied");
        Ok(Population::from_chromosomes(offspring))
    }

    /// Produces the next generation by mutation.
    ///
    /// Elite ranks are never mutated. Every gene block of every other
    /// chromosome is re-randomized with probability `mutation_rate`.
    ///
    /// # Errors
    ///
    /// Returns an error if a chromosome does not fit the timetable.
    pub fn mutate_population(
        &self,
        population: &Population,
        timetable: &Timetable,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let ranked = ranked_copy(population);
        let elite = self.options.get_elitism_count().min(ranked.len());
        let mut mutants = ranked.into_chromosomes();
        let mut mutations = 0;

        for chromosome in mutants.iter_mut().skip(elite) {
            for locus in 0..chromosome.block_count() {
                if rng.chance(self.options.get_mutation_rate()) {
                    chromosome.mutate_gene(locus, timetable, rng)?;
                    mutations += 1;
                }
            }
        }

        debug!(mutations, elite, "Mutation applied");
        Ok(Population::from_chromosomes(mutants))
    }
}

fn ranked_copy(population: &Population) -> Population {
    let mut ranked = population.clone();
    ranked.sort_by_fitness_descending();
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::GeneticError;

    fn timetable() -> Timetable {
        let catalog = Catalog::builder()
            .add_room(1, "A1", 15)
            .add_room(2, "B1", 30)
            .add_timeslot(1, "Mon 09:00 - 11:00")
            .add_timeslot(2, "Mon 11:00 - 13:00")
            .add_professor(1, "Dr P Smith")
            .add_professor(2, "Mrs E Mitchell")
            .add_module(1, "cs1", "Computer Science", 1, vec![1, 2])
            .add_module(2, "en1", "English", 1, vec![1, 2])
            .add_group(1, 10, vec![1, 2])
            .add_group(2, 25, vec![1, 2])
            .build()
            .unwrap();
        Timetable::new(catalog).unwrap()
    }

    fn algorithm(mutation_rate: f64, crossover_rate: f64, elitism_count: usize) -> GeneticAlgorithm {
        GeneticAlgorithm::new(GeneticAlgorithmOptions::new(
            10,
            mutation_rate,
            crossover_rate,
            elitism_count,
            3,
        ))
        .unwrap()
    }

    fn evaluated(ga: &GeneticAlgorithm, timetable: &Timetable, rng: &mut RandomNumberGenerator) -> Population {
        let mut population = ga.init_population(timetable, rng);
        ga.eval_population(&mut population, timetable).unwrap();
        population
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let result = GeneticAlgorithm::new(GeneticAlgorithmOptions::new(10, 0.1, 0.9, 11, 5));
        assert!(matches!(result, Err(GeneticError::Configuration(_))));

        let result = GeneticAlgorithm::new(GeneticAlgorithmOptions::new(4, 0.1, 0.9, 2, 5));
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_eval_population_ranks_best_first() {
        let timetable = timetable();
        let ga = algorithm(0.1, 0.9, 2);
        let mut rng = RandomNumberGenerator::from_seed(3);

        let population = evaluated(&ga, &timetable, &mut rng);

        assert_eq!(population.len(), 10);
        assert!(population.iter().all(Chromosome::is_evaluated));
        let scores: Vec<f64> = population.iter().filter_map(Chromosome::fitness).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_generation_budget() {
        let ga = algorithm(0.1, 0.9, 2);

        assert!(ga.is_termination_condition_met(0, 0));
        assert!(ga.is_termination_condition_met(200, 200));
        assert!(!ga.is_termination_condition_met(199, 200));
    }

    #[test]
    fn test_is_solution_found() {
        let ga = algorithm(0.1, 0.9, 2);
        let mut perfect = Chromosome::from_genes(Vec::new()).unwrap();
        perfect.set_fitness(1.0);
        let mut weak = Chromosome::from_genes(Vec::new()).unwrap();
        weak.set_fitness(0.5);

        assert!(ga.is_solution_found(&Population::from_chromosomes(vec![weak.clone(), perfect])));
        assert!(!ga.is_solution_found(&Population::from_chromosomes(vec![weak])));
        assert!(!ga.is_solution_found(&Population::default()));
    }

    #[test]
    fn test_crossover_preserves_size_and_elite() {
        let timetable = timetable();
        let ga = algorithm(0.1, 1.0, 3);
        let mut rng = RandomNumberGenerator::from_seed(17);
        let population = evaluated(&ga, &timetable, &mut rng);

        let next = ga.crossover_population(&population, &mut rng).unwrap();

        assert_eq!(next.len(), population.len());
        assert_eq!(&next.chromosomes()[..3], &population.chromosomes()[..3]);
        assert!(next.chromosomes()[3..].iter().all(|c| !c.is_evaluated()));
    }

    #[test]
    fn test_crossover_rate_zero_is_identity() {
        let timetable = timetable();
        let ga = algorithm(0.1, 0.0, 0);
        let mut rng = RandomNumberGenerator::from_seed(19);
        let population = evaluated(&ga, &timetable, &mut rng);

        let next = ga.crossover_population(&population, &mut rng).unwrap();

        assert_eq!(next, population);
    }

    #[test]
    fn test_mutation_spares_elite() {
        let timetable = timetable();
        let ga = algorithm(1.0, 0.9, 4);
        let mut rng = RandomNumberGenerator::from_seed(23);
        let population = evaluated(&ga, &timetable, &mut rng);

        let next = ga.mutate_population(&population, &timetable, &mut rng).unwrap();

        assert_eq!(next.len(), population.len());
        assert_eq!(&next.chromosomes()[..4], &population.chromosomes()[..4]);
        assert!(next.chromosomes()[4..].iter().all(|c| !c.is_evaluated()));
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let timetable = timetable();
        let ga = algorithm(0.0, 0.9, 0);
        let mut rng = RandomNumberGenerator::from_seed(29);
        let population = evaluated(&ga, &timetable, &mut rng);

        let next = ga.mutate_population(&population, &timetable, &mut rng).unwrap();

        assert_eq!(next, population);
    }

    #[test]
    fn test_elite_copies_are_independent() {
        let timetable = timetable();
        let ga = algorithm(0.0, 0.0, 1);
        let mut rng = RandomNumberGenerator::from_seed(31);
        let population = evaluated(&ga, &timetable, &mut rng);
        let original = population.chromosomes()[0].clone();

        let next = ga.crossover_population(&population, &mut rng).unwrap();
        let mut chromosomes = next.into_chromosomes();
        chromosomes[0].mutate_gene(0, &timetable, &mut rng).unwrap();

        assert_eq!(population.chromosomes()[0], original);
    }
}

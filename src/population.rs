//! # Population
//!
//! An ordered collection of chromosomes with fitness bookkeeping. The size of
//! a population never changes once created; the evolution loop replaces whole
//! populations instead of editing them.

use std::cmp::Ordering;

use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    evolution::Challenge,
    rng::RandomNumberGenerator,
    timetable::Timetable,
};

#[derive(Debug, Clone, Default)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
    // True while `chromosomes` is in descending fitness order
    ranked: bool,
}

impl PartialEq for Population {
    fn eq(&self, other: &Self) -> bool {
        self.chromosomes == other.chromosomes
    }
}

/// Descending fitness order; unevaluated chromosomes rank last.
fn by_fitness_descending(a: &Chromosome, b: &Chromosome) -> Ordering {
    let a = a.fitness().unwrap_or(f64::NEG_INFINITY);
    let b = b.fitness().unwrap_or(f64::NEG_INFINITY);
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

impl Population {
    /// Creates `size` independently randomized chromosomes.
    pub fn random(size: usize, timetable: &Timetable, rng: &mut RandomNumberGenerator) -> Self {
        Self::from_chromosomes(
            (0..size)
                .map(|_| Chromosome::random(timetable, rng))
                .collect(),
        )
    }

    pub fn from_chromosomes(chromosomes: Vec<Chromosome>) -> Self {
        Self {
            chromosomes,
            ranked: false,
        }
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chromosome> {
        self.chromosomes.iter()
    }

    pub fn into_chromosomes(self) -> Vec<Chromosome> {
        self.chromosomes
    }

    /// Scores every chromosome that has no cached fitness yet.
    ///
    /// # Errors
    ///
    /// Propagates errors from the challenge, and returns
    /// `GeneticError::FitnessCalculation` if a score is not finite.
    pub fn evaluate<C>(&mut self, challenge: &C) -> Result<()>
    where
        C: Challenge<Chromosome>,
    {
        for chromosome in self.chromosomes.iter_mut().filter(|c| !c.is_evaluated()) {
            let score = challenge.score(chromosome)?;

            if !score.is_finite() {
                return Err(GeneticError::FitnessCalculation(format!(
                    "Non-finite fitness score encountered: {}",
                    score
                )));
            }

            chromosome.set_fitness(score);
            self.ranked = false;
        }
        Ok(())
    }

    /// Stable sort, best first.
    pub fn sort_by_fitness_descending(&mut self) {
        self.chromosomes.sort_by(by_fitness_descending);
        self.ranked = true;
    }

    /// Returns the chromosome at `rank` when ranked by descending fitness.
    ///
    /// Rank 0 is the best. Ties keep their population order. The population
    /// itself is not reordered. After [`Population::sort_by_fitness_descending`]
    /// this is a plain index; otherwise a ranked view is built per call.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::RankOutOfRange` if `rank` is not below the
    /// population size.
    pub fn fittest(&self, rank: usize) -> Result<&Chromosome> {
        if rank >= self.chromosomes.len() {
            return Err(GeneticError::RankOutOfRange {
                rank,
                size: self.chromosomes.len(),
            });
        }

        if self.ranked {
            return Ok(&self.chromosomes[rank]);
        }

        let mut ranked: Vec<&Chromosome> = self.chromosomes.iter().collect();
        ranked.sort_by(|a, b| by_fitness_descending(a, b));
        Ok(ranked[rank])
    }

    /// Mean fitness of the evaluated chromosomes, `None` if none is evaluated.
    pub fn average_fitness(&self) -> Option<f64> {
        let scores: Vec<f64> = self.chromosomes.iter().filter_map(Chromosome::fitness).collect();
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}

//! # Chromosome
//!
//! A chromosome encodes one candidate timetable as a flat sequence of integer
//! genes. Every class to place owns a block of three consecutive genes:
//! `[room, professor, timeslot]`. The genes are indices that the
//! [`Timetable`] resolves modulo the table they point into, so any value is
//! decodable.
//!
//! The chromosome caches its fitness. The cache is filled by the evaluator and
//! cleared whenever a gene changes.

use std::ops::Range;

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
    timetable::Timetable,
};

/// Number of genes encoding one class.
pub const GENES_PER_BLOCK: usize = 3;

/// The three genes of one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneBlock {
    pub room: u32,
    pub professor: u32,
    pub timeslot: u32,
}

impl GeneBlock {
    fn from_slice(genes: &[u32]) -> Self {
        Self {
            room: genes[0],
            professor: genes[1],
            timeslot: genes[2],
        }
    }

    fn write_to(self, genes: &mut [u32]) {
        genes[0] = self.room;
        genes[1] = self.professor;
        genes[2] = self.timeslot;
    }
}

/// Serialized as its bare gene list. Deserializing goes through
/// [`Chromosome::from_genes`], so the fitness cache always starts empty.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u32>", into = "Vec<u32>")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<u32>,
    fitness: Option<f64>,
}

impl TryFrom<Vec<u32>> for Chromosome {
    type Error = GeneticError;

    fn try_from(genes: Vec<u32>) -> Result<Self> {
        Self::from_genes(genes)
    }
}

impl From<Chromosome> for Vec<u32> {
    fn from(chromosome: Chromosome) -> Self {
        chromosome.genes
    }
}

impl Chromosome {
    /// Creates a chromosome with uniformly random legal genes for every class
    /// of the timetable.
    pub fn random(timetable: &Timetable, rng: &mut RandomNumberGenerator) -> Self {
        let mut genes = vec![0; timetable.class_count() * GENES_PER_BLOCK];
        for (locus, chunk) in genes.chunks_exact_mut(GENES_PER_BLOCK).enumerate() {
            if let Some(block) = timetable.random_gene_block(locus, rng) {
                block.write_to(chunk);
            }
        }

        Self {
            genes,
            fitness: None,
        }
    }

    /// Creates an unevaluated chromosome from raw genes.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Development` if the gene count is not a multiple
    /// of [`GENES_PER_BLOCK`].
    pub fn from_genes(genes: Vec<u32>) -> Result<Self> {
        if genes.len() % GENES_PER_BLOCK != 0 {
            return Err(GeneticError::Development(format!(
                "{} genes do not form whole blocks of {}",
                genes.len(),
                GENES_PER_BLOCK
            )));
        }

        Ok(Self {
            genes,
            fitness: None,
        })
    }

    pub fn genes(&self) -> &[u32] {
        &self.genes
    }

    pub fn block_count(&self) -> usize {
        self.genes.len() / GENES_PER_BLOCK
    }

    pub fn block(&self, locus: usize) -> Option<GeneBlock> {
        let start = locus.checked_mul(GENES_PER_BLOCK)?;
        let end = start.checked_add(GENES_PER_BLOCK)?;
        self.genes
            .get(start..end)
            .map(GeneBlock::from_slice)
    }

    pub fn blocks(&self) -> impl Iterator<Item = GeneBlock> + '_ {
        self.genes
            .chunks_exact(GENES_PER_BLOCK)
            .map(GeneBlock::from_slice)
    }

    /// The cached fitness, `None` until the chromosome has been evaluated.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Replaces gene block `locus` with fresh random legal values and clears
    /// the cached fitness.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Development` if `locus` is not a block of this
    /// chromosome or of the timetable.
    pub fn mutate_gene(
        &mut self,
        locus: usize,
        timetable: &Timetable,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let out_of_range = || {
            GeneticError::Development(format!("Gene block {} does not exist", locus))
        };

        if locus >= self.block_count() {
            return Err(out_of_range());
        }
        let block = timetable
            .random_gene_block(locus, rng)
            .ok_or_else(out_of_range)?;

        let start = locus * GENES_PER_BLOCK;
        block.write_to(&mut self.genes[start..start + GENES_PER_BLOCK]);
        self.fitness = None;
        Ok(())
    }

    /// Returns a child whose gene blocks in `range` come from `other` and all
    /// remaining blocks from `self`.
    ///
    /// The range is clamped to the block count.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Development` if the parents differ in length.
    pub fn with_segment(&self, other: &Chromosome, range: Range<usize>) -> Result<Chromosome> {
        self.ensure_same_length(other)?;

        let end = range.end.min(self.block_count());
        let start = range.start.min(end);
        let mut genes = self.genes.clone();
        genes[start * GENES_PER_BLOCK..end * GENES_PER_BLOCK]
            .copy_from_slice(&other.genes[start * GENES_PER_BLOCK..end * GENES_PER_BLOCK]);

        Ok(Chromosome {
            genes,
            fitness: None,
        })
    }

    /// Uniform crossover: every gene block of the child comes from `self` or
    /// `other` with equal probability.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Development` if the parents differ in length.
    pub fn uniform_crossover(
        &self,
        other: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome> {
        self.ensure_same_length(other)?;

        let mut genes = Vec::with_capacity(self.genes.len());
        for (mine, theirs) in self
            .genes
            .chunks_exact(GENES_PER_BLOCK)
            .zip(other.genes.chunks_exact(GENES_PER_BLOCK))
        {
            if rng.coin_flip() {
                genes.extend_from_slice(mine);
            } else {
                genes.extend_from_slice(theirs);
            }
        }

        Ok(Chromosome {
            genes,
            fitness: None,
        })
    }

    fn ensure_same_length(&self, other: &Chromosome) -> Result<()> {
        if self.genes.len() != other.genes.len() {
            return Err(GeneticError::Development(format!(
                "Cannot cross chromosomes of {} and {} genes",
                self.genes.len(),
                other.genes.len()
            )));
        }
        Ok(())
    }
}

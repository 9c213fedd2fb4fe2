use crate::error::Result;

/// Scores a candidate. Higher is better.
///
/// The timetable implements this for chromosomes; tests substitute simpler
/// challenges to drive the operators directly.
pub trait Challenge<Pheno> {
    fn score(&self, phenotype: &Pheno) -> Result<f64>;
}

pub mod challenge;
pub mod engine;
pub mod launcher;
pub mod options;

pub use challenge::Challenge;
pub use engine::GeneticAlgorithm;
pub use launcher::{EvolutionLauncher, EvolutionResult, GenerationReport, Termination};
pub use options::{GeneticAlgorithmOptions, GeneticAlgorithmOptionsBuilder};

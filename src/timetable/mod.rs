//! # Timetable
//!
//! The `Timetable` owns the [`Catalog`] of one problem and knows how to turn a
//! [`Chromosome`] into concrete [`Class`]es and how many hard constraints that
//! schedule breaks.
//!
//! ## Decoding
//!
//! Gene block *i* belongs to the *i*-th (group, required module) pair in
//! catalog order. Each gene is resolved modulo the table it indexes:
//!
//! - room gene modulo the number of rooms,
//! - professor gene modulo the module's eligible professor list,
//! - timeslot gene modulo the number of timeslots, giving the start slot.
//!
//! A class spans `duration` consecutive timeslots from its start. A span that
//! runs past the last timeslot wraps around to the first one, so every class
//! always occupies exactly `duration` timeslot ids.
//!
//! ## Clashes
//!
//! For every unordered pair of classes sharing at least one timeslot, one
//! clash is counted for each of: same professor, same room, same group. In
//! addition every class held in a room smaller than its group counts one clash.
//!
//! ## Example
//!
//! ```rust
//! use timetable_ga::catalog::Catalog;
//! use timetable_ga::chromosome::Chromosome;
//! use timetable_ga::rng::RandomNumberGenerator;
//! use timetable_ga::timetable::Timetable;
//!
//! let catalog = Catalog::builder()
//!     .add_room(1, "A1", 15)
//!     .add_timeslot(1, "Mon 09:00 - 11:00")
//!     .add_professor(1, "Dr P Smith")
//!     .add_module(1, "cs1", "Computer Science", 1, vec![1])
//!     .add_group(1, 10, vec![1])
//!     .build()
//!     .unwrap();
//! let timetable = Timetable::new(catalog).unwrap();
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let chromosome = Chromosome::random(&timetable, &mut rng);
//! let classes = timetable.decode(&chromosome).unwrap();
//!
//! assert_eq!(classes.len(), 1);
//! assert_eq!(timetable.count_clashes(&classes).unwrap(), 0);
//! ```

pub mod class;

use crate::{
    catalog::Catalog,
    chromosome::{Chromosome, GeneBlock},
    error::{GeneticError, OptionExt, Result},
    evolution::Challenge,
    rng::RandomNumberGenerator,
};

pub use class::Class;

/// Scores a clash count: 1 for a clash-free timetable, approaching 0 as
/// clashes grow.
pub fn fitness_of(clashes: usize) -> f64 {
    1.0 / (1.0 + clashes as f64)
}

/// Positions of one (group, module) pair inside the catalog tables.
#[derive(Debug, Clone, Copy)]
struct ClassSlot {
    group: usize,
    module: usize,
}

/// Decoder and constraint checker for one problem instance.
#[derive(Debug, Clone)]
pub struct Timetable {
    catalog: Catalog,
    slots: Vec<ClassSlot>,
}

impl Timetable {
    /// Creates a timetable over the given catalog.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::CatalogIntegrity` if the catalog references an
    /// entity it does not contain.
    pub fn new(catalog: Catalog) -> Result<Self> {
        catalog.validate()?;

        let mut slots = Vec::with_capacity(catalog.class_count());
        for (group_position, group) in catalog.groups().iter().enumerate() {
            for module_id in group.module_ids() {
                let module_position = catalog
                    .modules()
                    .iter()
                    .position(|module| module.id() == *module_id)
                    .ok_or_else_genetic(|| {
                        GeneticError::CatalogIntegrity(format!(
                            "Group {} references unknown module {}",
                            group.id(),
                            module_id
                        ))
                    })?;
                slots.push(ClassSlot {
                    group: group_position,
                    module: module_position,
                });
            }
        }

        Ok(Self { catalog, slots })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of gene blocks every chromosome of this timetable carries.
    pub fn class_count(&self) -> usize {
        self.slots.len()
    }

    /// Draws fresh legal indices for gene block `locus`.
    ///
    /// Returns `None` when `locus` is not a block of this timetable.
    pub fn random_gene_block(
        &self,
        locus: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Option<GeneBlock> {
        let slot = self.slots.get(locus)?;
        let module = &self.catalog.modules()[slot.module];

        Some(GeneBlock {
            room: rng.gen_gene(self.catalog.rooms().len()),
            professor: module.random_professor_index(rng),
            timeslot: rng.gen_gene(self.catalog.timeslots().len()),
        })
    }

    /// Decodes a chromosome into its classes, in gene block order.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Development` if the chromosome does not carry
    /// exactly one gene block per class of this timetable.
    pub fn decode(&self, chromosome: &Chromosome) -> Result<Vec<Class>> {
        if chromosome.block_count() != self.slots.len() {
            return Err(GeneticError::Development(format!(
                "Chromosome has {} gene blocks but the timetable has {} classes",
                chromosome.block_count(),
                self.slots.len()
            )));
        }

        let rooms = self.catalog.rooms();
        let timeslots = self.catalog.timeslots();

        self.slots
            .iter()
            .zip(chromosome.blocks())
            .map(|(slot, block)| -> Result<Class> {
                let group = &self.catalog.groups()[slot.group];
                let module = &self.catalog.modules()[slot.module];

                let room = &rooms[block.room as usize % rooms.len()];
                let professor_id = module.professor_at(block.professor).ok_or_else_genetic(|| {
                    GeneticError::CatalogIntegrity(format!(
                        "Module {} has no eligible professor",
                        module.id()
                    ))
                })?;

                let start = block.timeslot as usize % timeslots.len();
                let timeslot_ids = (0..module.duration() as usize)
                    .map(|offset| timeslots[(start + offset) % timeslots.len()].id())
                    .collect();

                Ok(Class::new(
                    module.id(),
                    group.id(),
                    professor_id,
                    room.id(),
                    timeslot_ids,
                ))
            })
            .collect()
    }

    /// Counts the hard-constraint violations of a decoded schedule.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::CatalogIntegrity` if a class names a room or
    /// group this timetable's catalog does not contain.
    pub fn count_clashes(&self, classes: &[Class]) -> Result<usize> {
        let mut clashes = 0;

        for (position, class) in classes.iter().enumerate() {
            let room = self.catalog.room(class.room_id()).ok_or_else_genetic(|| {
                GeneticError::CatalogIntegrity(format!(
                    "Class of module {} is held in unknown room {}",
                    class.module_id(),
                    class.room_id()
                ))
            })?;
            let group = self.catalog.group(class.group_id()).ok_or_else_genetic(|| {
                GeneticError::CatalogIntegrity(format!(
                    "Class of module {} is taught to unknown group {}",
                    class.module_id(),
                    class.group_id()
                ))
            })?;
            if room.capacity() < group.size() {
                clashes += 1;
            }

            for other in &classes[position + 1..] {
                if !class.overlaps(other) {
                    continue;
                }
                if class.professor_id() == other.professor_id() {
                    clashes += 1;
                }
                if class.room_id() == other.room_id() {
                    clashes += 1;
                }
                if class.group_id() == other.group_id() {
                    clashes += 1;
                }
            }
        }

        Ok(clashes)
    }

    /// Decodes a chromosome and counts its clashes.
    pub fn clashes_of(&self, chromosome: &Chromosome) -> Result<usize> {
        let classes = self.decode(chromosome)?;
        self.count_clashes(&classes)
    }
}

impl Challenge<Chromosome> for Timetable {
    fn score(&self, chromosome: &Chromosome) -> Result<f64> {
        Ok(fitness_of(self.clashes_of(chromosome)?))
    }
}

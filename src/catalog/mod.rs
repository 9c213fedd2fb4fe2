//! # Catalog
//!
//! The catalog holds the reference data of one timetabling problem: rooms,
//! timeslots, professors, modules and student groups. It is built once by a
//! data provider through [`CatalogBuilder`] and stays read-only for the whole
//! run.
//!
//! ## Example
//!
//! ```rust
//! use timetable_ga::catalog::Catalog;
//!
//! let catalog = Catalog::builder()
//!     .add_room(1, "A1", 15)
//!     .add_timeslot(1, "Mon 09:00 - 11:00")
//!     .add_timeslot(2, "Mon 11:00 - 13:00")
//!     .add_professor(1, "Dr P Smith")
//!     .add_module(1, "cs1", "Computer Science", 1, vec![1])
//!     .add_group(1, 10, vec![1])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(catalog.class_count(), 1);
//! ```
//!
//! Building fails when a module or group refers to something that does not
//! exist:
//!
//! ```rust
//! use timetable_ga::catalog::Catalog;
//!
//! let result = Catalog::builder()
//!     .add_room(1, "A1", 15)
//!     .add_timeslot(1, "Mon 09:00 - 11:00")
//!     .add_module(1, "cs1", "Computer Science", 1, vec![42])
//!     .build();
//!
//! assert!(result.is_err());
//! ```

pub mod models;

use std::collections::{HashMap, HashSet};

use crate::error::{GeneticError, Result};

pub use models::{Group, Module, Professor, Room, Timeslot};

/// Immutable lookup tables of one problem instance.
///
/// Every table keeps the order in which its entries were declared; that order
/// fixes the layout of every chromosome.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rooms: Vec<Room>,
    timeslots: Vec<Timeslot>,
    professors: Vec<Professor>,
    modules: Vec<Module>,
    groups: Vec<Group>,
    room_index: HashMap<u32, usize>,
    timeslot_index: HashMap<u32, usize>,
    professor_index: HashMap<u32, usize>,
    module_index: HashMap<u32, usize>,
    group_index: HashMap<u32, usize>,
}

impl Catalog {
    /// Returns a builder for creating a `Catalog` instance.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn timeslots(&self) -> &[Timeslot] {
        &self.timeslots
    }

    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn room(&self, id: u32) -> Option<&Room> {
        self.room_index.get(&id).map(|&idx| &self.rooms[idx])
    }

    pub fn timeslot(&self, id: u32) -> Option<&Timeslot> {
        self.timeslot_index.get(&id).map(|&idx| &self.timeslots[idx])
    }

    pub fn professor(&self, id: u32) -> Option<&Professor> {
        self.professor_index.get(&id).map(|&idx| &self.professors[idx])
    }

    pub fn module(&self, id: u32) -> Option<&Module> {
        self.module_index.get(&id).map(|&idx| &self.modules[idx])
    }

    pub fn group(&self, id: u32) -> Option<&Group> {
        self.group_index.get(&id).map(|&idx| &self.groups[idx])
    }

    /// Total number of (group, required module) pairs, i.e. the number of
    /// classes every timetable has to place.
    pub fn class_count(&self) -> usize {
        self.groups.iter().map(|group| group.module_ids().len()).sum()
    }

    /// Checks the referential and value invariants of the catalog.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::CatalogIntegrity` describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        for module in &self.modules {
            if module.duration() == 0 {
                return Err(GeneticError::CatalogIntegrity(format!(
                    "Module {} has a duration of zero timeslots",
                    module.id()
                )));
            }
            if module.professor_ids().is_empty() {
                return Err(GeneticError::CatalogIntegrity(format!(
                    "Module {} has no eligible professor",
                    module.id()
                )));
            }
            if let Some(missing) = module
                .professor_ids()
                .iter()
                .find(|id| self.professor(**id).is_none())
            {
                return Err(GeneticError::CatalogIntegrity(format!(
                    "Module {} references unknown professor {}",
                    module.id(),
                    missing
                )));
            }
        }

        for group in &self.groups {
            if group.size() == 0 {
                return Err(GeneticError::CatalogIntegrity(format!(
                    "Group {} has no students",
                    group.id()
                )));
            }
            let mut seen = HashSet::new();
            for module_id in group.module_ids() {
                if self.module(*module_id).is_none() {
                    return Err(GeneticError::CatalogIntegrity(format!(
                        "Group {} references unknown module {}",
                        group.id(),
                        module_id
                    )));
                }
                if !seen.insert(*module_id) {
                    return Err(GeneticError::CatalogIntegrity(format!(
                        "Group {} requires module {} more than once",
                        group.id(),
                        module_id
                    )));
                }
            }
        }

        if self.class_count() > 0 {
            if self.rooms.is_empty() {
                return Err(GeneticError::CatalogIntegrity(
                    "Classes must be scheduled but the catalog has no rooms".to_string(),
                ));
            }
            if self.timeslots.is_empty() {
                return Err(GeneticError::CatalogIntegrity(
                    "Classes must be scheduled but the catalog has no timeslots".to_string(),
                ));
            }
        }

        // A span longer than the week would book one timeslot twice
        for group in &self.groups {
            for module in group.module_ids().iter().filter_map(|id| self.module(*id)) {
                if module.duration() as usize > self.timeslots.len() {
                    return Err(GeneticError::CatalogIntegrity(format!(
                        "Module {} lasts {} timeslots but only {} exist",
                        module.id(),
                        module.duration(),
                        self.timeslots.len()
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Builder for `Catalog`.
///
/// Provides the fluent `add_*` interface a data provider uses to declare the
/// problem. Ids are checked for uniqueness per table and every reference is
/// resolved when [`CatalogBuilder::build`] is called.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    rooms: Vec<Room>,
    timeslots: Vec<Timeslot>,
    professors: Vec<Professor>,
    modules: Vec<Module>,
    groups: Vec<Group>,
}

impl CatalogBuilder {
    pub fn add_room(mut self, id: u32, name: impl Into<String>, capacity: u32) -> Self {
        self.rooms.push(Room::new(id, name, capacity));
        self
    }

    pub fn add_timeslot(mut self, id: u32, label: impl Into<String>) -> Self {
        self.timeslots.push(Timeslot::new(id, label));
        self
    }

    pub fn add_professor(mut self, id: u32, name: impl Into<String>) -> Self {
        self.professors.push(Professor::new(id, name));
        self
    }

    pub fn add_module(
        mut self,
        id: u32,
        code: impl Into<String>,
        name: impl Into<String>,
        duration: u32,
        professor_ids: Vec<u32>,
    ) -> Self {
        self.modules
            .push(Module::new(id, code, name, duration, professor_ids));
        self
    }

    pub fn add_group(mut self, id: u32, size: u32, module_ids: Vec<u32>) -> Self {
        self.groups.push(Group::new(id, size, module_ids));
        self
    }

    /// Builds and validates the `Catalog`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::CatalogIntegrity` if an id is declared twice in
    /// one table or if the catalog fails [`Catalog::validate`].
    pub fn build(self) -> Result<Catalog> {
        let catalog = Catalog {
            room_index: index_by_id("room", &self.rooms, Room::id)?,
            timeslot_index: index_by_id("timeslot", &self.timeslots, Timeslot::id)?,
            professor_index: index_by_id("professor", &self.professors, Professor::id)?,
            module_index: index_by_id("module", &self.modules, Module::id)?,
            group_index: index_by_id("group", &self.groups, Group::id)?,
            rooms: self.rooms,
            timeslots: self.timeslots,
            professors: self.professors,
            modules: self.modules,
            groups: self.groups,
        };

        catalog.validate()?;
        Ok(catalog)
    }
}

fn index_by_id<T>(kind: &str, items: &[T], id: impl Fn(&T) -> u32) -> Result<HashMap<u32, usize>> {
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        if index.insert(id(item), position).is_some() {
            return Err(GeneticError::CatalogIntegrity(format!(
                "Duplicate {} id {}",
                kind,
                id(item)
            )));
        }
    }
    Ok(index)
}

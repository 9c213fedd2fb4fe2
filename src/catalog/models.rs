//! Immutable reference entities of a timetabling problem.

use crate::rng::RandomNumberGenerator;

/// A room classes can be held in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: u32,
    name: String,
    capacity: u32,
}

impl Room {
    pub fn new(id: u32, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

/// One schedulable period, e.g. "Mon 09:00 - 10:00".
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeslot {
    id: u32,
    label: String,
}

impl Timeslot {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    id: u32,
    name: String,
}

impl Professor {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A course module, the professors eligible to teach it and how many
/// consecutive timeslots one class of it lasts.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    id: u32,
    code: String,
    name: String,
    duration: u32,
    professor_ids: Vec<u32>,
}

impl Module {
    pub fn new(
        id: u32,
        code: impl Into<String>,
        name: impl Into<String>,
        duration: u32,
        professor_ids: Vec<u32>,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            duration,
            professor_ids,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of one class of this module, in timeslots.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn professor_ids(&self) -> &[u32] {
        &self.professor_ids
    }

    /// Draws a uniform index into the eligible professor list.
    pub fn random_professor_index(&self, rng: &mut RandomNumberGenerator) -> u32 {
        rng.gen_gene(self.professor_ids.len())
    }

    /// Resolves a professor gene modulo the eligible list length.
    ///
    /// Returns `None` only when the module has no eligible professor, which
    /// a validated catalog never contains.
    pub fn professor_at(&self, index: u32) -> Option<u32> {
        if self.professor_ids.is_empty() {
            return None;
        }
        Some(self.professor_ids[index as usize % self.professor_ids.len()])
    }
}

/// A student group and the modules it has to attend, in declaration order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: u32,
    size: u32,
    module_ids: Vec<u32>,
}

impl Group {
    pub fn new(id: u32, size: u32, module_ids: Vec<u32>) -> Self {
        Self {
            id,
            size,
            module_ids,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn module_ids(&self) -> &[u32] {
        &self.module_ids
    }
}

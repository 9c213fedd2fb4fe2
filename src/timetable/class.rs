/// One scheduled class, decoded from a gene block.
///
/// Classes are derived values: every decode produces fresh ones and they are
/// never updated in place.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    module_id: u32,
    group_id: u32,
    professor_id: u32,
    room_id: u32,
    timeslot_ids: Vec<u32>,
}

impl Class {
    pub fn new(
        module_id: u32,
        group_id: u32,
        professor_id: u32,
        room_id: u32,
        timeslot_ids: Vec<u32>,
    ) -> Self {
        Self {
            module_id,
            group_id,
            professor_id,
            room_id,
            timeslot_ids,
        }
    }

    pub fn module_id(&self) -> u32 {
        self.module_id
    }

    pub fn group_id(&self) -> u32 {
        self.group_id
    }

    pub fn professor_id(&self) -> u32 {
        self.professor_id
    }

    pub fn room_id(&self) -> u32 {
        self.room_id
    }

    /// Timeslots occupied by the class, in teaching order.
    pub fn timeslot_ids(&self) -> &[u32] {
        &self.timeslot_ids
    }

    /// Whether the two classes share at least one timeslot.
    ///
    /// Partial overlap of multi-timeslot classes counts, not only identical spans.
    pub fn overlaps(&self, other: &Class) -> bool {
        self.timeslot_ids
            .iter()
            .any(|timeslot| other.timeslot_ids.contains(timeslot))
    }
}

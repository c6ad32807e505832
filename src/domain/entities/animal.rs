//! Animal and shelter records.

use uuid::Uuid;

/// An animal as reported by the animals store.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalRecord {
    pub id: Uuid,
    pub species: Option<String>,
    pub shelter_id: Option<Uuid>,
}

impl AnimalRecord {
    /// Creates a new animal record.
    pub fn new(id: Uuid, species: Option<String>, shelter_id: Option<Uuid>) -> Self {
        Self {
            id,
            species,
            shelter_id,
        }
    }

    /// Species label, or `None` when the store left it blank.
    pub fn species_label(&self) -> Option<&str> {
        non_blank(self.species.as_deref())
    }
}

/// A shelter housing animals.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelterRecord {
    pub id: Uuid,
    pub name: Option<String>,
}

impl ShelterRecord {
    /// Creates a new shelter record.
    pub fn new(id: Uuid, name: Option<String>) -> Self {
        Self { id, name }
    }

    /// Shelter name, or `None` when the store left it blank.
    pub fn name_label(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

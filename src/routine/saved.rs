//! Canonical routine as read back from storage.

use super::{RoutineId, UpdatedRoutine};
use crate::item::{EditItem, SavedItem};
use crate::sequence::ItemSequence;
use serde::{Deserialize, Serialize};

/// Routine with identity whose items all match storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedRoutine {
    id: RoutineId,
    name: String,
    description: Option<String>,
    counter: u32,
    items: ItemSequence<SavedItem>,
}

impl SavedRoutine {
    /// Assemble a routine from stored data. Meant for storage implementations.
    pub fn new(
        id: RoutineId,
        name: impl Into<String>,
        description: Option<String>,
        counter: u32,
        items: ItemSequence<SavedItem>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            counter,
            items,
        }
    }

    pub fn id(&self) -> RoutineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// How many sessions of this routine were completed.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn items(&self) -> &ItemSequence<SavedItem> {
        &self.items
    }

    /// Start editing: same identity and fields, every item still Saved.
    pub fn edit(&self) -> UpdatedRoutine {
        UpdatedRoutine::new(
            self.id,
            self.name.clone(),
            self.description.clone(),
            self.counter,
            self.items.iter().cloned().map(EditItem::Saved).collect(),
        )
    }

    pub fn summary(&self) -> RoutineSummary {
        RoutineSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            counter: self.counter,
            item_count: self.items.len(),
        }
    }
}

/// Listing entry for a stored routine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineSummary {
    pub id: RoutineId,
    pub name: String,
    pub description: Option<String>,
    pub counter: u32,
    pub item_count: usize,
}

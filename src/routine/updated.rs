//! A stored routine being edited.

use super::{dirty, RoutineId};
use crate::item::{EditItem, ItemKind};
use crate::sequence::ItemSequence;
use serde::{Deserialize, Serialize};

/// Editing form of a stored routine.
///
/// Items may be any mix of Saved, Updated and New. Structural edits
/// promote every item whose position shifted to Updated; items outside
/// the shifted span keep their tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedRoutine {
    id: RoutineId,
    name: String,
    description: Option<String>,
    counter: u32,
    items: ItemSequence<EditItem>,
}

impl UpdatedRoutine {
    pub fn new(
        id: RoutineId,
        name: impl Into<String>,
        description: Option<String>,
        counter: u32,
        items: ItemSequence<EditItem>,
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

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn items(&self) -> &ItemSequence<EditItem> {
        &self.items
    }

    /// Number of items the next save has to write.
    pub fn pending_writes(&self) -> usize {
        self.items.iter().filter(|item| item.needs_write()).count()
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: Option<String>) -> Self {
        Self {
            description,
            ..self.clone()
        }
    }

    /// Append a New item; no existing position changes.
    pub fn add(&self, kind: ItemKind) -> Self {
        self.with_items(self.items.push(EditItem::New(kind)))
    }

    pub fn insert_at(&self, index: isize, kind: ItemKind) -> Self {
        let at = self.items.insertion_point(index);
        let items = self.items.insert_at(index, EditItem::New(kind));
        let shifted = dirty::after_insert(at, items.len());
        self.with_items(items.map_range(shifted, EditItem::promote))
    }

    pub fn remove_at(&self, index: isize) -> Self {
        let Some(at) = self.items.position(index) else {
            return self.clone();
        };
        let items = self.items.remove_at(index);
        let shifted = dirty::after_remove(at, items.len());
        self.with_items(items.map_range(shifted, EditItem::promote))
    }

    /// One-for-one substitution; no other item's tag changes.
    ///
    /// The replacement always needs a write; a Saved item lands as Updated.
    pub fn replace_at(&self, index: isize, item: impl Into<EditItem>) -> Self {
        self.with_items(self.items.replace_at(index, item.into().promote()))
    }

    pub fn move_item(&self, from: isize, to: isize) -> Self {
        let Some((source, target)) = self.items.move_positions(from, to) else {
            return self.clone();
        };
        let items = self.items.move_item(from, to);
        let shifted = dirty::after_move(source, target);
        self.with_items(items.map_range(shifted, EditItem::promote))
    }

    fn with_items(&self, items: ItemSequence<EditItem>) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            counter: self.counter,
            items,
        }
    }
}

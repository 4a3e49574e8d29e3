//! A routine that has never been written to storage.

use crate::item::ItemKind;
use crate::sequence::ItemSequence;
use serde::{Deserialize, Serialize};

/// Routine without identity; every item is New.
///
/// Structural edits cannot make a New item dirtier, so operations apply
/// the sequence edits directly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRoutine {
    name: String,
    description: Option<String>,
    items: ItemSequence<ItemKind>,
}

impl NewRoutine {
    /// Create an empty, unnamed routine.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn items(&self) -> &ItemSequence<ItemKind> {
        &self.items
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

    pub fn add(&self, item: ItemKind) -> Self {
        self.with_items(self.items.push(item))
    }

    pub fn insert_at(&self, index: isize, item: ItemKind) -> Self {
        self.with_items(self.items.insert_at(index, item))
    }

    pub fn remove_at(&self, index: isize) -> Self {
        self.with_items(self.items.remove_at(index))
    }

    pub fn replace_at(&self, index: isize, item: ItemKind) -> Self {
        self.with_items(self.items.replace_at(index, item))
    }

    pub fn move_item(&self, from: isize, to: isize) -> Self {
        self.with_items(self.items.move_item(from, to))
    }

    fn with_items(&self, items: ItemSequence<ItemKind>) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn rest(secs: u64) -> ItemKind {
        ItemKind::rest(Duration::from_secs(secs))
    }

    fn routine() -> NewRoutine {
        NewRoutine::new().add(rest(1)).add(rest(2)).add(rest(3))
    }

    fn durations(routine: &NewRoutine) -> Vec<u64> {
        routine
            .items()
            .iter()
            .map(|item| match item {
                ItemKind::RestBetweenExercises { duration } => duration.as_secs(),
                _ => unreachable!("only rests in these tests"),
            })
            .collect()
    }

    #[test]
    fn new_routine_is_empty_and_unnamed() {
        let routine = NewRoutine::new();
        assert_eq!(routine.name(), "");
        assert!(routine.description().is_none());
        assert!(routine.items().is_empty());
    }

    #[test]
    fn with_name_and_description_keep_items() {
        let original = routine();
        let named = original
            .with_name("Leg Day")
            .with_description(Some("Heavy".to_string()));

        assert_eq!(named.name(), "Leg Day");
        assert_eq!(named.description(), Some("Heavy"));
        assert!(named.items().ptr_eq(original.items()));
        assert_eq!(original.name(), "");
    }

    #[test]
    fn structural_edits_apply_directly() {
        let routine = routine();
        assert_eq!(durations(&routine.insert_at(1, rest(9))), vec![1, 9, 2, 3]);
        assert_eq!(durations(&routine.remove_at(0)), vec![2, 3]);
        assert_eq!(durations(&routine.replace_at(2, rest(9))), vec![1, 2, 9]);
        assert_eq!(durations(&routine.move_item(2, 0)), vec![3, 1, 2]);
        assert_eq!(durations(&routine), vec![1, 2, 3]);
    }

    #[test]
    fn invalid_indices_leave_items_shared() {
        let routine = routine();
        assert!(routine.remove_at(3).items().ptr_eq(routine.items()));
        assert!(routine.replace_at(-1, rest(9)).items().ptr_eq(routine.items()));
        assert!(routine.move_item(5, 0).items().ptr_eq(routine.items()));
    }
}

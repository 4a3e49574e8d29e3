//! Either kind of routine that can be handed to storage.

use super::{NewRoutine, RoutineId, SavedRoutine, UpdatedRoutine};
use crate::item::{EditItem, ItemId, ItemKind, SavedItem};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A routine under edit: never stored (`New`) or stored and changed (`Updated`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EditedRoutine {
    New(NewRoutine),
    Updated(UpdatedRoutine),
}

impl EditedRoutine {
    pub fn id(&self) -> Option<RoutineId> {
        match self {
            Self::New(_) => None,
            Self::Updated(routine) => Some(routine.id()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::New(routine) => routine.name(),
            Self::Updated(routine) => routine.name(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::New(routine) => routine.description(),
            Self::Updated(routine) => routine.description(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::New(routine) => routine.items().len(),
            Self::Updated(routine) => routine.items().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item payloads in routine order.
    pub fn kinds(&self) -> Vec<&ItemKind> {
        match self {
            Self::New(routine) => routine.items().iter().collect(),
            Self::Updated(routine) => routine.items().iter().map(|item| item.kind()).collect(),
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        match self {
            Self::New(routine) => Self::New(routine.with_name(name)),
            Self::Updated(routine) => Self::Updated(routine.with_name(name)),
        }
    }

    pub fn with_description(&self, description: Option<String>) -> Self {
        match self {
            Self::New(routine) => Self::New(routine.with_description(description)),
            Self::Updated(routine) => Self::Updated(routine.with_description(description)),
        }
    }

    pub fn add(&self, item: ItemKind) -> Self {
        match self {
            Self::New(routine) => Self::New(routine.add(item)),
            Self::Updated(routine) => Self::Updated(routine.add(item)),
        }
    }

    pub fn insert_at(&self, index: isize, item: ItemKind) -> Self {
        match self {
            Self::New(routine) => Self::New(routine.insert_at(index, item)),
            Self::Updated(routine) => Self::Updated(routine.insert_at(index, item)),
        }
    }

    pub fn remove_at(&self, index: isize) -> Self {
        match self {
            Self::New(routine) => Self::New(routine.remove_at(index)),
            Self::Updated(routine) => Self::Updated(routine.remove_at(index)),
        }
    }

    pub fn move_item(&self, from: isize, to: isize) -> Self {
        match self {
            Self::New(routine) => Self::New(routine.move_item(from, to)),
            Self::Updated(routine) => Self::Updated(routine.move_item(from, to)),
        }
    }

    /// Change the fields of the item at `index`, keeping its identity.
    ///
    /// Out of range returns the routine unchanged.
    pub fn edit_item(&self, index: isize, kind: ItemKind) -> Self {
        match self {
            Self::New(routine) => Self::New(routine.replace_at(index, kind)),
            Self::Updated(routine) => {
                let Some(current) = routine
                    .items()
                    .position(index)
                    .and_then(|at| routine.items().get(at))
                else {
                    return self.clone();
                };
                Self::Updated(routine.replace_at(index, current.with_kind(kind)))
            }
        }
    }

    /// Re-anchor this routine on `saved`, the stored result of an earlier
    /// version of it.
    ///
    /// An item comes back Saved only when storage holds the same fields at
    /// the same position under an identity no other item claims. Everything
    /// else keeps needing a write; identities storage no longer knows are
    /// dropped, so those items are written as New.
    pub fn rebase_onto(&self, saved: &SavedRoutine) -> Self {
        let current: Vec<EditItem> = match self {
            Self::New(routine) => routine.items().iter().cloned().map(EditItem::New).collect(),
            Self::Updated(routine) => routine.items().iter().cloned().collect(),
        };
        let known: HashSet<ItemId> = saved.items().iter().map(SavedItem::id).collect();
        let mut claimed: HashSet<ItemId> = current.iter().filter_map(EditItem::id).collect();

        let items = current
            .into_iter()
            .enumerate()
            .map(|(at, item)| {
                let stored = saved
                    .items()
                    .get(at)
                    .filter(|stored| stored.kind() == item.kind());
                match (item, stored) {
                    (EditItem::New(_), Some(stored)) if claimed.insert(stored.id()) => {
                        EditItem::Saved(stored.clone())
                    }
                    (EditItem::New(kind), _) => EditItem::New(kind),
                    (item, Some(stored)) if item.id() == Some(stored.id()) => {
                        EditItem::Saved(stored.clone())
                    }
                    (item, _) => match item.id() {
                        Some(id) if known.contains(&id) => item.promote(),
                        _ => EditItem::New(item.kind().clone()),
                    },
                }
            })
            .collect();

        Self::Updated(UpdatedRoutine::new(
            saved.id(),
            self.name(),
            self.description().map(str::to_string),
            saved.counter(),
            items,
        ))
    }
}

impl From<NewRoutine> for EditedRoutine {
    fn from(routine: NewRoutine) -> Self {
        Self::New(routine)
    }
}

impl From<UpdatedRoutine> for EditedRoutine {
    fn from(routine: UpdatedRoutine) -> Self {
        Self::Updated(routine)
    }
}

impl From<&SavedRoutine> for EditedRoutine {
    fn from(routine: &SavedRoutine) -> Self {
        Self::Updated(routine.edit())
    }
}

//! Lifecycle tags: whether an item is new, matches storage, or must be rewritten.

use super::kind::ItemKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persistent identity of a stored routine item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Lifecycle of an item, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    New,
    Saved,
    Updated,
}

/// An item whose fields and position are known to match storage.
///
/// Only storage reads produce these values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    id: ItemId,
    kind: ItemKind,
}

impl SavedItem {
    pub fn new(id: ItemId, kind: ItemKind) -> Self {
        Self { id, kind }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// The Updated counterpart, with the same identity and fields.
    pub fn to_updated(&self) -> UpdatedItem {
        UpdatedItem {
            id: self.id,
            kind: self.kind.clone(),
        }
    }

    fn into_updated(self) -> UpdatedItem {
        UpdatedItem {
            id: self.id,
            kind: self.kind,
        }
    }
}

/// A stored item that must be rewritten on the next save.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedItem {
    id: ItemId,
    kind: ItemKind,
}

impl UpdatedItem {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }
}

/// An item inside a routine that is being edited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EditItem {
    New(ItemKind),
    Saved(SavedItem),
    Updated(UpdatedItem),
}

impl EditItem {
    pub fn lifecycle(&self) -> Lifecycle {
        match self {
            Self::New(_) => Lifecycle::New,
            Self::Saved(_) => Lifecycle::Saved,
            Self::Updated(_) => Lifecycle::Updated,
        }
    }

    pub fn kind(&self) -> &ItemKind {
        match self {
            Self::New(kind) => kind,
            Self::Saved(item) => item.kind(),
            Self::Updated(item) => item.kind(),
        }
    }

    /// Persistent identity; `None` for items never written.
    pub fn id(&self) -> Option<ItemId> {
        match self {
            Self::New(_) => None,
            Self::Saved(item) => Some(item.id()),
            Self::Updated(item) => Some(item.id()),
        }
    }

    /// Whether the next save has to write this item.
    pub fn needs_write(&self) -> bool {
        !matches!(self, Self::Saved(_))
    }

    /// Mark the item as needing a rewrite.
    ///
    /// Saved becomes Updated; New and Updated are returned unchanged, so
    /// promoting twice is the same as promoting once.
    pub fn promote(self) -> Self {
        match self {
            Self::Saved(item) => Self::Updated(item.into_updated()),
            other => other,
        }
    }

    /// Replace the item's fields, keeping its identity.
    ///
    /// A stored item always comes back Updated, even if `kind` is equal
    /// to its current fields.
    pub fn with_kind(&self, kind: ItemKind) -> Self {
        match self {
            Self::New(_) => Self::New(kind),
            Self::Saved(item) => Self::Updated(UpdatedItem { id: item.id, kind }),
            Self::Updated(item) => Self::Updated(UpdatedItem { id: item.id, kind }),
        }
    }
}

impl From<ItemKind> for EditItem {
    fn from(kind: ItemKind) -> Self {
        Self::New(kind)
    }
}

impl From<SavedItem> for EditItem {
    fn from(item: SavedItem) -> Self {
        Self::Saved(item)
    }
}

impl From<UpdatedItem> for EditItem {
    fn from(item: UpdatedItem) -> Self {
        Self::Updated(item)
    }
}

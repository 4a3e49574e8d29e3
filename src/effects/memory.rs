//! In-process routine store.

use super::store::{PersistenceError, RoutineStore};
use crate::item::{EditItem, ItemId, SavedItem};
use crate::routine::{
    EditedRoutine, NewRoutine, RoutineId, RoutineSummary, SavedRoutine, UpdatedRoutine,
};
use crate::sequence::ItemSequence;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Thread-safe routine store kept in memory.
///
/// Clones share the same data. Each save is prepared completely before
/// anything is committed, so a rejected save leaves the store untouched.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRoutineStore {
    inner: Arc<Mutex<StoreData>>,
}

#[derive(Debug, Default)]
struct StoreData {
    last_routine_id: u64,
    last_item_id: u64,
    routines: BTreeMap<RoutineId, SavedRoutine>,
}

/// Counts of what a save did to the items.
#[derive(Debug, Default)]
struct WriteStats {
    inserted: usize,
    rewritten: usize,
    untouched: usize,
    deleted: usize,
}

impl InMemoryRoutineStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreData>, PersistenceError> {
        self.inner
            .lock()
            .map_err(|_| PersistenceError::Storage("routine store lock poisoned".to_string()))
    }
}

impl StoreData {
    fn insert(&mut self, routine: &NewRoutine) -> SavedRoutine {
        let mut next_item = self.last_item_id;
        let items: ItemSequence<SavedItem> = routine
            .items()
            .iter()
            .map(|kind| {
                next_item += 1;
                SavedItem::new(ItemId(next_item), kind.clone())
            })
            .collect();

        self.last_routine_id += 1;
        self.last_item_id = next_item;
        let id = RoutineId(self.last_routine_id);
        let saved = SavedRoutine::new(
            id,
            routine.name(),
            routine.description().map(str::to_string),
            0,
            items,
        );
        info!(routine = %id, inserted = saved.items().len(), "inserted routine");
        self.routines.insert(id, saved.clone());
        saved
    }

    fn update(&mut self, routine: &UpdatedRoutine) -> Result<SavedRoutine, PersistenceError> {
        let stored = self
            .routines
            .get(&routine.id())
            .ok_or(PersistenceError::NotFound(routine.id()))?;
        let stored_ids: HashSet<ItemId> = stored.items().iter().map(SavedItem::id).collect();

        let mut stats = WriteStats::default();
        let mut claimed = HashSet::with_capacity(stored_ids.len());
        let mut next_item = self.last_item_id;
        let mut items = Vec::with_capacity(routine.items().len());
        for item in routine.items() {
            let saved = match item {
                EditItem::New(kind) => {
                    next_item += 1;
                    stats.inserted += 1;
                    SavedItem::new(ItemId(next_item), kind.clone())
                }
                EditItem::Saved(saved) => {
                    claim(routine.id(), saved.id(), &stored_ids, &mut claimed)?;
                    stats.untouched += 1;
                    saved.clone()
                }
                EditItem::Updated(updated) => {
                    claim(routine.id(), updated.id(), &stored_ids, &mut claimed)?;
                    stats.rewritten += 1;
                    SavedItem::new(updated.id(), updated.kind().clone())
                }
            };
            items.push(saved);
        }
        stats.deleted = stored_ids.difference(&claimed).count();

        let saved = SavedRoutine::new(
            routine.id(),
            routine.name(),
            routine.description().map(str::to_string),
            stored.counter(),
            items.into(),
        );
        self.last_item_id = next_item;
        self.routines.insert(routine.id(), saved.clone());
        info!(
            routine = %routine.id(),
            inserted = stats.inserted,
            rewritten = stats.rewritten,
            untouched = stats.untouched,
            deleted = stats.deleted,
            "updated routine"
        );
        Ok(saved)
    }
}

/// Each stored item may appear once, and only in the routine that owns it.
fn claim(
    routine: RoutineId,
    item: ItemId,
    stored: &HashSet<ItemId>,
    claimed: &mut HashSet<ItemId>,
) -> Result<(), PersistenceError> {
    if !stored.contains(&item) {
        warn!(routine = %routine, item = %item, "save references an item the routine does not own");
        return Err(PersistenceError::Rejected(format!(
            "{item} does not belong to {routine}"
        )));
    }
    if !claimed.insert(item) {
        warn!(routine = %routine, item = %item, "save places one stored item twice");
        return Err(PersistenceError::Rejected(format!(
            "{item} appears more than once in {routine}"
        )));
    }
    Ok(())
}

impl RoutineStore for InMemoryRoutineStore {
    fn save(&self, routine: &EditedRoutine) -> Result<SavedRoutine, PersistenceError> {
        let mut data = self.lock()?;
        match routine {
            EditedRoutine::New(routine) => Ok(data.insert(routine)),
            EditedRoutine::Updated(routine) => data.update(routine),
        }
    }

    fn read(&self, id: RoutineId) -> Result<SavedRoutine, PersistenceError> {
        let data = self.lock()?;
        data.routines
            .get(&id)
            .cloned()
            .ok_or(PersistenceError::NotFound(id))
    }

    fn read_all(&self) -> Result<Vec<RoutineSummary>, PersistenceError> {
        let data = self.lock()?;
        Ok(data.routines.values().map(SavedRoutine::summary).collect())
    }

    fn delete(&self, id: RoutineId) -> Result<(), PersistenceError> {
        let mut data = self.lock()?;
        data.routines
            .remove(&id)
            .map(|_| debug!(routine = %id, "deleted routine"))
            .ok_or(PersistenceError::NotFound(id))
    }

    fn record_completion(&self, id: RoutineId) -> Result<SavedRoutine, PersistenceError> {
        let mut data = self.lock()?;
        let stored = data
            .routines
            .get(&id)
            .ok_or(PersistenceError::NotFound(id))?;
        let completed = SavedRoutine::new(
            id,
            stored.name(),
            stored.description().map(str::to_string),
            stored.counter().saturating_add(1),
            stored.items().clone(),
        );
        debug!(routine = %id, counter = completed.counter(), "recorded completion");
        data.routines.insert(id, completed.clone());
        Ok(completed)
    }
}

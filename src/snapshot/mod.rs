//! Versioned export and import of saved routines.
//!
//! Snapshots come in two encodings: JSON for readability and sharing,
//! binary for compact backups. Both carry a format version that is
//! checked on load.

use crate::routine::{NewRoutine, SavedRoutine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a saved routine at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutineSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// The routine as stored
    pub routine: SavedRoutine,
}

impl RoutineSnapshot {
    pub fn capture(routine: &SavedRoutine) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            routine: routine.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::Encode {
                format: "json",
                reason: e.to_string(),
            })
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json).map_err(|e| SnapshotError::Decode {
            format: "json",
            reason: e.to_string(),
        })?;
        snapshot.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Encode {
            format: "binary",
            reason: e.to_string(),
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes).map_err(|e| SnapshotError::Decode {
            format: "binary",
            reason: e.to_string(),
        })?;
        snapshot.check_version()
    }

    /// The routine's content as a fresh, never-stored routine.
    ///
    /// Identities and the completion counter are dropped, so importing a
    /// snapshot always creates a new routine.
    pub fn to_new_routine(&self) -> NewRoutine {
        let routine = NewRoutine::new()
            .with_name(self.routine.name())
            .with_description(self.routine.description().map(str::to_string));
        self.routine
            .items()
            .iter()
            .fold(routine, |routine, item| routine.add(item.kind().clone()))
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version > SNAPSHOT_VERSION {
            return Err(SnapshotError::NewerVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ExerciseRef, ExerciseSettings, ItemId, ItemKind, SavedItem};
    use crate::routine::RoutineId;
    use std::time::Duration;

    fn routine() -> SavedRoutine {
        let press = ExerciseSettings {
            exercise: ExerciseRef::new(5, "Overhead Press"),
            rest_between_sets: Duration::from_secs(90),
            sets: 3,
            weight: Some(42.5),
        };
        SavedRoutine::new(
            RoutineId(8),
            "Shoulders",
            Some("Strict form".to_string()),
            6,
            vec![
                SavedItem::new(ItemId(1), ItemKind::reps(press.clone(), 8)),
                SavedItem::new(ItemId(2), ItemKind::rest(Duration::from_secs(120))),
                SavedItem::new(ItemId(3), ItemKind::timed(press, Duration::from_secs(30))),
            ]
            .into(),
        )
    }

    #[test]
    fn json_snapshot_restores_routine() {
        let snapshot = RoutineSnapshot::capture(&routine());
        let json = snapshot.to_json().unwrap();
        let restored = RoutineSnapshot::from_json(&json).unwrap();

        assert_eq!(restored, snapshot);
    }

    #[test]
    fn binary_snapshot_restores_routine() {
        let snapshot = RoutineSnapshot::capture(&routine());
        let bytes = snapshot.to_bytes().unwrap();
        let restored = RoutineSnapshot::from_bytes(&bytes).unwrap();

        assert_eq!(restored.routine, routine());
        assert_eq!(restored.id, snapshot.id);
    }

    #[test]
    fn newer_version_is_rejected() {
        let mut snapshot = RoutineSnapshot::capture(&routine());
        snapshot.version = SNAPSHOT_VERSION + 1;
        let json = snapshot.to_json().unwrap();

        match RoutineSnapshot::from_json(&json) {
            Err(SnapshotError::NewerVersion { found, supported }) => {
                assert_eq!(found, SNAPSHOT_VERSION + 1);
                assert_eq!(supported, SNAPSHOT_VERSION);
            }
            other => panic!("expected NewerVersion, got {other:?}"),
        }
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(
            RoutineSnapshot::from_json("{not json"),
            Err(SnapshotError::Decode { .. })
        ));
        assert!(matches!(
            RoutineSnapshot::from_bytes(&[1, 2, 3]),
            Err(SnapshotError::Decode { .. })
        ));
    }

    #[test]
    fn import_drops_identities() {
        let imported = RoutineSnapshot::capture(&routine()).to_new_routine();

        assert_eq!(imported.name(), "Shoulders");
        assert_eq!(imported.description(), Some("Strict form"));
        assert_eq!(imported.items().len(), 3);
        assert_eq!(
            imported.items().get(1),
            Some(&ItemKind::rest(Duration::from_secs(120)))
        );
    }
}

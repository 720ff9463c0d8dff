//! Durable snapshot storage.
//!
//! The whole aggregate state is written as one JSON document. Writes go to a
//! temporary file in the same directory which is synced and then renamed over
//! the target, so a crash mid-write leaves the previous snapshot intact.
//! Reads never fail: a missing or unreadable file yields the caller's default.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, error, info, warn};
use tempfile::NamedTempFile;

use crate::{
    error::{Result, WorkplanError},
    models::{Snapshot, SCHEMA_VERSION},
};

/// Default directory for the snapshot, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".micromanage";

/// Default snapshot file name.
pub const DEFAULT_FILE_NAME: &str = "workplan.json";

/// Loads and saves [`Snapshot`]s at a single configurable location.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    data_dir: PathBuf,
    file_name: String,
}

impl SnapshotStore {
    /// Creates a store for `<data_dir>/<file_name>`.
    pub fn new(data_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Directory holding the snapshot file.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    /// Whether the snapshot file exists.
    pub fn exists(&self) -> bool {
        let path = self.path();
        let exists = path.is_file();
        debug!("Checking if snapshot exists: {} - {exists}", path.display());
        exists
    }

    /// Serializes `snapshot` and atomically replaces the stored file.
    ///
    /// # Errors
    ///
    /// Returns `WorkplanError::FileSystem` if the directory cannot be created
    /// or the file cannot be written, and `WorkplanError::Serialization` if
    /// the snapshot cannot be encoded.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let path = self.path();
        let fs_error = |source: io::Error| WorkplanError::FileSystem {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.data_dir).map_err(|source| WorkplanError::FileSystem {
            path: self.data_dir.clone(),
            source,
        })?;

        let contents = serde_json::to_vec_pretty(snapshot)?;

        let mut temp = NamedTempFile::new_in(&self.data_dir).map_err(fs_error)?;
        temp.write_all(&contents).map_err(fs_error)?;
        temp.as_file().sync_all().map_err(fs_error)?;
        temp.persist(&path).map_err(|e| fs_error(e.error))?;

        info!("Snapshot saved to: {}", path.display());
        Ok(())
    }

    /// Loads the stored snapshot, falling back to `default`.
    ///
    /// A missing file, an unreadable file, and malformed JSON all return
    /// `default` after logging. A schema version other than
    /// [`SCHEMA_VERSION`] is logged as a warning and the snapshot is used as
    /// read.
    pub fn load(&self, default: Snapshot) -> Snapshot {
        let path = self.path();
        if !path.exists() {
            info!("Snapshot not found: {}, using default state", path.display());
            return default;
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                error!("Failed to read snapshot {}: {e}", path.display());
                return default;
            }
        };

        let snapshot: Snapshot = match serde_json::from_str(&contents) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("Failed to parse snapshot {}: {e}", path.display());
                return default;
            }
        };

        if snapshot.schema_version != SCHEMA_VERSION {
            let stored = if snapshot.schema_version.is_empty() {
                "unversioned"
            } else {
                snapshot.schema_version.as_str()
            };
            warn!("Snapshot version mismatch: file={stored}, current={SCHEMA_VERSION}");
        }

        info!("Snapshot loaded from: {}", path.display());
        snapshot
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR, DEFAULT_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use tempfile::TempDir;

    use super::*;
    use crate::models::{Group, PlanState, Status, Unit, Workplan};

    fn sample_plan() -> Workplan {
        Workplan {
            goal: "Add login".to_string(),
            groups: vec![Group {
                goal: "Backend".to_string(),
                status: Status::InProgress,
                units: vec![
                    Unit {
                        status: Status::InProgress,
                        ..Unit::new("Add endpoint", Some("use the session store".to_string()))
                    },
                    Unit::new("Add tests", None),
                ],
                developer_note: Some("see ticket #3".to_string()),
                needs_more_thoughts: None,
            }],
            needs_more_thoughts: Some(true),
        }
    }

    fn default_snapshot() -> Snapshot {
        Snapshot::new(PlanState::Empty, Timestamp::from_second(0).unwrap())
    }

    #[test]
    fn test_path_joins_dir_and_file() {
        let store = SnapshotStore::new("/tmp/data", "plan.json");
        assert_eq!(store.path(), PathBuf::from("/tmp/data/plan.json"));
        assert_eq!(
            SnapshotStore::default().path(),
            Path::new(DEFAULT_DATA_DIR).join(DEFAULT_FILE_NAME)
        );
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("nested/dir"), "workplan.json");
        assert!(!store.exists());

        let snapshot = Snapshot::new(PlanState::from(sample_plan()), Timestamp::now());
        store.save(&snapshot).unwrap();
        assert!(store.exists());

        let loaded = store.load(default_snapshot());
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path(), "workplan.json");

        store
            .save(&Snapshot::new(PlanState::from(sample_plan()), Timestamp::now()))
            .unwrap();
        store.save(&default_snapshot()).unwrap();

        assert!(store.load(Snapshot::default()).plan.is_empty());
        let leftovers = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(leftovers, 1, "temporary files must not be left behind");
    }

    #[test]
    fn test_empty_plan_is_stored_as_marker() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path(), "workplan.json");
        store.save(&default_snapshot()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["plan"], "empty");
        assert_eq!(raw["schemaVersion"], SCHEMA_VERSION);
        assert!(raw["lastUpdated"].is_string());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path(), "absent.json");
        assert_eq!(store.load(default_snapshot()), default_snapshot());
    }

    #[test]
    fn test_load_corrupt_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path(), "workplan.json");
        fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.load(default_snapshot()), default_snapshot());
    }

    #[test]
    fn test_load_accepts_version_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path(), "workplan.json");
        fs::write(
            store.path(),
            r#"{"plan": "empty", "lastUpdated": "2024-01-01T00:00:00Z", "schemaVersion": "9.9.9"}"#,
        )
        .unwrap();

        let loaded = store.load(Snapshot::default());
        assert!(loaded.plan.is_empty());
        assert_eq!(loaded.schema_version, "9.9.9");
        assert_eq!(loaded.last_updated, "2024-01-01T00:00:00Z".parse::<Timestamp>().unwrap());
    }

    #[test]
    fn test_load_legacy_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path(), "workplan.json");
        fs::write(
            store.path(),
            r#"{
                "currentTicket": {
                    "goal": "Add login",
                    "pullRequests": [{
                        "goal": "Backend",
                        "status": "needsRefinment",
                        "commits": [
                            {"goal": "Add endpoint", "status": "needsRefinment", "commitId": "abc123"},
                            {"goal": "Add tests", "status": "not_started"}
                        ],
                        "developerNote": "legacy note"
                    }]
                },
                "version": "1.0.0"
            }"#,
        )
        .unwrap();

        let loaded = store.load(Snapshot::default());
        let plan = loaded.plan.plan().expect("legacy plan should load");
        assert_eq!(loaded.schema_version, "1.0.0");
        assert_eq!(plan.groups[0].status, Status::NeedsRefinement);
        assert_eq!(plan.groups[0].units[0].revision_id.as_deref(), Some("abc123"));
        assert_eq!(plan.groups[0].developer_note.as_deref(), Some("legacy note"));
        assert_eq!(plan.unit_count(), 2);
    }

    #[test]
    fn test_load_legacy_empty_marker() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path(), "workplan.json");
        fs::write(store.path(), r#"{"currentTicket": "noTicket"}"#).unwrap();

        let loaded = store.load(Snapshot::new(
            PlanState::from(sample_plan()),
            Timestamp::now(),
        ));
        assert!(loaded.plan.is_empty());
        assert!(loaded.schema_version.is_empty());
    }

    #[test]
    fn test_save_fails_when_directory_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let store = SnapshotStore::new(&blocker, "workplan.json");
        let err = store.save(&default_snapshot()).unwrap_err();
        assert!(matches!(err, WorkplanError::FileSystem { .. }));
    }
}

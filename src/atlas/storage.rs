use std::path::Path;

use sled::IVec;

use crate::atlas::errors::AtlasError;
use crate::atlas::types::{PlayerProgress, PROGRESS_SCHEMA_VERSION};

const TREE_ATLAS: &str = "atlas";

/// Fixed key for the single persisted progress slot. One store holds one
/// player's journey; independent sessions use independent store paths.
const PROGRESS_KEY: &[u8] = b"progress:player";

/// Sled-backed persistence for player progress.
pub struct ProgressStore {
    _db: sled::Db,
    atlas: sled::Tree,
}

impl ProgressStore {
    /// Open (or create) the progress store rooted at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AtlasError> {
        let path_ref = path.as_ref();
        std::fs::create_dir_all(path_ref)?;
        let db = sled::open(path_ref)?;
        let atlas = db.open_tree(TREE_ATLAS)?;
        Ok(Self { _db: db, atlas })
    }

    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>, AtlasError> {
        Ok(bincode::serialize(value)?)
    }

    fn deserialize<T: serde::de::DeserializeOwned>(bytes: IVec) -> Result<T, AtlasError> {
        Ok(bincode::deserialize::<T>(&bytes)?)
    }

    /// Write the progress record, stamping the current schema version.
    pub fn save_progress(&self, progress: &PlayerProgress) -> Result<(), AtlasError> {
        let mut record = progress.clone();
        record.schema_version = PROGRESS_SCHEMA_VERSION;
        let bytes = Self::serialize(&record)?;
        self.atlas.insert(PROGRESS_KEY, bytes)?;
        self.atlas.flush()?;
        Ok(())
    }

    /// Fetch the stored progress. `Ok(None)` when nothing has been saved yet.
    pub fn load_progress(&self) -> Result<Option<PlayerProgress>, AtlasError> {
        let Some(bytes) = self.atlas.get(PROGRESS_KEY)? else {
            return Ok(None);
        };
        let record: PlayerProgress = Self::deserialize(bytes)?;
        if record.schema_version != PROGRESS_SCHEMA_VERSION {
            return Err(AtlasError::SchemaMismatch {
                entity: "progress",
                expected: PROGRESS_SCHEMA_VERSION,
                found: record.schema_version,
            });
        }
        Ok(Some(record))
    }

    /// Remove the stored progress slot. Used by reset.
    pub fn clear_progress(&self) -> Result<(), AtlasError> {
        self.atlas.remove(PROGRESS_KEY)?;
        self.atlas.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn store_round_trips_progress() {
        let dir = TempDir::new().expect("tempdir");
        let store = ProgressStore::open(dir.path()).expect("store");
        assert!(store.load_progress().expect("load").is_none());

        let mut progress = PlayerProgress::new();
        progress.score = 45;
        progress.visited_villages.push("koungou".to_string());
        store.save_progress(&progress).expect("save");

        let fetched = store.load_progress().expect("load").expect("present");
        assert_eq!(fetched.score, 45);
        assert_eq!(fetched.visited_villages, vec!["mamoudzou", "koungou"]);
        assert_eq!(fetched.schema_version, PROGRESS_SCHEMA_VERSION);
    }

    #[test]
    fn clear_empties_the_slot() {
        let dir = TempDir::new().expect("tempdir");
        let store = ProgressStore::open(dir.path()).expect("store");
        store.save_progress(&PlayerProgress::new()).expect("save");
        store.clear_progress().expect("clear");
        assert!(store.load_progress().expect("load").is_none());
    }

    #[test]
    fn schema_drift_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let store = ProgressStore::open(dir.path()).expect("store");

        let mut record = PlayerProgress::new();
        record.schema_version = PROGRESS_SCHEMA_VERSION + 1;
        let bytes = bincode::serialize(&record).expect("serialize");
        store.atlas.insert(PROGRESS_KEY, bytes).expect("insert");

        match store.load_progress() {
            Err(AtlasError::SchemaMismatch { entity, found, .. }) => {
                assert_eq!(entity, "progress");
                assert_eq!(found, PROGRESS_SCHEMA_VERSION + 1);
            }
            other => panic!("expected schema mismatch, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn reopening_preserves_progress() {
        let dir = TempDir::new().expect("tempdir");
        {
            let store = ProgressStore::open(dir.path()).expect("store");
            let mut progress = PlayerProgress::new();
            progress.badges.push("premier_pas".to_string());
            store.save_progress(&progress).expect("save");
        }
        let store = ProgressStore::open(dir.path()).expect("reopen");
        let fetched = store.load_progress().expect("load").expect("present");
        assert_eq!(fetched.badges, vec!["premier_pas"]);
    }
}

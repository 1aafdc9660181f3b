//! Map progression: villages, routes, badges and persisted player progress.
//!
//! The data model and sled persistence follow the same shape as the rest of
//! the Malango storage: serde records with an explicit schema version,
//! bincode on disk, and a small engine that owns the in-memory state for one
//! player session.

pub mod engine;
pub mod errors;
pub mod storage;
pub mod types;
pub mod world;

pub use engine::{AtlasEngine, AtlasEvent, AtlasStats};
pub use errors::AtlasError;
pub use storage::ProgressStore;
pub use types::{
    BadgeRequirement, BadgeRule, PlayerProgress, Position, Route, UnlockRequirement, Village,
    VillageKind, WorldMap, PROGRESS_SCHEMA_VERSION,
};
pub use world::{
    canonical_world, load_world_from_json, CANONICAL_VILLAGE_IDS, DEFAULT_START_VILLAGE_ID,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::atlas::world::DEFAULT_START_VILLAGE_ID;

pub const PROGRESS_SCHEMA_VERSION: u8 = 1;

/// Administrative kind of a village, used by the client for map markers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VillageKind {
    Prefecture,
    SousPrefecture,
    Commune,
}

/// Map coordinates in client display space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// One village on the Mayotte map. Everything but `unlocked` is immutable
/// world data; `unlocked` mirrors the player's `unlocked_villages` list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Village {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub kind: VillageKind,
    pub unlocked: bool,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Village {
    pub fn new(id: &str, name: &str, kind: VillageKind, x: f32, y: f32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            position: Position { x, y },
            kind,
            unlocked: false,
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }
}

/// Condition gating whether a route's destination becomes accessible.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UnlockRequirement {
    /// A specific village has been visited.
    Visit { village: String },
    /// At least `count` villages have been visited.
    VisitCount { count: usize },
    /// At least `count` village quizzes have been completed.
    QuizSuccess { count: usize },
}

/// Directed connection between two villages. Travel may traverse a route in
/// either direction; the requirement only ever unlocks `to`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub requirement: UnlockRequirement,
}

impl Route {
    pub fn new(from: &str, to: &str, requirement: UnlockRequirement) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            requirement,
        }
    }

    /// True when this route touches `village_id` on either end.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Condition for earning a badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BadgeRequirement {
    VisitCount { count: usize },
    QuizSuccess { count: usize },
    /// Every village on the map has been visited.
    VisitAll,
}

/// Static badge definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BadgeRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub requirement: BadgeRequirement,
}

impl BadgeRule {
    pub fn new(id: &str, name: &str, description: &str, requirement: BadgeRequirement) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            requirement,
        }
    }
}

/// Static world definition: villages, routes and badge rules. Never mutated
/// by the engine except for the `unlocked` flag on each village.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorldMap {
    pub villages: Vec<Village>,
    pub routes: Vec<Route>,
    pub badges: Vec<BadgeRule>,
}

impl WorldMap {
    pub fn village(&self, id: &str) -> Option<&Village> {
        self.villages.iter().find(|v| v.id == id)
    }

    pub fn village_mut(&mut self, id: &str) -> Option<&mut Village> {
        self.villages.iter_mut().find(|v| v.id == id)
    }
}

/// The sole mutable, persisted record: one player's journey through the map.
/// The id vectors keep insertion order, which the client surfaces as the
/// travel history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerProgress {
    pub current_village: String,
    pub visited_villages: Vec<String>,
    pub unlocked_villages: Vec<String>,
    pub completed_quiz: Vec<String>,
    pub score: u32,
    pub badges: Vec<String>,
    pub last_play_time: DateTime<Utc>,
    pub schema_version: u8,
}

impl PlayerProgress {
    /// Fresh progress: standing in Mamoudzou, which is the only visited and
    /// unlocked village, with nothing else earned yet.
    pub fn new() -> Self {
        Self {
            current_village: DEFAULT_START_VILLAGE_ID.to_string(),
            visited_villages: vec![DEFAULT_START_VILLAGE_ID.to_string()],
            unlocked_villages: vec![DEFAULT_START_VILLAGE_ID.to_string()],
            completed_quiz: Vec::new(),
            score: 0,
            badges: Vec::new(),
            last_play_time: Utc::now(),
            schema_version: PROGRESS_SCHEMA_VERSION,
        }
    }

    pub fn has_visited(&self, village_id: &str) -> bool {
        self.visited_villages.iter().any(|id| id == village_id)
    }

    pub fn has_unlocked(&self, village_id: &str) -> bool {
        self.unlocked_villages.iter().any(|id| id == village_id)
    }

    pub fn has_completed_quiz(&self, village_id: &str) -> bool {
        self.completed_quiz.iter().any(|id| id == village_id)
    }

    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.iter().any(|id| id == badge_id)
    }

    /// Refresh `last_play_time` to now.
    pub fn touch(&mut self) {
        self.last_play_time = Utc::now();
    }
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_progress_starts_in_mamoudzou() {
        let progress = PlayerProgress::new();
        assert_eq!(progress.current_village, "mamoudzou");
        assert_eq!(progress.visited_villages, vec!["mamoudzou"]);
        assert_eq!(progress.unlocked_villages, vec!["mamoudzou"]);
        assert!(progress.completed_quiz.is_empty());
        assert!(progress.badges.is_empty());
        assert_eq!(progress.score, 0);
        assert_eq!(progress.schema_version, PROGRESS_SCHEMA_VERSION);
    }

    #[test]
    fn route_connects_either_direction() {
        let route = Route::new(
            "mamoudzou",
            "koungou",
            UnlockRequirement::Visit {
                village: "mamoudzou".to_string(),
            },
        );
        assert!(route.connects("mamoudzou", "koungou"));
        assert!(route.connects("koungou", "mamoudzou"));
        assert!(!route.connects("mamoudzou", "dembeni"));
    }

    #[test]
    fn requirement_serde_uses_tagged_snake_case() {
        let json = serde_json::to_value(UnlockRequirement::VisitCount { count: 3 }).unwrap();
        assert_eq!(json["type"], "visit_count");
        assert_eq!(json["count"], 3);

        let parsed: UnlockRequirement =
            serde_json::from_str(r#"{"type":"visit","village":"sada"}"#).unwrap();
        assert_eq!(
            parsed,
            UnlockRequirement::Visit {
                village: "sada".to_string()
            }
        );
    }
}

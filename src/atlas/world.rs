//! Static world data: the built-in Mayotte map and a JSON seed loader.
//!
//! The canonical map ships with the app. Operators (and tests) can also load
//! a custom world from a JSON document with the same shape, so content
//! updates don't require recompiling.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::atlas::errors::AtlasError;
use crate::atlas::types::{
    BadgeRequirement, BadgeRule, Route, UnlockRequirement, Village, VillageKind, WorldMap,
};

/// Village every new player starts in.
pub const DEFAULT_START_VILLAGE_ID: &str = "mamoudzou";

/// Villages of the built-in map, in seed order. Mamoudzou is mandatory
/// (it is the default start); the rest is content the deck editors maintain.
///
/// Total: 12 villages (10 on Grande-Terre, 2 on Petite-Terre).
pub const CANONICAL_VILLAGE_IDS: &[&str] = &[
    DEFAULT_START_VILLAGE_ID,
    // Grande-Terre, north and east
    "koungou",
    "mtsamboro",
    "dembeni",
    "bandrele",
    // Grande-Terre, center and west
    "tsingoni",
    "sada",
    "chiconi",
    // Grande-Terre, south
    "kani_keli",
    "chirongui",
    // Petite-Terre, reached by the barge crossing
    "dzaoudzi",
    "pamandzi",
];

/// Build the canonical Mayotte world map. Deterministic: no timestamps, no
/// randomness, so tests can assert on exact content.
pub fn canonical_world() -> WorldMap {
    let villages = vec![
        Village::new("mamoudzou", "Mamoudzou", VillageKind::Prefecture, 62.0, 38.0)
            .with_metadata("region", "grande-terre"),
        Village::new("koungou", "Koungou", VillageKind::Commune, 58.0, 24.0)
            .with_metadata("region", "grande-terre"),
        Village::new("mtsamboro", "Mtsamboro", VillageKind::Commune, 38.0, 8.0)
            .with_metadata("region", "grande-terre"),
        Village::new("dembeni", "Dembéni", VillageKind::Commune, 58.0, 55.0)
            .with_metadata("region", "grande-terre"),
        Village::new("bandrele", "Bandrélé", VillageKind::Commune, 60.0, 70.0)
            .with_metadata("region", "grande-terre"),
        Village::new("tsingoni", "Tsingoni", VillageKind::Commune, 42.0, 40.0)
            .with_metadata("region", "grande-terre"),
        Village::new("sada", "Sada", VillageKind::Commune, 32.0, 52.0)
            .with_metadata("region", "grande-terre"),
        Village::new("chiconi", "Chiconi", VillageKind::Commune, 30.0, 45.0)
            .with_metadata("region", "grande-terre"),
        Village::new("kani_keli", "Kani-Kéli", VillageKind::Commune, 40.0, 86.0)
            .with_metadata("region", "grande-terre"),
        Village::new("chirongui", "Chirongui", VillageKind::Commune, 44.0, 76.0)
            .with_metadata("region", "grande-terre"),
        Village::new("dzaoudzi", "Dzaoudzi", VillageKind::SousPrefecture, 82.0, 40.0)
            .with_metadata("region", "petite-terre")
            .with_metadata("access", "barge"),
        Village::new("pamandzi", "Pamandzi", VillageKind::Commune, 84.0, 48.0)
            .with_metadata("region", "petite-terre"),
    ];

    let routes = vec![
        // Leaving the capital: open as soon as the player exists.
        Route::new(
            "mamoudzou",
            "koungou",
            UnlockRequirement::Visit {
                village: "mamoudzou".to_string(),
            },
        ),
        Route::new(
            "mamoudzou",
            "dembeni",
            UnlockRequirement::Visit {
                village: "mamoudzou".to_string(),
            },
        ),
        Route::new(
            "koungou",
            "mtsamboro",
            UnlockRequirement::Visit {
                village: "koungou".to_string(),
            },
        ),
        Route::new(
            "dembeni",
            "bandrele",
            UnlockRequirement::Visit {
                village: "dembeni".to_string(),
            },
        ),
        // Inland once the coast is familiar.
        Route::new(
            "mamoudzou",
            "tsingoni",
            UnlockRequirement::VisitCount { count: 3 },
        ),
        Route::new(
            "tsingoni",
            "chiconi",
            UnlockRequirement::Visit {
                village: "tsingoni".to_string(),
            },
        ),
        Route::new(
            "chiconi",
            "sada",
            UnlockRequirement::Visit {
                village: "chiconi".to_string(),
            },
        ),
        // The south opens through quiz work.
        Route::new(
            "bandrele",
            "kani_keli",
            UnlockRequirement::QuizSuccess { count: 2 },
        ),
        Route::new(
            "kani_keli",
            "chirongui",
            UnlockRequirement::Visit {
                village: "kani_keli".to_string(),
            },
        ),
        // Barge crossing to Petite-Terre.
        Route::new(
            "mamoudzou",
            "dzaoudzi",
            UnlockRequirement::QuizSuccess { count: 4 },
        ),
        Route::new(
            "dzaoudzi",
            "pamandzi",
            UnlockRequirement::Visit {
                village: "dzaoudzi".to_string(),
            },
        ),
    ];

    let badges = vec![
        BadgeRule::new(
            "premier_pas",
            "Premier pas",
            "Visit your first village beyond Mamoudzou.",
            BadgeRequirement::VisitCount { count: 2 },
        ),
        BadgeRule::new(
            "explorateur",
            "Explorateur",
            "Visit five villages.",
            BadgeRequirement::VisitCount { count: 5 },
        ),
        BadgeRule::new(
            "grand_voyageur",
            "Grand voyageur",
            "Visit nine villages.",
            BadgeRequirement::VisitCount { count: 9 },
        ),
        BadgeRule::new(
            "premier_quiz",
            "Premier quiz",
            "Complete your first village quiz.",
            BadgeRequirement::QuizSuccess { count: 1 },
        ),
        BadgeRule::new(
            "maitre_des_quiz",
            "Maître des quiz",
            "Complete six village quizzes.",
            BadgeRequirement::QuizSuccess { count: 6 },
        ),
        BadgeRule::new(
            "tour_de_mayotte",
            "Tour de Mayotte",
            "Visit every village on the map.",
            BadgeRequirement::VisitAll,
        ),
    ];

    WorldMap {
        villages,
        routes,
        badges,
    }
}

/// Load a world definition from a JSON seed file.
pub fn load_world_from_json<P: AsRef<Path>>(path: P) -> Result<WorldMap, AtlasError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let seed: WorldSeed = serde_json::from_str(&contents).map_err(|e| {
        AtlasError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Failed to parse {}: {}", path.display(), e),
        ))
    })?;

    let villages: Vec<Village> = seed
        .villages
        .into_iter()
        .map(|v| {
            let mut village = Village::new(&v.id, &v.name, v.kind, v.x, v.y);
            for (key, value) in v.metadata {
                village = village.with_metadata(&key, &value);
            }
            village
        })
        .collect();

    let routes: Vec<Route> = seed
        .routes
        .into_iter()
        .map(|r| Route::new(&r.from, &r.to, r.requirement))
        .collect();

    let badges: Vec<BadgeRule> = seed
        .badges
        .into_iter()
        .map(|b| BadgeRule::new(&b.id, &b.name, &b.description, b.requirement))
        .collect();

    Ok(WorldMap {
        villages,
        routes,
        badges,
    })
}

// ============================================================================
// Seed data structures that match the JSON format
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct WorldSeed {
    villages: Vec<VillageSeed>,
    #[serde(default)]
    routes: Vec<RouteSeed>,
    #[serde(default)]
    badges: Vec<BadgeSeed>,
}

#[derive(Debug, Serialize, Deserialize)]
struct VillageSeed {
    id: String,
    name: String,
    kind: VillageKind,
    x: f32,
    y: f32,
    #[serde(default)]
    metadata: HashMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RouteSeed {
    from: String,
    to: String,
    requirement: UnlockRequirement,
}

#[derive(Debug, Serialize, Deserialize)]
struct BadgeSeed {
    id: String,
    name: String,
    description: String,
    requirement: BadgeRequirement,
}

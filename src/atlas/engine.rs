//! Progression rule engine for one player session.
//!
//! The engine owns the world map, the player progress record, and the
//! persistence handle. All mutating operations take `&mut self`, so the
//! single-writer assumption of the design is enforced by the borrow checker
//! rather than by a lock. Persistence is best effort: a failed save is
//! logged and the session continues on in-memory state.
//!
//! Instead of registering callbacks, callers poll the engine's event queue
//! ([`AtlasEngine::poll_event`] / [`AtlasEngine::drain_events`]) after each
//! operation and re-render from whatever came out.

use std::collections::VecDeque;

use log::{debug, warn};
use serde::Serialize;

use crate::atlas::storage::ProgressStore;
use crate::atlas::types::{
    BadgeRequirement, PlayerProgress, UnlockRequirement, Village, WorldMap,
};

/// Score awarded for visiting a village for the first time.
const VISIT_SCORE: u32 = 10;
/// Score awarded for completing a village quiz successfully.
const QUIZ_SUCCESS_SCORE: u32 = 20;
/// Consolation score for a failed first quiz attempt.
const QUIZ_ATTEMPT_SCORE: u32 = 5;
/// Score awarded when a village unlocks.
const UNLOCK_SCORE: u32 = 15;
/// Score awarded per badge.
const BADGE_SCORE: u32 = 50;

/// Notifications produced by engine operations, drained by the caller.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AtlasEvent {
    /// State was (re)built from storage or reset to defaults.
    Initialized,
    Traveled { village: String, first_visit: bool },
    QuizRecorded { village: String, success: bool },
    VillageUnlocked { village: String },
    BadgeEarned { badge: String },
}

/// Snapshot of session totals, recomputed on every call.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AtlasStats {
    pub villages_visited: usize,
    pub total_villages: usize,
    pub quizzes_completed: usize,
    pub total_quizzes: usize,
    pub badges: usize,
    pub total_badges: usize,
    pub score: u32,
}

/// Caller-owned progression engine. Construct one per player session; there
/// is no global instance.
pub struct AtlasEngine {
    store: ProgressStore,
    world: WorldMap,
    progress: PlayerProgress,
    events: VecDeque<AtlasEvent>,
}

impl AtlasEngine {
    /// Build a session from persisted progress, falling back to fresh
    /// defaults when the store is empty or unreadable. Village unlock flags
    /// are rebuilt from the progress record, then the unlock pass runs so
    /// routes already satisfied by the loaded state open immediately.
    pub fn new(store: ProgressStore, world: WorldMap) -> Self {
        let progress = match store.load_progress() {
            Ok(Some(progress)) => progress,
            Ok(None) => PlayerProgress::new(),
            Err(e) => {
                warn!("failed to load progress, starting fresh: {}", e);
                PlayerProgress::new()
            }
        };

        let mut engine = Self {
            store,
            world,
            progress,
            events: VecDeque::new(),
        };
        engine.apply_unlock_flags();
        engine.evaluate_unlocks();
        engine.events.push_back(AtlasEvent::Initialized);
        engine
    }

    /// Move the player to `village_id`. Returns `false` without any mutation
    /// when the village is unknown, still locked, or no route connects it
    /// (in either direction) to the current village.
    pub fn travel_to(&mut self, village_id: &str) -> bool {
        match self.world.village(village_id) {
            Some(village) if village.unlocked => {}
            Some(_) => {
                debug!("travel refused: {} is locked", village_id);
                return false;
            }
            None => {
                debug!("travel refused: unknown village {}", village_id);
                return false;
            }
        }
        let reachable = self
            .world
            .routes
            .iter()
            .any(|route| route.connects(&self.progress.current_village, village_id));
        if !reachable {
            debug!(
                "travel refused: no route between {} and {}",
                self.progress.current_village, village_id
            );
            return false;
        }

        self.progress.current_village = village_id.to_string();
        let first_visit = !self.progress.has_visited(village_id);
        if first_visit {
            self.progress.visited_villages.push(village_id.to_string());
            self.progress.score += VISIT_SCORE;
            debug!("first visit to {} (+{})", village_id, VISIT_SCORE);
        }
        self.progress.touch();
        self.evaluate_unlocks();
        self.persist();
        self.events.push_back(AtlasEvent::Traveled {
            village: village_id.to_string(),
            first_visit,
        });
        true
    }

    /// Record a quiz attempt for a village. Score is granted only for the
    /// first completion (20 on success, 5 otherwise); the badge pass runs on
    /// every call regardless.
    pub fn complete_quiz(&mut self, village_id: &str, success: bool) {
        if !self.progress.has_completed_quiz(village_id) {
            self.progress.completed_quiz.push(village_id.to_string());
            let points = if success {
                QUIZ_SUCCESS_SCORE
            } else {
                QUIZ_ATTEMPT_SCORE
            };
            self.progress.score += points;
            debug!("quiz recorded for {} (+{})", village_id, points);
        }
        self.evaluate_badges();
        self.persist();
        self.events.push_back(AtlasEvent::QuizRecorded {
            village: village_id.to_string(),
            success,
        });
    }

    /// Unlocked villages reachable by exactly one route hop from `from_id`,
    /// in route-declaration order. A village reachable over several routes
    /// appears once per route; the client decides what to do with duplicates.
    pub fn available_destinations(&self, from_id: &str) -> Vec<&Village> {
        self.world
            .routes
            .iter()
            .filter_map(|route| {
                let other = if route.from == from_id {
                    route.to.as_str()
                } else if route.to == from_id {
                    route.from.as_str()
                } else {
                    return None;
                };
                self.world.village(other).filter(|v| v.unlocked)
            })
            .collect()
    }

    /// Wipe persisted progress and rebuild the session from defaults.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.clear_progress() {
            warn!("failed to clear persisted progress: {}", e);
        }
        self.progress = PlayerProgress::new();
        self.apply_unlock_flags();
        self.evaluate_unlocks();
        self.events.push_back(AtlasEvent::Initialized);
    }

    /// Session totals, recomputed from current state.
    pub fn stats(&self) -> AtlasStats {
        AtlasStats {
            villages_visited: self.progress.visited_villages.len(),
            total_villages: self.world.villages.len(),
            quizzes_completed: self.progress.completed_quiz.len(),
            total_quizzes: self.world.villages.len(),
            badges: self.progress.badges.len(),
            total_badges: self.world.badges.len(),
            score: self.progress.score,
        }
    }

    /// Current progress record.
    pub fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    /// World map with live unlock flags.
    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    /// Pop the oldest pending event, if any.
    pub fn poll_event(&mut self) -> Option<AtlasEvent> {
        self.events.pop_front()
    }

    /// Drain every pending event in emission order.
    pub fn drain_events(&mut self) -> Vec<AtlasEvent> {
        self.events.drain(..).collect()
    }

    /// Rebuild each village's `unlocked` flag from the progress record.
    fn apply_unlock_flags(&mut self) {
        for village in &mut self.world.villages {
            village.unlocked = self.progress.has_unlocked(&village.id);
        }
    }

    /// Unlock pass: re-evaluate every route's requirement against current
    /// progress and open any satisfied destination that is still locked.
    /// Idempotent per call; runs after every travel and at initialization.
    fn evaluate_unlocks(&mut self) {
        let mut newly: Vec<String> = Vec::new();
        for route in &self.world.routes {
            if !unlock_requirement_met(&self.progress, &route.requirement) {
                continue;
            }
            let still_locked = self
                .world
                .village(&route.to)
                .map(|v| !v.unlocked)
                .unwrap_or(false);
            if still_locked && !newly.contains(&route.to) {
                newly.push(route.to.clone());
            }
        }

        for village_id in newly {
            if let Some(village) = self.world.village_mut(&village_id) {
                village.unlocked = true;
            }
            if !self.progress.has_unlocked(&village_id) {
                self.progress.unlocked_villages.push(village_id.clone());
            }
            self.progress.score += UNLOCK_SCORE;
            debug!("village unlocked: {} (+{})", village_id, UNLOCK_SCORE);
            self.events
                .push_back(AtlasEvent::VillageUnlocked { village: village_id });
        }
    }

    /// Badge pass: award every not-yet-earned badge whose requirement holds.
    /// Runs after every quiz call, including repeats.
    fn evaluate_badges(&mut self) {
        let total_villages = self.world.villages.len();
        let mut earned: Vec<String> = Vec::new();
        for rule in &self.world.badges {
            if self.progress.has_badge(&rule.id) {
                continue;
            }
            if badge_requirement_met(&self.progress, &rule.requirement, total_villages) {
                earned.push(rule.id.clone());
            }
        }

        for badge_id in earned {
            self.progress.badges.push(badge_id.clone());
            self.progress.score += BADGE_SCORE;
            debug!("badge earned: {} (+{})", badge_id, BADGE_SCORE);
            self.events
                .push_back(AtlasEvent::BadgeEarned { badge: badge_id });
        }
    }

    /// Best-effort save. A failing store never interrupts the session.
    fn persist(&mut self) {
        if let Err(e) = self.store.save_progress(&self.progress) {
            warn!("failed to persist progress: {}", e);
        }
    }
}

fn unlock_requirement_met(progress: &PlayerProgress, requirement: &UnlockRequirement) -> bool {
    match requirement {
        UnlockRequirement::Visit { village } => progress.has_visited(village),
        UnlockRequirement::VisitCount { count } => progress.visited_villages.len() >= *count,
        UnlockRequirement::QuizSuccess { count } => progress.completed_quiz.len() >= *count,
    }
}

fn badge_requirement_met(
    progress: &PlayerProgress,
    requirement: &BadgeRequirement,
    total_villages: usize,
) -> bool {
    match requirement {
        BadgeRequirement::VisitCount { count } => progress.visited_villages.len() >= *count,
        BadgeRequirement::QuizSuccess { count } => progress.completed_quiz.len() >= *count,
        BadgeRequirement::VisitAll => progress.visited_villages.len() >= total_villages,
    }
}

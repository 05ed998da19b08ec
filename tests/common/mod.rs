//! Shared helpers for the rewards integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use fitquest::config::Catalog;
use fitquest::domain::Exercise;
use fitquest::rewards::{BadgeDefinition, ProgressionRules, QuestDefinition};
use fitquest::store::ProgressStore;

/// 08:00 UTC on the given day of May 2024
pub fn may(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, 8, 0, 0).unwrap()
}

/// Built-in catalog exercises by name
pub fn exercises(names: &[&str]) -> Vec<Exercise> {
    let catalog = Catalog::builtin();
    names
        .iter()
        .map(|name| {
            catalog
                .exercise_by_name(name)
                .cloned()
                .unwrap_or_else(|| panic!("unknown exercise {name}"))
        })
        .collect()
}

/// Catalog with the built-in exercises and the given quests and badges
pub fn catalog_with(quests: Vec<QuestDefinition>, badges: Vec<BadgeDefinition>) -> Catalog {
    Catalog {
        exercises: Catalog::builtin().exercises,
        quests,
        badges,
    }
}

pub fn store_with(catalog: Catalog) -> ProgressStore {
    ProgressStore::new(Arc::new(catalog), Arc::new(ProgressionRules::default()))
}

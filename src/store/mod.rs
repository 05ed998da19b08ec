//! In-memory user store and the workout-completion boundary
//!
//! The rewards engine is pure; this is where its read-modify-write cycle
//! happens. Each user's profile sits behind its own async mutex, held for the
//! whole cycle, so two completions for the same user can never both start
//! from the same prior state. Different users never wait on each other.
//!
//! ```text
//! complete_workout(user 7) ──► users map (read lock, clone Arc, release)
//!                                   │
//!                                   ▼
//!                         profile 7 mutex (held)
//!                    append entry ─► rewards ─► replace state
//! ```

mod profile;

pub use profile::{ProgressSnapshot, UserProfile, DEFAULT_HISTORY_LIMIT};

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::config::Catalog;
use crate::domain::{CompletionRequest, UserId, WorkoutLogEntry};
use crate::rewards::{ProgressionRules, QuestBoard, RewardsResult};

/// Error type for store operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Username already exists: {0}")]
    UserAlreadyExists(String),

    #[error("Username is required")]
    InvalidUsername,
}

#[derive(Default)]
struct Users {
    by_id: HashMap<UserId, Arc<Mutex<UserProfile>>>,
    /// Lowercased username -> id
    by_name: HashMap<String, UserId>,
}

/// Holds every user's profile and serializes updates per user
pub struct ProgressStore {
    users: RwLock<Users>,
    catalog: Arc<Catalog>,
    rules: Arc<ProgressionRules>,
}

impl ProgressStore {
    pub fn new(catalog: Arc<Catalog>, rules: Arc<ProgressionRules>) -> Self {
        Self {
            users: RwLock::new(Users::default()),
            catalog,
            rules,
        }
    }

    /// Build a store from previously saved profiles
    pub fn with_profiles(
        profiles: Vec<UserProfile>,
        catalog: Arc<Catalog>,
        rules: Arc<ProgressionRules>,
    ) -> Self {
        let mut users = Users::default();
        for profile in profiles {
            let key = profile.username.to_lowercase();
            if users.by_name.contains_key(&key) || users.by_id.contains_key(&profile.id) {
                warn!(user_id = profile.id, "Skipping duplicate profile {}", profile.username);
                continue;
            }
            users.by_name.insert(key, profile.id);
            users
                .by_id
                .insert(profile.id, Arc::new(Mutex::new(profile)));
        }

        Self {
            users: RwLock::new(users),
            catalog,
            rules,
        }
    }

    /// Create a user with the initial progression state and return its id.
    ///
    /// Ids are one past the current maximum. Usernames are unique ignoring case.
    pub async fn register(&self, username: &str) -> Result<UserId, ProgressError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ProgressError::InvalidUsername);
        }

        let mut users = self.users.write().await;
        let key = username.to_lowercase();
        if users.by_name.contains_key(&key) {
            return Err(ProgressError::UserAlreadyExists(username.to_string()));
        }

        let id = users.by_id.keys().max().copied().unwrap_or(0) + 1;
        users.by_name.insert(key, id);
        users
            .by_id
            .insert(id, Arc::new(Mutex::new(UserProfile::new(id, username))));

        info!(user_id = id, "Registered user {}", username);
        Ok(id)
    }

    async fn user(&self, id: UserId) -> Result<Arc<Mutex<UserProfile>>, ProgressError> {
        let users = self.users.read().await;
        match users.by_id.get(&id) {
            Some(profile) => Ok(Arc::clone(profile)),
            None => {
                debug!(user_id = id, "Lookup for unknown user");
                Err(ProgressError::UserNotFound(id))
            }
        }
    }

    /// Apply a finished workout to the requesting user.
    pub async fn complete_workout(
        &self,
        request: CompletionRequest,
        completed_at: DateTime<Utc>,
    ) -> Result<RewardsResult, ProgressError> {
        let user = self.user(request.user_id).await?;
        let mut profile = user.lock().await;
        Ok(profile.complete_workout(request.workout, completed_at, &self.catalog, &self.rules))
    }

    pub async fn profile(&self, id: UserId) -> Result<UserProfile, ProgressError> {
        let user = self.user(id).await?;
        let profile = user.lock().await;
        Ok(profile.clone())
    }

    pub async fn snapshot(&self, id: UserId) -> Result<ProgressSnapshot, ProgressError> {
        let user = self.user(id).await?;
        let profile = user.lock().await;
        Ok(profile.snapshot(&self.catalog, &self.rules))
    }

    pub async fn quest_board(&self, id: UserId) -> Result<QuestBoard, ProgressError> {
        let user = self.user(id).await?;
        let profile = user.lock().await;
        Ok(profile.quest_board(&self.catalog))
    }

    /// Newest first, at most `limit` entries
    pub async fn history(
        &self,
        id: UserId,
        limit: usize,
    ) -> Result<Vec<WorkoutLogEntry>, ProgressError> {
        let user = self.user(id).await?;
        let profile = user.lock().await;
        Ok(profile.recent_history(limit).into_iter().cloned().collect())
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.by_id.len()
    }
}

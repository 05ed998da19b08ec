//! fitquest - workout progression and rewards
//!
//! Every completed workout earns XP, advances levels, keeps a daily streak
//! going, and can complete quests and unlock badges. The rewards engine is a
//! set of pure functions over a user's progression state; storage and
//! presentation sit outside it.
//!
//! ## Layout
//!
//! - [`domain`]: exercises, workout log entries and progression state
//! - [`rewards`]: levels, streaks, quests, badges and the orchestrator that
//!   runs them in order
//! - [`config`]: TOML settings and the exercise/quest/badge catalog
//! - [`store`]: per-user serialized read-modify-write around the engine
//! - [`planner`]: workout suggestions from the catalog

pub mod config;
pub mod domain;
pub mod planner;
pub mod rewards;
pub mod store;

pub use domain::*;

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user data container and mutation API.
//!
//! The store owns the full multi-user snapshot, the session marker and the
//! storage handle. Each mutation applies a pure transform from
//! [`mutations`] to the active user's data, replaces the snapshot in one
//! step, and persists the whole data set before returning; no intermediate
//! state is ever observable.

pub mod mutations;
pub mod session;
pub mod storage;

pub use mutations::GoalScope;
pub use session::Session;
pub use storage::SnapshotStorage;

use crate::error::{AppError, Result};
use crate::models::{CompositionRecord, DailyLog, DailyPlan, UserData, UserProfile};

/// Seeded default account, present whenever the snapshot starts empty.
pub const DEFAULT_USERNAME: &str = "curmove";
const DEFAULT_PASSWORD: &str = "1234";
const DEFAULT_EMAIL: &str = "test@curmove.com";
const DEFAULT_NAME: &str = "Test User";

/// Display name assigned to freshly registered accounts.
const NEW_USER_NAME: &str = "Nuevo Usuario";

/// The authenticated-user data store.
pub struct Store {
    storage: SnapshotStorage,
    users: crate::models::AllUsers,
    session: Session,
}

impl Store {
    /// Open the store, loading the persisted snapshot.
    ///
    /// An empty snapshot (first run, or recovery from a corrupt file) is
    /// seeded with the default account.
    pub fn open(storage: SnapshotStorage) -> Result<Self> {
        let mut users = storage.load();

        if users.is_empty() {
            users.insert(
                DEFAULT_USERNAME.to_string(),
                UserData::new(UserProfile {
                    username: DEFAULT_USERNAME.to_string(),
                    email: DEFAULT_EMAIL.to_string(),
                    name: DEFAULT_NAME.to_string(),
                    password: DEFAULT_PASSWORD.to_string(),
                }),
            );
            storage.save(&users)?;
            tracing::info!(username = DEFAULT_USERNAME, "Seeded default account");
        }

        Ok(Self {
            storage,
            users,
            session: Session::default(),
        })
    }

    // ─── Session Lifecycle ───────────────────────────────────────

    /// Log in. Returns `true` only on an exact username+password match;
    /// on failure the active session is unchanged.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        match self.users.get(username) {
            Some(user) if user.profile.password == password => {
                self.session.set(username);
                tracing::info!(username, "User logged in");
                true
            }
            _ => {
                tracing::debug!(username, "Login rejected");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.session.clear();
    }

    /// The authenticated username, if any.
    pub fn current_user(&self) -> Option<&str> {
        self.session.current()
    }

    /// Register a new account and log it in. Returns `false` without
    /// mutating anything when the username is taken.
    pub fn register(&mut self, username: &str, password: &str, email: &str) -> Result<bool> {
        if self.users.contains_key(username) {
            return Ok(false);
        }

        let data = UserData::new(UserProfile {
            username: username.to_string(),
            email: email.to_string(),
            name: NEW_USER_NAME.to_string(),
            password: password.to_string(),
        });
        self.users.insert(username.to_string(), data);
        self.storage.save(&self.users)?;
        self.session.set(username);

        tracing::info!(username, "Account registered");
        Ok(true)
    }

    // ─── Reads ───────────────────────────────────────────────────

    /// The active user's data snapshot.
    pub fn user_data(&self) -> Result<&UserData> {
        let username = self.session.current().ok_or(AppError::Unauthorized)?;
        self.users.get(username).ok_or(AppError::Unauthorized)
    }

    // ─── Mutations ───────────────────────────────────────────────

    /// Apply a pure transform to the active user's data and persist the
    /// whole snapshot.
    fn apply(&mut self, transform: impl FnOnce(&UserData) -> UserData) -> Result<()> {
        let username = self
            .session
            .current()
            .ok_or(AppError::Unauthorized)?
            .to_string();
        let current = self.users.get(&username).ok_or(AppError::Unauthorized)?;

        let next = transform(current);
        self.users.insert(username, next);
        self.storage.save(&self.users)
    }

    /// Replace the plan for (week, day) entirely.
    pub fn set_daily_plan(&mut self, week: u32, day: u32, daily_plan: DailyPlan) -> Result<()> {
        self.apply(|data| mutations::with_daily_plan(data, week, day, daily_plan))
    }

    /// Replace the log for (week, day) entirely.
    pub fn set_daily_log(&mut self, week: u32, day: u32, daily_log: DailyLog) -> Result<()> {
        self.apply(|data| mutations::with_daily_log(data, week, day, daily_log))
    }

    /// Set a goal; empty text clears it.
    pub fn set_goal(&mut self, scope: GoalScope, key: u32, text: &str) -> Result<()> {
        self.apply(|data| mutations::with_goal(data, scope, key, text))
    }

    pub fn add_custom_warmup(&mut self, joint: &str, name: &str) -> Result<()> {
        self.apply(|data| mutations::with_custom_warmup(data, joint, name))
    }

    pub fn delete_custom_warmup(&mut self, joint: &str, name: &str) -> Result<()> {
        self.apply(|data| mutations::without_custom_warmup(data, joint, name))
    }

    pub fn add_custom_main_exercise(
        &mut self,
        group: &str,
        pattern: &str,
        name: &str,
    ) -> Result<()> {
        self.apply(|data| mutations::with_custom_main_exercise(data, group, pattern, name))
    }

    pub fn delete_custom_main_exercise(
        &mut self,
        group: &str,
        pattern: &str,
        name: &str,
    ) -> Result<()> {
        self.apply(|data| mutations::without_custom_main_exercise(data, group, pattern, name))
    }

    /// Upsert the composition record for its (year, month) slot.
    pub fn set_composition_record(&mut self, record: CompositionRecord) -> Result<()> {
        self.apply(|data| mutations::with_composition_record(data, record))
    }

    /// Remove a planned exercise and its log entry in one mutation.
    pub fn remove_planned_exercise(
        &mut self,
        week: u32,
        day: u32,
        exercise_id: &str,
    ) -> Result<()> {
        self.apply(|data| mutations::without_planned_exercise(data, week, day, exercise_id))
    }

    /// Update display name and email only.
    pub fn update_profile(&mut self, name: &str, email: &str) -> Result<()> {
        self.apply(|data| mutations::with_profile(data, name, email))
    }

    /// Change the password. Returns `false` without mutating anything when
    /// the current password does not match.
    pub fn change_password(&mut self, current_password: &str, new_password: &str) -> Result<bool> {
        if self.user_data()?.profile.password != current_password {
            return Ok(false);
        }
        self.apply(|data| mutations::with_password(data, new_password))?;
        Ok(true)
    }
}

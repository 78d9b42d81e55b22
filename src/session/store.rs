//! Active-session tracking: login, registration, logout, and restore.

use std::thread;
use std::time::Duration;

use crate::error::{CampusfindError, Result};
use crate::storage::Storage;
use crate::SIMULATED_LATENCY;

use super::{User, UserProfile};

/// Storage slot holding the persisted session snapshot.
pub const SESSION_SLOT: &str = "session";

/// Owns the registered-user set and at most one active identity.
///
/// The active session is a credential-stripped [`UserProfile`]; it is the
/// only thing this store persists. The user set itself is fixture-seeded
/// and lives for the process only.
pub struct SessionStore<S: Storage> {
    users: Vec<User>,
    current: Option<UserProfile>,
    storage: S,
    latency: Duration,
    loading: bool,
    error: Option<String>,
}

impl<S: Storage> SessionStore<S> {
    /// Open a session store over `storage`, restoring any persisted
    /// session before anything renders. An absent snapshot means
    /// logged out.
    pub fn open(storage: S, users: Vec<User>) -> Result<Self> {
        let current = match storage.read(SESSION_SLOT)? {
            Some(snapshot) => {
                let profile: UserProfile = serde_json::from_str(&snapshot)?;
                tracing::debug!("restored session for {}", profile.email);
                Some(profile)
            }
            None => None,
        };

        Ok(Self {
            users,
            current,
            storage,
            latency: SIMULATED_LATENCY,
            loading: false,
            error: None,
        })
    }

    /// Override the simulated round-trip delay. Tests pass
    /// `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The currently authenticated user, if any.
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    /// Whether someone is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Whether an operation is in flight. Read by the UI to render
    /// spinners.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the most recent failed operation, if the operation
    /// after it has not yet cleared it.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Authenticate with an email and password.
    ///
    /// The email comparison ignores case; the password must match
    /// exactly. On success the credential-stripped profile becomes the
    /// active session and the persisted snapshot.
    pub fn login(&mut self, email: &str, password: &str) -> Result<UserProfile> {
        self.begin();
        let result = self.try_login(email, password);
        self.finish(&result);
        result
    }

    fn try_login(&mut self, email: &str, password: &str) -> Result<UserProfile> {
        self.simulate_roundtrip();

        let profile = self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.password == password)
            .map(User::profile)
            .ok_or(CampusfindError::InvalidCredentials)?;

        self.persist_session(&profile)?;
        self.current = Some(profile.clone());
        tracing::debug!("logged in {}", profile.email);

        Ok(profile)
    }

    /// Register a new account and log it in.
    ///
    /// Fails with `EmailInUse` if any registered user already has the
    /// email (ignoring case). The new user joins the in-memory set only;
    /// the set is never snapshotted.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<UserProfile> {
        self.begin();
        let result = self.try_register(name, email, password);
        self.finish(&result);
        result
    }

    fn try_register(&mut self, name: &str, email: &str, password: &str) -> Result<UserProfile> {
        self.simulate_roundtrip();

        if self.users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(CampusfindError::EmailInUse {
                email: email.to_string(),
            });
        }

        let user = User::new(name, email, password);
        let profile = user.profile();
        self.users.push(user);

        self.persist_session(&profile)?;
        self.current = Some(profile.clone());
        tracing::debug!("registered {}", profile.email);

        Ok(profile)
    }

    /// Clear the active session and its persisted snapshot. Logging out
    /// while logged out is fine.
    pub fn logout(&mut self) -> Result<()> {
        self.current = None;
        self.storage.remove(SESSION_SLOT)
    }

    /// Credential-stripped profiles of every registered user.
    pub fn list_users(&self) -> Vec<UserProfile> {
        self.users.iter().map(User::profile).collect()
    }

    /// Flip a user's administrative role.
    ///
    /// An active session for that user keeps its existing projection;
    /// like an item's poster snapshot, it does not track the change.
    pub fn toggle_admin(&mut self, id: &str) -> Result<UserProfile> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| CampusfindError::UserNotFound { id: id.to_string() })?;

        user.is_admin = !user.is_admin;
        tracing::debug!("toggled admin for user {}", user.id);

        Ok(user.profile())
    }

    /// Delete a user record from the set.
    pub fn remove_user(&mut self, id: &str) -> Result<()> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| CampusfindError::UserNotFound { id: id.to_string() })?;

        self.users.remove(index);
        Ok(())
    }

    fn persist_session(&mut self, profile: &UserProfile) -> Result<()> {
        let snapshot = serde_json::to_string(profile)?;
        self.storage.write(SESSION_SLOT, &snapshot)
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish<T>(&mut self, result: &Result<T>) {
        self.loading = false;
        if let Err(err) = result {
            self.error = Some(err.to_string());
        }
    }

    fn simulate_roundtrip(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}

//! Waitlist submission flow.
//!
//! One submit is one insert against the store, classified into a
//! [`SubmitOutcome`]. Settling an outcome raises exactly one toast and, on
//! success only, flips the session to `submitted`. Nothing is retried.

use std::rc::Rc;

use api::{StoreConfig, StoreError, SupabaseStore, UnconfiguredStore, WaitlistEntry, WaitlistStore};
use tracing::{info, warn};

use crate::core::toast::{Notify, Toast};
use crate::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Joined,
    /// The store already holds this email.
    AlreadyRegistered,
    /// Any other failure reported by the store, with its message.
    Rejected(String),
    /// Failed before the store answered. `None` when there is no message.
    Failed(Option<String>),
}

impl SubmitOutcome {
    pub fn from_error(err: &StoreError) -> Self {
        if err.is_unique_violation() {
            Self::AlreadyRegistered
        } else if let StoreError::Rejected { message, .. } = err {
            Self::Rejected(message.clone())
        } else {
            let message = err.to_string();
            Self::Failed((!message.trim().is_empty()).then_some(message))
        }
    }

    pub fn is_joined(&self) -> bool {
        matches!(self, Self::Joined)
    }

    /// The single toast announcing this outcome.
    pub fn toast(&self) -> Toast {
        match self {
            Self::Joined => Toast::new(t!("toast-joined-title"), t!("toast-joined-body")),
            Self::AlreadyRegistered => {
                Toast::new(t!("toast-duplicate-title"), t!("toast-duplicate-body"))
            }
            Self::Rejected(details) => Toast::destructive(
                t!("toast-rejected-title"),
                t!("toast-rejected-body", details = details.as_str()),
            ),
            Self::Failed(message) => Toast::destructive(
                t!("toast-failed-title"),
                message.clone().unwrap_or_else(|| t!("toast-failed-fallback")),
            ),
        }
    }
}

/// Send one signup to the store.
///
/// Returns `None` without touching the store when the email is blank.
pub async fn submit(store: &dyn WaitlistStore, email: &str, name: &str) -> Option<SubmitOutcome> {
    let entry = WaitlistEntry::from_form(email, name)?;

    let outcome = match store.insert(&entry).await {
        Ok(rows) => {
            info!(rows = rows.len(), "joined waitlist");
            SubmitOutcome::Joined
        }
        Err(err) => {
            warn!(error = %err, reported = err.is_reported(), "waitlist signup failed");
            SubmitOutcome::from_error(&err)
        }
    };
    Some(outcome)
}

/// Shared handle to the store, provided to components through context.
#[derive(Clone)]
pub struct WaitlistClient(Rc<dyn WaitlistStore>);

impl WaitlistClient {
    pub fn new(store: impl WaitlistStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    /// Supabase store from the environment, or a store that fails every
    /// insert with the setup error when that is not possible.
    pub fn from_env() -> Self {
        match StoreConfig::from_env().and_then(|config| SupabaseStore::new(&config)) {
            Ok(store) => {
                info!(endpoint = %store.endpoint(), "waitlist store ready");
                Self::new(store)
            }
            Err(err) => {
                warn!(error = %err, "waitlist store unavailable; signups will fail");
                Self::new(UnconfiguredStore::new(&err))
            }
        }
    }

    pub fn store(&self) -> &dyn WaitlistStore {
        &*self.0
    }
}

/// Per-page-view signup state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaitlistSession {
    pub submitted: bool,
}

impl WaitlistSession {
    /// Apply an outcome: one toast, and `submitted` latches on success.
    pub fn settle(&mut self, outcome: &SubmitOutcome, notifier: &mut impl Notify) {
        if outcome.is_joined() {
            self.submitted = true;
        }
        notifier.notify(outcome.toast());
    }
}

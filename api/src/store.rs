use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{WaitlistEntry, WaitlistRow};

/// Anything that can record a waitlist signup.
///
/// Futures are not required to be `Send`: in the browser the HTTP client is
/// backed by `fetch` and everything runs on one thread.
#[async_trait(?Send)]
pub trait WaitlistStore {
    async fn insert(&self, entry: &WaitlistEntry) -> Result<Vec<WaitlistRow>, StoreError>;
}

/// Stand-in used when the real store could not be built.
///
/// The site still renders; every signup fails with the setup error's text.
#[derive(Debug, Clone)]
pub struct UnconfiguredStore {
    reason: String,
}

impl UnconfiguredStore {
    pub fn new(cause: &StoreError) -> Self {
        Self {
            reason: cause.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl WaitlistStore for UnconfiguredStore {
    async fn insert(&self, _entry: &WaitlistEntry) -> Result<Vec<WaitlistRow>, StoreError> {
        Err(StoreError::Unexpected(self.reason.clone()))
    }
}

//! Waitlist data access for Bloomlog.
//!
//! The UI never talks to the hosted table directly. It goes through the
//! [`WaitlistStore`] trait, which the Supabase REST client implements and
//! tests replace with stubs.

pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod supabase;

pub use async_trait::async_trait;
pub use config::StoreConfig;
pub use error::{StoreError, UNIQUE_VIOLATION};
pub use model::{WaitlistEntry, WaitlistRow};
pub use store::{UnconfiguredStore, WaitlistStore};
pub use supabase::SupabaseStore;

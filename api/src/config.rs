//! Store configuration.
//!
//! Browser builds have no process environment, so values are baked in at
//! compile time with `option_env!`. Native builds may override them at
//! runtime with the same variable names.

use crate::error::StoreError;

pub const URL_VAR: &str = "BLOOMLOG_SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "BLOOMLOG_SUPABASE_ANON_KEY";
pub const TABLE_VAR: &str = "BLOOMLOG_WAITLIST_TABLE";

pub const DEFAULT_TABLE: &str = "wishlist";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    /// Public anon key; sent as both `apikey` and bearer token.
    pub anon_key: String,
    pub table: String,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Resolve from the runtime environment, falling back to build-time values.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|var| {
            std::env::var(var)
                .ok()
                .or_else(|| build_time(var).map(str::to_string))
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StoreError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let url = get(URL_VAR).ok_or(StoreError::NotConfigured(URL_VAR))?;
        let anon_key = get(ANON_KEY_VAR).ok_or(StoreError::NotConfigured(ANON_KEY_VAR))?;
        let table = get(TABLE_VAR).unwrap_or_else(|| DEFAULT_TABLE.to_string());

        Ok(Self {
            url: url.trim().to_string(),
            anon_key: anon_key.trim().to_string(),
            table,
        })
    }
}

fn build_time(var: &str) -> Option<&'static str> {
    match var {
        URL_VAR => option_env!("BLOOMLOG_SUPABASE_URL"),
        ANON_KEY_VAR => option_env!("BLOOMLOG_SUPABASE_ANON_KEY"),
        TABLE_VAR => option_env!("BLOOMLOG_WAITLIST_TABLE"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn table_defaults_to_wishlist() {
        let cfg = StoreConfig::from_lookup(lookup(&[
            (URL_VAR, "https://demo.supabase.co"),
            (ANON_KEY_VAR, "anon"),
        ]))
        .unwrap();
        assert_eq!(cfg.table, "wishlist");
        assert_eq!(cfg, StoreConfig::new("https://demo.supabase.co", "anon"));
    }

    #[test]
    fn missing_key_is_reported() {
        let err = StoreConfig::from_lookup(lookup(&[(URL_VAR, "https://demo.supabase.co")]))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotConfigured(ANON_KEY_VAR)));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let err = StoreConfig::from_lookup(lookup(&[(URL_VAR, " "), (ANON_KEY_VAR, "anon")]))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotConfigured(URL_VAR)));
    }

    #[test]
    fn table_override() {
        let cfg = StoreConfig::from_lookup(lookup(&[
            (URL_VAR, "https://demo.supabase.co"),
            (ANON_KEY_VAR, "anon"),
            (TABLE_VAR, "waitlist_staging"),
        ]))
        .unwrap();
        assert_eq!(cfg.table, "waitlist_staging");
    }
}

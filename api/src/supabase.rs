//! Supabase (PostgREST) implementation of [`WaitlistStore`].

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::model::{WaitlistEntry, WaitlistRow};
use crate::store::WaitlistStore;

pub struct SupabaseStore {
    client: Client,
    endpoint: Url,
    anon_key: String,
}

impl SupabaseStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        Ok(Self {
            client: Client::new(),
            endpoint: table_endpoint(&config.url, &config.table)?,
            anon_key: config.anon_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// `{project}/rest/v1/{table}`, keeping any path prefix on the project URL.
fn table_endpoint(project_url: &str, table: &str) -> Result<Url, StoreError> {
    let mut base = Url::parse(project_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(&format!("rest/v1/{table}"))?)
}

#[async_trait(?Send)]
impl WaitlistStore for SupabaseStore {
    async fn insert(&self, entry: &WaitlistEntry) -> Result<Vec<WaitlistRow>, StoreError> {
        debug!(endpoint = %self.endpoint, "inserting waitlist entry");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=representation")
            .json(&[entry])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = StoreError::from_response(status.as_u16(), &body);
            warn!(status = status.as_u16(), error = %err, "waitlist insert rejected");
            return Err(err);
        }

        let rows: Vec<WaitlistRow> = match serde_json::from_str(&body) {
            Ok(rows) => rows,
            Err(err) => {
                warn!(%err, "unreadable insert response; treating as empty");
                Vec::new()
            }
        };
        info!(rows = rows.len(), "waitlist entry inserted");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_rest_path() {
        let url = table_endpoint("https://demo.supabase.co", "wishlist").unwrap();
        assert_eq!(url.as_str(), "https://demo.supabase.co/rest/v1/wishlist");
    }

    #[test]
    fn endpoint_keeps_path_prefix() {
        let url = table_endpoint("http://localhost:8000/supabase", "wishlist").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/supabase/rest/v1/wishlist");
    }

    #[test]
    fn bad_url_is_an_error() {
        let err = table_endpoint("not a url", "wishlist").unwrap_err();
        assert!(matches!(err, StoreError::InvalidUrl(_)));
    }
}

use anyhow::Result;
use async_trait::async_trait;

use super::{CastSource, CastsResponse, Message};
use crate::config::HubConfig;

/// Client for the Neynar hub REST API. One authenticated GET per session,
/// no pagination past the configured page size, no retries.
pub struct HubClient {
    config: HubConfig,
    client: reqwest::Client,
}

impl HubClient {
    pub fn new(config: HubConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn casts_url(&self, fid: u64) -> String {
        format!(
            "{}/v1/castsByFid?fid={}&pageSize={}",
            self.config.base_url.trim_end_matches('/'),
            fid,
            self.config.page_size
        )
    }
}

#[async_trait]
impl CastSource for HubClient {
    async fn casts_by_fid(&self, fid: u64) -> Result<Vec<Message>> {
        let response = self
            .client
            .get(self.casts_url(fid))
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            // Neynar accepts either `api_key` or `x-api-key`, send both
            .header("api_key", &self.config.api_key)
            .header("x-api-key", &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "failed to fetch casts: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown")
            ));
        }

        let body: CastsResponse = response.json().await?;
        Ok(body.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_casts_url() {
        let client = HubClient::new(HubConfig {
            api_key: "k".to_string(),
            base_url: "https://hub-api.neynar.com".to_string(),
            page_size: 1000,
        });
        assert_eq!(
            client.casts_url(3621),
            "https://hub-api.neynar.com/v1/castsByFid?fid=3621&pageSize=1000"
        );
    }

    #[test]
    fn test_casts_url_trims_trailing_slash() {
        let client = HubClient::new(HubConfig {
            api_key: "k".to_string(),
            base_url: "https://hub-api.neynar.com/".to_string(),
            page_size: 50,
        });
        assert_eq!(
            client.casts_url(1),
            "https://hub-api.neynar.com/v1/castsByFid?fid=1&pageSize=50"
        );
    }
}

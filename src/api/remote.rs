use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;

use super::{parse_region, parse_regions, parse_restaurants};
use crate::config::ApiConfig;
use crate::domain::{Catalog, NamedRegion, Restaurant};
use crate::error::CatalogError;

const USER_AGENT: &str = concat!("dronepath/", env!("CARGO_PKG_VERSION"));

/// Seconds added to the wait before each successive retry
const RETRY_BACKOFF_SECS: u64 = 2;

fn is_retriable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Blocking client for the restaurant and region service
pub struct RestClient {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl RestClient {
    pub fn new(config: &ApiConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, CatalogError> {
        let (url, body) = self.get("restaurants")?;
        parse_restaurants(&url, &body)
    }

    pub fn fetch_no_fly_zones(&self) -> Result<Vec<NamedRegion>, CatalogError> {
        let (url, body) = self.get("noFlyZones")?;
        parse_regions(&url, &body)
    }

    pub fn fetch_central_area(&self) -> Result<NamedRegion, CatalogError> {
        let (url, body) = self.get("centralArea")?;
        parse_region(&url, &body)
    }

    /// Fetch a complete snapshot
    pub fn fetch_catalog(&self) -> Result<Catalog, CatalogError> {
        Ok(Catalog::new(
            self.fetch_restaurants()?,
            self.fetch_no_fly_zones()?,
            Some(self.fetch_central_area()?),
        ))
    }

    /// GET `{base_url}/{endpoint}`, retrying 429 and 5xx responses with a
    /// linearly growing wait.
    fn get(&self, endpoint: &str) -> Result<(String, String), CatalogError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let attempts = self.max_retries + 1;

        for attempt in 0..attempts {
            if attempt > 0 {
                let wait_secs = RETRY_BACKOFF_SECS * attempt as u64;
                std::thread::sleep(Duration::from_secs(wait_secs));
            }

            debug!("GET {} (attempt {}/{})", url, attempt + 1, attempts);
            let response = self.client.get(&url).send()?;
            let status = response.status();

            if status.is_success() {
                let body = response.text()?;
                return Ok((url, body));
            }
            if !is_retriable(status) || attempt + 1 == attempts {
                return Err(CatalogError::Status {
                    url,
                    status: status.as_u16(),
                });
            }

            warn!(
                "{} returned status {}, retrying in {} seconds (attempt {}/{})",
                url,
                status,
                RETRY_BACKOFF_SECS * (attempt as u64 + 1),
                attempt + 2,
                attempts
            );
        }

        Err(CatalogError::Status { url, status: 0 })
    }
}

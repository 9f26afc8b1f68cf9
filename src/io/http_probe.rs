//! Identity probe backed by an external detector service
//!
//! The detector owns the camera and the face-region extraction; this client
//! only asks it for one snapshot. Expected response: `200` with a JSON body
//! `{"x": .., "y": .., "width": .., "height": ..}` for a detection, any
//! non-success status for "no subject found."

use crate::domain::types::IdentitySignature;
use crate::services::probe::IdentityProbe;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct DetectorRegion {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

pub struct HttpProbe {
    url: String,
    client: Option<reqwest::Client>,
}

impl HttpProbe {
    pub fn new(url: &str, timeout: Duration) -> Self {
        // Client created once for reuse (connection pooling)
        let client = reqwest::Client::builder().timeout(timeout).http1_only().build().ok();

        Self { url: url.to_string(), client }
    }
}

#[async_trait]
impl IdentityProbe for HttpProbe {
    async fn sample(&self) -> Option<IdentitySignature> {
        let Some(ref client) = self.client else {
            warn!(url = %self.url, "probe_http_client_not_initialized");
            return None;
        };

        let response = match client.get(&self.url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %self.url, error = %e, "probe_request_failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!(url = %self.url, status = %status.as_u16(), "probe_no_detection");
            return None;
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %self.url, error = %e, "probe_body_read_failed");
                return None;
            }
        };

        match serde_json::from_slice::<DetectorRegion>(&body) {
            Ok(region) => {
                debug!(
                    x = %region.x,
                    y = %region.y,
                    width = %region.width,
                    height = %region.height,
                    "probe_detection"
                );
                Some(IdentitySignature::new(region.x, region.y, region.width, region.height))
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "probe_response_parse_failed");
                None
            }
        }
    }
}

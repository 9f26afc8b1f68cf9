//! Identity probe interface
//!
//! The probe is the sensor+detector collaborator: "acquire one subject
//! snapshot and extract one identity region." Detection quality is out of
//! scope here; the core only depends on this seam.

use crate::domain::types::IdentitySignature;
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

/// Samples the current subject, yielding at most one signature.
///
/// When the underlying detector finds several candidates it must pick one
/// (first in detector output order); callers must not assume that choice is
/// stable across invocations of the same physical scene.
#[async_trait]
pub trait IdentityProbe: Send + Sync {
    /// One blocking acquisition. `None` means no subject was detected.
    async fn sample(&self) -> Option<IdentitySignature>;
}

/// Sample with a bounded timeout; expiry is treated as not-detected.
///
/// The probe talks to hardware and is the only slow call in an entry/exit
/// operation, so it must never be awaited while the session store is locked.
pub async fn sample_with_timeout(
    probe: &dyn IdentityProbe,
    timeout: Duration,
) -> Option<IdentitySignature> {
    match tokio::time::timeout(timeout, probe.sample()).await {
        Ok(signature) => signature,
        Err(_) => {
            warn!(timeout_ms = %timeout.as_millis(), "probe_sample_timeout");
            None
        }
    }
}

/// Probe for hardware-free runs: reports a configured base region with a
/// small time-derived jitter, so consecutive samples still match within the
/// threshold the way a stationary subject would.
pub struct SimulatedProbe {
    base: IdentitySignature,
}

impl SimulatedProbe {
    pub fn new(base: IdentitySignature) -> Self {
        Self { base }
    }
}

#[async_trait]
impl IdentityProbe for SimulatedProbe {
    async fn sample(&self) -> Option<IdentitySignature> {
        let jitter = (chrono::Local::now().timestamp_millis() % 4) as u32;
        Some(IdentitySignature::new(
            self.base.x + jitter,
            self.base.y + (jitter / 2),
            self.base.width,
            self.base.height,
        ))
    }
}

//! Entry/exit orchestration for the parking facility
//!
//! The controller runs the per-vehicle state machine: NONE -> OPEN on
//! check-in, OPEN -> NONE on a verified check-out. Probe sampling happens
//! outside the store lock (it is the only slow call); everything that reads
//! or mutates the store runs in a single critical section so two exits can
//! never consume the same session and two entries can never race an ID.

use crate::domain::error::{ParkingError, Result};
use crate::domain::session::Bill;
use crate::domain::types::{SessionId, VehicleNumber};
use crate::services::probe::{sample_with_timeout, IdentityProbe};
use crate::services::rates::RateSchedule;
use crate::services::store::SessionStore;
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Result of a successful check-in
#[derive(Debug, Clone)]
pub struct CheckInReceipt {
    pub session_id: SessionId,
    pub entry_time: DateTime<Local>,
}

pub struct ParkingController {
    rates: RateSchedule,
    probe: Arc<dyn IdentityProbe>,
    store: Mutex<SessionStore>,
    sample_timeout: Duration,
}

impl ParkingController {
    pub fn new(
        rates: RateSchedule,
        probe: Arc<dyn IdentityProbe>,
        sample_timeout: Duration,
    ) -> Self {
        Self { rates, probe, store: Mutex::new(SessionStore::new()), sample_timeout }
    }

    /// Open a session for a vehicle.
    ///
    /// Fails without creating any record if no identity can be captured or
    /// the generated session ID collides (same vehicle within one second).
    pub async fn check_in(&self, owner_name: &str, vehicle_number: &str) -> Result<CheckInReceipt> {
        let Some(signature) = sample_with_timeout(self.probe.as_ref(), self.sample_timeout).await
        else {
            warn!(vehicle = %vehicle_number, "check_in_capture_failed");
            return Err(ParkingError::IdentityCaptureFailed);
        };

        let vehicle = VehicleNumber::new(vehicle_number);
        let entry_time = Local::now();

        let (session_id, open_sessions) = {
            let mut store = self.store.lock();
            let session_id =
                store.create(vehicle.clone(), owner_name.to_string(), entry_time, signature)?;
            (session_id, store.open_count())
        };

        info!(
            session_id = %session_id,
            vehicle = %vehicle,
            open_sessions = %open_sessions,
            "session_created"
        );

        Ok(CheckInReceipt { session_id, entry_time })
    }

    /// Close the first open session for a vehicle and produce its bill.
    ///
    /// The stored signature must match the freshly sampled one; on mismatch
    /// the session stays open and untouched, so the owner can retry or
    /// escalate to an attendant. The signature is only corroboration - the
    /// vehicle-number lookup is the primary discriminator.
    pub async fn check_out(&self, vehicle_number: &str) -> Result<Bill> {
        let Some(sampled) = sample_with_timeout(self.probe.as_ref(), self.sample_timeout).await
        else {
            warn!(vehicle = %vehicle_number, "check_out_capture_failed");
            return Err(ParkingError::IdentityCaptureFailed);
        };

        let vehicle = VehicleNumber::new(vehicle_number);

        let (bill, open_sessions) = {
            let mut store = self.store.lock();

            let session = store
                .find_open_by_vehicle(&vehicle)
                .ok_or_else(|| ParkingError::NoMatchingSession(vehicle.clone()))?;

            let distance = session.signature.distance(&sampled);
            if !session.signature.matches(&sampled) {
                warn!(
                    session_id = %session.session_id,
                    vehicle = %vehicle,
                    distance = %distance,
                    "identity_mismatch"
                );
                return Err(ParkingError::IdentityMismatch { vehicle, distance });
            }

            let exit_time = Local::now();
            let duration_hours = (exit_time - session.entry_time).num_seconds() as f64 / 3600.0;
            // Prices before removing, so clock skew leaves the session open
            let fee = self.rates.price(duration_hours)?;

            let bill = Bill::new(session, exit_time, duration_hours, fee);
            let session_id = session.session_id.clone();
            store.remove(&session_id)?;
            (bill, store.open_count())
        };

        info!(
            vehicle = %vehicle,
            duration_hours = %format!("{:.3}", bill.duration_hours),
            fee = %bill.fee,
            open_sessions = %open_sessions,
            "session_closed"
        );

        Ok(bill)
    }

    /// Number of currently open sessions
    pub fn open_sessions(&self) -> usize {
        self.store.lock().open_count()
    }
}

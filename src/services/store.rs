//! In-memory registry of open parking sessions
//!
//! The store exclusively owns all session records. State is process-lifetime
//! only; losing open sessions on restart is a defined product limitation.

use crate::domain::error::{ParkingError, Result};
use crate::domain::session::{session_id_for, ParkingSession};
use crate::domain::types::{IdentitySignature, SessionId, VehicleNumber};
use chrono::{DateTime, Local};
use tracing::debug;

/// Open sessions in insertion order.
///
/// A `Vec` rather than a map: the exit lookup is defined as first-match in
/// insertion order when duplicate vehicle numbers are concurrently parked,
/// and the facility is small enough that a linear scan is the whole story.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Vec<ParkingSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { sessions: Vec::new() }
    }

    /// Create and insert a session, returning its generated ID.
    ///
    /// The ID is derived from vehicle number + entry timestamp at second
    /// resolution; a collision (same vehicle, same second) is rejected
    /// explicitly rather than overwriting the open session.
    pub fn create(
        &mut self,
        vehicle_number: VehicleNumber,
        owner_name: String,
        entry_time: DateTime<Local>,
        signature: IdentitySignature,
    ) -> Result<SessionId> {
        let session_id = session_id_for(&vehicle_number, entry_time);

        if self.sessions.iter().any(|s| s.session_id == session_id) {
            return Err(ParkingError::DuplicateSession(session_id));
        }

        debug!(
            session_id = %session_id,
            vehicle = %vehicle_number,
            "session_inserted"
        );

        self.sessions.push(ParkingSession {
            session_id: session_id.clone(),
            owner_name,
            vehicle_number,
            entry_time,
            signature,
        });

        Ok(session_id)
    }

    /// Find the first open session for a vehicle, in insertion order
    pub fn find_open_by_vehicle(&self, vehicle_number: &VehicleNumber) -> Option<&ParkingSession> {
        self.sessions.iter().find(|s| &s.vehicle_number == vehicle_number)
    }

    /// Remove a session by ID, returning the record
    pub fn remove(&mut self, session_id: &SessionId) -> Result<ParkingSession> {
        let idx = self
            .sessions
            .iter()
            .position(|s| &s.session_id == session_id)
            .ok_or_else(|| ParkingError::SessionNotFound(session_id.clone()))?;

        debug!(session_id = %session_id, "session_removed");
        Ok(self.sessions.remove(idx))
    }

    /// Number of currently open sessions
    pub fn open_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry_at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, h, m, s).unwrap()
    }

    fn sig() -> IdentitySignature {
        IdentitySignature::new(10, 10, 50, 50)
    }

    #[test]
    fn test_create_returns_derived_id() {
        let mut store = SessionStore::new();

        let id = store
            .create(VehicleNumber::new("ka01ab1234"), "Asha".to_string(), entry_at(9, 5, 7), sig())
            .unwrap();

        assert_eq!(id.as_str(), "KA01AB1234_20250314090507");
        assert_eq!(store.open_count(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = SessionStore::new();
        let vehicle = VehicleNumber::new("KA01AB1234");

        store.create(vehicle.clone(), "Asha".to_string(), entry_at(9, 0, 0), sig()).unwrap();
        let err = store
            .create(vehicle, "Asha".to_string(), entry_at(9, 0, 0), sig())
            .unwrap_err();

        assert!(matches!(err, ParkingError::DuplicateSession(_)));
        assert_eq!(store.open_count(), 1);
    }

    #[test]
    fn test_same_vehicle_different_second_allowed() {
        let mut store = SessionStore::new();
        let vehicle = VehicleNumber::new("KA01AB1234");

        store.create(vehicle.clone(), "Asha".to_string(), entry_at(9, 0, 0), sig()).unwrap();
        store.create(vehicle, "Asha".to_string(), entry_at(9, 0, 1), sig()).unwrap();

        assert_eq!(store.open_count(), 2);
    }

    #[test]
    fn test_find_returns_first_in_insertion_order() {
        let mut store = SessionStore::new();
        let vehicle = VehicleNumber::new("KA01AB1234");

        let first = store
            .create(vehicle.clone(), "Asha".to_string(), entry_at(9, 0, 0), sig())
            .unwrap();
        store.create(vehicle.clone(), "Asha".to_string(), entry_at(9, 0, 1), sig()).unwrap();

        let found = store.find_open_by_vehicle(&vehicle).unwrap();
        assert_eq!(found.session_id, first);
    }

    #[test]
    fn test_find_missing_vehicle() {
        let store = SessionStore::new();
        assert!(store.find_open_by_vehicle(&VehicleNumber::new("ZZ99ZZ9999")).is_none());
    }

    #[test]
    fn test_remove() {
        let mut store = SessionStore::new();
        let vehicle = VehicleNumber::new("KA01AB1234");
        let id = store
            .create(vehicle.clone(), "Asha".to_string(), entry_at(9, 0, 0), sig())
            .unwrap();

        let removed = store.remove(&id).unwrap();

        assert_eq!(removed.vehicle_number, vehicle);
        assert_eq!(store.open_count(), 0);
        assert!(store.find_open_by_vehicle(&vehicle).is_none());
    }

    #[test]
    fn test_remove_missing_session() {
        let mut store = SessionStore::new();
        let err = store.remove(&SessionId("KA01AB1234_20250314090000".to_string())).unwrap_err();

        assert!(matches!(err, ParkingError::SessionNotFound(_)));
    }
}

//! Parking session and bill data model

use crate::domain::types::{IdentitySignature, SessionId, VehicleNumber};
use chrono::{DateTime, Local};

/// Timestamp format used in session IDs (second resolution)
const SESSION_ID_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Timestamp format used on receipts and bills
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Derive a session ID from the vehicle number and entry timestamp.
///
/// Format: `{VEHICLE}_{YYYYmmddHHMMSS}`. Second resolution means the same
/// vehicle re-entering within one second produces a colliding ID; the store
/// rejects that case explicitly instead of overwriting.
pub fn session_id_for(vehicle: &VehicleNumber, entry_time: DateTime<Local>) -> SessionId {
    SessionId(format!("{}_{}", vehicle, entry_time.format(SESSION_ID_TIME_FORMAT)))
}

/// One vehicle's parked interval, from entry until a verified exit.
///
/// Records are created by check-in and owned exclusively by the session
/// store; all fields are immutable after creation.
#[derive(Debug, Clone)]
pub struct ParkingSession {
    pub session_id: SessionId,
    pub owner_name: String,
    pub vehicle_number: VehicleNumber,
    pub entry_time: DateTime<Local>,
    pub signature: IdentitySignature,
}

/// Priced result of a completed session, handed to the operator at exit
#[derive(Debug, Clone)]
pub struct Bill {
    pub owner_name: String,
    pub vehicle_number: VehicleNumber,
    pub entry_time: DateTime<Local>,
    pub exit_time: DateTime<Local>,
    pub duration_hours: f64,
    pub whole_hours: u64,
    pub whole_minutes: u64,
    pub fee: u64,
}

impl Bill {
    pub fn new(
        session: &ParkingSession,
        exit_time: DateTime<Local>,
        duration_hours: f64,
        fee: u64,
    ) -> Self {
        let (whole_hours, whole_minutes) = split_duration(duration_hours);
        Self {
            owner_name: session.owner_name.clone(),
            vehicle_number: session.vehicle_number.clone(),
            entry_time: session.entry_time,
            exit_time,
            duration_hours,
            whole_hours,
            whole_minutes,
            fee,
        }
    }
}

/// Split a non-negative duration into whole hours and floored whole minutes
fn split_duration(duration_hours: f64) -> (u64, u64) {
    let whole_hours = duration_hours.trunc() as u64;
    let whole_minutes = (duration_hours.fract() * 60.0).floor() as u64;
    (whole_hours, whole_minutes)
}

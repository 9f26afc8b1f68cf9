//! Error taxonomy for parking entry/exit operations
//!
//! All variants are recoverable at the controller boundary: a failed entry
//! leaves no session record, and a failed exit leaves the session open.

use crate::domain::types::{SessionId, VehicleNumber};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParkingError {
    /// No identity signature could be obtained from the probe (including timeout)
    #[error("identity capture failed, no subject detected")]
    IdentityCaptureFailed,

    /// No open session exists for the given vehicle number
    #[error("no open session for vehicle {0}")]
    NoMatchingSession(VehicleNumber),

    /// Sampled signature is farther than the match threshold from the stored one
    #[error("identity mismatch for vehicle {vehicle} (distance {distance:.1})")]
    IdentityMismatch { vehicle: VehicleNumber, distance: f64 },

    /// Generated session ID already exists (same vehicle re-entered within one second)
    #[error("session {0} already exists")]
    DuplicateSession(SessionId),

    /// Removal was requested for a session ID that is not open
    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    /// Elapsed time between entry and exit was negative (clock skew)
    #[error("invalid parking duration: {0} hours")]
    InvalidDuration(f64),
}

pub type Result<T> = std::result::Result<T, ParkingError>;

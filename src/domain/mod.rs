//! Domain models - core business types for the parking facility
//!
//! This module contains the canonical data types used throughout the system:
//! - `ParkingSession` - the primary business entity, one vehicle's parked interval
//! - `Bill` - the priced result of a completed session
//! - `IdentitySignature` - low-assurance positional descriptor of a detected subject
//! - `ParkingError` - the error taxonomy for entry/exit operations

pub mod error;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{ParkingError, Result};
pub use session::{Bill, ParkingSession};
pub use types::{IdentitySignature, SessionId, VehicleNumber};

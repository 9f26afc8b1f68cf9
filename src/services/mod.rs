//! Services - business logic and state management
//!
//! This module contains the core business logic services:
//! - `controller` - Entry/exit orchestration (check-in, check-out)
//! - `store` - In-memory registry of open sessions
//! - `rates` - Duration-to-fee pricing policy
//! - `probe` - Identity probe interface and simulated implementation

pub mod controller;
pub mod probe;
pub mod rates;
pub mod store;

// Re-export commonly used types
pub use controller::{CheckInReceipt, ParkingController};
pub use probe::{IdentityProbe, SimulatedProbe};
pub use rates::RateSchedule;
pub use store::SessionStore;

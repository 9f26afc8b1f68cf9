//! Tiered duration-to-fee pricing
//!
//! Policy: the first hour is charged in full on entry; beyond that, each
//! additional hour is charged only once it has fully elapsed (floor, not
//! ceiling), so the fee is stable within every completed additional hour.

use crate::domain::error::{ParkingError, Result};

/// Fee-per-duration policy applied at checkout. Immutable after construction.
#[derive(Debug, Clone, Copy)]
pub struct RateSchedule {
    first_hour_fee: u64,
    additional_hour_fee: u64,
}

impl RateSchedule {
    pub fn new(first_hour_fee: u64, additional_hour_fee: u64) -> Self {
        Self { first_hour_fee, additional_hour_fee }
    }

    pub fn first_hour_fee(&self) -> u64 {
        self.first_hour_fee
    }

    /// Price a parked duration in hours.
    ///
    /// Negative durations (clock skew) are rejected rather than silently
    /// miscalculated.
    pub fn price(&self, duration_hours: f64) -> Result<u64> {
        if duration_hours < 0.0 || duration_hours.is_nan() {
            return Err(ParkingError::InvalidDuration(duration_hours));
        }

        if duration_hours <= 1.0 {
            return Ok(self.first_hour_fee);
        }

        let completed_additional = (duration_hours - 1.0).floor() as u64;
        Ok(self.first_hour_fee + self.additional_hour_fee * completed_additional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> RateSchedule {
        RateSchedule::new(50, 30)
    }

    #[test]
    fn test_first_hour_flat_fee() {
        assert_eq!(rates().price(0.0).unwrap(), 50);
        assert_eq!(rates().price(0.01).unwrap(), 50);
        assert_eq!(rates().price(0.5).unwrap(), 50);
        assert_eq!(rates().price(1.0).unwrap(), 50);
    }

    #[test]
    fn test_partial_additional_hour_not_charged() {
        // Same floor until the second full hour completes
        assert_eq!(rates().price(1.5).unwrap(), rates().price(1.99).unwrap());
        assert_eq!(rates().price(1.99).unwrap(), 50);
    }

    #[test]
    fn test_fee_steps_at_completed_hours() {
        assert_eq!(rates().price(2.0).unwrap(), 80);
        assert!(rates().price(2.0).unwrap() > rates().price(1.99).unwrap());
        assert_eq!(rates().price(2.5).unwrap(), 80);
        assert_eq!(rates().price(3.0).unwrap(), 110);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = rates().price(-0.5).unwrap_err();
        assert!(matches!(err, ParkingError::InvalidDuration(_)));
    }
}

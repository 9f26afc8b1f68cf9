//! Shared types for the parking facility

use serde::{Deserialize, Serialize};

/// Inclusive Euclidean-distance cutoff for signature matching.
///
/// Two signatures match when the distance between their four-field vectors
/// is `<= 100.0`; strictly greater is a mismatch. The cutoff is a loose
/// geometric proxy inherited from the deployed system, so vehicle-number
/// equality remains the primary discriminator at checkout.
pub const MATCH_THRESHOLD: f64 = 100.0;

/// Newtype wrapper for session IDs to provide type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vehicle registration number, normalized to uppercase at construction.
///
/// Normalization happens once here so entry and exit lookups can never
/// disagree on case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct VehicleNumber(String);

impl VehicleNumber {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VehicleNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bounding region of a detected subject, used as an approximate identity proxy.
///
/// This is not a biometric template - just the x/y/width/height of whatever
/// region the detector reported at entry time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySignature {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl IdentitySignature {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Euclidean distance between two signatures treated as 4-vectors
    pub fn distance(&self, other: &IdentitySignature) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        let dw = f64::from(self.width) - f64::from(other.width);
        let dh = f64::from(self.height) - f64::from(other.height);
        (dx * dx + dy * dy + dw * dw + dh * dh).sqrt()
    }

    /// True when `other` is within [`MATCH_THRESHOLD`] (inclusive) of `self`
    pub fn matches(&self, other: &IdentitySignature) -> bool {
        self.distance(other) <= MATCH_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_number_normalized_uppercase() {
        let vehicle = VehicleNumber::new("  ka01ab1234 ");
        assert_eq!(vehicle.as_str(), "KA01AB1234");
        assert_eq!(vehicle, VehicleNumber::new("KA01AB1234"));
    }

    #[test]
    fn test_distance_zero_for_identical() {
        let sig = IdentitySignature::new(10, 10, 50, 50);
        assert_eq!(sig.distance(&sig), 0.0);
        assert!(sig.matches(&sig));
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = IdentitySignature::new(10, 10, 50, 50);
        let b = IdentitySignature::new(12, 11, 49, 51);

        assert_eq!(a.distance(&b), b.distance(&a));
        assert_eq!(a.matches(&b), b.matches(&a));
    }

    #[test]
    fn test_small_shift_matches() {
        // sqrt(4 + 1 + 1 + 1) ~= 2.6, well under the threshold
        let a = IdentitySignature::new(10, 10, 50, 50);
        let b = IdentitySignature::new(12, 11, 49, 51);

        assert!(a.matches(&b));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let a = IdentitySignature::new(0, 0, 0, 0);
        let at_threshold = IdentitySignature::new(100, 0, 0, 0);
        let past_threshold = IdentitySignature::new(101, 0, 0, 0);

        assert!(a.matches(&at_threshold)); // distance exactly 100.0
        assert!(!a.matches(&past_threshold)); // distance 101.0
    }
}

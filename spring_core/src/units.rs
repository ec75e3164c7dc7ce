//! # Unit Types
//!
//! Type-safe wrappers for the SI units spring design touches. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Spring design uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! Spring catalogs quote geometry in millimeters while the rate formula wants
//! base SI units, so both live here:
//! - Length: millimeters (mm), meters (m)
//! - Force: newtons (N)
//! - Spring rate: newtons per meter (N/m)
//! - Shear modulus: pascals (Pa), gigapascals (GPa)
//!
//! ## Example
//!
//! ```rust
//! use spring_core::units::{Millimeters, Meters, Gigapascals, Pascals};
//!
//! let wire = Millimeters(2.5);
//! let wire_m: Meters = wire.into();
//! assert_eq!(wire_m.0, 0.0025);
//!
//! let g: Pascals = Gigapascals(77.0).into();
//! assert_eq!(g.0, 77.0e9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Spring rate in newtons per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonsPerMeter(pub f64);

impl Mul<Meters> for NewtonsPerMeter {
    type Output = Newtons;

    /// Hooke's law: F = k * x
    fn mul(self, deflection: Meters) -> Newtons {
        Newtons(self.0 * deflection.0)
    }
}

// ============================================================================
// Modulus Units
// ============================================================================

/// Stress or modulus in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress or modulus in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

impl From<Gigapascals> for Pascals {
    fn from(gpa: Gigapascals) -> Self {
        Pascals(gpa.0 * 1.0e9)
    }
}

impl From<Pascals> for Gigapascals {
    fn from(pa: Pascals) -> Self {
        Gigapascals(pa.0 / 1.0e9)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Newtons);
impl_arithmetic!(NewtonsPerMeter);
impl_arithmetic!(Pascals);
impl_arithmetic!(Gigapascals);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters_to_meters() {
        let mm = Millimeters(20.0);
        let m: Meters = mm.into();
        assert_eq!(m.0, 0.02);
    }

    #[test]
    fn test_meters_to_millimeters() {
        let m = Meters(0.0025);
        let mm: Millimeters = m.into();
        assert_eq!(mm.0, 2.5);
    }

    #[test]
    fn test_gigapascals_to_pascals() {
        let gpa = Gigapascals(77.0);
        let pa: Pascals = gpa.into();
        assert_eq!(pa.0, 77.0e9);
    }

    #[test]
    fn test_pascals_to_gigapascals() {
        let pa = Pascals(69.0e9);
        let gpa: Gigapascals = pa.into();
        assert_eq!(gpa.0, 69.0);
    }

    #[test]
    fn test_hookes_law() {
        let k = NewtonsPerMeter(3300.0);
        let force = k * Meters(0.005);
        assert!((force.0 - 16.5).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(20.0);
        let b = Millimeters(2.5);
        assert_eq!((a + b).0, 22.5);
        assert_eq!((a - b).0, 17.5);
        assert_eq!((a * 2.0).0, 40.0);
        assert_eq!((a / 2.0).0, 10.0);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimeters(22.5);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "22.5");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }
}

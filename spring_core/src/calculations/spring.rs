//! # Helical Compression Spring Calculation
//!
//! Computes the rate (stiffness) of a helical compression coil spring and,
//! when a deflection is supplied, the force at that deflection.
//!
//! ## Formulas (all SI base units)
//!
//! 1. Mean coil diameter: `D_mean = ID + d` (m)
//! 2. Spring rate: `k = (G * d^4) / (8 * D_mean^3 * n)` (N/m)
//! 3. Spring force: `F = k * Δ` (N)
//!
//! ## Assumptions
//!
//! - Simple compression coil spring with round wire
//! - `n` counts active coils only (closed end coils excluded)
//! - Deflection within the linear (Hookean) range
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use spring_core::calculations::spring::{SpringInput, calculate};
//!
//! let input = SpringInput {
//!     label: "SPR-1".to_string(),
//!     wire_diameter_mm: 2.5,
//!     inner_diameter_mm: 20.0,
//!     active_coils: 10.0,
//!     shear_modulus_pa: 77.0e9,
//!     deflection_mm: 5.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("Spring rate: {:.2} N/m", result.spring_rate_n_per_m);
//! assert!(result.spring_rate_n_per_m > 0.0);
//! assert!(result.spring_force_n.is_some());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Meters, Millimeters, NewtonsPerMeter};

/// Shear modulus of common spring steel (Pa)
pub const DEFAULT_SHEAR_MODULUS_PA: f64 = 77.0e9;

fn default_shear_modulus_pa() -> f64 {
    DEFAULT_SHEAR_MODULUS_PA
}

/// Input parameters for a helical compression spring.
///
/// Geometry is given in millimeters as quoted by spring catalogs; the shear
/// modulus is given in pascals. Conversion to base SI units happens inside
/// [`calculate`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "SPR-1",
///   "wire_diameter_mm": 2.5,
///   "inner_diameter_mm": 20.0,
///   "active_coils": 10.0,
///   "shear_modulus_pa": 77.0e9,
///   "deflection_mm": 5.0
/// }
/// ```
///
/// `shear_modulus_pa` defaults to 77 GPa (common spring steel) and
/// `deflection_mm` defaults to 0.0 when omitted from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpringInput {
    /// User label for this spring (e.g., "SPR-1", "Valve return spring")
    pub label: String,

    /// Wire diameter d in millimeters
    pub wire_diameter_mm: f64,

    /// Inner coil diameter ID in millimeters
    pub inner_diameter_mm: f64,

    /// Number of active coils n (fractional counts are valid)
    pub active_coils: f64,

    /// Shear modulus G of the wire material in pascals
    #[serde(default = "default_shear_modulus_pa")]
    pub shear_modulus_pa: f64,

    /// Deflection Δ in millimeters at which to evaluate the force
    ///
    /// A value of 0.0 means "do not compute a force" - distinct from a
    /// computed force that happens to be zero.
    #[serde(default)]
    pub deflection_mm: f64,
}

impl SpringInput {
    /// Validate input parameters.
    ///
    /// Rejects non-positive and non-finite values before any arithmetic so
    /// the formulas can never produce infinity or NaN.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.wire_diameter_mm.is_finite() || self.wire_diameter_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "wire_diameter_mm",
                self.wire_diameter_mm.to_string(),
                "Wire diameter must be a positive, finite number",
            ));
        }
        if !self.inner_diameter_mm.is_finite() || self.inner_diameter_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "inner_diameter_mm",
                self.inner_diameter_mm.to_string(),
                "Inner coil diameter must be a positive, finite number",
            ));
        }
        if !self.active_coils.is_finite() || self.active_coils <= 0.0 {
            return Err(CalcError::invalid_input(
                "active_coils",
                self.active_coils.to_string(),
                "Active coil count must be a positive, finite number",
            ));
        }
        if !self.shear_modulus_pa.is_finite() || self.shear_modulus_pa <= 0.0 {
            return Err(CalcError::invalid_input(
                "shear_modulus_pa",
                self.shear_modulus_pa.to_string(),
                "Shear modulus must be a positive, finite number",
            ));
        }
        if !self.deflection_mm.is_finite() || self.deflection_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "deflection_mm",
                self.deflection_mm.to_string(),
                "Deflection must be a non-negative, finite number",
            ));
        }
        Ok(())
    }

    /// Mean coil diameter D_mean = ID + d (mm)
    ///
    /// Measured to the center of the wire cross-section.
    pub fn mean_coil_diameter_mm(&self) -> f64 {
        self.inner_diameter_mm + self.wire_diameter_mm
    }

    /// Spring index C = D_mean / d (dimensionless)
    ///
    /// The closed-form rate formula assumes a moderate index (roughly 4-12).
    pub fn spring_index(&self) -> f64 {
        self.mean_coil_diameter_mm() / self.wire_diameter_mm
    }
}

/// Results from a spring calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "spring_rate_n_per_m": 3300.75,
///   "spring_force_n": 16.5,
///   "mean_coil_diameter_mm": 22.5,
///   "spring_index": 9.0,
///   "shear_modulus_pa": 77.0e9
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpringResult {
    /// Spring rate k in newtons per meter
    pub spring_rate_n_per_m: f64,

    /// Spring force F in newtons at the requested deflection
    ///
    /// `None` when the input deflection was zero - no force was requested,
    /// which is distinct from a force of zero.
    pub spring_force_n: Option<f64>,

    // === Derived Geometry (for reference) ===
    /// Mean coil diameter D_mean = ID + d (mm)
    pub mean_coil_diameter_mm: f64,

    /// Spring index C = D_mean / d
    pub spring_index: f64,

    // === Material Properties Used ===
    /// Shear modulus G (Pa)
    pub shear_modulus_pa: f64,
}

/// Compute the spring rate k for a compression coil spring in N/m.
///
/// `k = (G * d^4) / (8 * D_mean^3 * n)` with `D_mean = ID + d`.
/// All arguments in SI base units; this is the raw formula with no
/// validation - callers go through [`calculate`] for checked inputs.
pub fn spring_rate(
    shear_modulus_pa: f64,
    wire_diameter_m: f64,
    inner_diameter_m: f64,
    active_coils: f64,
) -> f64 {
    let mean_diameter_m = inner_diameter_m + wire_diameter_m;
    (shear_modulus_pa * wire_diameter_m.powi(4)) / (8.0 * mean_diameter_m.powi(3) * active_coils)
}

/// Compute the force at a given deflection using Hooke's law: F = k * Δ.
pub fn spring_force(spring_rate_n_per_m: f64, deflection_m: f64) -> f64 {
    (NewtonsPerMeter(spring_rate_n_per_m) * Meters(deflection_m)).value()
}

/// Calculate spring rate and optional force.
///
/// This is a pure function suitable for LLM invocation: same inputs always
/// produce the same outputs.
///
/// # Arguments
///
/// * `input` - Spring parameters (geometry in mm, shear modulus in Pa)
///
/// # Returns
///
/// * `Ok(SpringResult)` - Rate in N/m, plus force in N when deflection > 0
/// * `Err(CalcError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use spring_core::calculations::spring::{SpringInput, calculate};
///
/// let input = SpringInput {
///     label: "Test Spring".to_string(),
///     wire_diameter_mm: 2.5,
///     inner_diameter_mm: 20.0,
///     active_coils: 10.0,
///     shear_modulus_pa: 77.0e9,
///     deflection_mm: 0.0,
/// };
///
/// let result = calculate(&input).expect("Calculation should succeed");
/// assert!(result.spring_rate_n_per_m > 0.0);
/// assert!(result.spring_force_n.is_none());
/// ```
pub fn calculate(input: &SpringInput) -> CalcResult<SpringResult> {
    // Validate inputs
    input.validate()?;

    // Convert catalog units (mm) to base SI units (m)
    let wire_m: Meters = Millimeters(input.wire_diameter_mm).into();
    let inner_m: Meters = Millimeters(input.inner_diameter_mm).into();

    let spring_rate_n_per_m = spring_rate(
        input.shear_modulus_pa,
        wire_m.value(),
        inner_m.value(),
        input.active_coils,
    );

    // Validated inputs keep the formula well-defined, but extreme magnitudes
    // can still overflow f64
    if !spring_rate_n_per_m.is_finite() {
        return Err(CalcError::calculation_failed(
            "spring_rate",
            "Result is not a finite number; check input magnitudes",
        ));
    }

    // A zero deflection means no force was requested at all
    let spring_force_n = if input.deflection_mm > 0.0 {
        let deflection_m: Meters = Millimeters(input.deflection_mm).into();
        Some(spring_force(spring_rate_n_per_m, deflection_m.value()))
    } else {
        None
    };

    Ok(SpringResult {
        spring_rate_n_per_m,
        spring_force_n,
        mean_coil_diameter_mm: input.mean_coil_diameter_mm(),
        spring_index: input.spring_index(),
        shear_modulus_pa: input.shear_modulus_pa,
    })
}

//! # Materials Database
//!
//! Spring wire material definitions and property lookups. Each material
//! carries the shear modulus G used by the rate formula.
//!
//! ## Example
//!
//! ```rust
//! use spring_core::materials::WireMaterial;
//!
//! let wire = WireMaterial::MusicWire;
//! println!("G = {} GPa", wire.shear_modulus_gpa().value());
//!
//! // Flexible lookup from user input
//! let parsed = WireMaterial::from_str_flexible("music wire").unwrap();
//! assert_eq!(parsed, WireMaterial::MusicWire);
//! ```

pub mod wire;

// Re-export wire material types
pub use wire::WireMaterial;

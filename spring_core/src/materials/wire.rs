//! Spring Wire Materials
//!
//! Shear moduli for the common ASTM spring wire grades. Values are the
//! handbook figures used for rate calculations at room temperature.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Gigapascals, Pascals};

/// Spring wire material grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WireMaterial {
    /// Music wire (ASTM A228) - high-strength cold-drawn steel
    MusicWire,
    /// Hard-drawn carbon steel wire (ASTM A227)
    HardDrawn,
    /// Oil-tempered carbon steel wire (ASTM A229)
    OilTempered,
    /// Chrome silicon alloy wire (ASTM A401)
    ChromeSilicon,
    /// Chrome vanadium alloy wire (ASTM A232)
    ChromeVanadium,
    /// Stainless steel 302 wire (ASTM A313)
    #[serde(rename = "stainless-302")]
    Stainless302,
    /// Phosphor bronze wire (ASTM B159)
    PhosphorBronze,
}

impl WireMaterial {
    /// All wire materials for UI selection
    pub const ALL: [WireMaterial; 7] = [
        WireMaterial::MusicWire,
        WireMaterial::HardDrawn,
        WireMaterial::OilTempered,
        WireMaterial::ChromeSilicon,
        WireMaterial::ChromeVanadium,
        WireMaterial::Stainless302,
        WireMaterial::PhosphorBronze,
    ];

    /// Get the code string (e.g., "music-wire")
    pub fn code(&self) -> &'static str {
        match self {
            WireMaterial::MusicWire => "music-wire",
            WireMaterial::HardDrawn => "hard-drawn",
            WireMaterial::OilTempered => "oil-tempered",
            WireMaterial::ChromeSilicon => "chrome-silicon",
            WireMaterial::ChromeVanadium => "chrome-vanadium",
            WireMaterial::Stainless302 => "stainless-302",
            WireMaterial::PhosphorBronze => "phosphor-bronze",
        }
    }

    /// Get the ASTM specification for this wire grade
    pub fn astm_spec(&self) -> &'static str {
        match self {
            WireMaterial::MusicWire => "ASTM A228",
            WireMaterial::HardDrawn => "ASTM A227",
            WireMaterial::OilTempered => "ASTM A229",
            WireMaterial::ChromeSilicon => "ASTM A401",
            WireMaterial::ChromeVanadium => "ASTM A232",
            WireMaterial::Stainless302 => "ASTM A313",
            WireMaterial::PhosphorBronze => "ASTM B159",
        }
    }

    /// Shear modulus G for this wire grade
    pub fn shear_modulus_gpa(&self) -> Gigapascals {
        match self {
            WireMaterial::MusicWire => Gigapascals(79.3),
            WireMaterial::HardDrawn => Gigapascals(79.3),
            WireMaterial::OilTempered => Gigapascals(77.2),
            WireMaterial::ChromeSilicon => Gigapascals(77.2),
            WireMaterial::ChromeVanadium => Gigapascals(77.2),
            WireMaterial::Stainless302 => Gigapascals(69.0),
            WireMaterial::PhosphorBronze => Gigapascals(41.4),
        }
    }

    /// Shear modulus G in pascals, as the rate formula consumes it
    pub fn shear_modulus_pa(&self) -> Pascals {
        self.shear_modulus_gpa().into()
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "MUSIC-WIRE" | "MUSIC" | "A228" | "ASTM-A228" => Ok(WireMaterial::MusicWire),
            "HARD-DRAWN" | "A227" | "ASTM-A227" => Ok(WireMaterial::HardDrawn),
            "OIL-TEMPERED" | "A229" | "ASTM-A229" => Ok(WireMaterial::OilTempered),
            "CHROME-SILICON" | "CRSI" | "A401" | "ASTM-A401" => Ok(WireMaterial::ChromeSilicon),
            "CHROME-VANADIUM" | "CRV" | "A232" | "ASTM-A232" => Ok(WireMaterial::ChromeVanadium),
            "STAINLESS-302" | "STAINLESS" | "SS302" | "302" | "A313" | "ASTM-A313" => {
                Ok(WireMaterial::Stainless302)
            }
            "PHOSPHOR-BRONZE" | "BRONZE" | "B159" | "ASTM-B159" => Ok(WireMaterial::PhosphorBronze),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WireMaterial::MusicWire => "Music Wire",
            WireMaterial::HardDrawn => "Hard-Drawn Steel",
            WireMaterial::OilTempered => "Oil-Tempered Steel",
            WireMaterial::ChromeSilicon => "Chrome Silicon",
            WireMaterial::ChromeVanadium => "Chrome Vanadium",
            WireMaterial::Stainless302 => "Stainless 302",
            WireMaterial::PhosphorBronze => "Phosphor Bronze",
        }
    }
}

impl std::fmt::Display for WireMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_music_wire_modulus() {
        assert_eq!(WireMaterial::MusicWire.shear_modulus_gpa().value(), 79.3);
        let g = WireMaterial::MusicWire.shear_modulus_pa();
        assert!((g.value() - 79.3e9).abs() < 1.0e3);
    }

    #[test]
    fn test_all_moduli_plausible() {
        // Spring wire shear moduli fall in a narrow physical band
        for material in WireMaterial::ALL {
            let gpa = material.shear_modulus_gpa().value();
            assert!(
                (40.0..=90.0).contains(&gpa),
                "{} has implausible G = {} GPa",
                material,
                gpa
            );
        }
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            WireMaterial::from_str_flexible("music wire").unwrap(),
            WireMaterial::MusicWire
        );
        assert_eq!(
            WireMaterial::from_str_flexible("A228").unwrap(),
            WireMaterial::MusicWire
        );
        assert_eq!(
            WireMaterial::from_str_flexible("stainless_302").unwrap(),
            WireMaterial::Stainless302
        );
        assert_eq!(
            WireMaterial::from_str_flexible("chrome-silicon").unwrap(),
            WireMaterial::ChromeSilicon
        );
    }

    #[test]
    fn test_unknown_material_rejected() {
        let err = WireMaterial::from_str_flexible("unobtanium").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_code_roundtrip() {
        for material in WireMaterial::ALL {
            let parsed = WireMaterial::from_str_flexible(material.code()).unwrap();
            assert_eq!(parsed, material);
        }
    }

    #[test]
    fn test_serialization() {
        let material = WireMaterial::MusicWire;
        let json = serde_json::to_string(&material).unwrap();
        assert_eq!(json, "\"music-wire\"");

        let roundtrip: WireMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(material, roundtrip);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(WireMaterial::MusicWire.display_name(), "Music Wire");
        assert_eq!(WireMaterial::Stainless302.astm_spec(), "ASTM A313");
    }
}

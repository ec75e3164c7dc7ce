//! # CoilCalc CLI Application
//!
//! Command-line interface for helical compression spring calculations.
//!
//! Usage:
//!   spring_cli 2.5 20 10                        # Spring rate only
//!   spring_cli 2.5 20 10 -D 5                   # Rate + force at 5 mm deflection
//!   spring_cli 2.5 20 10 --material music-wire  # Take G from the material database
//!   spring_cli 2.5 20 10 --json                 # Full result as JSON

use clap::Parser;

use spring_core::calculations::spring::{
    calculate, SpringInput, SpringResult, DEFAULT_SHEAR_MODULUS_PA,
};
use spring_core::errors::CalcResult;
use spring_core::materials::WireMaterial;

#[derive(Parser, Debug)]
#[command(
    name = "spring_cli",
    version,
    about = "Calculate the spring rate (N/m) and force (N) of a coil spring using SI units",
    long_about = "Calculate the spring rate (N/m) and force (N) of a helical\n\
                  compression coil spring using SI units.\n\n\
                  Geometry is given in millimeters; the shear modulus in pascals.\n\
                  When a deflection is given (-D), the force at that deflection is\n\
                  reported as well."
)]
struct Args {
    /// Wire diameter of spring in mm (d)
    #[arg(value_name = "d", allow_negative_numbers = true)]
    d: f64,

    /// Inner diameter of the coil in mm (ID)
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    id: f64,

    /// Number of active coils in the spring (n)
    #[arg(value_name = "n", allow_negative_numbers = true)]
    n: f64,

    /// Shear modulus G in Pa (default: 77e9 for 77 GPa)
    #[arg(
        short = 'G',
        long = "shear_modulus",
        default_value_t = DEFAULT_SHEAR_MODULUS_PA,
        allow_negative_numbers = true
    )]
    shear_modulus: f64,

    /// Deflection in mm for which to calculate the force
    #[arg(short = 'D', long, default_value_t = 0.0, allow_negative_numbers = true)]
    deflection: f64,

    /// Wire material to take G from instead of -G (e.g. music-wire,
    /// hard-drawn, oil-tempered, chrome-silicon, chrome-vanadium,
    /// stainless-302, phosphor-bronze)
    #[arg(long, conflicts_with = "shear_modulus")]
    material: Option<String>,

    /// Output the full result as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> CalcResult<()> {
    let shear_modulus_pa = match &args.material {
        Some(name) => WireMaterial::from_str_flexible(name)?.shear_modulus_pa().value(),
        None => args.shear_modulus,
    };

    let input = SpringInput {
        label: "CLI".to_string(),
        wire_diameter_mm: args.d,
        inner_diameter_mm: args.id,
        active_coils: args.n,
        shear_modulus_pa,
        deflection_mm: args.deflection,
    };

    let result = calculate(&input)?;

    if args.json {
        if let Ok(json) = serde_json::to_string_pretty(&result) {
            println!("{}", json);
        }
    } else {
        for line in report_lines(&result, args.deflection) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Render the plain-text report, one entry per stdout line.
///
/// The force line only appears when a force was computed.
fn report_lines(result: &SpringResult, deflection_mm: f64) -> Vec<String> {
    let mut lines = vec![format!("Spring Rate (k): {:.2} N/m", result.spring_rate_n_per_m)];
    if let Some(force_n) = result.spring_force_n {
        lines.push(format!(
            "Spring Force at deflection {:.2} mm: {:.2} N",
            deflection_mm, force_n
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["spring_cli", "2.5", "20", "10"]);
        assert_eq!(args.d, 2.5);
        assert_eq!(args.id, 20.0);
        assert_eq!(args.n, 10.0);
        assert_eq!(args.shear_modulus, DEFAULT_SHEAR_MODULUS_PA);
        assert_eq!(args.deflection, 0.0);
        assert!(args.material.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_flags_parse() {
        let args = parse(&["spring_cli", "2.5", "20", "10", "-G", "79.3e9", "-D", "5"]);
        assert_eq!(args.shear_modulus, 79.3e9);
        assert_eq!(args.deflection, 5.0);

        let args = parse(&["spring_cli", "2.5", "20", "10", "--shear_modulus", "69e9"]);
        assert_eq!(args.shear_modulus, 69.0e9);
    }

    #[test]
    fn test_missing_positional_is_error() {
        assert!(Args::try_parse_from(["spring_cli", "2.5", "20"]).is_err());
    }

    #[test]
    fn test_non_numeric_input_is_error() {
        assert!(Args::try_parse_from(["spring_cli", "two", "20", "10"]).is_err());
    }

    #[test]
    fn test_material_conflicts_with_shear_modulus() {
        let result = Args::try_parse_from([
            "spring_cli", "2.5", "20", "10", "-G", "70e9", "--material", "music-wire",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_input_parses_then_fails_validation() {
        // Negative reals are argument-syntax-valid; rejection is the
        // calculator's job, with a message naming the field
        let args = parse(&["spring_cli", "-2.5", "20", "10"]);
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("wire_diameter_mm"));
    }

    #[test]
    fn test_unknown_material_fails() {
        let args = parse(&["spring_cli", "2.5", "20", "10", "--material", "unobtanium"]);
        assert!(run(&args).is_err());
    }

    #[test]
    fn test_report_exact_format() {
        let args = parse(&["spring_cli", "2.5", "20", "10", "-D", "5"]);
        let input = SpringInput {
            label: "CLI".to_string(),
            wire_diameter_mm: args.d,
            inner_diameter_mm: args.id,
            active_coils: args.n,
            shear_modulus_pa: args.shear_modulus,
            deflection_mm: args.deflection,
        };
        let result = calculate(&input).unwrap();
        let lines = report_lines(&result, args.deflection);

        assert_eq!(lines[0], "Spring Rate (k): 3300.75 N/m");
        assert_eq!(lines[1], "Spring Force at deflection 5.00 mm: 16.50 N");
    }

    #[test]
    fn test_report_omits_force_line_without_deflection() {
        let input = SpringInput {
            label: "CLI".to_string(),
            wire_diameter_mm: 2.5,
            inner_diameter_mm: 20.0,
            active_coils: 10.0,
            shear_modulus_pa: DEFAULT_SHEAR_MODULUS_PA,
            deflection_mm: 0.0,
        };
        let result = calculate(&input).unwrap();
        let lines = report_lines(&result, 0.0);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Spring Rate (k):"));
    }
}

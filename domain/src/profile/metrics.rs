//! Body metrics derived from the user profile

use serde::{Deserialize, Serialize};

/// Body mass index: weight in kilograms divided by the square of height
/// in meters. Pure and deterministic; callers guarantee positive inputs
/// (the form clamps age, weight, and height into their documented ranges).
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// A computed BMI value (Value Object)
///
/// Displays with two decimal places, matching how the value is
/// interpolated into plan prompts and announced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bmi(f64);

impl Bmi {
    pub fn from_measurements(weight_kg: f64, height_cm: f64) -> Self {
        Self(body_mass_index(weight_kg, height_cm))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Bmi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_reference_values() {
        assert!((body_mass_index(70.0, 175.0) - 22.86).abs() < 0.01);
        assert!((body_mass_index(200.0, 100.0) - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_positive_and_finite_for_positive_inputs() {
        for (weight, height) in [(30.0, 100.0), (80.5, 180.0), (200.0, 250.0)] {
            let bmi = body_mass_index(weight, height);
            assert!(bmi > 0.0);
            assert!(bmi.is_finite());
        }
    }

    #[test]
    fn test_bmi_display_two_decimals() {
        let bmi = Bmi::from_measurements(70.0, 175.0);
        assert_eq!(bmi.to_string(), "22.86");
        let bmi = Bmi::from_measurements(80.0, 180.0);
        assert_eq!(bmi.to_string(), "24.69");
    }
}

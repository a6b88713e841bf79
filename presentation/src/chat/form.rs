//! Profile form field parsing.
//!
//! Each field is parsed from a line of input and clamped into its
//! documented range: out-of-range numbers are pulled to the nearest
//! bound rather than rejected, matching the number-input behavior of the
//! form. Only non-numeric input is an error (the REPL re-prompts).

use thiserror::Error;

pub const AGE_RANGE: (u32, u32) = (10, 100);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 200.0);
pub const HEIGHT_RANGE_CM: (u32, u32) = (100, 250);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

fn clamp_u32(value: u32, (lo, hi): (u32, u32)) -> u32 {
    value.clamp(lo, hi)
}

fn clamp_f64(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.clamp(lo, hi)
}

/// Age in years, clamped to 10-100.
pub fn parse_age(input: &str) -> Result<u32, FormError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| FormError::NotANumber(input.trim().to_string()))?;
    let value = value.clamp(0, i64::from(u32::MAX)) as u32;
    Ok(clamp_u32(value, AGE_RANGE))
}

/// Weight in kilograms, clamped to 30.0-200.0.
pub fn parse_weight_kg(input: &str) -> Result<f64, FormError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| FormError::NotANumber(input.trim().to_string()))?;
    if !value.is_finite() {
        return Err(FormError::NotANumber(input.trim().to_string()));
    }
    Ok(clamp_f64(value, WEIGHT_RANGE_KG))
}

/// Height in centimeters (whole number), clamped to 100-250.
pub fn parse_height_cm(input: &str) -> Result<f64, FormError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| FormError::NotANumber(input.trim().to_string()))?;
    let value = value.clamp(0, i64::from(u32::MAX)) as u32;
    Ok(f64::from(clamp_u32(value, HEIGHT_RANGE_CM)))
}

/// Target weight in kilograms, clamped to 30.0-200.0.
pub fn parse_expected_weight_kg(input: &str) -> Result<f64, FormError> {
    parse_weight_kg(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_in_range_passes_through() {
        assert_eq!(parse_age("30"), Ok(30));
        assert_eq!(parse_age("  42  "), Ok(42));
    }

    #[test]
    fn test_age_is_clamped() {
        assert_eq!(parse_age("5"), Ok(10));
        assert_eq!(parse_age("150"), Ok(100));
        assert_eq!(parse_age("-3"), Ok(10));
    }

    #[test]
    fn test_age_rejects_non_numeric() {
        assert!(matches!(parse_age("thirty"), Err(FormError::NotANumber(_))));
        assert!(matches!(parse_age(""), Err(FormError::NotANumber(_))));
        // Age is a whole number; fractional input re-prompts.
        assert!(matches!(parse_age("30.5"), Err(FormError::NotANumber(_))));
    }

    #[test]
    fn test_weight_accepts_decimals_and_clamps() {
        assert_eq!(parse_weight_kg("80.5"), Ok(80.5));
        assert_eq!(parse_weight_kg("10"), Ok(30.0));
        assert_eq!(parse_weight_kg("500"), Ok(200.0));
    }

    #[test]
    fn test_weight_rejects_non_finite() {
        assert!(parse_weight_kg("NaN").is_err());
        assert!(parse_weight_kg("inf").is_err());
        assert!(parse_weight_kg("heavy").is_err());
    }

    #[test]
    fn test_height_is_whole_number_and_clamped() {
        assert_eq!(parse_height_cm("180"), Ok(180.0));
        assert_eq!(parse_height_cm("90"), Ok(100.0));
        assert_eq!(parse_height_cm("300"), Ok(250.0));
        assert!(parse_height_cm("1.80").is_err());
    }
}

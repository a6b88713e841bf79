//! User profile entities

use crate::profile::metrics::Bmi;
use serde::{Deserialize, Serialize};

/// Raw values captured by the profile form.
///
/// The form clamps each field into its documented range before building
/// this (age 10-100, weight 30-200 kg, height 100-250 cm), so the domain
/// performs no further validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub expected_weight_kg: f64,
}

/// A completed user profile with its derived BMI (Entity)
///
/// All fields are set atomically from one form submission. Once a plan
/// has been generated for the session the profile is immutable; the
/// session state rejects further submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    age: u32,
    weight_kg: f64,
    height_cm: f64,
    expected_weight_kg: f64,
    bmi: Bmi,
}

impl UserProfile {
    pub fn from_submission(submission: ProfileSubmission) -> Self {
        let bmi = Bmi::from_measurements(submission.weight_kg, submission.height_cm);
        Self {
            age: submission.age,
            weight_kg: submission.weight_kg,
            height_cm: submission.height_cm,
            expected_weight_kg: submission.expected_weight_kg,
            bmi,
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn expected_weight_kg(&self) -> f64 {
        self.expected_weight_kg
    }

    pub fn bmi(&self) -> Bmi {
        self.bmi
    }
}

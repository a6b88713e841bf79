//! Advisor role selection

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The persona answering the user's questions (Value Object)
///
/// Selected once per session before a plan is generated, but never locked:
/// the role is read at the moment a prompt is built, so the last selection
/// wins and switching after a plan exists only affects later prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvisorRole {
    NutritionExpert,
    FitnessCoach,
}

impl AdvisorRole {
    /// Lowercase display name used inside prompts ("You are a {name}...")
    pub fn display_name(&self) -> &'static str {
        match self {
            AdvisorRole::NutritionExpert => "nutrition expert",
            AdvisorRole::FitnessCoach => "fitness coach",
        }
    }

    /// Human-facing label for menus and banners
    pub fn label(&self) -> &'static str {
        match self {
            AdvisorRole::NutritionExpert => "Nutrition Expert",
            AdvisorRole::FitnessCoach => "Fitness Coach",
        }
    }

    pub fn all() -> &'static [AdvisorRole] {
        &[AdvisorRole::NutritionExpert, AdvisorRole::FitnessCoach]
    }
}

impl std::fmt::Display for AdvisorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AdvisorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nutrition" | "nutrition-expert" | "nutrition expert" | "diet" => {
                Ok(AdvisorRole::NutritionExpert)
            }
            "fitness" | "fitness-coach" | "fitness coach" | "gym" => Ok(AdvisorRole::FitnessCoach),
            other => Err(format!(
                "Unknown advisor role: '{}' (expected 'nutrition' or 'fitness')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_are_lowercase() {
        assert_eq!(
            AdvisorRole::NutritionExpert.display_name(),
            "nutrition expert"
        );
        assert_eq!(AdvisorRole::FitnessCoach.display_name(), "fitness coach");
    }

    #[test]
    fn test_parse_accepts_short_and_long_forms() {
        assert_eq!(
            "nutrition".parse::<AdvisorRole>().unwrap(),
            AdvisorRole::NutritionExpert
        );
        assert_eq!(
            "Fitness Coach".parse::<AdvisorRole>().unwrap(),
            AdvisorRole::FitnessCoach
        );
        assert_eq!(
            "gym".parse::<AdvisorRole>().unwrap(),
            AdvisorRole::FitnessCoach
        );
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        assert!("chef".parse::<AdvisorRole>().is_err());
    }
}

//! Prompt templates for plan generation and follow-up questions

use crate::advisor::AdvisorRole;
use crate::profile::entities::UserProfile;

/// Templates for the prompts sent to the generation service
///
/// Pure string templating: profile values are interpolated verbatim and
/// follow-up questions are substituted literally. A question containing
/// quote characters passes through unmodified; that is a documented
/// limitation of the template, not something to escape here.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Directive asking for a 7-day plan tailored to the profile.
    pub fn weekly_plan(role: AdvisorRole, profile: &UserProfile) -> String {
        match role {
            AdvisorRole::NutritionExpert => format!(
                "Generate a weekly meal plan for a {}-year-old person weighing {} kg, \
                 with a BMI of {}, aiming to reach {} kg. The person wants a \
                 balanced, nutritious diet with diverse meals.",
                profile.age(),
                profile.weight_kg(),
                profile.bmi(),
                profile.expected_weight_kg(),
            ),
            AdvisorRole::FitnessCoach => format!(
                "Generate a weekly exercise plan for a {}-year-old person weighing {} kg, \
                 with a BMI of {}, aiming to reach {} kg. The person wants a \
                 balanced fitness routine, including strength, cardio, and flexibility exercises.",
                profile.age(),
                profile.weight_kg(),
                profile.bmi(),
                profile.expected_weight_kg(),
            ),
        }
    }

    /// Follow-up question answered in the selected advisor's voice.
    pub fn follow_up(role: AdvisorRole, question: &str) -> String {
        format!(
            "You are a {}. Answer this user's question: '{}'",
            role.display_name(),
            question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::entities::ProfileSubmission;

    fn profile() -> UserProfile {
        UserProfile::from_submission(ProfileSubmission {
            age: 30,
            weight_kg: 80.0,
            height_cm: 180.0,
            expected_weight_kg: 70.0,
        })
    }

    #[test]
    fn test_weekly_plan_interpolates_profile_values() {
        let prompt = PromptTemplate::weekly_plan(AdvisorRole::NutritionExpert, &profile());
        assert!(prompt.contains("30-year-old"));
        assert!(prompt.contains("80 kg"));
        assert!(prompt.contains("24.69"));
        assert!(prompt.contains("70 kg"));
        assert!(prompt.contains("balanced, nutritious diet with diverse meals"));
    }

    #[test]
    fn test_weekly_plan_fitness_variant() {
        let prompt = PromptTemplate::weekly_plan(AdvisorRole::FitnessCoach, &profile());
        assert!(prompt.contains("weekly exercise plan"));
        assert!(prompt.contains("strength, cardio, and flexibility exercises"));
    }

    #[test]
    fn test_fractional_weight_keeps_its_decimals() {
        let profile = UserProfile::from_submission(ProfileSubmission {
            age: 45,
            weight_kg: 82.5,
            height_cm: 170.0,
            expected_weight_kg: 75.5,
        });
        let prompt = PromptTemplate::weekly_plan(AdvisorRole::NutritionExpert, &profile);
        assert!(prompt.contains("82.5 kg"));
        assert!(prompt.contains("75.5 kg"));
    }

    #[test]
    fn test_follow_up_uses_lowercase_role_name() {
        let prompt = PromptTemplate::follow_up(AdvisorRole::FitnessCoach, "How many rest days?");
        assert_eq!(
            prompt,
            "You are a fitness coach. Answer this user's question: 'How many rest days?'"
        );
    }

    #[test]
    fn test_follow_up_passes_quotes_through_unmodified() {
        let prompt =
            PromptTemplate::follow_up(AdvisorRole::NutritionExpert, "What's a 'healthy' snack?");
        assert!(prompt.contains("What's a 'healthy' snack?"));
    }
}

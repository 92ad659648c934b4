//! Lesson plan synthesis from profile, learning style and subject.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::tables::{
    activities, learning_format, teaching_style, TeachingStyle, FALLBACK_LIFE_PATH,
    TEACHING_STYLES,
};
use super::Subject;
use crate::domain::numerology::NumerologyProfile;
use crate::domain::user::UserProfile;

/// A personalized lesson plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub subject: Subject,
    pub topic_label: String,
    pub teaching_style_label: String,
    pub format_label: String,
    pub activities: Vec<String>,
    pub numerology_insight: String,
    pub learning_style_insight: String,
}

/// Builds lesson plans from the static lookup tables.
///
/// Pure: identical inputs always give identical plans.
pub struct LessonPlanSynthesizer;

impl LessonPlanSynthesizer {
    /// Synthesizes a plan for `user` studying `subject`.
    pub fn synthesize(
        user: &UserProfile,
        profile: &NumerologyProfile,
        subject: Subject,
    ) -> LessonPlan {
        let life_path = profile.life_path_number;
        let style = Self::teaching_style_for(life_path);
        let format = learning_format(user.learning_style);

        LessonPlan {
            subject,
            topic_label: Self::topic_label(user, subject),
            teaching_style_label: style.label.to_string(),
            format_label: format.label.to_string(),
            activities: activities(subject, user.learning_style)
                .iter()
                .map(|a| a.to_string())
                .collect(),
            numerology_insight: format!(
                "As a Life Path {}, you thrive with {} This lesson leverages your natural strengths.",
                life_path,
                style.description.to_lowercase()
            ),
            learning_style_insight: format!(
                "Since you are a {} learner, we've focused on {} to maximize retention.",
                user.learning_style,
                format.tools.join(", ")
            ),
        }
    }

    /// `"{interests} in {subject}"`, or `"Core Concepts of {subject}"` when
    /// the learner gave no interests.
    pub fn topic_label(user: &UserProfile, subject: Subject) -> String {
        match user.trimmed_interests() {
            Some(interests) => format!("{} in {}", interests, subject),
            None => format!("Core Concepts of {}", subject),
        }
    }

    /// Teaching style for a life path, falling back to the entry for 1.
    ///
    /// Every valid life path has an entry, so a miss means the profile was
    /// built outside the calculator's invariants. It is logged, not hidden.
    pub fn teaching_style_for(life_path: u32) -> &'static TeachingStyle {
        if let Some(style) = teaching_style(life_path) {
            return style;
        }
        warn!(
            life_path,
            fallback = FALLBACK_LIFE_PATH,
            "No teaching style registered for life path number, using fallback"
        );
        &TEACHING_STYLES[&FALLBACK_LIFE_PATH]
    }
}

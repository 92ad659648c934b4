//! Plain-text rendering of a generated study plan.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::LessonPlan;
use crate::domain::numerology::NumerologyProfile;
use crate::domain::user::UserProfile;

/// Everything shown on the results page: who, their profile, and the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlanReport {
    pub user: UserProfile,
    pub profile: NumerologyProfile,
    pub plan: LessonPlan,
}

impl StudyPlanReport {
    pub fn new(user: UserProfile, profile: NumerologyProfile, plan: LessonPlan) -> Self {
        Self { user, profile, plan }
    }
}

impl fmt::Display for StudyPlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.profile;
        let plan = &self.plan;

        writeln!(f, "Personalized Plan")?;
        writeln!(f, "=================")?;
        writeln!(f)?;
        writeln!(f, "Student Profile")?;
        writeln!(f, "  Name:            {}", self.user.name)?;
        writeln!(f, "  Life Path:       {}", p.life_path_number)?;
        writeln!(f, "  Destiny Num:     {}", p.destiny_number)?;
        writeln!(f, "  Soul Urge:       {}", p.soul_urge_number)?;
        writeln!(f, "  Zodiac:          {}", p.zodiac_sign)?;
        writeln!(f, "  Chinese Zodiac:  {}", p.chinese_zodiac_sign)?;
        writeln!(f, "  Personal Year:   {}", p.personal_year_number)?;
        writeln!(f)?;
        writeln!(f, "Learning Stats")?;
        writeln!(f, "  Primary Style:   {}", self.user.learning_style)?;
        writeln!(f, "  Optimized for {} formats.", plan.format_label)?;
        writeln!(f)?;
        writeln!(f, "Generated Curriculum")?;
        writeln!(f, "  {}", plan.subject)?;
        writeln!(f, "  {}", plan.topic_label)?;
        writeln!(f)?;
        writeln!(f, "  Teaching Style:  {}", plan.teaching_style_label)?;
        writeln!(f, "  Format:          {}", plan.format_label)?;
        writeln!(f)?;
        writeln!(f, "Strategy Logic")?;
        writeln!(f, "  \"{}\"", plan.numerology_insight)?;
        writeln!(f, "  \"{}\"", plan.learning_style_insight)?;
        writeln!(f)?;
        writeln!(f, "Lesson Activities")?;
        for (idx, activity) in plan.activities.iter().enumerate() {
            writeln!(f, "  {}. {}", idx + 1, activity)?;
        }
        Ok(())
    }
}

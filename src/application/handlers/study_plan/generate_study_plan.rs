//! GenerateStudyPlan - Command handler turning raw intake input into a plan.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::foundation::{BirthDate, DomainError, ValidationError};
use crate::domain::numerology::{NumerologyProfile, ProfileCalculator};
use crate::domain::study_plan::{LessonPlan, LessonPlanSynthesizer, StudyPlanReport, Subject};
use crate::domain::user::{LearningStyle, UserProfile};
use crate::ports::Clock;

/// Raw intake form input.
#[derive(Debug, Clone, Default)]
pub struct GenerateStudyPlanCommand {
    pub name: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub learning_style: String,
    /// Empty means the configured default subject.
    pub subject: Option<String>,
    pub interests: String,
}

/// Result of successful plan generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateStudyPlanResult {
    pub user: UserProfile,
    pub profile: NumerologyProfile,
    pub plan: LessonPlan,
}

impl GenerateStudyPlanResult {
    pub fn into_report(self) -> StudyPlanReport {
        StudyPlanReport::new(self.user, self.profile, self.plan)
    }
}

/// Handler for generating study plans.
pub struct GenerateStudyPlanHandler {
    clock: Arc<dyn Clock>,
    calculator: ProfileCalculator,
    default_subject: Subject,
}

impl GenerateStudyPlanHandler {
    pub fn new(clock: Arc<dyn Clock>, config: &EngineConfig) -> Self {
        Self {
            clock,
            calculator: ProfileCalculator::new(config.zero_number_policy),
            default_subject: config.default_subject,
        }
    }

    pub fn handle(&self, cmd: GenerateStudyPlanCommand) -> Result<GenerateStudyPlanResult, DomainError> {
        // 1. Validate intake input
        let (user, subject) = self.validate(cmd)?;

        // 2. Profile must be complete before the plan is built
        let current_year = self.clock.current_year();
        let profile = self.calculator.compute_profile(&user, current_year);

        // 3. Synthesize the plan
        let plan = LessonPlanSynthesizer::synthesize(&user, &profile, subject);

        debug!(
            current_year,
            activities = plan.activities.len(),
            "Synthesized lesson plan"
        );
        info!(
            subject = %subject,
            learning_style = %user.learning_style,
            life_path = profile.life_path_number,
            teaching_style = %plan.teaching_style_label,
            "Generated study plan"
        );

        Ok(GenerateStudyPlanResult { user, profile, plan })
    }

    fn validate(&self, cmd: GenerateStudyPlanCommand) -> Result<(UserProfile, Subject), ValidationError> {
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let date_of_birth = BirthDate::parse(&cmd.date_of_birth)?;
        let learning_style: LearningStyle = cmd.learning_style.parse()?;
        let subject = match cmd.subject.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse()?,
            _ => self.default_subject,
        };

        let user = UserProfile::new(name, date_of_birth, learning_style, cmd.interests);
        Ok((user, subject))
    }
}

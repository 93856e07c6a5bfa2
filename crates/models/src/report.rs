use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A mentee's end-of-day report. One per mentee per date; mood is a
/// 1 (very bad) to 5 (very good) scale.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyReport {
    pub id: Uuid,
    pub mentee_id: Uuid,
    pub report_date: NaiveDate,
    pub mood: i16,
    pub achievements: String,
    pub challenges: String,
    pub learnings: String,
    pub next_steps: String,
    pub mentor_feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to submit today's report
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitDailyReport {
    #[validate(range(min = 1, max = 5))]
    pub mood: i16,

    #[validate(length(min = 1, max = 5000))]
    pub achievements: String,

    #[validate(length(max = 5000))]
    #[serde(default)]
    pub challenges: String,

    #[validate(length(max = 5000))]
    #[serde(default)]
    pub learnings: String,

    #[validate(length(min = 1, max = 5000))]
    pub next_steps: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn report(mood: i16) -> SubmitDailyReport {
        SubmitDailyReport {
            mood,
            achievements: "Finished the onboarding doc".to_string(),
            challenges: String::new(),
            learnings: String::new(),
            next_steps: "Start the first ticket".to_string(),
        }
    }

    #[test]
    fn test_mood_bounds() {
        assert!(report(1).validate().is_ok());
        assert!(report(5).validate().is_ok());
        assert!(report(0).validate().is_err());
        assert!(report(6).validate().is_err());
    }
}

use crate::error::{Result, ServiceError};
use crate::notification::NotificationService;
use chrono::Utc;
use mentorship_database::{Database, MemberRepository, ReportRepository};
use mentorship_models::{roles, DailyReport, SubmitDailyReport};
use uuid::Uuid;
use validator::Validate;

pub struct ReportService {
    report_repo: ReportRepository,
    member_repo: MemberRepository,
    notifications: NotificationService,
}

impl ReportService {
    pub fn new(db: &Database, notifications: NotificationService) -> Self {
        let pool = db.pool().clone();

        Self {
            report_repo: ReportRepository::new(pool.clone()),
            member_repo: MemberRepository::new(pool),
            notifications,
        }
    }

    /// Submit today's report. One per mentee per day; the assigned
    /// mentor is notified.
    pub async fn submit(
        &self,
        mentee_id: Uuid,
        request: &SubmitDailyReport,
    ) -> Result<DailyReport> {
        request.validate()?;

        let mentee = self.member_repo.find_by_id(mentee_id).await?;
        if mentee.role != roles::MENTEE {
            return Err(ServiceError::Forbidden(
                "only mentees can submit daily reports".to_string(),
            ));
        }

        let today = Utc::now().date_naive();
        if self
            .report_repo
            .find_by_mentee_and_date(mentee_id, today)
            .await?
            .is_some()
        {
            return Err(ServiceError::AlreadyExists(
                "a report for today already exists".to_string(),
            ));
        }

        let report = self.report_repo.create(mentee_id, today, request).await?;

        if let Some(mentor) = self.member_repo.current_mentor(mentee_id).await? {
            self.notifications
                .notify_report_submitted(&mentor, &mentee)
                .await;
        }

        Ok(report)
    }

    /// A mentee's report history, newest first.
    pub async fn history(&self, mentee_id: Uuid) -> Result<Vec<DailyReport>> {
        Ok(self.report_repo.list_for_mentee(mentee_id).await?)
    }

    /// Leave feedback on a report. Restricted to the mentee's currently
    /// assigned mentor.
    pub async fn add_feedback(
        &self,
        mentor_id: Uuid,
        report_id: Uuid,
        feedback: &str,
    ) -> Result<DailyReport> {
        if feedback.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "feedback cannot be blank".to_string(),
            ));
        }

        let report = self.report_repo.find_by_id(report_id).await?;
        let current = self.member_repo.current_mentor(report.mentee_id).await?;

        match current {
            Some(mentor) if mentor.id == mentor_id => {}
            _ => {
                return Err(ServiceError::Forbidden(
                    "only the assigned mentor can leave feedback".to_string(),
                ))
            }
        }

        Ok(self
            .report_repo
            .set_feedback(report_id, feedback.trim())
            .await?)
    }

    /// Today's reports across all of a mentor's active mentees.
    pub async fn reports_for_mentor(&self, mentor_id: Uuid) -> Result<Vec<DailyReport>> {
        let mentor = self.member_repo.find_by_id(mentor_id).await?;
        if mentor.role != roles::MENTOR {
            return Err(ServiceError::Forbidden(
                "only mentors can review mentee reports".to_string(),
            ));
        }

        let mentees = self.member_repo.active_mentees(mentor_id).await?;
        let mentee_ids: Vec<Uuid> = mentees.iter().map(|m| m.id).collect();
        if mentee_ids.is_empty() {
            return Ok(Vec::new());
        }

        let today = Utc::now().date_naive();
        Ok(self
            .report_repo
            .reports_for_mentees(&mentee_ids, today)
            .await?)
    }
}

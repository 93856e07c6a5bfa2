use crate::email::{templates, EmailMessage, EmailService};
use crate::error::{Result, ServiceError};
use crate::sms::{SmsMessage, SmsService};
use mentorship_database::{
    Database, MemberRepository, NotificationRepository, OrganizationRepository,
};
use mentorship_models::{notification_types, trigger_events, Member, NewNotification, Notification};
use uuid::Uuid;

/// Records and delivers notifications. Delivery is strictly
/// fire-and-forget: a failure is written to the notification row and
/// logged, and never reaches the operation that triggered it.
#[derive(Clone)]
pub struct NotificationService {
    notification_repo: NotificationRepository,
    member_repo: MemberRepository,
    org_repo: OrganizationRepository,
    email: EmailService,
    sms: Option<SmsService>,
}

impl NotificationService {
    pub fn new(db: &Database, email: EmailService, sms: Option<SmsService>) -> Self {
        let pool = db.pool().clone();

        Self {
            notification_repo: NotificationRepository::new(pool.clone()),
            member_repo: MemberRepository::new(pool.clone()),
            org_repo: OrganizationRepository::new(pool),
            email,
            sms,
        }
    }

    /// Record a notification, then attempt delivery on the given
    /// channel. Errors end up on the row, not at the caller.
    pub async fn notify(
        &self,
        recipient: &Member,
        notification_type: &str,
        trigger_event: &str,
        subject: &str,
        text_body: &str,
        html_body: Option<String>,
    ) {
        let new = NewNotification {
            recipient_id: recipient.id,
            notification_type: notification_type.to_string(),
            trigger_event: trigger_event.to_string(),
            subject: subject.to_string(),
            message: text_body.to_string(),
        };

        let notification = match self.notification_repo.create(&new).await {
            Ok(notification) => notification,
            Err(e) => {
                tracing::error!(
                    recipient_id = %recipient.id,
                    trigger_event,
                    "failed to record notification: {}",
                    e
                );
                return;
            }
        };

        let delivery = self
            .deliver(recipient, notification_type, subject, text_body, html_body)
            .await;

        match delivery {
            Ok(()) => {
                if let Err(e) = self.notification_repo.mark_sent(notification.id).await {
                    tracing::error!(
                        notification_id = %notification.id,
                        "failed to mark notification sent: {}",
                        e
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    notification_id = %notification.id,
                    recipient_id = %recipient.id,
                    trigger_event,
                    "notification delivery failed: {}",
                    e
                );
                if let Err(record_err) = self
                    .notification_repo
                    .record_failure(notification.id, &e.to_string())
                    .await
                {
                    tracing::error!(
                        notification_id = %notification.id,
                        "failed to record delivery failure: {}",
                        record_err
                    );
                }
            }
        }
    }

    async fn deliver(
        &self,
        recipient: &Member,
        notification_type: &str,
        subject: &str,
        text_body: &str,
        html_body: Option<String>,
    ) -> Result<()> {
        match notification_type {
            notification_types::EMAIL => {
                if !recipient.email_notifications_enabled {
                    return Err(ServiceError::InvalidInput(
                        "email notifications disabled for recipient".to_string(),
                    ));
                }

                self.email
                    .send(EmailMessage {
                        to: recipient.email.clone(),
                        to_name: Some(recipient.display_name.clone()),
                        subject: subject.to_string(),
                        text_body: text_body.to_string(),
                        html_body,
                    })
                    .await
            }
            notification_types::SMS => {
                let sms = self.sms.as_ref().ok_or_else(|| {
                    ServiceError::Internal("SMS provider not configured".to_string())
                })?;

                if !recipient.sms_notifications_enabled {
                    return Err(ServiceError::InvalidInput(
                        "SMS notifications disabled for recipient".to_string(),
                    ));
                }

                let phone = recipient.phone_number.as_ref().ok_or_else(|| {
                    ServiceError::InvalidInput("recipient has no phone number".to_string())
                })?;

                sms.send(SmsMessage {
                    to: phone.clone(),
                    message: text_body.to_string(),
                })
                .await
            }
            // The recorded row itself is the delivery.
            notification_types::IN_APP => Ok(()),
            other => Err(ServiceError::InvalidInput(format!(
                "unknown notification type: {}",
                other
            ))),
        }
    }

    /// Email the recipient, plus an SMS when they opted in.
    async fn notify_event(
        &self,
        recipient: &Member,
        trigger_event: &str,
        subject: &str,
        text_body: &str,
        html_body: Option<String>,
    ) {
        self.notify(
            recipient,
            notification_types::EMAIL,
            trigger_event,
            subject,
            text_body,
            html_body,
        )
        .await;

        if recipient.sms_notifications_enabled && recipient.phone_number.is_some() {
            self.notify(
                recipient,
                notification_types::SMS,
                trigger_event,
                subject,
                text_body,
                None,
            )
            .await;
        }
    }

    /// Tell a mentor and their new mentee about a fresh assignment.
    pub async fn notify_assignment(&self, mentor: &Member, mentee: &Member) {
        let organization_name = match mentor.organization_id {
            Some(org_id) => match self.org_repo.find_by_id(org_id).await {
                Ok(org) => org.name,
                Err(_) => "your organization".to_string(),
            },
            None => "your organization".to_string(),
        };

        let (text, html) = templates::mentor_assigned_mentor(
            &mentor.display_name,
            &mentee.display_name,
            &organization_name,
        );
        self.notify_event(
            mentor,
            trigger_events::MENTOR_ASSIGNED,
            &format!("New Mentee Assigned: {}", mentee.display_name),
            &text,
            Some(html),
        )
        .await;

        let (text, html) = templates::mentor_assigned_mentee(
            &mentee.display_name,
            &mentor.display_name,
            &organization_name,
        );
        self.notify_event(
            mentee,
            trigger_events::MENTOR_ASSIGNED,
            &format!("Your Mentor: {}", mentor.display_name),
            &text,
            Some(html),
        )
        .await;
    }

    pub async fn notify_todo_submitted(&self, mentor: &Member, mentee: &Member) {
        let (text, html) =
            templates::todo_submitted(&mentor.display_name, &mentee.display_name);
        self.notify_event(
            mentor,
            trigger_events::TODO_SUBMITTED,
            &format!("Todo List Submitted by {}", mentee.display_name),
            &text,
            Some(html),
        )
        .await;
    }

    pub async fn notify_report_submitted(&self, mentor: &Member, mentee: &Member) {
        let (text, html) =
            templates::report_submitted(&mentor.display_name, &mentee.display_name);
        self.notify_event(
            mentor,
            trigger_events::REPORT_SUBMITTED,
            &format!("Daily Report Submitted by {}", mentee.display_name),
            &text,
            Some(html),
        )
        .await;
    }

    pub async fn notify_message_received(&self, recipient: &Member, sender: &Member) {
        let (text, html) =
            templates::message_received(&recipient.display_name, &sender.display_name);
        self.notify_event(
            recipient,
            trigger_events::MESSAGE_RECEIVED,
            &format!("New Message from {}", sender.display_name),
            &text,
            Some(html),
        )
        .await;
    }

    /// Morning sweep: ask every opted-in mentee to plan their day.
    /// Returns how many mentees were contacted.
    pub async fn send_morning_reminders(&self) -> Result<usize> {
        let mentees = self.member_repo.mentees_with_email_enabled().await?;

        for mentee in &mentees {
            let (text, html) = templates::morning_reminder(&mentee.display_name);
            self.notify(
                mentee,
                notification_types::EMAIL,
                trigger_events::MORNING_REMINDER,
                "Good Morning! Time to Plan Your Day",
                &text,
                Some(html),
            )
            .await;
        }

        tracing::info!("morning reminders sent to {} mentees", mentees.len());
        Ok(mentees.len())
    }

    /// Evening sweep: ask every opted-in mentee for their daily report.
    pub async fn send_evening_reminders(&self) -> Result<usize> {
        let mentees = self.member_repo.mentees_with_email_enabled().await?;

        for mentee in &mentees {
            let (text, html) = templates::evening_reminder(&mentee.display_name);
            self.notify(
                mentee,
                notification_types::EMAIL,
                trigger_events::EVENING_REMINDER,
                "How Did Your Day Go?",
                &text,
                Some(html),
            )
            .await;
        }

        tracing::info!("evening reminders sent to {} mentees", mentees.len());
        Ok(mentees.len())
    }

    /// A member's notifications, newest first.
    pub async fn list(&self, recipient_id: Uuid) -> Result<Vec<Notification>> {
        Ok(self
            .notification_repo
            .list_for_recipient(recipient_id)
            .await?)
    }

    /// Mark one of the recipient's notifications read.
    pub async fn mark_read(&self, id: Uuid, recipient_id: Uuid) -> Result<()> {
        let updated = self.notification_repo.mark_read(id, recipient_id).await?;
        if !updated {
            return Err(ServiceError::NotFound(
                "notification not found or already read".to_string(),
            ));
        }

        Ok(())
    }
}

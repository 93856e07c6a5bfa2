//! Business logic for the mentorship platform.
//!
//! The assignment policy in [`assignment`] depends only on the narrow
//! `MentorDirectory`/`AssignmentStore` contracts, so it is unit-testable
//! without a database; everything else composes the Postgres
//! repositories directly.

// We intentionally use native `async fn` in traits; the policy traits
// are consumed inside this workspace only.
#![allow(async_fn_in_trait)]

pub mod assignment;
pub mod email;
pub mod error;
pub mod join_code;
pub mod member;
pub mod messaging;
pub mod notification;
pub mod organization;
pub mod report;
pub mod sms;
pub mod todo;

pub use assignment::{
    AssignmentOutcome, AssignmentPolicy, AssignmentService, AssignmentStore, MentorDirectory,
};
pub use email::{EmailMessage, EmailProvider, EmailService};
pub use error::{Result, ServiceError};
pub use member::{MemberDashboard, MemberProfile, MemberService};
pub use messaging::{can_message, MessagingService};
pub use notification::NotificationService;
pub use organization::{JoinOutcome, OrganizationRoster, OrganizationService};
pub use report::ReportService;
pub use sms::{SmsMessage, SmsProvider, SmsService};
pub use todo::{TodoListWithItems, TodoService};

pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{Database, DatabaseConfig};
pub use error::{DatabaseError, Result};
pub use repositories::{
    assignments::AssignmentRepository,
    conversations::ConversationRepository,
    members::MemberRepository,
    notifications::NotificationRepository,
    organizations::OrganizationRepository,
    reports::ReportRepository,
    todos::TodoRepository,
};

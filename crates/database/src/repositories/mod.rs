pub mod assignments;
pub mod conversations;
pub mod members;
pub mod notifications;
pub mod organizations;
pub mod reports;
pub mod todos;

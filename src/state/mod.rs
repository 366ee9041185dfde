//! State Management
//!
//! Session, work-log cache, and toast notifications.

pub mod notify;
pub mod session;
pub mod worklogs;

pub use notify::{provide_notifications, Notifications};
pub use session::{provide_session, AuthState, Role, Session, User};
pub use worklogs::{provide_work_logs, WorkLog, WorkLogDraft, WorkLogStatus, WorkLogStore};

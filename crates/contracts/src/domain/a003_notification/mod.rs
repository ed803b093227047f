pub mod aggregate;

pub use aggregate::{mark_as_read_path, Notification, NotificationId, NotificationKind};

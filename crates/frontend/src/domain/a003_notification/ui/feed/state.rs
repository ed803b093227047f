use std::collections::HashSet;

use contracts::domain::a003_notification::{Notification, NotificationId, NotificationKind};

pub const MARKED_MESSAGE: &str = "Notification marked as read";

/// Both unread lists plus per-notification acknowledgement state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    low_stock: Vec<Notification>,
    expiry: Vec<Notification>,
    marking: HashSet<NotificationId>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    success_ticket: u64,
}

impl FeedState {
    pub fn list(&self, kind: NotificationKind) -> &[Notification] {
        match kind {
            NotificationKind::LowStock => &self.low_stock,
            NotificationKind::Expiry => &self.expiry,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.low_stock.is_empty() && self.expiry.is_empty()
    }

    pub fn set_lists(&mut self, low_stock: Vec<Notification>, expiry: Vec<Notification>) {
        self.low_stock = low_stock;
        self.expiry = expiry;
        self.loading = false;
    }

    pub fn load_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn is_marking(&self, id: NotificationId) -> bool {
        self.marking.contains(&id)
    }

    /// `false` if this id is already being marked
    pub fn begin_marking(&mut self, id: NotificationId) -> bool {
        self.marking.insert(id)
    }

    /// Apply the outcome of a mark request. On success the notification
    /// leaves both lists and the returned ticket identifies the success
    /// message for [`FeedState::clear_success`].
    pub fn finish_marking(&mut self, id: NotificationId, result: Result<(), String>) -> Option<u64> {
        self.marking.remove(&id);
        match result {
            Ok(()) => {
                self.low_stock.retain(|n| n.id != id);
                self.expiry.retain(|n| n.id != id);
                self.error = None;
                self.success = Some(MARKED_MESSAGE.to_string());
                self.success_ticket += 1;
                Some(self.success_ticket)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    /// Clears the success message unless a newer one replaced it
    pub fn clear_success(&mut self, ticket: u64) -> bool {
        if ticket != self.success_ticket || self.success.is_none() {
            return false;
        }
        self.success = None;
        true
    }
}

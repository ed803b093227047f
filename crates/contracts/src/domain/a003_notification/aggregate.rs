use serde::{Deserialize, Serialize};

pub type NotificationId = i64;

/// Категория непрочитанных уведомлений; each is served by its own endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    LowStock,
    Expiry,
}

impl NotificationKind {
    pub fn all() -> [NotificationKind; 2] {
        [NotificationKind::LowStock, NotificationKind::Expiry]
    }

    pub fn unread_path(&self) -> &'static str {
        match self {
            NotificationKind::LowStock => "/notifications/unread",
            NotificationKind::Expiry => "/notifications/unread/expiry",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::LowStock => "Low Stock Notifications",
            NotificationKind::Expiry => "Expiry Notifications",
        }
    }
}

/// Unread alert as returned by `/notifications/unread*`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "articleId", default)]
    pub article_id: Option<i64>,
    /// Article name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "read", alias = "isRead", default)]
    pub is_read: bool,
    #[serde(rename = "dateTime", default)]
    pub date_time: Option<String>,
}

pub fn mark_as_read_path(id: NotificationId) -> String {
    format!("/notifications/markAsRead/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_notification() {
        let json = r#"{
            "id": 7,
            "message": "Stock is getting low for item: Pen",
            "articleId": 11,
            "name": "Pen",
            "read": false,
            "dateTime": "2024-03-15T14:02:26"
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();

        assert_eq!(n.id, 7);
        assert_eq!(n.article_id, Some(11));
        assert_eq!(n.name.as_deref(), Some("Pen"));
        assert!(!n.is_read);
    }

    #[test]
    fn test_is_read_alias_and_minimal_body() {
        let n: Notification = serde_json::from_str(r#"{ "id": 3, "isRead": true }"#).unwrap();
        assert!(n.is_read);
        assert_eq!(n.message, "");
        assert_eq!(n.date_time, None);
    }

    #[test]
    fn test_paths() {
        assert_eq!(NotificationKind::LowStock.unread_path(), "/notifications/unread");
        assert_eq!(NotificationKind::Expiry.unread_path(), "/notifications/unread/expiry");
        assert_eq!(mark_as_read_path(7), "/notifications/markAsRead/7");
    }
}

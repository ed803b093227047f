use contracts::domain::a003_notification::{mark_as_read_path, Notification, NotificationId, NotificationKind};

use crate::shared::api_utils::{api_url, get_json, post_empty, ApiError};

pub async fn fetch_unread(
    base: &str,
    access_token: Option<&str>,
    kind: NotificationKind,
) -> Result<Vec<Notification>, ApiError> {
    let url = api_url(base, kind.unread_path());
    log::debug!("Fetching {:?} notifications: {}", kind, url);
    get_json(&url, access_token).await
}

/// `POST /notifications/markAsRead/{id}`
pub async fn mark_as_read(
    base: &str,
    access_token: Option<&str>,
    id: NotificationId,
) -> Result<(), ApiError> {
    let url = api_url(base, &mark_as_read_path(id));
    post_empty(&url, access_token).await
}

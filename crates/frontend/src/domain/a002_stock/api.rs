use contracts::domain::a002_stock::StockBatch;

use crate::shared::api_utils::{api_url, get_json, ApiError};

/// `GET /stock`, returned in backend order
pub async fn fetch_stock(base: &str, access_token: Option<&str>) -> Result<Vec<StockBatch>, ApiError> {
    let url = api_url(base, "/stock");
    log::debug!("Fetching stock: {}", url);
    get_json(&url, access_token).await
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Партия товара на складе (`GET /stock`)
///
/// The backend has shipped both camelCase and snake_case keys for the same
/// fields, so every renamed field also accepts its snake_case alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBatch {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "batchId", alias = "batch_id")]
    pub batch_id: String,
    pub quantity: i64,
    /// `None` when the backend sent no date or one that could not be read
    #[serde(
        rename = "entryDate",
        alias = "entry_date",
        default,
        deserialize_with = "deserialize_entry_date"
    )]
    pub entry_date: Option<DateTime<Utc>>,
    #[serde(rename = "salePrice", alias = "sale_price", default)]
    pub sale_price: Option<f64>,

    // Optional fields of the full stock DTO
    #[serde(rename = "articleId", alias = "article_id", default)]
    pub article_id: Option<i64>,
    #[serde(rename = "articleName", alias = "article_name", default)]
    pub article_name: Option<String>,
    #[serde(rename = "stockQuantity", alias = "stock_quantity", default)]
    pub stock_quantity: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "purchasePrice", alias = "purchase_price", default)]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntryDate {
    Millis(i64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Entry dates arrive either as epoch milliseconds or as ISO-8601 text.
/// Null, out-of-range or unreadable values decode as `None` so one bad row
/// does not fail the whole list.
fn deserialize_entry_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match RawEntryDate::deserialize(deserializer)? {
        RawEntryDate::Millis(ms) => Utc.timestamp_millis_opt(ms).single(),
        RawEntryDate::Text(text) => parse_entry_date(&text),
        RawEntryDate::Other(_) => None,
    };
    Ok(parsed)
}

/// Parse an entry date: RFC 3339, naive `T`/space separated datetime
/// (read as UTC), or a bare date at midnight.
pub fn parse_entry_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Oldest batch first, undated batches last; ties keep their source order
pub fn sort_by_entry_date(batches: &mut [StockBatch]) {
    batches.sort_by_key(|b| (b.entry_date.is_none(), b.entry_date));
}

use serde::{Deserialize, Serialize};

use crate::domain::common::PayloadError;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор артикула (`articleId` на стороне API)
pub type ArticleId = i64;

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    #[serde(default)]
    pub category_id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRef {
    #[serde(default)]
    pub provider_id: Option<i64>,
    pub name: String,
}

/// Catalog item available for purchase or sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub article_id: ArticleId,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub provider: Option<ProviderRef>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub sale_price: Option<f64>,
}

/// Which price of an article an order is valued at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    Purchase,
    Sale,
}

impl Article {
    pub fn price(&self, field: PriceField) -> Option<f64> {
        match field {
            PriceField::Purchase => self.purchase_price,
            PriceField::Sale => self.sale_price,
        }
    }

    pub fn brand_name(&self) -> &str {
        self.brand.as_deref().unwrap_or("")
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("N/A")
    }

    pub fn provider_name(&self) -> &str {
        self.provider.as_ref().map(|p| p.name.as_str()).unwrap_or("N/A")
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}

// ============================================================================
// Search request / paginated response
// ============================================================================

/// Query parameters of `GET /article`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<i64>,
    pub page: u32,
    pub page_size: u32,
}

impl ArticleQuery {
    /// Blank search terms are dropped; page and page size are at least 1
    /// because the backend rejects anything lower.
    pub fn new(search: &str, provider_id: Option<i64>, page: u32, page_size: u32) -> Self {
        let search = search.trim();
        Self {
            search_criteria: (!search.is_empty()).then(|| search.to_string()),
            provider_id,
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn search_text(&self) -> &str {
        self.search_criteria.as_deref().unwrap_or("")
    }
}

/// Body of `GET /article` exactly as the backend sends it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesPageResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_records: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub articles: Option<Vec<Article>>,
}

/// One page of catalog results together with the query that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ArticlesPage {
    pub articles: Vec<Article>,
    pub page: u32,
    pub page_size: u32,
    pub total_records: u64,
    pub total_pages: u32,
    pub query: String,
}

impl ArticlesPage {
    pub fn empty(query: &ArticleQuery) -> Self {
        Self {
            articles: Vec::new(),
            page: query.page,
            page_size: query.page_size,
            total_records: 0,
            total_pages: 1,
            query: query.search_text().to_string(),
        }
    }

    /// Missing paging metadata falls back to the request; a missing
    /// `articles` list is a contract violation.
    pub fn from_response(
        response: ArticlesPageResponse,
        query: &ArticleQuery,
    ) -> Result<Self, PayloadError> {
        let articles = response
            .articles
            .ok_or(PayloadError::MissingField("Articles"))?;
        let total_records = response.total_records.unwrap_or(articles.len() as u64);

        Ok(Self {
            page: response.page.unwrap_or(query.page).max(1),
            page_size: response.page_size.unwrap_or(query.page_size).max(1),
            total_pages: response.total_pages.unwrap_or(1).max(1),
            total_records,
            articles,
            query: query.search_text().to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "page": 2,
        "pageSize": 5,
        "totalRecords": 7,
        "totalPages": 2,
        "articles": [
            {
                "articleId": 11,
                "name": "Pen",
                "brand": "Bic",
                "category": { "categoryId": 1, "name": "Stationery" },
                "provider": { "providerId": 3, "name": "Acme" },
                "stock": 4,
                "purchasePrice": 10.5,
                "salePrice": 15.0
            },
            {
                "articleId": 12,
                "name": "Eraser",
                "brand": null,
                "stock": 0,
                "salePrice": null
            }
        ]
    }"#;

    #[test]
    fn test_decode_page() {
        let query = ArticleQuery::new("pe", Some(3), 2, 5);
        let response: ArticlesPageResponse = serde_json::from_str(PAGE_JSON).unwrap();
        let page = ArticlesPage::from_response(response, &query).unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.total_records, 7);
        assert_eq!(page.query, "pe");
        assert_eq!(page.articles.len(), 2);

        let pen = &page.articles[0];
        assert_eq!(pen.category_name(), "Stationery");
        assert_eq!(pen.provider_name(), "Acme");
        assert_eq!(pen.price(PriceField::Purchase), Some(10.5));
        assert_eq!(pen.price(PriceField::Sale), Some(15.0));

        let eraser = &page.articles[1];
        assert_eq!(eraser.brand_name(), "");
        assert_eq!(eraser.category_name(), "N/A");
        assert_eq!(eraser.provider_name(), "N/A");
        assert_eq!(eraser.price(PriceField::Sale), None);
        assert!(eraser.is_out_of_stock());
    }

    #[test]
    fn test_missing_articles_is_payload_error() {
        let query = ArticleQuery::new("", None, 1, 5);
        let response: ArticlesPageResponse =
            serde_json::from_str(r#"{ "page": 1, "pageSize": 5 }"#).unwrap();

        let err = ArticlesPage::from_response(response, &query).unwrap_err();
        assert_eq!(err, PayloadError::MissingField("Articles"));
        assert_eq!(err.to_string(), "Articles data is missing");
    }

    #[test]
    fn test_page_metadata_falls_back_to_query() {
        let query = ArticleQuery::new("", None, 3, 5);
        let response: ArticlesPageResponse =
            serde_json::from_str(r#"{ "articles": [] }"#).unwrap();
        let page = ArticlesPage::from_response(response, &query).unwrap();

        assert_eq!(page.page, 3);
        assert_eq!(page.page_size, 5);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_records, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_query_normalisation() {
        let query = ArticleQuery::new("   ", None, 0, 0);
        assert_eq!(query.search_criteria, None);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 1);

        let query = ArticleQuery::new("  glue ", Some(9), 4, 5);
        assert_eq!(query.search_text(), "glue");
        assert_eq!(query.provider_id, Some(9));
    }
}

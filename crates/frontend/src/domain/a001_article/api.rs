use contracts::domain::a001_article::{ArticleQuery, ArticlesPage, ArticlesPageResponse};

use crate::shared::api_utils::{api_url, get_json, ApiError};

/// `GET /article?searchCriteria&providerId&page&pageSize`
pub fn article_url(base: &str, query: &ArticleQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(format!("{}?{}", api_url(base, "/article"), qs))
}

/// Fetch one catalog page. A body without `articles` is rejected.
pub async fn fetch_articles(
    base: &str,
    access_token: Option<&str>,
    query: &ArticleQuery,
) -> Result<ArticlesPage, ApiError> {
    let url = article_url(base, query)?;
    log::debug!("Fetching articles: {}", url);

    let response: ArticlesPageResponse = get_json(&url, access_token).await?;
    Ok(ArticlesPage::from_response(response, query)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_url_full_query() {
        let query = ArticleQuery::new("pen", Some(3), 1, 5);
        assert_eq!(
            article_url("http://localhost:8080", &query).unwrap(),
            "http://localhost:8080/article?searchCriteria=pen&providerId=3&page=1&pageSize=5"
        );
    }

    #[test]
    fn test_article_url_omits_blank_search_and_provider() {
        let query = ArticleQuery::new("  ", None, 2, 5);
        assert_eq!(
            article_url("http://localhost:8080", &query).unwrap(),
            "http://localhost:8080/article?page=2&pageSize=5"
        );
    }
}

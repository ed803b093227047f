use contracts::domain::a001_article::{Article, ArticleQuery, PriceField};

use super::selection::StockCapPolicy;

/// Configuration of the item selection widget for one order flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionVariant {
    /// Price the order is valued at
    pub price_field: PriceField,
    /// Catalog is filtered by provider and stays inert until one is chosen
    pub requires_provider: bool,
    /// Articles with zero stock cannot be selected
    pub disable_out_of_stock: bool,
    /// Quantity input advertises the stock level as its maximum
    pub stock_as_max: bool,
    pub stock_cap: StockCapPolicy,
    pub summary_title: &'static str,
    pub empty_text: &'static str,
}

impl SelectionVariant {
    pub const PURCHASE: SelectionVariant = SelectionVariant {
        price_field: PriceField::Purchase,
        requires_provider: true,
        disable_out_of_stock: false,
        stock_as_max: false,
        stock_cap: StockCapPolicy::Advisory,
        summary_title: "PURCHASE SUMMARY",
        empty_text: "No result found.",
    };

    pub const SALE: SelectionVariant = SelectionVariant {
        price_field: PriceField::Sale,
        requires_provider: false,
        disable_out_of_stock: true,
        stock_as_max: true,
        stock_cap: StockCapPolicy::Advisory,
        summary_title: "SALES SUMMARY",
        empty_text: "No result found.",
    };

    pub fn with_stock_cap(self, stock_cap: StockCapPolicy) -> Self {
        Self { stock_cap, ..self }
    }

    /// Request for the current inputs, or `None` while a required provider
    /// is missing (no request is issued at all then).
    pub fn catalog_query(
        &self,
        search: &str,
        provider_id: Option<i64>,
        page: u32,
        page_size: u32,
    ) -> Option<ArticleQuery> {
        if !self.requires_provider {
            return Some(ArticleQuery::new(search, None, page, page_size));
        }
        let provider_id = provider_id?;
        Some(ArticleQuery::new(search, Some(provider_id), page, page_size))
    }

    pub fn is_selectable(&self, article: &Article) -> bool {
        !(self.disable_out_of_stock && article.is_out_of_stock())
    }

    pub fn quantity_max(&self, article: &Article) -> Option<u32> {
        self.stock_as_max.then_some(article.stock)
    }
}

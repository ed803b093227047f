pub mod aggregate;

pub use aggregate::{
    Article, ArticleId, ArticleQuery, ArticlesPage, ArticlesPageResponse, CategoryRef, PriceField,
    ProviderRef,
};

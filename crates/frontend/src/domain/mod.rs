pub mod a001_article;
pub mod a002_stock;
pub mod a003_notification;

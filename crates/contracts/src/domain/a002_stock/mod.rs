pub mod aggregate;

pub use aggregate::{parse_entry_date, sort_by_entry_date, StockBatch};

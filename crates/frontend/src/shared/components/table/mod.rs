pub mod number_format;

pub use number_format::{format_currency, format_number_int, format_number_with_decimals, format_price};

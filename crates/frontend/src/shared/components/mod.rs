pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod table;
pub mod table_checkbox;
pub mod table_totals_row;

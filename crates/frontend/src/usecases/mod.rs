pub mod u101_new_purchase;
pub mod u102_new_sale;

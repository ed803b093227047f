pub mod view;

pub use view::NewPurchasePage;

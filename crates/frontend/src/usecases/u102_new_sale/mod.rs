pub mod view;

pub use view::NewSalePage;

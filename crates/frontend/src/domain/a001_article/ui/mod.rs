pub mod item_selection;

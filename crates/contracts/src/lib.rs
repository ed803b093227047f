//! Wire contracts shared between the inventory UI and the backend API.

pub mod domain;
pub mod system;

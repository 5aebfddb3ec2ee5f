//! Restaurant domain model and in-memory store.

pub mod model;
pub mod store;

pub use model::{CreateRestaurant, Restaurant, UpdateRestaurant};
pub use store::RestaurantStore;

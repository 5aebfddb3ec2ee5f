//! In-memory restaurant store.

use dashmap::DashMap;
use time::OffsetDateTime;
use uuid::Uuid;

use super::model::{CreateRestaurant, Restaurant, UpdateRestaurant};

/// Concurrent in-memory store keyed by restaurant id.
///
/// Handlers hold the store behind an `Arc` and access it directly from
/// concurrent requests; DashMap shards the locking.
#[derive(Debug, Default)]
pub struct RestaurantStore {
    restaurants: DashMap<Uuid, Restaurant>,
}

impl RestaurantStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            restaurants: DashMap::new(),
        }
    }

    /// Insert a new restaurant from a validated payload.
    pub fn insert(&self, payload: CreateRestaurant) -> Restaurant {
        let now = OffsetDateTime::now_utc();
        let restaurant = Restaurant {
            id: Uuid::new_v4(),
            name: payload.name,
            cuisine: payload.cuisine,
            address: payload.address,
            rating: payload.rating,
            created_at: now,
            updated_at: now,
        };
        self.restaurants.insert(restaurant.id, restaurant.clone());
        restaurant
    }

    /// Fetch a restaurant by id.
    pub fn get(&self, id: Uuid) -> Option<Restaurant> {
        self.restaurants.get(&id).map(|entry| entry.clone())
    }

    /// List restaurants, optionally filtered by cuisine
    /// (case-insensitive exact match). Order is deterministic:
    /// creation time, then id.
    pub fn list(&self, cuisine: Option<&str>) -> Vec<Restaurant> {
        let mut restaurants: Vec<Restaurant> = self
            .restaurants
            .iter()
            .filter(|entry| match cuisine {
                Some(wanted) => entry.cuisine.eq_ignore_ascii_case(wanted),
                None => true,
            })
            .map(|entry| entry.clone())
            .collect();

        restaurants.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        restaurants
    }

    /// Apply a validated update to an existing restaurant. Returns the
    /// updated record, or `None` if the id is unknown.
    pub fn update(&self, id: Uuid, payload: UpdateRestaurant) -> Option<Restaurant> {
        let mut entry = self.restaurants.get_mut(&id)?;

        if let Some(name) = payload.name {
            entry.name = name;
        }
        if let Some(cuisine) = payload.cuisine {
            entry.cuisine = cuisine;
        }
        if let Some(address) = payload.address {
            entry.address = address;
        }
        if let Some(rating) = payload.rating {
            entry.rating = Some(rating);
        }
        entry.updated_at = OffsetDateTime::now_utc();

        Some(entry.clone())
    }

    /// Remove a restaurant. Returns true if it existed.
    pub fn remove(&self, id: Uuid) -> bool {
        self.restaurants.remove(&id).is_some()
    }

    /// Number of stored restaurants.
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// True if no restaurants are stored.
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn payload(name: &str, cuisine: &str) -> CreateRestaurant {
        CreateRestaurant {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            address: "1 Main St".to_string(),
            rating: None,
        }
    }

    #[test]
    fn insert_then_get_round_trips() {
        let store = RestaurantStore::new();
        let created = store.insert(payload("Trattoria Roma", "italian"));

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched.name, "Trattoria Roma");
        assert_eq!(fetched.created_at, fetched.updated_at);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_unknown_id_returns_none() {
        let store = RestaurantStore::new();
        assert!(store.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn list_filters_by_cuisine_case_insensitively() {
        let store = RestaurantStore::new();
        store.insert(payload("Trattoria Roma", "Italian"));
        store.insert(payload("Sakura", "japanese"));
        store.insert(payload("Osteria Due", "italian"));

        assert_eq!(store.list(None).len(), 3);
        assert_eq!(store.list(Some("ITALIAN")).len(), 2);
        assert_eq!(store.list(Some("french")).len(), 0);
    }

    #[test]
    fn list_order_is_deterministic() {
        let store = RestaurantStore::new();
        for i in 0..10 {
            store.insert(payload(&format!("r{i}"), "any"));
        }

        let first = store.list(None);
        let second = store.list(None);
        let ids: Vec<Uuid> = first.iter().map(|r| r.id).collect();
        let ids_again: Vec<Uuid> = second.iter().map(|r| r.id).collect();
        assert_eq!(ids, ids_again);
    }

    #[test]
    fn update_changes_only_provided_fields() {
        let store = RestaurantStore::new();
        let created = store.insert(payload("Sakura", "japanese"));

        let updated = store
            .update(
                created.id,
                UpdateRestaurant {
                    rating: Some(dec!(4.5)),
                    ..UpdateRestaurant::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Sakura");
        assert_eq!(updated.rating, Some(dec!(4.5)));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn update_unknown_id_returns_none() {
        let store = RestaurantStore::new();
        assert!(store
            .update(Uuid::new_v4(), UpdateRestaurant::default())
            .is_none());
    }

    #[test]
    fn remove_deletes_the_record() {
        let store = RestaurantStore::new();
        let created = store.insert(payload("Sakura", "japanese"));

        assert!(store.remove(created.id));
        assert!(!store.remove(created.id));
        assert!(store.get(created.id).is_none());
        assert!(store.is_empty());
    }
}

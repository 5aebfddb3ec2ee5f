//! Restaurant data model and payload validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Maximum length of a restaurant name.
pub const NAME_MAX_LEN: usize = 120;
/// Maximum length of a cuisine label.
pub const CUISINE_MAX_LEN: usize = 60;
/// Maximum length of an address.
pub const ADDRESS_MAX_LEN: usize = 200;

/// A restaurant record as stored and served.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Cuisine label (e.g. "italian").
    pub cuisine: String,
    /// Street address.
    pub address: String,
    /// Rating in [0, 5], if rated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Decimal>,
    /// Creation time (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last modification time (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Payload for creating a restaurant.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRestaurant {
    /// Display name.
    pub name: String,
    /// Cuisine label.
    pub cuisine: String,
    /// Street address.
    pub address: String,
    /// Optional rating in [0, 5].
    #[serde(default)]
    pub rating: Option<Decimal>,
}

/// Payload for updating a restaurant. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRestaurant {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New cuisine label.
    #[serde(default)]
    pub cuisine: Option<String>,
    /// New street address.
    #[serde(default)]
    pub address: Option<String>,
    /// New rating in [0, 5].
    #[serde(default)]
    pub rating: Option<Decimal>,
}

fn check_text(errors: &mut Vec<String>, field: &str, value: &str, max_len: usize) {
    if value.trim().is_empty() {
        errors.push(format!("{field} must not be empty"));
    } else if value.len() > max_len {
        errors.push(format!("{field} must be at most {max_len} characters"));
    }
}

fn check_rating(errors: &mut Vec<String>, rating: Decimal) {
    if rating < Decimal::ZERO || rating > Decimal::from(5) {
        errors.push(format!("rating must be between 0 and 5, got {rating}"));
    }
}

impl CreateRestaurant {
    /// Validate the payload, collecting every failing field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        check_text(&mut errors, "name", &self.name, NAME_MAX_LEN);
        check_text(&mut errors, "cuisine", &self.cuisine, CUISINE_MAX_LEN);
        check_text(&mut errors, "address", &self.address, ADDRESS_MAX_LEN);
        if let Some(rating) = self.rating {
            check_rating(&mut errors, rating);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl UpdateRestaurant {
    /// True if the payload carries no recognized field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.cuisine.is_none()
            && self.address.is_none()
            && self.rating.is_none()
    }

    /// Validate the payload, collecting every failing field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.is_empty() {
            errors.push("at least one field must be provided".to_string());
        }
        if let Some(name) = &self.name {
            check_text(&mut errors, "name", name, NAME_MAX_LEN);
        }
        if let Some(cuisine) = &self.cuisine {
            check_text(&mut errors, "cuisine", cuisine, CUISINE_MAX_LEN);
        }
        if let Some(address) = &self.address {
            check_text(&mut errors, "address", address, ADDRESS_MAX_LEN);
        }
        if let Some(rating) = self.rating {
            check_rating(&mut errors, rating);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_create() -> CreateRestaurant {
        CreateRestaurant {
            name: "Trattoria Roma".to_string(),
            cuisine: "italian".to_string(),
            address: "12 Via Appia".to_string(),
            rating: Some(dec!(4.5)),
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn empty_name_fails() {
        let mut payload = valid_create();
        payload.name = "   ".to_string();
        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("name"));
    }

    #[test]
    fn rating_out_of_range_fails() {
        let mut payload = valid_create();
        payload.rating = Some(dec!(5.1));
        assert!(payload.validate().is_err());

        payload.rating = Some(dec!(-0.1));
        assert!(payload.validate().is_err());

        payload.rating = Some(dec!(5));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn all_failures_are_reported() {
        let payload = CreateRestaurant {
            name: String::new(),
            cuisine: String::new(),
            address: String::new(),
            rating: Some(dec!(9)),
        };
        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn oversized_name_fails() {
        let mut payload = valid_create();
        payload.name = "x".repeat(NAME_MAX_LEN + 1);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn empty_update_fails() {
        let payload = UpdateRestaurant::default();
        assert!(payload.is_empty());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn partial_update_passes() {
        let payload = UpdateRestaurant {
            rating: Some(dec!(3)),
            ..UpdateRestaurant::default()
        };
        assert!(payload.validate().is_ok());
    }
}

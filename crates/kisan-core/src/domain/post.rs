use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::DomainError;

/// Marketplace post entity - one produce-for-sale listing.
///
/// `id` and `post_date` are always assigned by the server. `price` is quoted
/// per quintal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplacePost {
    pub id: String,
    pub crop_name: String,
    pub quantity: f64,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub seller_name: String,
    pub post_date: NaiveDate,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl MarketplacePost {
    /// Create a new post dated today (UTC) with a fresh random id.
    pub fn new(draft: PostDraft) -> Self {
        Self::posted_on(draft, Utc::now().date_naive())
    }

    /// Create a new post with an explicit posting date.
    pub fn posted_on(draft: PostDraft, post_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            crop_name: draft.crop_name,
            quantity: draft.quantity,
            price: draft.price,
            description: draft.description,
            seller_name: draft.seller_name,
            post_date,
            location: draft.location,
            image_url: draft.image_url,
        }
    }
}

/// A post record exactly as it sits in storage.
///
/// Records are kept verbatim so that entries written by older versions or by
/// hand (a `null` quantity, a missing field, an extra key) survive a rewrite
/// of the collection unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredPost(Value);

impl StoredPost {
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for StoredPost {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl TryFrom<&MarketplacePost> for StoredPost {
    type Error = serde_json::Error;

    fn try_from(post: &MarketplacePost) -> Result<Self, Self::Error> {
        serde_json::to_value(post).map(Self)
    }
}

/// Client-supplied value for a numeric field, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    /// Any other JSON shape (boolean, array, object).
    Other,
}

impl RawNumber {
    /// Zero and blank text count as "not provided".
    fn is_blank(&self) -> bool {
        match self {
            RawNumber::Number(n) => *n == 0.0,
            RawNumber::Text(s) => s.trim().is_empty(),
            RawNumber::Other => false,
        }
    }

    fn coerce(&self, field: &'static str) -> Result<f64, DomainError> {
        let value = match self {
            RawNumber::Number(n) => Some(*n),
            RawNumber::Text(s) => s.trim().parse::<f64>().ok(),
            RawNumber::Other => None,
        }
        .filter(|n| n.is_finite())
        .ok_or_else(|| DomainError::Validation(format!("{field} must be a number")))?;

        if value <= 0.0 {
            return Err(DomainError::Validation(format!(
                "{field} must be greater than zero"
            )));
        }

        Ok(value)
    }
}

/// Unvalidated creation input as received at the system boundary.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub crop_name: Option<String>,
    pub quantity: Option<RawNumber>,
    pub price: Option<RawNumber>,
    pub description: Option<String>,
    pub seller_name: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
}

/// Validated creation input. Every field satisfies the post invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub crop_name: String,
    pub quantity: f64,
    pub price: f64,
    pub description: String,
    pub seller_name: String,
    pub location: String,
    pub image_url: Option<String>,
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|s| !s.trim().is_empty())
}

impl PostInput {
    /// Validate the input and build a draft.
    ///
    /// All missing required fields are reported together; numeric checks
    /// only run once every required field is present.
    pub fn validate(self) -> Result<PostDraft, DomainError> {
        let required = (
            non_blank(self.crop_name),
            self.quantity.filter(|n| !n.is_blank()),
            self.price.filter(|n| !n.is_blank()),
            non_blank(self.seller_name),
            non_blank(self.location),
        );

        match required {
            (Some(crop_name), Some(quantity), Some(price), Some(seller_name), Some(location)) => {
                Ok(PostDraft {
                    crop_name,
                    quantity: quantity.coerce("quantity")?,
                    price: price.coerce("price")?,
                    description: self.description.unwrap_or_default(),
                    seller_name,
                    location,
                    image_url: self.image_url.filter(|url| !url.is_empty()),
                })
            }
            (crop_name, quantity, price, seller_name, location) => {
                let missing = [
                    ("cropName", crop_name.is_none()),
                    ("quantity", quantity.is_none()),
                    ("price", price.is_none()),
                    ("sellerName", seller_name.is_none()),
                    ("location", location.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();

                Err(DomainError::MissingFields(missing))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheat() -> PostInput {
        PostInput {
            crop_name: Some("Wheat".to_string()),
            quantity: Some(RawNumber::Number(100.0)),
            price: Some(RawNumber::Number(2200.0)),
            seller_name: Some("Ravi".to_string()),
            location: Some("Punjab".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_input_builds_draft() {
        let draft = wheat().validate().unwrap();
        assert_eq!(draft.crop_name, "Wheat");
        assert_eq!(draft.quantity, 100.0);
        assert_eq!(draft.price, 2200.0);
        assert_eq!(draft.description, "");
        assert_eq!(draft.image_url, None);
    }

    #[test]
    fn test_missing_fields_are_reported_together() {
        let input = PostInput {
            crop_name: Some("Wheat".to_string()),
            ..Default::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingFields(vec!["quantity", "price", "sellerName", "location"])
        );
        assert_eq!(
            err.to_string(),
            "Missing required fields: quantity, price, sellerName, location"
        );
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let mut input = wheat();
        input.seller_name = Some("   ".to_string());
        input.quantity = Some(RawNumber::Number(0.0));
        input.price = Some(RawNumber::Text(String::new()));

        let err = input.validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingFields(vec!["quantity", "price", "sellerName"])
        );
    }

    #[test]
    fn test_numeric_text_is_coerced() {
        let mut input = wheat();
        input.quantity = Some(RawNumber::Text(" 12.5 ".to_string()));
        input.price = Some(RawNumber::Text("1800".to_string()));

        let draft = input.validate().unwrap();
        assert_eq!(draft.quantity, 12.5);
        assert_eq!(draft.price, 1800.0);
    }

    #[test]
    fn test_non_numeric_values_are_rejected() {
        let mut input = wheat();
        input.price = Some(RawNumber::Text("cheap".to_string()));
        assert_eq!(
            input.validate().unwrap_err(),
            DomainError::Validation("price must be a number".to_string())
        );

        let mut input = wheat();
        input.quantity = Some(RawNumber::Text("NaN".to_string()));
        assert_eq!(
            input.validate().unwrap_err(),
            DomainError::Validation("quantity must be a number".to_string())
        );

        let mut input = wheat();
        input.quantity = Some(RawNumber::Other);
        assert!(matches!(
            input.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_negative_values_are_rejected() {
        let mut input = wheat();
        input.price = Some(RawNumber::Number(-5.0));
        assert_eq!(
            input.validate().unwrap_err(),
            DomainError::Validation("price must be greater than zero".to_string())
        );
    }

    #[test]
    fn test_empty_image_url_is_dropped() {
        let mut input = wheat();
        input.image_url = Some(String::new());
        input.description = Some("Fresh harvest".to_string());

        let draft = input.validate().unwrap();
        assert_eq!(draft.image_url, None);
        assert_eq!(draft.description, "Fresh harvest");
    }

    #[test]
    fn test_new_post_gets_unique_ids() {
        let draft = wheat().validate().unwrap();
        let a = MarketplacePost::new(draft.clone());
        let b = MarketplacePost::new(draft);
        assert_ne!(a.id, b.id);
        assert_eq!(a.post_date, Utc::now().date_naive());
    }

    #[test]
    fn test_post_serializes_in_camel_case() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let post = MarketplacePost::posted_on(wheat().validate().unwrap(), date);
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["cropName"], "Wheat");
        assert_eq!(json["sellerName"], "Ravi");
        assert_eq!(json["postDate"], "2024-03-01");
        assert_eq!(json["description"], "");
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn test_stored_post_keeps_record_verbatim() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let post = MarketplacePost::posted_on(wheat().validate().unwrap(), date);
        let stored = StoredPost::try_from(&post).unwrap();
        assert_eq!(stored.id(), Some(post.id.as_str()));
        assert_eq!(stored.as_value()["postDate"], "2024-03-01");

        let legacy: StoredPost = serde_json::from_str(
            r#"{"id":"a1","cropName":"Rice","quantity":null,"contact":"98765"}"#,
        )
        .unwrap();
        assert_eq!(legacy.id(), Some("a1"));
        assert_eq!(
            serde_json::to_string(&legacy).unwrap(),
            r#"{"id":"a1","cropName":"Rice","quantity":null,"contact":"98765"}"#
        );
    }
}

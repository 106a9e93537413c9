//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to create a marketplace post.
///
/// Every field is optional at the wire level so that missing fields can be
/// reported together. `quantity` and `price` stay untyped JSON until they are
/// coerced. Unknown fields such as `id` or `postDate` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub crop_name: Option<String>,
    pub quantity: Option<Value>,
    pub price: Option<Value>,
    pub description: Option<String>,
    pub seller_name: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
}

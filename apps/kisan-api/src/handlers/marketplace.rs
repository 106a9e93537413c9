//! Marketplace post handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use kisan_core::domain::{MarketplacePost, PostInput, RawNumber};
use kisan_shared::dto::CreatePostRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// GET /api/marketplace/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    request_id: RequestId,
) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .load()
        .await
        .map_err(|e| AppError::storage("Could not load posts", e))?;

    tracing::debug!(
        request_id = %request_id.as_str(),
        count = posts.len(),
        "Listed marketplace posts"
    );

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/marketplace/posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let draft = post_input(body.into_inner()).validate().inspect_err(|e| {
        tracing::info!(request_id = %request_id.as_str(), reason = %e, "Rejected marketplace post");
    })?;

    let post = state
        .posts
        .prepend(MarketplacePost::new(draft))
        .await
        .map_err(|e| AppError::storage("Could not create post", e))?;

    tracing::info!(
        request_id = %request_id.as_str(),
        post_id = %post.id,
        crop = %post.crop_name,
        "Created marketplace post"
    );

    Ok(HttpResponse::Created().json(post))
}

fn post_input(req: CreatePostRequest) -> PostInput {
    PostInput {
        crop_name: req.crop_name,
        quantity: req.quantity.map(raw_number),
        price: req.price.map(raw_number),
        description: req.description,
        seller_name: req.seller_name,
        location: req.location,
        image_url: req.image_url,
    }
}

fn raw_number(value: Value) -> RawNumber {
    match value {
        Value::Number(n) => n.as_f64().map_or(RawNumber::Other, RawNumber::Number),
        Value::String(s) => RawNumber::Text(s),
        _ => RawNumber::Other,
    }
}

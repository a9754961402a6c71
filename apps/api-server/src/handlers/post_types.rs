//! Post type resource handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use crate::middleware::error::AppResult;
use crate::serializers::{PostTypeSerializer, Serializer};
use crate::state::AppState;

/// GET /api/type/
pub async fn list_post_types(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let post_types = state.post_types.find_all().await?;

    Ok(HttpResponse::Ok().json(PostTypeSerializer::many(&post_types)))
}

/// POST /api/type/
pub async fn create_post_type(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let new_type = PostTypeSerializer::to_internal_value(&body)?;
    let post_type = state.post_types.insert(new_type).await?;

    tracing::info!(post_type_id = post_type.id, "Post type created");
    Ok(HttpResponse::Created().json(PostTypeSerializer::to_representation(&post_type)))
}

/// DELETE /api/type/{id}/ - posts of this type are removed with it.
pub async fn delete_post_type(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .post_types
        .delete(id)
        .await
        .map_err(|e| e.into_domain("Type", id))?;

    tracing::info!(post_type_id = id, "Post type deleted");
    Ok(HttpResponse::NoContent().finish())
}

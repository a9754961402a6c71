//! Post resource handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use buffer_core::DomainError;
use buffer_core::domain::Post;

use crate::middleware::error::AppResult;
use crate::serializers::{PostSerializer, Serializer};
use crate::state::AppState;

/// GET /api/post/
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;

    Ok(HttpResponse::Ok().json(PostSerializer::many(&posts)))
}

/// POST /api/post/
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let new_post = PostSerializer::to_internal_value(&body, &state).await?;
    let post = state.posts.insert(new_post).await?;

    tracing::info!(post_id = post.id, author = post.author, "Post created");
    Ok(HttpResponse::Created().json(PostSerializer::to_representation(&post)))
}

/// PUT /api/post/{id}/ - full replacement; every required field must be sent.
///
/// The body is only inspected once the post is known to exist, so a missing
/// id is a 404 whatever was sent.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: Result<web::Json<Value>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let id = path.into_inner();

    require_post(&state, id).await?;
    let body = body?;
    let post = replace_post(&state, id, &body).await?;

    tracing::info!(post_id = post.id, "Post updated");
    Ok(HttpResponse::Ok().json(PostSerializer::to_representation(&post)))
}

async fn require_post(state: &AppState, id: i32) -> AppResult<()> {
    if state.posts.exists(id).await? {
        Ok(())
    } else {
        Err(DomainError::NotFound {
            entity_type: "Post",
            id,
        }
        .into())
    }
}

async fn replace_post(state: &AppState, id: i32, body: &Value) -> AppResult<Post> {
    let changes = PostSerializer::to_internal_value(body, state).await?;
    let post = state
        .posts
        .update(id, changes)
        .await
        .map_err(|e| e.into_domain("Post", id))?;
    Ok(post)
}

/// DELETE /api/post/{id}/
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .posts
        .delete(id)
        .await
        .map_err(|e| e.into_domain("Post", id))?;

    tracing::info!(post_id = id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}

//! User resource handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use buffer_core::domain::NewUser;

use crate::middleware::error::AppResult;
use crate::serializers::{Serializer, UserSerializer};
use crate::state::AppState;

/// GET /api/user/
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;

    Ok(HttpResponse::Ok().json(UserSerializer::many(&users)))
}

/// POST /api/user/
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let registration = UserSerializer::to_internal_value(&body, &state).await?;

    let password_hash = state.passwords.hash(&registration.password)?;
    let mut new_user = NewUser::new(registration.email, registration.username, password_hash);
    new_user.is_active = registration.is_active;

    let user = state.users.insert(new_user).await?;

    tracing::info!(user_id = user.id, "User created");
    Ok(HttpResponse::Created().json(UserSerializer::to_representation(&user)))
}

/// DELETE /api/user/{id}/ - posts authored by this user are removed with it.
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .users
        .delete(id)
        .await
        .map_err(|e| e.into_domain("User", id))?;

    tracing::info!(user_id = id, "User deleted");
    Ok(HttpResponse::NoContent().finish())
}

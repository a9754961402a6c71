//! Translation between stored records and their JSON representations.
//!
//! Outbound, each serializer emits only the fields its response DTO declares.
//! Inbound, payloads are read field by field, checked against column limits
//! and resolved against storage; every failure is collected before the
//! request is rejected and nothing is written.

use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use buffer_core::domain::{NewPost, NewPostType, Post, PostType, User};
use buffer_shared::dto::{
    PostPayload, PostResponse, PostTypePayload, PostTypeResponse, RegisterUserPayload,
    UserResponse,
};
use buffer_shared::payload::missing_pk;
use buffer_shared::{FieldErrors, FieldReader};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Outbound mapping from a record to its public representation.
pub trait Serializer {
    type Record;
    type Representation: Serialize;

    fn to_representation(record: &Self::Record) -> Self::Representation;

    fn many(records: &[Self::Record]) -> Vec<Self::Representation> {
        records.iter().map(Self::to_representation).collect()
    }
}

/// Fail with the collected errors, or hand back the validated value.
fn finish<T>(errors: FieldErrors, value: Option<T>) -> AppResult<T> {
    match value {
        Some(value) if errors.is_empty() => Ok(value),
        _ => Err(AppError::Validation(errors)),
    }
}

pub struct PostSerializer;

impl Serializer for PostSerializer {
    type Record = Post;
    type Representation = PostResponse;

    fn to_representation(post: &Post) -> PostResponse {
        PostResponse {
            id: post.id,
            image: post.image.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
            post_type: post.post_type,
            date_posted: post.date_posted,
            author: post.author,
        }
    }
}

impl PostSerializer {
    /// Validate a full post payload. `post_type` and `author` must resolve.
    pub async fn to_internal_value(data: &Value, state: &AppState) -> AppResult<NewPost> {
        let mut reader = FieldReader::new(data)?;
        let payload = PostPayload {
            image: reader.optional_string("image"),
            title: reader.required_string("title"),
            content: reader.required_string("content"),
            post_type: reader.required_pk("post_type"),
            author: reader.required_pk("author"),
        };

        if let Some(pk) = payload.post_type {
            if !state.post_types.exists(pk).await? {
                reader.error("post_type", missing_pk(pk));
            }
        }
        if let Some(pk) = payload.author {
            if !state.users.exists(pk).await? {
                reader.error("author", missing_pk(pk));
            }
        }

        let mut errors = reader.finish();
        if let Err(failures) = payload.validate() {
            errors.extend_from_validation(&failures);
        }

        let post = match payload {
            PostPayload {
                image,
                title: Some(title),
                content: Some(content),
                post_type: Some(post_type),
                author: Some(author),
            } => Some(NewPost {
                image,
                title,
                content,
                post_type,
                author,
            }),
            _ => None,
        };

        finish(errors, post)
    }
}

pub struct PostTypeSerializer;

impl Serializer for PostTypeSerializer {
    type Record = PostType;
    type Representation = PostTypeResponse;

    fn to_representation(post_type: &PostType) -> PostTypeResponse {
        PostTypeResponse {
            id: post_type.id,
            name: post_type.name.clone(),
        }
    }
}

impl PostTypeSerializer {
    pub fn to_internal_value(data: &Value) -> AppResult<NewPostType> {
        let mut reader = FieldReader::new(data)?;
        let payload = PostTypePayload {
            name: reader.required_string("name"),
        };

        let mut errors = reader.finish();
        if let Err(failures) = payload.validate() {
            errors.extend_from_validation(&failures);
        }

        finish(errors, payload.name.map(NewPostType::new))
    }
}

/// A validated registration. The password is still in plain text.
#[derive(Debug)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub password: String,
    pub is_active: bool,
}

pub struct UserSerializer;

impl Serializer for UserSerializer {
    type Record = User;
    type Representation = UserResponse;

    fn to_representation(user: &User) -> UserResponse {
        UserResponse {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            date_joined: user.date_joined,
            last_login: user.last_login,
            is_active: user.is_active,
        }
    }
}

impl UserSerializer {
    /// Validate a registration, including email and username uniqueness.
    ///
    /// Privilege flags in the payload are ignored.
    pub async fn to_internal_value(data: &Value, state: &AppState) -> AppResult<Registration> {
        let mut reader = FieldReader::new(data)?;
        let payload = RegisterUserPayload {
            email: reader.required_string("email"),
            username: reader.required_string("username"),
            password: reader.required_raw_string("password"),
            is_active: reader.optional_bool("is_active", true),
        };

        if let Some(email) = &payload.email {
            if state.users.find_by_email(email).await?.is_some() {
                reader.error("email", "user with this email already exists.");
            }
        }
        if let Some(username) = &payload.username {
            if state.users.find_by_username(username).await?.is_some() {
                reader.error("username", "user with this username already exists.");
            }
        }

        let mut errors = reader.finish();
        if let Err(failures) = payload.validate() {
            errors.extend_from_validation(&failures);
        }

        let registration = match payload {
            RegisterUserPayload {
                email: Some(email),
                username: Some(username),
                password: Some(password),
                is_active: Some(is_active),
            } => Some(Registration {
                email,
                username,
                password,
                is_active,
            }),
            _ => None,
        };

        finish(errors, registration)
    }
}

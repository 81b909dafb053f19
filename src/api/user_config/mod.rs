//! User configuration endpoints

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::UserId;
use crate::infrastructure::user_config::CreateUserConfigRequest;

pub const USER_CREATED: &str = "User created successfully";
pub const ACTIVE_STATUS_UPDATED: &str = "User active status updated successfully";
pub const AVATAR_UPDATED: &str = "User avatar URL updated successfully";

/// Create the user configuration router
pub fn create_user_config_router() -> Router<AppState> {
    Router::new()
        .route("/addUser", post(add_user))
        .route("/getUserConfig/{id_user}", get(get_user_config))
        .route(
            "/updateActiveStatus/{id_user}/{active_status}",
            put(update_active_status),
        )
        .route("/updateAvatar/{id_user}", put(update_avatar))
}

/// Body of `POST /addUser`
#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub id_user: Option<UserId>,
    pub active_status: Option<bool>,
    /// Outer `None` when the field is missing, `Some(None)` when it is `null`
    #[serde(default, deserialize_with = "present")]
    pub avatar: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Body of `PUT /updateAvatar/{id_user}`
#[derive(Debug, Deserialize)]
pub struct UpdateAvatarRequest {
    pub avatar: Option<String>,
}

fn missing_field(field: &str) -> ApiError {
    ApiError::bad_request(format!("Missing required field: {}", field))
}

/// POST /addUser
pub async fn add_user(
    State(state): State<AppState>,
    Json(request): Json<AddUserRequest>,
) -> Result<&'static str, ApiError> {
    let id_user = request.id_user.ok_or_else(|| missing_field("id_user"))?;
    let active_status = request
        .active_status
        .ok_or_else(|| missing_field("active_status"))?;

    debug!(id_user = %id_user, "Creating user config");

    state
        .user_config_service
        .create(CreateUserConfigRequest {
            id_user,
            active_status,
            avatar: request.avatar,
        })
        .await?;

    Ok(USER_CREATED)
}

/// GET /getUserConfig/{id_user}
pub async fn get_user_config(
    State(state): State<AppState>,
    Path(id_user): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let document = state.user_config_service.get(&id_user).await?;
    Ok(Json(document))
}

/// PUT /updateActiveStatus/{id_user}/{active_status}
pub async fn update_active_status(
    State(state): State<AppState>,
    Path((id_user, active_status)): Path<(String, String)>,
) -> Result<&'static str, ApiError> {
    debug!(id_user = %id_user, active_status = %active_status, "Updating active status");

    state
        .user_config_service
        .set_active_status(&id_user, &active_status)
        .await?;

    Ok(ACTIVE_STATUS_UPDATED)
}

/// PUT /updateAvatar/{id_user}
pub async fn update_avatar(
    State(state): State<AppState>,
    Path(id_user): Path<String>,
    Json(request): Json<UpdateAvatarRequest>,
) -> Result<&'static str, ApiError> {
    let avatar = request.avatar.ok_or_else(|| missing_field("avatar"))?;

    debug!(id_user = %id_user, "Updating avatar");

    state
        .user_config_service
        .set_avatar(&id_user, avatar)
        .await?;

    Ok(AVATAR_UPDATED)
}

use axum_helpers::AppError;
use domain_sns::publish;
use serde::{Deserialize, Serialize};

use crate::api::to_app_error;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PublishRequest {
    #[serde(rename = "topicName")]
    pub topic_name: String,
    pub message: String,
    #[serde(default)]
    pub subject: String,
}

#[derive(Serialize)]
pub struct PublishResponse {
    #[serde(rename = "messageId")]
    pub message_id: String,
}

#[derive(Serialize)]
pub struct PublishCheckResponse {
    pub status: String,
}

pub async fn publish_message(state: &AppState, req: PublishRequest) -> Result<PublishResponse, AppError> {
    let message_id = publish::publish_async(
        &state.broker_pool,
        &state.dispatcher,
        &state.kv,
        &req.topic_name,
        &req.message,
        &req.subject,
    )
    .await
    .map_err(to_app_error)?;

    Ok(PublishResponse { message_id })
}

pub async fn check_status(state: &AppState, message_id: Option<String>) -> Result<PublishCheckResponse, AppError> {
    let message_id = message_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::NotFound("message id not found".to_string()))?;

    let status = publish::check_status(&state.kv, &message_id)
        .await
        .map_err(|err| match err {
            domain_sns::SnsError::NotFound => AppError::NotFound("message id not found".to_string()),
            other => to_app_error(other),
        })?;

    Ok(PublishCheckResponse { status })
}

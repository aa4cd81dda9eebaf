use axum_helpers::AppError;
use domain_sns::topic;
use serde::{Deserialize, Serialize};

use crate::api::to_app_error;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateTopicRequest {
    pub name: String,
    pub subject: String,
}

#[derive(Serialize)]
pub struct CreateTopicResponse {
    #[serde(rename = "topicArn")]
    pub topic_arn: String,
}

#[derive(Serialize)]
pub struct ListTopicsResponse {
    pub topics: Vec<String>,
}

pub async fn create_topic(
    state: &AppState,
    req: CreateTopicRequest,
) -> Result<CreateTopicResponse, AppError> {
    if req.name.is_empty() || req.subject.is_empty() {
        return Err(AppError::InvalidParameter("missing required fields".to_string()));
    }

    topic::create_topic(&state.broker_pool, &req.name, &req.subject).await.map_err(to_app_error)?;

    let topic_arn = domain_sns::format_srn(&state.config.sns.region, &state.config.sns.account_id, &req.name);
    Ok(CreateTopicResponse { topic_arn })
}

pub async fn delete_topic(state: &AppState, name: Option<String>) -> Result<&'static str, AppError> {
    let name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::InvalidParameter("missing 'name' parameter".to_string()))?;

    topic::delete_topic(&state.broker_pool, &name).await.map_err(to_app_error)?;
    Ok("Topic deleted successfully")
}

pub async fn list_topics(state: &AppState) -> Result<ListTopicsResponse, AppError> {
    let topics = topic::list_topics(&state.broker_pool, &state.config.sns.region, &state.config.sns.account_id)
        .await
        .map_err(to_app_error)?;
    Ok(ListTopicsResponse { topics })
}

//! Single action-router endpoint: every verb is dispatched off an `Action`
//! query parameter, SNS-API style, rather than one route per verb.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use axum_helpers::AppError;
use observability::KvMetrics;
use serde::Deserialize;

use super::publish::{self, PublishRequest};
use super::topic::{self, CreateTopicRequest};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ActionQuery {
    #[serde(rename = "Action")]
    action: String,
    name: Option<String>,
    #[serde(rename = "messageId")]
    message_id: Option<String>,
}

pub(crate) fn to_app_error(err: domain_sns::SnsError) -> AppError {
    use domain_sns::SnsError;
    match err {
        SnsError::MissingFields => AppError::InvalidParameter(err.to_string()),
        SnsError::NotFound => AppError::NotFound(err.to_string()),
        SnsError::UnknownStatus => AppError::Internal(err.to_string()),
        SnsError::Broker(inner) => AppError::Internal(inner.to_string()),
        SnsError::Kv(inner) => AppError::Internal(inner.to_string()),
        SnsError::Dispatch(inner) => AppError::Internal(inner.to_string()),
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|_| AppError::InvalidParameter("invalid request body".to_string()))
}

async fn dispatch(State(state): State<AppState>, Query(query): Query<ActionQuery>, body: Bytes) -> Response {
    let action = query.action.clone();
    let result = route(&state, &query, &body).await;

    let status_code = match &result {
        Ok(response) => response.status(),
        Err(err) => err.status_code(),
    };
    KvMetrics::record_api_call(&action, status_code.as_str());

    match result {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

async fn route(state: &AppState, query: &ActionQuery, body: &Bytes) -> Result<Response, AppError> {
    match query.action.as_str() {
        "createTopic" => {
            let req: CreateTopicRequest = parse_body(body)?;
            let resp = topic::create_topic(state, req).await?;
            Ok(Json(resp).into_response())
        }
        "deleteTopic" => {
            let resp = topic::delete_topic(state, query.name.clone()).await?;
            Ok(resp.into_response())
        }
        "listTopics" => {
            let resp = topic::list_topics(state).await?;
            Ok(Json(resp).into_response())
        }
        "publish" => {
            let req: PublishRequest = parse_body(body)?;
            let resp = publish::publish_message(state, req).await?;
            Ok(Json(resp).into_response())
        }
        "publishCheck" | "checkAckStatus" => {
            let resp = publish::check_status(state, query.message_id.clone()).await?;
            Ok(Json(resp).into_response())
        }
        _ => Ok((StatusCode::BAD_REQUEST, "invalid Action").into_response()),
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/", any(dispatch))
}

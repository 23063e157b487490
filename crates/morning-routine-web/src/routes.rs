use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use morning_routine_core::render::{self, HtmlMode};
use morning_routine_core::ChecklistDocument;
use serde::Deserialize;
use serde_json::json;

use crate::{ApiError, AppState};

/// Body of `POST /api/complete`. A missing id is treated as 0, which never
/// matches an item.
#[derive(Debug, Default, Deserialize)]
pub struct CompleteRequest {
    #[serde(default)]
    id: u32,
}

/// Body of `POST /api/waketime`.
#[derive(Debug, Default, Deserialize)]
pub struct WakeTimeRequest {
    #[serde(default)]
    wake_time: Option<String>,
}

/// A request without a JSON body counts as an empty one; a body that is not
/// valid JSON for `T` is a bad request.
fn json_body<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())),
    }
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let (doc, today) = state
        .run(|service| Ok((service.current()?, service.today())))
        .await?;
    Ok(Html(render::html(&doc, today, HtmlMode::Live)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<ChecklistDocument>, ApiError> {
    Ok(Json(state.run(|service| service.current()).await?))
}

pub async fn complete(
    State(state): State<AppState>,
    payload: Result<Json<CompleteRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request = json_body(payload)?;

    if state.run(move |service| service.complete(request.id)).await? {
        Ok(Json(json!({ "ok": true })).into_response())
    } else {
        Ok((StatusCode::NOT_FOUND, Json(json!({ "ok": false }))).into_response())
    }
}

pub async fn wake_time(
    State(state): State<AppState>,
    payload: Result<Json<WakeTimeRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request = json_body(payload)?;
    let Some(wake_time) = request.wake_time.filter(|s| !s.trim().is_empty()) else {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, "wake_time is required"));
    };

    match state
        .run(move |service| service.record_wake_time(&wake_time))
        .await?
    {
        Some(minutes_late) => {
            Ok(Json(json!({ "ok": true, "minutes_late": minutes_late })).into_response())
        }
        None => Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "checklist has no wake-time item",
        )),
    }
}

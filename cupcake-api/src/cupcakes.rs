use std::sync::atomic::Ordering;

use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use cupcake_core::wire;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

/// POST /api/cupcakes
/// Echo the submitted object back with an `id` and `createdAt`, like the
/// hosted mock the app talks to in production.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<Map<String, Value>>), AppError> {
    let Json(mut body) = payload?;

    match wire::from_value(Value::Object(body.clone())) {
        Ok(order) => tracing::info!("Received {}", order),
        // Still echoed; the client decides what to make of it.
        Err(e) => tracing::warn!("Received a body that is not an order: {}", e),
    }

    body.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    body.insert(
        "createdAt".to_string(),
        Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );

    let count = state.received.fetch_add(1, Ordering::Relaxed) + 1;
    tracing::debug!("Echoed {} order(s) so far", count);

    Ok((StatusCode::CREATED, Json(body)))
}

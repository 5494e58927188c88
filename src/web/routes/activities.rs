use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::models::Activity;
use crate::services::activities_service;
use crate::store::{DirectoryError, SharedDirectory};

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

pub async fn activities_handler(
    State(directory): State<SharedDirectory>,
) -> Json<IndexMap<String, Activity>> {
    Json(activities_service::list_activities(&directory).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(directory): State<SharedDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::signup_student(&directory, &activity_name, &query.email)
        .await
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| reject(&activity_name, &query.email, e))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(directory): State<SharedDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::unregister_student(&directory, &activity_name, &query.email)
        .await
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| reject(&activity_name, &query.email, e))
}

fn reject(activity_name: &str, email: &str, err: DirectoryError) -> (StatusCode, Json<Value>) {
    warn!(activity = %activity_name, email = %email, detail = %err, "roster_command_rejected");

    let status = match err {
        DirectoryError::ActivityNotFound => StatusCode::NOT_FOUND,
        DirectoryError::AlreadySignedUp | DirectoryError::NotRegistered => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "detail": err.to_string() })))
}

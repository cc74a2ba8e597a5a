// src/routes/recommend.rs

use axum::{extract::{Query, State}, Json};
use serde::Deserialize;

use crate::{models::Recommendation, AppState};
use super::not_found;

#[derive(Deserialize)]
pub struct RecommendQ {
    pub service_type: String,
}

pub async fn recommend_employee(
    State(state): State<AppState>,
    Query(q): Query<RecommendQ>,
) -> Result<Json<Recommendation>, (axum::http::StatusCode, String)> {
    let rec = state
        .dataset
        .matrix
        .recommend(&q.service_type)
        .ok_or_else(|| not_found("Service type"))?;
    Ok(Json(rec))
}

// src/routes/health.rs

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResp {
    pub status: &'static str,
    pub records: usize,
    pub employees: usize,
    pub service_types: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResp> {
    let ds = &state.dataset;
    Json(HealthResp {
        status: "ok",
        records: ds.records.len(),
        employees: ds.matrix.employee_count(),
        service_types: ds.matrix.service_type_count(),
    })
}

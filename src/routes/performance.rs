// src/routes/performance.rs

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::{chart, stats, AppState};
use super::{internal_error, not_found};

#[derive(Deserialize)]
pub struct PerfQ {
    pub emp_name: String,
}

pub async fn emp_perf_taskwise(
    State(state): State<AppState>,
    Query(q): Query<PerfQ>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let ds = &state.dataset;
    let service_types = ds.matrix.service_types();

    let emp_avgs = stats::employee_averages(&ds.records, service_types, &q.emp_name)
        .ok_or_else(|| not_found("Employee"))?;
    // Team averages cover every observed service type by construction.
    let team_avgs = stats::team_averages(&ds.records);

    let emp_series: Vec<f64> = service_types.iter().map(|s| emp_avgs[s]).collect();
    let team_series: Vec<f64> = service_types.iter().map(|s| team_avgs[s]).collect();

    let png = chart::render(&q.emp_name, service_types, &emp_series, &team_series)
        .map_err(internal_error)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

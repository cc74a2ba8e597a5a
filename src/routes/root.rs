// src/routes/root.rs

use axum::Json;
use serde_json::{json, Value};

pub async fn read_root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

// src/models/mod.rs

use serde::{Deserialize, Serialize};

/// One row of the ticket table. Immutable after load.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketRecord {
    #[serde(rename = "Accepted By")]
    pub accepted_by: String,
    #[serde(rename = "Service Type")]
    pub service_type: String,
    /// Minutes taken to resolve the ticket.
    #[serde(rename = "Processing Duration")]
    pub processing_duration: f64,
}

// ───────────────────────────────────────
// DTOs for endpoints
// ───────────────────────────────────────
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub recommended_employee: String,
    pub min_processing_time: f64,
    /// Every employee whose average exactly ties the minimum. Always contains
    /// `recommended_employee` (the first match in matrix order).
    pub all_best_employees: Vec<String>,
}

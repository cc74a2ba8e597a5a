// src/stats/mod.rs
//
// All the aggregation logic lives here: the (0, 240) duration filter, the
// employee × service-type average matrix behind /recommend_employee, and the
// per-request groupings behind /emp_perf_taskwise.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Recommendation, TicketRecord};

/// Durations at or above this are treated as data-entry errors.
pub const MAX_PLAUSIBLE_MINUTES: f64 = 240.0;

/// Drop rows whose duration is not strictly between 0 and 240 minutes.
pub fn filter(rows: Vec<TicketRecord>) -> Vec<TicketRecord> {
    rows.into_iter()
        .filter(|r| r.processing_duration > 0.0 && r.processing_duration < MAX_PLAUSIBLE_MINUTES)
        .collect()
}

/// Mean processing time per (employee, service type) pair, plus the ordered
/// set of service types observed anywhere in the filtered table.
///
/// Pairs with no observations are simply absent; `recommend` treats an absent
/// cell as infinite cost, so an employee who never handled a service type can
/// never be recommended for it. Employees iterate in sorted order, which makes
/// the tie-break (first match wins) deterministic.
pub struct AvgTimeMatrix {
    cells: BTreeMap<String, BTreeMap<String, f64>>,
    service_types: Vec<String>,
}

impl AvgTimeMatrix {
    pub fn build(records: &[TicketRecord]) -> Self {
        let mut sums: BTreeMap<String, BTreeMap<String, (f64, u32)>> = BTreeMap::new();
        let mut service_types = BTreeSet::new();
        for r in records {
            service_types.insert(r.service_type.clone());
            let cell = sums
                .entry(r.accepted_by.clone())
                .or_default()
                .entry(r.service_type.clone())
                .or_insert((0.0, 0));
            cell.0 += r.processing_duration;
            cell.1 += 1;
        }
        let cells = sums
            .into_iter()
            .map(|(emp, row)| {
                let means = row
                    .into_iter()
                    .map(|(svc, (sum, n))| (svc, sum / f64::from(n)))
                    .collect();
                (emp, means)
            })
            .collect();
        Self {
            cells,
            service_types: service_types.into_iter().collect(),
        }
    }

    pub fn service_types(&self) -> &[String] {
        &self.service_types
    }

    pub fn employee_count(&self) -> usize {
        self.cells.len()
    }

    pub fn service_type_count(&self) -> usize {
        self.service_types.len()
    }

    /// Best employee for a service type, with the full tie set.
    ///
    /// Returns `None` when the service type never occurs in the matrix. Ties
    /// are exact f64 equality; the singular recommendation is the first
    /// employee (in matrix order) reaching the minimum.
    pub fn recommend(&self, service_type: &str) -> Option<Recommendation> {
        if !self.service_types.iter().any(|s| s == service_type) {
            return None;
        }

        let mut best: Option<(&String, f64)> = None;
        for (emp, row) in &self.cells {
            let Some(&avg) = row.get(service_type) else {
                continue;
            };
            if best.map_or(true, |(_, min)| avg < min) {
                best = Some((emp, avg));
            }
        }
        let (first, min) = best?;

        let all_best = self
            .cells
            .iter()
            .filter(|(_, row)| row.get(service_type).copied() == Some(min))
            .map(|(emp, _)| emp.clone())
            .collect();

        Some(Recommendation {
            recommended_employee: first.clone(),
            min_processing_time: min,
            all_best_employees: all_best,
        })
    }
}

/// Mean duration per service type over the whole filtered table (row-level
/// mean, not a mean of per-employee means). Used for the chart overlay and
/// recomputed per request.
pub fn team_averages(records: &[TicketRecord]) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, (f64, u32)> = BTreeMap::new();
    for r in records {
        let cell = sums.entry(r.service_type.clone()).or_insert((0.0, 0));
        cell.0 += r.processing_duration;
        cell.1 += 1;
    }
    sums.into_iter()
        .map(|(svc, (sum, n))| (svc, sum / f64::from(n)))
        .collect()
}

/// Per-service-type means over one employee's rows. Every known service type
/// is present in the result; types the employee never handled come back as
/// 0.0 so the chart can show "no task performed", unlike the matrix where
/// such cells stay absent (infinite).
///
/// Returns `None` when the employee has no rows at all in the filtered table.
pub fn employee_averages(
    records: &[TicketRecord],
    service_types: &[String],
    employee: &str,
) -> Option<BTreeMap<String, f64>> {
    let mut sums: BTreeMap<String, (f64, u32)> = BTreeMap::new();
    let mut seen = false;
    for r in records.iter().filter(|r| r.accepted_by == employee) {
        seen = true;
        let cell = sums.entry(r.service_type.clone()).or_insert((0.0, 0));
        cell.0 += r.processing_duration;
        cell.1 += 1;
    }
    if !seen {
        return None;
    }
    Some(
        service_types
            .iter()
            .map(|svc| {
                let avg = sums.get(svc).map_or(0.0, |&(sum, n)| sum / f64::from(n));
                (svc.clone(), avg)
            })
            .collect(),
    )
}

// src/dataset/mod.rs

use std::env;
use std::path::Path;

use anyhow::Context;

use crate::models::TicketRecord;
use crate::stats::{self, AvgTimeMatrix};

/// Default location of the ticket table, relative to the working directory.
pub const DEFAULT_TICKETS_FILE: &str = "data/tickets.csv";

/// Everything derived from the ticket table at startup: the filtered record
/// set and the recommendation matrix. Read-only for the process lifetime and
/// shared across handlers behind an Arc; nothing mutates it after load.
pub struct Dataset {
    pub records: Vec<TicketRecord>,
    pub matrix: AvgTimeMatrix,
}

impl Dataset {
    /// Filter the raw rows and build the matrix. Startup-only path, also used
    /// by tests to assemble small fixtures.
    pub fn from_records(rows: Vec<TicketRecord>) -> Self {
        let records = stats::filter(rows);
        let matrix = AvgTimeMatrix::build(&records);
        Self { records, matrix }
    }
}

/// Load the ticket table from `TICKETS_FILE` (default `data/tickets.csv`).
/// Any problem here is fatal: the process must not start serving on a
/// missing or malformed table.
pub fn load() -> anyhow::Result<Dataset> {
    let path = env::var("TICKETS_FILE").unwrap_or_else(|_| DEFAULT_TICKETS_FILE.to_string());
    load_from(Path::new(&path))
}

pub fn load_from(path: &Path) -> anyhow::Result<Dataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("cannot open ticket table at {}", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<TicketRecord>() {
        let row = result.with_context(|| format!("malformed row in {}", path.display()))?;
        rows.push(row);
    }
    if rows.is_empty() {
        anyhow::bail!("ticket table at {} has no data rows", path.display());
    }

    let dataset = Dataset::from_records(rows);
    tracing::info!(
        rows = dataset.records.len(),
        employees = dataset.matrix.employee_count(),
        service_types = dataset.matrix.service_type_count(),
        "ticket table loaded from {}",
        path.display()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_filters_and_builds_matrix() {
        let file = write_csv(
            "Accepted By,Service Type,Processing Duration\n\
             Alice,Password Reset,10\n\
             Bob,Password Reset,20\n\
             Alice,VPN Setup,5\n\
             Bob,VPN Setup,999\n",
        );
        let ds = load_from(file.path()).unwrap();

        // The 999-minute row is a data-entry error and must vanish.
        assert_eq!(ds.records.len(), 3);
        let r = ds.matrix.recommend("VPN Setup").unwrap();
        assert_eq!(r.recommended_employee, "Alice");
        assert_eq!(r.all_best_employees, vec!["Alice".to_string()]);
    }

    #[test]
    fn missing_file_is_fatal() {
        assert!(load_from(Path::new("no/such/tickets.csv")).is_err());
    }

    #[test]
    fn non_numeric_duration_is_fatal() {
        let file = write_csv(
            "Accepted By,Service Type,Processing Duration\n\
             Alice,Password Reset,soon\n",
        );
        assert!(load_from(file.path()).is_err());
    }

    #[test]
    fn header_only_table_is_fatal() {
        let file = write_csv("Accepted By,Service Type,Processing Duration\n");
        assert!(load_from(file.path()).is_err());
    }
}

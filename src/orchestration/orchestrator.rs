use crate::datasource::{read_operations, read_operations_from_path};
use crate::domain::{CommissionConfig, Operation};
use crate::engine::calculate_commissions;
use crate::error::AppError;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Reads an operation batch and computes its fees with one rule set.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    commission: CommissionConfig,
}

impl Orchestrator {
    pub fn new(commission: CommissionConfig) -> Self {
        Self { commission }
    }

    /// Compute formatted fees for the operations stored at `path`.
    pub fn run_path(&self, path: impl AsRef<Path>) -> Result<Vec<String>, AppError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Calculating commissions");
        let operations = read_operations_from_path(path)?;
        self.run_operations(&operations)
    }

    /// Compute formatted fees for a JSON operation array read from `reader`.
    pub fn run_reader<R: Read>(&self, reader: R) -> Result<Vec<String>, AppError> {
        let operations = read_operations(reader)?;
        self.run_operations(&operations)
    }

    pub fn run_operations(&self, operations: &[Operation]) -> Result<Vec<String>, AppError> {
        let fees = calculate_commissions(operations, &self.commission)?;
        info!(
            operations = operations.len(),
            fees = fees.len(),
            "Commissions calculated"
        );
        Ok(fees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::DataSourceError;
    use std::io::Cursor;

    #[test]
    fn test_run_reader_with_default_rules() {
        let input = r#"[
            { "date": "2016-01-05", "user_id": 1, "user_type": "natural", "type": "cash_in",
              "operation": { "amount": 200.00, "currency": "EUR" } },
            { "date": "2016-01-06", "user_id": 2, "user_type": "juridical", "type": "cash_out",
              "operation": { "amount": 300.00, "currency": "EUR" } }
        ]"#;

        let orchestrator = Orchestrator::new(CommissionConfig::default());
        let fees = orchestrator.run_reader(Cursor::new(input)).unwrap();
        assert_eq!(fees, vec!["0.06", "0.90"]);
    }

    #[test]
    fn test_run_reader_surfaces_input_errors() {
        let orchestrator = Orchestrator::new(CommissionConfig::default());
        match orchestrator.run_reader(Cursor::new("{ not json")) {
            Err(AppError::Input(DataSourceError::Parse(_))) => {}
            other => panic!("Expected parse error, got {:?}", other),
        }
    }
}

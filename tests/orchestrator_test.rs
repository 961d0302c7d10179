use commission_fees::{
    AppError, CategoryConfig, CommissionConfig, Decimal, FeeError, Orchestrator, UserId,
};
use std::io::Write;
use tempfile::TempDir;

fn write_operations(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("operations.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_run_path_skips_unknown_categories() {
    let dir = TempDir::new().unwrap();
    let path = write_operations(
        &dir,
        r#"[
            { "date": "2016-01-05", "user_id": 1, "user_type": "natural", "type": "cash_in",
              "operation": { "amount": 200.00, "currency": "EUR" } },
            { "date": "2016-01-05", "user_id": 5, "user_type": "trust", "type": "cash_out",
              "operation": { "amount": 900.00, "currency": "EUR" } },
            { "date": "2016-01-06", "user_id": 2, "user_type": "juridical", "type": "cash_out",
              "operation": { "amount": 300.00, "currency": "EUR" } }
        ]"#,
    );

    let fees = Orchestrator::new(CommissionConfig::default())
        .run_path(&path)
        .unwrap();

    assert_eq!(fees, vec!["0.06", "0.90"]);
}

#[test]
fn test_run_path_with_custom_rules() {
    let dir = TempDir::new().unwrap();
    let path = write_operations(
        &dir,
        r#"[
            { "date": "2016-01-05", "user_id": 1, "user_type": "natural", "type": "cash_out",
              "operation": { "amount": 100.00, "currency": "EUR" } }
        ]"#,
    );

    let commission = CommissionConfig {
        cash_in: CategoryConfig::default(),
        cash_out_natural: CategoryConfig::default().with_min_fee(Decimal::from(2)),
        cash_out_juridical: CategoryConfig::default(),
    };

    let fees = Orchestrator::new(commission).run_path(&path).unwrap();
    assert_eq!(fees, vec!["2.00"]);
}

#[test]
fn test_negative_amount_fails_whole_batch() {
    let dir = TempDir::new().unwrap();
    let path = write_operations(
        &dir,
        r#"[
            { "date": "2016-01-05", "user_id": 1, "user_type": "natural", "type": "cash_in",
              "operation": { "amount": -1, "currency": "EUR" } }
        ]"#,
    );

    let result = Orchestrator::new(CommissionConfig::default()).run_path(&path);
    assert!(matches!(result, Err(AppError::Input(_))));
}

#[test]
fn test_run_operations_reports_fee_errors() {
    let mut operation: commission_fees::Operation = serde_json::from_str(
        r#"{ "date": "2016-01-05", "user_id": 3, "user_type": "natural", "type": "cash_in",
             "operation": { "amount": 1, "currency": "EUR" } }"#,
    )
    .unwrap();
    operation.amount = Decimal::from(-3);

    let result = Orchestrator::new(CommissionConfig::default()).run_operations(&[operation]);
    match result {
        Err(AppError::Fee(FeeError::NegativeAmount { amount, .. })) => {
            assert_eq!(amount, Decimal::from(-3))
        }
        other => panic!("Expected fee error, got {:?}", other),
    }
}

#[test]
fn test_weekly_total_overflow_fails_batch_without_panic() {
    let dir = TempDir::new().unwrap();
    let path = write_operations(
        &dir,
        r#"[
            { "date": "2016-01-05", "user_id": "u-1", "user_type": "natural", "type": "cash_out",
              "operation": { "amount": 50000000000000000000000000000, "currency": "EUR" } },
            { "date": "2016-01-06", "user_id": "u-1", "user_type": "natural", "type": "cash_out",
              "operation": { "amount": 50000000000000000000000000000, "currency": "EUR" } }
        ]"#,
    );

    let result = Orchestrator::new(CommissionConfig::default()).run_path(&path);
    match result {
        Err(AppError::Fee(FeeError::Overflow { user_id })) => {
            assert_eq!(user_id, UserId::from("u-1"))
        }
        other => panic!("Expected overflow error, got {:?}", other),
    }
}

//! Operation type representing a single cash movement.

use crate::domain::{Decimal, OperationType, UserId, UserType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated cash-in or cash-out performed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OperationRecord", into = "OperationRecord")]
pub struct Operation {
    /// Calendar date of the operation.
    pub date: NaiveDate,
    pub user_id: UserId,
    pub user_type: UserType,
    pub operation_type: OperationType,
    /// Operation amount, expected to be non-negative.
    pub amount: Decimal,
    /// Currency code. Carried through but never converted.
    pub currency: String,
}

impl Operation {
    pub fn new(
        date: NaiveDate,
        user_id: UserId,
        user_type: UserType,
        operation_type: OperationType,
        amount: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Operation {
            date,
            user_id,
            user_type,
            operation_type,
            amount,
            currency: currency.into(),
        }
    }
}

/// Input file layout: the amount and currency are nested under `operation`.
#[derive(Serialize, Deserialize)]
struct OperationRecord {
    date: NaiveDate,
    user_id: UserId,
    user_type: UserType,
    #[serde(rename = "type")]
    operation_type: OperationType,
    operation: AmountRecord,
}

#[derive(Serialize, Deserialize)]
struct AmountRecord {
    amount: Decimal,
    currency: String,
}

impl From<OperationRecord> for Operation {
    fn from(record: OperationRecord) -> Self {
        Operation {
            date: record.date,
            user_id: record.user_id,
            user_type: record.user_type,
            operation_type: record.operation_type,
            amount: record.operation.amount,
            currency: record.operation.currency,
        }
    }
}

impl From<Operation> for OperationRecord {
    fn from(operation: Operation) -> Self {
        OperationRecord {
            date: operation.date,
            user_id: operation.user_id,
            user_type: operation.user_type,
            operation_type: operation.operation_type,
            operation: AmountRecord {
                amount: operation.amount,
                currency: operation.currency,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_from_input_json() {
        let json = r#"{
            "date": "2016-01-05",
            "user_id": 1,
            "user_type": "natural",
            "type": "cash_in",
            "operation": { "amount": 200.00, "currency": "EUR" }
        }"#;

        let operation: Operation = serde_json::from_str(json).unwrap();

        assert_eq!(operation.date, NaiveDate::from_ymd_opt(2016, 1, 5).unwrap());
        assert_eq!(operation.user_id, UserId::new(1));
        assert_eq!(operation.user_type, UserType::Natural);
        assert_eq!(operation.operation_type, OperationType::CashIn);
        assert_eq!(operation.amount, Decimal::from_str_canonical("200").unwrap());
        assert_eq!(operation.currency, "EUR");
    }

    #[test]
    fn test_operation_rejects_bad_date() {
        let json = r#"{
            "date": "2016-13-45",
            "user_id": 1,
            "user_type": "natural",
            "type": "cash_in",
            "operation": { "amount": 1, "currency": "EUR" }
        }"#;

        assert!(serde_json::from_str::<Operation>(json).is_err());
    }

    #[test]
    fn test_operation_serializes_nested_amount() {
        let operation = Operation::new(
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            UserId::new(7),
            UserType::Juridical,
            OperationType::CashOut,
            Decimal::from(380),
            "EUR",
        );

        let value = serde_json::to_value(&operation).unwrap();
        assert_eq!(value["type"], "cash_out");
        assert_eq!(value["user_type"], "juridical");
        assert_eq!(value["operation"]["currency"], "EUR");
        assert!(value["operation"]["amount"].is_number());
    }
}

//! Pure computation engine for commission fees.

use crate::domain::{Decimal, Operation, UserId};
use thiserror::Error;

pub mod dispatcher;
pub mod fee_rule;

pub use dispatcher::{calculate_commissions, dispatch};
pub use fee_rule::{FeeRuleEvaluator, WeeklyState};

/// Computes the fee of one operation for a single category.
///
/// Implementations may keep state between calls, so operations must be
/// passed in non-decreasing date order.
pub trait FeeEvaluator {
    fn evaluate(&mut self, operation: &Operation) -> Result<Decimal, FeeError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    #[error("Negative amount {amount} in operation of user {user_id}")]
    NegativeAmount { user_id: UserId, amount: Decimal },

    #[error("Arithmetic overflow in operation of user {user_id}")]
    Overflow { user_id: UserId },
}

use crate::domain::{CategoryConfig, Decimal, Operation, UserId};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

use super::{FeeError, FeeEvaluator};

/// Per-user spending within the current ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklyState {
    /// Cumulative amount per user since the week started.
    pub totals: HashMap<UserId, Decimal>,

    /// Date of the operation that opened the current week (None before the first call).
    pub last_seen: Option<NaiveDate>,
}

impl WeeklyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Amount the user has spent so far this week.
    pub fn total_for(&self, user_id: &UserId) -> Decimal {
        self.totals.get(user_id).copied().unwrap_or_default()
    }

    /// Start a new week if `date` falls outside the current one.
    fn roll_to(&mut self, date: NaiveDate) {
        if let Some(last) = self.last_seen {
            if last.iso_week() == date.iso_week() {
                return;
            }
            if date < last {
                warn!(
                    date = %date,
                    last_seen = %last,
                    "Operation dated before the current week, resetting weekly totals"
                );
            }
        }

        debug!(date = %date, users = self.totals.len(), "Starting new weekly window");
        self.totals.clear();
        self.last_seen = Some(date);
    }
}

/// Rule evaluator for one category: percentage commission with optional
/// cap, floor and weekly free allowance.
pub struct FeeRuleEvaluator {
    config: CategoryConfig,
    pub state: WeeklyState,
}

impl FeeRuleEvaluator {
    pub fn new(config: &CategoryConfig) -> Self {
        Self {
            config: config.clone(),
            state: WeeklyState::new(),
        }
    }

    /// Part of the amount not covered by the user's remaining weekly allowance.
    ///
    /// The full amount is added to the weekly total whether or not it is
    /// charged.
    fn consume_allowance(
        &mut self,
        operation: &Operation,
        limit: Decimal,
    ) -> Result<Decimal, FeeError> {
        self.state.roll_to(operation.date);

        let prior = self.state.total_for(&operation.user_id);
        let total = prior
            .checked_add(operation.amount)
            .ok_or_else(|| overflow(operation))?;
        let allowance = limit
            .checked_sub(prior)
            .ok_or_else(|| overflow(operation))?
            .max(Decimal::zero());
        let feeable = operation
            .amount
            .checked_sub(allowance)
            .ok_or_else(|| overflow(operation))?
            .max(Decimal::zero());

        self.state.totals.insert(operation.user_id.clone(), total);

        trace!(
            user = %operation.user_id,
            prior = %prior,
            feeable = %feeable,
            "Applied weekly free allowance"
        );
        Ok(feeable)
    }
}

fn overflow(operation: &Operation) -> FeeError {
    FeeError::Overflow {
        user_id: operation.user_id.clone(),
    }
}

impl FeeEvaluator for FeeRuleEvaluator {
    fn evaluate(&mut self, operation: &Operation) -> Result<Decimal, FeeError> {
        if operation.amount.is_negative() {
            return Err(FeeError::NegativeAmount {
                user_id: operation.user_id.clone(),
                amount: operation.amount,
            });
        }

        let feeable = match self.config.weekly_free_limit {
            Some(limit) => self.consume_allowance(operation, limit)?,
            None => operation.amount,
        };

        let mut fee = match self.config.commission_fee {
            Some(rate) => feeable
                .checked_mul(rate)
                .ok_or_else(|| overflow(operation))?,
            None => Decimal::zero(),
        };
        if let Some(max_fee) = self.config.max_fee {
            fee = fee.min(max_fee);
        }
        if let Some(min_fee) = self.config.min_fee {
            fee = fee.max(min_fee);
        }

        Ok(fee.round_up_to_cents())
    }
}

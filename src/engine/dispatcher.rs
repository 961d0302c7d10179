//! Routes a mixed batch of operations to one evaluator per category.

use crate::domain::{Category, CategoryConfig, CommissionConfig, Operation};
use tracing::debug;

use super::{FeeError, FeeEvaluator, FeeRuleEvaluator};

/// One evaluator per category, each with independent state.
struct CategoryEvaluators<E> {
    cash_in: E,
    cash_out_natural: E,
    cash_out_juridical: E,
}

impl<E: FeeEvaluator> CategoryEvaluators<E> {
    fn get_mut(&mut self, category: Category) -> &mut E {
        match category {
            Category::CashIn => &mut self.cash_in,
            Category::CashOutNatural => &mut self.cash_out_natural,
            Category::CashOutJuridical => &mut self.cash_out_juridical,
        }
    }
}

/// Compute the formatted fee of every routable operation, in input order.
///
/// `factory` is called exactly once per category, before any operation is
/// evaluated. Operations whose (type, user type) pair maps to no category
/// produce no output entry, so the result may be shorter than the input.
///
/// # Errors
/// Returns the first evaluator error; no partial result is returned.
pub fn dispatch<E, F>(
    operations: &[Operation],
    config: &CommissionConfig,
    mut factory: F,
) -> Result<Vec<String>, FeeError>
where
    E: FeeEvaluator,
    F: FnMut(&CategoryConfig) -> E,
{
    let mut evaluators = CategoryEvaluators {
        cash_in: factory(&config.cash_in),
        cash_out_natural: factory(&config.cash_out_natural),
        cash_out_juridical: factory(&config.cash_out_juridical),
    };

    let mut fees = Vec::with_capacity(operations.len());
    for operation in operations {
        let Some(category) = Category::route(operation.operation_type, operation.user_type) else {
            debug!(
                user = %operation.user_id,
                operation_type = %operation.operation_type,
                user_type = %operation.user_type,
                "Skipping operation without fee category"
            );
            continue;
        };

        let fee = evaluators.get_mut(category).evaluate(operation)?;
        fees.push(fee.to_fixed_cents());
    }

    debug!(
        operations = operations.len(),
        fees = fees.len(),
        "Dispatched operations"
    );
    Ok(fees)
}

/// Compute fees with the standard rule evaluator for each category.
pub fn calculate_commissions(
    operations: &[Operation],
    config: &CommissionConfig,
) -> Result<Vec<String>, FeeError> {
    dispatch(operations, config, FeeRuleEvaluator::new)
}

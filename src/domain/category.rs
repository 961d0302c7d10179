//! Fee categories and their per-category rule configuration.

use crate::domain::{Decimal, OperationType, UserType};
use rust_decimal::Decimal as RustDecimal;
use serde::{Deserialize, Serialize};

/// One of the three independently configured fee regimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    CashIn,
    CashOutNatural,
    CashOutJuridical,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::CashIn,
        Category::CashOutNatural,
        Category::CashOutJuridical,
    ];

    /// Select the category an operation is charged under.
    ///
    /// Cash-in ignores the user type. Returns `None` for combinations that
    /// carry no fee regime; such operations are skipped.
    pub fn route(operation_type: OperationType, user_type: UserType) -> Option<Category> {
        match (operation_type, user_type) {
            (OperationType::CashIn, _) => Some(Category::CashIn),
            (OperationType::CashOut, UserType::Natural) => Some(Category::CashOutNatural),
            (OperationType::CashOut, UserType::Juridical) => Some(Category::CashOutJuridical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::CashIn => write!(f, "cash-in"),
            Category::CashOutNatural => write!(f, "cash-out-natural"),
            Category::CashOutJuridical => write!(f, "cash-out-juridical"),
        }
    }
}

/// Fee rules for one category. Every rule is optional; an absent rule is
/// skipped entirely rather than treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CategoryConfig {
    /// Fraction of the fee-liable amount charged, e.g. `0.003` for 0.3%.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_fee: Option<Decimal>,
    /// Upper bound of a single fee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<Decimal>,
    /// Lower bound of a single fee, applied after `max_fee`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_fee: Option<Decimal>,
    /// Amount per user per ISO week that is free of commission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_free_limit: Option<Decimal>,
}

impl CategoryConfig {
    pub fn with_commission_fee(mut self, fee: Decimal) -> Self {
        self.commission_fee = Some(fee);
        self
    }

    pub fn with_max_fee(mut self, fee: Decimal) -> Self {
        self.max_fee = Some(fee);
        self
    }

    pub fn with_min_fee(mut self, fee: Decimal) -> Self {
        self.min_fee = Some(fee);
        self
    }

    pub fn with_weekly_free_limit(mut self, limit: Decimal) -> Self {
        self.weekly_free_limit = Some(limit);
        self
    }

    /// Name of the first configured rule holding a negative value, if any.
    pub fn negative_field(&self) -> Option<&'static str> {
        [
            ("commissionFee", self.commission_fee),
            ("maxFee", self.max_fee),
            ("minFee", self.min_fee),
            ("weeklyFreeLimit", self.weekly_free_limit),
        ]
        .into_iter()
        .find(|(_, value)| value.is_some_and(|v| v.is_negative()))
        .map(|(name, _)| name)
    }
}

/// The rule sets of all three categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommissionConfig {
    pub cash_in: CategoryConfig,
    pub cash_out_natural: CategoryConfig,
    pub cash_out_juridical: CategoryConfig,
}

impl CommissionConfig {
    pub fn get(&self, category: Category) -> &CategoryConfig {
        match category {
            Category::CashIn => &self.cash_in,
            Category::CashOutNatural => &self.cash_out_natural,
            Category::CashOutJuridical => &self.cash_out_juridical,
        }
    }
}

impl Default for CommissionConfig {
    /// Standard rates: 0.03% on cash-in capped at 5.00, 0.3% on cash-out
    /// with 1000.00 free per week for natural persons and a 0.50 minimum
    /// for legal entities.
    fn default() -> Self {
        CommissionConfig {
            cash_in: CategoryConfig::default()
                .with_commission_fee(Decimal::new(RustDecimal::new(3, 4)))
                .with_max_fee(Decimal::new(RustDecimal::new(500, 2))),
            cash_out_natural: CategoryConfig::default()
                .with_commission_fee(Decimal::new(RustDecimal::new(3, 3)))
                .with_weekly_free_limit(Decimal::new(RustDecimal::new(100_000, 2))),
            cash_out_juridical: CategoryConfig::default()
                .with_commission_fee(Decimal::new(RustDecimal::new(3, 3)))
                .with_min_fee(Decimal::new(RustDecimal::new(50, 2))),
        }
    }
}

pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;

pub use config::Config;
pub use datasource::{read_operations, read_operations_from_path, DataSourceError};
pub use domain::{
    Category, CategoryConfig, CommissionConfig, Decimal, Operation, OperationType, UserId,
    UserType,
};
pub use engine::{calculate_commissions, dispatch, FeeError, FeeEvaluator, FeeRuleEvaluator};
pub use error::AppError;
pub use orchestration::Orchestrator;

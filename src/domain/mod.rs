//! Domain types for commission fee calculation.
//!
//! This module provides:
//! - Lossless money handling via the Decimal wrapper
//! - Domain primitives: UserId, UserType, OperationType
//! - The Operation record with its input-file serialization
//! - Fee categories and their rule configuration

pub mod category;
pub mod decimal;
pub mod operation;
pub mod primitives;

pub use category::{Category, CategoryConfig, CommissionConfig};
pub use decimal::Decimal;
pub use operation::Operation;
pub use primitives::{OperationType, UserId, UserType};

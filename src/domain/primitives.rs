//! Domain primitives: UserId, UserType, OperationType.

use serde::{Deserialize, Serialize};

/// Opaque identifier of the user who performed an operation.
///
/// Input files carry it as a JSON number or string. The two forms are
/// distinct ids: `7` and `"7"` are different users.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Name(String),
}

impl UserId {
    pub fn new(id: u64) -> Self {
        UserId::Number(id)
    }
}

impl From<&str> for UserId {
    fn from(name: &str) -> Self {
        UserId::Name(name.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserId::Number(id) => write!(f, "{}", id),
            UserId::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Legal kind of the user.
///
/// Values outside the known set deserialize to `Other` so that the
/// dispatcher can skip them instead of rejecting the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// A private person.
    Natural,
    /// A legal entity.
    Juridical,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Natural => write!(f, "natural"),
            UserType::Juridical => write!(f, "juridical"),
            UserType::Other => write!(f, "other"),
        }
    }
}

/// Direction of the money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    CashIn,
    CashOut,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationType::CashIn => write!(f, "cash_in"),
            OperationType::CashOut => write!(f, "cash_out"),
            OperationType::Other => write!(f, "other"),
        }
    }
}

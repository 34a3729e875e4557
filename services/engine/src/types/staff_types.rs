use serde::{Deserialize, Serialize};

/// Reviewer account. `sub_role` carries the approver role name used by the
/// workflow tables; `max_approval_amount` is the approval ceiling, `None`
/// meaning unlimited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub sub_role: Option<String>,
    pub max_approval_amount: Option<i64>,
}

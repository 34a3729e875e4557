use serde::{Deserialize, Serialize};

use crate::types::approval_types::StageRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    Pending,
    PendingJointRegistrar,
    PendingAssociateDean,
    PendingDean,
    Approved,
    Rejected,
}

impl ExpenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "pending",
            ExpenseStatus::PendingJointRegistrar => "pending_joint_registrar",
            ExpenseStatus::PendingAssociateDean => "pending_associate_dean",
            ExpenseStatus::PendingDean => "pending_dean",
            ExpenseStatus::Approved => "approved",
            ExpenseStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ExpenseStatus::Approved | ExpenseStatus::Rejected)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub description: String,
    pub amount: i64,
    pub bill_number: String,
    pub bill_date: String,
    pub vendor: String,
    pub attachment_url: Option<String>,
}

/// Post-event expense report. Creatable only once the sibling proposal has
/// reached `proposal_approved`; approve/reject only, no revision cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub occurrence_id: u64,
    pub bills: Vec<Bill>,
    pub event_report_document_url: Option<String>,
    pub approval_status: ExpenseStatus,
    pub notes: Option<String>,
}

impl Expense {
    pub fn total_expenditure(&self) -> i64 {
        self.bills.iter().map(|b| b.amount).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub bills: Vec<Bill>,
    pub event_report_document_url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseSnapshot {
    pub expense: Expense,
    pub total_expenditure: i64,
    pub awaiting: Vec<String>,
    pub stages: Vec<StageRecord>,
}

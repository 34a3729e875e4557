use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectType {
    Proposal,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approved,
    Rejected,
    RevisionRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApproverRole {
    #[serde(rename = "President")]
    President,
    #[serde(rename = "Student Affairs")]
    StudentAffairs,
    #[serde(rename = "Joint Registrar SA")]
    JointRegistrarSa,
    #[serde(rename = "Associate Dean SA")]
    AssociateDeanSa,
    #[serde(rename = "Dean SA")]
    DeanSa,
}

impl ApproverRole {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "President" => Some(ApproverRole::President),
            "Student Affairs" => Some(ApproverRole::StudentAffairs),
            "Joint Registrar SA" => Some(ApproverRole::JointRegistrarSa),
            "Associate Dean SA" => Some(ApproverRole::AssociateDeanSa),
            "Dean SA" => Some(ApproverRole::DeanSa),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApproverRole::President => "President",
            ApproverRole::StudentAffairs => "Student Affairs",
            ApproverRole::JointRegistrarSa => "Joint Registrar SA",
            ApproverRole::AssociateDeanSa => "Associate Dean SA",
            ApproverRole::DeanSa => "Dean SA",
        }
    }

    /// Roles selectable as parallel next stages by a Student Affairs approval.
    pub fn is_branch_stage(&self) -> bool {
        matches!(
            self,
            ApproverRole::JointRegistrarSa | ApproverRole::AssociateDeanSa | ApproverRole::DeanSa
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Pending,
    Approved,
    Rejected,
    RevisionRequested,
    /// Cancelled by a sibling branch's rejection or revision request.
    Voided,
}

/// One approval branch of a subject. Every pending status the subject
/// enters creates one of these; fan-out creates several at once. The
/// records are the source of truth for aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageRecord {
    pub id: u64,
    pub subject_type: SubjectType,
    pub subject_id: u64,
    pub role: ApproverRole,
    pub status: StageStatus,
    pub decided_by: Option<String>,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

/// Immutable audit record of one decision. Appended exactly once per
/// successful action, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalEvent {
    pub id: u64,
    pub subject_type: SubjectType,
    pub subject_id: u64,
    pub actor_role: String,
    pub actor_sub_role: Option<String>,
    pub decision: Decision,
    pub comments: String,
    pub next_stages: Vec<ApproverRole>,
    pub timestamp: DateTime<Utc>,
}

/// Authorization context of the caller, resolved by the server from the
/// staff store before any decision reaches the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reviewer {
    pub staff_id: u64,
    pub role: String,
    pub sub_role: Option<String>,
    pub max_approval_amount: Option<i64>,
}

impl Reviewer {
    pub fn is_super_admin(&self) -> bool {
        self.role == "Super Admin"
    }

    pub fn stage_role(&self) -> Option<ApproverRole> {
        self.sub_role.as_deref().and_then(ApproverRole::parse)
    }
}

#[derive(Debug, Clone)]
pub struct DecisionRequest {
    pub reviewer: Reviewer,
    pub decision: Decision,
    pub comments: String,
    pub next_stages: Vec<ApproverRole>,
    pub stage_role: Option<ApproverRole>,
}

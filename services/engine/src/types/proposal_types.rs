use serde::{Deserialize, Serialize};

use crate::types::approval_types::StageRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Draft,
    PendingPresident,
    PendingStudentAffairs,
    PendingJointRegistrar,
    PendingAssociateDean,
    PendingDean,
    ProposalApproved,
    Rejected,
    RevisionRequested,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Draft => "draft",
            ProposalStatus::PendingPresident => "pending_president",
            ProposalStatus::PendingStudentAffairs => "pending_student_affairs",
            ProposalStatus::PendingJointRegistrar => "pending_joint_registrar",
            ProposalStatus::PendingAssociateDean => "pending_associate_dean",
            ProposalStatus::PendingDean => "pending_dean",
            ProposalStatus::ProposalApproved => "proposal_approved",
            ProposalStatus::Rejected => "rejected",
            ProposalStatus::RevisionRequested => "revision_requested",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProposalStatus::ProposalApproved | ProposalStatus::Rejected
        )
    }

    /// Submitter may edit only before submission or after a revision request.
    pub fn is_editable(&self) -> bool {
        matches!(
            self,
            ProposalStatus::Draft | ProposalStatus::RevisionRequested
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgrammeInfo {
    pub title: String,
    pub theme: String,
    pub venue: String,
    pub coordinator: String,
}

/// The four source-of-funds fields. `Proposal::total_expected_income` is
/// always their sum, recomputed by the engine on every write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingSources {
    pub registration_income: i64,
    pub sponsorship_income: i64,
    pub institute_support: i64,
    pub other_income: i64,
}

impl FundingSources {
    pub fn total(&self) -> i64 {
        self.registration_income + self.sponsorship_income + self.institute_support + self.other_income
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeSlab {
    pub category: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalDetails {
    pub programme: ProgrammeInfo,
    pub funding: FundingSources,
    pub registration_fees: Vec<FeeSlab>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: u64,
    pub occurrence_id: u64,
    pub details: ProposalDetails,
    pub total_expected_income: i64,
    pub total_expenditure: i64,
    pub status: ProposalStatus,
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalInput {
    pub details: ProposalDetails,
    pub total_expenditure: i64,
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalSnapshot {
    pub proposal: Proposal,
    /// Role names currently awaited, so the client never re-derives the
    /// status-to-approver mapping.
    pub awaiting: Vec<String>,
    pub stages: Vec<StageRecord>,
}

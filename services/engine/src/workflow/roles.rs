use crate::types::approval_types::ApproverRole;
use crate::types::expense_types::ExpenseStatus;
use crate::types::proposal_types::ProposalStatus;

/// Which role must act on a proposal in the given status. `None` for
/// draft, revision and terminal statuses, where no decision is possible.
pub fn proposal_required_approver(status: ProposalStatus) -> Option<ApproverRole> {
    match status {
        ProposalStatus::PendingPresident => Some(ApproverRole::President),
        ProposalStatus::PendingStudentAffairs => Some(ApproverRole::StudentAffairs),
        ProposalStatus::PendingJointRegistrar => Some(ApproverRole::JointRegistrarSa),
        ProposalStatus::PendingAssociateDean => Some(ApproverRole::AssociateDeanSa),
        ProposalStatus::PendingDean => Some(ApproverRole::DeanSa),
        ProposalStatus::Draft
        | ProposalStatus::ProposalApproved
        | ProposalStatus::Rejected
        | ProposalStatus::RevisionRequested => None,
    }
}

pub fn expense_required_approver(status: ExpenseStatus) -> Option<ApproverRole> {
    match status {
        ExpenseStatus::Pending => Some(ApproverRole::StudentAffairs),
        ExpenseStatus::PendingJointRegistrar => Some(ApproverRole::JointRegistrarSa),
        ExpenseStatus::PendingAssociateDean => Some(ApproverRole::AssociateDeanSa),
        ExpenseStatus::PendingDean => Some(ApproverRole::DeanSa),
        ExpenseStatus::Approved | ExpenseStatus::Rejected => None,
    }
}

/// Pending status a proposal reports while the given role's stage is the
/// earliest one still open.
pub fn proposal_status_for_stage(role: ApproverRole) -> ProposalStatus {
    match role {
        ApproverRole::President => ProposalStatus::PendingPresident,
        ApproverRole::StudentAffairs => ProposalStatus::PendingStudentAffairs,
        ApproverRole::JointRegistrarSa => ProposalStatus::PendingJointRegistrar,
        ApproverRole::AssociateDeanSa => ProposalStatus::PendingAssociateDean,
        ApproverRole::DeanSa => ProposalStatus::PendingDean,
    }
}

pub fn expense_status_for_stage(role: ApproverRole) -> ExpenseStatus {
    match role {
        // The expense workflow has no president stage; Student Affairs is
        // its entry point.
        ApproverRole::President | ApproverRole::StudentAffairs => ExpenseStatus::Pending,
        ApproverRole::JointRegistrarSa => ExpenseStatus::PendingJointRegistrar,
        ApproverRole::AssociateDeanSa => ExpenseStatus::PendingAssociateDean,
        ApproverRole::DeanSa => ExpenseStatus::PendingDean,
    }
}

use chrono::Utc;
use log::info;
use uuid::Uuid;

use crate::store::approvals::actor::EngineState;
use crate::store::approvals::snapshot::{build_expense_snapshot, build_proposal_snapshot};
use crate::types::approval_types::{
    ApprovalEvent, ApproverRole, Decision, DecisionRequest, StageRecord, StageStatus, SubjectType,
};
use crate::types::errors::EngineError;
use crate::types::expense_types::{Expense, ExpenseInput, ExpenseSnapshot, ExpenseStatus};
use crate::types::proposal_types::{Proposal, ProposalInput, ProposalSnapshot, ProposalStatus};
use crate::workflow::roles::{expense_status_for_stage, proposal_status_for_stage};
use crate::workflow::transitions::{
    check_amount_ceiling, validate_branch_selection, validate_decision_comment,
};

pub(crate) fn next_id() -> u64 {
    Uuid::new_v4().as_u128() as u64
}

pub(crate) enum StageResolution {
    Pending(usize),
    NoStage,
}

/// Locate the stage record the caller is entitled to decide. A stage that
/// exists but is no longer pending means the caller lost a race or was
/// superseded by a sibling branch, which is the conflict surface.
pub(crate) fn resolve_target_stage(
    stages: &[StageRecord],
    request: &DecisionRequest,
) -> Result<StageResolution, EngineError> {
    let target_role = if request.reviewer.is_super_admin() {
        match request.stage_role {
            Some(role) => role,
            None => {
                let pending: Vec<ApproverRole> = stages
                    .iter()
                    .filter(|s| s.status == StageStatus::Pending)
                    .map(|s| s.role)
                    .collect();
                match pending.as_slice() {
                    [role] => *role,
                    [] => return Ok(StageResolution::NoStage),
                    _ => {
                        return Err(EngineError::Validation(
                            "multiple approval stages are pending, specify stage_role".to_string(),
                        ))
                    }
                }
            }
        }
    } else {
        match request.reviewer.stage_role() {
            Some(role) => role,
            None => return Ok(StageResolution::NoStage),
        }
    };

    // Resubmission creates a fresh stage for a role that decided earlier,
    // so only the most recent record for the role counts.
    match stages.iter().rposition(|s| s.role == target_role) {
        Some(idx) if stages[idx].status == StageStatus::Pending => {
            Ok(StageResolution::Pending(idx))
        }
        Some(idx) => {
            // A stage that was voided by a sibling, re-decided while its
            // fan-out is still open, or decided right as the subject was
            // finalized is a lost race. A decided earlier linear stage
            // (the chain simply moved on) is an authorization failure.
            let any_pending = stages.iter().any(|s| s.status == StageStatus::Pending);
            if stages[idx].status == StageStatus::Voided
                || !any_pending
                || stages[idx].role.is_branch_stage()
            {
                Err(EngineError::Conflict(
                    "subject status changed, reload and retry".to_string(),
                ))
            } else {
                Ok(StageResolution::NoStage)
            }
        }
        None => Ok(StageResolution::NoStage),
    }
}

fn pending_role_names(stages: &[StageRecord]) -> String {
    let names: Vec<&str> = stages
        .iter()
        .filter(|s| s.status == StageStatus::Pending)
        .map(|s| s.role.as_str())
        .collect();
    names.join(", ")
}

fn make_stage(subject_type: SubjectType, subject_id: u64, role: ApproverRole) -> StageRecord {
    StageRecord {
        id: next_id(),
        subject_type,
        subject_id,
        role,
        status: StageStatus::Pending,
        decided_by: None,
        comments: None,
        created_at: Utc::now(),
        decided_at: None,
    }
}

fn append_event(
    state: &mut EngineState,
    subject_type: SubjectType,
    occurrence_id: u64,
    subject_id: u64,
    request: &DecisionRequest,
    next_stages: Vec<ApproverRole>,
) {
    let event = ApprovalEvent {
        id: next_id(),
        subject_type,
        subject_id,
        actor_role: request.reviewer.role.clone(),
        actor_sub_role: request.reviewer.sub_role.clone(),
        decision: request.decision,
        comments: request.comments.clone(),
        next_stages,
        timestamp: Utc::now(),
    };
    state
        .history
        .entry((subject_type, occurrence_id))
        .or_default()
        .push(event);
}

fn set_occurrence_status(state: &mut EngineState, occurrence_id: u64, status: String) {
    if let Some(occurrence) = state.occurrences.get_mut(&occurrence_id) {
        occurrence.status = status;
    }
}

pub(crate) fn create_proposal(
    state: &mut EngineState,
    occurrence_id: u64,
    input: ProposalInput,
) -> Result<ProposalSnapshot, EngineError> {
    if !state.occurrences.contains_key(&occurrence_id) {
        return Err(EngineError::NotFound("occurrence not found".to_string()));
    }
    if state.proposals.contains_key(&occurrence_id) {
        return Err(EngineError::Validation(
            "a proposal already exists for this occurrence".to_string(),
        ));
    }

    let total_expected_income = input.details.funding.total();
    let proposal = Proposal {
        id: next_id(),
        occurrence_id,
        details: input.details,
        total_expected_income,
        total_expenditure: input.total_expenditure,
        status: ProposalStatus::Draft,
        documents: input.documents,
    };
    state.proposals.insert(occurrence_id, proposal);
    set_occurrence_status(state, occurrence_id, ProposalStatus::Draft.as_str().to_string());

    build_proposal_snapshot(state, occurrence_id)
}

pub(crate) fn update_proposal(
    state: &mut EngineState,
    occurrence_id: u64,
    input: ProposalInput,
) -> Result<ProposalSnapshot, EngineError> {
    let proposal = state
        .proposals
        .get_mut(&occurrence_id)
        .ok_or_else(|| EngineError::NotFound("no proposal filed for this occurrence".to_string()))?;

    if !proposal.status.is_editable() {
        if proposal.status.is_terminal() {
            return Err(EngineError::Forbidden(format!(
                "proposal is already {}",
                proposal.status.as_str()
            )));
        }
        return Err(EngineError::Forbidden(
            "proposal is under review and cannot be edited".to_string(),
        ));
    }

    proposal.total_expected_income = input.details.funding.total();
    proposal.details = input.details;
    proposal.total_expenditure = input.total_expenditure;
    proposal.documents = input.documents;

    build_proposal_snapshot(state, occurrence_id)
}

pub(crate) fn submit_proposal(
    state: &mut EngineState,
    occurrence_id: u64,
) -> Result<ProposalSnapshot, EngineError> {
    let proposal = state
        .proposals
        .get(&occurrence_id)
        .ok_or_else(|| EngineError::NotFound("no proposal filed for this occurrence".to_string()))?;
    let subject_id = proposal.id;

    // The president reviews once per proposal; resubmission after a
    // revision request re-enters at Student Affairs.
    let (entry_role, new_status) = match proposal.status {
        ProposalStatus::Draft => (ApproverRole::President, ProposalStatus::PendingPresident),
        ProposalStatus::RevisionRequested => (
            ApproverRole::StudentAffairs,
            ProposalStatus::PendingStudentAffairs,
        ),
        status if status.is_terminal() => {
            return Err(EngineError::Forbidden(format!(
                "proposal is already {}",
                status.as_str()
            )))
        }
        _ => {
            return Err(EngineError::Forbidden(
                "proposal is already under review".to_string(),
            ))
        }
    };

    state
        .stages
        .entry((SubjectType::Proposal, occurrence_id))
        .or_default()
        .push(make_stage(SubjectType::Proposal, subject_id, entry_role));
    if let Some(proposal) = state.proposals.get_mut(&occurrence_id) {
        proposal.status = new_status;
    }
    set_occurrence_status(state, occurrence_id, new_status.as_str().to_string());

    build_proposal_snapshot(state, occurrence_id)
}

pub(crate) fn decide_proposal(
    state: &mut EngineState,
    occurrence_id: u64,
    request: DecisionRequest,
) -> Result<ProposalSnapshot, EngineError> {
    let proposal = state
        .proposals
        .get(&occurrence_id)
        .ok_or_else(|| EngineError::NotFound("no proposal filed for this occurrence".to_string()))?;
    let subject_id = proposal.id;
    let status = proposal.status;
    let total_expenditure = proposal.total_expenditure;

    validate_decision_comment(request.decision, &request.comments)?;

    let key = (SubjectType::Proposal, occurrence_id);
    let stage_list = state.stages.get(&key).map(|v| v.as_slice()).unwrap_or(&[]);

    let stage_idx = match resolve_target_stage(stage_list, &request)? {
        StageResolution::Pending(idx) => idx,
        StageResolution::NoStage => {
            return Err(no_stage_error_for_proposal(status, stage_list));
        }
    };
    let decided_role = stage_list[stage_idx].role;

    check_amount_ceiling(&request.reviewer, total_expenditure)?;

    let successors: Vec<ApproverRole> = match (request.decision, decided_role) {
        (Decision::Approved, ApproverRole::President) => vec![ApproverRole::StudentAffairs],
        (Decision::Approved, ApproverRole::StudentAffairs) => {
            validate_branch_selection(&request.next_stages)?
        }
        _ => Vec::new(),
    };

    let stages = state.stages.get_mut(&key).expect("stage list present");
    record_stage_decision(&mut stages[stage_idx], &request);

    let new_status = match request.decision {
        Decision::Approved => {
            for role in &successors {
                stages.push(make_stage(SubjectType::Proposal, subject_id, *role));
            }
            match stages.iter().find(|s| s.status == StageStatus::Pending) {
                Some(stage) => proposal_status_for_stage(stage.role),
                None => ProposalStatus::ProposalApproved,
            }
        }
        Decision::Rejected => {
            void_pending_stages(stages);
            ProposalStatus::Rejected
        }
        Decision::RevisionRequested => {
            void_pending_stages(stages);
            ProposalStatus::RevisionRequested
        }
    };

    if let Some(proposal) = state.proposals.get_mut(&occurrence_id) {
        proposal.status = new_status;
    }
    let fanned_out =
        if request.decision == Decision::Approved && decided_role == ApproverRole::StudentAffairs {
            successors
        } else {
            Vec::new()
        };
    append_event(
        state,
        SubjectType::Proposal,
        occurrence_id,
        subject_id,
        &request,
        fanned_out,
    );
    set_occurrence_status(state, occurrence_id, new_status.as_str().to_string());

    info!(
        "proposal {} for occurrence {}: {:?} by {} -> {}",
        subject_id,
        occurrence_id,
        request.decision,
        request.reviewer.sub_role.as_deref().unwrap_or(&request.reviewer.role),
        new_status.as_str()
    );

    build_proposal_snapshot(state, occurrence_id)
}

fn no_stage_error_for_proposal(status: ProposalStatus, stages: &[StageRecord]) -> EngineError {
    match status {
        ProposalStatus::Draft => {
            EngineError::Forbidden("proposal has not been submitted for approval".to_string())
        }
        ProposalStatus::RevisionRequested => {
            EngineError::Forbidden("proposal is awaiting resubmission".to_string())
        }
        status if status.is_terminal() => {
            EngineError::Forbidden(format!("proposal is already {}", status.as_str()))
        }
        _ => EngineError::Forbidden(format!(
            "awaiting a decision from {}",
            pending_role_names(stages)
        )),
    }
}

pub(crate) fn create_expense(
    state: &mut EngineState,
    occurrence_id: u64,
    input: ExpenseInput,
) -> Result<ExpenseSnapshot, EngineError> {
    if !state.occurrences.contains_key(&occurrence_id) {
        return Err(EngineError::NotFound("occurrence not found".to_string()));
    }
    match state.proposals.get(&occurrence_id) {
        Some(proposal) if proposal.status == ProposalStatus::ProposalApproved => {}
        Some(_) | None => {
            return Err(EngineError::Forbidden(
                "event proposal must be approved before filing an expense report".to_string(),
            ))
        }
    }
    if state.expenses.contains_key(&occurrence_id) {
        return Err(EngineError::Validation(
            "an expense report already exists for this occurrence".to_string(),
        ));
    }

    let expense = Expense {
        id: next_id(),
        occurrence_id,
        bills: input.bills,
        event_report_document_url: input.event_report_document_url,
        approval_status: ExpenseStatus::Pending,
        notes: input.notes,
    };
    let subject_id = expense.id;
    state.expenses.insert(occurrence_id, expense);
    state
        .stages
        .entry((SubjectType::Expense, occurrence_id))
        .or_default()
        .push(make_stage(
            SubjectType::Expense,
            subject_id,
            ApproverRole::StudentAffairs,
        ));
    set_occurrence_status(
        state,
        occurrence_id,
        format!("expense_{}", ExpenseStatus::Pending.as_str()),
    );

    build_expense_snapshot(state, occurrence_id)
}

pub(crate) fn update_expense(
    state: &mut EngineState,
    occurrence_id: u64,
    input: ExpenseInput,
) -> Result<ExpenseSnapshot, EngineError> {
    let expense = state.expenses.get_mut(&occurrence_id).ok_or_else(|| {
        EngineError::NotFound("no expense report filed for this occurrence".to_string())
    })?;

    if expense.approval_status != ExpenseStatus::Pending {
        if expense.approval_status.is_terminal() {
            return Err(EngineError::Forbidden(format!(
                "expense report is already {}",
                expense.approval_status.as_str()
            )));
        }
        return Err(EngineError::Forbidden(
            "expense report is under review and cannot be edited".to_string(),
        ));
    }

    expense.bills = input.bills;
    expense.event_report_document_url = input.event_report_document_url;
    expense.notes = input.notes;

    build_expense_snapshot(state, occurrence_id)
}

pub(crate) fn decide_expense(
    state: &mut EngineState,
    occurrence_id: u64,
    request: DecisionRequest,
) -> Result<ExpenseSnapshot, EngineError> {
    if request.decision == Decision::RevisionRequested {
        return Err(EngineError::Validation(
            "revision requests are not supported for expense reports".to_string(),
        ));
    }

    let expense = state.expenses.get(&occurrence_id).ok_or_else(|| {
        EngineError::NotFound("no expense report filed for this occurrence".to_string())
    })?;
    let subject_id = expense.id;
    let status = expense.approval_status;
    let total_expenditure = expense.total_expenditure();

    validate_decision_comment(request.decision, &request.comments)?;

    let key = (SubjectType::Expense, occurrence_id);
    let stage_list = state.stages.get(&key).map(|v| v.as_slice()).unwrap_or(&[]);

    let stage_idx = match resolve_target_stage(stage_list, &request)? {
        StageResolution::Pending(idx) => idx,
        StageResolution::NoStage => {
            if status.is_terminal() {
                return Err(EngineError::Forbidden(format!(
                    "expense report is already {}",
                    status.as_str()
                )));
            }
            return Err(EngineError::Forbidden(format!(
                "awaiting a decision from {}",
                pending_role_names(stage_list)
            )));
        }
    };
    let decided_role = stage_list[stage_idx].role;

    check_amount_ceiling(&request.reviewer, total_expenditure)?;

    let successors: Vec<ApproverRole> =
        if request.decision == Decision::Approved && decided_role == ApproverRole::StudentAffairs {
            validate_branch_selection(&request.next_stages)?
        } else {
            Vec::new()
        };

    let stages = state.stages.get_mut(&key).expect("stage list present");
    record_stage_decision(&mut stages[stage_idx], &request);

    let new_status = match request.decision {
        Decision::Approved => {
            for role in &successors {
                stages.push(make_stage(SubjectType::Expense, subject_id, *role));
            }
            match stages.iter().find(|s| s.status == StageStatus::Pending) {
                Some(stage) => expense_status_for_stage(stage.role),
                None => ExpenseStatus::Approved,
            }
        }
        Decision::Rejected => {
            void_pending_stages(stages);
            ExpenseStatus::Rejected
        }
        Decision::RevisionRequested => unreachable!("rejected above"),
    };

    if let Some(expense) = state.expenses.get_mut(&occurrence_id) {
        expense.approval_status = new_status;
    }
    append_event(
        state,
        SubjectType::Expense,
        occurrence_id,
        subject_id,
        &request,
        successors,
    );
    set_occurrence_status(
        state,
        occurrence_id,
        format!("expense_{}", new_status.as_str()),
    );

    info!(
        "expense {} for occurrence {}: {:?} by {} -> {}",
        subject_id,
        occurrence_id,
        request.decision,
        request.reviewer.sub_role.as_deref().unwrap_or(&request.reviewer.role),
        new_status.as_str()
    );

    build_expense_snapshot(state, occurrence_id)
}

fn record_stage_decision(stage: &mut StageRecord, request: &DecisionRequest) {
    stage.status = match request.decision {
        Decision::Approved => StageStatus::Approved,
        Decision::Rejected => StageStatus::Rejected,
        Decision::RevisionRequested => StageStatus::RevisionRequested,
    };
    stage.decided_by = Some(
        request
            .reviewer
            .sub_role
            .clone()
            .unwrap_or_else(|| request.reviewer.role.clone()),
    );
    stage.comments = if request.comments.is_empty() {
        None
    } else {
        Some(request.comments.clone())
    };
    stage.decided_at = Some(Utc::now());
}

/// First rejection (or revision request) wins: outstanding sibling
/// branches are cancelled rather than left dangling.
fn void_pending_stages(stages: &mut [StageRecord]) {
    for stage in stages.iter_mut() {
        if stage.status == StageStatus::Pending {
            stage.status = StageStatus::Voided;
        }
    }
}

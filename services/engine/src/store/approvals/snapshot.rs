use crate::store::approvals::actor::EngineState;
use crate::types::approval_types::{StageRecord, StageStatus, SubjectType};
use crate::types::errors::EngineError;
use crate::types::expense_types::ExpenseSnapshot;
use crate::types::proposal_types::ProposalSnapshot;
use crate::types::series_types::SeriesSnapshot;

fn awaiting_roles(stages: &[StageRecord]) -> Vec<String> {
    stages
        .iter()
        .filter(|s| s.status == StageStatus::Pending)
        .map(|s| s.role.as_str().to_string())
        .collect()
}

pub(crate) fn build_proposal_snapshot(
    state: &EngineState,
    occurrence_id: u64,
) -> Result<ProposalSnapshot, EngineError> {
    let proposal = state
        .proposals
        .get(&occurrence_id)
        .ok_or_else(|| EngineError::NotFound("no proposal filed for this occurrence".to_string()))?;

    let stages = state
        .stages
        .get(&(SubjectType::Proposal, occurrence_id))
        .cloned()
        .unwrap_or_default();

    Ok(ProposalSnapshot {
        proposal: proposal.clone(),
        awaiting: awaiting_roles(&stages),
        stages,
    })
}

pub(crate) fn build_expense_snapshot(
    state: &EngineState,
    occurrence_id: u64,
) -> Result<ExpenseSnapshot, EngineError> {
    let expense = state.expenses.get(&occurrence_id).ok_or_else(|| {
        EngineError::NotFound("no expense report filed for this occurrence".to_string())
    })?;

    let stages = state
        .stages
        .get(&(SubjectType::Expense, occurrence_id))
        .cloned()
        .unwrap_or_default();

    Ok(ExpenseSnapshot {
        expense: expense.clone(),
        total_expenditure: expense.total_expenditure(),
        awaiting: awaiting_roles(&stages),
        stages,
    })
}

pub(crate) fn build_series_snapshot(
    state: &EngineState,
    series_id: u64,
) -> Result<SeriesSnapshot, EngineError> {
    let series = state
        .series
        .get(&series_id)
        .ok_or_else(|| EngineError::NotFound("series not found".to_string()))?;

    let occurrence_ids = state
        .series_occurrences
        .get(&series_id)
        .cloned()
        .unwrap_or_default();
    let occurrences = occurrence_ids
        .iter()
        .filter_map(|id| state.occurrences.get(id).cloned())
        .collect();

    Ok(SeriesSnapshot {
        id: series.id,
        name: series.name.clone(),
        description: series.description.clone(),
        created_at: series.created_at,
        occurrences,
    })
}

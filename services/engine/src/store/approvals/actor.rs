use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::store::approvals::api::Approvals;
use crate::store::approvals::commands::Command;
use crate::store::approvals::helpers;
use crate::store::approvals::snapshot::{
    build_expense_snapshot, build_proposal_snapshot, build_series_snapshot,
};
use crate::types::approval_types::{ApprovalEvent, StageRecord, SubjectType};
use crate::types::errors::EngineError;
use crate::types::expense_types::Expense;
use crate::types::proposal_types::Proposal;
use crate::types::series_types::{Occurrence, Series, SeriesSnapshot};

/// All workflow state lives behind one command loop, so every decision is
/// a single read-validate-write-append step and concurrent decisions on
/// the same subject are serialized.
pub(crate) struct EngineState {
    pub series: HashMap<u64, Series>,
    pub occurrences: HashMap<u64, Occurrence>,
    pub series_occurrences: HashMap<u64, Vec<u64>>,
    pub proposals: HashMap<u64, Proposal>,
    pub expenses: HashMap<u64, Expense>,
    pub stages: HashMap<(SubjectType, u64), Vec<StageRecord>>,
    pub history: HashMap<(SubjectType, u64), Vec<ApprovalEvent>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            series: HashMap::new(),
            occurrences: HashMap::new(),
            series_occurrences: HashMap::new(),
            proposals: HashMap::new(),
            expenses: HashMap::new(),
            stages: HashMap::new(),
            history: HashMap::new(),
        }
    }
}

pub fn spawn_approvals_actor() -> Approvals {
    let (tx, mut rx) = mpsc::channel::<Command>(1000);

    tokio::spawn(async move {
        let mut state = EngineState::new();

        while let Some(cmd) = rx.recv().await {
            match cmd {
                Command::CreateSeries(name, description, reply) => {
                    let series = Series {
                        id: helpers::next_id(),
                        name,
                        description,
                        created_at: Utc::now(),
                    };
                    state.series.insert(series.id, series.clone());
                    state.series_occurrences.entry(series.id).or_default();
                    let _ = reply.send(Ok(series));
                }
                Command::ListSeries(reply) => {
                    let mut all: Vec<SeriesSnapshot> = state
                        .series
                        .keys()
                        .filter_map(|id| build_series_snapshot(&state, *id).ok())
                        .collect();
                    all.sort_by_key(|s| s.created_at);
                    let _ = reply.send(all);
                }
                Command::GetSeries(series_id, reply) => {
                    let _ = reply.send(build_series_snapshot(&state, series_id));
                }
                Command::CreateOccurrence(series_id, input, reply) => {
                    let result = if !state.series.contains_key(&series_id) {
                        Err(EngineError::NotFound("series not found".to_string()))
                    } else {
                        let occurrence = Occurrence {
                            id: helpers::next_id(),
                            series_id,
                            title: input.title,
                            scheduled_start_date: input.scheduled_start_date,
                            scheduled_end_date: input.scheduled_end_date,
                            status: "created".to_string(),
                            created_at: Utc::now(),
                        };
                        state.occurrences.insert(occurrence.id, occurrence.clone());
                        state
                            .series_occurrences
                            .entry(series_id)
                            .or_default()
                            .push(occurrence.id);
                        Ok(occurrence)
                    };
                    let _ = reply.send(result);
                }

                Command::GetProposal(occurrence_id, reply) => {
                    let _ = reply.send(build_proposal_snapshot(&state, occurrence_id));
                }
                Command::CreateProposal(occurrence_id, input, reply) => {
                    let _ = reply.send(helpers::create_proposal(&mut state, occurrence_id, input));
                }
                Command::UpdateProposal(occurrence_id, input, reply) => {
                    let _ = reply.send(helpers::update_proposal(&mut state, occurrence_id, input));
                }
                Command::SubmitProposal(occurrence_id, reply) => {
                    let _ = reply.send(helpers::submit_proposal(&mut state, occurrence_id));
                }
                Command::DecideProposal(occurrence_id, request, reply) => {
                    let _ =
                        reply.send(helpers::decide_proposal(&mut state, occurrence_id, request));
                }

                Command::GetExpense(occurrence_id, reply) => {
                    let _ = reply.send(build_expense_snapshot(&state, occurrence_id));
                }
                Command::CreateExpense(occurrence_id, input, reply) => {
                    let _ = reply.send(helpers::create_expense(&mut state, occurrence_id, input));
                }
                Command::UpdateExpense(occurrence_id, input, reply) => {
                    let _ = reply.send(helpers::update_expense(&mut state, occurrence_id, input));
                }
                Command::DecideExpense(occurrence_id, request, reply) => {
                    let _ = reply.send(helpers::decide_expense(&mut state, occurrence_id, request));
                }

                Command::ListHistory(subject_type, occurrence_id, reply) => {
                    let result = if !state.occurrences.contains_key(&occurrence_id) {
                        Err(EngineError::NotFound("occurrence not found".to_string()))
                    } else {
                        Ok(state
                            .history
                            .get(&(subject_type, occurrence_id))
                            .cloned()
                            .unwrap_or_default())
                    };
                    let _ = reply.send(result);
                }
            }
        }
    });

    Approvals::new(tx)
}

use tokio::sync::oneshot;

use crate::types::approval_types::{ApprovalEvent, DecisionRequest, SubjectType};
use crate::types::errors::EngineError;
use crate::types::expense_types::{ExpenseInput, ExpenseSnapshot};
use crate::types::proposal_types::{ProposalInput, ProposalSnapshot};
use crate::types::series_types::{Occurrence, OccurrenceInput, Series, SeriesSnapshot};

#[derive(Debug)]
pub enum Command {
    CreateSeries(
        String,
        String,
        oneshot::Sender<Result<Series, EngineError>>,
    ),
    ListSeries(oneshot::Sender<Vec<SeriesSnapshot>>),
    GetSeries(u64, oneshot::Sender<Result<SeriesSnapshot, EngineError>>),
    CreateOccurrence(
        u64,
        OccurrenceInput,
        oneshot::Sender<Result<Occurrence, EngineError>>,
    ),

    GetProposal(u64, oneshot::Sender<Result<ProposalSnapshot, EngineError>>),
    CreateProposal(
        u64,
        ProposalInput,
        oneshot::Sender<Result<ProposalSnapshot, EngineError>>,
    ),
    UpdateProposal(
        u64,
        ProposalInput,
        oneshot::Sender<Result<ProposalSnapshot, EngineError>>,
    ),
    SubmitProposal(u64, oneshot::Sender<Result<ProposalSnapshot, EngineError>>),
    DecideProposal(
        u64,
        DecisionRequest,
        oneshot::Sender<Result<ProposalSnapshot, EngineError>>,
    ),

    GetExpense(u64, oneshot::Sender<Result<ExpenseSnapshot, EngineError>>),
    CreateExpense(
        u64,
        ExpenseInput,
        oneshot::Sender<Result<ExpenseSnapshot, EngineError>>,
    ),
    UpdateExpense(
        u64,
        ExpenseInput,
        oneshot::Sender<Result<ExpenseSnapshot, EngineError>>,
    ),
    DecideExpense(
        u64,
        DecisionRequest,
        oneshot::Sender<Result<ExpenseSnapshot, EngineError>>,
    ),

    ListHistory(
        SubjectType,
        u64,
        oneshot::Sender<Result<Vec<ApprovalEvent>, EngineError>>,
    ),
}

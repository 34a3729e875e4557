use tokio::sync::{mpsc, oneshot};

use crate::store::approvals::commands::Command;
use crate::types::approval_types::{
    ApprovalEvent, ApproverRole, Decision, DecisionRequest, Reviewer, SubjectType,
};
use crate::types::errors::EngineError;
use crate::types::expense_types::{ExpenseInput, ExpenseSnapshot};
use crate::types::proposal_types::{ProposalInput, ProposalSnapshot};
use crate::types::series_types::{Occurrence, OccurrenceInput, Series, SeriesSnapshot};

fn engine_unavailable<T>() -> Result<T, EngineError> {
    Err(EngineError::Internal("approval engine unavailable".into()))
}

/// Clone-able handle to the approval engine actor.
#[derive(Clone)]
pub struct Approvals {
    tx: mpsc::Sender<Command>,
}

impl Approvals {
    pub(crate) fn new(tx: mpsc::Sender<Command>) -> Self {
        Self { tx }
    }

    pub async fn create_series(
        &self,
        name: String,
        description: String,
    ) -> Result<Series, EngineError> {
        let (tx, rx) = oneshot::channel();
        let _ = self.tx.send(Command::CreateSeries(name, description, tx)).await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn list_series(&self) -> Vec<SeriesSnapshot> {
        let (tx, rx) = oneshot::channel();
        let _ = self.tx.send(Command::ListSeries(tx)).await;
        rx.await.unwrap_or_default()
    }

    pub async fn get_series(&self, series_id: u64) -> Result<SeriesSnapshot, EngineError> {
        let (tx, rx) = oneshot::channel();
        let _ = self.tx.send(Command::GetSeries(series_id, tx)).await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn create_occurrence(
        &self,
        series_id: u64,
        input: OccurrenceInput,
    ) -> Result<Occurrence, EngineError> {
        let (tx, rx) = oneshot::channel();
        let _ = self
            .tx
            .send(Command::CreateOccurrence(series_id, input, tx))
            .await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn get_proposal(&self, occurrence_id: u64) -> Result<ProposalSnapshot, EngineError> {
        let (tx, rx) = oneshot::channel();
        let _ = self.tx.send(Command::GetProposal(occurrence_id, tx)).await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn create_proposal(
        &self,
        occurrence_id: u64,
        input: ProposalInput,
    ) -> Result<ProposalSnapshot, EngineError> {
        let (tx, rx) = oneshot::channel();
        let _ = self
            .tx
            .send(Command::CreateProposal(occurrence_id, input, tx))
            .await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn update_proposal(
        &self,
        occurrence_id: u64,
        input: ProposalInput,
    ) -> Result<ProposalSnapshot, EngineError> {
        let (tx, rx) = oneshot::channel();
        let _ = self
            .tx
            .send(Command::UpdateProposal(occurrence_id, input, tx))
            .await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn submit_proposal(
        &self,
        occurrence_id: u64,
    ) -> Result<ProposalSnapshot, EngineError> {
        let (tx, rx) = oneshot::channel();
        let _ = self.tx.send(Command::SubmitProposal(occurrence_id, tx)).await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn approve_proposal(
        &self,
        occurrence_id: u64,
        reviewer: Reviewer,
        comments: String,
        next_stages: Vec<ApproverRole>,
        stage_role: Option<ApproverRole>,
    ) -> Result<ProposalSnapshot, EngineError> {
        let request = DecisionRequest {
            reviewer,
            decision: Decision::Approved,
            comments,
            next_stages,
            stage_role,
        };
        let (tx, rx) = oneshot::channel();
        let _ = self
            .tx
            .send(Command::DecideProposal(occurrence_id, request, tx))
            .await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn reject_proposal(
        &self,
        occurrence_id: u64,
        reviewer: Reviewer,
        comments: String,
        stage_role: Option<ApproverRole>,
    ) -> Result<ProposalSnapshot, EngineError> {
        let request = DecisionRequest {
            reviewer,
            decision: Decision::Rejected,
            comments,
            next_stages: Vec::new(),
            stage_role,
        };
        let (tx, rx) = oneshot::channel();
        let _ = self
            .tx
            .send(Command::DecideProposal(occurrence_id, request, tx))
            .await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn request_proposal_revision(
        &self,
        occurrence_id: u64,
        reviewer: Reviewer,
        comments: String,
        stage_role: Option<ApproverRole>,
    ) -> Result<ProposalSnapshot, EngineError> {
        let request = DecisionRequest {
            reviewer,
            decision: Decision::RevisionRequested,
            comments,
            next_stages: Vec::new(),
            stage_role,
        };
        let (tx, rx) = oneshot::channel();
        let _ = self
            .tx
            .send(Command::DecideProposal(occurrence_id, request, tx))
            .await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn get_expense(&self, occurrence_id: u64) -> Result<ExpenseSnapshot, EngineError> {
        let (tx, rx) = oneshot::channel();
        let _ = self.tx.send(Command::GetExpense(occurrence_id, tx)).await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn create_expense(
        &self,
        occurrence_id: u64,
        input: ExpenseInput,
    ) -> Result<ExpenseSnapshot, EngineError> {
        let (tx, rx) = oneshot::channel();
        let _ = self
            .tx
            .send(Command::CreateExpense(occurrence_id, input, tx))
            .await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn update_expense(
        &self,
        occurrence_id: u64,
        input: ExpenseInput,
    ) -> Result<ExpenseSnapshot, EngineError> {
        let (tx, rx) = oneshot::channel();
        let _ = self
            .tx
            .send(Command::UpdateExpense(occurrence_id, input, tx))
            .await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn approve_expense(
        &self,
        occurrence_id: u64,
        reviewer: Reviewer,
        comments: String,
        next_stages: Vec<ApproverRole>,
        stage_role: Option<ApproverRole>,
    ) -> Result<ExpenseSnapshot, EngineError> {
        let request = DecisionRequest {
            reviewer,
            decision: Decision::Approved,
            comments,
            next_stages,
            stage_role,
        };
        let (tx, rx) = oneshot::channel();
        let _ = self
            .tx
            .send(Command::DecideExpense(occurrence_id, request, tx))
            .await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn reject_expense(
        &self,
        occurrence_id: u64,
        reviewer: Reviewer,
        comments: String,
        stage_role: Option<ApproverRole>,
    ) -> Result<ExpenseSnapshot, EngineError> {
        let request = DecisionRequest {
            reviewer,
            decision: Decision::Rejected,
            comments,
            next_stages: Vec::new(),
            stage_role,
        };
        let (tx, rx) = oneshot::channel();
        let _ = self
            .tx
            .send(Command::DecideExpense(occurrence_id, request, tx))
            .await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }

    pub async fn approval_history(
        &self,
        subject_type: SubjectType,
        occurrence_id: u64,
    ) -> Result<Vec<ApprovalEvent>, EngineError> {
        let (tx, rx) = oneshot::channel();
        let _ = self
            .tx
            .send(Command::ListHistory(subject_type, occurrence_id, tx))
            .await;
        rx.await.unwrap_or_else(|_| engine_unavailable())
    }
}
